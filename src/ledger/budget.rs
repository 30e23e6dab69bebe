use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A spending guardrail for a specific category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryBudget {
    pub category: String,
    pub allocated: f64,
    pub spent: f64,
    pub color: String,
}

impl CategoryBudget {
    pub fn new(category: impl Into<String>, allocated: f64, color: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            allocated,
            spent: 0.0,
            color: color.into(),
        }
    }

    pub fn with_spent(mut self, spent: f64) -> Self {
        self.spent = spent;
        self
    }

    /// Exact, case-sensitive label match.
    pub fn matches(&self, category: &str) -> bool {
        self.category == category
    }

    pub fn progress(&self) -> BudgetProgress {
        BudgetProgress::from_parts(&self.category, self.allocated, self.spent)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetStatus {
    UnderBudget,
    OnTrack,
    OverBudget,
    Empty,
}

/// Read-only progress figures for one category budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetProgress {
    pub category: String,
    pub allocated: f64,
    pub spent: f64,
    pub remaining: f64,
    pub percentage: f64,
    pub is_over_budget: bool,
    pub status: BudgetStatus,
}

impl BudgetProgress {
    /// Derives progress figures.
    ///
    /// A zero allocation never yields a non-finite ratio: nothing spent
    /// reads as 0%, any spend reads as 100% and over budget.
    pub fn from_parts(category: &str, allocated: f64, spent: f64) -> Self {
        let remaining = allocated - spent;
        let zero_allocation = allocated.abs() < f64::EPSILON;
        let (percentage, is_over_budget) = if !zero_allocation {
            let percentage = (spent / allocated) * 100.0;
            (percentage, percentage > 100.0)
        } else if spent.abs() > f64::EPSILON {
            (100.0, true)
        } else {
            (0.0, false)
        };
        let status = if zero_allocation && spent.abs() < f64::EPSILON {
            BudgetStatus::Empty
        } else if is_over_budget {
            BudgetStatus::OverBudget
        } else {
            match spent.partial_cmp(&allocated).unwrap_or(Ordering::Equal) {
                Ordering::Less => BudgetStatus::UnderBudget,
                _ => BudgetStatus::OnTrack,
            }
        };
        Self {
            category: category.to_string(),
            allocated,
            spent,
            remaining,
            percentage,
            is_over_budget,
            status,
        }
    }

    /// Width of a progress bar, in percent, capped at a full bar.
    pub fn bar_width(&self) -> f64 {
        self.percentage.clamp(0.0, 100.0)
    }
}

pub fn budget_progress(budget: &CategoryBudget) -> BudgetProgress {
    budget.progress()
}

pub fn progress_for_all(budgets: &[CategoryBudget]) -> Vec<BudgetProgress> {
    budgets.iter().map(CategoryBudget::progress).collect()
}
