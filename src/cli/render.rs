//! Plain-text renderings of the budget and listing views.

use std::fmt::Write as _;

use crate::{
    currency::AmountFormat,
    ledger::{BudgetProgress, LedgerState, LedgerSummary, LinkedAccount, MonthlyFigure},
    listings::{Listing, ListingState, SearchStatus},
};

use super::output::{alert_if, styled, MessageKind};

pub fn summary_text(summary: &LedgerSummary, format: &AmountFormat) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", styled(MessageKind::Section, "Budget"));
    let _ = writeln!(out, "Total balance:  {}", format.display(summary.balance));
    let _ = writeln!(out, "Total income:   {}", format.display(summary.total_income));
    let _ = writeln!(out, "Total expenses: {}", format.display(summary.total_expenses));

    let _ = writeln!(out, "\n{}", styled(MessageKind::Section, "Spending by category"));
    if summary.chart_series.is_empty() {
        let _ = writeln!(out, "(no expenses)");
    }
    for slice in &summary.chart_series {
        let share = if summary.total_expenses > 0.0 {
            slice.value / summary.total_expenses * 100.0
        } else {
            0.0
        };
        let _ = writeln!(
            out,
            "{:<16} {:>14} {:>5.0}%  {}",
            slice.name,
            format.display(slice.value),
            share,
            slice.color
        );
    }
    out
}

pub fn progress_text(progress: &[BudgetProgress], format: &AmountFormat) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", styled(MessageKind::Section, "Budget overview"));
    for entry in progress {
        let mut line = format!(
            "{:<16} {} / {}  {:.1}% used  remaining {}",
            entry.category,
            format.display(entry.spent),
            format.display(entry.allocated),
            entry.percentage,
            format.display(entry.remaining),
        );
        if entry.is_over_budget {
            line.push_str("  Over budget!");
        }
        let _ = writeln!(out, "{}", alert_if(entry.is_over_budget, line));
    }
    out
}

pub fn linked_account_text(account: &LinkedAccount, format: &AmountFormat) -> String {
    format!(
        "{} balance: {} (not connected)\n",
        account.provider,
        format.display(account.balance)
    )
}

pub fn monthly_text(overview: &[MonthlyFigure], format: &AmountFormat) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", styled(MessageKind::Section, "Monthly overview"));
    for figure in overview {
        let _ = writeln!(
            out,
            "{:<4} income {:>12}  expenses {:>12}",
            figure.month,
            format.display(figure.income),
            format.display(figure.expenses)
        );
    }
    out
}

pub fn transactions_text(state: &LedgerState, format: &AmountFormat) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", styled(MessageKind::Section, "Recent transactions"));
    for txn in &state.transactions {
        let _ = writeln!(
            out,
            "{}  {}{:<12} {:<14} {}",
            txn.date,
            txn.kind.sign(),
            format.display(txn.amount),
            txn.category,
            txn.description
        );
    }
    out
}

fn listing_line(listing: &Listing) -> String {
    let saved = if listing.is_saved() { "*" } else { " " };
    let rating = listing
        .rating
        .map(|rating| format!("  rating {rating:.1}"))
        .unwrap_or_default();
    format!(
        "{saved} [{}] {:<38} €{:<7} {:>5.0} m²  {} rooms  {:<10} {}{}",
        listing.id,
        listing.title,
        listing.price,
        listing.area,
        listing.rooms,
        listing.kind.label(),
        listing.location,
        rating
    )
}

pub fn listings_text(state: &ListingState, view: &[Listing]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", styled(MessageKind::Section, "House search"));
    let _ = writeln!(
        out,
        "{} of {} listings match",
        view.len(),
        state.listings.len()
    );
    if let SearchStatus::Failed(reason) = &state.status {
        let _ = writeln!(out, "{}", styled(MessageKind::Warning, reason));
    }
    if view.is_empty() {
        let _ = writeln!(out, "No listings match the current filters.");
    }
    for listing in view {
        let _ = writeln!(out, "{}", listing_line(listing));
    }
    out
}
