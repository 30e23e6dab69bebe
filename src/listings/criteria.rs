use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PropertyKind;

/// Upper price bound the search screen starts with.
pub const DEFAULT_MAX_PRICE: u32 = 40_000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    House,
    Apartment,
}

impl KindFilter {
    pub fn accepts(&self, kind: PropertyKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::House => kind == PropertyKind::House,
            KindFilter::Apartment => kind == PropertyKind::Apartment,
        }
    }
}

impl FromStr for KindFilter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "all" => Ok(KindFilter::All),
            "house" => Ok(KindFilter::House),
            "apartment" => Ok(KindFilter::Apartment),
            other => Err(format!("unknown property kind `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Price,
    Area,
    Rooms,
    Rating,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Filter and sort configuration for the listing view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchCriteria {
    pub query: String,
    pub max_price: u32,
    pub min_area: f64,
    pub kind: KindFilter,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            max_price: DEFAULT_MAX_PRICE,
            min_area: 0.0,
            kind: KindFilter::All,
            sort_key: SortKey::Price,
            direction: SortDirection::Ascending,
        }
    }
}

impl SearchCriteria {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_max_price(mut self, max_price: u32) -> Self {
        self.max_price = max_price;
        self
    }

    pub fn with_min_area(mut self, min_area: f64) -> Self {
        self.min_area = min_area;
        self
    }

    pub fn with_kind(mut self, kind: KindFilter) -> Self {
        self.kind = kind;
        self
    }

    pub fn sorted_by(mut self, sort_key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = sort_key;
        self.direction = direction;
        self
    }
}

/// Parameters accepted by a remote source search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchFilters {
    pub max_price: u32,
    pub min_area: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<KindFilter>,
}

impl SearchFilters {
    pub fn accepts(&self, listing: &super::Listing) -> bool {
        if listing.price > self.max_price || listing.area < self.min_area {
            return false;
        }
        if let Some(location) = self.location.as_deref() {
            if !listing
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }
        self.kind.map_or(true, |kind| kind.accepts(listing.kind))
    }
}

impl From<&SearchCriteria> for SearchFilters {
    fn from(criteria: &SearchCriteria) -> Self {
        let query = criteria.query.trim();
        Self {
            max_price: criteria.max_price,
            min_area: criteria.min_area,
            location: (!query.is_empty()).then(|| query.to_string()),
            kind: Some(criteria.kind),
        }
    }
}
