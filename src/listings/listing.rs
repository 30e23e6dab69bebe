use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    House,
    Apartment,
}

impl PropertyKind {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyKind::House => "house",
            PropertyKind::Apartment => "apartment",
        }
    }
}

/// A property offered for sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub price: u32,
    pub location: String,
    pub area: f64,
    pub rooms: u32,
    pub bathrooms: u32,
    pub description: String,
    pub image_url: String,
    pub url: String,
    pub kind: PropertyKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub saved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u32>,
}

impl Listing {
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Rating used for ordering; unrated listings count as 0.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Case-insensitive match against title or location.
    pub fn matches_text(&self, needle_lowercase: &str) -> bool {
        self.title.to_lowercase().contains(needle_lowercase)
            || self.location.to_lowercase().contains(needle_lowercase)
    }
}
