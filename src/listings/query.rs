//! Filtering, ordering and save toggling over a listing collection.

use std::cmp::Ordering;

use super::{Listing, SearchCriteria, SortDirection, SortKey};

/// Returns the listings matching `criteria`, ordered by its sort key.
///
/// Every predicate must hold: text (title or location) matches the query,
/// price is at most `max_price`, area is at least `min_area`, and the kind
/// passes the kind filter. Ties keep their input order in both directions.
pub fn query_listings(listings: &[Listing], criteria: &SearchCriteria) -> Vec<Listing> {
    let needle = criteria.query.to_lowercase();
    let mut view: Vec<Listing> = listings
        .iter()
        .filter(|listing| matches_criteria(listing, criteria, &needle))
        .cloned()
        .collect();

    // `sort_by` is stable; descending flips the comparison, not the result.
    view.sort_by(|a, b| {
        let ordering = compare_by(a, b, criteria.sort_key);
        match criteria.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    tracing::debug!(
        total = listings.len(),
        matched = view.len(),
        "listing query evaluated"
    );
    view
}

fn matches_criteria(listing: &Listing, criteria: &SearchCriteria, needle: &str) -> bool {
    listing.matches_text(needle)
        && listing.price <= criteria.max_price
        && listing.area >= criteria.min_area
        && criteria.kind.accepts(listing.kind)
}

fn compare_by(a: &Listing, b: &Listing, key: SortKey) -> Ordering {
    match key {
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Area => a.area.total_cmp(&b.area),
        SortKey::Rooms => a.rooms.cmp(&b.rooms),
        SortKey::Rating => a.rating_or_zero().total_cmp(&b.rating_or_zero()),
    }
}

/// Returns a copy of `listings` with `saved` flipped on the listing `id`.
pub fn toggle_saved(listings: &[Listing], id: &str) -> Vec<Listing> {
    listings
        .iter()
        .map(|listing| {
            if listing.id == id {
                let mut toggled = listing.clone();
                toggled.saved = !listing.saved;
                toggled
            } else {
                listing.clone()
            }
        })
        .collect()
}

pub fn saved_listings(listings: &[Listing]) -> Vec<&Listing> {
    listings.iter().filter(|listing| listing.is_saved()).collect()
}
