mod common;

use budget_house::listings::{
    query_listings, toggle_saved, KindFilter, ListingState, SearchCriteria, SortDirection,
    SortKey,
};
use common::fixture_listings;

fn prices(criteria: &SearchCriteria) -> Vec<u32> {
    query_listings(&fixture_listings(), criteria)
        .iter()
        .map(|listing| listing.price)
        .collect()
}

#[test]
fn max_price_scenario() {
    let criteria = SearchCriteria::default().with_max_price(40000);
    assert_eq!(prices(&criteria), vec![28000, 35000, 38000]);
}

#[test]
fn output_is_a_subset_honouring_every_predicate() {
    let listings = fixture_listings();
    let criteria_set = [
        SearchCriteria::default(),
        SearchCriteria::default().with_query("center").with_max_price(50000),
        SearchCriteria::default()
            .with_max_price(45000)
            .with_min_area(60.0)
            .with_kind(KindFilter::Apartment),
        SearchCriteria::default().with_query("nowhere"),
    ];
    for criteria in &criteria_set {
        let view = query_listings(&listings, criteria);
        assert!(view.len() <= listings.len());
        let needle = criteria.query.to_lowercase();
        for listing in &view {
            assert!(listings.contains(listing));
            assert!(listing.matches_text(&needle));
            assert!(listing.price <= criteria.max_price);
            assert!(listing.area >= criteria.min_area);
            assert!(criteria.kind.accepts(listing.kind));
        }
    }
}

#[test]
fn descending_reverses_strictly_ordered_keys() {
    let wide = SearchCriteria::default().with_max_price(u32::MAX);
    let ascending = prices(&wide.clone().sorted_by(SortKey::Price, SortDirection::Ascending));
    let mut descending = prices(&wide.sorted_by(SortKey::Price, SortDirection::Descending));
    descending.reverse();
    assert_eq!(ascending, descending);
}

#[test]
fn equal_prices_keep_input_order_both_ways() {
    let mut listings = fixture_listings();
    for listing in listings.iter_mut().filter(|l| l.id == "1" || l.id == "4") {
        listing.price = 30000;
    }
    let ids = |direction| -> Vec<String> {
        let criteria = SearchCriteria::default()
            .with_max_price(u32::MAX)
            .sorted_by(SortKey::Price, direction);
        query_listings(&listings, &criteria)
            .into_iter()
            .map(|listing| listing.id)
            .collect()
    };
    assert_eq!(ids(SortDirection::Ascending), vec!["3", "1", "4", "5", "2"]);
    assert_eq!(ids(SortDirection::Descending), vec!["2", "5", "1", "4", "3"]);
}

#[test]
fn querying_never_mutates_the_source() {
    let listings = fixture_listings();
    let snapshot = listings.clone();
    let criteria = SearchCriteria::default().sorted_by(SortKey::Area, SortDirection::Descending);
    let _ = query_listings(&listings, &criteria);
    assert_eq!(listings, snapshot);
}

#[test]
fn double_toggle_restores_and_isolates() {
    let listings = fixture_listings();
    let once = toggle_saved(&listings, "3");
    for (before, after) in listings.iter().zip(&once) {
        if before.id == "3" {
            assert_ne!(before.is_saved(), after.is_saved());
        } else {
            assert_eq!(before.saved, after.saved);
        }
    }
    let twice = toggle_saved(&once, "3");
    assert_eq!(twice, listings);
}

#[test]
fn saved_flag_survives_criteria_changes() {
    let state = ListingState::demo().toggle_saved("1");
    let narrowed = state.with_criteria(SearchCriteria::default().with_query("riga"));
    assert_eq!(narrowed.saved().len(), 1);
    assert!(narrowed.view().iter().any(|listing| listing.is_saved()));
}
