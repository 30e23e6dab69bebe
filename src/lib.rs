#![doc(test(attr(deny(warnings))))]

//! Budget House derives the figures behind a personal budget tracker and a
//! property-listing browser: ledger totals, category spend and budget
//! progress on one side, filtered and ordered listing views on the other.

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod listings;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget House tracing initialized.");
    });
}
