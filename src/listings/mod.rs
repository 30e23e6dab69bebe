//! Property listings: the collection, search criteria, and the query engine over them.

pub mod criteria;
pub mod listing;
pub mod query;
pub mod remote;
pub mod seed;
pub mod state;

pub use criteria::{
    KindFilter, SearchCriteria, SearchFilters, SortDirection, SortKey, DEFAULT_MAX_PRICE,
};
pub use listing::{Listing, PropertyKind};
pub use query::{query_listings, saved_listings, toggle_saved};
pub use remote::{ListingSource, MockListingSource};
pub use state::{ListingState, SearchStatus};
