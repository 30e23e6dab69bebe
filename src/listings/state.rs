use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::errors::SearchError;

use super::{
    query::{query_listings, saved_listings, toggle_saved},
    remote::ListingSource,
    seed, Listing, SearchCriteria,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

/// The search screen's state: the collection, the criteria, and whether a
/// remote search is in flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListingState {
    pub listings: Vec<Listing>,
    pub criteria: SearchCriteria,
    pub status: SearchStatus,
}

impl ListingState {
    pub fn new(listings: Vec<Listing>, criteria: SearchCriteria) -> Self {
        Self {
            listings,
            criteria,
            status: SearchStatus::Idle,
        }
    }

    pub fn demo() -> Self {
        Self::new(seed::demo_listings(), SearchCriteria::default())
    }

    /// The filtered, ordered view for the current criteria.
    pub fn view(&self) -> Vec<Listing> {
        query_listings(&self.listings, &self.criteria)
    }

    pub fn saved(&self) -> Vec<&Listing> {
        saved_listings(&self.listings)
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    pub fn with_criteria(&self, criteria: SearchCriteria) -> Self {
        Self {
            criteria,
            ..self.clone()
        }
    }

    pub fn toggle_saved(&self, id: &str) -> Self {
        Self {
            listings: toggle_saved(&self.listings, id),
            ..self.clone()
        }
    }

    pub fn begin_search(&self) -> Self {
        Self {
            status: SearchStatus::Loading,
            ..self.clone()
        }
    }

    /// Appends a fetched batch, or records the failure and keeps the
    /// collection as it was.
    pub fn finish_search(&self, outcome: Result<Vec<Listing>, SearchError>) -> Self {
        match outcome {
            Ok(batch) => {
                let mut listings = self.listings.clone();
                listings.extend(batch);
                Self {
                    listings,
                    criteria: self.criteria.clone(),
                    status: SearchStatus::Idle,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "remote search failed");
                Self {
                    status: SearchStatus::Failed(err.to_string()),
                    ..self.clone()
                }
            }
        }
    }

    /// Runs [`ListingSource::fetch_more`] and folds its outcome into the state.
    pub async fn fetch_more<S>(&self, source: &S, cancel: &CancellationToken) -> Self
    where
        S: ListingSource + ?Sized,
    {
        let pending = self.begin_search();
        let outcome = source.fetch_more(cancel).await;
        pending.finish_search(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::{remote::MockListingSource, KindFilter};

    #[test]
    fn view_reflects_criteria_changes() {
        let state = ListingState::demo();
        assert_eq!(state.view().len(), 3);

        let wider = state.with_criteria(SearchCriteria::default().with_max_price(50000));
        assert_eq!(wider.view().len(), 5);

        let houses = wider.with_criteria(
            SearchCriteria::default()
                .with_max_price(50000)
                .with_kind(KindFilter::House),
        );
        assert_eq!(houses.view().len(), 2);
        // source collection is untouched by querying
        assert_eq!(houses.listings.len(), 5);
    }

    #[test]
    fn failed_search_keeps_collection() {
        let state = ListingState::demo().begin_search();
        assert!(state.is_loading());
        let failed = state.finish_search(Err(SearchError::Network("offline".into())));
        assert_eq!(failed.listings, state.listings);
        assert_eq!(
            failed.status,
            SearchStatus::Failed("Network error: offline".into())
        );
    }

    #[test]
    fn pending_search_state_is_still_queryable() {
        let state = ListingState::demo().begin_search();
        assert_eq!(state.view().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_more_appends_batch() {
        let state = ListingState::demo();
        let next = state
            .fetch_more(&MockListingSource::new(), &CancellationToken::new())
            .await;
        assert_eq!(next.listings.len(), 7);
        assert_eq!(next.status, SearchStatus::Idle);
        assert_eq!(next.listings[..5], state.listings[..]);
    }
}
