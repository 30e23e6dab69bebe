//! Simulated remote listing source.
//!
//! There is no scraper behind this: [`MockListingSource`] waits for a fixed
//! delay and hands back canned listings. Every call can be cancelled through
//! a [`CancellationToken`] and reports an explicit outcome, so a real
//! network-backed source can slot in behind [`ListingSource`] later.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio_util::sync::CancellationToken;

use crate::errors::SearchError;

use super::{seed, Listing, SearchFilters};

pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_DETAILS_DELAY: Duration = Duration::from_millis(500);

#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Returns an additional batch of listings, ignoring any criteria.
    async fn fetch_more(&self, cancel: &CancellationToken) -> Result<Vec<Listing>, SearchError>;

    /// Returns the source's listings that pass `filters`.
    async fn search(
        &self,
        filters: &SearchFilters,
        cancel: &CancellationToken,
    ) -> Result<Vec<Listing>, SearchError>;

    /// Looks up the full record behind a listing link.
    async fn details(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<Listing>, SearchError>;
}

#[derive(Debug, Clone)]
pub struct MockListingSource {
    fetch_delay: Duration,
    search_delay: Duration,
    details_delay: Duration,
    failure: Option<String>,
}

impl Default for MockListingSource {
    fn default() -> Self {
        Self {
            fetch_delay: DEFAULT_FETCH_DELAY,
            search_delay: DEFAULT_SEARCH_DELAY,
            details_delay: DEFAULT_DETAILS_DELAY,
            failure: None,
        }
    }
}

impl MockListingSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    pub fn with_search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = delay;
        self
    }

    /// Makes every call fail with a network error after its delay.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    async fn settle(&self, delay: Duration, cancel: &CancellationToken) -> Result<(), SearchError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(SearchError::Cancelled),
            _ = tokio::time::sleep(delay) => {}
        }
        match &self.failure {
            Some(message) => Err(SearchError::Network(message.clone())),
            None => Ok(()),
        }
    }
}

fn invocation_stamp() -> String {
    format!("sslv-{}", Utc::now().timestamp_millis())
}

#[async_trait]
impl ListingSource for MockListingSource {
    async fn fetch_more(&self, cancel: &CancellationToken) -> Result<Vec<Listing>, SearchError> {
        self.settle(self.fetch_delay, cancel).await?;
        let batch = seed::more_listings(&invocation_stamp());
        tracing::debug!(count = batch.len(), "remote fetch completed");
        Ok(batch)
    }

    async fn search(
        &self,
        filters: &SearchFilters,
        cancel: &CancellationToken,
    ) -> Result<Vec<Listing>, SearchError> {
        self.settle(self.search_delay, cancel).await?;
        let results: Vec<Listing> = seed::search_listings(&invocation_stamp())
            .into_iter()
            .filter(|listing| filters.accepts(listing))
            .collect();
        tracing::debug!(count = results.len(), "remote search completed");
        Ok(results)
    }

    async fn details(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<Listing>, SearchError> {
        self.settle(self.details_delay, cancel).await?;
        tracing::debug!(%url, "listing details are not available from the mock source");
        Ok(None)
    }
}
