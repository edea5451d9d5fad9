use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::error::Result;
use crate::models::search_query::SearchQuery;
use crate::models::vacancy::ProviderKind;

/// One external job-search API. Items are returned unparsed; only the
/// normalizer knows each provider's schema.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VacancyProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Fetches a single page. Never retries.
    async fn fetch_page(&self, query: &SearchQuery) -> Result<Vec<JsonValue>>;
}
