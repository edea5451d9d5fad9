use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, USER_AGENT},
    Client,
};
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::instrument;
use url::Url;

use crate::dto::headhunter_dto::HeadHunterPage;
use crate::error::{Error, Result};
use crate::models::search_query::SearchQuery;
use crate::models::vacancy::ProviderKind;
use crate::services::provider::VacancyProvider;
use crate::utils::http::{build_client, get_listing};

#[derive(Clone)]
pub struct HeadHunterService {
    client: Client,
    base_url: Url,
}

impl HeadHunterService {
    /// HeadHunter identifies callers by a descriptive `User-Agent`.
    pub fn new(base_url: Url, user_agent: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(user_agent)
            .map_err(|e| Error::Config(format!("Invalid HeadHunter user agent: {}", e)))?;
        headers.insert(USER_AGENT, value);

        Ok(Self {
            client: build_client(headers, timeout)?,
            base_url,
        })
    }
}

#[async_trait]
impl VacancyProvider for HeadHunterService {
    fn kind(&self) -> ProviderKind {
        ProviderKind::HeadHunter
    }

    #[instrument(skip(self), fields(page = query.page))]
    async fn fetch_page(&self, query: &SearchQuery) -> Result<Vec<JsonValue>> {
        let page: HeadHunterPage =
            get_listing(&self.client, self.kind(), &self.base_url, query).await?;
        Ok(page.items)
    }
}
