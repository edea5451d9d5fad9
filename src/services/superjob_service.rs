use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::instrument;
use url::Url;

use crate::dto::superjob_dto::SuperJobPage;
use crate::error::{Error, Result};
use crate::models::search_query::SearchQuery;
use crate::models::vacancy::ProviderKind;
use crate::services::provider::VacancyProvider;
use crate::utils::http::{build_client, get_listing};

pub const API_KEY_HEADER: &str = "x-api-app-id";

#[derive(Clone)]
pub struct SuperJobService {
    client: Client,
    base_url: Url,
}

impl SuperJobService {
    pub fn new(base_url: Url, api_key: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut value = HeaderValue::from_str(api_key)
            .map_err(|e| Error::Config(format!("Invalid SuperJob API key: {}", e)))?;
        value.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), value);

        Ok(Self {
            client: build_client(headers, timeout)?,
            base_url,
        })
    }
}

#[async_trait]
impl VacancyProvider for SuperJobService {
    fn kind(&self) -> ProviderKind {
        ProviderKind::SuperJob
    }

    #[instrument(skip(self), fields(page = query.page))]
    async fn fetch_page(&self, query: &SearchQuery) -> Result<Vec<JsonValue>> {
        let page: SuperJobPage =
            get_listing(&self.client, self.kind(), &self.base_url, query).await?;
        if let Some(total) = page.total {
            tracing::debug!(total, "SuperJob reported total matches");
        }
        Ok(page.objects)
    }
}
