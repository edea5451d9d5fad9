use reqwest::{header::HeaderMap, Client};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::models::search_query::SearchQuery;
use crate::models::vacancy::ProviderKind;

pub fn build_client(headers: HeaderMap, timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// Issues one GET for `query` and decodes the provider envelope `T`.
pub async fn get_listing<T: DeserializeOwned>(
    client: &Client,
    provider: ProviderKind,
    url: &url::Url,
    query: &SearchQuery,
) -> Result<T> {
    let response = client.get(url.clone()).query(query).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(%provider, status = status.as_u16(), %body, "Provider request rejected");
        return Err(Error::Provider {
            provider,
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await?;
    serde_json::from_slice::<T>(&body).map_err(|e| Error::UnexpectedResponse {
        provider,
        reason: e.to_string(),
    })
}
