use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::api::error::FetchError;
use crate::api::query::PageQuery;
use crate::api::types::PageResult;
use crate::config::ApiConfig;

/// Source of character pages.
///
/// Implemented over HTTP by [`HttpCharacterApi`]; tests substitute scripted
/// implementations.
pub trait CharacterApi: Send + Sync + 'static {
    fn fetch_page(
        &self,
        query: PageQuery,
    ) -> impl Future<Output = Result<PageResult, FetchError>> + Send;
}

/// Character listing client for the public REST API.
pub struct HttpCharacterApi {
    client: Client,
    base_url: String,
}

impl HttpCharacterApi {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(|source| FetchError::Client { source })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl CharacterApi for HttpCharacterApi {
    async fn fetch_page(&self, query: PageQuery) -> Result<PageResult, FetchError> {
        let url = query.url(&self.base_url);
        tracing::debug!(%url, "Fetching character page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|source| FetchError::Network {
            url: url.clone(),
            source,
        })?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: error_message(&body)
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string()),
            });
        }

        let json: Value =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
        let page = PageResult::from_json(&json);
        tracing::debug!(
            %url,
            characters = page.characters.len(),
            total_pages = page.total_pages,
            "Character page received"
        );
        Ok(page)
    }
}

/// The API reports failures as `{"error": "..."}`.
fn error_message(body: &[u8]) -> Option<String> {
    let json: Value = serde_json::from_slice(body).ok()?;
    json.get("error")?.as_str().map(str::to_string)
}
