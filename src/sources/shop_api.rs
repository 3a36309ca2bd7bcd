use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use super::{ProductSource, RecommendationSource, SourceError};
use crate::model::{Product, RecommendationBundle};
use crate::util::env as env_util;

/// HTTP client for the catalog backend.
///
/// Endpoints consumed:
/// - `GET /data` - full catalog as a JSON array
/// - `GET /data/{id}` - single record (404 when unknown)
/// - `GET /recommendations/{id}` - the three recommendation id lists
///
/// The backend's `/data/paginated` endpoint is deliberately not consumed.
#[derive(Debug, Clone)]
pub struct ShopApiClient {
    base_url: String,
    http: Client,
}

impl ShopApiClient {
    /// Build a client against an explicit base URL, or the
    /// `SHOP_API_BASE_URL` env default. `timeout_secs` falls back to
    /// `SHOP_API_TIMEOUT_SECS`.
    pub fn new(base_url: Option<&str>, timeout_secs: Option<u64>) -> Result<Self, SourceError> {
        let base_url = base_url
            .map(str::to_string)
            .unwrap_or_else(env_util::shop_api_base_url)
            .trim_end_matches('/')
            .to_string();
        let timeout_secs = timeout_secs.unwrap_or_else(env_util::shop_api_timeout_secs);
        let http = Client::builder()
            .user_agent(concat!("shopview/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, SourceError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        debug!(target: "shop_api", %url, "GET");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(SourceError::Http {
                status: status.as_u16(),
                body: truncate_for_log(body, 300),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ProductSource for ShopApiClient {
    async fn fetch_all(&self) -> Result<Vec<Product>, SourceError> {
        self.get_json("data").await
    }

    async fn fetch_one(&self, id: &str) -> Result<Product, SourceError> {
        let path = format!("data/{}", urlencoding::encode(id));
        match self.get_json(&path).await {
            Err(SourceError::Http { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(SourceError::NotFound(id.to_string()))
            }
            other => other,
        }
    }
}

#[async_trait]
impl RecommendationSource for ShopApiClient {
    async fn fetch_bundle(&self, id: &str) -> Result<RecommendationBundle, SourceError> {
        self.get_json(&format!("recommendations/{}", urlencoding::encode(id)))
            .await
    }
}

fn truncate_for_log(s: String, max_len: usize) -> String {
    if s.len() <= max_len {
        return s;
    }
    let mut cut = max_len;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    let mut out = s[..cut].to_string();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = ShopApiClient::new(Some("http://shop.test/"), Some(1)).unwrap();
        assert_eq!(client.base_url(), "http://shop.test");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let short = truncate_for_log("ok".to_string(), 300);
        assert_eq!(short, "ok");

        let long = truncate_for_log("é".repeat(200), 5);
        assert!(long.ends_with('…'));
        assert!(long.len() <= 5 + '…'.len_utf8());
    }
}
