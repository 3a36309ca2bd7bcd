// Collaborator contracts for the catalog backend

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Product, RecommendationBundle};

pub mod shop_api;

pub use shop_api::ShopApiClient;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("http {status}: {body}")]
    Http { status: u16, body: String },
    #[error("product not found: {0}")]
    NotFound(String),
    #[error("network: {0}")]
    Net(#[from] reqwest::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Catalog record source.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// The full catalog as a flat record list.
    async fn fetch_all(&self) -> Result<Vec<Product>, SourceError>;

    /// A single record by id.
    async fn fetch_one(&self, id: &str) -> Result<Product, SourceError>;
}

/// Recommendation id-list source.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    /// The three raw id lists for one product.
    async fn fetch_bundle(&self, id: &str) -> Result<RecommendationBundle, SourceError>;
}
