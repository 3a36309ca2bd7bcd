//! Catalog-browsing client.
//!
//! Fetches a flat product list from the shop backend, organizes it into a
//! two-level category tree for navigation, and aggregates the backend's
//! three recommendation feeds (content-based, hybrid, previously viewed)
//! into a single gap-tolerant detail view. Transport shapes live in
//! [`sources`]; presentation is a [`render::RenderSink`] the facade's
//! callers drive.

pub mod catalog;
pub mod error;
pub mod facade;
pub mod logging;
pub mod model;
pub mod normalization;
pub mod recommend;
pub mod render;
pub mod sources;

pub mod util {
    pub mod env;
}

pub use error::CatalogError;
pub use facade::{CatalogFacade, DetailView};
pub use model::{Product, RecommendationBundle};
