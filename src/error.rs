use thiserror::Error;

use crate::sources::SourceError;

/// Failure taxonomy for the browsing pipeline.
///
/// Only whole-batch failures reach callers; single-record failures are
/// absorbed at the lowest layer that can tolerate them so one bad id never
/// blanks out a whole view. Nothing here is fatal to the process.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The whole-catalog fetch failed. Recover by presenting an empty
    /// catalog and a retry prompt.
    #[error("catalog load failed: {0}")]
    CatalogLoadFailed(#[source] SourceError),

    /// The recommendation bundle fetch failed. Recover by presenting the
    /// detail view without recommendation sections.
    #[error("recommendation fetch failed: {0}")]
    RecommendationFetchFailed(#[source] SourceError),

    /// A single id could not be resolved to a record. Absorbed inside the
    /// resolver for recommendation ids; surfaced only for the detail
    /// product itself.
    #[error("lookup failed for product {id}: {source}")]
    LookupFailed { id: String, source: SourceError },
}
