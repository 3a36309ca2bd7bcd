use futures::future::join_all;
use tracing::warn;

use crate::error::CatalogError;
use crate::model::Product;
use crate::sources::{ProductSource, RecommendationSource};

/// The three recommendation rows after id resolution, gaps removed.
///
/// An empty row here either means the bundle had no candidates or every
/// candidate failed lookup; the resolver logs the difference, the
/// presentation does not care.
#[derive(Debug, Default)]
pub struct ResolvedRecommendations {
    pub content_based: Vec<Product>,
    pub hybrid: Vec<Product>,
    pub prev_viewed: Vec<Product>,
}

/// Resolves a product's recommendation bundle into full records.
pub struct Resolver<'a, P, R> {
    products: &'a P,
    recommendations: &'a R,
}

impl<'a, P, R> Resolver<'a, P, R>
where
    P: ProductSource,
    R: RecommendationSource,
{
    pub fn new(products: &'a P, recommendations: &'a R) -> Self {
        Self {
            products,
            recommendations,
        }
    }

    /// Fetch the bundle for `product_id` and resolve each row to records.
    ///
    /// Bundle failure is terminal for the whole operation and yields
    /// [`CatalogError::RecommendationFetchFailed`] with no partial result.
    /// Individual lookup failures only leave gaps in their row.
    pub async fn resolve(&self, product_id: &str) -> Result<ResolvedRecommendations, CatalogError> {
        let bundle = self
            .recommendations
            .fetch_bundle(product_id)
            .await
            .map_err(CatalogError::RecommendationFetchFailed)?;

        let (content_based, hybrid, prev_viewed) = tokio::join!(
            self.resolve_row(&bundle.content_based),
            self.resolve_row(&bundle.hybrid),
            self.resolve_row(&bundle.prev_viewed),
        );

        Ok(ResolvedRecommendations {
            content_based,
            hybrid,
            prev_viewed,
        })
    }

    /// Resolve one id row with intra-row concurrency, keeping bundle order.
    ///
    /// An empty row issues no lookups: "no candidates" stays distinct from
    /// "candidates failed to resolve".
    async fn resolve_row(&self, ids: &[String]) -> Vec<Product> {
        if ids.is_empty() {
            return Vec::new();
        }

        let lookups = ids.iter().map(|id| async move {
            self.products
                .fetch_one(id)
                .await
                .map_err(|source| CatalogError::LookupFailed {
                    id: id.clone(),
                    source,
                })
        });

        // join_all keeps input order, so the row follows the bundle's id
        // order rather than lookup completion order.
        join_all(lookups)
            .await
            .into_iter()
            .filter_map(|result| match result {
                Ok(product) => Some(product),
                Err(err) => {
                    warn!(target: "recommend", %err, "dropping unresolvable recommendation");
                    None
                }
            })
            .collect()
    }
}
