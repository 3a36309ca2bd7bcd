use rand::seq::SliceRandom;
use rand::thread_rng;
use tracing::{info, warn};

use crate::catalog::{CategoryNode, CategoryTree};
use crate::error::CatalogError;
use crate::model::Product;
use crate::normalization;
use crate::recommend::{aggregate, Resolver, SectionView};
use crate::sources::{ProductSource, RecommendationSource};

/// Preview cap applied per subcategory by [`CatalogFacade::browse`]. Fixed
/// display behavior, not configuration.
pub const PREVIEW_PER_SUBCATEGORY: usize = 3;

/// Landing grid sample size.
pub const HOME_SAMPLE: usize = 15;

/// One subcategory with its preview products.
#[derive(Debug)]
pub struct SubcategoryPreview<'a> {
    pub name: &'a str,
    pub products: &'a [Product],
}

/// A product detail plus its recommendation sections.
#[derive(Debug)]
pub struct DetailView {
    pub product: Product,
    pub sections: Vec<SectionView>,
}

/// Orchestration layer over the sources, the category index and the
/// recommendation pipeline.
///
/// Holds the catalog of the most recent load and its category tree, nothing
/// else. Each load builds a fresh tree and swaps it in only once fully
/// built.
pub struct CatalogFacade<P, R> {
    products: P,
    recommendations: R,
    catalog: Vec<Product>,
    tree: CategoryTree,
}

impl<P, R> CatalogFacade<P, R>
where
    P: ProductSource,
    R: RecommendationSource,
{
    pub fn new(products: P, recommendations: R) -> Self {
        Self {
            products,
            recommendations,
            catalog: Vec::new(),
            tree: CategoryTree::default(),
        }
    }

    /// The category tree of the most recent successful load.
    pub fn tree(&self) -> &CategoryTree {
        &self.tree
    }

    /// Fetch the full catalog and rebuild the category tree.
    ///
    /// On failure the current catalog is replaced with an empty one and the
    /// error is returned so the caller can surface a retry prompt; the
    /// process keeps running either way.
    pub async fn load_catalog(&mut self) -> Result<&[Product], CatalogError> {
        let products = match self.products.fetch_all().await {
            Ok(products) => products,
            Err(source) => {
                self.catalog = Vec::new();
                self.tree = CategoryTree::default();
                return Err(CatalogError::CatalogLoadFailed(source));
            }
        };

        let tree = CategoryTree::build(products.iter().cloned());
        info!(
            target: "facade",
            products = products.len(),
            categories = tree.top_level().count(),
            "catalog loaded"
        );
        self.catalog = products;
        self.tree = tree;
        Ok(&self.catalog)
    }

    /// Up to `n` random products for the landing grid.
    pub fn home_sample(&self, n: usize) -> Vec<Product> {
        let mut sample: Vec<&Product> = self.catalog.iter().collect();
        sample.shuffle(&mut thread_rng());
        sample.into_iter().take(n).cloned().collect()
    }

    /// Up to [`PREVIEW_PER_SUBCATEGORY`] products per subcategory of `top`.
    /// Unknown categories preview as empty.
    pub fn browse(&self, top: &str) -> Vec<SubcategoryPreview<'_>> {
        let Some(node) = self.tree.get(top) else {
            return Vec::new();
        };
        node.subcategories()
            .map(|(name, sub)| {
                let products = sub.products();
                SubcategoryPreview {
                    name,
                    products: &products[..products.len().min(PREVIEW_PER_SUBCATEGORY)],
                }
            })
            .collect()
    }

    /// The full, uncapped product list of one subcategory.
    pub fn browse_subcategory(&self, top: &str, sub: &str) -> Option<&[Product]> {
        self.tree
            .get(top)?
            .subcategory(sub)
            .map(CategoryNode::products)
    }

    /// Case-insensitive display-name substring match over the loaded
    /// catalog. A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<Product> {
        let needle = query.trim().to_lowercase();
        self.catalog
            .iter()
            .filter(|product| {
                needle.is_empty()
                    || normalization::display_name(product.name.as_deref())
                        .to_lowercase()
                        .contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// One product with its aggregated recommendation sections.
    ///
    /// Bundle-fetch failure degrades to a detail view with no sections;
    /// only a failed fetch of the product itself is an error.
    pub async fn view_detail(&self, product_id: &str) -> Result<DetailView, CatalogError> {
        let product =
            self.products
                .fetch_one(product_id)
                .await
                .map_err(|source| CatalogError::LookupFailed {
                    id: product_id.to_string(),
                    source,
                })?;

        let resolver = Resolver::new(&self.products, &self.recommendations);
        let sections = match resolver.resolve(product_id).await {
            Ok(resolved) => aggregate(resolved),
            Err(err) => {
                warn!(
                    target: "facade",
                    %err,
                    id = %product_id,
                    "recommendations unavailable for detail view"
                );
                Vec::new()
            }
        };

        Ok(DetailView { product, sections })
    }
}
