use indexmap::IndexMap;
use tracing::warn;

use crate::model::Product;

/// Number of `category_path` levels the tree keeps. Deeper segments are an
/// explicit truncation, not data loss to report.
pub const MAX_DEPTH: usize = 2;

/// One level of the category hierarchy: the products filed directly at this
/// node plus its insertion-ordered subcategories.
#[derive(Debug, Default)]
pub struct CategoryNode {
    products: Vec<Product>,
    subcategories: IndexMap<String, CategoryNode>,
}

impl CategoryNode {
    /// Products filed at exactly this node, in source order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Child categories in first-seen order.
    pub fn subcategories(&self) -> impl Iterator<Item = (&str, &CategoryNode)> {
        self.subcategories.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn subcategory(&self, name: &str) -> Option<&CategoryNode> {
        self.subcategories.get(name)
    }
}

/// Two-level category index over one catalog load.
///
/// Rebuilt wholesale on each fetch and never mutated incrementally.
/// Top-level and subcategory names keep first-seen insertion order so menus
/// render deterministically.
#[derive(Debug, Default)]
pub struct CategoryTree {
    roots: IndexMap<String, CategoryNode>,
}

impl CategoryTree {
    /// Index `products` by the first two segments of their category path.
    ///
    /// A path with exactly one segment files the product on the top-level
    /// node's own list; with two or more, on the subcategory node, extra
    /// segments dropped. Products without a usable path are skipped with a
    /// diagnostic and never fail the build.
    pub fn build(products: impl IntoIterator<Item = Product>) -> Self {
        let mut tree = Self::default();
        for product in products {
            let segments = match product.category_path.as_deref().map(split_path) {
                Some(segments) if !segments.is_empty() => segments,
                _ => {
                    warn!(
                        target: "catalog",
                        id = %product.id,
                        "product has no category path; leaving it out of the tree"
                    );
                    continue;
                }
            };

            let mut node = tree.roots.entry(segments[0].to_string()).or_default();
            if let Some(sub) = segments.get(1) {
                node = node.subcategories.entry((*sub).to_string()).or_default();
            }
            node.products.push(product);
        }
        tree
    }

    pub fn get(&self, top: &str) -> Option<&CategoryNode> {
        self.roots.get(top)
    }

    /// Top-level categories in first-seen order.
    pub fn top_level(&self) -> impl Iterator<Item = (&str, &CategoryNode)> {
        self.roots.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Every product in the tree, menu order: a category's own products
    /// first, then its subcategories in insertion order.
    pub fn iter_products(&self) -> impl Iterator<Item = &Product> {
        self.roots.values().flat_map(|node| {
            node.products
                .iter()
                .chain(node.subcategories.values().flat_map(|sub| sub.products.iter()))
        })
    }
}

fn split_path(path: &str) -> Vec<&str> {
    path.split('>')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .take(MAX_DEPTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, path: Option<&str>) -> Product {
        Product {
            id: id.to_string(),
            name: Some(format!("Product {id}")),
            category_path: path.map(str::to_string),
            image_urls: None,
            price: None,
            brand: None,
            rating: None,
            review_count: None,
            description: None,
            tags: None,
        }
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn files_one_segment_paths_on_the_top_node() {
        let tree = CategoryTree::build([
            product("1", Some("Home > Kitchen")),
            product("2", Some("Home > Garden")),
            product("3", Some("Home")),
        ]);

        let home = tree.get("Home").unwrap();
        assert_eq!(ids(home.products()), ["3"]);
        assert_eq!(ids(home.subcategory("Kitchen").unwrap().products()), ["1"]);
        assert_eq!(ids(home.subcategory("Garden").unwrap().products()), ["2"]);
    }

    #[test]
    fn truncates_paths_beyond_two_segments() {
        let tree = CategoryTree::build([
            product("deep", Some("A > B > C > D")),
            product("shallow", Some("A > B")),
        ]);

        let b = tree.get("A").unwrap().subcategory("B").unwrap();
        assert_eq!(ids(b.products()), ["deep", "shallow"]);
        assert!(b.subcategories().next().is_none());
    }

    #[test]
    fn skips_products_without_a_path() {
        let tree = CategoryTree::build([
            product("1", None),
            product("2", Some("   ")),
            product("3", Some("Home")),
        ]);

        assert_eq!(tree.iter_products().count(), 1);
        assert_eq!(tree.get("Home").unwrap().products()[0].id, "3");
    }

    #[test]
    fn preserves_first_seen_order() {
        let tree = CategoryTree::build([
            product("1", Some("Zoo > Aviary")),
            product("2", Some("Attic > Boxes")),
            product("3", Some("Zoo > Reptiles")),
        ]);

        let tops: Vec<&str> = tree.top_level().map(|(name, _)| name).collect();
        assert_eq!(tops, ["Zoo", "Attic"]);

        let subs: Vec<&str> = tree.get("Zoo").unwrap().subcategories().map(|(name, _)| name).collect();
        assert_eq!(subs, ["Aviary", "Reptiles"]);
    }

    #[test]
    fn trims_path_segments() {
        let tree = CategoryTree::build([product("1", Some("  Home  >  Kitchen  "))]);
        let home = tree.get("Home").unwrap();
        assert!(home.subcategory("Kitchen").is_some());
    }
}
