use crate::model::Product;
use crate::recommend::resolver::ResolvedRecommendations;

pub const CONTENT_BASED_TITLE: &str = "Similar to this:";
pub const HYBRID_TITLE: &str = "You might also like:";
pub const PREV_VIEWED_TITLE: &str = "Based on your viewing history:";

/// Onboarding message shown for an empty previously-viewed row.
pub const PREV_VIEWED_PLACEHOLDER: &str =
    "Start browsing to get personalized recommendations based on your viewing history!";

/// What a sink should do with a section whose product row is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Render nothing at all; an empty row of this kind is plain absence.
    HideWhenEmpty,
    /// Render an onboarding message instead of disappearing.
    PlaceholderWhenEmpty,
}

/// One recommendation row, ready for display. Constructed per detail view
/// and discarded once rendered.
#[derive(Debug)]
pub struct SectionView {
    pub title: &'static str,
    pub products: Vec<Product>,
    pub empty_policy: EmptyPolicy,
}

/// The emptiness policy resolved against the actual row, so sinks never
/// branch on section identity.
#[derive(Debug, PartialEq)]
pub enum Presentation<'a> {
    Products(&'a [Product]),
    Placeholder(&'static str),
    Hidden,
}

impl SectionView {
    fn new(title: &'static str, products: Vec<Product>, empty_policy: EmptyPolicy) -> Self {
        Self {
            title,
            products,
            empty_policy,
        }
    }

    pub fn presentation(&self) -> Presentation<'_> {
        if !self.products.is_empty() {
            return Presentation::Products(&self.products);
        }
        match self.empty_policy {
            EmptyPolicy::HideWhenEmpty => Presentation::Hidden,
            EmptyPolicy::PlaceholderWhenEmpty => Presentation::Placeholder(PREV_VIEWED_PLACEHOLDER),
        }
    }
}

/// Attach titles and emptiness policy to the three resolved rows, in fixed
/// order: content-based, hybrid, previously viewed.
///
/// `content_based` and `hybrid` vanish when empty; `prev_viewed` shows the
/// onboarding placeholder instead. The asymmetry is deliberate cold-start
/// UX and sinks must not collapse the two cases.
pub fn aggregate(resolved: ResolvedRecommendations) -> Vec<SectionView> {
    vec![
        SectionView::new(
            CONTENT_BASED_TITLE,
            resolved.content_based,
            EmptyPolicy::HideWhenEmpty,
        ),
        SectionView::new(HYBRID_TITLE, resolved.hybrid, EmptyPolicy::HideWhenEmpty),
        SectionView::new(
            PREV_VIEWED_TITLE,
            resolved.prev_viewed,
            EmptyPolicy::PlaceholderWhenEmpty,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: None,
            category_path: None,
            image_urls: None,
            price: None,
            brand: None,
            rating: None,
            review_count: None,
            description: None,
            tags: None,
        }
    }

    #[test]
    fn identical_empty_rows_get_different_policies() {
        let sections = aggregate(ResolvedRecommendations::default());

        assert_eq!(sections[0].title, CONTENT_BASED_TITLE);
        assert_eq!(sections[0].presentation(), Presentation::Hidden);
        assert_eq!(sections[1].presentation(), Presentation::Hidden);
        assert_eq!(
            sections[2].presentation(),
            Presentation::Placeholder(PREV_VIEWED_PLACEHOLDER)
        );
    }

    #[test]
    fn populated_rows_render_their_products() {
        let sections = aggregate(ResolvedRecommendations {
            content_based: vec![product("a")],
            hybrid: Vec::new(),
            prev_viewed: vec![product("b"), product("c")],
        });

        match sections[0].presentation() {
            Presentation::Products(products) => assert_eq!(products.len(), 1),
            other => panic!("unexpected presentation: {other:?}"),
        }
        assert_eq!(sections[1].presentation(), Presentation::Hidden);
        match sections[2].presentation() {
            Presentation::Products(products) => assert_eq!(products[1].id, "c"),
            other => panic!("unexpected presentation: {other:?}"),
        }
    }
}
