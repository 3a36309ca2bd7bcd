//! Presentation sinks consuming the organized catalog models.

use crate::catalog::CategoryTree;
use crate::facade::{DetailView, SubcategoryPreview};
use crate::model::Product;
use crate::normalization;
use crate::recommend::Presentation;

/// Message for an empty product grid.
pub const EMPTY_GRID_MESSAGE: &str = "No products found in this category.";

/// User-facing message when the whole catalog fetch fails.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load products. Please try again later.";

/// Anything that can display the organized catalog models.
///
/// Failures inside a sink are the sink's own problem; the pipeline never
/// depends on a render outcome.
pub trait RenderSink {
    /// Two-level navigation menu.
    fn menu(&mut self, tree: &CategoryTree);

    /// Flat product grid; an empty slice shows [`EMPTY_GRID_MESSAGE`].
    fn grid(&mut self, products: &[Product]);

    /// Per-subcategory preview rows for one top-level category.
    fn category_preview(&mut self, top: &str, groups: &[SubcategoryPreview<'_>]);

    /// Product detail with its recommendation sections.
    fn detail(&mut self, view: &DetailView);

    /// Whole-catalog load failure with a retry prompt.
    fn load_failure(&mut self);
}

/// Plain-text sink for the CLI.
#[derive(Debug, Default)]
pub struct TerminalSink;

impl RenderSink for TerminalSink {
    fn menu(&mut self, tree: &CategoryTree) {
        for (top, node) in tree.top_level() {
            println!("{top}");
            for (sub, child) in node.subcategories() {
                println!("  {sub} ({})", child.products().len());
            }
        }
    }

    fn grid(&mut self, products: &[Product]) {
        if products.is_empty() {
            println!("{EMPTY_GRID_MESSAGE}");
            return;
        }
        for product in products {
            println!(
                "[{}] {}  ${}",
                product.id,
                normalization::display_name(product.name.as_deref()),
                normalization::display_price(product.price.as_ref()),
            );
        }
    }

    fn category_preview(&mut self, top: &str, groups: &[SubcategoryPreview<'_>]) {
        println!("{top}");
        for group in groups {
            println!("-- {}", group.name);
            for product in group.products {
                println!(
                    "   [{}] {}",
                    product.id,
                    normalization::display_name(product.name.as_deref()),
                );
            }
        }
    }

    fn detail(&mut self, view: &DetailView) {
        let product = &view.product;
        println!("{}", normalization::display_name(product.name.as_deref()));
        println!(
            "  image:  {}",
            normalization::first_image(product.image_urls.as_deref())
        );
        println!(
            "  brand:  {}",
            normalization::display_brand(product.brand.as_deref())
        );
        println!(
            "  price:  ${}",
            normalization::display_price(product.price.as_ref())
        );
        println!(
            "  rating: {} ({} reviews)",
            normalization::display_rating(product.rating.as_ref()),
            normalization::display_review_count(product.review_count.as_ref()),
        );
        println!(
            "  {}",
            normalization::display_description(product.description.as_deref())
        );

        for section in &view.sections {
            match section.presentation() {
                Presentation::Hidden => {}
                Presentation::Placeholder(message) => {
                    println!("\n{}\n  {message}", section.title);
                }
                Presentation::Products(products) => {
                    println!("\n{}", section.title);
                    for product in products {
                        println!(
                            "  [{}] {}  ${}",
                            product.id,
                            normalization::card_name(product.name.as_deref()),
                            normalization::display_price(product.price.as_ref()),
                        );
                    }
                }
            }
        }
    }

    fn load_failure(&mut self) {
        println!("{LOAD_FAILURE_MESSAGE}");
    }
}
