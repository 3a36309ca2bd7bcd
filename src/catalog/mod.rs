// Two-level category index over one catalog load

mod tree;

pub use tree::{CategoryNode, CategoryTree, MAX_DEPTH};
