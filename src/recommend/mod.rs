// Recommendation resolution and presentation

pub mod resolver;
pub mod sections;

pub use resolver::{ResolvedRecommendations, Resolver};
pub use sections::{aggregate, EmptyPolicy, Presentation, SectionView};
