pub mod record;
pub mod seed;
pub mod source;

pub use record::Recommendation;
pub use seed::{default_seed, load_seed, SeedEntry, SeedError};
pub use source::{InMemorySource, RecommendationSource, SourceError};
