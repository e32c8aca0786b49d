pub mod category;
pub mod distance;
pub mod engine;
pub mod filter;
pub mod pagination;
pub mod sort;

pub use category::CategoryTable;
pub use distance::{DistancePolicy, ThrottlePolicy};
pub use engine::{QueryEngine, QueryError};
pub use filter::FilterSpec;
pub use pagination::{Page, PageRequest};
