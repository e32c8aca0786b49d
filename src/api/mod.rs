pub mod error;
pub mod handlers;
pub mod service;

pub use error::ApiError;
pub use handlers::*;
pub use service::VibeApi;
