pub mod memory;
pub mod model;
pub mod store;

pub use memory::InMemoryUserStore;
pub use model::*;
pub use store::UserStore;
