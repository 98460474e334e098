//! HTTP request handlers.

mod health;
mod research;

pub use health::{health_check, root};
pub use research::research;
