//! Request-level services.

pub mod research;

pub use research::{ResearchError, ResearchService};
