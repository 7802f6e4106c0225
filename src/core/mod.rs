// Core exports
pub mod engine;
pub mod filters;
pub mod session;
pub mod store;

pub use engine::FilterEngine;
pub use filters::{matches_simple, meets_thresholds, NameNeedle};
pub use session::FilterSession;
pub use store::RecordStore;
