// Service exports
pub mod loader;
pub mod memory;
pub mod postgres;
pub mod source;

pub use loader::{DataLoader, LoadError, LoadOutcome, LoadPhase, LoadTask, LoadWarning};
pub use memory::{Fixture, InMemorySource, SourcePhase};
pub use postgres::PostgresSource;
pub use source::{HotelSource, SourceError};
