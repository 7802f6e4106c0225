//! Hotel Ratings - in-memory browser core for hotel review aggregates
//!
//! Loads hotels, cities, countries and per-hotel rating averages from the
//! database once, then answers simple (text / city / country) and advanced
//! (minimum rating per category) filters against the loaded snapshot.

pub mod config;
pub mod core;
pub mod models;
pub mod presentation;
pub mod services;

// Re-export commonly used types
pub use crate::core::{FilterEngine, FilterSession, RecordStore};
pub use crate::models::{Hotel, HotelDetails, HotelId, HotelRatings, RatedHotel, RatingCategory, RatingThresholds, SimpleCriteria};
pub use crate::services::{DataLoader, HotelSource, InMemorySource, LoadError, LoadPhase, PostgresSource};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_library_exports() {
        let store = RecordStore::from_hotels(vec![Hotel::new(1, "Alpha", "Paris", "France")], vec![]);
        let engine = FilterEngine::new(Arc::new(store));
        assert_eq!(engine.filter_simple(&SimpleCriteria::search("ALP")).len(), 1);
    }
}
