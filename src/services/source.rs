use crate::models::{Hotel, HotelRatings};
use async_trait::async_trait;
use thiserror::Error;

/// Errors a data source can report for a single bulk query
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Invalid row: {0}")]
    InvalidRow(String),

    #[error("Source unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid fixture: {0}")]
    FixtureError(#[from] serde_json::Error),
}

/// The four read-only bulk queries the loader runs
///
/// Implementations return rows as the backing store produces them; ordering
/// and de-duplication are enforced again when the record store is built.
#[async_trait]
pub trait HotelSource: Send + Sync {
    /// Every hotel, ordered by name
    async fn fetch_hotels(&self) -> Result<Vec<Hotel>, SourceError>;

    /// Distinct hotel cities, ascending
    async fn fetch_cities(&self) -> Result<Vec<String>, SourceError>;

    /// Distinct hotel countries, ascending
    async fn fetch_countries(&self) -> Result<Vec<String>, SourceError>;

    /// Aggregated ratings, at most one row per hotel
    async fn fetch_ratings(&self) -> Result<Vec<HotelRatings>, SourceError>;
}
