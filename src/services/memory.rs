use crate::models::{Hotel, HotelRatings};
use crate::services::source::{HotelSource, SourceError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which query an [`InMemorySource`] should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourcePhase {
    Hotels,
    Cities,
    Countries,
    Ratings,
}

/// Fixture layout accepted by [`InMemorySource::from_json`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub ratings: Vec<HotelRatings>,
}

/// Hotel source backed by plain vectors
///
/// Answers the four queries the way the SQL does: hotels by name, distinct
/// sorted cities and countries, ratings as given. Any phase can be made to
/// fail to exercise the loader's error handling without a database.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    hotels: Vec<Hotel>,
    ratings: Vec<HotelRatings>,
    failing: Vec<SourcePhase>,
}

impl InMemorySource {
    pub fn new(hotels: Vec<Hotel>, ratings: Vec<HotelRatings>) -> Self {
        Self {
            hotels,
            ratings,
            failing: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let fixture: Fixture = serde_json::from_str(json)?;
        Ok(Self::new(fixture.hotels, fixture.ratings))
    }

    /// Make the given phase return [`SourceError::Unavailable`]
    pub fn failing_on(mut self, phase: SourcePhase) -> Self {
        if !self.failing.contains(&phase) {
            self.failing.push(phase);
        }
        self
    }

    fn check(&self, phase: SourcePhase) -> Result<(), SourceError> {
        if self.failing.contains(&phase) {
            return Err(SourceError::Unavailable(format!("{:?} query failed", phase)));
        }
        Ok(())
    }

    fn distinct<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&Hotel) -> &str,
    {
        self.hotels
            .iter()
            .map(|h| field(h).to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[async_trait]
impl HotelSource for InMemorySource {
    async fn fetch_hotels(&self) -> Result<Vec<Hotel>, SourceError> {
        self.check(SourcePhase::Hotels)?;
        let mut hotels = self.hotels.clone();
        hotels.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(hotels)
    }

    async fn fetch_cities(&self) -> Result<Vec<String>, SourceError> {
        self.check(SourcePhase::Cities)?;
        Ok(self.distinct(|h| h.city.as_str()))
    }

    async fn fetch_countries(&self) -> Result<Vec<String>, SourceError> {
        self.check(SourcePhase::Countries)?;
        Ok(self.distinct(|h| h.country.as_str()))
    }

    async fn fetch_ratings(&self) -> Result<Vec<HotelRatings>, SourceError> {
        self.check(SourcePhase::Ratings)?;
        Ok(self.ratings.clone())
    }
}
