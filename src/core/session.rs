use crate::core::engine::FilterEngine;
use crate::models::{Hotel, HotelDetails, HotelId, RatedHotel, RatingCategory, RatingThresholds, SimpleCriteria};

/// The filter state a front end edits between queries
///
/// Holds the current text / city / country selection and the five
/// threshold values so that `reset` can put all of them back at once.
#[derive(Debug, Clone)]
pub struct FilterSession {
    engine: FilterEngine,
    criteria: SimpleCriteria,
    thresholds: RatingThresholds,
}

impl FilterSession {
    pub fn new(engine: FilterEngine) -> Self {
        Self {
            engine,
            criteria: SimpleCriteria::default(),
            thresholds: RatingThresholds::default(),
        }
    }

    pub fn engine(&self) -> &FilterEngine {
        &self.engine
    }

    pub fn criteria(&self) -> &SimpleCriteria {
        &self.criteria
    }

    pub fn thresholds(&self) -> &RatingThresholds {
        &self.thresholds
    }

    pub fn set_search_term(&mut self, term: &str) -> &mut Self {
        self.criteria.search_term = term.to_string();
        self
    }

    /// Select a city; `None` or an empty string clears the selection
    pub fn select_city(&mut self, city: Option<&str>) -> &mut Self {
        self.criteria.city = city.filter(|c| !c.is_empty()).map(str::to_string);
        self
    }

    /// Select a country; `None` or an empty string clears the selection
    pub fn select_country(&mut self, country: Option<&str>) -> &mut Self {
        self.criteria.country = country.filter(|c| !c.is_empty()).map(str::to_string);
        self
    }

    pub fn set_threshold(&mut self, category: RatingCategory, value: f64) -> &mut Self {
        self.thresholds.set(category, value);
        self
    }

    pub fn apply_simple(&self) -> Vec<&Hotel> {
        self.engine.filter_simple(&self.criteria)
    }

    pub fn apply_advanced(&self) -> Vec<RatedHotel<'_>> {
        self.engine.filter_advanced(&self.thresholds)
    }

    /// Clear every criterion, drop the thresholds to the minimum and
    /// return the full listing
    pub fn reset(&mut self) -> Vec<&Hotel> {
        self.criteria.clear();
        self.thresholds.reset();
        self.engine.all()
    }

    pub fn details(&self, hotel_id: HotelId) -> Option<HotelDetails<'_>> {
        self.engine.hotel_details(hotel_id)
    }
}
