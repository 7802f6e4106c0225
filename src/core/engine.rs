use crate::core::{
    filters::{matches_simple, meets_thresholds, NameNeedle},
    store::RecordStore,
};
use crate::models::{Hotel, HotelDetails, HotelId, HotelRatings, RatedHotel, RatingThresholds, SimpleCriteria};
use std::sync::Arc;

/// Read-only query front over a loaded [`RecordStore`]
///
/// # Filter modes
/// - simple: name substring / city / country, all optional
/// - advanced: minimum score per rating category, rated hotels only
///
/// Both modes are linear scans that keep the store's name ordering, and
/// neither mode fails: no match is just an empty result.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    store: Arc<RecordStore>,
}

impl FilterEngine {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Hotels matching the text / city / country criteria
    pub fn filter_simple(&self, criteria: &SimpleCriteria) -> Vec<&Hotel> {
        let needle = NameNeedle::new(&criteria.search_term);

        let matches: Vec<&Hotel> = self
            .store
            .hotels()
            .iter()
            .filter(|hotel| matches_simple(hotel, &needle, criteria))
            .collect();

        tracing::debug!(
            "Simple filter {:?} matched {} of {} hotels",
            criteria,
            matches.len(),
            self.store.len()
        );

        matches
    }

    /// Every hotel, in load order
    pub fn all(&self) -> Vec<&Hotel> {
        self.filter_simple(&SimpleCriteria::default())
    }

    /// Rated hotels whose five scores all reach the thresholds
    ///
    /// Hotels without a ratings entry never match.
    pub fn filter_advanced(&self, thresholds: &RatingThresholds) -> Vec<RatedHotel<'_>> {
        let matches: Vec<RatedHotel<'_>> = self
            .store
            .hotels()
            .iter()
            .filter_map(|hotel| {
                let ratings = self.store.ratings_for(hotel.id)?;
                meets_thresholds(ratings, thresholds).then_some(RatedHotel { hotel, ratings })
            })
            .collect();

        tracing::debug!(
            "Advanced filter {:?} matched {} of {} rated hotels",
            thresholds,
            matches.len(),
            self.store.rated_count()
        );

        matches
    }

    /// Ratings for a hotel, `None` when it has none
    #[inline]
    pub fn details(&self, hotel_id: HotelId) -> Option<&HotelRatings> {
        self.store.ratings_for(hotel_id)
    }

    /// Details pane contents for a hotel id, `None` when the id is unknown
    pub fn hotel_details(&self, hotel_id: HotelId) -> Option<HotelDetails<'_>> {
        let hotel = self.store.hotel(hotel_id)?;
        Some(HotelDetails::new(hotel, self.details(hotel_id)))
    }
}
