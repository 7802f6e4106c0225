use serde::{Deserialize, Serialize};

/// Primary key of the `Hotel` table
pub type HotelId = i32;

/// Lowest value a rating score (and therefore a threshold) can take
pub const MIN_SCORE: f64 = 1.0;

/// Highest value a rating score (and therefore a threshold) can take
pub const MAX_SCORE: f64 = 5.0;

/// A hotel as loaded from the `Hotel` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub city: String,
    pub country: String,
}

impl Hotel {
    pub fn new(
        id: HotelId,
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            city: city.into(),
            country: country.into(),
        }
    }
}

/// Aggregated review scores for one hotel, as loaded from `RatingsAverage`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelRatings {
    #[serde(rename = "hotelId")]
    pub hotel_id: HotelId,
    pub service: f64,
    pub price: f64,
    pub room: f64,
    pub location: f64,
    pub overall: f64,
    #[serde(rename = "totalReviews")]
    pub total_reviews: u32,
}

impl HotelRatings {
    /// Score for a single rating category
    #[inline]
    pub fn score(&self, category: RatingCategory) -> f64 {
        match category {
            RatingCategory::Service => self.service,
            RatingCategory::Price => self.price,
            RatingCategory::Room => self.room,
            RatingCategory::Location => self.location,
            RatingCategory::Overall => self.overall,
        }
    }
}

/// The five rating dimensions a hotel is scored on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingCategory {
    Service,
    Price,
    Room,
    Location,
    Overall,
}

impl RatingCategory {
    pub const ALL: [RatingCategory; 5] = [
        RatingCategory::Service,
        RatingCategory::Price,
        RatingCategory::Room,
        RatingCategory::Location,
        RatingCategory::Overall,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RatingCategory::Service => "Service",
            RatingCategory::Price => "Price",
            RatingCategory::Room => "Room",
            RatingCategory::Location => "Location",
            RatingCategory::Overall => "Overall",
        }
    }
}

/// Minimum score per category used by the advanced filter
///
/// Every value is kept inside `[MIN_SCORE, MAX_SCORE]`. A fresh set of
/// thresholds sits at the minimum, which lets every rated hotel through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingThresholds {
    pub service: f64,
    pub price: f64,
    pub room: f64,
    pub location: f64,
    pub overall: f64,
}

impl RatingThresholds {
    pub fn new(service: f64, price: f64, room: f64, location: f64, overall: f64) -> Self {
        Self {
            service: clamp_score(service),
            price: clamp_score(price),
            room: clamp_score(room),
            location: clamp_score(location),
            overall: clamp_score(overall),
        }
    }

    /// Thresholds with only the overall minimum raised
    pub fn with_overall(overall: f64) -> Self {
        Self::default().with(RatingCategory::Overall, overall)
    }

    pub fn get(&self, category: RatingCategory) -> f64 {
        match category {
            RatingCategory::Service => self.service,
            RatingCategory::Price => self.price,
            RatingCategory::Room => self.room,
            RatingCategory::Location => self.location,
            RatingCategory::Overall => self.overall,
        }
    }

    pub fn set(&mut self, category: RatingCategory, value: f64) {
        let value = clamp_score(value);
        match category {
            RatingCategory::Service => self.service = value,
            RatingCategory::Price => self.price = value,
            RatingCategory::Room => self.room = value,
            RatingCategory::Location => self.location = value,
            RatingCategory::Overall => self.overall = value,
        }
    }

    pub fn with(mut self, category: RatingCategory, value: f64) -> Self {
        self.set(category, value);
        self
    }

    /// Put every category back to the minimum score
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            service: MIN_SCORE,
            price: MIN_SCORE,
            room: MIN_SCORE,
            location: MIN_SCORE,
            overall: MIN_SCORE,
        }
    }
}

fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_SCORE;
    }
    value.clamp(MIN_SCORE, MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds_are_minimum() {
        let thresholds = RatingThresholds::default();
        for category in RatingCategory::ALL {
            assert_eq!(thresholds.get(category), MIN_SCORE);
        }
    }

    #[test]
    fn test_thresholds_are_clamped() {
        let thresholds = RatingThresholds::new(0.0, 7.5, f64::NAN, 3.5, 5.0);
        assert_eq!(thresholds.service, 1.0);
        assert_eq!(thresholds.price, 5.0);
        assert_eq!(thresholds.room, 1.0);
        assert_eq!(thresholds.location, 3.5);
        assert_eq!(thresholds.overall, 5.0);
    }

    #[test]
    fn test_reset_thresholds() {
        let mut thresholds = RatingThresholds::with_overall(4.0).with(RatingCategory::Room, 3.0);
        assert_eq!(thresholds.overall, 4.0);
        assert_eq!(thresholds.room, 3.0);

        thresholds.reset();
        assert_eq!(thresholds, RatingThresholds::default());
    }

    #[test]
    fn test_ratings_score_by_category() {
        let ratings = HotelRatings {
            hotel_id: 1,
            service: 4.1,
            price: 3.2,
            room: 2.3,
            location: 4.9,
            overall: 3.8,
            total_reviews: 12,
        };

        assert_eq!(ratings.score(RatingCategory::Service), 4.1);
        assert_eq!(ratings.score(RatingCategory::Price), 3.2);
        assert_eq!(ratings.score(RatingCategory::Room), 2.3);
        assert_eq!(ratings.score(RatingCategory::Location), 4.9);
        assert_eq!(ratings.score(RatingCategory::Overall), 3.8);
    }
}
