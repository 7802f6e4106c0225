// Model exports
pub mod criteria;
pub mod domain;
pub mod results;

pub use criteria::SimpleCriteria;
pub use domain::{Hotel, HotelId, HotelRatings, RatingCategory, RatingThresholds, MAX_SCORE, MIN_SCORE};
pub use results::{HotelDetails, RatedHotel};
