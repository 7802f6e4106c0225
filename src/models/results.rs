use crate::models::domain::{Hotel, HotelRatings};

/// Advanced filter result: a hotel paired with the ratings it was matched on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatedHotel<'a> {
    pub hotel: &'a Hotel,
    pub ratings: &'a HotelRatings,
}

impl<'a> RatedHotel<'a> {
    /// Raw overall score, used by front ends to label the entry
    #[inline]
    pub fn overall(&self) -> f64 {
        self.ratings.overall
    }
}

/// What the details pane shows for a selected hotel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HotelDetails<'a> {
    Rated {
        hotel: &'a Hotel,
        ratings: &'a HotelRatings,
    },
    /// The hotel exists but has no analysed reviews
    Unrated { hotel: &'a Hotel },
}

impl<'a> HotelDetails<'a> {
    pub fn new(hotel: &'a Hotel, ratings: Option<&'a HotelRatings>) -> Self {
        match ratings {
            Some(ratings) => HotelDetails::Rated { hotel, ratings },
            None => HotelDetails::Unrated { hotel },
        }
    }

    pub fn hotel(&self) -> &'a Hotel {
        match self {
            HotelDetails::Rated { hotel, .. } | HotelDetails::Unrated { hotel } => hotel,
        }
    }

    pub fn ratings(&self) -> Option<&'a HotelRatings> {
        match self {
            HotelDetails::Rated { ratings, .. } => Some(ratings),
            HotelDetails::Unrated { .. } => None,
        }
    }
}
