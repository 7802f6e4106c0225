//! Display strings for hotel lists, details and search summaries
//!
//! Pure formatting; nothing here touches the record store directly.

use crate::models::{Hotel, HotelDetails, RatedHotel, RatingCategory, RatingThresholds};

pub const NO_RATINGS_TEXT: &str = "No ratings available for this hotel.\n\n\
    This hotel exists in our database but doesn't have\n\
    any analyzed reviews yet.";

pub const SELECT_PROMPT: &str = "Select a hotel to view ratings";

/// `"Name - City"`
pub fn list_entry(hotel: &Hotel) -> String {
    format!("{} - {}", hotel.name, hotel.city)
}

/// `"Name - City (Overall: 4.5)"`
pub fn rated_list_entry(rated: &RatedHotel<'_>) -> String {
    format!("{} (Overall: {:.1})", list_entry(rated.hotel), rated.overall())
}

pub fn simple_heading(count: usize) -> String {
    format!("Found {} hotels", count)
}

pub fn advanced_heading(count: usize) -> String {
    format!("Advanced Search: {} hotels meet criteria", count)
}

/// One `"• Category ≥ X.X"` line per rating category
pub fn criteria_summary(thresholds: &RatingThresholds) -> String {
    let mut lines = vec!["Search Criteria:".to_string()];
    lines.extend(
        RatingCategory::ALL
            .iter()
            .map(|&c| format!("• {} ≥ {:.1}", c.label(), thresholds.get(c))),
    );
    lines.join("\n")
}

/// Title of the details pane: the hotel name, or a prompt when nothing is selected
pub fn details_title(details: Option<&HotelDetails<'_>>) -> String {
    details.map_or_else(|| SELECT_PROMPT.to_string(), |d| d.hotel().name.clone())
}

/// Body of the details pane
pub fn details_text(details: &HotelDetails<'_>) -> String {
    match details {
        HotelDetails::Rated { hotel, ratings } => format!(
            "📍 {}, {}\n\n\
             ⭐ Overall Rating: {:.1}/5.0\n\
             📊 Based on {} reviews\n\n\
             Detailed Scores:\n\
             • 🛎️  Service: {:.1}/5.0\n\
             • 💰 Price: {:.1}/5.0\n\
             • 🛏️  Room: {:.1}/5.0\n\
             • 📍 Location: {:.1}/5.0",
            hotel.city,
            hotel.country,
            ratings.overall,
            ratings.total_reviews,
            ratings.service,
            ratings.price,
            ratings.room,
            ratings.location,
        ),
        HotelDetails::Unrated { .. } => NO_RATINGS_TEXT.to_string(),
    }
}
