use crate::models::{Hotel, HotelRatings, RatingCategory, RatingThresholds, SimpleCriteria};

/// Lower-cased form of the search term, computed once per filter call
#[derive(Debug, Clone)]
pub struct NameNeedle(String);

impl NameNeedle {
    pub fn new(term: &str) -> Self {
        Self(term.to_lowercase())
    }

    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        self.0.is_empty() || name.to_lowercase().contains(&self.0)
    }
}

/// Check a hotel against the simple filter
///
/// Name matching is a case-insensitive substring test; city and country
/// must be equal, case included. Unset dimensions match everything.
#[inline]
pub fn matches_simple(hotel: &Hotel, needle: &NameNeedle, criteria: &SimpleCriteria) -> bool {
    if !needle.matches(&hotel.name) {
        return false;
    }

    if let Some(city) = criteria.city() {
        if hotel.city != city {
            return false;
        }
    }

    if let Some(country) = criteria.country() {
        if hotel.country != country {
            return false;
        }
    }

    true
}

/// Check every category score against its minimum (inclusive)
#[inline]
pub fn meets_thresholds(ratings: &HotelRatings, thresholds: &RatingThresholds) -> bool {
    RatingCategory::ALL
        .iter()
        .all(|&category| ratings.score(category) >= thresholds.get(category))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel() -> Hotel {
        Hotel::new(1, "Hilton Garden Inn", "Paris", "France")
    }

    fn ratings() -> HotelRatings {
        HotelRatings {
            hotel_id: 1,
            service: 4.0,
            price: 3.0,
            room: 3.5,
            location: 4.5,
            overall: 4.0,
            total_reviews: 20,
        }
    }

    fn check(criteria: SimpleCriteria) -> bool {
        let needle = NameNeedle::new(&criteria.search_term);
        matches_simple(&hotel(), &needle, &criteria)
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        assert!(check(SimpleCriteria::search("hilton")));
        assert!(check(SimpleCriteria::search("GARDEN")));
        assert!(check(SimpleCriteria::search("n Gar")));
        assert!(!check(SimpleCriteria::search("hyatt")));
    }

    #[test]
    fn test_city_match_is_exact() {
        assert!(check(SimpleCriteria::in_city("Paris")));
        assert!(!check(SimpleCriteria::in_city("paris")));
        assert!(!check(SimpleCriteria::in_city("Par")));
    }

    #[test]
    fn test_country_match_is_exact() {
        assert!(check(SimpleCriteria::in_country("France")));
        assert!(!check(SimpleCriteria::in_country("france")));
    }

    #[test]
    fn test_all_dimensions_combined() {
        assert!(check(SimpleCriteria::new("inn", "Paris", "France")));
        assert!(!check(SimpleCriteria::new("inn", "Paris", "Italy")));
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        assert!(check(SimpleCriteria::default()));
    }

    #[test]
    fn test_thresholds_inclusive() {
        let thresholds = RatingThresholds::new(4.0, 3.0, 3.5, 4.5, 4.0);
        assert!(meets_thresholds(&ratings(), &thresholds));
    }

    #[test]
    fn test_single_threshold_above_score_fails() {
        for category in RatingCategory::ALL {
            let above = ratings().score(category) + 0.1;
            let thresholds = RatingThresholds::default().with(category, above);
            assert!(
                !meets_thresholds(&ratings(), &thresholds),
                "{:?} threshold {} should exclude",
                category,
                above
            );
        }
    }

    #[test]
    fn test_default_thresholds_pass_any_valid_ratings() {
        assert!(meets_thresholds(&ratings(), &RatingThresholds::default()));
    }
}
