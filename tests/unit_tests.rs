// Unit tests for Hotel Ratings

use hotel_ratings::core::filters::{matches_simple, meets_thresholds, NameNeedle};
use hotel_ratings::models::{Hotel, HotelRatings, RatingCategory, RatingThresholds, SimpleCriteria};

fn ratings(service: f64, price: f64, room: f64, location: f64, overall: f64) -> HotelRatings {
    HotelRatings {
        hotel_id: 1,
        service,
        price,
        room,
        location,
        overall,
        total_reviews: 25,
    }
}

fn simple_match(hotel: &Hotel, criteria: &SimpleCriteria) -> bool {
    let needle = NameNeedle::new(&criteria.search_term);
    matches_simple(hotel, &needle, criteria)
}

#[test]
fn test_search_term_matches_any_case() {
    let hotel = Hotel::new(1, "Hilton Garden Inn", "Boston", "USA");

    assert!(simple_match(&hotel, &SimpleCriteria::search("hilton")));
    assert!(simple_match(&hotel, &SimpleCriteria::search("HILTON")));
    assert!(simple_match(&hotel, &SimpleCriteria::search("garden inn")));
    assert!(!simple_match(&hotel, &SimpleCriteria::search("marriott")));
}

#[test]
fn test_search_term_with_non_ascii_letters() {
    let hotel = Hotel::new(2, "Hôtel Élysée", "Paris", "France");

    assert!(simple_match(&hotel, &SimpleCriteria::search("élysée")));
    assert!(simple_match(&hotel, &SimpleCriteria::search("HÔTEL")));
}

#[test]
fn test_city_and_country_are_case_sensitive() {
    let hotel = Hotel::new(1, "Hilton Garden Inn", "Boston", "USA");

    assert!(simple_match(&hotel, &SimpleCriteria::new("", "Boston", "USA")));
    assert!(!simple_match(&hotel, &SimpleCriteria::new("", "boston", "")));
    assert!(!simple_match(&hotel, &SimpleCriteria::new("", "", "usa")));
}

#[test]
fn test_every_active_predicate_must_hold() {
    let hotel = Hotel::new(1, "Hilton Garden Inn", "Boston", "USA");

    assert!(!simple_match(&hotel, &SimpleCriteria::new("hilton", "Chicago", "USA")));
    assert!(!simple_match(&hotel, &SimpleCriteria::new("hyatt", "Boston", "USA")));
    assert!(simple_match(&hotel, &SimpleCriteria::new("inn", "Boston", "USA")));
}

#[test]
fn test_thresholds_at_score_pass() {
    let r = ratings(3.5, 2.5, 4.0, 4.5, 3.9);
    let thresholds = RatingThresholds::new(3.5, 2.5, 4.0, 4.5, 3.9);

    assert!(meets_thresholds(&r, &thresholds));
}

#[test]
fn test_raising_any_threshold_above_score_excludes() {
    let r = ratings(3.5, 2.5, 4.0, 4.5, 3.9);

    for category in RatingCategory::ALL {
        let thresholds = RatingThresholds::default().with(category, r.score(category) + 0.5);
        assert!(
            !meets_thresholds(&r, &thresholds),
            "{} threshold should exclude the hotel",
            category.label()
        );
    }
}

#[test]
fn test_minimum_thresholds_pass_lowest_scores() {
    let r = ratings(1.0, 1.0, 1.0, 1.0, 1.0);
    assert!(meets_thresholds(&r, &RatingThresholds::default()));
}

#[test]
fn test_threshold_values_clamped_to_score_range() {
    let mut thresholds = RatingThresholds::default();
    thresholds.set(RatingCategory::Room, 9.0);
    thresholds.set(RatingCategory::Price, -2.0);

    assert_eq!(thresholds.room, 5.0);
    assert_eq!(thresholds.price, 1.0);
}
