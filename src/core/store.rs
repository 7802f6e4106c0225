use crate::models::{Hotel, HotelId, HotelRatings};
use chrono::{DateTime, Utc};
use std::collections::{BTreeSet, HashMap, HashSet};

/// In-memory snapshot of everything loaded for one session
///
/// Built once after a successful load and never mutated afterwards. Share it
/// with `Arc<RecordStore>`; every reader only needs `&self`.
///
/// Rows are kept in the order the source returned them, since the database
/// orders by its own collation. Construction only:
/// - drops empty and repeated cities and countries, keeping first occurrence
/// - discards ratings whose hotel was not loaded
#[derive(Debug, Clone)]
pub struct RecordStore {
    hotels: Vec<Hotel>,
    cities: Vec<String>,
    countries: Vec<String>,
    ratings: HashMap<HotelId, HotelRatings>,
    orphaned_ratings: usize,
    loaded_at: DateTime<Utc>,
}

impl RecordStore {
    pub fn new(
        hotels: Vec<Hotel>,
        cities: Vec<String>,
        countries: Vec<String>,
        ratings: Vec<HotelRatings>,
    ) -> Self {
        let known: HashSet<HotelId> = hotels.iter().map(|h| h.id).collect();
        let total_ratings = ratings.len();
        let ratings: HashMap<HotelId, HotelRatings> = ratings
            .into_iter()
            .filter(|r| known.contains(&r.hotel_id))
            .map(|r| (r.hotel_id, r))
            .collect();
        let orphaned_ratings = total_ratings.saturating_sub(ratings.len());

        if orphaned_ratings > 0 {
            tracing::warn!(
                "Discarded {} ratings rows with no matching hotel or a duplicate hotel id",
                orphaned_ratings
            );
        }

        Self {
            hotels,
            cities: distinct(cities),
            countries: distinct(countries),
            ratings,
            orphaned_ratings,
            loaded_at: Utc::now(),
        }
    }

    /// Build a store from unordered hotels, without a database
    ///
    /// Hotels are stably sorted by name and the city and country sets are
    /// derived and sorted, standing in for the `ORDER BY` of the real queries.
    pub fn from_hotels(mut hotels: Vec<Hotel>, ratings: Vec<HotelRatings>) -> Self {
        hotels.sort_by(|a, b| a.name.cmp(&b.name));
        let cities = sorted_values(&hotels, |h| h.city.as_str());
        let countries = sorted_values(&hotels, |h| h.country.as_str());
        Self::new(hotels, cities, countries, ratings)
    }

    /// An empty store, as seen when the database holds no hotels
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new(), Vec::new())
    }

    /// All hotels, in load order (by name)
    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    /// Distinct cities, in load order
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Distinct countries, in load order
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    #[inline]
    pub fn ratings_for(&self, hotel_id: HotelId) -> Option<&HotelRatings> {
        self.ratings.get(&hotel_id)
    }

    pub fn hotel(&self, hotel_id: HotelId) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.id == hotel_id)
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }

    /// Number of hotels that have a ratings entry
    pub fn rated_count(&self) -> usize {
        self.ratings.len()
    }

    /// Ratings rows dropped at construction
    pub fn orphaned_ratings(&self) -> usize {
        self.orphaned_ratings
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

fn distinct(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| !v.is_empty() && seen.insert(v.clone()))
        .collect()
}

fn sorted_values<F>(hotels: &[Hotel], field: F) -> Vec<String>
where
    F: Fn(&Hotel) -> &str,
{
    hotels
        .iter()
        .map(|h| field(h).to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
