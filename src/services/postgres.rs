use crate::config::DatabaseSettings;
use crate::models::{Hotel, HotelId, HotelRatings};
use crate::services::source::{HotelSource, SourceError};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgRow};
use sqlx::{Connection, PgConnection, Row};
use std::str::FromStr;

const HOTELS_QUERY: &str = r#"
    SELECT id::int4 AS id, name, city, country
    FROM Hotel
    ORDER BY name
"#;

const CITIES_QUERY: &str = r#"
    SELECT DISTINCT city
    FROM Hotel
    ORDER BY city
"#;

const COUNTRIES_QUERY: &str = r#"
    SELECT DISTINCT country
    FROM Hotel
    ORDER BY country
"#;

const RATINGS_QUERY: &str = r#"
    SELECT
        hotelId::int4 AS hotel_id,
        avgService::float8 AS avg_service,
        avgPrice::float8 AS avg_price,
        avgRoom::float8 AS avg_room,
        avgLocation::float8 AS avg_location,
        avgOverall::float8 AS avg_overall,
        totalReviews::int8 AS total_reviews
    FROM RatingsAverage
"#;

/// PostgreSQL-backed hotel source
///
/// Opens a fresh connection for every query and closes it before
/// returning, whether the query succeeded or not. No pool is kept: the
/// loader runs exactly four queries per session.
pub struct PostgresSource {
    options: PgConnectOptions,
}

impl PostgresSource {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }

    /// Build connect options from the connection string, then apply the
    /// configured username and password on top of it
    pub fn from_settings(settings: &DatabaseSettings) -> Result<Self, SourceError> {
        Ok(Self::new(connect_options(settings)?))
    }

    async fn run_query<T, F>(&self, label: &str, sql: &str, map_row: F) -> Result<Vec<T>, SourceError>
    where
        F: Fn(&PgRow) -> Result<T, SourceError>,
    {
        let mut conn = PgConnection::connect_with(&self.options).await?;

        let result = sqlx::query(sql).fetch_all(&mut conn).await;

        if let Err(e) = conn.close().await {
            tracing::warn!("Failed to close {} connection cleanly: {}", label, e);
        }

        let rows = result?;
        let total = rows.len();
        tracing::debug!("Fetched {} {} rows", total, label);

        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                if let Some(percent) = progress_percent(i + 1, total) {
                    tracing::debug!(
                        "Processed {} {} of {} ({}% complete)",
                        label,
                        i + 1,
                        total,
                        percent
                    );
                }
                map_row(row)
            })
            .collect()
    }
}

const PROGRESS_INTERVAL: usize = 100;

/// Completion percentage to report after `done` rows, every
/// `PROGRESS_INTERVAL` rows
fn progress_percent(done: usize, total: usize) -> Option<usize> {
    if total == 0 || done == 0 || done % PROGRESS_INTERVAL != 0 {
        return None;
    }
    Some(done * 100 / total)
}

pub(crate) fn connect_options(settings: &DatabaseSettings) -> Result<PgConnectOptions, SourceError> {
    let mut options = PgConnectOptions::from_str(&settings.url)?;

    if let Some(username) = settings.username.as_deref().filter(|u| !u.is_empty()) {
        options = options.username(username);
    }
    if let Some(password) = settings.password.as_deref().filter(|p| !p.is_empty()) {
        options = options.password(password);
    }

    Ok(options)
}

fn hotel_from_row(row: &PgRow) -> Result<Hotel, SourceError> {
    let id: HotelId = row.try_get("id")?;
    let name: Option<String> = row.try_get("name")?;
    let city: Option<String> = row.try_get("city")?;
    let country: Option<String> = row.try_get("country")?;

    Ok(Hotel {
        id,
        name: name.unwrap_or_default(),
        city: city.unwrap_or_default(),
        country: country.unwrap_or_default(),
    })
}

/// One `RatingsAverage` row as decoded from the database, before validation
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RatingsRow {
    pub hotel_id: HotelId,
    pub avg_service: Option<f64>,
    pub avg_price: Option<f64>,
    pub avg_room: Option<f64>,
    pub avg_location: Option<f64>,
    pub avg_overall: Option<f64>,
    pub total_reviews: i64,
}

impl RatingsRow {
    fn from_row(row: &PgRow) -> Result<Self, SourceError> {
        Ok(Self {
            hotel_id: row.try_get("hotel_id")?,
            avg_service: row.try_get("avg_service")?,
            avg_price: row.try_get("avg_price")?,
            avg_room: row.try_get("avg_room")?,
            avg_location: row.try_get("avg_location")?,
            avg_overall: row.try_get("avg_overall")?,
            total_reviews: row.try_get("total_reviews")?,
        })
    }

    /// Reject rows with a missing average or a negative review count
    pub fn validate(self) -> Result<HotelRatings, SourceError> {
        let hotel_id = self.hotel_id;
        let score = |value: Option<f64>, column: &str| {
            value.ok_or_else(|| {
                SourceError::InvalidRow(format!("hotel {} has no value for {}", hotel_id, column))
            })
        };

        let total_reviews = u32::try_from(self.total_reviews).map_err(|_| {
            SourceError::InvalidRow(format!(
                "hotel {} has an invalid review count {}",
                hotel_id, self.total_reviews
            ))
        })?;

        Ok(HotelRatings {
            hotel_id,
            service: score(self.avg_service, "avg_service")?,
            price: score(self.avg_price, "avg_price")?,
            room: score(self.avg_room, "avg_room")?,
            location: score(self.avg_location, "avg_location")?,
            overall: score(self.avg_overall, "avg_overall")?,
            total_reviews,
        })
    }
}

/// Keep every valid ratings row; invalid rows are logged and counted
pub(crate) fn collect_valid_ratings(rows: Vec<RatingsRow>) -> (Vec<HotelRatings>, usize) {
    let mut skipped = 0;
    let ratings = rows
        .into_iter()
        .filter_map(|row| match row.validate() {
            Ok(ratings) => Some(ratings),
            Err(e) => {
                tracing::warn!("Skipping ratings row: {}", e);
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        tracing::warn!("Skipped {} invalid ratings rows", skipped);
    }

    (ratings, skipped)
}

fn distinct_value(column: &'static str) -> impl Fn(&PgRow) -> Result<Option<String>, SourceError> {
    move |row| Ok(row.try_get::<Option<String>, _>(column)?)
}

#[async_trait]
impl HotelSource for PostgresSource {
    async fn fetch_hotels(&self) -> Result<Vec<Hotel>, SourceError> {
        self.run_query("hotel", HOTELS_QUERY, hotel_from_row).await
    }

    async fn fetch_cities(&self) -> Result<Vec<String>, SourceError> {
        let cities = self.run_query("city", CITIES_QUERY, distinct_value("city")).await?;
        Ok(cities.into_iter().flatten().collect())
    }

    async fn fetch_countries(&self) -> Result<Vec<String>, SourceError> {
        let countries = self
            .run_query("country", COUNTRIES_QUERY, distinct_value("country"))
            .await?;
        Ok(countries.into_iter().flatten().collect())
    }

    async fn fetch_ratings(&self) -> Result<Vec<HotelRatings>, SourceError> {
        let rows = self.run_query("ratings", RATINGS_QUERY, RatingsRow::from_row).await?;
        let (ratings, _skipped) = collect_valid_ratings(rows);
        Ok(ratings)
    }
}
