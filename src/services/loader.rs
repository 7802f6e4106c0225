use crate::core::RecordStore;
use crate::services::source::{HotelSource, SourceError};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Errors that abort the initial load
///
/// Any of these means the main view must not be shown.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error loading hotel data: {0}")]
    Hotels(#[source] SourceError),

    #[error("Error loading city data: {0}")]
    Cities(#[source] SourceError),

    #[error("Error loading country data: {0}")]
    Countries(#[source] SourceError),

    #[error("Data loading task failed: {0}")]
    Task(String),
}

/// Problems that were logged and tolerated during a load
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadWarning {
    /// Ratings could not be read; hotels are shown without ratings
    #[error("Error loading ratings data: {0}")]
    Ratings(String),
}

/// The four load phases, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Hotels,
    Cities,
    Countries,
    Ratings,
}

impl LoadPhase {
    pub const ALL: [LoadPhase; 4] = [
        LoadPhase::Hotels,
        LoadPhase::Cities,
        LoadPhase::Countries,
        LoadPhase::Ratings,
    ];

    /// Status text shown while this phase runs
    pub fn status_message(self) -> &'static str {
        match self {
            LoadPhase::Hotels => "Loading hotel data...",
            LoadPhase::Cities => "Loading city data...",
            LoadPhase::Countries => "Loading country data...",
            LoadPhase::Ratings => "Loading ratings data...",
        }
    }
}

impl fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status_message())
    }
}

/// Result of a successful load
#[derive(Debug)]
pub struct LoadOutcome {
    pub store: RecordStore,
    pub warning: Option<LoadWarning>,
}

/// Runs the one-shot bulk load against a [`HotelSource`]
///
/// # Phases
/// 1. Hotels (fatal on failure)
/// 2. Cities (fatal on failure)
/// 3. Countries (fatal on failure)
/// 4. Ratings (failure is logged and loading continues without ratings)
#[derive(Clone)]
pub struct DataLoader {
    source: Arc<dyn HotelSource>,
}

impl DataLoader {
    pub fn new(source: Arc<dyn HotelSource>) -> Self {
        Self { source }
    }

    pub fn with_source<S: HotelSource + 'static>(source: S) -> Self {
        Self::new(Arc::new(source))
    }

    /// Load everything, reporting each phase before it starts
    pub async fn load<F>(&self, mut on_status: F) -> Result<LoadOutcome, LoadError>
    where
        F: FnMut(LoadPhase) + Send,
    {
        on_status(LoadPhase::Hotels);
        let hotels = self.source.fetch_hotels().await.map_err(LoadError::Hotels)?;
        info!("Loaded {} hotels", hotels.len());

        on_status(LoadPhase::Cities);
        let cities = self.source.fetch_cities().await.map_err(LoadError::Cities)?;
        info!("Loaded {} cities", cities.len());

        on_status(LoadPhase::Countries);
        let countries = self
            .source
            .fetch_countries()
            .await
            .map_err(LoadError::Countries)?;
        info!("Loaded {} countries", countries.len());

        on_status(LoadPhase::Ratings);
        let (ratings, warning) = match self.source.fetch_ratings().await {
            Ok(ratings) => {
                info!("Loaded {} hotel ratings", ratings.len());
                (ratings, None)
            }
            Err(e) => {
                let warning = LoadWarning::Ratings(e.to_string());
                warn!("{}; continuing without ratings", warning);
                (Vec::new(), Some(warning))
            }
        };

        let store = RecordStore::new(hotels, cities, countries, ratings);

        Ok(LoadOutcome { store, warning })
    }

    /// Run [`DataLoader::load`] on a background task
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(self) -> LoadTask {
        let (tx, status) = mpsc::unbounded_channel();

        let handle = tokio::spawn(async move {
            self.load(move |phase| {
                // The receiver may already be gone; the result still matters.
                let _ = tx.send(phase);
            })
            .await
        });

        LoadTask { status, handle }
    }
}

/// Handle to a load running in the background
pub struct LoadTask {
    status: mpsc::UnboundedReceiver<LoadPhase>,
    handle: JoinHandle<Result<LoadOutcome, LoadError>>,
}

impl LoadTask {
    /// Next phase started by the task, `None` once the task has finished
    pub async fn next_status(&mut self) -> Option<LoadPhase> {
        self.status.recv().await
    }

    /// Wait for the load result
    pub async fn wait(self) -> Result<LoadOutcome, LoadError> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) => Err(LoadError::Task(e.to_string())),
        }
    }

    /// Forward every status update to `on_status`, then wait for the result
    pub async fn finish<F>(mut self, mut on_status: F) -> Result<LoadOutcome, LoadError>
    where
        F: FnMut(LoadPhase),
    {
        while let Some(phase) = self.next_status().await {
            on_status(phase);
        }
        self.wait().await
    }
}
