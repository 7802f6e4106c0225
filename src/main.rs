use hotel_ratings::config::{LoggingSettings, Settings};
use hotel_ratings::presentation;
use hotel_ratings::services::{DataLoader, LoadOutcome, PostgresSource};
use hotel_ratings::{FilterEngine, FilterSession};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "json" {
        subscriber.json().init();
    } else {
        subscriber.pretty().init();
    }
}

/// Render the main view: the full listing with its heading
fn show_main_view(outcome: LoadOutcome) {
    if let Some(warning) = &outcome.warning {
        warn!("{}", warning);
    }

    let store = Arc::new(outcome.store);
    info!(
        "Loaded {} hotels ({} rated) at {}",
        store.len(),
        store.rated_count(),
        store.loaded_at()
    );

    let mut session = FilterSession::new(FilterEngine::new(store));
    let hotels = session.reset();

    println!("{}", presentation::simple_heading(hotels.len()));
    for hotel in &hotels {
        println!("{}", presentation::list_entry(hotel));
    }
    println!();
    println!("{}", presentation::details_title(None));
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);
    info!("Starting hotel ratings browser...");

    let source = match PostgresSource::from_settings(&settings.database) {
        Ok(source) => source,
        Err(e) => {
            error!("Invalid database configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let task = DataLoader::with_source(source).spawn();
    let result = task.finish(|phase| info!("{}", phase)).await;

    match result {
        Ok(outcome) => {
            show_main_view(outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Data loading failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
