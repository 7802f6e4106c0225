use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where the hotel data lives
///
/// `username` and `password`, when set, take precedence over any
/// credentials embedded in `url`.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/hotels";

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HOTEL_)
    /// 5. DATABASE_URL / DATABASE_USER / DATABASE_PASSWORD
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("database.url", DEFAULT_DATABASE_URL)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HOTEL__DATABASE__URL -> database.url
            .add_source(env_source())
            .build()?;

        apply_database_env(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("HOTEL")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply the conventional database variables on top of the layered config
fn apply_database_env(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(url) = env::var("DATABASE_URL") {
        builder = builder.set_override("database.url", url)?;
    }
    if let Ok(user) = env::var("DATABASE_USER") {
        builder = builder.set_override("database.username", user)?;
    }
    if let Ok(password) = env::var("DATABASE_PASSWORD") {
        builder = builder.set_override("database.password", password)?;
    }

    builder.build()
}
