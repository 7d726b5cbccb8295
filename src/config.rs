use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::{GeoPoint, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub recommendations: RecommendationSettings,
    #[serde(default)]
    pub routing: RoutingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self { path: default_catalog_path() }
    }
}

fn default_catalog_path() -> String { "data/destinations.json".to_string() }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheSettings {
    pub ttl_secs: Option<u64>,
    pub max_entries: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationSettings {
    pub default_limit: Option<u16>,
    pub max_limit: Option<u16>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoutingSettings {
    #[serde(default = "default_start_lat")]
    pub default_start_lat: f64,
    #[serde(default = "default_start_lng")]
    pub default_start_lng: f64,
    #[serde(default = "default_average_speed_kmh")]
    pub average_speed_kmh: f64,
}

impl RoutingSettings {
    pub fn default_start(&self) -> GeoPoint {
        GeoPoint::new(self.default_start_lat, self.default_start_lng)
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            default_start_lat: default_start_lat(),
            default_start_lng: default_start_lng(),
            average_speed_kmh: default_average_speed_kmh(),
        }
    }
}

fn default_start_lat() -> f64 { crate::core::DEFAULT_START.lat }
fn default_start_lng() -> f64 { crate::core::DEFAULT_START.lng }
fn default_average_speed_kmh() -> f64 { 40.0 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_interest_weight")]
    pub interest: f64,
    #[serde(default = "default_rating_weight")]
    pub rating: f64,
    #[serde(default = "default_crowd_weight")]
    pub crowd: f64,
    #[serde(default = "default_season_weight")]
    pub season: f64,
    #[serde(default = "default_companion_weight")]
    pub companion: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            interest: default_interest_weight(),
            rating: default_rating_weight(),
            crowd: default_crowd_weight(),
            season: default_season_weight(),
            companion: default_companion_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            interest: config.interest,
            rating: config.rating,
            crowd: config.crowd,
            season: config.season,
            companion: config.companion,
        }
    }
}

fn default_interest_weight() -> f64 { 40.0 }
fn default_rating_weight() -> f64 { 20.0 }
fn default_crowd_weight() -> f64 { 20.0 }
fn default_season_weight() -> f64 { 10.0 }
fn default_companion_weight() -> f64 { 10.0 }

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

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl LogFormat {
    /// Unrecognised names fall back to the compact text format
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Compact,
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with YATRA_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., YATRA__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("YATRA")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
