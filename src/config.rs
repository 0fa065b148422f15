use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::core::{EnhancedOptions, EnhancedScorer, Matcher};
use crate::models::{ScoringScheme, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub items_api: ItemsApiSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
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
pub struct ItemsApiSettings {
    #[serde(default = "default_items_api_url")]
    pub base_url: String,
    pub timeout_secs: Option<u64>,
    pub search_limit: Option<u32>,
}

impl Default for ItemsApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_items_api_url(),
            timeout_secs: None,
            search_limit: None,
        }
    }
}

fn default_items_api_url() -> String { "http://localhost:5000".to_string() }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    #[serde(default)]
    pub scheme: ScoringScheme,
    /// Overrides the scheme's default threshold
    pub min_score: Option<u8>,
    #[serde(default)]
    pub enhanced: EnhancedSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnhancedSettings {
    #[serde(default = "default_enhanced_min_score")]
    pub min_score: u8,
    #[serde(default = "default_enhanced_max_results")]
    pub max_results: usize,
    #[serde(default = "default_true")]
    pub placeholder_image_seeds: bool,
}

impl Default for EnhancedSettings {
    fn default() -> Self {
        Self {
            min_score: default_enhanced_min_score(),
            max_results: default_enhanced_max_results(),
            placeholder_image_seeds: true,
        }
    }
}

fn default_enhanced_min_score() -> u8 { 60 }
fn default_enhanced_max_results() -> usize { 10 }
fn default_true() -> bool { true }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Per-factor overrides on top of the scheme's weight table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeightsConfig {
    pub title: Option<f64>,
    pub category: Option<f64>,
    pub location: Option<f64>,
    pub description: Option<f64>,
    pub color: Option<f64>,
    pub size: Option<f64>,
}

impl WeightsConfig {
    pub fn resolve(&self, scheme: ScoringScheme) -> ScoringWeights {
        let defaults = scheme.default_weights();
        ScoringWeights {
            title: self.title.unwrap_or(defaults.title),
            category: self.category.unwrap_or(defaults.category),
            location: self.location.unwrap_or(defaults.location),
            description: self.description.unwrap_or(defaults.description),
            color: self.color.unwrap_or(defaults.color),
            size: self.size.unwrap_or(defaults.size),
        }
    }
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
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with LOSTFOUND__)
    /// 5. `ITEMS_API_URL`
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., LOSTFOUND__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("LOSTFOUND")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("LOSTFOUND")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Build the matcher described by the matching and scoring sections
    pub fn matcher(&self) -> Matcher {
        let scheme = self.matching.scheme;
        let min_score = self
            .matching
            .min_score
            .unwrap_or_else(|| scheme.default_min_score());

        Matcher::new(scheme, self.scoring.weights.resolve(scheme), min_score)
            .with_enhanced_scorer(EnhancedScorer::new(
                self.matching.enhanced.placeholder_image_seeds,
            ))
    }

    pub fn enhanced_options(&self) -> EnhancedOptions {
        EnhancedOptions {
            min_score: self.matching.enhanced.min_score,
            max_results: self.matching.enhanced.max_results,
        }
    }
}

/// `ITEMS_API_URL` overrides `items_api.base_url`
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("ITEMS_API_URL") {
        Ok(url) => Config::builder()
            .add_source(settings)
            .set_override("items_api.base_url", url)?
            .build(),
        Err(_) => Ok(settings),
    }
}
