use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;
use std::path::Path;
use crate::models::{ResultOrder, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
    #[serde(default)]
    pub result_order: ResultOrder,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_batch_size: default_max_batch_size(),
            result_order: ResultOrder::default(),
        }
    }
}

fn default_max_batch_size() -> usize { 1000 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_waste_weight")]
    pub waste: f64,
    #[serde(default = "default_cost_weight")]
    pub cost: f64,
    #[serde(default = "default_dimension_weight")]
    pub dimension: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            waste: default_waste_weight(),
            cost: default_cost_weight(),
            dimension: default_dimension_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            waste: config.waste,
            cost: config.cost,
            dimension: config.dimension,
        }
    }
}

fn default_waste_weight() -> f64 { 40.0 }
fn default_cost_weight() -> f64 { 30.0 }
fn default_dimension_weight() -> f64 { 30.0 }

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
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with STORAGE__)
    /// 5. CATALOG_PATH, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., STORAGE__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        apply_catalog_path(settings, std::env::var("CATALOG_PATH").ok())?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::load_from_with_catalog_path(path, std::env::var("CATALOG_PATH").ok())
    }

    fn load_from_with_catalog_path<P: AsRef<Path>>(
        path: P,
        catalog_path: Option<String>,
    ) -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        apply_catalog_path(settings, catalog_path)?.try_deserialize()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("catalog.path", "config/listings.json")
}

fn environment() -> Environment {
    Environment::with_prefix("STORAGE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply the unprefixed CATALOG_PATH variable that deployments set directly
fn apply_catalog_path(settings: Config, catalog_path: Option<String>) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Some(path) = catalog_path {
        builder = builder.set_override("catalog.path", path)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.waste, 40.0);
        assert_eq!(weights.cost, 30.0);
        assert_eq!(weights.dimension, 30.0);
        assert_eq!(ScoringWeights::from(&weights), ScoringWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
host = "127.0.0.1"
port = 9090

[catalog]
path = "data/spaces.json"

[matching]
result_order = "input"
max_batch_size = 50
"#
        )
        .unwrap();

        let settings = Settings::load_from_with_catalog_path(file.path(), None).unwrap();

        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.catalog.path, "data/spaces.json");
        assert_eq!(settings.matching.result_order, ResultOrder::Input);
        assert_eq!(settings.matching.max_batch_size, 50);
        assert_eq!(settings.scoring_weights(), ScoringWeights::default());
        assert_eq!(settings.logging.format, "json");
    }

    #[test]
    fn test_sections_are_optional() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[logging]\nformat = \"pretty\"").unwrap();

        let settings = Settings::load_from_with_catalog_path(file.path(), None).unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.catalog.path, "config/listings.json");
        assert_eq!(settings.matching.max_batch_size, 1000);
        assert_eq!(settings.matching.result_order, ResultOrder::VolumeSorted);
        assert_eq!(settings.logging.format, "pretty");
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_catalog_path_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[catalog]\npath = \"data/spaces.json\"").unwrap();

        let settings = Settings::load_from_with_catalog_path(
            file.path(),
            Some("/srv/listings.json".to_string()),
        )
        .unwrap();

        assert_eq!(settings.catalog.path, "/srv/listings.json");
    }
}
