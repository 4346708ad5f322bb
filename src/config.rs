//! Configuration management for the BrandGraph engine
//!
//! Strongly-typed configuration with validation. Settings come either from
//! environment variables (with `.env` support) or from a TOML file; every
//! setting has a default.
//!
//! # Example
//! ```no_run
//! use brandgraph::Config;
//! let config = Config::from_env().expect("failed to load config");
//! println!("Catalog size: {}", config.catalog.size);
//! ```

use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::error::{Error, Result};

/// Number of brands in the catalog unless configured otherwise
pub const DEFAULT_CATALOG_SIZE: usize = 3;

/// Default tracing filter directive
pub const DEFAULT_LOG_FILTER: &str = "brandgraph=info";

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Brand catalog configuration
    pub catalog: CatalogConfig,
    /// Logging configuration
    pub log: LogConfig,
    /// Recommendation engine configuration
    pub recommendation: RecommendationConfig,
}

/// Brand catalog configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog file to load at startup
    pub path: Option<PathBuf>,
    /// Fixed number of brands the catalog must hold
    pub size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            size: DEFAULT_CATALOG_SIZE,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub filter: String,
    /// Output format
    pub format: LogFormat,
    /// Colourise output
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::Pretty,
            ansi: true,
        }
    }
}

/// Recommendation engine configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Suggestion runs slower than this are logged as warnings
    #[serde(rename = "slow_suggestion_ms", deserialize_with = "duration_from_ms")]
    pub slow_suggestion: Duration,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            slow_suggestion: Duration::from_millis(50),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore if not found)
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        config.log_summary();
        Ok(config)
    }

    /// Build configuration from any key/value source shaped like the environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            catalog: CatalogConfig {
                path: lookup("BRANDGRAPH_CATALOG_PATH")
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from),
                size: parse_or(&lookup, "BRANDGRAPH_CATALOG_SIZE", DEFAULT_CATALOG_SIZE)?,
            },
            log: LogConfig {
                filter: lookup("BRANDGRAPH_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
                format: parse_or(&lookup, "BRANDGRAPH_LOG_FORMAT", LogFormat::Pretty)?,
                ansi: lookup("NO_COLOR").is_none(),
            },
            recommendation: RecommendationConfig {
                slow_suggestion: Duration::from_millis(parse_or(
                    &lookup,
                    "BRANDGRAPH_SLOW_SUGGESTION_MS",
                    50u64,
                )?),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        config.log_summary();
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.catalog.size == 0 {
            return Err(Error::InvalidConfig {
                key: "BRANDGRAPH_CATALOG_SIZE",
                message: "catalog must hold at least one brand".into(),
            });
        }

        if self.log.filter.trim().is_empty() {
            return Err(Error::InvalidConfig {
                key: "BRANDGRAPH_LOG",
                message: "log filter cannot be empty".into(),
            });
        }

        Ok(())
    }

    /// Log configuration summary
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  Catalog:");
        match &self.catalog.path {
            Some(path) => info!("    Path: {}", path.display()),
            None => info!("    Path: <none>"),
        }
        info!("    Size: {}", self.catalog.size);
        info!("  Log:");
        info!("    Filter: {}", self.log.filter);
        info!("    Format: {:?}", self.log.format);
        info!("  Recommendation:");
        info!(
            "    Slow suggestion threshold: {:?}",
            self.recommendation.slow_suggestion
        );
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Parse a variable, falling back to `default` when it is unset
fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| Error::InvalidConfig {
            key,
            message: format!("Invalid value '{}': {}", value, e).into(),
        }),
    }
}

fn duration_from_ms<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_millis)
}
