use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::comparison::ComparisonConfig;
use crate::usage::DEFAULT_MONTHLY_LIMIT;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// OCR provider selection
    #[serde(default)]
    pub provider: OcrProviderType,

    /// OCR backend settings
    #[serde(default)]
    pub ocr: OcrConfig,

    /// Comparison engine tuning
    #[serde(default)]
    pub comparison: ComparisonConfig,

    /// Usage quota settings
    #[serde(default)]
    pub usage: UsageConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// OCR provider type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OcrProviderType {
    /// Google Cloud Vision REST API
    #[default]
    GoogleVision,
    /// In-memory mock backend
    Mock,
}

impl OcrProviderType {
    /// Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::GoogleVision => "Google Vision",
            Self::Mock => "Mock",
        }
    }
}

impl std::fmt::Display for OcrProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GoogleVision => write!(f, "google_vision"),
            Self::Mock => write!(f, "mock"),
        }
    }
}

impl std::str::FromStr for OcrProviderType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "google_vision" | "googlevision" | "vision" => Ok(Self::GoogleVision),
            "mock" => Ok(Self::Mock),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// OCR backend configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OcrConfig {
    /// API key for the backend
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service URL; empty means the provider's public endpoint
    #[serde(default = "String::new")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Usage quota configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UsageConfig {
    /// Path of the JSON usage counter file
    #[serde(default = "default_usage_file")]
    pub usage_file: String,

    /// Maximum OCR requests per calendar month
    #[serde(default = "default_monthly_limit")]
    pub monthly_limit: u32,
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self {
            usage_file: default_usage_file(),
            monthly_limit: default_monthly_limit(),
        }
    }
}

/// Log level configuration
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level (default)
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_usage_file() -> String {
    "usage.json".to_string()
}

fn default_monthly_limit() -> u32 {
    DEFAULT_MONTHLY_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: OcrProviderType::default(),
            ocr: OcrConfig::default(),
            comparison: ComparisonConfig::default(),
            usage: UsageConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, writing a default file when none exists yet.
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::from_file(path);
        }

        let config = Config::default();
        config.save(&path)?;
        log::info!("Created default configuration at {:?}", path.as_ref());
        Ok(config)
    }

    /// Write the configuration as pretty JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&path, serialized)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Validate field ranges and provider requirements.
    ///
    /// The mock provider needs no credentials; Google Vision requires an API
    /// key, but that is only enforced when the provider is actually built so
    /// offline commands work with an empty config.
    pub fn validate(&self) -> Result<()> {
        if self.comparison.min_word_length == 0 {
            return Err(anyhow!("comparison.min_word_length must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.comparison.fuzzy_threshold) {
            return Err(anyhow!("comparison.fuzzy_threshold must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.comparison.unchanged_threshold) {
            return Err(anyhow!("comparison.unchanged_threshold must be within [0, 1]"));
        }
        if self.usage.monthly_limit == 0 {
            return Err(anyhow!("usage.monthly_limit must be at least 1"));
        }
        if self.ocr.timeout_secs == 0 {
            return Err(anyhow!("ocr.timeout_secs must be at least 1"));
        }
        Ok(())
    }
}
