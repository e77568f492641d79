use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use thiserror::Error;

/// Knobs for one extraction scan. Every field has a default tuned for the
/// Indian home market, so a missing or partial config file still works.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Exclusive plausible-price bounds on the raw extracted amount.
    pub min_price: f64,
    pub max_price: f64,
    /// Fragments outside these character bounds carry too little signal or
    /// too much noise to parse reliably.
    pub min_fragment_len: usize,
    pub max_fragment_len: usize,
    /// Stop scanning once this many records are accepted and the diversity
    /// minimums below are met.
    pub target_results: usize,
    /// Hard stop on accepted records, diversity or not.
    pub record_cap: usize,
    /// Hard stop on fragments examined, the safety net against runaway scans.
    pub fragment_cap: usize,
    /// Final truncation bound on the ranked output.
    pub max_results: usize,
    /// Minimum distinct airlines per category in the final set.
    pub min_domestic: usize,
    pub min_international: usize,
    /// Per-airline overrides of the loyalty earn fraction.
    pub earn_rate_overrides: HashMap<String, f64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_price: 1_000.0,
            max_price: 100_000.0,
            min_fragment_len: 20,
            max_fragment_len: 1_000,
            target_results: 10,
            record_cap: 15,
            fragment_cap: 100,
            max_results: 10,
            min_domestic: 2,
            min_international: 1,
            earn_rate_overrides: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pipeline: PipelineConfig,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            request_timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
