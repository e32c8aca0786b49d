use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::query::{CategoryTable, ThrottlePolicy};
use crate::user::User;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub appdir: Option<String>,
    #[serde(default)]
    pub seed: Option<String>,
    #[serde(default)]
    pub categories: CategoryTable,
    #[serde(default)]
    pub distance: DistanceConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(skip)]
    pub debug_logs: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DistanceConfig {
    #[serde(default = "default_distance_threshold")]
    pub threshold: f64,
    #[serde(alias = "maxresults", default = "default_distance_max_results")]
    pub max_results: usize,
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            threshold: default_distance_threshold(),
            max_results: default_distance_max_results(),
        }
    }
}

impl From<&DistanceConfig> for ThrottlePolicy {
    fn from(config: &DistanceConfig) -> Self {
        ThrottlePolicy {
            threshold: config.threshold,
            max_results: config.max_results,
        }
    }
}

/// Simulated per-operation latency, in milliseconds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LatencyConfig {
    #[serde(default = "default_query_ms")]
    pub query: u64,
    #[serde(default = "default_lookup_ms")]
    pub get: u64,
    #[serde(default = "default_lookup_ms")]
    pub save: u64,
    #[serde(alias = "getuser", default = "default_get_user_ms")]
    pub get_user: u64,
    #[serde(alias = "updatepreferences", default = "default_update_ms")]
    pub update_preferences: u64,
    #[serde(alias = "completeonboarding", default = "default_query_ms")]
    pub complete_onboarding: u64,
    #[serde(alias = "savedlocations", default = "default_lookup_ms")]
    pub saved_locations: u64,
}

impl LatencyConfig {
    /// No delay at all.
    pub fn none() -> Self {
        Self {
            query: 0,
            get: 0,
            save: 0,
            get_user: 0,
            update_preferences: 0,
            complete_onboarding: 0,
            saved_locations: 0,
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            query: default_query_ms(),
            get: default_lookup_ms(),
            save: default_lookup_ms(),
            get_user: default_get_user_ms(),
            update_preferences: default_update_ms(),
            complete_onboarding: default_query_ms(),
            saved_locations: default_lookup_ms(),
        }
    }
}

pub fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaginationConfig {
    #[serde(alias = "defaultlimit", default = "default_limit")]
    pub default_limit: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

fn default_port() -> String {
    "8080".to_string()
}

fn default_distance_threshold() -> f64 {
    5.0
}

fn default_distance_max_results() -> usize {
    3
}

fn default_query_ms() -> u64 {
    800
}

fn default_lookup_ms() -> u64 {
    500
}

fn default_get_user_ms() -> u64 {
    600
}

fn default_update_ms() -> u64 {
    700
}

fn default_limit() -> usize {
    crate::query::pagination::DEFAULT_LIMIT
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        Self::from_yaml(&content).map_err(|e| ConfigError::ParseError(path.to_string(), e))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document parses as null, which serde_yaml won't map onto a struct.
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
}
