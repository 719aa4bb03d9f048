//! # Configuration
//!
//! Environment-aware configuration loading. A `caseflow.toml` file (when
//! present) provides the base values; `CASEFLOW_`-prefixed environment
//! variables override individual keys. Feature flags default to disabled:
//! a flow only runs where an operator has switched it on.

use crate::error::{CoreError, Result};
use crate::refdata::FeatureFlagService;
use async_trait::async_trait;
use config::{Config, Environment, File};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_channel_capacity() -> usize {
    1000
}

/// Top-level configuration for the orchestration core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Capacity of the administrative command broadcast channel
    #[serde(default = "default_channel_capacity")]
    pub command_channel_capacity: usize,
    /// Per-event feature toggles keyed by logical event name
    #[serde(default)]
    pub feature_flags: HashMap<String, bool>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            command_channel_capacity: default_channel_capacity(),
            feature_flags: HashMap::new(),
        }
    }
}

impl CoreConfig {
    /// Load configuration from `caseflow.toml` (optional) merged with
    /// `CASEFLOW_`-prefixed environment variables.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file path, for tests and tools
    pub fn load_from(path: Option<&str>) -> Result<Self> {
        let mut builder =
            Config::builder().add_source(File::with_name(path.unwrap_or("caseflow")).required(false));
        builder = builder.add_source(Environment::with_prefix("CASEFLOW").separator("__"));

        builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| CoreError::Configuration {
                message: e.to_string(),
            })
    }
}

/// Feature flags backed by the loaded configuration table.
///
/// Absent flags read as disabled, which keeps an unconfigured flow silent
/// rather than surprising.
#[derive(Debug, Default)]
pub struct ConfiguredFeatureFlags {
    flags: RwLock<HashMap<String, bool>>,
}

impl ConfiguredFeatureFlags {
    pub fn new(flags: HashMap<String, bool>) -> Self {
        Self {
            flags: RwLock::new(flags),
        }
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(config.feature_flags.clone())
    }

    /// Toggle a flag at runtime
    pub fn set(&self, feature: impl Into<String>, enabled: bool) {
        self.flags.write().insert(feature.into(), enabled);
    }
}

#[async_trait]
impl FeatureFlagService for ConfiguredFeatureFlags {
    async fn is_enabled(&self, feature: &str) -> Result<bool> {
        Ok(self.flags.read().get(feature).copied().unwrap_or(false))
    }
}
