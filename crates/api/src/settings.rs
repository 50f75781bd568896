//! Service Configuration

use scoring_engine::RiskPolicy;
use serde::Deserialize;
use std::path::PathBuf;

/// Risk banding thresholds, overridable per deployment
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RiskSettings {
    pub high_floor: f64,
    pub monitor_floor: f64,
}

impl Default for RiskSettings {
    fn default() -> Self {
        let policy = RiskPolicy::default();
        Self {
            high_floor: policy.high_floor,
            monitor_floor: policy.monitor_floor,
        }
    }
}

impl RiskSettings {
    /// Convert to the engine-side policy
    pub fn policy(&self) -> RiskPolicy {
        RiskPolicy {
            high_floor: self.high_floor,
            monitor_floor: self.monitor_floor,
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Path to the serialized scoring artifact
    pub artifact_path: PathBuf,
    /// Risk banding thresholds
    pub risk: RiskSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            artifact_path: PathBuf::from("attrition_pipeline.bin"),
            risk: RiskSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from an optional `attrition.toml` and `ATTRITION_*`
    /// environment variables, layered over the compiled defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("attrition").required(false))
            .add_source(config::Environment::with_prefix("ATTRITION").separator("__"))
            .build()?
            .try_deserialize()
    }
}
