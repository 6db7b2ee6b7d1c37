//! Configuration management for styletune
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.styletune/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{Result, TunerError};

/// Complete configuration for styletune
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub learner: LearnerConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Learning hyper-parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerConfig {
    /// Probability of picking a uniformly random action
    pub exploration_rate: f64,
    /// Step applied to style parameters by an action's nudge
    pub parameter_step: f64,
    /// Alpha in the value update
    pub value_learning_rate: f64,
    /// Gamma in the value update
    pub discount_factor: f64,
    /// Fixed RNG seed; entropy-seeded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Prompt rendering options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Word cap stated in the persona line
    pub max_words: usize,
    /// Append threshold guidance derived from the style parameters
    pub style_guidance: bool,
}

/// Telemetry and logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Events retained per learner
    pub max_events: usize,
    /// Default tracing filter for the binary
    pub log_level: String,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            exploration_rate: 0.3,
            parameter_step: 0.1,
            value_learning_rate: 0.1,
            discount_factor: 0.9,
            seed: None,
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            max_words: 100,
            style_guidance: true,
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            max_events: 256,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| TunerError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| TunerError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Standard config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".styletune").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        check_unit("exploration_rate", self.learner.exploration_rate)?;
        check_unit("parameter_step", self.learner.parameter_step)?;
        check_unit("value_learning_rate", self.learner.value_learning_rate)?;
        check_unit("discount_factor", self.learner.discount_factor)?;

        if self.learner.parameter_step == 0.0 {
            return Err(TunerError::ConfigError(
                "parameter_step must be greater than 0".to_string(),
            ));
        }

        if self.prompt.max_words == 0 {
            return Err(TunerError::ConfigError(
                "max_words must be greater than 0".to_string(),
            ));
        }

        if self.telemetry.max_events == 0 {
            return Err(TunerError::ConfigError(
                "max_events must be greater than 0".to_string(),
            ));
        }

        match self.telemetry.log_level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            other => {
                return Err(TunerError::ConfigError(format!(
                    "Invalid log level: {}",
                    other
                )))
            }
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TunerError::ConfigError(format!("Failed to create config dir: {}", e))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| TunerError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| TunerError::ConfigError(format!("Failed to serialize config: {}", e)))
    }
}

fn check_unit(name: &'static str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(TunerError::OutOfRange {
            name,
            value,
            min: 0.0,
            max: 1.0,
        });
    }
    Ok(())
}
