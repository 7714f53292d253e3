//! Node configuration parameters.
//!
//! Node-wide tunables only.  Device definitions (names, codes, pins) are
//! literal in `main.rs`, the way they are wired on the board.
//!
//! Builds may bake in overrides as JSON through the `RFNODE_CONFIG`
//! environment variable; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Log verbosity applied at boot.  `Debug` narrates every RF transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// Core node configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// How often every device re-reports its state to the hub (seconds).
    pub device_refresh_interval_secs: u32,
    /// Control loop poll period (milliseconds).
    pub loop_interval_ms: u32,
    pub log_level: LogLevel,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            device_refresh_interval_secs: 86_400, // once a day
            loop_interval_ms: 100,
            log_level: LogLevel::Info,
        }
    }
}

impl NodeConfig {
    /// Parse a (possibly partial) JSON override and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }

    /// Build-time override if one was baked in, defaults otherwise.
    pub fn load() -> Result<Self> {
        match option_env!("RFNODE_CONFIG") {
            Some(json) => Self::from_json(json),
            None => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Reject values the control loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.loop_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("loop_interval_ms must be > 0").into());
        }
        if self.device_refresh_interval_secs == 0 {
            return Err(
                ConfigError::ValidationFailed("device_refresh_interval_secs must be > 0").into(),
            );
        }
        if u64::from(self.device_refresh_interval_secs) * 1000 < u64::from(self.loop_interval_ms) {
            return Err(ConfigError::ValidationFailed(
                "device refresh must not be faster than the control loop",
            )
            .into());
        }
        Ok(())
    }

    pub fn refresh_interval_ms(&self) -> u64 {
        u64::from(self.device_refresh_interval_secs) * 1000
    }
}
