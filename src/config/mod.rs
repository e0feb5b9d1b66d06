//! Configuration management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub pricing: PricingConfig,
    pub countdown: CountdownConfig,
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Operator display name used when no identity is supplied
    pub default_therapist: String,

    /// Default session length offered by the scheduling form
    pub default_duration_minutes: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_therapist: "Dr. Emily Chen".to_string(),
            default_duration_minutes: 60,
        }
    }
}

/// Session pricing in rupees
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Flat rate for an individual session
    pub individual_rate: u64,

    /// Per-participant rate for a group session
    pub group_rate: u64,

    /// Flat premium rate for a VR session
    pub vr_rate: u64,

    /// Operator share of gross revenue, in [0, 1]
    pub payout_fraction: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            individual_rate: 1499,
            group_rate: 499,
            vr_rate: 2499,
            payout_fraction: 0.60,
        }
    }
}

/// Countdown and waitlist tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    /// Seconds between countdown ticks
    pub tick_seconds: u64,

    /// Seconds between a join request and its confirmation
    pub join_confirm_seconds: u64,

    /// Waitlist count shown before anyone is nudged in
    pub initial_waitlist: u32,

    /// Hard cap on the displayed waitlist
    pub waitlist_cap: u32,

    /// Per-tick probability of a waitlist increment
    pub waitlist_probability: f64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            tick_seconds: 1,
            join_confirm_seconds: 2,
            initial_waitlist: 8,
            waitlist_cap: 15,
            waitlist_probability: 0.05,
        }
    }
}

impl Config {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific path, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("manas")
            .join("config.toml")
    }
}
