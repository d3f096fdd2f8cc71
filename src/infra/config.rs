//! Configuration loading from TOML files
//!
//! Fare values and the station roster for the simulator are read from a
//! TOML file; every field has a default so a partial (or missing) file
//! still yields a usable configuration.

use crate::domain::station::Station;
use crate::domain::types::{Amount, FarePolicy, Zone, MAXIMUM_BALANCE, MINIMUM_FARE, PENALTY_FARE};
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct FaresConfig {
    /// Ceiling on the card balance after any top-up
    #[serde(default = "default_maximum_balance")]
    pub maximum_balance: i64,
    /// Minimum balance required to touch in; also the flat fare
    #[serde(default = "default_minimum_fare")]
    pub minimum_fare: i64,
    /// Charge applied at touch-out when no journey was opened
    #[serde(default = "default_penalty_fare")]
    pub penalty_fare: i64,
}

fn default_maximum_balance() -> i64 {
    MAXIMUM_BALANCE.0
}

fn default_minimum_fare() -> i64 {
    MINIMUM_FARE.0
}

fn default_penalty_fare() -> i64 {
    PENALTY_FARE.0
}

impl Default for FaresConfig {
    fn default() -> Self {
        Self {
            maximum_balance: default_maximum_balance(),
            minimum_fare: default_minimum_fare(),
            penalty_fare: default_penalty_fare(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationConfig {
    pub name: String,
    pub zone: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub fares: FaresConfig,
    #[serde(default)]
    pub stations: Vec<StationConfig>,
}

/// Main configuration struct used throughout the application
#[derive(Debug, Clone)]
pub struct Config {
    fare_policy: FarePolicy,
    stations: Vec<Station>,
    config_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fare_policy: FarePolicy::default(),
            stations: Self::default_stations(),
            config_file: "default".to_string(),
        }
    }
}

impl Config {
    fn default_stations() -> Vec<Station> {
        vec![
            Station::new("Aldgate", Zone(3)),
            Station::new("Euston", Zone(2)),
            Station::new("Victoria", Zone(1)),
            Station::new("Stratford", Zone(3)),
        ]
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let toml_config: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        let stations = if toml_config.stations.is_empty() {
            Self::default_stations()
        } else {
            toml_config
                .stations
                .into_iter()
                .map(|s| Station::new(s.name, Zone(s.zone)))
                .collect()
        };

        Ok(Self {
            fare_policy: FarePolicy {
                maximum_balance: Amount(toml_config.fares.maximum_balance),
                minimum_fare: Amount(toml_config.fares.minimum_fare),
                penalty_fare: Amount(toml_config.fares.penalty_fare),
            },
            stations,
            config_file: path.display().to_string(),
        })
    }

    /// Load configuration - tries the TOML file first, falls back to defaults
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    // Getters for all config fields
    pub fn fare_policy(&self) -> FarePolicy {
        self.fare_policy
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }
}
