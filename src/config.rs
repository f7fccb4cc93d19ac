//! Time-estimation policy.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Assumed average urban travel speed.
pub const DEFAULT_AVG_SPEED_KMH: f64 = 30.0;

/// Assumed time spent working at each stop.
pub const DEFAULT_MINUTES_PER_STOP: f64 = 15.0;

pub const AVG_SPEED_ENV: &str = "ROUTE_AVG_SPEED_KMH";
pub const MINUTES_PER_STOP_ENV: &str = "ROUTE_MINUTES_PER_STOP";

/// Tunable parameters for route time estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Average travel speed in km/h. Must be greater than zero.
    pub avg_speed_kmh: f64,
    /// Fixed dwell time per stop, independent of distance.
    pub minutes_per_stop: f64,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            avg_speed_kmh: DEFAULT_AVG_SPEED_KMH,
            minutes_per_stop: DEFAULT_MINUTES_PER_STOP,
        }
    }
}

impl RouteConfig {
    pub fn new(avg_speed_kmh: f64, minutes_per_stop: f64) -> Result<Self, ConfigError> {
        let config = Self {
            avg_speed_kmh,
            minutes_per_stop,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.avg_speed_kmh.is_finite() || self.avg_speed_kmh <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed(self.avg_speed_kmh));
        }
        if !self.minutes_per_stop.is_finite() || self.minutes_per_stop < 0.0 {
            return Err(ConfigError::NegativeDwell(self.minutes_per_stop));
        }
        Ok(())
    }

    /// Defaults overridden by `ROUTE_AVG_SPEED_KMH` / `ROUTE_MINUTES_PER_STOP`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            avg_speed_kmh: parse_var(&lookup, AVG_SPEED_ENV)?.unwrap_or(defaults.avg_speed_kmh),
            minutes_per_stop: parse_var(&lookup, MINUTES_PER_STOP_ENV)?
                .unwrap_or(defaults.minutes_per_stop),
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_var<F>(lookup: &F, var: &str) -> Result<Option<f64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnv {
            var: var.to_string(),
            value: raw,
        })
}
