//! Distance and time estimates for a tour.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::RouteConfig;
use crate::error::ConfigError;
use crate::point::Point;
use crate::tour::Tour;
use crate::traits::{DistanceMetric, Stop};

/// Aggregate distance/time for an origin followed by a tour.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteEstimate {
    /// Sum of all legs, in kilometers.
    pub total_distance_km: f64,
    /// Travel time at the configured speed plus dwell time at every stop.
    pub estimated_minutes: f64,
    /// Per-leg kilometers: origin to first stop, first to second, and so on.
    pub legs: Vec<f64>,
}

impl RouteEstimate {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Estimated minutes as a [`Duration`], rounded to whole seconds.
    pub fn estimated_duration(&self) -> Duration {
        let seconds = (self.estimated_minutes * 60.0).round();
        if seconds.is_finite() && seconds > 0.0 {
            Duration::from_secs(seconds as u64)
        } else {
            Duration::ZERO
        }
    }
}

/// Walks `origin, tour[0], .., tour[n-1]` and sums consecutive distances.
///
/// Fails with [`ConfigError`] before any work when `config` is invalid.
pub fn estimate<S, D>(
    origin: Point,
    tour: &Tour<S>,
    config: &RouteConfig,
    metric: &D,
) -> Result<RouteEstimate, ConfigError>
where
    S: Stop,
    D: DistanceMetric + ?Sized,
{
    config.validate()?;
    Ok(estimate_validated(origin, tour, config, metric))
}

/// [`estimate`] for a config already checked by the caller.
pub(crate) fn estimate_validated<S, D>(
    origin: Point,
    tour: &Tour<S>,
    config: &RouteConfig,
    metric: &D,
) -> RouteEstimate
where
    S: Stop,
    D: DistanceMetric + ?Sized,
{
    if tour.is_empty() {
        return RouteEstimate::zero();
    }

    let mut legs = Vec::with_capacity(tour.len());
    let mut previous = origin;
    for stop in tour {
        let location = stop.location();
        legs.push(metric.distance_km(previous, location));
        previous = location;
    }

    let total_distance_km: f64 = legs.iter().sum();
    let travel_minutes = total_distance_km / config.avg_speed_kmh * 60.0;
    let dwell_minutes = tour.len() as f64 * config.minutes_per_stop;

    RouteEstimate {
        total_distance_km,
        estimated_minutes: travel_minutes + dwell_minutes,
        legs,
    }
}
