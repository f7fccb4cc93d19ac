//! Route optimizer: tour construction plus estimates behind one API.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::RouteConfig;
use crate::error::ConfigError;
use crate::estimate::{estimate_validated, RouteEstimate};
use crate::haversine::Haversine;
use crate::point::Point;
use crate::tour::{build_tour, Tour};
use crate::traits::{DistanceMetric, Stop};

/// A visiting order together with its distance/time estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan<S> {
    pub tour: Tour<S>,
    pub estimate: RouteEstimate,
}

impl<S> RoutePlan<S> {
    pub fn empty() -> Self {
        Self {
            tour: Tour::default(),
            estimate: RouteEstimate::zero(),
        }
    }
}

/// Stateless optimizer holding a validated configuration and a metric.
///
/// Every call is a pure function of its arguments, so one optimizer can be
/// shared freely between threads.
#[derive(Debug, Clone)]
pub struct RouteOptimizer<D = Haversine> {
    config: RouteConfig,
    metric: D,
}

impl Default for RouteOptimizer<Haversine> {
    fn default() -> Self {
        Self {
            config: RouteConfig::default(),
            metric: Haversine,
        }
    }
}

impl RouteOptimizer<Haversine> {
    pub fn new(config: RouteConfig) -> Result<Self, ConfigError> {
        Self::with_metric(config, Haversine)
    }
}

impl<D: DistanceMetric> RouteOptimizer<D> {
    pub fn with_metric(config: RouteConfig, metric: D) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, metric })
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    pub fn metric(&self) -> &D {
        &self.metric
    }

    /// Orders `stops` starting from `origin` and estimates the result.
    #[instrument(level = "debug", skip_all, fields(stops = stops.len()))]
    pub fn optimize<S: Stop>(&self, origin: Point, stops: Vec<S>) -> RoutePlan<S> {
        let tour = build_tour(origin, stops, &self.metric);
        let estimate = estimate_validated(origin, &tour, &self.config, &self.metric);
        debug!(
            total_distance_km = estimate.total_distance_km,
            estimated_minutes = estimate.estimated_minutes,
            "route optimized"
        );
        RoutePlan { tour, estimate }
    }

    /// Drops `removed` from `previous` and re-plans the rest from `origin`.
    ///
    /// The remaining stops are fully re-ordered rather than spliced, since the
    /// removed stop may have been what made the old order nearest-first. An
    /// id that is not in `previous` leaves the stop set unchanged.
    #[instrument(level = "debug", skip_all, fields(stops = previous.len(), removed = ?removed))]
    pub fn recalculate_after_removal<S: Stop>(
        &self,
        previous: Tour<S>,
        origin: Point,
        removed: &S::Id,
    ) -> RoutePlan<S> {
        let mut stops = previous.into_stops();
        let before = stops.len();
        stops.retain(|stop| stop.id() != removed);
        if stops.len() == before {
            warn!(removed = ?removed, "stop not in previous tour, re-planning unchanged set");
        }
        self.optimize(origin, stops)
    }

    /// Plans several independent routes in parallel, e.g. one per cleaner.
    ///
    /// Results come back in request order. Stops are never moved between
    /// requests.
    #[instrument(level = "debug", skip_all, fields(requests = requests.len()))]
    pub fn optimize_batch<S>(&self, requests: Vec<(Point, Vec<S>)>) -> Vec<RoutePlan<S>>
    where
        S: Stop + Send,
        D: Sync,
    {
        requests
            .into_par_iter()
            .map(|(origin, stops)| self.optimize(origin, stops))
            .collect()
    }
}

/// Validates `config`, then plans `stops` from `origin` with haversine distance.
pub fn optimize<S: Stop>(
    origin: Point,
    stops: Vec<S>,
    config: &RouteConfig,
) -> Result<RoutePlan<S>, ConfigError> {
    Ok(RouteOptimizer::new(*config)?.optimize(origin, stops))
}

/// Validates `config`, then re-plans `previous` without `removed`.
pub fn recalculate_after_removal<S: Stop>(
    previous: Tour<S>,
    origin: Point,
    removed: &S::Id,
    config: &RouteConfig,
) -> Result<RoutePlan<S>, ConfigError> {
    Ok(RouteOptimizer::new(*config)?.recalculate_after_removal(previous, origin, removed))
}
