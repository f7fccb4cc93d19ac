//! Error types for the route optimizer.
//!
//! The algorithm itself is total; errors only arise at the edges: a bad
//! configuration, a coordinate rejected at ingestion, or the mapping service.

use thiserror::Error;

/// Invalid [`RouteConfig`](crate::config::RouteConfig) values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("average speed must be a finite value greater than zero, got {0} km/h")]
    NonPositiveSpeed(f64),

    #[error("minutes per stop must be a finite, non-negative value, got {0}")]
    NegativeDwell(f64),

    #[error("environment variable {var} has an unparsable value {value:?}")]
    InvalidEnv { var: String, value: String },
}

/// Coordinates rejected by [`Point::validated`](crate::point::Point::validated).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PointError {
    #[error("coordinate contains a NaN or infinite value")]
    NonFinite,

    #[error("latitude {0} is outside -90..=90")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside -180..=180")]
    LongitudeOutOfRange(f64),
}

/// Failures talking to the OSRM route service.
#[cfg(feature = "osrm")]
#[derive(Error, Debug)]
pub enum OsrmError {
    #[error("OSRM request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OSRM returned no route: {0}")]
    NoRoute(String),
}
