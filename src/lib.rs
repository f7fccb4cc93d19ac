//! route-optimizer
//!
//! Orders geotagged cleanup stops into a short open path from an origin
//! (greedy nearest neighbor over haversine distance), estimates distance and
//! time, and re-plans as stops are completed.

pub mod config;
pub mod error;
pub mod estimate;
pub mod haversine;
pub mod optimizer;
#[cfg(feature = "osrm")]
pub mod osrm;
pub mod point;
pub mod polyline;
pub mod session;
pub mod tour;
pub mod traits;
pub mod waypoint;

pub use config::RouteConfig;
pub use error::{ConfigError, PointError};
#[cfg(feature = "osrm")]
pub use error::OsrmError;
pub use estimate::RouteEstimate;
pub use haversine::Haversine;
pub use optimizer::{optimize, recalculate_after_removal, RouteOptimizer, RoutePlan};
pub use point::Point;
pub use session::ActiveRoute;
pub use tour::Tour;
pub use traits::{DistanceMetric, Stop};
pub use waypoint::Waypoint;
