//! Core domain traits for the route optimizer.
//!
//! These are intentionally minimal. Callers implement [`Stop`] for their own
//! report or task types; everything beyond id and location travels through
//! the optimizer untouched.

use std::fmt::Debug;
use std::hash::Hash;

use crate::point::Point;

/// Unique identifier for stops.
pub trait Id: Clone + Eq + Hash + Debug {}

impl<T> Id for T where T: Clone + Eq + Hash + Debug {}

/// A single geotagged location to be visited.
pub trait Stop {
    type Id: Id;

    /// Identifier, stable across recalculations.
    fn id(&self) -> &Self::Id;

    fn location(&self) -> Point;
}

/// Straight-line distance between two points, in kilometers.
pub trait DistanceMetric {
    fn distance_km(&self, from: Point, to: Point) -> f64;
}

impl<D: DistanceMetric + ?Sized> DistanceMetric for &D {
    fn distance_km(&self, from: Point, to: Point) -> f64 {
        (**self).distance_km(from, to)
    }
}
