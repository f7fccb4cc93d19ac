//! Polyline representation for road geometry between tour waypoints.
//!
//! Points are kept decoded. Whatever compact encoding the map frontend wants
//! is applied at that boundary, not here.

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// Road geometry as decoded `(latitude, longitude)` points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last points, if any.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some(((*first).into(), (*last).into()))
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
