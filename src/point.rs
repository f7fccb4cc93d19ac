//! Geographic coordinates.

use serde::{Deserialize, Serialize};

use crate::error::PointError;

/// A latitude/longitude pair in degrees.
///
/// Construction through [`Point::new`] never validates; the distance math
/// accepts whatever it is given. Ingestion code should go through
/// [`Point::validated`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds a point, rejecting non-finite or out-of-range coordinates.
    pub fn validated(latitude: f64, longitude: f64) -> Result<Self, PointError> {
        let point = Self::new(latitude, longitude);
        point.validate()?;
        Ok(point)
    }

    pub fn validate(&self) -> Result<(), PointError> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(PointError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(PointError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(PointError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for Point {
    /// Converts a `(lat, lng)` tuple.
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.latitude, point.longitude)
    }
}
