//! Great-circle distance on a spherical Earth.
//!
//! Ignores roads entirely. Good enough to decide visit order; actual road
//! geometry is the mapping service's job (see the `osrm` module).

use crate::point::Point;
use crate::traits::DistanceMetric;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Haversine;

impl DistanceMetric for Haversine {
    fn distance_km(&self, from: Point, to: Point) -> f64 {
        haversine_km(from, to)
    }
}

/// Calculate haversine distance between two points in kilometers.
///
/// Identical points give exactly `0.0`. Non-finite input is not rejected and
/// comes back as NaN.
pub fn haversine_km(from: Point, to: Point) -> f64 {
    if from == to {
        return 0.0;
    }

    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lng = (to.longitude - from.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push h just past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let p = Point::new(13.7563, 100.5018);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn test_haversine_one_degree_at_equator() {
        let dist = haversine_km(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
        assert_relative_eq!(dist, 111.194_926_6, epsilon = 1e-6);
    }

    #[test]
    fn test_haversine_known_distance() {
        // Las Vegas (36.17, -115.14) to Los Angeles (34.05, -118.24), ~370 km
        let dist = haversine_km(Point::new(36.17, -115.14), Point::new(34.05, -118.24));
        assert!(dist > 350.0 && dist < 400.0, "LV to LA should be ~370km, got {}", dist);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = Point::new(18.7883, 98.9853);
        let b = Point::new(18.8036, 98.9507);
        assert_relative_eq!(haversine_km(a, b), haversine_km(b, a), max_relative = 1e-9);
    }

    #[test]
    fn test_haversine_antipodal() {
        let dist = haversine_km(Point::new(0.0, 0.0), Point::new(0.0, 180.0));
        assert!(!dist.is_nan());
        assert_relative_eq!(dist, PI * EARTH_RADIUS_KM, max_relative = 1e-9);
    }

    #[test]
    fn test_haversine_propagates_nan() {
        let dist = haversine_km(Point::new(f64::NAN, 0.0), Point::new(0.0, 1.0));
        assert!(dist.is_nan());
    }

    #[test]
    fn test_metric_matches_free_function() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(Haversine.distance_km(a, b), haversine_km(a, b));
    }
}
