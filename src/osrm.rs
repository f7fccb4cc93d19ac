//! OSRM HTTP adapter: hands an ordered tour to the route service.
//!
//! The optimizer decides visit order only. This client asks an OSRM-compatible
//! server for the road geometry through those waypoints, in that order, for
//! map rendering.

use serde::Deserialize;
use tracing::debug;

use crate::error::OsrmError;
use crate::point::Point;
use crate::polyline::Polyline;
use crate::tour::Tour;
use crate::traits::Stop;

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "car".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Road route through an ordered set of waypoints.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadRoute {
    pub geometry: Polyline,
    pub distance_m: f64,
    pub duration_s: f64,
}

impl RoadRoute {
    fn empty() -> Self {
        Self {
            geometry: Polyline::new(Vec::new()),
            distance_m: 0.0,
            duration_s: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Route-service URL visiting `origin` and then every stop in tour order.
    pub fn route_url<S: Stop>(&self, origin: Point, tour: &Tour<S>) -> String {
        let coords = std::iter::once(origin)
            .chain(tour.iter().map(Stop::location))
            .map(|point| format!("{:.6},{:.6}", point.longitude, point.latitude))
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/route/v1/{}/{}?overview=full&geometries=geojson",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            coords
        )
    }

    /// Fetches road geometry for the tour. An empty tour needs no request.
    pub fn route_geometry<S: Stop>(&self, origin: Point, tour: &Tour<S>) -> Result<RoadRoute, OsrmError> {
        if tour.is_empty() {
            return Ok(RoadRoute::empty());
        }

        let url = self.route_url(origin, tour);
        debug!(waypoints = tour.len() + 1, "requesting OSRM route");

        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmRouteResponse>())?;

        body.into_road_route()
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    /// GeoJSON order: `[lng, lat]`.
    coordinates: Vec<(f64, f64)>,
}

impl OsrmRouteResponse {
    fn into_road_route(self) -> Result<RoadRoute, OsrmError> {
        if self.code != "Ok" {
            return Err(OsrmError::NoRoute(
                self.message.unwrap_or(self.code),
            ));
        }

        let route = self
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| OsrmError::NoRoute("empty routes array".to_string()))?;

        let points = route
            .geometry
            .coordinates
            .into_iter()
            .map(|(lng, lat)| (lat, lng))
            .collect();

        Ok(RoadRoute {
            geometry: Polyline::new(points),
            distance_m: route.distance,
            duration_s: route.duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waypoint::Waypoint;

    fn client(base_url: &str) -> OsrmClient {
        OsrmClient::new(OsrmConfig {
            base_url: base_url.to_string(),
            ..OsrmConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_route_url_puts_origin_first_in_lng_lat_order() {
        let tour = Tour::from_ordered(vec![
            Waypoint::new(1, Point::new(18.8, 98.95)),
            Waypoint::new(2, Point::new(18.81, 98.96)),
        ]);
        let url = client("http://osrm.local/").route_url(Point::new(18.79, 98.94), &tour);
        assert_eq!(
            url,
            "http://osrm.local/route/v1/car/98.940000,18.790000;98.950000,18.800000;98.960000,18.810000?overview=full&geometries=geojson"
        );
    }

    #[test]
    fn test_empty_tour_skips_request() {
        // Unroutable host: a request would fail.
        let client = client("http://127.0.0.1:9");
        let tour: Tour<Waypoint<u32>> = Tour::default();
        let route = client.route_geometry(Point::new(0.0, 0.0), &tour).unwrap();
        assert!(route.geometry.points().is_empty());
        assert_eq!(route.distance_m, 0.0);
    }

    #[test]
    fn test_parse_ok_response() {
        let body = r#"{
            "code": "Ok",
            "routes": [{
                "distance": 1520.4,
                "duration": 301.2,
                "geometry": {"type": "LineString", "coordinates": [[98.94, 18.79], [98.95, 18.80]]}
            }],
            "waypoints": []
        }"#;
        let response: OsrmRouteResponse = serde_json::from_str(body).unwrap();
        let route = response.into_road_route().unwrap();
        assert_eq!(route.geometry.points(), &[(18.79, 98.94), (18.80, 98.95)]);
        assert_eq!(route.distance_m, 1520.4);
        assert_eq!(route.duration_s, 301.2);
    }

    #[test]
    fn test_parse_error_response() {
        let body = r#"{"code": "NoRoute", "message": "Impossible route between points"}"#;
        let response: OsrmRouteResponse = serde_json::from_str(body).unwrap();
        match response.into_road_route() {
            Err(OsrmError::NoRoute(message)) => assert_eq!(message, "Impossible route between points"),
            other => panic!("expected NoRoute, got {:?}", other),
        }
    }
}
