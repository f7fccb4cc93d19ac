//! Approximate locations on and around the UNLV campus.
//!
//! Coordinates are hand-placed near the named landmarks; they are close
//! enough for ordering tests, not surveyed.

use route_optimizer::point::Point;
use route_optimizer::traits::Stop;

/// A named location with coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn point(&self) -> Point {
        Point::new(self.lat, self.lng)
    }
}

// ============================================================================
// Staff start points
// ============================================================================

pub const FACILITIES_YARD: Location = Location::new("Facilities Yard", 36.1047, -115.1386);
pub const NORTH_GARAGE: Location = Location::new("Cottage Grove Garage", 36.1113, -115.1418);

// ============================================================================
// Reported waste spots
// ============================================================================

pub const REPORT_SPOTS: &[Location] = &[
    Location::new("Student Union patio", 36.1089, -115.1421),
    Location::new("Lied Library east steps", 36.1071, -115.1410),
    Location::new("Thomas & Mack west lot", 36.1053, -115.1449),
    Location::new("Science building courtyard", 36.1077, -115.1436),
    Location::new("Residence hall dumpsters", 36.1036, -115.1403),
    Location::new("Tennis complex fence", 36.1026, -115.1439),
    Location::new("Maryland Pkwy bus stop", 36.1096, -115.1366),
    Location::new("Engineering annex", 36.1060, -115.1392),
    Location::new("Arts quad", 36.1100, -115.1445),
    Location::new("Gym loading dock", 36.1045, -115.1420),
];

/// Waste category attached to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Plastic,
    Organic,
    Mixed,
}

/// A verified waste report assigned to a cleaner.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanupReport {
    pub id: String,
    pub location: Location,
    pub category: Category,
    pub photo_url: String,
}

impl CleanupReport {
    pub fn new(id: &str, location: Location) -> Self {
        Self {
            id: id.to_string(),
            photo_url: format!("https://storage.example/reports/{}.jpg", id),
            location,
            category: Category::Mixed,
        }
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }
}

impl Stop for CleanupReport {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn location(&self) -> Point {
        self.location.point()
    }
}

/// One report per fixture spot, ids `r0`, `r1`, ...
pub fn all_reports() -> Vec<CleanupReport> {
    REPORT_SPOTS
        .iter()
        .enumerate()
        .map(|(i, spot)| CleanupReport::new(&format!("r{}", i), spot.clone()))
        .collect()
}
