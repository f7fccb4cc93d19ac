//! Greedy nearest-neighbor tour construction.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::point::Point;
use crate::traits::{DistanceMetric, Stop};

/// An ordered visiting sequence over a set of stops.
///
/// The path is open: it starts at an origin that is not itself part of the
/// tour and does not return to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tour<S> {
    stops: Vec<S>,
}

impl<S> Default for Tour<S> {
    fn default() -> Self {
        Self { stops: Vec::new() }
    }
}

impl<S> Tour<S> {
    /// Wraps stops that are already in visiting order.
    pub fn from_ordered(stops: Vec<S>) -> Self {
        Self { stops }
    }

    pub fn stops(&self) -> &[S] {
        &self.stops
    }

    pub fn into_stops(self) -> Vec<S> {
        self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.stops.iter()
    }

    pub fn first(&self) -> Option<&S> {
        self.stops.first()
    }
}

impl<S: Stop> Tour<S> {
    pub fn ids(&self) -> Vec<&S::Id> {
        self.stops.iter().map(Stop::id).collect()
    }

    pub fn locations(&self) -> Vec<Point> {
        self.stops.iter().map(Stop::location).collect()
    }

    /// Zero-based visiting position of the stop with `id`.
    pub fn position_of(&self, id: &S::Id) -> Option<usize> {
        self.stops.iter().position(|stop| stop.id() == id)
    }

    pub fn contains(&self, id: &S::Id) -> bool {
        self.position_of(id).is_some()
    }
}

impl<S> IntoIterator for Tour<S> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a Tour<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.iter()
    }
}

/// Orders `stops` by repeatedly visiting the closest unvisited one.
///
/// Starting from `origin`, each step scans the remaining stops and picks the
/// one with strictly minimal distance from the current position. Ties go to
/// the stop that came first in the input. O(n²) in the number of stops.
pub fn build_tour<S, D>(origin: Point, stops: Vec<S>, metric: &D) -> Tour<S>
where
    S: Stop,
    D: DistanceMetric + ?Sized,
{
    if stops.len() <= 1 {
        return Tour::from_ordered(stops);
    }

    let total = stops.len();
    let mut remaining = stops;
    let mut ordered = Vec::with_capacity(total);
    let mut current = origin;

    while !remaining.is_empty() {
        let mut best_index = 0;
        let mut best_distance = f64::INFINITY;

        for (index, candidate) in remaining.iter().enumerate() {
            let distance = metric.distance_km(current, candidate.location());
            if distance < best_distance {
                best_distance = distance;
                best_index = index;
            }
        }

        // `Vec::remove` keeps the rest in input order, which the tie-break
        // relies on.
        let next = remaining.remove(best_index);
        trace!(stop = ?next.id(), distance_km = best_distance, "nearest stop");
        current = next.location();
        ordered.push(next);
    }

    debug!(stops = total, "built nearest-neighbor tour");
    Tour::from_ordered(ordered)
}
