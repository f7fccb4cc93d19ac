//! A cleaner's active route, re-planned as stops are completed.
//!
//! The session is an owned value held by the caller. It does not persist
//! anything or synchronize with other sessions over the same stops.

use tracing::{debug, info};

use crate::estimate::RouteEstimate;
use crate::haversine::Haversine;
use crate::optimizer::{RouteOptimizer, RoutePlan};
use crate::point::Point;
use crate::tour::Tour;
use crate::traits::{DistanceMetric, Stop};

#[derive(Debug, Clone)]
pub struct ActiveRoute<S: Stop, D = Haversine> {
    optimizer: RouteOptimizer<D>,
    origin: Point,
    plan: RoutePlan<S>,
    completed: Vec<S::Id>,
}

impl<S: Stop, D: DistanceMetric> ActiveRoute<S, D> {
    /// Plans `stops` from `origin` and starts tracking completions.
    pub fn start(optimizer: RouteOptimizer<D>, origin: Point, stops: Vec<S>) -> Self {
        let plan = optimizer.optimize(origin, stops);
        Self {
            optimizer,
            origin,
            plan,
            completed: Vec::new(),
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn plan(&self) -> &RoutePlan<S> {
        &self.plan
    }

    pub fn remaining(&self) -> &Tour<S> {
        &self.plan.tour
    }

    pub fn estimate(&self) -> &RouteEstimate {
        &self.plan.estimate
    }

    pub fn next_stop(&self) -> Option<&S> {
        self.plan.tour.first()
    }

    pub fn completed_ids(&self) -> &[S::Id] {
        &self.completed
    }

    /// `(completed, total)` stop counts.
    pub fn progress(&self) -> (usize, usize) {
        let done = self.completed.len();
        (done, done + self.plan.tour.len())
    }

    pub fn is_finished(&self) -> bool {
        self.plan.tour.is_empty()
    }

    /// Marks `id` as done and re-plans the remaining stops from the origin.
    ///
    /// Returns false, leaving the plan untouched, when `id` is not in the
    /// remaining tour (already completed, or never part of it).
    pub fn complete(&mut self, id: &S::Id) -> bool {
        if !self.plan.tour.contains(id) {
            debug!(stop = ?id, "completion for stop not on route ignored");
            return false;
        }

        let previous = std::mem::replace(&mut self.plan, RoutePlan::empty());
        self.plan = self
            .optimizer
            .recalculate_after_removal(previous.tour, self.origin, id);
        self.completed.push(id.clone());

        let (done, total) = self.progress();
        info!(stop = ?id, done, total, "stop completed");
        true
    }

    /// Re-plans the remaining stops from a new origin, e.g. a fresh GPS fix.
    pub fn relocate(&mut self, origin: Point) {
        self.origin = origin;
        let previous = std::mem::replace(&mut self.plan, RoutePlan::empty());
        self.plan = self.optimizer.optimize(origin, previous.tour.into_stops());
    }

    pub fn into_plan(self) -> RoutePlan<S> {
        self.plan
    }
}
