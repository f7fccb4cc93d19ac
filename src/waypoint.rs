//! A ready-made [`Stop`] for callers without their own stop type.

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::traits::{Id, Stop};

/// A stop with an identifier, a location and opaque caller metadata.
///
/// The metadata (address label, waste category, priority, ...) is never
/// inspected by the optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint<I, M = ()> {
    pub id: I,
    pub location: Point,
    pub metadata: M,
}

impl<I> Waypoint<I, ()> {
    pub fn new(id: I, location: Point) -> Self {
        Self {
            id,
            location,
            metadata: (),
        }
    }
}

impl<I, M> Waypoint<I, M> {
    pub fn with_metadata(id: I, location: Point, metadata: M) -> Self {
        Self {
            id,
            location,
            metadata,
        }
    }
}

impl<I: Id, M> Stop for Waypoint<I, M> {
    type Id = I;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn location(&self) -> Point {
        self.location
    }
}
