//! Test fixtures for route-optimizer.
//!
//! Provides realistic test data:
//! - Campus locations around a university in Las Vegas
//! - A cleanup report type carrying metadata the optimizer never reads

pub mod campus_locations;
