//! Test fixtures for carpool-match.
//!
//! Provides:
//! - Route builders measured in meters
//! - Real Las Vegas commute endpoints (from OpenStreetMap)
//! - OSRM dataset preparation for container tests

#![allow(dead_code)]

pub mod las_vegas_locations;
pub mod osrm_dataset;
pub mod routes;

pub use routes::*;
