//! Test fixtures for route-planner.
//!
//! Provides realistic test data:
//! - Real São Paulo delivery locations (from OpenStreetMap)
//! - Helpers turning them into planner points

pub mod sao_paulo_locations;
