//! route-planner core
//!
//! Sequences delivery waypoints from a fixed origin with a set of competing
//! TSP heuristics and ranks the resulting routes by distance.

pub mod traits;
pub mod point;
pub mod haversine;
pub mod route;
pub mod construct;
pub mod two_opt;
pub mod planner;

pub use planner::{create_optimized_route, generate_alternative_routes};
