//! Core domain traits for the route planner.
//!
//! These are intentionally minimal. Host apps can implement them for their
//! own data models instead of converting into [`crate::point::Point`].

use std::hash::Hash;

use crate::haversine::DistanceMatrix;

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// A waypoint is a single location to be sequenced into a route.
pub trait Waypoint {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Display name.
    fn name(&self) -> &str;

    /// Free-text address, if known.
    fn address(&self) -> Option<&str>;

    /// Location coordinates (lat, lng) in decimal degrees.
    fn location(&self) -> (f64, f64);

    /// Whether this waypoint is the fixed start (and optional end) of the route.
    fn is_origin(&self) -> bool;
}

/// Provides a distance matrix for a set of locations.
///
/// The matrix is indexed by the provided location order, in meters, and
/// must be symmetric with a zero diagonal.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> DistanceMatrix;
}

/// Index of the first waypoint flagged as origin.
pub fn origin_index<P: Waypoint>(points: &[P]) -> Option<usize> {
    points.iter().position(|point| point.is_origin())
}
