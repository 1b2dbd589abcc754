//! Haversine distance model.
//!
//! Great-circle distance between coordinates. Ignores roads; real travel
//! distance and time are supplied by the caller's own routing service.

use crate::traits::{DistanceMatrixProvider, Waypoint};

/// Square matrix of distances in meters, indexed by input order.
pub type DistanceMatrix = Vec<Vec<f64>>;

/// Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two coordinates in meters.
pub fn haversine_m(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Great-circle distance between two waypoints in meters.
///
/// Non-numeric coordinates propagate as NaN.
pub fn distance<P: Waypoint>(a: &P, b: &P) -> f64 {
    haversine_m(a.location(), b.location())
}

/// Build the full pairwise distance matrix for `points`.
pub fn build_distance_matrix<P: Waypoint>(points: &[P]) -> DistanceMatrix {
    let locations: Vec<(f64, f64)> = points.iter().map(Waypoint::location).collect();
    HaversineMatrix.matrix_for(&locations)
}

/// Convert a distance in meters to travel minutes at `speed_kmh`.
pub fn minutes_for(distance_m: f64, speed_kmh: f64) -> f64 {
    let km = distance_m / 1000.0;
    km / speed_kmh * 60.0
}

/// Haversine-based distance matrix provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineMatrix;

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> DistanceMatrix {
        let n = locations.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let meters = haversine_m(locations[i], locations[j]);
                matrix[i][j] = meters;
                matrix[j][i] = meters;
            }
        }

        matrix
    }
}
