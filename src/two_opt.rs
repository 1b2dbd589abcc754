//! 2-opt route improvement.
//!
//! First-improvement local search: reverse a segment, keep it if the total
//! distance strictly drops, restart the scan. Reversals span
//! `1 <= i < j < len - 1`, so position 0 (the origin) and the last position
//! (the final stop, or the trailing return-to-origin leg) never move.
//!
//! Each accepted move strictly lowers the total, so the search terminates.
//! Worst case is O(n³) per accepted move, fine for the waypoint counts a
//! single delivery run has.

use tracing::{debug, trace};

use crate::route::route_distance;

/// Gains below this (meters) are float noise from summing the same edges in
/// a different order, not real improvements.
const MIN_GAIN_M: f64 = 1e-6;

/// Improve `route` with 2-opt until no reversal shortens it.
pub fn two_opt(matrix: &[Vec<f64>], route: &[usize]) -> Vec<usize> {
    two_opt_bounded(matrix, route, None)
}

/// Like [`two_opt`], but stops after `max_passes` accepted moves if given.
pub fn two_opt_bounded(matrix: &[Vec<f64>], route: &[usize], max_passes: Option<usize>) -> Vec<usize> {
    let mut improved = route.to_vec();
    let mut passes = 0;

    while max_passes.is_none_or(|limit| passes < limit) {
        if !two_opt_improve(&mut improved, matrix) {
            break;
        }
        passes += 1;
    }

    if max_passes.is_some_and(|limit| passes >= limit) {
        debug!(passes, "2-opt stopped at pass budget");
    }

    improved
}

/// Apply the first improving segment reversal found.
/// Returns true if an improvement was made.
fn two_opt_improve(route: &mut [usize], matrix: &[Vec<f64>]) -> bool {
    let end = route.len().saturating_sub(1);
    if end < 3 {
        return false;
    }

    let current_cost = route_distance(matrix, route);

    for i in 1..end - 1 {
        for j in i + 1..end {
            route[i..=j].reverse();
            let cost = route_distance(matrix, route);
            if cost < current_cost - MIN_GAIN_M {
                trace!(i, j, from = current_cost, to = cost, "2-opt move accepted");
                return true;
            }
            route[i..=j].reverse();
        }
    }

    false
}
