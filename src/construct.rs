//! Route construction heuristics.
//!
//! Every constructor returns a visiting order as point indices, starting at
//! `start_index` and, when `return_to_origin` is set, ending with it again.
//! Each other index appears exactly once.

use std::cmp::Ordering;

use tracing::warn;

use crate::traits::Waypoint;

/// Latitude difference (degrees, ~1.1 km) below which two points count as
/// being on the same row for the geographical sweep.
const LATITUDE_BAND_DEG: f64 = 0.01;

/// Greedy nearest-neighbor tour over `matrix`.
///
/// Ties go to the lowest index.
pub fn nearest_neighbor(matrix: &[Vec<f64>], start_index: usize, return_to_origin: bool) -> Vec<usize> {
    greedy(matrix, start_index, return_to_origin, |candidate, best| candidate < best)
}

/// Greedy tour that always jumps to the farthest unvisited point.
///
/// Ties go to the lowest index.
pub fn farthest_first(matrix: &[Vec<f64>], start_index: usize, return_to_origin: bool) -> Vec<usize> {
    greedy(matrix, start_index, return_to_origin, |candidate, best| candidate > best)
}

/// North-to-south sweep, west-to-east within a latitude band.
pub fn geographical<P: Waypoint>(points: &[P], start_index: usize, return_to_origin: bool) -> Vec<usize> {
    let mut rest: Vec<usize> = (0..points.len()).filter(|&i| i != start_index).collect();

    // The band comparison is not transitive; slice::sort_by may panic on it.
    insertion_sort_by(&mut rest, |&a, &b| {
        let (lat_a, lng_a) = points[a].location();
        let (lat_b, lng_b) = points[b].location();
        if (lat_a - lat_b).abs() < LATITUDE_BAND_DEG {
            lng_a.partial_cmp(&lng_b).unwrap_or(Ordering::Equal)
        } else {
            lat_b.partial_cmp(&lat_a).unwrap_or(Ordering::Equal)
        }
    });

    finish(start_index, rest, return_to_origin)
}

/// Input order of the non-origin points, reversed. Ignores distance.
pub fn reverse_order<P>(points: &[P], start_index: usize, return_to_origin: bool) -> Vec<usize> {
    let rest: Vec<usize> = (0..points.len()).rev().filter(|&i| i != start_index).collect();
    finish(start_index, rest, return_to_origin)
}

fn greedy<F>(matrix: &[Vec<f64>], start_index: usize, return_to_origin: bool, better: F) -> Vec<usize>
where
    F: Fn(f64, f64) -> bool,
{
    let n = matrix.len();
    let mut visited = vec![false; n];
    let mut route = Vec::with_capacity(n + 1);

    visited[start_index] = true;
    route.push(start_index);
    let mut current = start_index;

    while route.len() < n {
        let mut best: Option<(usize, f64)> = None;
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let d = matrix[current][candidate];
            if best.is_none_or(|(_, best_d)| better(d, best_d)) {
                best = Some((candidate, d));
            }
        }

        debug_assert!(best.is_some(), "no unvisited point left with {} of {} routed", route.len(), n);
        let Some((next, _)) = best else {
            warn!(routed = route.len(), total = n, "constructor ran out of candidates, returning partial route");
            break;
        };

        visited[next] = true;
        route.push(next);
        current = next;
    }

    if return_to_origin {
        route.push(start_index);
    }
    route
}

fn finish(start_index: usize, rest: Vec<usize>, return_to_origin: bool) -> Vec<usize> {
    let mut route = Vec::with_capacity(rest.len() + 2);
    route.push(start_index);
    route.extend(rest);
    if return_to_origin {
        route.push(start_index);
    }
    route
}

fn insertion_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
