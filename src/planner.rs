//! Route planner: runs every construction strategy and ranks the results.

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, warn};

use crate::construct::{farthest_first, geographical, nearest_neighbor, reverse_order};
use crate::haversine::{minutes_for, DistanceMatrix, HaversineMatrix};
use crate::route::{is_valid_route, rotate_to_start, route_distance};
use crate::traits::{origin_index, DistanceMatrixProvider, Waypoint};
use crate::two_opt::two_opt_bounded;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerOptions {
    /// Assumed average speed in km/h for time estimates.
    pub average_speed_kmh: f64,
    /// Refine the nearest-neighbor route with 2-opt.
    pub two_opt: bool,
    /// Maximum accepted 2-opt moves. Unbounded when `None`.
    pub max_two_opt_passes: Option<usize>,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            average_speed_kmh: 60.0,
            two_opt: true,
            max_two_opt_passes: None,
        }
    }
}

/// The heuristic that produced a candidate route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// One or two points; nothing to sequence.
    Direct,
    NearestNeighbor,
    /// Nearest-neighbor refined by 2-opt.
    Optimized,
    FarthestFirst,
    Geographical,
    ReverseOrder,
}

impl Strategy {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Direct => "Direct Route",
            Strategy::NearestNeighbor => "Nearest Neighbor",
            Strategy::Optimized => "Optimized (Nearest Neighbor + 2-opt)",
            Strategy::FarthestFirst => "Farthest First",
            Strategy::Geographical => "Geographical (North to South)",
            Strategy::ReverseOrder => "Reverse Order",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Strategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One strategy's scored route.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRoute<'a, P> {
    pub strategy: Strategy,
    pub points: Vec<&'a P>,
    /// Positions of `points` in the input slice.
    pub indices: Vec<usize>,
    pub total_distance_m: f64,
    pub estimated_minutes: f64,
}

impl<P: Waypoint> CandidateRoute<'_, P> {
    pub fn distance_km(&self) -> f64 {
        self.total_distance_m / 1000.0
    }

    pub fn ids(&self) -> Vec<P::Id> {
        self.points.iter().map(|point| point.id().clone()).collect()
    }
}

impl<P> fmt::Display for CandidateRoute<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.1} km, {:.0} min",
            self.strategy,
            self.total_distance_m / 1000.0,
            self.estimated_minutes
        )
    }
}

/// Why no route could be planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    /// The input had no points.
    NoLocations,
    /// No point is flagged as origin.
    NoOrigin,
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::NoLocations => f.write_str("no locations to route"),
            PlanError::NoOrigin => f.write_str("no location is marked as origin"),
        }
    }
}

impl Error for PlanError {}

/// Planner bound to a distance model and options.
#[derive(Debug, Clone, Default)]
pub struct RoutePlanner<M = HaversineMatrix> {
    options: PlannerOptions,
    matrix_provider: M,
}

impl RoutePlanner<HaversineMatrix> {
    pub fn new(options: PlannerOptions) -> Self {
        Self::with_provider(options, HaversineMatrix)
    }
}

impl<M: DistanceMatrixProvider> RoutePlanner<M> {
    /// Use a different symmetric distance model.
    pub fn with_provider(options: PlannerOptions, matrix_provider: M) -> Self {
        Self {
            options,
            matrix_provider,
        }
    }

    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    /// Run every strategy over `points` and return the distinct routes,
    /// shortest first. The first entry is the recommended route.
    pub fn generate_alternative_routes<'a, P: Waypoint>(
        &self,
        points: &'a [P],
        return_to_origin: bool,
    ) -> Result<Vec<CandidateRoute<'a, P>>, PlanError> {
        if points.is_empty() {
            warn!("route requested without locations");
            return Err(PlanError::NoLocations);
        }
        let Some(origin) = origin_index(points) else {
            warn!(points = points.len(), "route requested without an origin");
            return Err(PlanError::NoOrigin);
        };

        let locations: Vec<(f64, f64)> = points.iter().map(Waypoint::location).collect();
        let matrix = self.matrix_provider.matrix_for(&locations);

        if points.len() <= 2 {
            let route = direct_route(points.len(), origin, return_to_origin);
            return Ok(vec![self.score(Strategy::Direct, points, &matrix, route)]);
        }

        let mut routes: Vec<(Strategy, Vec<usize>)> = Vec::with_capacity(4);

        let greedy = nearest_neighbor(&matrix, origin, return_to_origin);
        let (strategy, greedy) = if self.options.two_opt {
            let improved = two_opt_bounded(&matrix, &greedy, self.options.max_two_opt_passes);
            (Strategy::Optimized, improved)
        } else {
            (Strategy::NearestNeighbor, greedy)
        };
        let greedy = if greedy.first() == Some(&origin) {
            greedy
        } else {
            warn!(?greedy, origin, "nearest-neighbor route lost its origin, rotating");
            rotate_to_start(&greedy, origin, return_to_origin)
        };
        routes.push((strategy, greedy));

        routes.push((Strategy::FarthestFirst, farthest_first(&matrix, origin, return_to_origin)));
        routes.push((Strategy::Geographical, geographical(points, origin, return_to_origin)));
        routes.push((Strategy::ReverseOrder, reverse_order(points, origin, return_to_origin)));

        let candidates = routes
            .into_iter()
            .map(|(strategy, route)| {
                debug_assert!(
                    is_valid_route(&route, points.len(), origin, return_to_origin),
                    "{} produced an invalid route {:?}",
                    strategy,
                    route
                );
                self.score(strategy, points, &matrix, route)
            })
            .collect();

        let mut candidates = dedupe(candidates);
        candidates.sort_by(|a, b| a.total_distance_m.total_cmp(&b.total_distance_m));
        Ok(candidates)
    }

    /// The recommended route's points, or `points` unchanged if no route
    /// could be planned.
    pub fn create_optimized_route<'a, P: Waypoint>(&self, points: &'a [P], return_to_origin: bool) -> Vec<&'a P> {
        match self.generate_alternative_routes(points, return_to_origin) {
            Ok(candidates) => candidates
                .into_iter()
                .next()
                .map(|best| best.points)
                .unwrap_or_else(|| points.iter().collect()),
            Err(err) => {
                warn!(%err, "falling back to input order");
                points.iter().collect()
            }
        }
    }

    fn score<'a, P: Waypoint>(
        &self,
        strategy: Strategy,
        points: &'a [P],
        matrix: &DistanceMatrix,
        indices: Vec<usize>,
    ) -> CandidateRoute<'a, P> {
        let total_distance_m = route_distance(matrix, &indices);
        let estimated_minutes = minutes_for(total_distance_m, self.options.average_speed_kmh);
        debug!(%strategy, total_distance_m, estimated_minutes, "scored strategy");

        CandidateRoute {
            strategy,
            points: indices.iter().map(|&index| &points[index]).collect(),
            indices,
            total_distance_m,
            estimated_minutes,
        }
    }
}

/// [`RoutePlanner::generate_alternative_routes`] with default options.
pub fn generate_alternative_routes<P: Waypoint>(
    points: &[P],
    return_to_origin: bool,
) -> Result<Vec<CandidateRoute<'_, P>>, PlanError> {
    RoutePlanner::new(PlannerOptions::default()).generate_alternative_routes(points, return_to_origin)
}

/// [`RoutePlanner::create_optimized_route`] with default options.
pub fn create_optimized_route<P: Waypoint>(points: &[P], return_to_origin: bool) -> Vec<&P> {
    RoutePlanner::new(PlannerOptions::default()).create_optimized_route(points, return_to_origin)
}

fn direct_route(n: usize, origin: usize, return_to_origin: bool) -> Vec<usize> {
    let mut route = vec![origin];
    if n == 2 {
        route.push(1 - origin);
        if return_to_origin {
            route.push(origin);
        }
    }
    route
}

/// Keep the first candidate for each (id sequence, whole-meter distance).
fn dedupe<'a, P: Waypoint>(candidates: Vec<CandidateRoute<'a, P>>) -> Vec<CandidateRoute<'a, P>> {
    let mut seen: HashSet<(Vec<P::Id>, i64)> = HashSet::new();
    let mut unique = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let key = (candidate.ids(), candidate.total_distance_m.round() as i64);
        if seen.insert(key) {
            unique.push(candidate);
        } else {
            debug!(strategy = %candidate.strategy, "dropping duplicate route");
        }
    }
    unique
}
