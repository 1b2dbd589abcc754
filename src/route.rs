//! Index-route helpers shared by constructors, the improver and the planner.

/// Total distance of `route`, summing consecutive matrix entries.
pub fn route_distance(matrix: &[Vec<f64>], route: &[usize]) -> f64 {
    route.windows(2).map(|pair| matrix[pair[0]][pair[1]]).sum()
}

/// Whether `route` starts at `start`, visits every index in `0..n` exactly
/// once and ends with the return leg when `return_to_origin` is set.
pub fn is_valid_route(route: &[usize], n: usize, start: usize, return_to_origin: bool) -> bool {
    if route.first() != Some(&start) {
        return false;
    }

    let body = if return_to_origin {
        if route.len() < 2 || route.last() != Some(&start) {
            return false;
        }
        &route[..route.len() - 1]
    } else {
        route
    };

    if body.len() != n {
        return false;
    }

    let mut seen = vec![false; n];
    for &index in body {
        if index >= n || seen[index] {
            return false;
        }
        seen[index] = true;
    }
    true
}

/// Rotate `route` so it begins at `start`, keeping a trailing return leg.
///
/// Routes that do not contain `start` are returned unchanged.
pub fn rotate_to_start(route: &[usize], start: usize, return_to_origin: bool) -> Vec<usize> {
    let has_return = return_to_origin && route.len() > 1 && route.first() == route.last();
    let body = if has_return { &route[..route.len() - 1] } else { route };

    let Some(position) = body.iter().position(|&index| index == start) else {
        return route.to_vec();
    };

    let mut rotated = body.to_vec();
    rotated.rotate_left(position);
    if return_to_origin {
        rotated.push(start);
    }
    rotated
}
