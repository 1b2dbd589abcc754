//! Real São Paulo locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap, rounded to four decimals.

use route_planner::point::Point;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn to_point(&self, id: &str) -> Point {
        Point::new(id, self.name, self.lat, self.lng)
    }
}

// ============================================================================
// Depots (good for origin locations)
// ============================================================================

pub const DEPOTS: &[Location] = &[
    Location::new("CEAGESP", -23.5372, -46.7417),
    Location::new("Mercado Municipal", -23.5417, -46.6297),
    Location::new("Aeroporto de Congonhas", -23.6261, -46.6566),
];

// ============================================================================
// Centro
// ============================================================================

pub const CENTRO_LOCATIONS: &[Location] = &[
    Location::new("Praça da Sé", -23.5503, -46.6339),
    Location::new("Estação da Luz", -23.5347, -46.6352),
    Location::new("Pinacoteca", -23.5342, -46.6339),
    Location::new("Theatro Municipal", -23.5452, -46.6388),
    Location::new("Edifício Copan", -23.5465, -46.6445),
];

// ============================================================================
// Zona Oeste
// ============================================================================

pub const WEST_LOCATIONS: &[Location] = &[
    Location::new("Allianz Parque", -23.5275, -46.6784),
    Location::new("Vila Madalena", -23.5535, -46.6918),
    Location::new("Shopping Eldorado", -23.5727, -46.6962),
    Location::new("Parque Villa-Lobos", -23.5466, -46.7239),
    Location::new("Estádio do Morumbi", -23.6000, -46.7203),
];

// ============================================================================
// Zona Sul / Paulista
// ============================================================================

pub const SOUTH_LOCATIONS: &[Location] = &[
    Location::new("MASP", -23.5614, -46.6559),
    Location::new("Parque Ibirapuera", -23.5874, -46.6576),
    Location::new("Shopping Ibirapuera", -23.6100, -46.6670),
    Location::new("Vila Mariana", -23.5892, -46.6346),
];

/// Returns all delivery locations (no depots) as a single list.
pub fn all_locations() -> Vec<Location> {
    let mut all = Vec::with_capacity(16);
    all.extend_from_slice(CENTRO_LOCATIONS);
    all.extend_from_slice(WEST_LOCATIONS);
    all.extend_from_slice(SOUTH_LOCATIONS);
    all
}

/// Depot as origin followed by `count` delivery stops.
pub fn delivery_run(depot: &Location, count: usize) -> Vec<Point> {
    let mut points = vec![depot.to_point("depot").origin()];
    points.extend(
        all_locations()
            .iter()
            .take(count)
            .enumerate()
            .map(|(i, loc)| loc.to_point(&format!("stop_{}", i))),
    );
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_in_sao_paulo_area() {
        for loc in all_locations().iter().chain(DEPOTS) {
            assert!(loc.lat > -23.7 && loc.lat < -23.4, "{} lat out of range: {}", loc.name, loc.lat);
            assert!(loc.lng > -46.8 && loc.lng < -46.5, "{} lng out of range: {}", loc.name, loc.lng);
        }
    }
}
