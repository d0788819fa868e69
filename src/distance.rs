// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::Coordinate;

/// Mean radius of Earth, in kilometers.
/// Source: https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius
const EARTH_RADIUS: f64 = 6371.0088;

/// Mean diameter of Earth, in kilometers.
/// Source: https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius
const EARTH_DIAMETER: f64 = EARTH_RADIUS + EARTH_RADIUS;

/// Calculates the great-circle distance between two positions
/// on Earth using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
/// Returns the result in kilometers.
pub fn earth_distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lon1 = a.lon.to_radians();
    let lat2 = b.lat.to_radians();
    let lon2 = b.lon.to_radians();

    let sin_dlat_half = ((lat2 - lat1) * 0.5).sin();
    let sin_dlon_half = ((lon2 - lon1) * 0.5).sin();

    let h = sin_dlat_half * sin_dlat_half + lat1.cos() * lat2.cos() * sin_dlon_half * sin_dlon_half;

    // Rounding may push h slightly above 1 for antipodal points
    EARTH_DIAMETER * h.sqrt().min(1.0).asin()
}

/// Squared euclidean distance between two positions, treating
/// degrees of latitude and longitude as planar units.
///
/// Only suitable for comparing distances between nearby points -
/// the result has no physical unit and ignores the convergence of meridians.
pub fn planar_distance_squared(a: Coordinate, b: Coordinate) -> f64 {
    let dx = a.lon - b.lon;
    let dy = a.lat - b.lat;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_almost_eq {
        ($a:expr, $b:expr) => {
            assert!(
                (($a - $b).abs() < 1e-4),
                "assertion failed: {} ≈ {}",
                $a,
                $b
            )
        };
    }

    #[test]
    fn earth_distance_one_degree_of_latitude() {
        let d = earth_distance(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
        assert_almost_eq!(d, EARTH_RADIUS.to_radians());
    }

    #[test]
    fn earth_distance_is_symmetric() {
        let warsaw = Coordinate::new(52.2297, 21.0122);
        let krakow = Coordinate::new(50.0647, 19.9450);
        assert_almost_eq!(earth_distance(warsaw, krakow), earth_distance(krakow, warsaw));
        assert!((earth_distance(warsaw, krakow) - 252.0).abs() < 1.0);
    }

    #[test]
    fn earth_distance_same_point() {
        let p = Coordinate::new(43.7384, 7.4246);
        assert_eq!(earth_distance(p, p), 0.0);
    }

    #[test]
    fn planar_distance() {
        let origin = Coordinate::new(0.0, 0.0);
        assert_eq!(planar_distance_squared(origin, Coordinate::new(3.0, 4.0)), 25.0);
        assert_eq!(planar_distance_squared(Coordinate::new(0.4, 0.0), origin), 0.4 * 0.4);
    }
}
