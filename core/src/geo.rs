use crate::model::running::Coordinate;

/// Mean Earth radius in metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;
pub const METRES_PER_MILE: f64 = 1609.34;

/// Great-circle distance between two coordinates, in metres.
pub fn haversine_distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

pub fn metres_to_miles(metres: f64) -> f64 {
    metres / METRES_PER_MILE
}

pub fn distance_miles(a: &Coordinate, b: &Coordinate) -> f64 {
    metres_to_miles(haversine_distance(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        let p = Coordinate::new(40.0149, -105.2705);
        assert_eq!(haversine_distance(&p, &p), 0.0);
    }

    #[test]
    fn test_one_millidegree_of_longitude_on_equator() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 0.001);
        let metres = haversine_distance(&a, &b);
        assert!((metres - 111.19).abs() < 0.01, "got {metres}");
        assert!((distance_miles(&a, &b) - 0.06909).abs() < 0.0001);
    }

    #[test]
    fn test_symmetric() {
        let a = Coordinate::new(51.5007, -0.1246);
        let b = Coordinate::new(40.6892, -74.0445);
        let ab = haversine_distance(&a, &b);
        assert!((ab - haversine_distance(&b, &a)).abs() < 1e-6);
        // London to New York is roughly 5570 km.
        assert!((ab / 1000.0 - 5574.0).abs() < 10.0, "got {ab}");
    }
}
