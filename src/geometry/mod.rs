use num_traits::Float;


/// Mean earth radius in miles
pub const EARTH_RADIUS_MILES: f64 = 3963.1915;


/// Haversine distance between two (lat, lon) pairs given in degrees
/// Result is in the same unit as `radius`
/// https://en.wikipedia.org/wiki/Haversine_formula
pub fn haversine<T>(lat1: T, lon1: T, lat2: T, lon2: T, radius: T) -> T
where
    T: Float,
    {
    let two = T::one() + T::one();
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / two).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / two).sin().powi(2);
    let c = two * a.sqrt().atan2((T::one() - a).sqrt());
    radius * c
}


/// Geographic (lat, lon) point in degrees
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {

    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to `other` in miles
    pub fn distance_miles(&self, other: &Coordinate) -> f64 {
        distance_miles(self, other)
    }
}


/// Great-circle distance between two coordinates in miles
pub fn distance_miles(a: &Coordinate, b: &Coordinate) -> f64 {
    haversine(a.lat, a.lon, b.lat, b.lon, EARTH_RADIUS_MILES)
}


/// Point halfway along the great circle between `a` and `b`
/// http://www.movable-type.co.uk/scripts/latlong.html#midpoint
pub fn midpoint(a: &Coordinate, b: &Coordinate) -> Coordinate {
    let (lat1, lon1) = (a.lat.to_radians(), a.lon.to_radians());
    let lat2 = b.lat.to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let bx = lat2.cos() * d_lon.cos();
    let by = lat2.cos() * d_lon.sin();

    let lat = (lat1.sin() + lat2.sin()).atan2(((lat1.cos() + bx).powi(2) + by.powi(2)).sqrt());
    let lon = lon1 + by.atan2(lat1.cos() + bx);

    Coordinate::new(lat.to_degrees(), lon.to_degrees())
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_to_self_is_zero() {
        let c = Coordinate::new(41.8708, -87.6505);
        assert_relative_eq!(c.distance_miles(&c), 0.0);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(1.0, 0.0);
        // one degree of arc on the reference sphere
        let expected = EARTH_RADIUS_MILES * std::f64::consts::PI / 180.0;
        assert_relative_eq!(distance_miles(&a, &b), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coordinate::new(41.8708, -87.6505);
        let b = Coordinate::new(41.8662, -87.6470);
        assert_relative_eq!(distance_miles(&a, &b), distance_miles(&b, &a), epsilon = 1e-12);
    }

    #[test]
    fn test_midpoint_on_equator() {
        let m = midpoint(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 10.0));
        assert_relative_eq!(m.lat, 0.0, epsilon = 1e-9);
        assert_relative_eq!(m.lon, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_midpoint_is_equidistant() {
        let a = Coordinate::new(41.8708, -87.6505);
        let b = Coordinate::new(41.8662, -87.6470);
        let m = midpoint(&a, &b);
        assert_relative_eq!(distance_miles(&a, &m), distance_miles(&m, &b), epsilon = 1e-9);
    }
}
