//! Geographic distance for the map view

/// Earth radius in kilometres
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometres
pub fn distance_km(a_lat: f64, a_lng: f64, b_lat: f64, b_lng: f64) -> f64 {
    let d_lat = (b_lat - a_lat).to_radians();
    let d_lng = (b_lng - a_lng).to_radians();
    let lat1 = a_lat.to_radians();
    let lat2 = b_lat.to_radians();

    let x = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * x.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance() {
        assert!(distance_km(40.4168, -3.7038, 40.4168, -3.7038) < 1e-9);
    }

    #[test]
    fn test_madrid_to_barcelona() {
        // Madrid (40.4168, -3.7038) to Barcelona (41.3874, 2.1686) is ~505 km
        let d = distance_km(40.4168, -3.7038, 41.3874, 2.1686);
        assert!((d - 505.0).abs() < 10.0, "unexpected distance: {}", d);
    }
}
