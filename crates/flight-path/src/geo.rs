//! Spherical geometry primitives.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the globe, optionally labeled with a place name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub name: Option<String>,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            name: None,
        }
    }

    pub fn with_name(latitude: f64, longitude: f64, name: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            name: Some(name.into()),
        }
    }
}

/// Great-circle distance between two points (Haversine formula), in
/// kilometers. Symmetric; zero for coincident points.
pub fn haversine_distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Initial bearing from `a` to `b` in degrees, normalized to [0, 360).
/// 0 is north. Bearing drifts along a great circle, so this is only the
/// departure heading; the reverse bearing is not simply +180.
pub fn initial_bearing_deg(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let x = delta_lon.sin() * lat2_rad.cos();
    let y = lat1_rad.cos() * lat2_rad.sin() - lat1_rad.sin() * lat2_rad.cos() * delta_lon.cos();

    let bearing = x.atan2(y).to_degrees();
    (bearing + 360.0) % 360.0
}

/// Point a fraction of the way from `a` to `b` along the great circle
/// (spherical linear interpolation). Coincident endpoints return `a`'s
/// coordinates.
pub fn intermediate_point(a: &GeoPoint, b: &GeoPoint, fraction: f64) -> GeoPoint {
    let angular = haversine_distance_km(a, b) / EARTH_RADIUS_KM;
    if angular < 1e-12 {
        return GeoPoint::new(a.latitude, a.longitude);
    }

    let lat1 = a.latitude.to_radians();
    let lon1 = a.longitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let lon2 = b.longitude.to_radians();

    let factor_a = ((1.0 - fraction) * angular).sin() / angular.sin();
    let factor_b = (fraction * angular).sin() / angular.sin();

    let x = factor_a * lat1.cos() * lon1.cos() + factor_b * lat2.cos() * lon2.cos();
    let y = factor_a * lat1.cos() * lon1.sin() + factor_b * lat2.cos() * lon2.sin();
    let z = factor_a * lat1.sin() + factor_b * lat2.sin();

    let lat = z.atan2((x * x + y * y).sqrt());
    let lon = y.atan2(x);
    GeoPoint::new(lat.to_degrees(), lon.to_degrees())
}

/// Destination point after traveling `distance_km` from `origin` on the
/// given initial bearing.
pub fn destination_point(origin: &GeoPoint, bearing_deg: f64, distance_km: f64) -> GeoPoint {
    let lat1 = origin.latitude.to_radians();
    let lon1 = origin.longitude.to_radians();
    let bearing = bearing_deg.to_radians();
    let angular = distance_km / EARTH_RADIUS_KM;

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    GeoPoint::new(lat2.to_degrees(), normalize_longitude(lon2.to_degrees()))
}

/// Wrap a longitude into [-180, 180).
fn normalize_longitude(lon: f64) -> f64 {
    (lon + 540.0) % 360.0 - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn paris() -> GeoPoint {
        GeoPoint::new(48.8566, 2.3522)
    }

    fn tokyo() -> GeoPoint {
        GeoPoint::new(35.6762, 139.6503)
    }

    #[test]
    fn test_distance_is_symmetric() {
        let ab = haversine_distance_km(&paris(), &tokyo());
        let ba = haversine_distance_km(&tokyo(), &paris());
        assert!(((ab - ba) / ab).abs() < TOLERANCE);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(haversine_distance_km(&paris(), &paris()), 0.0);
        assert_eq!(haversine_distance_km(&tokyo(), &tokyo()), 0.0);
    }

    #[test]
    fn test_quarter_equator_distance() {
        // (0,0) to (0,90): a quarter of the equator.
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 90.0);
        let d = haversine_distance_km(&a, &b);
        let expected = std::f64::consts::FRAC_PI_2 * EARTH_RADIUS_KM;
        assert!((d - expected).abs() < 0.1, "got {}", d);
        assert!((d - 10007.5).abs() < 0.1);
    }

    #[test]
    fn test_bearing_due_east_along_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 90.0);
        let bearing = initial_bearing_deg(&a, &b);
        assert!((bearing - 90.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_bearing_due_north() {
        let a = GeoPoint::new(0.0, 10.0);
        let b = GeoPoint::new(45.0, 10.0);
        let bearing = initial_bearing_deg(&a, &b);
        assert!(bearing.abs() < TOLERANCE);
    }

    #[test]
    fn test_bearing_in_range() {
        let points = [
            GeoPoint::new(48.8566, 2.3522),
            GeoPoint::new(35.6762, 139.6503),
            GeoPoint::new(-33.8688, 151.2093),
            GeoPoint::new(40.7128, -74.0060),
            GeoPoint::new(-22.9068, -43.1729),
        ];
        for a in &points {
            for b in &points {
                if a == b {
                    continue;
                }
                let bearing = initial_bearing_deg(a, b);
                assert!((0.0..360.0).contains(&bearing), "bearing {}", bearing);
            }
        }
    }

    #[test]
    fn test_intermediate_point_endpoints() {
        let a = paris();
        let b = tokyo();
        let start = intermediate_point(&a, &b, 0.0);
        let end = intermediate_point(&a, &b, 1.0);
        assert!((start.latitude - a.latitude).abs() < TOLERANCE);
        assert!((start.longitude - a.longitude).abs() < TOLERANCE);
        assert!((end.latitude - b.latitude).abs() < TOLERANCE);
        assert!((end.longitude - b.longitude).abs() < TOLERANCE);
    }

    #[test]
    fn test_intermediate_point_equator_midpoint() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 90.0);
        let mid = intermediate_point(&a, &b, 0.5);
        assert!(mid.latitude.abs() < TOLERANCE);
        assert!((mid.longitude - 45.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_intermediate_point_coincident_endpoints() {
        let a = paris();
        let mid = intermediate_point(&a, &a.clone(), 0.5);
        assert_eq!(mid.latitude, a.latitude);
        assert_eq!(mid.longitude, a.longitude);
    }

    #[test]
    fn test_destination_point_east_along_equator() {
        let origin = GeoPoint::new(0.0, 0.0);
        // A quarter of the circumference due east lands at (0, 90).
        let quarter = std::f64::consts::FRAC_PI_2 * EARTH_RADIUS_KM;
        let dest = destination_point(&origin, 90.0, quarter);
        assert!(dest.latitude.abs() < 1e-6);
        assert!((dest.longitude - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_destination_point_round_trip_distance() {
        let origin = paris();
        let dest = destination_point(&origin, 230.0, 500.0);
        let d = haversine_distance_km(&origin, &dest);
        assert!((d - 500.0).abs() < 0.5, "got {}", d);
    }

    #[test]
    fn test_destination_point_wraps_longitude() {
        let origin = GeoPoint::new(0.0, 179.0);
        let dest = destination_point(&origin, 90.0, 300.0);
        assert!(dest.longitude < 180.0 && dest.longitude >= -180.0);
    }
}
