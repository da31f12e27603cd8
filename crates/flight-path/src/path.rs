//! Flight path construction.
//!
//! A [`FlightPath`] packages everything the globe renderer needs to draw
//! and pace one hop: great-circle distance, departure bearing, a densely
//! sampled waypoint polyline, and a screen animation duration. The
//! duration is a presentation pacing heuristic, deliberately decoupled
//! from the illustrative real-world flight time estimate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::{haversine_distance_km, initial_bearing_deg, intermediate_point, GeoPoint};

/// Assumed commercial cruise speed for the flight-time estimate (km/h).
const CRUISE_SPEED_KMH: f64 = 900.0;
/// Screen milliseconds per kilometer, before clamping.
const DURATION_MS_PER_KM: f64 = 50.0;
const MIN_DURATION_MS: f64 = 3000.0;
const MAX_DURATION_MS: f64 = 8000.0;
/// Default number of great-circle interpolation steps per path.
pub const DEFAULT_SEGMENTS: usize = 100;

/// A single animated hop between two places.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightPath {
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub distance_km: f64,
    /// Screen animation duration, not real flight time.
    pub duration_ms: f64,
    /// `segments + 1` points sampled along the great circle.
    pub waypoints: Vec<GeoPoint>,
    /// Initial bearing at departure, degrees in [0, 360).
    pub bearing_deg: f64,
    /// Illustrative estimate at cruise speed, in hours.
    pub estimated_flight_hours: f64,
}

/// A place the user visited, dated so a year of visits can be ordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitedLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub visited_at: DateTime<Utc>,
}

/// Build the flight path from `start` to `end`, sampling `segments + 1`
/// waypoints along the great circle. `segments` is clamped to at least 1.
pub fn generate_flight_path(start: GeoPoint, end: GeoPoint, segments: usize) -> FlightPath {
    let segments = segments.max(1);
    let distance_km = haversine_distance_km(&start, &end);
    let bearing_deg = initial_bearing_deg(&start, &end);
    let duration_ms = (distance_km * DURATION_MS_PER_KM).clamp(MIN_DURATION_MS, MAX_DURATION_MS);

    let mut waypoints = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let fraction = i as f64 / segments as f64;
        waypoints.push(intermediate_point(&start, &end, fraction));
    }

    FlightPath {
        distance_km,
        duration_ms,
        waypoints,
        bearing_deg,
        estimated_flight_hours: distance_km / CRUISE_SPEED_KMH,
        start,
        end,
    }
}

/// [`generate_flight_path`] with the default waypoint density.
pub fn generate_flight_path_default(start: GeoPoint, end: GeoPoint) -> FlightPath {
    generate_flight_path(start, end, DEFAULT_SEGMENTS)
}

/// One flight path per consecutive pair of visits, in date order.
/// Fewer than two locations yields no paths.
pub fn generate_year_flight_paths(mut locations: Vec<VisitedLocation>) -> Vec<FlightPath> {
    if locations.len() < 2 {
        return Vec::new();
    }
    locations.sort_by_key(|location| location.visited_at);

    locations
        .windows(2)
        .map(|pair| {
            let from = GeoPoint::with_name(pair[0].latitude, pair[0].longitude, pair[0].name.clone());
            let to = GeoPoint::with_name(pair[1].latitude, pair[1].longitude, pair[1].name.clone());
            generate_flight_path_default(from, to)
        })
        .collect()
}
