//! Great-circle flight path geometry for Roamlog's travel globe
//!
//! Given two visited places, this crate computes the great-circle route
//! between them and the per-frame animation data (position, altitude,
//! heading, bank) a renderer needs to fly a marker along it. A year of
//! visits becomes a chain of such routes.
//!
//! Everything is a pure function of its inputs: no I/O, no hidden state,
//! safe to call concurrently from any number of threads.

pub mod geo;
pub mod path;
pub mod segments;

pub use geo::{
    destination_point, haversine_distance_km, initial_bearing_deg, intermediate_point, GeoPoint,
    EARTH_RADIUS_KM,
};
pub use path::{
    generate_flight_path, generate_flight_path_default, generate_year_flight_paths, FlightPath,
    VisitedLocation, DEFAULT_SEGMENTS,
};
pub use segments::{
    airplane_rotation, camera_position, generate_flight_segments, AirplaneRotation,
    CameraPosition, FlightSegment, DEFAULT_FRAME_RATE,
};
