//! Per-frame animation data derived from a flight path.
//!
//! The renderer consumes one [`FlightSegment`] per frame: interpolated
//! position, a three-phase altitude profile (climb, cruise, descend), and
//! the heading toward the next waypoint. Position blends linearly between
//! adjacent waypoints rather than re-solving the great circle per frame;
//! the waypoints are already densely sampled, and the camera-follow math
//! assumes exactly this timing.

use serde::{Deserialize, Serialize};

use crate::geo::{destination_point, initial_bearing_deg, GeoPoint};
use crate::path::FlightPath;

/// Default animation frame rate.
pub const DEFAULT_FRAME_RATE: u32 = 60;
/// Fraction of the flight spent climbing, mirrored for the descent.
const CLIMB_FRACTION: f64 = 0.1;
/// Normalized long-haul cruise altitude.
const CRUISE_ALTITUDE: f64 = 1.0;
/// Hops shorter than this cruise lower.
const SHORT_FLIGHT_KM: f64 = 500.0;
const SHORT_FLIGHT_ALTITUDE_SCALE: f64 = 0.6;
/// Follow-camera trail distance behind the airplane, in kilometers.
const CAMERA_TRAIL_KM: f64 = 200.0;
/// Follow-camera height above the airplane's normalized altitude.
const CAMERA_ELEVATION: f64 = 0.4;
const MAX_BANK_DEG: f64 = 30.0;
const BANK_GAIN: f64 = 2.0;
const PITCH_GAIN: f64 = 45.0;

/// One frame of flight animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSegment {
    pub latitude: f64,
    pub longitude: f64,
    /// Normalized altitude: 0 on the ground, 1 at long-haul cruise.
    pub altitude: f64,
    /// Playback progress in [0, 1].
    pub progress: f64,
    pub heading_deg: f64,
    /// Milliseconds since the start of playback.
    pub timestamp_ms: f64,
}

/// Euler angles for the airplane model, in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AirplaneRotation {
    pub pitch_deg: f64,
    pub yaw_deg: f64,
    pub roll_deg: f64,
}

/// A trailing, elevated point for a follow camera.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

/// Materialize the whole animation for `path` at the given frame rate:
/// `floor(duration_seconds * frame_rate) + 1` segments, progress running
/// from 0 to exactly 1. Paths with fewer than two waypoints (or a
/// non-positive duration or frame rate) yield no segments.
pub fn generate_flight_segments(path: &FlightPath, frame_rate: u32) -> Vec<FlightSegment> {
    if path.waypoints.len() < 2 || frame_rate == 0 || path.duration_ms <= 0.0 {
        return Vec::new();
    }

    let total_frames = (path.duration_ms / 1000.0 * f64::from(frame_rate)).floor() as usize;
    if total_frames == 0 {
        return Vec::new();
    }
    let frame_interval_ms = 1000.0 / f64::from(frame_rate);
    let cruise = cruise_altitude(path.distance_km);
    let last = path.waypoints.len() - 1;

    let mut segments = Vec::with_capacity(total_frames + 1);
    for frame in 0..=total_frames {
        let progress = frame as f64 / total_frames as f64;
        let position = progress * last as f64;
        let lower = (position.floor() as usize).min(last);
        let upper = (lower + 1).min(last);
        let blend = position - lower as f64;

        let a = &path.waypoints[lower];
        let b = &path.waypoints[upper];
        let latitude = a.latitude + (b.latitude - a.latitude) * blend;
        let longitude = a.longitude + (b.longitude - a.longitude) * blend;

        let heading_deg = if lower == last {
            // Sitting on the final waypoint: hold the bearing of the last leg.
            initial_bearing_deg(&path.waypoints[last - 1], &path.waypoints[last])
        } else {
            initial_bearing_deg(&GeoPoint::new(latitude, longitude), b)
        };

        segments.push(FlightSegment {
            latitude,
            longitude,
            altitude: altitude_at(progress, cruise),
            progress,
            heading_deg,
            timestamp_ms: frame as f64 * frame_interval_ms,
        });
    }
    segments
}

/// Rotation for the airplane model at `current`. Pitch and roll settle to
/// level flight at the ends of the sequence where no neighbor exists.
pub fn airplane_rotation(
    current: &FlightSegment,
    previous: Option<&FlightSegment>,
    next: Option<&FlightSegment>,
) -> AirplaneRotation {
    let pitch_deg = match next {
        Some(next) => (next.altitude - current.altitude) * PITCH_GAIN,
        None => 0.0,
    };

    let roll_deg = match previous {
        Some(previous) => {
            let delta = normalize_heading_delta(current.heading_deg - previous.heading_deg);
            (delta * BANK_GAIN).clamp(-MAX_BANK_DEG, MAX_BANK_DEG)
        }
        None => 0.0,
    };

    AirplaneRotation {
        pitch_deg,
        yaw_deg: current.heading_deg,
        roll_deg,
    }
}

/// Camera point trailing the airplane opposite its heading, elevated above
/// it. Stateless; each frame's camera derives purely from that frame.
pub fn camera_position(segment: &FlightSegment) -> CameraPosition {
    let here = GeoPoint::new(segment.latitude, segment.longitude);
    let reciprocal = (segment.heading_deg + 180.0) % 360.0;
    let behind = destination_point(&here, reciprocal, CAMERA_TRAIL_KM);

    CameraPosition {
        latitude: behind.latitude,
        longitude: behind.longitude,
        altitude: segment.altitude + CAMERA_ELEVATION,
    }
}

fn cruise_altitude(distance_km: f64) -> f64 {
    if distance_km < SHORT_FLIGHT_KM {
        CRUISE_ALTITUDE * SHORT_FLIGHT_ALTITUDE_SCALE
    } else {
        CRUISE_ALTITUDE
    }
}

/// Three-phase profile: linear climb over the first 10% of progress,
/// cruise, then a linear descent over the last 10%.
fn altitude_at(progress: f64, cruise: f64) -> f64 {
    if progress < CLIMB_FRACTION {
        cruise * (progress / CLIMB_FRACTION)
    } else if progress > 1.0 - CLIMB_FRACTION {
        cruise * ((1.0 - progress) / CLIMB_FRACTION)
    } else {
        cruise
    }
}

/// Smallest signed angle equivalent, in [-180, 180).
fn normalize_heading_delta(delta: f64) -> f64 {
    (delta + 540.0) % 360.0 - 180.0
}
