//! Photo input records for trip detection.
//!
//! A [`Photo`] is the narrow view of the application's photo row that the
//! suggestion pipeline actually reads. The storage layer owns the full row
//! shape and its lifecycle; nothing here is ever written back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single photo as seen by the trip detection pipeline.
///
/// Every field except `id` is optional: missing capture time or coordinates
/// is treated as "no signal" downstream, never as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    /// Capture time, when the photo carried usable EXIF timing.
    pub taken_at: Option<DateTime<Utc>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Reverse-geocoded place name, e.g. "Paris, France".
    pub location_name: Option<String>,
}

impl Photo {
    /// Create a photo record with all optional fields empty.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            taken_at: None,
            latitude: None,
            longitude: None,
            location_name: None,
        }
    }

    /// True when both latitude and longitude are present.
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// Latitude/longitude pair, when the photo has a fix.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_photo_has_no_signals() {
        let photo = Photo::new("p1");
        assert_eq!(photo.id, "p1");
        assert!(photo.taken_at.is_none());
        assert!(!photo.has_coordinates());
        assert!(photo.coordinates().is_none());
    }

    #[test]
    fn test_coordinates_require_both_axes() {
        let mut photo = Photo::new("p1");
        photo.latitude = Some(48.8566);
        assert!(!photo.has_coordinates());

        photo.longitude = Some(2.3522);
        assert!(photo.has_coordinates());
        assert_eq!(photo.coordinates(), Some((48.8566, 2.3522)));
    }
}
