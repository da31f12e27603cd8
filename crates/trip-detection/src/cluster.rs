//! Geographic clustering of photos.
//!
//! Greedy single-link clustering around a seed photo: the first unclustered
//! photo with coordinates opens a cluster, and every remaining unclustered
//! photo within the radius of that seed joins it. There is no centroid
//! re-computation and no re-assignment, so the result depends on input
//! order. Downstream titles and confidence scores rely on exactly this
//! behavior, so it must not be swapped for a globally optimal algorithm.

use serde::{Deserialize, Serialize};

use crate::photo::Photo;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A group of photos taken near the same place.
///
/// Ephemeral value object: lives only for the duration of one suggestion
/// computation and is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoCluster {
    /// Stable within one invocation, `cluster_{n}` in discovery order.
    pub id: String,
    /// Member photos, in input order. Never empty.
    pub photos: Vec<Photo>,
    /// The seed photo's coordinates. Not a centroid.
    pub latitude: f64,
    pub longitude: f64,
    /// Most common non-null member name; ties keep the first seen.
    pub location_name: Option<String>,
}

/// Great-circle distance between two coordinate pairs (Haversine formula),
/// in kilometers.
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Partition photos into clusters of nearby shots.
///
/// Photos without both coordinates are excluded entirely, mirroring how the
/// temporal grouping step drops photos without a capture time. Empty input
/// yields empty output; a single located photo yields a one-member cluster.
pub fn cluster_by_location(photos: &[Photo], radius_km: f64) -> Vec<PhotoCluster> {
    let mut clusters = Vec::new();
    let mut clustered = vec![false; photos.len()];

    for i in 0..photos.len() {
        if clustered[i] {
            continue;
        }
        let (seed_lat, seed_lng) = match photos[i].coordinates() {
            Some(coords) => coords,
            None => continue,
        };
        clustered[i] = true;
        let mut members = vec![photos[i].clone()];

        for j in (i + 1)..photos.len() {
            if clustered[j] {
                continue;
            }
            let (lat, lng) = match photos[j].coordinates() {
                Some(coords) => coords,
                None => continue,
            };
            if haversine_distance_km(seed_lat, seed_lng, lat, lng) <= radius_km {
                clustered[j] = true;
                members.push(photos[j].clone());
            }
        }

        let location_name = most_common_location_name(&members);
        clusters.push(PhotoCluster {
            id: format!("cluster_{}", clusters.len()),
            photos: members,
            latitude: seed_lat,
            longitude: seed_lng,
            location_name,
        });
    }

    clusters
}

/// Most frequent non-null location name among members. Ties are broken by
/// first occurrence in input order.
fn most_common_location_name(photos: &[Photo]) -> Option<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for name in photos.iter().filter_map(|p| p.location_name.as_deref()) {
        match counts.iter_mut().find(|(seen, _)| *seen == name) {
            Some(entry) => entry.1 += 1,
            None => counts.push((name, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (name, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((name, count));
        }
    }
    best.map(|(name, _)| name.to_string())
}
