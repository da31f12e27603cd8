//! Album suggestion engine.
//!
//! Turns an unsorted photo collection into ranked album suggestions in
//! three passes: sort by capture time and split wherever the gap between
//! consecutive shots exceeds the configured limit, cluster each temporal
//! group geographically, then score and describe every cluster that still
//! has enough photos. Groups are independent of each other, so the
//! per-group clustering runs in parallel.

use std::collections::HashSet;

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cluster::{cluster_by_location, PhotoCluster};
use crate::photo::Photo;
use crate::score::ConfidenceScore;

const MS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestConfig {
    /// Maximum gap between consecutive shots (fractional days) for them to
    /// stay in the same trip.
    pub max_gap_days: f64,
    /// Geographic clustering radius within a trip (kilometers).
    pub cluster_radius_km: f64,
    /// Minimum photos for a group or cluster to be worth suggesting.
    pub min_photos: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            max_gap_days: 3.0,
            cluster_radius_km: 50.0,
            min_photos: 3,
        }
    }
}

/// A ranked album candidate, ready for the UI to offer.
///
/// Immutable once produced. Whether the user accepts it is not this
/// crate's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumSuggestion {
    /// `suggestion_{n}` in discovery order, stable within one invocation.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Member photos. Always at least `min_photos`.
    pub photos: Vec<Photo>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// 0-100.
    pub confidence: u8,
    pub reason: String,
}

pub struct AlbumSuggester {
    config: SuggestConfig,
}

impl AlbumSuggester {
    pub fn new(config: SuggestConfig) -> Self {
        Self { config }
    }

    pub fn with_default_config() -> Self {
        Self::new(SuggestConfig::default())
    }

    /// Produce album suggestions, best first.
    ///
    /// Photos without a capture time are silently excluded. An empty result
    /// is a normal outcome, not an error; the caller decides what to tell
    /// the user.
    pub fn suggest(&self, photos: Vec<Photo>) -> Result<Vec<AlbumSuggestion>> {
        let mut dated: Vec<(DateTime<Utc>, Photo)> = photos
            .into_iter()
            .filter_map(|p| p.taken_at.map(|t| (t, p)))
            .collect();
        if dated.is_empty() {
            return Ok(Vec::new());
        }
        dated.sort_by_key(|(taken_at, _)| *taken_at);

        let groups = self.group_by_date(dated);
        log::debug!("{} temporal groups after gap split", groups.len());

        // Temporal groups don't interact; cluster them in parallel. collect
        // keeps group order, which keeps suggestion ids deterministic.
        let clustered: Vec<Vec<PhotoCluster>> = groups
            .par_iter()
            .map(|group| cluster_by_location(group, self.config.cluster_radius_km))
            .collect();

        let mut suggestions = Vec::new();
        for clusters in clustered {
            for cluster in clusters {
                if cluster.photos.len() < self.config.min_photos {
                    continue;
                }
                let suggestion = self.build_suggestion(&cluster, suggestions.len())?;
                suggestions.push(suggestion);
            }
        }
        log::debug!("{} suggestions before ranking", suggestions.len());

        // Stable sort: ties keep discovery order.
        suggestions.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        Ok(suggestions)
    }

    /// Remove photos that already belong to real albums.
    ///
    /// Suggestions that drop below the photo floor are discarded; the rest
    /// keep their dates and text but have their confidence rescaled by the
    /// fraction of photos that survived.
    pub fn filter_existing_albums(
        &self,
        suggestions: Vec<AlbumSuggestion>,
        existing: &HashSet<String>,
    ) -> Vec<AlbumSuggestion> {
        suggestions
            .into_iter()
            .filter_map(|mut suggestion| {
                let original = suggestion.photos.len();
                suggestion.photos.retain(|p| !existing.contains(&p.id));
                let remaining = suggestion.photos.len();
                if remaining < self.config.min_photos {
                    return None;
                }
                if remaining < original {
                    let scaled =
                        f64::from(suggestion.confidence) * remaining as f64 / original as f64;
                    suggestion.confidence = scaled.round() as u8;
                }
                Some(suggestion)
            })
            .collect()
    }

    /// Split time-sorted photos wherever the gap exceeds `max_gap_days`.
    /// Groups below the photo floor are dropped, including the last one.
    fn group_by_date(&self, photos: Vec<(DateTime<Utc>, Photo)>) -> Vec<Vec<Photo>> {
        let mut groups = Vec::new();
        let mut current: Vec<(DateTime<Utc>, Photo)> = Vec::new();

        for (taken_at, photo) in photos {
            if let Some((last_taken, _)) = current.last() {
                let gap_days = taken_at.signed_duration_since(*last_taken).num_milliseconds()
                    as f64
                    / MS_PER_DAY;
                if gap_days > self.config.max_gap_days {
                    if current.len() >= self.config.min_photos {
                        groups.push(current.drain(..).map(|(_, p)| p).collect());
                    } else {
                        current.clear();
                    }
                }
            }
            current.push((taken_at, photo));
        }

        if current.len() >= self.config.min_photos {
            groups.push(current.into_iter().map(|(_, p)| p).collect());
        }
        groups
    }

    fn build_suggestion(&self, cluster: &PhotoCluster, index: usize) -> Result<AlbumSuggestion> {
        let start_date = match cluster.photos.iter().filter_map(|p| p.taken_at).min() {
            Some(t) => t,
            None => bail!("cluster {} has no dated photos", cluster.id),
        };
        let end_date = match cluster.photos.iter().filter_map(|p| p.taken_at).max() {
            Some(t) => t,
            None => bail!("cluster {} has no dated photos", cluster.id),
        };

        let day_span = (end_date.date_naive() - start_date.date_naive()).num_days();
        let total_days = day_span + 1;
        let count = cluster.photos.len();
        let month_year = start_date.format("%B %Y");

        let title = match &cluster.location_name {
            Some(name) => {
                let city = name.split(',').next().unwrap_or(name).trim();
                format!("{}, {}", city, month_year)
            }
            None => format!("Trip, {}", month_year),
        };

        let span_phrase = if total_days == 1 {
            "a single day".to_string()
        } else {
            format!("{} days", total_days)
        };
        let description = match &cluster.location_name {
            Some(name) => format!("{} photos from {} spanning {}.", count, name, span_phrase),
            None => format!("{} photos spanning {}.", count, span_phrase),
        };

        let mut reason = format!("{} photos taken", count);
        if day_span == 0 {
            reason.push_str(" on the same day");
        } else {
            reason.push_str(&format!(" over {} days", total_days));
        }
        if let Some(name) = &cluster.location_name {
            reason.push_str(&format!(" in {}", name));
        }
        reason.push('.');

        let score = ConfidenceScore::evaluate(
            count,
            cluster.location_name.is_some(),
            true,
            day_span,
        );

        Ok(AlbumSuggestion {
            id: format!("suggestion_{}", index),
            title,
            description,
            photos: cluster.photos.clone(),
            start_date,
            end_date,
            location_name: cluster.location_name.clone(),
            latitude: Some(cluster.latitude),
            longitude: Some(cluster.longitude),
            confidence: score.total(),
            reason,
        })
    }
}
