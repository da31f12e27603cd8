//! Trip detection and album suggestion library for Roamlog
//!
//! This crate turns a flat photo collection into ranked album suggestions:
//! photos are grouped into candidate trips by capture-date proximity, each
//! trip is clustered geographically, and every surviving cluster is scored
//! for how likely it is to represent a coherent trip worth an album.
//!
//! Everything here is pure, synchronous computation over in-memory records.
//! The storage layer, the UI, and album creation live outside this crate and
//! talk to it only through [`Photo`] in and [`AlbumSuggestion`] out.

pub mod cluster;
pub mod exif;
pub mod photo;
pub mod score;
pub mod suggest;

pub use cluster::{cluster_by_location, PhotoCluster};
pub use exif::ExiftoolRunner;
pub use photo::Photo;
pub use score::ConfidenceScore;
pub use suggest::{AlbumSuggester, AlbumSuggestion, SuggestConfig};
