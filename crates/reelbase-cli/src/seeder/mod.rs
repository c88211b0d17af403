//! Catalog seeding.
//!
//! Generates fake videos with metadata and inserts them in chunked
//! transactions. Titles that collide with existing rows are skipped.

pub mod models;
pub mod videos;

pub use models::{MetadataSeed, VideoSeed};
pub use videos::{clear_videos, generate_videos, seed_videos};
