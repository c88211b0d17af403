//! # Reelbase Models
//!
//! Domain models and DTOs for the Reelbase API.
//!
//! Database rows derive `sqlx::FromRow`; request and response bodies derive
//! `serde` and `utoipa::ToSchema` and use camelCase field names on the wire.
//!
//! - [`auth`]: Token requests and responses
//! - [`users`]: Stored credentials
//! - [`videos`]: Catalog entries, metadata, listing and search
//! - [`engagements`]: Impression and view counters

pub mod auth;
pub mod engagements;
pub mod users;
pub mod videos;
