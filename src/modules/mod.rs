pub mod auth;
pub mod engagements;
pub mod videos;
