//! # Reelbase Observability
//!
//! - [`logging`]: `tracing` subscriber setup and per-request logging
//! - [`metrics`]: Prometheus recorder, HTTP metrics and auth counters
//!
//! Metrics recording can be switched off with `OBSERVABILITY_ENABLED=false`;
//! logging is always on.

pub mod logging;
pub mod metrics;

pub use logging::{init_tracing, logging_middleware};
pub use metrics::{
    init_metrics, is_observability_enabled, metrics_app, metrics_middleware,
    track_engagement_recorded, track_login_failure, track_login_success, track_token_issued,
    track_token_rejected, track_video_published,
};
