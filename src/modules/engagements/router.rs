use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_engagement_stats, record_engagement};

pub fn init_engagements_router() -> Router<AppState> {
    Router::new().route(
        "/{video_id}",
        get(get_engagement_stats).post(record_engagement),
    )
}
