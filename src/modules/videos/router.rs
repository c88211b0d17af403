use axum::{
    Router,
    routing::{delete, get, put},
};

use crate::state::AppState;

use super::controller::{
    delete_video, list_videos, load_video, play_video, publish_video, search_videos,
    update_metadata,
};

pub fn init_videos_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_videos).post(publish_video))
        .route("/search", get(search_videos))
        .route("/{id}", delete(delete_video))
        .route("/{id}/metadata", put(update_metadata))
        .route("/{id}/load", get(load_video))
        .route("/{id}/play", get(play_video))
}
