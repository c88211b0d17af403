use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{generate_token, refresh_token};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/generate-token", post(generate_token))
        .route("/token-refresh", post(refresh_token))
}
