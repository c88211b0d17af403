use reelbase_core::{ErrorResponse, PaginationMeta, PaginationParams};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::model::{JwtResponse, LoginRequest, RefreshTokenRequest};
use crate::modules::engagements::model::{
    EngagementResponse, EngagementStatsResponse, EngagementType,
};
use crate::modules::videos::model::{
    LoadVideoResponse, MetadataRequest, MetadataResponse, PaginatedSearchResponse,
    PaginatedVideosResponse, PlayVideoResponse, PublishVideoRequest, PublishVideoResponse,
    SearchVideoResult, SoftDeleteResponse, VideoSummary,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::generate_token,
        crate::modules::auth::controller::refresh_token,
        crate::modules::videos::controller::publish_video,
        crate::modules::videos::controller::update_metadata,
        crate::modules::videos::controller::delete_video,
        crate::modules::videos::controller::load_video,
        crate::modules::videos::controller::play_video,
        crate::modules::videos::controller::list_videos,
        crate::modules::videos::controller::search_videos,
        crate::modules::engagements::controller::record_engagement,
        crate::modules::engagements::controller::get_engagement_stats,
    ),
    components(
        schemas(
            ErrorResponse,
            LoginRequest,
            RefreshTokenRequest,
            JwtResponse,
            PublishVideoRequest,
            PublishVideoResponse,
            MetadataRequest,
            MetadataResponse,
            SoftDeleteResponse,
            LoadVideoResponse,
            PlayVideoResponse,
            VideoSummary,
            SearchVideoResult,
            PaginatedVideosResponse,
            PaginatedSearchResponse,
            PaginationMeta,
            PaginationParams,
            EngagementType,
            EngagementResponse,
            EngagementStatsResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Token issuance and refresh"),
        (name = "Videos", description = "Video catalog management"),
        (name = "Engagements", description = "Impression and view tracking")
    ),
    info(
        title = "Reelbase API",
        version = "0.1.0",
        description = "Video catalog API with JWT-based authentication, built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
