use reelbase_auth::TokenCodec;
use reelbase_config::{CorsConfig, JwtConfig, SecurityConfig};
use reelbase_db::{PgPool, init_db_pool};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub token_codec: TokenCodec,
    pub security_config: SecurityConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        db: PgPool,
        jwt_config: &JwtConfig,
        security_config: SecurityConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            db,
            token_codec: TokenCodec::new(jwt_config),
            security_config,
            cors_config,
        }
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let security_config = SecurityConfig::from_env();
    if security_config.password_scheme.is_reversible() {
        tracing::warn!(
            scheme = %security_config.password_scheme,
            "Passwords are stored with a reversible encoding; switch PASSWORD_SCHEME to bcrypt"
        );
    }

    Ok(AppState::new(
        init_db_pool().await?,
        &JwtConfig::from_env(),
        security_config,
        CorsConfig::from_env(),
    ))
}
