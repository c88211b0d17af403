use sqlx::FromRow;

/// Stored login credential.
///
/// `password` holds whatever the configured password scheme produced.
#[derive(Debug, Clone, FromRow)]
pub struct Credential {
    pub username: String,
    pub password: String,
}
