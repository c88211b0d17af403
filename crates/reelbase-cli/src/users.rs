use reelbase_core::PasswordScheme;
use sqlx::PgPool;

/// Stores a new credential, encoding the password with `scheme`.
///
/// Fails if the username is blank or already taken.
pub async fn create_user(
    db: &PgPool,
    username: &str,
    password: &str,
    scheme: PasswordScheme,
) -> anyhow::Result<i64> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        anyhow::bail!("Username and password must not be blank");
    }

    let encoded = scheme.encode(password).map_err(|e| anyhow::anyhow!("{}", e))?;

    let id: Option<i64> = sqlx::query_scalar(
        "INSERT INTO users (username, password) VALUES ($1, $2)
         ON CONFLICT (username) DO NOTHING
         RETURNING id",
    )
    .bind(username)
    .bind(&encoded)
    .fetch_optional(db)
    .await?;

    id.ok_or_else(|| anyhow::anyhow!("User '{}' already exists", username))
}
