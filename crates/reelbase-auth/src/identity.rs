use serde::Serialize;
use utoipa::ToSchema;

/// Caller identity derived from a verified bearer token.
///
/// Lives in the request's extensions for the duration of one request only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthenticatedIdentity {
    pub username: String,
    /// Granted authorities; tokens carry none today
    pub authorities: Vec<String>,
}

impl AuthenticatedIdentity {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            authorities: Vec::new(),
        }
    }
}
