//! Request-authentication settings.
//!
//! [`SecurityConfig`] carries the allow-list of paths that bypass bearer-token
//! authentication and the [`PasswordScheme`] credentials are stored with. It is
//! read once at startup and handed to the auth filter through application
//! state.
//!
//! # Environment Variables
//!
//! - `AUTH_ALLOW_LIST`: Comma-separated path patterns
//!   (default: `/auth/**,/swagger-ui/**,/api-docs/**,/scalar/**`)
//! - `PASSWORD_SCHEME`: `bcrypt` (default) or `base64`
//!
//! # Pattern Syntax
//!
//! - `/auth/**` matches `/auth` and every path below it
//! - `/videos/*` matches exactly one segment below `/videos`
//! - anything else must match the request path exactly

use std::env;

use reelbase_core::PasswordScheme;

pub const DEFAULT_ALLOW_LIST: &[&str] = &["/auth/**", "/swagger-ui/**", "/api-docs/**", "/scalar/**"];

/// An ant-style path pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    kind: PatternKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum PatternKind {
    Exact(String),
    /// `/prefix/**`
    Subtree(String),
    /// `/prefix/*`
    Children(String),
}

impl PathPattern {
    pub fn new(pattern: &str) -> Self {
        let raw = pattern.trim().to_string();
        let kind = if let Some(prefix) = raw.strip_suffix("/**") {
            PatternKind::Subtree(prefix.to_string())
        } else if let Some(prefix) = raw.strip_suffix("/*") {
            PatternKind::Children(prefix.to_string())
        } else {
            PatternKind::Exact(raw.clone())
        };

        Self { raw, kind }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, path: &str) -> bool {
        match &self.kind {
            PatternKind::Exact(exact) => path == exact,
            PatternKind::Subtree(prefix) => match path.strip_prefix(prefix.as_str()) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            },
            PatternKind::Children(prefix) => match path.strip_prefix(prefix.as_str()) {
                Some(rest) => rest
                    .strip_prefix('/')
                    .is_some_and(|segment| !segment.is_empty() && !segment.contains('/')),
                None => false,
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct SecurityConfig {
    pub allow_list: Vec<PathPattern>,
    pub password_scheme: PasswordScheme,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            allow_list: DEFAULT_ALLOW_LIST.iter().map(|p| PathPattern::new(p)).collect(),
            password_scheme: PasswordScheme::default(),
        }
    }
}

impl SecurityConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("AUTH_ALLOW_LIST").ok().as_deref(),
            env::var("PASSWORD_SCHEME").ok().as_deref(),
        )
    }

    fn from_values(allow_list: Option<&str>, password_scheme: Option<&str>) -> Self {
        let defaults = Self::default();

        let allow_list = match allow_list {
            Some(list) => {
                let patterns: Vec<PathPattern> = list
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(PathPattern::new)
                    .collect();
                if patterns.is_empty() {
                    defaults.allow_list
                } else {
                    patterns
                }
            }
            None => defaults.allow_list,
        };

        let password_scheme = match password_scheme.map(str::parse::<PasswordScheme>) {
            Some(Ok(scheme)) => scheme,
            Some(Err(e)) => {
                tracing::warn!("{}, using {}", e, defaults.password_scheme);
                defaults.password_scheme
            }
            None => defaults.password_scheme,
        };

        Self {
            allow_list,
            password_scheme,
        }
    }

    /// True when `path` bypasses bearer-token authentication.
    pub fn is_allowed(&self, path: &str) -> bool {
        self.allow_list.iter().any(|pattern| pattern.matches(path))
    }
}
