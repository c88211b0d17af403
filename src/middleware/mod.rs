//! Request authentication.
//!
//! [`auth::jwt_auth_filter`] wraps the whole router. Requests to allow-listed
//! paths pass straight through; every other request must carry
//! `Authorization: Bearer <token>`. A verified token binds an
//! [`AuthenticatedIdentity`](reelbase_auth::AuthenticatedIdentity) into the
//! request extensions, which handlers read with the [`auth::AuthUser`]
//! extractor.
//!
//! # Rejections
//!
//! | Condition | Status | Message |
//! |-----------|--------|---------|
//! | header missing or not `Bearer` | 401 | `MISSING_AUTHORIZATION_HEADER` |
//! | token expired | 403 | `JWT_TOKEN_EXPIRED` |
//! | any other token failure | 401 | `INVALID_JWT_TOKEN` |

pub mod auth;
