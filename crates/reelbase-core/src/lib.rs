//! # Reelbase Core
//!
//! Core types, errors, and utilities for the Reelbase API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`pagination`]: Page/size pagination for listing endpoints
//! - [`password`]: Password encoding schemes and verification
//!
//! # Example
//!
//! ```ignore
//! use reelbase_core::{AppError, PaginationParams, PasswordScheme};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Video not found"));
//!
//! let stored = PasswordScheme::Bcrypt.encode("secure_password")?;
//! assert!(PasswordScheme::Bcrypt.matches("secure_password", &stored)?);
//!
//! let params = PaginationParams::default();
//! let offset = params.offset();
//! ```

pub mod errors;
pub mod pagination;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse};
pub use pagination::{PaginationMeta, PaginationParams};
pub use password::{PasswordScheme, hash_password, verify_password};
