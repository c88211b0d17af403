//! # Reelbase Config
//!
//! Configuration types for the Reelbase API, loaded once from environment
//! variables at startup:
//!
//! - [`jwt`]: Token signing secret and lifetimes
//! - [`security`]: Authentication allow-list and password scheme
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listener addresses
//!
//! # Example
//!
//! ```ignore
//! use reelbase_config::{JwtConfig, SecurityConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let security_config = SecurityConfig::from_env();
//! assert!(security_config.is_allowed("/auth/generate-token"));
//! ```

pub mod cors;
pub mod jwt;
pub mod security;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use security::{PathPattern, SecurityConfig};
pub use server::ServerConfig;
