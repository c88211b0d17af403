//! # Reelbase CLI
//!
//! Administrative helpers used by the `reelbase-cli` binary: credential
//! creation and catalog seeding for development and testing.
//!
//! ## Usage
//!
//! ```ignore
//! use reelbase_cli::{seeder, users};
//!
//! users::create_user(&pool, "alice", "s3cret", PasswordScheme::Bcrypt).await?;
//! seeder::seed_videos(&pool, 50).await?;
//! ```

pub mod seeder;
pub mod users;
