// Re-export auth models from reelbase-models crate
pub use reelbase_models::auth::*;
pub use reelbase_models::users::Credential;
