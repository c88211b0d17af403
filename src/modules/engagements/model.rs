// Re-export engagement models from reelbase-models crate
pub use reelbase_models::engagements::*;
