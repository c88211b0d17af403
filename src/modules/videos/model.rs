// Re-export video models from reelbase-models crate
pub use reelbase_models::videos::*;
