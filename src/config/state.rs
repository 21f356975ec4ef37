// Application state module
// Immutable state shared across connection tasks

use std::path::PathBuf;

use super::types::Config;

/// Application state
///
/// The configuration never changes after startup, so no locking is needed in
/// the request path; the asset directory is read-only.
pub struct AppState {
    pub config: Config,
    /// Canonicalized static asset root, validated at startup
    pub asset_dir: PathBuf,
}

impl AppState {
    pub const fn new(config: Config, asset_dir: PathBuf) -> Self {
        Self { config, asset_dir }
    }
}
