//! Integration and unit tests for the Folio server.
//!
//! ## Test Modules
//!
//! - **assets_tests**: media folder listing, filters and ordering
//! - **layout_tests**: grid templates and file-to-cell assignment
//! - **gallery_tests**: catalog templates and hover/select view state
//! - **modal_tests**: enlarge modal transitions and scroll lock
//! - **device_tests**: user-agent classification and redirects
//! - **api_tests**: listing, layout and page endpoints through the full router
//! - **error_tests**: error response bodies
//! - **config_tests**: default configuration and validation
//! - **health_api_tests**: health, readiness, metrics and version endpoints
//!
//! Individual modules can be run with e.g. `cargo test layout_tests`.

pub mod device_tests;
pub mod error_tests;
pub mod health_api_tests;

/// Shared fixtures: a config rooted at a temporary public directory.
pub mod support {
    use std::path::Path;

    use crate::config::AppConfig;
    use crate::state::AppState;

    pub fn config_for(public_dir: &Path) -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.assets.public_dir = public_dir.to_path_buf();
        cfg
    }

    pub fn state_for(public_dir: &Path) -> AppState {
        AppState::new(config_for(public_dir)).unwrap()
    }

    /// Creates `folder` under `root` and writes an empty file per name.
    pub fn touch_all(root: &Path, folder: &str, names: &[&str]) {
        let dir = root.join(folder);
        std::fs::create_dir_all(&dir).unwrap();
        for name in names {
            std::fs::write(dir.join(name), b"").unwrap();
        }
    }
}
