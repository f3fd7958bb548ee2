//! On-disk locations for settings and exported files.

use std::path::PathBuf;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "Govcheck";
const APPLICATION: &str = "Govcheck";

#[cfg(not(target_arch = "wasm32"))]
fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Path of the settings file, when the platform has a config directory.
pub fn config_path() -> Option<PathBuf> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        project_dirs().map(|dirs| dirs.config_dir().join("settings.json"))
    }

    #[cfg(target_arch = "wasm32")]
    {
        let _ = (QUALIFIER, ORGANIZATION, APPLICATION);
        None
    }
}

/// Default folder for CSV and image exports.
pub fn default_export_dir() -> Option<PathBuf> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        project_dirs().map(|dirs| dirs.data_dir().join("exports"))
    }

    #[cfg(target_arch = "wasm32")]
    {
        None
    }
}

/// Export folder honoring a configured override.
pub fn export_dir(configured: Option<&PathBuf>) -> Option<PathBuf> {
    configured.cloned().or_else(default_export_dir)
}
