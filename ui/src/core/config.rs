//! User settings persisted as JSON next to the platform's config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{error::ConfigError, storage};
use crate::questionnaire::Edition;
use crate::results::DEFAULT_NORMALIZER;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Settings {
    /// Questionnaire edition new sessions start with.
    pub edition: Edition,
    /// Divisor applied to row sums when plotting classic progressions.
    pub progression_normalizer: f64,
    /// Overrides the default export folder on desktop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            edition: Edition::default(),
            progression_normalizer: DEFAULT_NORMALIZER,
            export_dir: None,
        }
    }
}

impl Settings {
    /// Settings from the standard location. A missing file yields defaults;
    /// an unreadable or malformed one is logged and replaced by defaults.
    pub fn load() -> Self {
        let Some(path) = storage::config_path() else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "falling back to default settings");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&text)?;
        Ok(settings.sanitized())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        tracing::info!(path = %path.display(), "saved settings");
        Ok(())
    }

    pub fn export_dir(&self) -> Option<PathBuf> {
        storage::export_dir(self.export_dir.as_ref())
    }

    fn sanitized(mut self) -> Self {
        if !(self.progression_normalizer.is_finite() && self.progression_normalizer > 0.0) {
            tracing::warn!(
                value = self.progression_normalizer,
                "ignoring non-positive progression normalizer"
            );
            self.progression_normalizer = DEFAULT_NORMALIZER;
        }
        self
    }
}
