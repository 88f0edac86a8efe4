//! Tilt binding options with TOML / JSON support.
//!
//! Options pick the container and visual out of the page and set the tilt
//! magnitude. All fields use `#[serde(default)]` so a partial document
//! (e.g. only `max_tilt_deg`) works.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TiltError;
use crate::tilt::DEFAULT_MAX_TILT_DEG;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Tilt")]
#[serde(default)]
/// Which elements to bind and how far to tilt them.
pub struct TiltOptions {
    /// CSS selector for the container the pointer moves over.
    #[schemars(title = "Container Selector")]
    pub container_selector: String,
    /// CSS selector for the element that rotates. Resolved inside the
    /// container first, then against the whole document.
    #[schemars(title = "Visual Selector")]
    pub visual_selector: String,
    /// Rotation in degrees at full offset from the container center.
    #[schemars(title = "Max Tilt", range(min = 0.0, max = 90.0), extend("step" = 0.5))]
    pub max_tilt_deg: f32,
}

impl Default for TiltOptions {
    fn default() -> Self {
        Self {
            container_selector: ".tilt-container".to_owned(),
            visual_selector: ".tilt-image".to_owned(),
            max_tilt_deg: DEFAULT_MAX_TILT_DEG,
        }
    }
}

impl TiltOptions {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(TiltOptions)
    }

    /// Parse and validate options from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, TiltError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| TiltError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Parse and validate options from a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, TiltError> {
        let options: Self = serde_json::from_str(content)
            .map_err(|e| TiltError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TiltError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TiltError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TiltError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(TiltError::Io)
    }

    /// Reject selectors that cannot match anything and magnitudes that
    /// are negative or not finite.
    pub fn validate(&self) -> Result<(), TiltError> {
        if self.container_selector.trim().is_empty() {
            return Err(TiltError::InvalidOptions(
                "container_selector is empty".to_owned(),
            ));
        }
        if self.visual_selector.trim().is_empty() {
            return Err(TiltError::InvalidOptions(
                "visual_selector is empty".to_owned(),
            ));
        }
        if !self.max_tilt_deg.is_finite() || self.max_tilt_deg < 0.0 {
            return Err(TiltError::InvalidOptions(format!(
                "max_tilt_deg must be a non-negative number, got {}",
                self.max_tilt_deg
            )));
        }
        Ok(())
    }
}
