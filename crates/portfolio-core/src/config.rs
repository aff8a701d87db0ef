//! Runtime configuration.
//!
//! Defaults match the live site. A `config.json` in the data directory may
//! override any subset of fields; `ConfigPatch` applies further overrides at
//! runtime through `PortfolioApp::update_config`.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// Placeholder form endpoint. The simulated transport never contacts it.
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/YOUR_FORM_ID";

/// How scroll reveals are played back
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealMode {
    /// One-shot `animate-in` on the observed element only
    Basic,
    /// Also staggers `animate-child` descendants and drives section parallax
    #[default]
    Staggered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Bind the g/c/t shortcuts at startup
    pub keyboard_shortcuts: bool,
    /// Height of the fixed nav, subtracted when scrolling to a section
    pub scroll_offset: f64,
    pub form_endpoint: String,
    pub submission_delay_ms: u64,
    pub success_display_ms: u64,
    pub reveal: RevealMode,
    pub max_particles: usize,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            keyboard_shortcuts: true,
            scroll_offset: 80.0,
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            submission_delay_ms: 1500,
            success_display_ms: 5000,
            reveal: RevealMode::Staggered,
            max_particles: 50,
        }
    }
}

impl PortfolioConfig {
    /// Load configuration from a JSON file, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| PortfolioError::Serialization(e.to_string()))
    }

    /// Merge the fields set in `patch` into this configuration.
    pub fn apply(&mut self, patch: ConfigPatch) {
        if let Some(v) = patch.keyboard_shortcuts {
            self.keyboard_shortcuts = v;
        }
        if let Some(v) = patch.scroll_offset {
            self.scroll_offset = v;
        }
        if let Some(v) = patch.form_endpoint {
            self.form_endpoint = v;
        }
        if let Some(v) = patch.submission_delay_ms {
            self.submission_delay_ms = v;
        }
        if let Some(v) = patch.success_display_ms {
            self.success_display_ms = v;
        }
        if let Some(v) = patch.reveal {
            self.reveal = v;
        }
        if let Some(v) = patch.max_particles {
            self.max_particles = v;
        }
    }

    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }
}

/// Partial configuration; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigPatch {
    pub keyboard_shortcuts: Option<bool>,
    pub scroll_offset: Option<f64>,
    pub form_endpoint: Option<String>,
    pub submission_delay_ms: Option<u64>,
    pub success_display_ms: Option<u64>,
    pub reveal: Option<RevealMode>,
    pub max_particles: Option<usize>,
}
