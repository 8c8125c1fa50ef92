//! Engine settings and scenario files.
//!
//! A scenario is the four inputs of an analysis plus an optional grid
//! resolution, stored as JSON:
//!
//! ```json
//! { "span": 10.0, "leading_load": 40.0, "trailing_load": 40.0, "spacing": 3.0 }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::DEFAULT_RESOLUTION;

/// Error returned when a scenario cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when the scenario file cannot be read.
    #[error("cannot read scenario file {path:?}")]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Returned when the scenario text is not valid JSON for a [`Scenario`].
    #[error("malformed scenario: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tunable settings of the [`EnvelopeEngine`](crate::EnvelopeEngine).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of grid samples over the span, used for both reference
    /// positions and observation points. Cost grows with its square.
    pub resolution: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl EngineConfig {
    /// Settings with a custom grid resolution.
    #[must_use]
    pub const fn with_resolution(resolution: usize) -> Self {
        Self { resolution }
    }
}

/// One complete set of analysis inputs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Beam span `L`.
    pub span: f64,
    /// Leading load `W1`.
    pub leading_load: f64,
    /// Trailing load `W2`.
    pub trailing_load: f64,
    /// Distance `x` between the loads.
    pub spacing: f64,
    /// Grid resolution; the engine default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<usize>,
}

impl Scenario {
    /// Parse a scenario from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] when the text is not a valid scenario.
    ///
    /// # Examples
    /// ```
    /// use movingload::Scenario;
    ///
    /// let scenario = Scenario::from_json(
    ///     r#"{"span": 10.0, "leading_load": 40.0, "trailing_load": 20.0, "spacing": 3.0}"#,
    /// )
    /// .expect("valid scenario");
    /// assert_eq!(scenario.trailing_load, 20.0);
    /// assert_eq!(scenario.config().resolution, 1000);
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a scenario file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Json`] when its contents are not a valid scenario.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Engine settings requested by this scenario.
    #[must_use]
    pub fn config(&self) -> EngineConfig {
        self.resolution
            .map_or_else(EngineConfig::default, EngineConfig::with_resolution)
    }
}
