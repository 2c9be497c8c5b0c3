//! Export configuration.
//!
//! Every field has a default, so an empty document is a valid configuration
//! and reproduces the classic output: six significant digits, `px` lengths,
//! unitless line heights and all five vendor variants.
//!
//! ```yaml
//! precision: 4
//! length_unit: px
//! line_height_unit: em
//! render_engines: [standard, webkit]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, Result};
use crate::number::{CssNumber, DEFAULT_PRECISION};
use crate::vendor::RenderEngine;

/// Settings shared by every rule the emitter writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Significant digits for numeric values.
    pub precision: usize,
    /// Unit for font sizes, whitespace widths and unit-qualified translations.
    pub length_unit: String,
    /// Unit appended to `line-height`. Unset means a unitless multiplier.
    pub line_height_unit: Option<String>,
    /// Vendor variants emitted for `transform` and `transform-origin`.
    pub render_engines: Vec<RenderEngine>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            length_unit: "px".to_string(),
            line_height_unit: None,
            render_engines: RenderEngine::ALL.to_vec(),
        }
    }
}

impl ExportConfig {
    /// Parses a configuration from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Config`] for malformed YAML or unknown keys.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pdfcss::{ExportConfig, RenderEngine};
    ///
    /// let config = ExportConfig::from_yaml("render_engines: [standard]").unwrap();
    /// assert_eq!(config.render_engines, vec![RenderEngine::Standard]);
    /// assert_eq!(config.length_unit, "px");
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml reads an empty document as unit, not as an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Load`] if the file cannot be read and
    /// [`ExportError::Config`] if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ExportError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Wraps a value for display at the configured precision.
    pub fn number(&self, value: f64) -> CssNumber {
        CssNumber::with_precision(value, self.precision)
    }

    /// Formats a value followed by the length unit.
    pub fn length(&self, value: f64) -> String {
        format!("{}{}", self.number(value), self.length_unit)
    }

    /// Formats a line height, with its unit when one is configured.
    pub fn line_height(&self, value: f64) -> String {
        format!(
            "{}{}",
            self.number(value),
            self.line_height_unit.as_deref().unwrap_or_default()
        )
    }
}
