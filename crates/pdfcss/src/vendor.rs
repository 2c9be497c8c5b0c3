//! Rendering-engine variants for vendor-prefixed properties.
//!
//! `transform` and `transform-origin` are emitted once per engine family.
//! Older Gecko builds reject unitless translation components in
//! `-moz-transform:matrix(...)`, so that variant carries explicit lengths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A rendering-engine family with its property prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderEngine {
    /// Unprefixed standard property.
    Standard,
    /// Internet Explorer (`-ms-`).
    Trident,
    /// Firefox (`-moz-`).
    Gecko,
    /// Safari and Chrome (`-webkit-`).
    Webkit,
    /// Opera before Blink (`-o-`).
    Presto,
}

impl RenderEngine {
    /// All variants in emission order.
    pub const ALL: [RenderEngine; 5] = [
        RenderEngine::Standard,
        RenderEngine::Trident,
        RenderEngine::Gecko,
        RenderEngine::Webkit,
        RenderEngine::Presto,
    ];

    /// The property prefix, empty for [`RenderEngine::Standard`].
    pub fn prefix(self) -> &'static str {
        match self {
            RenderEngine::Standard => "",
            RenderEngine::Trident => "-ms-",
            RenderEngine::Gecko => "-moz-",
            RenderEngine::Webkit => "-webkit-",
            RenderEngine::Presto => "-o-",
        }
    }

    /// Whether `matrix()` translation components need explicit length units.
    pub fn needs_translation_units(self) -> bool {
        matches!(self, RenderEngine::Gecko)
    }

    /// Lowercase name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            RenderEngine::Standard => "standard",
            RenderEngine::Trident => "trident",
            RenderEngine::Gecko => "gecko",
            RenderEngine::Webkit => "webkit",
            RenderEngine::Presto => "presto",
        }
    }
}

impl fmt::Display for RenderEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
