//! Font attributes and classification.
//!
//! [`FontAttributes`] is the record the PDF parser fills in once per font.
//! Everything the stylesheet needs to know about a font is read from it;
//! nothing here queries a live font object.

use std::fmt;

use crate::geometry;

/// Font properties captured at the parser boundary.
///
/// Metrics are in em units, as reported by the font descriptor: `ascent` is
/// positive, `descent` is normally negative.
///
/// # Example
///
/// ```rust
/// use pdfcss::{FontAttributes, FontStyle, GenericFamily};
///
/// let font = FontAttributes::new("Courier-Oblique")
///     .fixed_width(true)
///     .metrics(0.8, -0.2);
///
/// assert_eq!(GenericFamily::classify(&font), GenericFamily::Monospace);
/// assert_eq!(FontStyle::classify(&font), FontStyle::Oblique);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FontAttributes {
    pub is_fixed_width: bool,
    pub is_serif: bool,
    pub is_bold: bool,
    pub is_italic: bool,
    pub ascent: f64,
    pub descent: f64,
    /// Font name as declared in the document, e.g. `Times-Roman`.
    pub declared_name: String,
    /// Explicit `font-family` value replacing the generated one.
    pub css_override_name: Option<String>,
}

impl FontAttributes {
    /// Creates attributes for a font with the given declared name and all
    /// flags cleared.
    pub fn new(declared_name: impl Into<String>) -> Self {
        Self {
            declared_name: declared_name.into(),
            ..Self::default()
        }
    }

    pub fn fixed_width(mut self, value: bool) -> Self {
        self.is_fixed_width = value;
        self
    }

    pub fn serif(mut self, value: bool) -> Self {
        self.is_serif = value;
        self
    }

    pub fn bold(mut self, value: bool) -> Self {
        self.is_bold = value;
        self
    }

    pub fn italic(mut self, value: bool) -> Self {
        self.is_italic = value;
        self
    }

    /// Sets ascent and descent.
    pub fn metrics(mut self, ascent: f64, descent: f64) -> Self {
        self.ascent = ascent;
        self.descent = descent;
        self
    }

    /// Sets the `font-family` override.
    pub fn css_override(mut self, family: impl Into<String>) -> Self {
        self.css_override_name = Some(family.into());
        self
    }

    /// Returns the `font-family` override, treating an empty string as unset.
    pub fn css_override_name(&self) -> Option<&str> {
        self.css_override_name
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    /// See [`geometry::baseline_ratio`].
    pub fn baseline_ratio(&self) -> f64 {
        geometry::baseline_ratio(self.ascent, self.descent)
    }

    /// See [`geometry::line_height`].
    pub fn line_height(&self) -> f64 {
        geometry::line_height(self.ascent, self.descent)
    }
}

/// CSS generic font family used as the fallback after the declared name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenericFamily {
    Monospace,
    Serif,
    SansSerif,
}

impl GenericFamily {
    /// Fixed width wins over serif; anything else is sans-serif.
    pub fn classify(font: &FontAttributes) -> Self {
        if font.is_fixed_width {
            GenericFamily::Monospace
        } else if font.is_serif {
            GenericFamily::Serif
        } else {
            GenericFamily::SansSerif
        }
    }

    /// The CSS keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            GenericFamily::Monospace => "monospace",
            GenericFamily::Serif => "serif",
            GenericFamily::SansSerif => "sans-serif",
        }
    }
}

impl fmt::Display for GenericFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slant of a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    /// Resolves the slant of a font.
    ///
    /// A declared name containing `oblique` in any letter case takes priority
    /// over the italic flag. Many PDF fonts (Helvetica-Oblique, Courier-Oblique)
    /// only advertise their slant through the name, and some set the italic
    /// flag as well.
    pub fn classify(font: &FontAttributes) -> Self {
        if has_oblique_hint(&font.declared_name) {
            FontStyle::Oblique
        } else if font.is_italic {
            FontStyle::Italic
        } else {
            FontStyle::Normal
        }
    }

    /// The `font-style` value, or `None` for upright fonts where no
    /// declaration is emitted.
    pub fn css_value(self) -> Option<&'static str> {
        match self {
            FontStyle::Normal => None,
            FontStyle::Italic => Some("italic"),
            FontStyle::Oblique => Some("oblique"),
        }
    }
}

const OBLIQUE: &[u8] = b"oblique";

fn has_oblique_hint(name: &str) -> bool {
    name.as_bytes()
        .windows(OBLIQUE.len())
        .any(|window| window.eq_ignore_ascii_case(OBLIQUE))
}
