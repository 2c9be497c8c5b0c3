//! Style identifiers.
//!
//! Every reusable style is addressed by a one-letter category prefix followed
//! by its index in lowercase hex:
//!
//! | Prefix | Category |
//! |--------|----------|
//! | `f` | font (local, remote or fallback) |
//! | `s` | font size |
//! | `w` | whitespace width |
//! | `t` | transform matrix |
//! | `c` | color |
//!
//! The same text is used as the class name in markup, as the `font-family`
//! name of an embedded font, and as the stem of the font file name.

use std::fmt;

/// A class of reusable style, each with its own identifier namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleCategory {
    Font,
    RemoteFont,
    FontSize,
    Whitespace,
    Transform,
    Color,
}

impl StyleCategory {
    pub const ALL: [StyleCategory; 6] = [
        StyleCategory::Font,
        StyleCategory::RemoteFont,
        StyleCategory::FontSize,
        StyleCategory::Whitespace,
        StyleCategory::Transform,
        StyleCategory::Color,
    ];

    /// Identifier prefix. Local and remote fonts share `f`.
    pub fn prefix(self) -> char {
        match self {
            StyleCategory::Font | StyleCategory::RemoteFont => 'f',
            StyleCategory::FontSize => 's',
            StyleCategory::Whitespace => 'w',
            StyleCategory::Transform => 't',
            StyleCategory::Color => 'c',
        }
    }

    /// Returns `true` for the two font categories.
    pub fn is_font(self) -> bool {
        matches!(self, StyleCategory::Font | StyleCategory::RemoteFont)
    }
}

impl fmt::Display for StyleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StyleCategory::Font => "font",
            StyleCategory::RemoteFont => "remote font",
            StyleCategory::FontSize => "font size",
            StyleCategory::Whitespace => "whitespace",
            StyleCategory::Transform => "transform",
            StyleCategory::Color => "color",
        };
        f.write_str(name)
    }
}

/// A category plus the index assigned when its value was first seen.
///
/// ```rust
/// use pdfcss::{StyleCategory, StyleId};
///
/// let id = StyleId::new(StyleCategory::FontSize, 10);
/// assert_eq!(id.to_string(), "sa");
/// assert_eq!(id.selector(), ".sa");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId {
    category: StyleCategory,
    index: u64,
}

impl StyleId {
    pub fn new(category: StyleCategory, index: u64) -> Self {
        Self { category, index }
    }

    pub fn category(self) -> StyleCategory {
        self.category
    }

    pub fn index(self) -> u64 {
        self.index
    }

    /// Class selector, e.g. `.f1a`.
    pub fn selector(self) -> String {
        format!(".{}", self)
    }

    /// `font-family` name under which an embedded font is declared.
    pub fn family_name(self) -> String {
        self.to_string()
    }

    /// File name of an embedded font: the identifier followed by `suffix`
    /// (e.g. `.woff`).
    pub fn resource_name(self, suffix: &str) -> String {
        format!("{}{}", self, suffix)
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:x}", self.category.prefix(), self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        let prefixes: String = StyleCategory::ALL.iter().map(|c| c.prefix()).collect();
        assert_eq!(prefixes, "ffswtc");
    }

    #[test]
    fn test_hex_rendering_without_padding() {
        assert_eq!(StyleId::new(StyleCategory::Color, 0).to_string(), "c0");
        assert_eq!(StyleId::new(StyleCategory::FontSize, 10).to_string(), "sa");
        assert_eq!(StyleId::new(StyleCategory::Transform, 255).to_string(), "tff");
        assert_eq!(StyleId::new(StyleCategory::Whitespace, 4096).to_string(), "w1000");
    }

    #[test]
    fn test_remote_and_local_fonts_render_alike() {
        let local = StyleId::new(StyleCategory::Font, 26);
        let remote = StyleId::new(StyleCategory::RemoteFont, 26);
        assert_eq!(local.to_string(), remote.to_string());
        assert_ne!(local, remote);
    }

    #[test]
    fn test_selector_family_and_resource_names() {
        let id = StyleId::new(StyleCategory::RemoteFont, 0x1a);
        assert_eq!(id.selector(), ".f1a");
        assert_eq!(id.family_name(), "f1a");
        assert_eq!(id.resource_name(".woff"), "f1a.woff");
    }

    #[test]
    fn test_accessors() {
        let id = StyleId::new(StyleCategory::Whitespace, 7);
        assert_eq!(id.category(), StyleCategory::Whitespace);
        assert_eq!(id.index(), 7);
        assert!(StyleCategory::RemoteFont.is_font());
        assert!(!StyleCategory::Color.is_font());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(StyleCategory::RemoteFont.to_string(), "remote font");
        assert_eq!(StyleCategory::FontSize.to_string(), "font size");
    }
}
