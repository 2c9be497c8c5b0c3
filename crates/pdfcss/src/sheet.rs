//! Per-category stylesheet buffers.

use std::io::Write;

use crate::error::Result;
use crate::ident::StyleCategory;

/// Sections in output order. Local and remote fonts share the first one.
const SECTIONS: usize = 5;

fn section(category: StyleCategory) -> usize {
    match category {
        StyleCategory::Font | StyleCategory::RemoteFont => 0,
        StyleCategory::FontSize => 1,
        StyleCategory::Whitespace => 2,
        StyleCategory::Transform => 3,
        StyleCategory::Color => 4,
    }
}

/// A stylesheet assembled from one ordered buffer per style category.
///
/// Rules within a category keep the order in which they were appended. The
/// finished sheet lists fonts, then font sizes, whitespace, transforms and
/// colors, whatever order the categories were filled in.
///
/// ```rust
/// use pdfcss::{StyleCategory, StyleSheet, StyleSink};
///
/// let mut sheet = StyleSheet::new();
/// sheet.sink(StyleCategory::Color).append(".c0{color:rgb(0,0,0);}\n");
/// sheet.sink(StyleCategory::FontSize).append(".s0{font-size:10px;}\n");
///
/// assert_eq!(
///     sheet.to_css(),
///     ".s0{font-size:10px;}\n.c0{color:rgb(0,0,0);}\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    sections: [String; SECTIONS],
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sink collecting rules for `category`.
    pub fn sink(&mut self, category: StyleCategory) -> &mut String {
        &mut self.sections[section(category)]
    }

    /// Returns the rules collected so far for `category`.
    pub fn rules(&self, category: StyleCategory) -> &str {
        &self.sections[section(category)]
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(String::is_empty)
    }

    /// Concatenates all sections.
    pub fn to_css(&self) -> String {
        self.sections.concat()
    }

    /// Writes all sections to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`](crate::ExportError::Io) on write failure.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        for section in &self.sections {
            writer.write_all(section.as_bytes())?;
        }
        writer.flush()?;
        Ok(())
    }
}
