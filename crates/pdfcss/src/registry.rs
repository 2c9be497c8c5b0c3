//! Interning of style values.
//!
//! [`StyleRegistry`] hands out identifiers the first time a value is seen and
//! emits its rule at that moment. Later lookups of the same value return the
//! same identifier without emitting anything.
//!
//! Numeric values are keyed by their exact bit pattern, with negative zero
//! folded into zero. Values that differ only by rounding noise get separate
//! identifiers; callers that want coarser sharing should quantize first.

use std::collections::HashMap;
use std::hash::Hash;

use crate::color::ColorValue;
use crate::config::ExportConfig;
use crate::emit::CssEmitter;
use crate::font::FontAttributes;
use crate::geometry::AffineTransform;
use crate::ident::{StyleCategory, StyleId};
use crate::sheet::StyleSheet;

/// Assigns identifiers to style values and collects their rules.
///
/// Fonts are keyed by a caller-chosen key `K`, typically the PDF object
/// reference of the font. Local, remote and fallback fonts share one index
/// space, so each font key maps to exactly one `f` identifier.
///
/// # Example
///
/// ```rust
/// use pdfcss::{ColorValue, StyleRegistry};
///
/// let mut registry: StyleRegistry = StyleRegistry::default();
/// let small = registry.font_size(10.0);
/// let large = registry.font_size(24.0);
/// assert_eq!(registry.font_size(10.0), small);
/// assert_eq!(large.to_string(), "s1");
///
/// registry.color(ColorValue::new(255, 0, 128));
/// assert_eq!(
///     registry.finish().to_css(),
///     ".s0{font-size:10px;}\n.s1{font-size:24px;}\n.c0{color:rgb(255,0,128);}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StyleRegistry<K = u64> {
    emitter: CssEmitter,
    sheet: StyleSheet,
    fonts: HashMap<K, StyleId>,
    font_sizes: HashMap<u64, StyleId>,
    whitespace: HashMap<u64, StyleId>,
    transforms: HashMap<[u64; 6], StyleId>,
    colors: HashMap<ColorValue, StyleId>,
}

impl<K: Eq + Hash> Default for StyleRegistry<K> {
    fn default() -> Self {
        Self::new(ExportConfig::default())
    }
}

impl<K: Eq + Hash> StyleRegistry<K> {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            emitter: CssEmitter::new(config),
            sheet: StyleSheet::new(),
            fonts: HashMap::new(),
            font_sizes: HashMap::new(),
            whitespace: HashMap::new(),
            transforms: HashMap::new(),
            colors: HashMap::new(),
        }
    }

    pub fn emitter(&self) -> &CssEmitter {
        &self.emitter
    }

    /// Returns the identifier of a font key, if the font was registered.
    pub fn font_id(&self, key: &K) -> Option<StyleId> {
        self.fonts.get(key).copied()
    }

    /// Registers a font available on the reader's system.
    pub fn local_font(&mut self, key: K, font: &FontAttributes) -> StyleId {
        let Self {
            emitter,
            sheet,
            fonts,
            ..
        } = self;
        intern(fonts, key, StyleCategory::Font, |id| {
            emitter.local_font(sheet.sink(StyleCategory::Font), id, font);
        })
    }

    /// Registers an embedded font stored as `f<id><suffix>`.
    pub fn remote_font(
        &mut self,
        key: K,
        suffix: &str,
        format: &str,
        font: &FontAttributes,
    ) -> StyleId {
        let Self {
            emitter,
            sheet,
            fonts,
            ..
        } = self;
        intern(fonts, key, StyleCategory::RemoteFont, |id| {
            emitter.remote_font(sheet.sink(StyleCategory::RemoteFont), id, suffix, format, font);
        })
    }

    /// Registers a font that could not be processed; its text is hidden.
    pub fn default_font(&mut self, key: K) -> StyleId {
        let Self {
            emitter,
            sheet,
            fonts,
            ..
        } = self;
        intern(fonts, key, StyleCategory::Font, |id| {
            emitter.default_font(sheet.sink(StyleCategory::Font), id);
        })
    }

    pub fn font_size(&mut self, size: f64) -> StyleId {
        let Self {
            emitter,
            sheet,
            font_sizes,
            ..
        } = self;
        intern(font_sizes, float_key(size), StyleCategory::FontSize, |id| {
            emitter.font_size(sheet.sink(StyleCategory::FontSize), id, size);
        })
    }

    pub fn whitespace(&mut self, width: f64) -> StyleId {
        let Self {
            emitter,
            sheet,
            whitespace,
            ..
        } = self;
        intern(whitespace, float_key(width), StyleCategory::Whitespace, |id| {
            emitter.whitespace(sheet.sink(StyleCategory::Whitespace), id, width);
        })
    }

    pub fn transform(&mut self, tm: &AffineTransform) -> StyleId {
        let Self {
            emitter,
            sheet,
            transforms,
            ..
        } = self;
        let key = tm.to_array().map(float_key);
        intern(transforms, key, StyleCategory::Transform, |id| {
            emitter.transform(sheet.sink(StyleCategory::Transform), id, tm);
        })
    }

    pub fn color(&mut self, color: ColorValue) -> StyleId {
        let Self {
            emitter,
            sheet,
            colors,
            ..
        } = self;
        intern(colors, color, StyleCategory::Color, |id| {
            emitter.color(sheet.sink(StyleCategory::Color), id, color);
        })
    }

    /// Number of identifiers assigned in the index space of `category`.
    ///
    /// Both font categories report the shared font count.
    pub fn len(&self, category: StyleCategory) -> usize {
        match category {
            StyleCategory::Font | StyleCategory::RemoteFont => self.fonts.len(),
            StyleCategory::FontSize => self.font_sizes.len(),
            StyleCategory::Whitespace => self.whitespace.len(),
            StyleCategory::Transform => self.transforms.len(),
            StyleCategory::Color => self.colors.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        StyleCategory::ALL.iter().all(|&c| self.len(c) == 0)
    }

    /// The rules emitted so far.
    pub fn sheet(&self) -> &StyleSheet {
        &self.sheet
    }

    /// Ends the conversion run and returns its stylesheet.
    pub fn finish(self) -> StyleSheet {
        self.sheet
    }
}

/// Returns the identifier for `key`, assigning the next index and running
/// `emit` when the key is new.
///
/// Entries are never removed, so the map size is the next free index.
fn intern<Q: Eq + Hash>(
    map: &mut HashMap<Q, StyleId>,
    key: Q,
    category: StyleCategory,
    emit: impl FnOnce(StyleId),
) -> StyleId {
    if let Some(&id) = map.get(&key) {
        return id;
    }
    let id = StyleId::new(category, map.len() as u64);
    log::debug!("new {} style {}", category, id);
    emit(id);
    map.insert(key, id);
    id
}

/// Hash key for an `f64`: the bit pattern, with `-0.0` folded into `0.0`
/// and every NaN folded into one.
fn float_key(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}
