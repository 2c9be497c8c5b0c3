//! CSS rule emission.
//!
//! [`CssEmitter`] writes one rule block per call, in the shape fixed for each
//! category:
//!
//! ```text
//! @font-face{font-family:f<id>;src:url(f<id><suffix>)format("<format>");}.f<id>{font-family:f<id>;<alignment>}
//! .f<id>{font-family:<family>;[font-weight:bold;][font-style:italic|oblique;]<alignment>}
//! .f<id>{font-family:sans-serif;color:transparent;visibility:hidden;}
//! .s<id>{font-size:<size>px;}
//! .w<id>{width:<width>px;}
//! .t<id>{[<prefix>transform:matrix(a,-b,-c,d,e,-f);]*}
//! .c<id>{color:rgb(r,g,b);}
//! ```
//!
//! `<alignment>` places the transform origin on the font baseline for every
//! vendor variant and sets the line height to the font's vertical extent.
//! Each block ends with `}` and a newline.

use crate::color::ColorValue;
use crate::config::ExportConfig;
use crate::font::{FontAttributes, FontStyle, GenericFamily};
use crate::geometry::AffineTransform;
use crate::ident::StyleId;
use crate::sink::StyleSink;

/// Writes style rules to a [`StyleSink`].
///
/// # Example
///
/// ```rust
/// use pdfcss::{CssEmitter, StyleCategory, StyleId};
///
/// let emitter = CssEmitter::default();
/// let mut css = String::new();
/// emitter.font_size(&mut css, StyleId::new(StyleCategory::FontSize, 10), 12.5);
/// assert_eq!(css, ".sa{font-size:12.5px;}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CssEmitter {
    config: ExportConfig,
}

impl CssEmitter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Declares an embedded font file and a class using it.
    ///
    /// The font is registered under the family name `f<id>` and loaded from
    /// `f<id><suffix>`; `format` is the `format()` hint, e.g. `woff`.
    pub fn remote_font<S: StyleSink + ?Sized>(
        &self,
        sink: &mut S,
        id: StyleId,
        suffix: &str,
        format: &str,
        font: &FontAttributes,
    ) {
        let family = id.family_name();
        let mut rule = format!(
            "@font-face{{font-family:{};src:url({})format(\"{}\");}}",
            family,
            id.resource_name(suffix),
            format
        );
        rule.push_str(&format!("{}{{font-family:{};", id.selector(), family));
        self.push_alignment(&mut rule, font);
        rule.push_str("}\n");
        self.write(sink, id, &rule);
    }

    /// Declares a class using a font installed on the reader's system.
    ///
    /// The family is the override when one is set, otherwise the declared
    /// name followed by its generic family.
    pub fn local_font<S: StyleSink + ?Sized>(
        &self,
        sink: &mut S,
        id: StyleId,
        font: &FontAttributes,
    ) {
        let family = match font.css_override_name() {
            Some(family) => family.to_string(),
            None => format!(
                "{},{}",
                font.declared_name,
                GenericFamily::classify(font)
            ),
        };

        let mut rule = format!("{}{{font-family:{};", id.selector(), family);
        if font.is_bold {
            rule.push_str("font-weight:bold;");
        }
        if let Some(style) = FontStyle::classify(font).css_value() {
            rule.push_str(&format!("font-style:{};", style));
        }
        self.push_alignment(&mut rule, font);
        rule.push_str("}\n");
        self.write(sink, id, &rule);
    }

    /// Declares an invisible class for text whose font could not be used.
    ///
    /// The text stays in the document for selection and search.
    pub fn default_font<S: StyleSink + ?Sized>(&self, sink: &mut S, id: StyleId) {
        log::warn!("font {} could not be processed, rendering its text invisibly", id);
        let rule = format!(
            "{}{{font-family:sans-serif;color:transparent;visibility:hidden;}}\n",
            id.selector()
        );
        self.write(sink, id, &rule);
    }

    pub fn font_size<S: StyleSink + ?Sized>(&self, sink: &mut S, id: StyleId, size: f64) {
        let rule = format!(
            "{}{{font-size:{};}}\n",
            id.selector(),
            self.config.length(size)
        );
        self.write(sink, id, &rule);
    }

    pub fn whitespace<S: StyleSink + ?Sized>(&self, sink: &mut S, id: StyleId, width: f64) {
        let rule = format!("{}{{width:{};}}\n", id.selector(), self.config.length(width));
        self.write(sink, id, &rule);
    }

    /// Declares a class applying a PDF-space transform.
    ///
    /// The identity produces an empty rule body. Any other matrix is flipped
    /// into CSS space and written once per configured vendor variant.
    pub fn transform<S: StyleSink + ?Sized>(
        &self,
        sink: &mut S,
        id: StyleId,
        tm: &AffineTransform,
    ) {
        let mut rule = format!("{}{{", id.selector());
        if !tm.is_identity() {
            let css = tm.to_css();
            let config = &self.config;
            for engine in &config.render_engines {
                let (e, f) = if engine.needs_translation_units() {
                    (config.length(css.e), config.length(css.f))
                } else {
                    (config.number(css.e).to_string(), config.number(css.f).to_string())
                };
                rule.push_str(&format!(
                    "{}transform:matrix({},{},{},{},{},{});",
                    engine.prefix(),
                    config.number(css.a),
                    config.number(css.b),
                    config.number(css.c),
                    config.number(css.d),
                    e,
                    f
                ));
            }
        }
        rule.push_str("}\n");
        self.write(sink, id, &rule);
    }

    pub fn color<S: StyleSink + ?Sized>(&self, sink: &mut S, id: StyleId, color: ColorValue) {
        let rule = format!(
            "{}{{color:rgb({},{},{});}}\n",
            id.selector(),
            color.r,
            color.g,
            color.b
        );
        self.write(sink, id, &rule);
    }

    fn push_alignment(&self, rule: &mut String, font: &FontAttributes) {
        let origin = self.config.number(font.baseline_ratio() * 100.0);
        for engine in &self.config.render_engines {
            rule.push_str(&format!("{}transform-origin:0% {}%;", engine.prefix(), origin));
        }
        rule.push_str(&format!(
            "line-height:{};",
            self.config.line_height(font.line_height())
        ));
    }

    fn write<S: StyleSink + ?Sized>(&self, sink: &mut S, id: StyleId, rule: &str) {
        log::trace!("{} rule {}", id.category(), id.selector());
        sink.append(rule);
    }
}
