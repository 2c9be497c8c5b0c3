//! # pdfcss - Style interning and CSS generation for PDF-to-HTML conversion
//!
//! `pdfcss` turns the style attributes a PDF renderer extracts (fonts, font
//! sizes, whitespace widths, text matrices, colors) into a compact stylesheet
//! of reusable classes. Each distinct value gets a short identifier such as
//! `f1a` or `s3`, used both as the class name in the generated markup and as
//! the rule selector.
//!
//! The crate does not parse PDFs, lay out text or subset fonts. It receives
//! attribute values from the parser and hands back identifiers and CSS text.
//!
//! ## Core Concepts
//!
//! - [`StyleId`]: category prefix plus lowercase hex index (`c0`, `sa`, `tff`)
//! - [`CssEmitter`]: writes one rule per style value to a [`StyleSink`]
//! - [`StyleRegistry`]: assigns identifiers on first sight and emits each rule once
//! - [`StyleSheet`]: per-category buffers, concatenated in a fixed order
//! - [`ExportConfig`]: precision, units and vendor variants, loadable from YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use pdfcss::{AffineTransform, FontAttributes, StyleRegistry};
//!
//! let mut registry: StyleRegistry = StyleRegistry::default();
//!
//! let times = FontAttributes::new("Times")
//!     .serif(true)
//!     .bold(true)
//!     .metrics(0.9, -0.2);
//! let font = registry.local_font(1, &times);
//! let size = registry.font_size(12.5);
//! let tm = registry.transform(&AffineTransform::IDENTITY);
//!
//! assert_eq!(format!("{} {} {}", font, size, tm), "f0 s0 t0");
//!
//! let css = registry.finish().to_css();
//! assert!(css.contains(".f0{font-family:Times,serif;font-weight:bold;"));
//! assert!(css.contains(".s0{font-size:12.5px;}"));
//! assert!(css.contains(".t0{}"));
//! ```
//!
//! ## Emitting Without a Registry
//!
//! Callers that track identifiers themselves can drive the emitter directly:
//!
//! ```rust
//! use pdfcss::{AffineTransform, CssEmitter, ExportConfig, StyleCategory, StyleId};
//!
//! let config = ExportConfig::from_yaml("render_engines: [standard]").unwrap();
//! let emitter = CssEmitter::new(config);
//!
//! let mut css = String::new();
//! let id = StyleId::new(StyleCategory::Transform, 1);
//! emitter.transform(&mut css, id, &AffineTransform::new(2.0, 0.0, 0.0, 1.0, 3.0, 4.0));
//! assert_eq!(css, ".t1{transform:matrix(2,0,0,1,3,-4);}\n");
//! ```
//!
//! ## Coordinate Systems
//!
//! PDF user space has Y pointing up; CSS has Y pointing down. Transforms are
//! flipped on output (see [`geometry`]), and font classes carry a
//! `transform-origin` on the baseline so rotated and scaled text pivots where
//! the PDF expects it.

pub mod color;
pub mod config;
pub mod emit;
mod error;
pub mod font;
pub mod geometry;
pub mod ident;
pub mod number;
pub mod registry;
pub mod sheet;
pub mod sink;
pub mod vendor;

pub use color::ColorValue;
pub use config::ExportConfig;
pub use emit::CssEmitter;
pub use error::{ExportError, Result};
pub use font::{FontAttributes, FontStyle, GenericFamily};
pub use geometry::{baseline_ratio, line_height, AffineTransform};
pub use ident::{StyleCategory, StyleId};
pub use number::CssNumber;
pub use registry::StyleRegistry;
pub use sheet::StyleSheet;
pub use sink::{IoSink, StyleSink};
pub use vendor::RenderEngine;
