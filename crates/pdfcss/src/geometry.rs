//! Conversion between PDF user space and CSS space.
//!
//! PDF places the origin at the bottom-left with the Y axis pointing up; CSS
//! places it at the top-left with Y pointing down. A PDF matrix
//! `[a b c d e f]` therefore becomes `matrix(a,-b,-c,d,e,-f)` in CSS.
//!
//! Font metrics follow the same convention: ascent is positive above the
//! baseline, descent is negative below it.

/// Fraction of a font's vertical extent that sits above the baseline.
///
/// Used as the vertical component of `transform-origin` so that rotations and
/// scales pivot on the visual baseline. Returns `ascent / (ascent - descent)`
/// when the extent is strictly positive, otherwise `1.0`.
///
/// ```rust
/// use pdfcss::geometry::baseline_ratio;
///
/// assert_eq!(baseline_ratio(0.75, -0.25), 0.75);
/// assert_eq!(baseline_ratio(0.0, 0.0), 1.0);
/// ```
pub fn baseline_ratio(ascent: f64, descent: f64) -> f64 {
    let extent = line_height(ascent, descent);
    if extent > 0.0 {
        ascent / extent
    } else {
        1.0
    }
}

/// Total vertical extent of a font, `ascent - descent`.
pub fn line_height(ascent: f64, descent: f64) -> f64 {
    ascent - descent
}

/// A 2D affine transform `[a b c d e f]`.
///
/// Points are row vectors, as in PDF: `(x, y)` maps to
/// `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl AffineTransform {
    /// The transform that leaves every point unchanged.
    pub const IDENTITY: AffineTransform = AffineTransform::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// A pure translation.
    pub const fn translate(e: f64, f: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, e, f)
    }

    /// A pure scale.
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Returns the coefficients in `[a, b, c, d, e, f]` order.
    pub fn to_array(self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// Returns `true` when every coefficient equals the identity's.
    ///
    /// The comparison is exact: a matrix that is merely close to the
    /// identity still gets an explicit transform rule.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Converts a PDF-space transform to its CSS-space equivalent by
    /// reflecting the Y axis: `b`, `c` and `f` are negated.
    pub fn to_css(&self) -> AffineTransform {
        Self::new(self.a, -self.b, -self.c, self.d, self.e, -self.f)
    }

    /// Returns `self` followed by `other`.
    ///
    /// This is the PDF concatenation order: a text matrix concatenated with
    /// the CTM is `text.concat(&ctm)`.
    pub fn concat(&self, other: &AffineTransform) -> AffineTransform {
        Self::new(
            self.a * other.a + self.b * other.c,
            self.a * other.b + self.b * other.d,
            self.c * other.a + self.d * other.c,
            self.c * other.b + self.d * other.d,
            self.e * other.a + self.f * other.c + other.e,
            self.e * other.b + self.f * other.d + other.f,
        )
    }

    /// Maps a point through the transform.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f64; 6]> for AffineTransform {
    fn from(m: [f64; 6]) -> Self {
        Self::new(m[0], m[1], m[2], m[3], m[4], m[5])
    }
}

impl From<AffineTransform> for [f64; 6] {
    fn from(tm: AffineTransform) -> Self {
        tm.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_ratio_positive_extent() {
        let ratio = baseline_ratio(0.9, -0.2);
        assert!((ratio - 0.9 / 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_baseline_ratio_degenerate_extent_defaults_to_one() {
        assert_eq!(baseline_ratio(0.0, 0.0), 1.0);
        assert_eq!(baseline_ratio(0.5, 0.5), 1.0);
        assert_eq!(baseline_ratio(-0.2, 0.9), 1.0);
    }

    #[test]
    fn test_baseline_ratio_nan_defaults_to_one() {
        assert_eq!(baseline_ratio(f64::NAN, 0.0), 1.0);
    }

    #[test]
    fn test_line_height() {
        assert_eq!(line_height(1.0, -0.5), 1.5);
        assert_eq!(line_height(0.0, 0.25), -0.25);
    }

    #[test]
    fn test_identity_detection() {
        assert!(AffineTransform::IDENTITY.is_identity());
        assert!(AffineTransform::default().is_identity());
        assert!(AffineTransform::from([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]).is_identity());
        assert!(!AffineTransform::translate(0.0, 1e-9).is_identity());
        assert!(!AffineTransform::scale(2.0, 1.0).is_identity());
    }

    #[test]
    fn test_to_css_flips_y_axis() {
        let pdf = AffineTransform::new(2.0, 0.5, 0.25, 1.0, 3.0, 4.0);
        let css = pdf.to_css();
        assert_eq!(css.to_array(), [2.0, -0.5, -0.25, 1.0, 3.0, -4.0]);
    }

    #[test]
    fn test_to_css_is_an_involution() {
        let pdf = AffineTransform::new(0.8, 0.6, -0.6, 0.8, 10.0, 20.0);
        assert_eq!(pdf.to_css().to_css(), pdf);
    }

    #[test]
    fn test_concat_with_identity() {
        let tm = AffineTransform::new(2.0, 1.0, 0.5, 3.0, 7.0, -2.0);
        assert_eq!(tm.concat(&AffineTransform::IDENTITY), tm);
        assert_eq!(AffineTransform::IDENTITY.concat(&tm), tm);
    }

    #[test]
    fn test_concat_applies_self_first() {
        let scale = AffineTransform::scale(2.0, 2.0);
        let shift = AffineTransform::translate(10.0, 5.0);

        assert_eq!(scale.concat(&shift).apply(1.0, 1.0), (12.0, 7.0));
        assert_eq!(shift.concat(&scale).apply(1.0, 1.0), (22.0, 12.0));
    }

    #[test]
    fn test_apply() {
        let tm = AffineTransform::new(0.0, 1.0, -1.0, 0.0, 5.0, 0.0);
        assert_eq!(tm.apply(1.0, 0.0), (5.0, 1.0));
        assert_eq!(tm.apply(0.0, 1.0), (4.0, 0.0));
    }
}
