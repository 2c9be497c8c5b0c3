//! Number formatting for generated CSS.
//!
//! Values are printed in `%g` style: a fixed number of significant digits,
//! trailing zeros removed, and scientific notation only for very large or very
//! small magnitudes. This keeps floating-point noise out of the stylesheet, so
//! a line height computed as `0.9 - (-0.2)` prints as `1.1` rather than
//! `1.1000000000000001`.
//!
//! Negative zero prints as `0`. Flipping a coordinate system negates
//! coefficients that are frequently zero, and `-0` is never wanted in CSS.
//!
//! # Example
//!
//! ```rust
//! use pdfcss::number::CssNumber;
//!
//! assert_eq!(CssNumber::new(12.5).to_string(), "12.5");
//! assert_eq!(CssNumber::new(0.9 / 1.1 * 100.0).to_string(), "81.8182");
//! assert_eq!(CssNumber::new(-0.0).to_string(), "0");
//! assert_eq!(CssNumber::with_precision(1.0 / 3.0, 3).to_string(), "0.333");
//! ```

use std::fmt;

/// Significant digits used when no precision is configured.
pub const DEFAULT_PRECISION: usize = 6;

/// Largest useful precision for an `f64`.
pub const MAX_PRECISION: usize = 17;

/// An `f64` that displays in `%g` style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssNumber {
    value: f64,
    precision: usize,
}

impl CssNumber {
    /// Wraps a value using [`DEFAULT_PRECISION`] significant digits.
    pub fn new(value: f64) -> Self {
        Self::with_precision(value, DEFAULT_PRECISION)
    }

    /// Wraps a value with an explicit number of significant digits.
    ///
    /// The precision is clamped to `1..=MAX_PRECISION`.
    pub fn with_precision(value: f64, precision: usize) -> Self {
        Self {
            value,
            precision: precision.clamp(1, MAX_PRECISION),
        }
    }

    /// Returns the wrapped value.
    pub fn value(self) -> f64 {
        self.value
    }

    /// Returns the effective precision.
    pub fn precision(self) -> usize {
        self.precision
    }
}

impl From<f64> for CssNumber {
    fn from(value: f64) -> Self {
        CssNumber::new(value)
    }
}

impl fmt::Display for CssNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
        }
        // Also catches -0.0
        if value == 0.0 {
            return f.write_str("0");
        }

        // Round to the requested significant digits first; the decimal
        // exponent of the rounded value decides between fixed and scientific.
        let scientific = format!("{:.*e}", self.precision - 1, value);
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return f.write_str(&scientific);
        };
        let Ok(exponent) = exponent.parse::<i32>() else {
            return f.write_str(&scientific);
        };

        let precision = self.precision as i32;
        if (-4..precision).contains(&exponent) {
            let decimals = (precision - 1 - exponent) as usize;
            let fixed = format!("{:.*}", decimals, value);
            f.write_str(trim_fraction(&fixed))
        } else {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{}{:02}",
                trim_fraction(mantissa),
                sign,
                exponent.unsigned_abs()
            )
        }
    }
}

/// Strips trailing zeros after a decimal point, then the point itself.
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(value: f64) -> String {
        CssNumber::new(value).to_string()
    }

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(g(1.0), "1");
        assert_eq!(g(12.0), "12");
        assert_eq!(g(-4.0), "-4");
        assert_eq!(g(100000.0), "100000");
    }

    #[test]
    fn test_zero_and_negative_zero() {
        assert_eq!(g(0.0), "0");
        assert_eq!(g(-0.0), "0");
    }

    #[test]
    fn test_fraction_noise_is_rounded_away() {
        assert_eq!(g(0.9 - (-0.2)), "1.1");
        assert_eq!(g(0.1 + 0.2), "0.3");
        assert_eq!(g(12.5), "12.5");
    }

    #[test]
    fn test_six_significant_digits() {
        assert_eq!(g(0.9 / 1.1 * 100.0), "81.8182");
        assert_eq!(g(1.0 / 3.0), "0.333333");
        assert_eq!(g(123456.7), "123457");
    }

    #[test]
    fn test_small_values_switch_to_scientific_below_1e_minus_4() {
        assert_eq!(g(0.0001), "0.0001");
        assert_eq!(g(0.00001), "1e-05");
        assert_eq!(g(-0.000012345), "-1.2345e-05");
    }

    #[test]
    fn test_large_values_switch_to_scientific() {
        assert_eq!(g(1234567.0), "1.23457e+06");
        assert_eq!(g(1e21), "1e+21");
        assert_eq!(g(1e100), "1e+100");
    }

    #[test]
    fn test_rounding_can_bump_exponent() {
        assert_eq!(g(9.9999996), "10");
        assert_eq!(g(999999.6), "1e+06");
    }

    #[test]
    fn test_custom_precision() {
        assert_eq!(CssNumber::with_precision(81.818181, 3).to_string(), "81.8");
        assert_eq!(CssNumber::with_precision(2.7, 1).to_string(), "3");
        assert_eq!(CssNumber::with_precision(1234.0, 2).to_string(), "1.2e+03");
    }

    #[test]
    fn test_precision_is_clamped() {
        assert_eq!(CssNumber::with_precision(1.0, 0).precision(), 1);
        assert_eq!(CssNumber::with_precision(1.0, 40).precision(), MAX_PRECISION);
    }

    #[test]
    fn test_non_finite_values_print_like_printf() {
        assert_eq!(g(f64::INFINITY), "inf");
        assert_eq!(g(f64::NEG_INFINITY), "-inf");
        assert_eq!(g(f64::NAN), "nan");
        assert_eq!(g(-f64::NAN), "nan");
    }
}
