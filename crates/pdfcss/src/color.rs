//! Text colors.

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorValue {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorValue {
    pub const BLACK: ColorValue = ColorValue::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts PDF color components in `[0, 1]` to bytes.
    ///
    /// Components are clamped and rounded to the nearest byte; NaN maps to 0.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::new(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b))
    }
}

impl From<(u8, u8, u8)> for ColorValue {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

fn unit_to_byte(component: f64) -> u8 {
    if component.is_nan() {
        return 0;
    }
    (component.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unit_endpoints() {
        assert_eq!(ColorValue::from_unit(0.0, 1.0, 0.0), ColorValue::new(0, 255, 0));
    }

    #[test]
    fn test_from_unit_rounds_to_nearest() {
        assert_eq!(ColorValue::from_unit(0.5, 0.2, 0.999), ColorValue::new(128, 51, 255));
    }

    #[test]
    fn test_from_unit_clamps_out_of_range() {
        assert_eq!(ColorValue::from_unit(-0.5, 1.5, f64::NAN), ColorValue::new(0, 255, 0));
    }

    #[test]
    fn test_from_tuple() {
        let color: ColorValue = (255, 0, 128).into();
        assert_eq!(color, ColorValue::new(255, 0, 128));
    }
}
