//! Fixed pixel conversion used when no live measurement surface exists.
//!
//! 96 px = 1 in = 72 pt.
use crate::length::{Length, Unit};
use thiserror::Error;

pub const PX_PER_INCH: f32 = 96.0;
pub const PT_PER_INCH: f32 = 72.0;
pub const PX_PER_CM: f32 = PX_PER_INCH / 2.54;
/// Root font size that `rem` is measured against.
pub const ROOT_FONT_PX: f32 = 16.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("font size '{0}' cannot be converted without a measurement surface; use pt, px or in")]
    UnsupportedFontUnit(String),
    #[error("length '{0}' uses a unit that cannot be converted to pixels")]
    UnsupportedUnit(String),
    #[error("percentage '{0}' has no reference size to resolve against")]
    MissingReference(String),
}

/// What relative units resolve against.
#[derive(Debug, Clone, Copy)]
pub struct PixelContext {
    /// Pixel size of the current font, for `em`.
    pub font_px: f32,
    /// Size that `100%` refers to, if any.
    pub percent_base: Option<f32>,
}

impl PixelContext {
    pub fn new(font_px: f32, percent_base: Option<f32>) -> Self {
        Self {
            font_px,
            percent_base,
        }
    }
}

/// Converts a font size to pixels. Only absolute `pt`, `px` and `in` are accepted.
pub fn font_pixels(length: &Length) -> Result<f32, UnitError> {
    match length.unit {
        Unit::Px => Ok(length.value),
        Unit::Pt => Ok(length.value * PX_PER_INCH / PT_PER_INCH),
        Unit::In => Ok(length.value * PX_PER_INCH),
        _ => Err(UnitError::UnsupportedFontUnit(length.to_string())),
    }
}

/// Converts a general length to pixels.
///
/// Unitless values are read as pixels.
pub fn length_pixels(length: &Length, ctx: &PixelContext) -> Result<f32, UnitError> {
    let v = length.value;
    match &length.unit {
        Unit::Px | Unit::None => Ok(v),
        Unit::Pt => Ok(v * PX_PER_INCH / PT_PER_INCH),
        Unit::Pc => Ok(v * 12.0 * PX_PER_INCH / PT_PER_INCH),
        Unit::In => Ok(v * PX_PER_INCH),
        Unit::Cm => Ok(v * PX_PER_CM),
        Unit::Mm => Ok(v * PX_PER_CM / 10.0),
        Unit::Rem => Ok(v * ROOT_FONT_PX),
        Unit::Em => Ok(v * ctx.font_px),
        Unit::Percent => ctx
            .percent_base
            .map(|base| v * base / 100.0)
            .ok_or_else(|| UnitError::MissingReference(length.to_string())),
        Unit::Other(_) => Err(UnitError::UnsupportedUnit(length.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> PixelContext {
        PixelContext::new(16.0, Some(800.0))
    }

    #[test]
    fn test_font_pixels_fixed_conversion() {
        assert_eq!(font_pixels(&Length::pt(12.0)).unwrap(), 16.0);
        assert_eq!(font_pixels(&Length::px(13.0)).unwrap(), 13.0);
        assert_eq!(font_pixels(&Length::new(1.0, Unit::In)).unwrap(), 96.0);
    }

    #[test]
    fn test_font_pixels_rejects_relative_units() {
        for input in ["1rem", "2em", "50%", "12", "3vmin"] {
            assert!(
                matches!(
                    font_pixels(&Length::parse(input)),
                    Err(UnitError::UnsupportedFontUnit(_))
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_length_pixels() {
        let ctx = ctx();
        assert_eq!(length_pixels(&Length::parse("1rem"), &ctx).unwrap(), 16.0);
        assert_eq!(length_pixels(&Length::parse("2em"), &ctx).unwrap(), 32.0);
        assert_eq!(length_pixels(&Length::parse("50%"), &ctx).unwrap(), 400.0);
        assert_eq!(length_pixels(&Length::parse("72pt"), &ctx).unwrap(), 96.0);
        assert_eq!(length_pixels(&Length::parse("10"), &ctx).unwrap(), 10.0);
        assert!((length_pixels(&Length::parse("2.54cm"), &ctx).unwrap() - 96.0).abs() < 0.001);
        assert!((length_pixels(&Length::parse("25.4mm"), &ctx).unwrap() - 96.0).abs() < 0.001);
    }

    #[test]
    fn test_percent_without_reference() {
        let ctx = PixelContext::new(16.0, None);
        assert_eq!(
            length_pixels(&Length::parse("100%"), &ctx),
            Err(UnitError::MissingReference("100%".into()))
        );
    }
}
