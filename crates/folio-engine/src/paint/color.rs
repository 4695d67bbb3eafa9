use serde::{Deserialize, Serialize};

use super::GradientError;

/// Color of a single gradient stop, as written in the gradient source.
///
/// Channels are straight (not premultiplied) sRGB bytes; alpha is `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColorValue {
    /// `rgb(r, g, b)`
    Rgb { r: u8, g: u8, b: u8 },
    /// `rgba(r, g, b, a)`
    Rgba { r: u8, g: u8, b: u8, a: f32 },
}

impl ColorValue {
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Alpha channel; `Rgb` colors are fully opaque.
    #[inline]
    pub fn alpha(self) -> f32 {
        match self {
            Self::Rgb { .. } => 1.0,
            Self::Rgba { a, .. } => a,
        }
    }
}

impl From<Rgba> for ColorValue {
    /// Alpha of exactly `1.0` produces `Rgb`; anything else keeps the alpha as `Rgba`.
    fn from(c: Rgba) -> Self {
        if c.a == 1.0 {
            Self::Rgb { r: c.r, g: c.g, b: c.b }
        } else {
            Self::Rgba { r: c.r, g: c.g, b: c.b, a: c.a }
        }
    }
}

/// A color handed over by a color-picker collaborator.
///
/// Validated once on construction, so gradient operations can convert it
/// without further checks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    r: u8,
    g: u8,
    b: u8,
    a: f32,
}

impl Rgba {
    /// Creates a color, rejecting alpha values that are NaN or outside `[0, 1]`.
    pub fn new(r: u8, g: u8, b: u8, a: f32) -> Result<Self, GradientError> {
        if !(0.0..=1.0).contains(&a) {
            return Err(GradientError::InvalidAlpha(a));
        }
        Ok(Self { r, g, b, a })
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_alpha_becomes_rgb() {
        let c: ColorValue = Rgba::opaque(10, 20, 30).into();
        assert_eq!(c, ColorValue::Rgb { r: 10, g: 20, b: 30 });
    }

    #[test]
    fn partial_alpha_stays_rgba() {
        for a in [0.0, 0.25, 0.999] {
            let c: ColorValue = Rgba::new(1, 2, 3, a).unwrap().into();
            assert_eq!(c, ColorValue::Rgba { r: 1, g: 2, b: 3, a });
        }
    }

    #[test]
    fn alpha_out_of_range_is_rejected() {
        assert_eq!(Rgba::new(0, 0, 0, 1.5), Err(GradientError::InvalidAlpha(1.5)));
        assert!(matches!(Rgba::new(0, 0, 0, -0.1), Err(GradientError::InvalidAlpha(_))));
        assert!(matches!(Rgba::new(0, 0, 0, f32::NAN), Err(GradientError::InvalidAlpha(_))));
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_string(&ColorValue::rgb(155, 81, 224)).unwrap();
        assert_eq!(json, r#"{"type":"rgb","r":155,"g":81,"b":224}"#);
        let back: ColorValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back.alpha(), 1.0);
    }
}
