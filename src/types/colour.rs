//! Colour types: HSL triples as generated, RGBA values as rendered.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AcidError, Result};

/// A hue/saturation/lightness colour.
///
/// Hue is in whole degrees `[0, 360)`; saturation and lightness are
/// percentages, matching CSS `hsl()` notation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    /// Create a new HSL colour.
    pub const fn new(hue: u16, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Rotate the hue by `degrees`, wrapping around the colour wheel.
    pub fn rotate(self, degrees: u16) -> Self {
        Self {
            hue: (self.hue % 360 + degrees % 360) % 360,
            ..self
        }
    }

    /// Shift lightness by `delta` percentage points.
    pub fn shift_lightness(self, delta: f64) -> Self {
        Self {
            lightness: self.lightness + delta,
            ..self
        }
    }

    /// Convert to an opaque RGBA colour.
    pub fn to_colour(self) -> Colour {
        use palette::{Hsl as PaletteHsl, IntoColor, Srgb};

        let hsl: PaletteHsl = PaletteHsl::new(
            f32::from(self.hue),
            (self.saturation / 100.0).clamp(0.0, 1.0) as f32,
            (self.lightness / 100.0).clamp(0.0, 1.0) as f32,
        );

        let rgb: Srgb<f32> = hsl.into_color();
        Colour::rgb(
            (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
            (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
            (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Supports `#RGB`, `#RRGGBB` and `#RRGGBBAA`; the `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 => {
                let r = parse_hex_byte(&hex[0..1])?;
                let g = parse_hex_byte(&hex[1..2])?;
                let b = parse_hex_byte(&hex[2..3])?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = parse_hex_byte(&hex[6..8])?;
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl FromStr for Colour {
    type Err = AcidError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

fn invalid_hex(s: &str) -> AcidError {
    AcidError::Input {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

/// Parse one or two hex digits.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| AcidError::Input {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_display() {
        let c = Hsl::new(301, 72.5, 68.0);
        assert_eq!(c.to_string(), "hsl(301, 72.5%, 68%)");
    }

    #[test]
    fn test_hsl_rotate_wraps() {
        let c = Hsl::new(300, 70.0, 60.0);
        assert_eq!(c.rotate(120).hue, 60);
        assert_eq!(c.rotate(240).hue, 180);
        assert_eq!(c.rotate(360).hue, 300);
    }

    #[test]
    fn test_hsl_rotate_out_of_range_hue() {
        let c = Hsl::new(65500, 70.0, 60.0);
        assert_eq!(c.rotate(120).hue, 100);
        assert_eq!(c.rotate(u16::MAX).hue, (340 + 15) % 360);
    }

    #[test]
    fn test_hsl_shift_lightness() {
        let c = Hsl::new(10, 70.0, 60.0).shift_lightness(-10.0);
        assert_eq!(c.lightness, 50.0);
        assert_eq!(c.saturation, 70.0);
    }

    #[test]
    fn test_hsl_to_colour_primaries() {
        assert_eq!(Hsl::new(0, 100.0, 50.0).to_colour(), Colour::rgb(255, 0, 0));
        assert_eq!(Hsl::new(240, 100.0, 50.0).to_colour(), Colour::rgb(0, 0, 255));
        assert_eq!(Hsl::new(0, 0.0, 100.0).to_colour(), Colour::WHITE);
        assert_eq!(Hsl::new(0, 0.0, 0.0).to_colour(), Colour::BLACK);
    }

    #[test]
    fn test_hsl_to_colour_is_opaque() {
        assert!(Hsl::new(187, 65.0, 55.0).to_colour().is_opaque());
    }

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c = Colour::from_hex("#1a1a2e").unwrap();
        assert_eq!(c, Colour::rgb(0x1a, 0x1a, 0x2e));
    }

    #[test]
    fn test_from_hex_3digit() {
        let c = Colour::from_hex("#ABC").unwrap();
        assert_eq!(c, Colour::rgb(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_from_hex_8digit() {
        let c = Colour::from_hex("#FF000080").unwrap();
        assert_eq!(c, Colour::new(255, 0, 0, 128));
    }

    #[test]
    fn test_from_hex_no_hash() {
        let c: Colour = "ffffff".parse().unwrap();
        assert_eq!(c, Colour::WHITE);
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("").is_err());
        assert!(Colour::from_hex("#éé").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#FF0000");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 128)), "#FF000080");
    }
}
