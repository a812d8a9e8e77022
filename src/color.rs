//! Colors passed through the core to the render collaborator
//!
//! Options carry colors as CSS-style hex strings; the renderer receives them
//! as linear `[f32; 4]` arrays with the per-edge opacity folded into alpha.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color {0:?} must start with '#'")]
    MissingHash(String),
    #[error("color {0:?} must have 3, 6 or 8 hex digits")]
    BadLength(String),
    #[error("color {0:?} contains a non-hex digit")]
    BadDigit(String),
}

/// RGBA color, each channel in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(hex.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(hex.to_string()));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| ColorError::BadDigit(hex.to_string()))
        };

        match digits.len() {
            3 => {
                // #abc is shorthand for #aabbcc
                let expand = |i: usize| {
                    let d = &digits[i..i + 1];
                    channel(&format!("{d}{d}"))
                };
                Ok(Self::new(expand(0)?, expand(1)?, expand(2)?, 1.0))
            }
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                1.0,
            )),
            8 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                channel(&digits[6..8])?,
            )),
            _ => Err(ColorError::BadLength(hex.to_string())),
        }
    }

    /// Same color with its alpha replaced by `opacity` (NaN reads as transparent)
    pub fn with_alpha(self, opacity: f32) -> Self {
        let a = if opacity.is_nan() { 0.0 } else { opacity.clamp(0.0, 1.0) };
        Self {
            a,
            ..self
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque
    pub fn to_hex(self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                byte(self.a)
            )
        }
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self {
        c.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_long_form() {
        let c = Rgba::from_hex("#7f7f7f").unwrap();
        assert!((c.r - 127.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_from_hex_short_and_alpha_forms() {
        assert_eq!(Rgba::from_hex("#fff").unwrap(), Rgba::WHITE);
        let c = Rgba::from_hex("#00000080").unwrap();
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_hex_errors() {
        assert!(matches!(Rgba::from_hex("000000"), Err(ColorError::MissingHash(_))));
        assert!(matches!(Rgba::from_hex("#0000"), Err(ColorError::BadLength(_))));
        assert!(matches!(Rgba::from_hex("#gg0000"), Err(ColorError::BadDigit(_))));
        assert!(matches!(Rgba::from_hex("#ééé"), Err(ColorError::BadDigit(_))));
    }

    #[test]
    fn test_with_alpha() {
        let c = Rgba::BLACK.with_alpha(0.25);
        assert_eq!(c.to_array(), [0.0, 0.0, 0.0, 0.25]);
        assert_eq!(Rgba::BLACK.with_alpha(3.0).a, 1.0);
        assert_eq!(Rgba::BLACK.with_alpha(f32::NAN).a, 0.0);
    }

    #[test]
    fn test_hex_serde() {
        let json = serde_json::to_string(&Rgba::from_hex("#7f7f7f").unwrap()).unwrap();
        assert_eq!(json, "\"#7f7f7f\"");
        let back: Rgba = serde_json::from_str("\"#000000\"").unwrap();
        assert_eq!(back, Rgba::BLACK);
        assert!(serde_json::from_str::<Rgba>("\"black\"").is_err());
    }
}
