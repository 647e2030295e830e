// Simple color struct, created from an unsigned 32 representing RRGGBBAA
// or parsed from a CSS hex string

use crate::error::EngineError;
use std::fmt;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_u32(0xffffffff);

    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // Accepts #RGB, #RRGGBB and #RRGGBBAA, with or without the leading '#'
    pub fn from_hex(hex: &str) -> Result<Color, EngineError> {
        let invalid = || EngineError::InvalidColor(hex.to_owned());
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let num = match digits.len() {
            3 => {
                let short = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                let expand = |nibble: u32| (nibble << 4) | nibble;
                (expand((short >> 8) & 0xf) << 24)
                    | (expand((short >> 4) & 0xf) << 16)
                    | (expand(short & 0xf) << 8)
                    | 0xff
            }
            6 => (u32::from_str_radix(digits, 16).map_err(|_| invalid())? << 8) | 0xff,
            8 => u32::from_str_radix(digits, 16).map_err(|_| invalid())?,
            _ => return Err(invalid()),
        };
        Ok(Color::from_u32(num))
    }

    // CSS string usable as a canvas fill/stroke/shadow style
    pub fn to_css(&self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                self.a as f64 / 255.0
            )
        }
    }

    pub fn default_palette() -> Vec<Color> {
        vec![
            Color::from_u32(0x00f5d4ff),
            Color::from_u32(0xf72585ff),
            Color::from_u32(0xa855f7ff),
        ]
    }
}

impl FromStr for Color {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(
            Color::from_hex("#00F5D4").unwrap(),
            Color { r: 0x00, g: 0xf5, b: 0xd4, a: 0xff }
        );
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
        assert_eq!(
            "A855F780".parse::<Color>().unwrap(),
            Color { r: 0xa8, g: 0x55, b: 0xf7, a: 0x80 }
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_hex("").is_err());
        assert!(Color::from_hex("#+12").is_err());
    }

    #[test]
    fn formats_as_css() {
        assert_eq!(Color::from_u32(0xf72585ff).to_css(), "#f72585");
        assert_eq!(Color::from_u32(0x00000000).to_css(), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn default_palette_matches_site_colors() {
        let css: Vec<String> = Color::default_palette().iter().map(Color::to_css).collect();
        assert_eq!(css, vec!["#00f5d4", "#f72585", "#a855f7"]);
    }
}
