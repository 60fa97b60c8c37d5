//! 24-bit RGB color value, persisted as a `#rrggbb` hex string

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An immutable RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string (case-insensitive).
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Format as a lowercase `#rrggbb` hex string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(c: Color) -> Self {
        image::Rgb([c.r, c.g, c.b])
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(p: image::Rgb<u8>) -> Self {
        Color::new(p.0[0], p.0[1], p.0[2])
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).ok_or_else(|| D::Error::custom(format!("invalid hex color: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let c = Color::new(0xb5, 0x7e, 0xdc);
        assert_eq!(c.to_hex(), "#b57edc");
        assert_eq!(Color::from_hex("#b57edc"), Some(c));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Color::from_hex("#FF69B4"), Some(Color::new(0xff, 0x69, 0xb4)));
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!(Color::from_hex("ff69b4"), None); // missing '#'
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#ff69b4aa"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex(""), None);
    }

    #[test]
    fn serde_uses_hex_strings() {
        let c = Color::new(0xf3, 0xe6, 0xff);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#f3e6ff\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        assert!(serde_json::from_str::<Color>("\"purple\"").is_err());
    }
}
