use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;

/// A color as written in a style declaration.
///
/// Hex and `rgb()` forms are stored as concrete channels. CSS color names
/// are kept by name so they render back the way the caller wrote them, and
/// are resolved through palette's named color table on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Named(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Build a color from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self::Rgb {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Resolve to concrete channels. Returns None for names palette does not know.
    pub fn to_rgb(&self) -> Option<Rgb> {
        match self {
            Self::Rgb { r, g, b } => Some(Rgb::new(*r, *g, *b)),
            Self::Named(name) => {
                let srgb = palette::named::from_str(&name.to_ascii_lowercase())?;
                let (r, g, b) = srgb.into_components();
                Some(Rgb::new(r, g, b))
            }
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            Self::Rgb { r, g, b } => format!("#{r:02X}{g:02X}{b:02X}"),
            Self::Named(name) => name.clone(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(digits) = s.strip_prefix('#') {
            return parse_hex(digits).ok_or_else(|| ParseError::InvalidHex(s.to_string()));
        }

        if let Some(inner) = s.strip_prefix("rgb(").and_then(|rest| rest.strip_suffix(')')) {
            let channels: Vec<u8> = inner
                .split(',')
                .map(|part| part.trim().parse::<u8>())
                .collect::<Result<_, _>>()
                .map_err(|_| ParseError::InvalidRgb(s.to_string()))?;
            return match channels.as_slice() {
                [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
                _ => Err(ParseError::InvalidRgb(s.to_string())),
            };
        }

        if palette::named::from_str(&s.to_ascii_lowercase()).is_some() {
            Ok(Self::Named(s.to_string()))
        } else {
            Err(ParseError::UnknownColor(s.to_string()))
        }
    }
}

fn parse_hex(digits: &str) -> Option<Color> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 => {
            let value = u32::from_str_radix(digits, 16).ok()?;
            // #abc expands to #aabbcc
            let r = ((value >> 8) & 0xF) as u8 * 0x11;
            let g = ((value >> 4) & 0xF) as u8 * 0x11;
            let b = (value & 0xF) as u8 * 0x11;
            Some(Color::rgb(r, g, b))
        }
        6 => u32::from_str_radix(digits, 16).ok().map(Color::hex),
        _ => None,
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
