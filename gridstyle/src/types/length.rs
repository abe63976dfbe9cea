use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Root font size used to convert `rem` into pixels.
pub const ROOT_FONT_PX: f32 = 16.0;

/// A length as written in a style declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f32),
    Rem(f32),
    Percent(f32),
}

impl Length {
    pub const fn px(value: f32) -> Self {
        Self::Px(value)
    }

    pub const fn rem(value: f32) -> Self {
        Self::Rem(value)
    }

    pub const fn percent(value: f32) -> Self {
        Self::Percent(value)
    }

    /// Convert to pixels. Percentages are taken of `reference_px`.
    pub fn to_px(self, reference_px: f32) -> f32 {
        match self {
            Self::Px(v) => v,
            Self::Rem(v) => v * ROOT_FONT_PX,
            Self::Percent(v) => reference_px * v / 100.0,
        }
    }

    /// Convert to whole terminal cells of `cell_px` width, rounding up.
    pub fn to_cells(self, reference_px: f32, cell_px: f32) -> u16 {
        if cell_px <= 0.0 {
            return 0;
        }
        (self.to_px(reference_px) / cell_px).ceil().max(0.0) as u16
    }

    pub fn to_css(self) -> String {
        match self {
            Self::Px(v) => format!("{v}px"),
            Self::Rem(v) => format!("{v}rem"),
            Self::Percent(v) => format!("{v}%"),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Length {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ParseError::InvalidLength(s.to_string());

        let (number, build): (&str, fn(f32) -> Length) = if let Some(n) = s.strip_suffix("rem") {
            (n, Length::Rem)
        } else if let Some(n) = s.strip_suffix("px") {
            (n, Length::Px)
        } else if let Some(n) = s.strip_suffix('%') {
            (n, Length::Percent)
        } else {
            return Err(invalid());
        };

        number.trim().parse::<f32>().map(build).map_err(|_| invalid())
    }
}
