use std::{fmt, str::FromStr};

use ratatui::style::Color;
use thiserror::Error;

pub const PRIMARY: Color = Color::from_u32(0x0060a5fa);
pub const NEUTRAL: Color = Color::from_u32(0x00404040);
pub const BACKGROUND: Color = Color::from_u32(0x000f1724);
pub const LIGHT_TEXT: Color = Color::from_u32(0x00f5f5f5);
pub const ERROR: Color = Color::from_u32(0x00ef4444);
pub const LIKED: Color = Color::from_u32(0x00ff4081);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid hex color: {0:?}")]
pub struct ColorError(pub String);

/// An sRGB color as written in the mood themes (`#RRGGBB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_u32(value: u32) -> Self {
        Self(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
        )
    }

    /// Relative luminance in 0..=1, used to pick readable text over a background.
    pub fn luminance(self) -> f32 {
        (0.2126 * self.0 as f32 + 0.7152 * self.1 as f32 + 0.0722 * self.2 as f32) / 255.0
    }

    pub fn is_light(self) -> bool {
        self.luminance() > 0.6
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return Err(ColorError(s.to_string())),
        };
        if !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError(s.to_string()));
        }
        u32::from_str_radix(&expanded, 16)
            .map(Rgb::from_u32)
            .map_err(|_| ColorError(s.to_string()))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Blends `fg` toward `bg` by `opacity`; terminals have no alpha channel.
pub fn fade(fg: Rgb, bg: Rgb, opacity: f32) -> Color {
    bg.lerp(fg, opacity).into()
}
