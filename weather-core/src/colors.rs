use std::{fmt, str::FromStr};

use thiserror::Error;

/// Background colors referenced by name from the icon mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemColor {
    Orange,
    Blue,
    Teal,
    Tertiary,
    Quaternary,
    Gray,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown color name '{0}'")]
pub struct UnknownColor(pub String);

impl SystemColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemColor::Orange => "orange",
            SystemColor::Blue => "blue",
            SystemColor::Teal => "teal",
            SystemColor::Tertiary => "tertiary",
            SystemColor::Quaternary => "quaternary",
            SystemColor::Gray => "gray",
        }
    }

    pub const fn all() -> &'static [SystemColor] {
        &[
            SystemColor::Orange,
            SystemColor::Blue,
            SystemColor::Teal,
            SystemColor::Tertiary,
            SystemColor::Quaternary,
            SystemColor::Gray,
        ]
    }

    /// Fixed palette value. `Tertiary` and `Quaternary` are the gray2 and
    /// gray4 shades.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            SystemColor::Orange => (0xFF, 0x95, 0x00),
            SystemColor::Blue => (0x00, 0x7A, 0xFF),
            SystemColor::Teal => (0x30, 0xB0, 0xC7),
            SystemColor::Tertiary => (0xAE, 0xAE, 0xB2),
            SystemColor::Quaternary => (0xD1, 0xD1, 0xD6),
            SystemColor::Gray => (0x8E, 0x8E, 0x93),
        }
    }

    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

impl fmt::Display for SystemColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SystemColor {
    type Err = UnknownColor;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SystemColor::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == value)
            .ok_or_else(|| UnknownColor(value.to_string()))
    }
}
