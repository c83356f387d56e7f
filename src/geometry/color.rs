use std::fmt;
use std::str::FromStr;

use crate::error::FigureError;

/// An 8-bit-per-channel RGBA display color.
///
/// Text form is `#RRGGBBAA` in upper-case hex. Parsing also accepts `#RRGGBB`
/// (opaque) and the names of the associated constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    const NAMED: [(&'static str, Color); 6] = [
        ("black", Color::BLACK),
        ("white", Color::WHITE),
        ("red", Color::RED),
        ("green", Color::GREEN),
        ("blue", Color::BLUE),
        ("transparent", Color::TRANSPARENT),
    ];

    /// Creates a color from all four channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    fn parse_hex(digits: &str) -> Option<Self> {
        if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        let alpha = match digits.len() {
            6 => 255,
            8 => channel(6)?,
            _ => return None,
        };
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = match s.strip_prefix('#') {
            Some(digits) => Self::parse_hex(digits),
            None => Self::NAMED
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(s))
                .map(|&(_, color)| color),
        };
        parsed.ok_or_else(|| FigureError::InvalidColor(format!("`{s}`")))
    }
}
