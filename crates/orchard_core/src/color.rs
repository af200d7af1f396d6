//! RGBA colors
//!
//! Colors are stored as normalized `f32` channels. Theme files describe them as
//! strings (`#rgb`, `#rrggbb`, `#rrggbbaa`, `transparent`, or a basic name), so
//! `Color` (de)serializes through its string form.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Errors produced when parsing a color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input was empty or whitespace
    #[error("empty color string")]
    Empty,

    /// A `#` color with bad digits or an unsupported length
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// A bare word that is not a known color keyword
    #[error("unknown color name: {0}")]
    UnknownName(String),
}

/// RGBA color with normalized channels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from 8-bit channels
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Build an opaque color from a `0xRRGGBB` literal
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgba8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            0xFF,
        )
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// 8-bit channels, rounded
    pub fn to_rgba8(&self) -> [u8; 4] {
        fn channel(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }

    /// Whether the color paints nothing
    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }

    /// Parse a color string.
    ///
    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `transparent` and a few basic
    /// keywords (`white`, `black`, `red`, `green`, `blue`, `gray`/`grey`).
    pub fn parse(input: &str) -> Result<Color, ColorParseError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(digits) = s.strip_prefix('#') {
            return parse_hex_digits(digits)
                .ok_or_else(|| ColorParseError::InvalidHex(s.into()));
        }

        match s.to_ascii_lowercase().as_str() {
            "transparent" => Ok(Color::TRANSPARENT),
            "white" => Ok(Color::WHITE),
            "black" => Ok(Color::BLACK),
            "red" => Ok(Color::from_hex(0xFF0000)),
            "green" => Ok(Color::from_hex(0x008000)),
            "blue" => Ok(Color::from_hex(0x0000FF)),
            "gray" | "grey" => Ok(Color::from_hex(0x808080)),
            _ => Err(ColorParseError::UnknownName(s.into())),
        }
    }
}

fn parse_hex_digits(digits: &str) -> Option<Color> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

    match digits.len() {
        3 => {
            let mut nibbles = digits
                .chars()
                .map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            let r = nibbles.next()??;
            let g = nibbles.next()??;
            let b = nibbles.next()??;
            Some(Color::from_rgba8(r, g, b, 0xFF))
        }
        6 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, 0xFF)),
        8 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_transparent() {
            return f.write_str("transparent");
        }
        let [r, g, b, a] = self.to_rgba8();
        if a == 0xFF {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColorVisitor;

        impl Visitor<'_> for ColorVisitor {
            type Value = Color;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a color string such as \"#28a745\" or \"transparent\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Color, E> {
                Color::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ColorVisitor)
    }
}
