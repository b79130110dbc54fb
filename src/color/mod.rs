//! Packed ARGB colors
//!
//! Colors are stored as `0xAARRGGBB`. Literals known at build time go through
//! [`Argb::from_hex_literal`], which runs during constant evaluation, so a typo
//! in a palette literal fails the build instead of surfacing at runtime.
//! Strings coming from config files go through [`str::parse`].

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A 32-bit color with alpha, red, green and blue channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb(u32);

impl Argb {
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    pub const BLACK: Self = Self(0xFF00_0000);

    const OPAQUE: u32 = 0xFF00_0000;

    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_argb(0xFF, red, green, blue)
    }

    pub const fn from_argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self(((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Parse a `#RRGGBB` or `#AARRGGBB` literal in a const context.
    ///
    /// Panics on a malformed literal. Used for `const` items, where the panic
    /// becomes a compile error.
    pub const fn from_hex_literal(lit: &str) -> Self {
        let b = lit.as_bytes();
        assert!(!b.is_empty() && b[0] == b'#', "color literal must start with '#'");
        let digits = b.len() - 1;
        assert!(digits == 6 || digits == 8, "color literal must have 6 or 8 hex digits");

        let mut value: u32 = 0;
        let mut i = 1;
        while i < b.len() {
            value = (value << 4) | nibble(b[i]) as u32;
            i += 1;
        }
        if digits == 6 {
            value |= Self::OPAQUE;
        }
        Self(value)
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }

    /// `#RRGGBB`, alpha ignored.
    pub fn to_rgb_hex(self) -> String {
        format!("#{}", hex::encode_upper([self.red(), self.green(), self.blue()]))
    }
}

const fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit in color literal"),
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            f.write_str(&self.to_rgb_hex())
        } else {
            write!(f, "#{}", hex::encode_upper(self.0.to_be_bytes()))
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseColorError {
    #[error("color must start with '#'")]
    MissingHash,
    #[error("expected 6 or 8 hex digits, got {0}")]
    BadLength(usize),
    #[error("invalid hex digits: {0}")]
    BadDigit(#[from] hex::FromHexError),
}

impl FromStr for Argb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(ParseColorError::MissingHash)?;
        match digits.len() {
            6 => {
                let mut rgb = [0u8; 3];
                hex::decode_to_slice(digits, &mut rgb)?;
                Ok(Self::from_rgb(rgb[0], rgb[1], rgb[2]))
            }
            8 => {
                let mut argb = [0u8; 4];
                hex::decode_to_slice(digits, &mut argb)?;
                Ok(Self(u32::from_be_bytes(argb)))
            }
            n => Err(ParseColorError::BadLength(n)),
        }
    }
}

impl From<Argb> for ratatui::style::Color {
    fn from(c: Argb) -> Self {
        ratatui::style::Color::Rgb(c.red(), c.green(), c.blue())
    }
}
