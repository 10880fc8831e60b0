//! Color types for MineDown markup.
//!
//! Supports the sixteen named chat colors and hex RGB (`#RGB`, `#RRGGBB`).

use std::fmt;

use nom::{
    IResult, bytes::complete::take_while_m_n, character::complete::char,
    combinator::all_consuming, sequence::preceded,
};
use phf::phf_map;

use crate::error::ColorParseError;

/// One of the sixteen named chat colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

static NAMED_COLORS: phf::Map<&'static str, NamedColor> = phf_map! {
    "black" => NamedColor::Black,
    "dark_blue" => NamedColor::DarkBlue,
    "dark_green" => NamedColor::DarkGreen,
    "dark_aqua" => NamedColor::DarkAqua,
    "dark_red" => NamedColor::DarkRed,
    "dark_purple" => NamedColor::DarkPurple,
    "gold" => NamedColor::Gold,
    "gray" => NamedColor::Gray,
    "dark_gray" => NamedColor::DarkGray,
    "blue" => NamedColor::Blue,
    "green" => NamedColor::Green,
    "aqua" => NamedColor::Aqua,
    "red" => NamedColor::Red,
    "light_purple" => NamedColor::LightPurple,
    "yellow" => NamedColor::Yellow,
    "white" => NamedColor::White,
};

impl NamedColor {
    /// All named colors in legacy code order (`0` through `f`).
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// Look up a color by its name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED_COLORS.get(name.to_lowercase().as_str()).copied()
    }

    /// The canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkAqua => "dark_aqua",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkPurple => "dark_purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::LightPurple => "light_purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }

    /// The single-character legacy code for this color.
    pub fn code(self) -> char {
        match self {
            NamedColor::Black => '0',
            NamedColor::DarkBlue => '1',
            NamedColor::DarkGreen => '2',
            NamedColor::DarkAqua => '3',
            NamedColor::DarkRed => '4',
            NamedColor::DarkPurple => '5',
            NamedColor::Gold => '6',
            NamedColor::Gray => '7',
            NamedColor::DarkGray => '8',
            NamedColor::Blue => '9',
            NamedColor::Green => 'a',
            NamedColor::Aqua => 'b',
            NamedColor::Red => 'c',
            NamedColor::LightPurple => 'd',
            NamedColor::Yellow => 'e',
            NamedColor::White => 'f',
        }
    }

    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColor::Black => (0x00, 0x00, 0x00),
            NamedColor::DarkBlue => (0x00, 0x00, 0xaa),
            NamedColor::DarkGreen => (0x00, 0xaa, 0x00),
            NamedColor::DarkAqua => (0x00, 0xaa, 0xaa),
            NamedColor::DarkRed => (0xaa, 0x00, 0x00),
            NamedColor::DarkPurple => (0xaa, 0x00, 0xaa),
            NamedColor::Gold => (0xff, 0xaa, 0x00),
            NamedColor::Gray => (0xaa, 0xaa, 0xaa),
            NamedColor::DarkGray => (0x55, 0x55, 0x55),
            NamedColor::Blue => (0x55, 0x55, 0xff),
            NamedColor::Green => (0x55, 0xff, 0x55),
            NamedColor::Aqua => (0x55, 0xff, 0xff),
            NamedColor::Red => (0xff, 0x55, 0x55),
            NamedColor::LightPurple => (0xff, 0x55, 0xff),
            NamedColor::Yellow => (0xff, 0xff, 0x55),
            NamedColor::White => (0xff, 0xff, 0xff),
        }
    }
}

/// A resolved text color: either a palette entry or an arbitrary RGB value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Named palette color (e.g. `gold`, `dark_red`).
    Named(NamedColor),
    /// RGB color components.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a color from a string.
    ///
    /// Supports:
    /// - Named colors: `red`, `dark_blue`, `GOLD`
    /// - Hex colors: `#RGB`, `#RRGGBB`
    ///
    /// # Examples
    ///
    /// ```
    /// use minedown::{Color, NamedColor};
    ///
    /// assert_eq!(Color::parse("gold").unwrap(), Color::Named(NamedColor::Gold));
    /// assert_eq!(Color::parse("#f0f").unwrap(), Color::Rgb(255, 0, 255));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(ColorParseError::UnknownName(input.to_string()));
        }

        if input.starts_with('#') {
            return Self::parse_hex(input);
        }

        NamedColor::from_name(input)
            .map(Color::Named)
            .ok_or_else(|| ColorParseError::UnknownName(input.to_string()))
    }

    /// Parse a `#`-prefixed hex literal.
    fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(input.to_string());
        let (_, digits) = hex_literal(input).map_err(|_| invalid())?;
        Self::from_hex_digits(digits).ok_or_else(invalid)
    }

    /// Build a color from three or six bare hex digits.
    pub(crate) fn from_hex_digits(digits: &str) -> Option<Self> {
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok();
                Some(Color::Rgb(
                    nibble(0)? * 17,
                    nibble(1)? * 17,
                    nibble(2)? * 17,
                ))
            }
            6 => {
                let pair = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                Some(Color::Rgb(pair(0)?, pair(2)?, pair(4)?))
            }
            _ => None,
        }
    }

    /// Convert the color to RGB components.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Rgb(r, g, b) => (*r, *g, *b),
            Color::Named(named) => named.to_rgb(),
        }
    }

    /// Format as a lowercase `#rrggbb` literal.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color::Named(named)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(named) => f.write_str(named.name()),
            Color::Rgb(..) => f.write_str(&self.to_hex()),
        }
    }
}

/// `#` followed by three to six hex digits and nothing else.
fn hex_literal(input: &str) -> IResult<&str, &str> {
    all_consuming(preceded(
        char('#'),
        take_while_m_n(3, 6, |c: char| c.is_ascii_hexdigit()),
    ))(input)
}
