//! Style types for MineDown markup.
//!
//! A [`Style`] combines an optional color, a decoration set and an optional
//! font key. [`StyleCode`] is what a single legacy code or style name
//! resolves to.

use bitflags::bitflags;
use phf::phf_map;

use crate::color::{Color, NamedColor};
use crate::error::ColorParseError;

bitflags! {
    /// Boolean text attributes, independent of color.
    ///
    /// # Example
    ///
    /// ```
    /// use minedown::Decorations;
    ///
    /// let mut set = Decorations::BOLD;
    /// set |= Decorations::ITALIC;
    /// assert!(set.contains(Decorations::BOLD | Decorations::ITALIC));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Decorations: u8 {
        const BOLD          = 0b0000_0001;
        const ITALIC        = 0b0000_0010;
        const UNDERLINED    = 0b0000_0100;
        const STRIKETHROUGH = 0b0000_1000;
        const OBFUSCATED    = 0b0001_0000;
    }
}

/// Characters that open and close an inline formatting span when doubled.
pub const FORMAT_MARKERS: [char; 5] = ['*', '#', '_', '~', '?'];

impl Decorations {
    /// The decoration toggled by a doubled inline marker (`**`, `##`, ...).
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '*' => Some(Decorations::BOLD),
            '#' => Some(Decorations::ITALIC),
            '_' => Some(Decorations::UNDERLINED),
            '~' => Some(Decorations::STRIKETHROUGH),
            '?' => Some(Decorations::OBFUSCATED),
            _ => None,
        }
    }

    /// Look up a single decoration by name, ignoring case.
    pub fn from_style_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bold" => Some(Decorations::BOLD),
            "italic" => Some(Decorations::ITALIC),
            "underlined" | "underline" => Some(Decorations::UNDERLINED),
            "strikethrough" => Some(Decorations::STRIKETHROUGH),
            "obfuscated" | "magic" => Some(Decorations::OBFUSCATED),
            _ => None,
        }
    }

    /// The canonical name of a single decoration flag.
    ///
    /// Returns `None` for the empty set and for combined sets.
    pub fn name(self) -> Option<&'static str> {
        if self == Decorations::BOLD {
            Some("bold")
        } else if self == Decorations::ITALIC {
            Some("italic")
        } else if self == Decorations::UNDERLINED {
            Some("underlined")
        } else if self == Decorations::STRIKETHROUGH {
            Some("strikethrough")
        } else if self == Decorations::OBFUSCATED {
            Some("obfuscated")
        } else {
            None
        }
    }
}

/// What a legacy code or a bare style name resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleCode {
    /// Replace the current color.
    Color(Color),
    /// Add a decoration.
    Decoration(Decorations),
    /// Clear color and decorations.
    Reset,
}

static LEGACY_CODES: phf::Map<char, StyleCode> = phf_map! {
    '0' => StyleCode::Color(Color::Named(NamedColor::Black)),
    '1' => StyleCode::Color(Color::Named(NamedColor::DarkBlue)),
    '2' => StyleCode::Color(Color::Named(NamedColor::DarkGreen)),
    '3' => StyleCode::Color(Color::Named(NamedColor::DarkAqua)),
    '4' => StyleCode::Color(Color::Named(NamedColor::DarkRed)),
    '5' => StyleCode::Color(Color::Named(NamedColor::DarkPurple)),
    '6' => StyleCode::Color(Color::Named(NamedColor::Gold)),
    '7' => StyleCode::Color(Color::Named(NamedColor::Gray)),
    '8' => StyleCode::Color(Color::Named(NamedColor::DarkGray)),
    '9' => StyleCode::Color(Color::Named(NamedColor::Blue)),
    'a' => StyleCode::Color(Color::Named(NamedColor::Green)),
    'b' => StyleCode::Color(Color::Named(NamedColor::Aqua)),
    'c' => StyleCode::Color(Color::Named(NamedColor::Red)),
    'd' => StyleCode::Color(Color::Named(NamedColor::LightPurple)),
    'e' => StyleCode::Color(Color::Named(NamedColor::Yellow)),
    'f' => StyleCode::Color(Color::Named(NamedColor::White)),
    'k' => StyleCode::Decoration(Decorations::OBFUSCATED),
    'l' => StyleCode::Decoration(Decorations::BOLD),
    'm' => StyleCode::Decoration(Decorations::STRIKETHROUGH),
    'n' => StyleCode::Decoration(Decorations::UNDERLINED),
    'o' => StyleCode::Decoration(Decorations::ITALIC),
    'r' => StyleCode::Reset,
};

impl StyleCode {
    /// Resolve a single-letter legacy code (`6`, `l`, `R`, ...).
    pub fn from_legacy(code: char) -> Option<Self> {
        LEGACY_CODES.get(&code.to_ascii_lowercase()).copied()
    }

    /// Parse a style name: a color (`red`, `#ff0000`), a decoration
    /// (`bold`) or `reset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use minedown::{Decorations, StyleCode};
    ///
    /// assert_eq!(
    ///     StyleCode::parse("bold").unwrap(),
    ///     StyleCode::Decoration(Decorations::BOLD)
    /// );
    /// assert!(matches!(StyleCode::parse("red").unwrap(), StyleCode::Color(_)));
    /// ```
    pub fn parse(name: &str) -> Result<Self, ColorParseError> {
        if let Some(decoration) = Decorations::from_style_name(name) {
            return Ok(StyleCode::Decoration(decoration));
        }
        if name.eq_ignore_ascii_case("reset") {
            return Ok(StyleCode::Reset);
        }
        Color::parse(name).map(StyleCode::Color)
    }

    pub fn is_decoration(&self) -> bool {
        matches!(self, StyleCode::Decoration(_))
    }
}

/// Visual style carried by a run: color, decorations and font.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    /// Text color, `None` to inherit the host default.
    pub color: Option<Color>,
    /// Active decorations.
    pub decorations: Decorations,
    /// Opaque font key.
    pub font: Option<String>,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// A style with only a color set.
    pub fn colored(color: impl Into<Color>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }

    /// Returns true if no style properties are set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.decorations.is_empty() && self.font.is_none()
    }

    /// Apply a legacy code the way the scanner does: a color replaces the
    /// color and clears decorations, a decoration is added, reset clears both.
    /// The font is never touched.
    pub fn apply(&mut self, code: StyleCode) {
        match code {
            StyleCode::Color(color) => {
                self.color = Some(color);
                self.decorations = Decorations::empty();
            }
            StyleCode::Decoration(decoration) => self.decorations |= decoration,
            StyleCode::Reset => {
                self.color = None;
                self.decorations = Decorations::empty();
            }
        }
    }
}
