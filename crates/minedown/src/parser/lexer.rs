//! Lexer for event definitions.
//!
//! Splits the text between `](` and `)` on single spaces and classifies each
//! slice. Grouping of multi-word values happens in the definition parser,
//! since whether a `{` opens a group depends on the directive key.

use crate::style::StyleCode;
use crate::util::is_escaped;

/// What a definition token looks like on its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind<'a> {
    /// Bare style name: `red`, `bold`, `#ff0000`.
    Style(StyleCode),
    /// `font=<key>`.
    Font(&'a str),
    /// `color=<name>`.
    Color(&'a str),
    /// `format=<name>[,<name>...]`.
    Format(&'a str),
    /// Any other `key=value` whose `=` is not escaped.
    KeyValue { key: &'a str, value: &'a str },
    /// Everything else.
    Word,
}

/// A single space-delimited slice of a definition string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token<'a> {
    /// The slice as written.
    pub raw: &'a str,
    pub kind: TokenKind<'a>,
}

impl<'a> Token<'a> {
    /// Classify a raw slice.
    pub fn classify(raw: &'a str) -> Self {
        Self {
            raw,
            kind: Self::kind_of(raw),
        }
    }

    fn kind_of(raw: &'a str) -> TokenKind<'a> {
        if raw.is_empty() {
            return TokenKind::Word;
        }
        if let Ok(code) = StyleCode::parse(raw) {
            return TokenKind::Style(code);
        }

        match raw.find('=') {
            Some(eq) if eq > 0 && !is_escaped(raw, eq) => {
                let key = &raw[..eq];
                let value = &raw[eq + 1..];
                match key.to_lowercase().as_str() {
                    "font" => TokenKind::Font(value),
                    "color" => TokenKind::Color(value),
                    "format" => TokenKind::Format(value),
                    _ => TokenKind::KeyValue { key, value },
                }
            }
            _ => TokenKind::Word,
        }
    }

    /// True if this token starts a new `key=value` directive, which ends any
    /// unbraced multi-word value before it.
    pub fn is_key_value(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Font(_)
                | TokenKind::Color(_)
                | TokenKind::Format(_)
                | TokenKind::KeyValue { .. }
        )
    }
}

/// Lexer for event definition strings.
///
/// A leading or trailing space yields an empty token, so the space survives
/// when the tokens are joined back into a value.
///
/// # Examples
///
/// ```
/// use minedown::parser::{Lexer, TokenKind};
///
/// let tokens: Vec<_> = Lexer::new("red show_text=Hi").collect();
/// assert_eq!(tokens.len(), 2);
/// assert!(matches!(tokens[0].kind, TokenKind::Style(_)));
/// assert!(matches!(tokens[1].kind, TokenKind::KeyValue { key: "show_text", value: "Hi" }));
/// ```
pub struct Lexer<'a> {
    parts: std::str::Split<'a, char>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given definition string.
    pub fn new(definitions: &'a str) -> Self {
        Self {
            parts: definitions.split(' '),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parts.next().map(Token::classify)
    }
}
