//! Parser for MineDown markup.
//!
//! This module contains the scanner, the definition lexer, the event
//! definition parser and bare URL recognition.

mod definition;
mod lexer;
mod scanner;
mod url;

pub use definition::EventDefinition;
pub use lexer::{Lexer, Token, TokenKind};
pub use url::is_url;

use crate::error::MarkupError;
use crate::markup::ParsedMarkup;
use crate::options::{Features, ParserOptions};
use crate::style::FORMAT_MARKERS;
use crate::util::is_double;

use scanner::Scanner;

/// Parses MineDown markup into styled runs.
///
/// # Examples
///
/// ```
/// use minedown::ParserOptions;
/// use minedown::parser::parse;
///
/// let parsed = parse("&6Gold &lbold", &ParserOptions::default()).unwrap();
/// assert_eq!(parsed.text(), "Gold bold");
/// assert_eq!(parsed.runs().len(), 2);
/// ```
pub fn parse(input: &str, options: &ParserOptions) -> Result<ParsedMarkup, MarkupError> {
    Scanner::new(options).document(input)
}

/// Parses an interactive construct given as its display text and its raw
/// definition list, as if written `[text](definitions)`.
///
/// # Examples
///
/// ```
/// use minedown::{ClickAction, ParserOptions};
/// use minedown::parser::parse_event;
///
/// let parsed = parse_event("Help", "run_command=/help", &ParserOptions::default()).unwrap();
/// let click = parsed.runs()[0].click.as_ref().unwrap();
/// assert_eq!(click.action, ClickAction::RunCommand);
/// assert_eq!(click.value, "/help");
/// ```
pub fn parse_event(
    text: &str,
    definitions: &str,
    options: &ParserOptions,
) -> Result<ParsedMarkup, MarkupError> {
    Scanner::new(options)
        .event(text, definitions)
        .map(ParsedMarkup::new)
}

/// Resolves a definition list on its own, without display text.
pub fn parse_definitions(
    definitions: &str,
    options: &ParserOptions,
) -> Result<EventDefinition, MarkupError> {
    Scanner::new(options).definitions(definitions)
}

/// Escapes every character that would start markup under `options`, so that
/// parsing the result yields `input` as its text.
///
/// # Examples
///
/// ```
/// use minedown::ParserOptions;
/// use minedown::parser::escape;
///
/// assert_eq!(escape("**a** [b]", &ParserOptions::default()), r"\**a\** \[b]");
/// ```
pub fn escape(input: &str, options: &ParserOptions) -> String {
    let legacy = options.recognizes(Features::LEGACY_COLORS);
    let advanced = options.recognizes(Features::ADVANCED_FORMATTING);
    let simple = options.recognizes(Features::SIMPLE_FORMATTING);

    let mut escaped = String::with_capacity(input.len());
    for (i, c) in input.char_indices() {
        let has_next = i + c.len_utf8() < input.len();
        let special = c == '\\'
            || (legacy && has_next && options.is_sentinel(c))
            || (advanced && c == '[')
            || (simple && FORMAT_MARKERS.contains(&c) && is_double(input, i));
        if special {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_special_characters() {
        let options = ParserOptions::default();
        assert_eq!(escape("&6", &options), r"\&6");
        assert_eq!(escape("a&", &options), "a&");
        assert_eq!(escape(r"\", &options), r"\\");
        assert_eq!(escape("*a*", &options), "*a*");
        assert_eq!(escape("***", &options), r"\*\**");
    }

    #[test]
    fn escape_respects_disabled_features() {
        let options = ParserOptions::default()
            .disable(Features::LEGACY_COLORS | Features::ADVANCED_FORMATTING);
        assert_eq!(escape("&6 [x]", &options), "&6 [x]");
    }

    #[test]
    fn escaped_text_parses_back() {
        let options = ParserOptions::default();
        for input in [
            "&6Gold",
            "**b** ##i##",
            "[a](b)",
            r"a\b",
            "x.com/**y",
            "§lz",
            "&#f0f&",
        ] {
            let parsed = parse(&escape(input, &options), &options).unwrap();
            assert_eq!(parsed.text(), input, "round trip of {:?}", input);
        }
    }
}
