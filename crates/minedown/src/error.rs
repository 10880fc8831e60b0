//! Error types for MineDown markup parsing.

use thiserror::Error;

/// Errors that can occur when parsing MineDown markup.
///
/// These are only surfaced when the parser is strict. A lenient parser
/// degrades the same conditions to defaults and keeps going.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MarkupError {
    /// A `color=` directive named a decoration.
    #[error("{0} is a format and not a color")]
    FormatAsColor(String),

    /// A `format=` directive named a color.
    #[error("{0} is a color and not a format")]
    ColorAsFormat(String),

    /// A `color=` or `format=` value that is neither a color nor a decoration.
    #[error("unknown color or format: {0}")]
    UnknownStyle(String),

    /// A `show_entity` value without an `id:type` pair.
    #[error(
        "invalid entity definition `{0}`: needs to be of format uuid:id or uuid:namespace:id"
    )]
    InvalidEntity(String),

    /// A `show_item` value whose `*count` suffix is not a number.
    #[error("invalid item count in `{0}`")]
    InvalidItemCount(String),

    /// Constructs nested deeper than the configured limit.
    #[error("markup nested deeper than {0} levels")]
    NestingTooDeep(usize),
}

/// Errors that can occur when parsing a color or style name.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}
