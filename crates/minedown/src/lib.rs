//! MineDown markup parser for chat text styling.
//!
//! This crate parses a lightweight markup language for game chat messages
//! into an ordered sequence of styled runs that a host rich-text model can
//! consume.
//!
//! # Overview
//!
//! - `&6Gold`, `&l`, `&r` - Legacy color and format codes (`§` is always
//!   accepted too)
//! - `&#ff00ff&`, `&gold&` - Inline hex and named colors
//! - `**bold**`, `##italic##`, `__underlined__`, `~~struck~~`, `??obfuscated??`
//! - `[text](definitions)` - Styled and interactive text
//! - `https://example.com` - Bare URLs become clickable
//! - `\[` - Escaped character
//!
//! A definition list mixes style names (`red bold`), directives
//! (`color=`, `format=`, `font=`), click actions (`run_command=/help`,
//! `open_url=...`, or a bare URL or `/command`), and hover payloads
//! (`show_text=...`, `show_entity=uuid:pig`, `show_item=diamond*5`). Anything
//! else becomes hover text.
//!
//! # Usage
//!
//! ```
//! use minedown::{ClickAction, NamedColor, ParsedMarkup};
//!
//! let parsed = ParsedMarkup::parse("[Help](gold /help) me").unwrap();
//! assert_eq!(parsed.text(), "Help me");
//!
//! let help = &parsed.runs()[0];
//! assert_eq!(help.color(), Some(NamedColor::Gold.into()));
//! assert_eq!(help.click.as_ref().unwrap().action, ClickAction::RunCommand);
//! ```
//!
//! Hosts with their own rich-text model implement [`RunBuilder`] and call
//! [`ParsedMarkup::build_into`].

pub mod color;
pub mod error;
pub mod event;
pub mod markup;
pub mod options;
pub mod parser;
pub mod run;
pub mod style;
pub mod util;

// Re-export main types at crate root
pub use color::{Color, NamedColor};
pub use error::{ColorParseError, MarkupError};
pub use event::{ClickAction, ClickEvent, EntityHover, HoverAction, HoverEvent, ItemHover};
pub use markup::{ParsedMarkup, RunBuilder, RunCollector};
pub use options::{Features, LEGACY_SENTINEL, ParserOptions};
pub use parser::{EventDefinition, escape, parse, parse_event};
pub use run::StyledRun;
pub use style::{Decorations, Style, StyleCode};
