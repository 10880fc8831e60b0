//! Click and hover payloads attached to interactive runs.

use crate::markup::ParsedMarkup;

/// Namespace prefixed to entity types and item ids that lack one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// What happens when a run is clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickAction {
    OpenUrl,
    OpenFile,
    RunCommand,
    SuggestCommand,
    ChangePage,
    CopyToClipboard,
}

impl ClickAction {
    /// Resolve a definition key such as `run_command`, ignoring case.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "open_url" => Some(ClickAction::OpenUrl),
            "open_file" => Some(ClickAction::OpenFile),
            "run_command" => Some(ClickAction::RunCommand),
            "suggest_command" => Some(ClickAction::SuggestCommand),
            "change_page" => Some(ClickAction::ChangePage),
            "copy_to_clipboard" => Some(ClickAction::CopyToClipboard),
            _ => None,
        }
    }

    /// The definition key for this action.
    pub fn key(self) -> &'static str {
        match self {
            ClickAction::OpenUrl => "open_url",
            ClickAction::OpenFile => "open_file",
            ClickAction::RunCommand => "run_command",
            ClickAction::SuggestCommand => "suggest_command",
            ClickAction::ChangePage => "change_page",
            ClickAction::CopyToClipboard => "copy_to_clipboard",
        }
    }

    /// Human readable label, e.g. `run command`.
    pub fn label(self) -> String {
        self.key().replace('_', " ")
    }
}

/// A click action together with its value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickEvent {
    pub action: ClickAction,
    pub value: String,
}

impl ClickEvent {
    pub fn new(action: ClickAction, value: impl Into<String>) -> Self {
        Self {
            action,
            value: value.into(),
        }
    }

    /// An `open_url` event.
    pub fn open_url(url: impl Into<String>) -> Self {
        Self::new(ClickAction::OpenUrl, url)
    }
}

/// Which kind of hover a definition key asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HoverAction {
    ShowText,
    ShowEntity,
    ShowItem,
}

impl HoverAction {
    /// Resolve a definition key, ignoring case. `hover` is an alias of
    /// `show_text`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "show_text" | "hover" => Some(HoverAction::ShowText),
            "show_entity" => Some(HoverAction::ShowEntity),
            "show_item" => Some(HoverAction::ShowItem),
            _ => None,
        }
    }
}

/// Entity shown on hover.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityHover {
    /// Namespaced entity type, e.g. `minecraft:pig`.
    pub kind: String,
    /// Entity id as written.
    pub id: String,
    /// Optional display name.
    pub name: Option<ParsedMarkup>,
}

/// Item shown on hover.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemHover {
    /// Namespaced item id, e.g. `minecraft:diamond`.
    pub id: String,
    pub count: u32,
    /// Raw structured-data tag text, passed through untouched.
    pub tag: Option<String>,
}

/// What is shown when a run is hovered.
#[derive(Clone, Debug, PartialEq)]
pub enum HoverEvent {
    ShowText(ParsedMarkup),
    ShowEntity(EntityHover),
    ShowItem(ItemHover),
}

impl HoverEvent {
    pub fn action(&self) -> HoverAction {
        match self {
            HoverEvent::ShowText(_) => HoverAction::ShowText,
            HoverEvent::ShowEntity(_) => HoverAction::ShowEntity,
            HoverEvent::ShowItem(_) => HoverAction::ShowItem,
        }
    }

    /// The hover text document, if this is a `show_text` hover.
    pub fn as_text(&self) -> Option<&ParsedMarkup> {
        match self {
            HoverEvent::ShowText(text) => Some(text),
            _ => None,
        }
    }
}

/// Prefix `value` with the default namespace unless it already has one.
pub(crate) fn namespaced(value: &str) -> String {
    if value.contains(':') {
        value.to_string()
    } else {
        format!("{}:{}", DEFAULT_NAMESPACE, value)
    }
}
