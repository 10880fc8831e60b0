//! Event definitions: the space-separated list between `](` and `)`.
//!
//! A definition list sets the style of the display text and at most one
//! click action and one hover payload. Later directives of the same kind
//! override earlier ones.

use std::iter::{Enumerate, Peekable};

use log::{debug, trace};

use crate::color::NamedColor;
use crate::error::MarkupError;
use crate::event::{
    ClickAction, ClickEvent, EntityHover, HoverAction, HoverEvent, ItemHover, namespaced,
};
use crate::markup::ParsedMarkup;
use crate::run::StyledRun;
use crate::style::{Decorations, Style, StyleCode};
use crate::util::wrap;

use super::lexer::{Lexer, Token, TokenKind};
use super::scanner::{Ambient, Scanner};
use super::url::{is_url, with_url_scheme};

type Tokens<'a> = Peekable<Enumerate<Lexer<'a>>>;

/// The resolved meaning of a definition list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventDefinition {
    /// Color, decorations and font for the display text.
    pub style: Style,
    pub click: Option<ClickEvent>,
    pub hover: Option<HoverEvent>,
}

impl<'o> Scanner<'o> {
    /// Parse `definitions` and scan `text` with the result as its ambient
    /// state.
    pub(super) fn event(
        &self,
        text: &str,
        definitions: &str,
    ) -> Result<Vec<StyledRun>, MarkupError> {
        let definition = self.definitions(definitions)?;
        let ambient = Ambient {
            style: definition.style,
            click: definition.click,
            hover: definition.hover,
        };
        self.without_urls().scan(text, ambient)
    }

    /// Resolve a definition list.
    pub(super) fn definitions(&self, definitions: &str) -> Result<EventDefinition, MarkupError> {
        let mut definition = EventDefinition::default();
        let mut format_end: Option<usize> = None;
        let mut tokens: Tokens<'_> = Lexer::new(definitions).enumerate().peekable();

        while let Some((index, token)) = tokens.next() {
            match token.kind {
                TokenKind::Style(code) => {
                    apply_code(&mut definition.style, code);
                    format_end = Some(index);
                    continue;
                }
                TokenKind::Font(font) => {
                    definition.style.font = Some(font.to_string());
                    format_end = Some(index);
                    continue;
                }
                TokenKind::Color(value) => {
                    self.color_directive(&mut definition.style, value)?;
                    format_end = Some(index);
                    continue;
                }
                TokenKind::Format(value) => {
                    self.format_directive(&mut definition.style, value)?;
                    format_end = Some(index);
                    continue;
                }
                _ => {}
            }

            let after_format = format_end.map_or(index == 0, |end| index == end + 1);
            if after_format && is_url(token.raw) {
                trace!("implicit url `{}`", token.raw);
                definition.click = Some(ClickEvent::open_url(with_url_scheme(token.raw)));
                continue;
            }

            let (click_action, hover_action, start) = match token.kind {
                TokenKind::KeyValue { key, value } if is_action_key(key) => {
                    (ClickAction::from_key(key), HoverAction::from_key(key), value)
                }
                _ if token.raw.starts_with('/') => {
                    (Some(ClickAction::RunCommand), None, token.raw)
                }
                _ => (None, None, token.raw),
            };
            let keyed = click_action.is_some() || hover_action.is_some();
            let value = match start.strip_prefix('{') {
                Some(inner) if keyed => braced_value(inner, &mut tokens),
                _ => bare_value(start, &mut tokens),
            };

            match click_action {
                Some(action) => {
                    let prefixed =
                        action == ClickAction::OpenUrl && self.options.auto_url_prefix();
                    let value = if prefixed {
                        with_url_scheme(&value)
                    } else {
                        value
                    };
                    definition.click = Some(ClickEvent::new(action, value));
                }
                None => {
                    let action = hover_action.unwrap_or(HoverAction::ShowText);
                    if let Some(hover) = self.hover(action, &value)? {
                        definition.hover = Some(hover);
                    }
                }
            }
        }

        if definition.hover.is_none() {
            if let Some(click) = &definition.click {
                definition.hover = self.click_hover(click)?;
            }
        }
        Ok(definition)
    }

    fn color_directive(&self, style: &mut Style, value: &str) -> Result<(), MarkupError> {
        match StyleCode::parse(value) {
            Ok(StyleCode::Color(color)) => style.color = Some(color),
            Ok(StyleCode::Reset) => style.color = None,
            Ok(StyleCode::Decoration(_)) => {
                self.degrade(MarkupError::FormatAsColor(value.to_string()))?
            }
            Err(_) => self.degrade(MarkupError::UnknownStyle(value.to_string()))?,
        }
        Ok(())
    }

    fn format_directive(&self, style: &mut Style, value: &str) -> Result<(), MarkupError> {
        let names = value.split(',').map(str::trim);
        for name in names.filter(|name| !name.is_empty()) {
            match StyleCode::parse(name) {
                Ok(StyleCode::Decoration(decoration)) => style.decorations |= decoration,
                Ok(StyleCode::Reset) => style.decorations = Decorations::empty(),
                Ok(StyleCode::Color(_)) => {
                    self.degrade(MarkupError::ColorAsFormat(name.to_string()))?
                }
                Err(_) => self.degrade(MarkupError::UnknownStyle(name.to_string()))?,
            }
        }
        Ok(())
    }

    fn hover(&self, action: HoverAction, value: &str) -> Result<Option<HoverEvent>, MarkupError> {
        match action {
            HoverAction::ShowText => {
                if value.is_empty() {
                    return Ok(None);
                }
                let text = wrap(value, self.options.hover_text_width());
                Ok(self.sub_document(&text)?.map(HoverEvent::ShowText))
            }
            HoverAction::ShowEntity => self.entity_hover(value),
            HoverAction::ShowItem => self.item_hover(value).map(Some),
        }
    }

    /// `id:type [name]`, where the type may carry its own namespace.
    fn entity_hover(&self, value: &str) -> Result<Option<HoverEvent>, MarkupError> {
        let parts = value
            .split_once(':')
            .filter(|(id, rest)| !id.is_empty() && !rest.is_empty() && !rest.starts_with(' '));
        let Some((id, rest)) = parts else {
            self.degrade(MarkupError::InvalidEntity(value.to_string()))?;
            return Ok(None);
        };

        let (kind, name) = match rest.split_once(' ') {
            Some((kind, name)) => (kind, name),
            None => (rest, ""),
        };
        let name = if name.is_empty() {
            None
        } else {
            self.sub_document(name)?
        };

        Ok(Some(HoverEvent::ShowEntity(EntityHover {
            kind: namespaced(kind),
            id: id.to_string(),
            name,
        })))
    }

    /// `id[*count] [tag]`.
    fn item_hover(&self, value: &str) -> Result<HoverEvent, MarkupError> {
        let (head, tag) = match value.split_once(' ') {
            Some((head, tag)) => (head, Some(tag).filter(|tag| !tag.is_empty())),
            None => (value, None),
        };

        let mut id = head;
        let mut count = 1;
        let star = head.find('*');
        if let Some(star) = star.filter(|&star| star > 0 && star + 1 < head.len()) {
            match head[star + 1..].parse::<u32>() {
                Ok(parsed) => {
                    id = &head[..star];
                    count = parsed;
                }
                Err(_) => {
                    self.degrade(MarkupError::InvalidItemCount(head.to_string()))?;
                    debug!("keeping `{}` as the item id", head);
                }
            }
        }

        Ok(HoverEvent::ShowItem(ItemHover {
            id: namespaced(id),
            count,
            tag: tag.map(str::to_string),
        }))
    }

    /// Hover synthesized for a click without one: the action label in blue,
    /// then the value in white.
    fn click_hover(&self, click: &ClickEvent) -> Result<Option<HoverEvent>, MarkupError> {
        let Some(scanner) = self.nested()? else {
            return Ok(None);
        };
        let mut runs = vec![StyledRun::new(
            click.action.label(),
            Style::colored(NamedColor::Blue),
        )];
        let value = format!(" {}", click.value);
        let white = Ambient::colored(NamedColor::White);
        runs.extend(scanner.without_urls().scan(&value, white)?);
        Ok(Some(HoverEvent::ShowText(ParsedMarkup::new(runs))))
    }

    /// Parse a nested document, such as hover text, one level deeper.
    fn sub_document(&self, text: &str) -> Result<Option<ParsedMarkup>, MarkupError> {
        match self.nested()? {
            Some(scanner) => scanner.without_urls().document(text).map(Some),
            None => Ok(None),
        }
    }
}

/// Definition-list semantics for a style token: colors and decorations
/// accumulate, `reset` clears both.
fn apply_code(style: &mut Style, code: StyleCode) {
    match code {
        StyleCode::Color(color) => style.color = Some(color),
        StyleCode::Decoration(decoration) => style.decorations |= decoration,
        StyleCode::Reset => {
            style.color = None;
            style.decorations = Decorations::empty();
        }
    }
}

fn is_action_key(key: &str) -> bool {
    ClickAction::from_key(key).is_some() || HoverAction::from_key(key).is_some()
}

/// Join `start` with following tokens until the next `key=value` token.
fn bare_value(start: &str, tokens: &mut Tokens<'_>) -> String {
    let mut value = start.to_string();
    while let Some((_, next)) = tokens.next_if(|(_, token)| !token.is_key_value()) {
        value.push(' ');
        value.push_str(next.raw);
    }
    value
}

/// Join tokens until the `}` that balances the opening brace, which is
/// dropped. An unbalanced group takes every remaining token. Text after the
/// closing brace in the same token is kept and continues as a bare value.
fn braced_value(inner: &str, tokens: &mut Tokens<'_>) -> String {
    let mut value = String::new();
    let mut depth = 1usize;
    let mut segment = inner;
    loop {
        if let Some(close) = closing_brace(segment, &mut depth) {
            value.push_str(&segment[..close]);
            let rest = &segment[close + 1..];
            if rest.is_empty() {
                return value;
            }
            value.push_str(rest);
            return bare_value(&value, tokens);
        }
        value.push_str(segment);
        match tokens.next() {
            Some((_, Token { raw, .. })) => {
                value.push(' ');
                segment = raw;
            }
            None => return value,
        }
    }
}

/// Track brace depth through `segment`; return the offset of the brace that
/// brings it to zero.
fn closing_brace(segment: &str, depth: &mut usize) -> Option<usize> {
    let mut escaped = false;
    for (offset, c) in segment.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => *depth += 1,
            '}' => {
                *depth -= 1;
                if *depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }
    None
}
