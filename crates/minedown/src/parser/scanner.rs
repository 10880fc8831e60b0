//! The markup scanner.
//!
//! A single left-to-right pass over the input. At each byte offset the
//! recognizers are tried in a fixed precedence (escape, legacy code,
//! interactive construct, formatting span, bare URL) and the first match
//! wins; anything unmatched is literal text. Formatting spans and the display
//! text of interactive constructs are scanned recursively, each inheriting
//! the ambient state of its caller.

use log::trace;

use crate::color::{Color, NamedColor};
use crate::error::MarkupError;
use crate::event::{ClickEvent, HoverEvent};
use crate::markup::ParsedMarkup;
use crate::options::{Features, ParserOptions};
use crate::run::StyledRun;
use crate::style::{Decorations, Style, StyleCode};
use crate::util::{index_of_not_escaped, is_double};

use super::url::{URL_PLACEHOLDER, is_url, with_url_scheme};

/// Style and interactivity inherited by everything a scan emits.
#[derive(Clone, Debug, Default)]
pub(crate) struct Ambient {
    pub style: Style,
    pub click: Option<ClickEvent>,
    pub hover: Option<HoverEvent>,
}

impl Ambient {
    pub fn colored(color: NamedColor) -> Self {
        Self {
            style: Style::colored(color),
            ..Self::default()
        }
    }
}

/// Mutable state of one scan.
struct ScanState {
    /// Pending literal text.
    value: String,
    ambient: Ambient,
    runs: Vec<StyledRun>,
}

impl ScanState {
    fn new(ambient: Ambient) -> Self {
        Self {
            value: String::new(),
            ambient,
            runs: Vec::new(),
        }
    }

    /// Emit the pending text as a run with the current ambient state.
    fn flush(&mut self) {
        if self.value.is_empty() {
            return;
        }
        self.runs.push(StyledRun {
            text: std::mem::take(&mut self.value),
            style: self.ambient.style.clone(),
            click: self.ambient.click.clone(),
            hover: self.ambient.hover.clone(),
        });
    }
}

/// A recognized legacy code and the offset just past it.
struct LegacyMatch {
    code: Option<StyleCode>,
    end: usize,
}

/// Byte ranges of a recognized `[text](definitions)` construct.
struct EventSpan {
    text: std::ops::Range<usize>,
    definitions: std::ops::Range<usize>,
    end: usize,
}

/// Scans markup into runs. Cheap to copy; recursion hands out copies with a
/// deeper `depth`.
#[derive(Clone, Copy)]
pub(crate) struct Scanner<'o> {
    pub(super) options: &'o ParserOptions,
    url_detection: bool,
    depth: usize,
}

impl<'o> Scanner<'o> {
    pub fn new(options: &'o ParserOptions) -> Self {
        Self {
            options,
            url_detection: options.url_detection(),
            depth: 0,
        }
    }

    /// The same scanner with bare URL detection turned off.
    pub(super) fn without_urls(self) -> Self {
        Self {
            url_detection: false,
            ..self
        }
    }

    /// A scanner one nesting level deeper, or `None` when the limit is
    /// reached and the parser is lenient.
    pub(super) fn nested(&self) -> Result<Option<Self>, MarkupError> {
        let max_depth = self.options.max_depth();
        if self.depth >= max_depth {
            self.degrade(MarkupError::NestingTooDeep(max_depth))?;
            return Ok(None);
        }
        Ok(Some(Self {
            depth: self.depth + 1,
            ..*self
        }))
    }

    /// Fail when strict; log and carry on when lenient.
    pub(super) fn degrade(&self, error: MarkupError) -> Result<(), MarkupError> {
        if self.options.lenient() {
            log::debug!("ignoring malformed markup: {}", error);
            Ok(())
        } else {
            Err(error)
        }
    }

    /// Scan a complete document. Never returns an empty run list.
    pub fn document(&self, input: &str) -> Result<ParsedMarkup, MarkupError> {
        Ok(ParsedMarkup::new(self.scan(input, Ambient::default())?))
    }

    /// Scan `input` with the given inherited state.
    pub fn scan(&self, input: &str, ambient: Ambient) -> Result<Vec<StyledRun>, MarkupError> {
        let mut state = ScanState::new(ambient);
        let mut pos = 0;
        while pos < input.len() {
            pos = self.step(input, pos, &mut state)?;
        }
        state.flush();
        Ok(state.runs)
    }

    /// Consume whatever starts at `pos` and return the offset to resume at.
    fn step(&self, input: &str, pos: usize, state: &mut ScanState) -> Result<usize, MarkupError> {
        let Some(c) = input[pos..].chars().next() else {
            return Ok(input.len());
        };
        let next = pos + c.len_utf8();

        if c == '\\' {
            return Ok(match input[next..].chars().next() {
                Some(escaped) => {
                    state.value.push(escaped);
                    next + escaped.len_utf8()
                }
                None => {
                    state.value.push('\\');
                    next
                }
            });
        }

        if self.options.recognizes(Features::LEGACY_COLORS) && self.options.is_sentinel(c) {
            if let Some(legacy) = legacy_code(input, next, c) {
                self.apply_legacy(&input[pos..legacy.end], legacy.code, state);
                return Ok(legacy.end);
            }
        }

        if c == '[' && self.options.recognizes(Features::ADVANCED_FORMATTING) {
            if let Some(span) = find_event(input, pos) {
                if let Some(scanner) = self.nested()? {
                    let text = &input[span.text];
                    let definitions = &input[span.definitions];
                    trace!("interactive construct `{}` with `{}`", text, definitions);
                    state.flush();
                    let runs = if self.options.is_filtered(Features::ADVANCED_FORMATTING) {
                        scanner.scan(text, state.ambient.clone())?
                    } else {
                        scanner.event(text, definitions)?
                    };
                    state.runs.extend(runs);
                    return Ok(span.end);
                }
            }
        }

        if self.options.recognizes(Features::SIMPLE_FORMATTING) {
            if let Some(decoration) = Decorations::from_marker(c) {
                if let Some(end) = self.formatting(input, pos, c, decoration, state)? {
                    return Ok(end);
                }
            }
        }

        if self.url_detection {
            let end = input[pos..]
                .find([' ', '\\'])
                .map_or(input.len(), |offset| pos + offset);
            let candidate = &input[pos..end];
            if is_url(candidate) {
                trace!("detected url `{}`", candidate);
                state.flush();
                let run = self.url_run(candidate, &state.ambient.style)?;
                state.runs.push(run);
                return Ok(end);
            }
        }

        state.value.push(c);
        Ok(next)
    }

    fn apply_legacy(&self, raw: &str, code: Option<StyleCode>, state: &mut ScanState) {
        let Some(code) = code else {
            state.value.push_str(raw);
            return;
        };
        if self.options.is_filtered(Features::LEGACY_COLORS) {
            trace!("stripping filtered legacy code `{}`", raw);
            return;
        }
        state.flush();
        state.ambient.style.apply(code);
    }

    /// A doubled-marker span such as `**bold**`. Returns the offset past the
    /// closing marker, or `None` if there is no span here.
    fn formatting(
        &self,
        input: &str,
        pos: usize,
        marker: char,
        decoration: Decorations,
        state: &mut ScanState,
    ) -> Result<Option<usize>, MarkupError> {
        if !is_double(input, pos) {
            return Ok(None);
        }
        let width = marker.len_utf8() * 2;
        let open = &input[pos..pos + width];
        let Some(close) = index_of_not_escaped(input, open, pos + width) else {
            return Ok(None);
        };
        let Some(scanner) = self.nested()? else {
            return Ok(None);
        };

        state.flush();
        let mut ambient = state.ambient.clone();
        if !self.options.is_filtered(Features::SIMPLE_FORMATTING) {
            ambient.style.decorations |= decoration;
        }
        let runs = scanner.scan(&input[pos + width..close], ambient)?;
        state.runs.extend(runs);
        Ok(Some(close + width))
    }

    /// URLs are only detected where no event is ambient, so the link always
    /// carries its own click and hover.
    fn url_run(&self, url: &str, style: &Style) -> Result<StyledRun, MarkupError> {
        Ok(StyledRun {
            text: url.to_string(),
            style: style.clone(),
            click: Some(ClickEvent::open_url(with_url_scheme(url))),
            hover: self.url_hover(url)?,
        })
    }

    fn url_hover(&self, url: &str) -> Result<Option<HoverEvent>, MarkupError> {
        let template = self.options.url_hover_text();
        if template.is_empty() {
            return Ok(None);
        }
        let Some(scanner) = self.nested()? else {
            return Ok(None);
        };
        let mut document = scanner.without_urls().document(template)?;
        document.replace_text(URL_PLACEHOLDER, url);
        Ok(Some(HoverEvent::ShowText(document)))
    }
}

/// Recognize the legacy code whose code character starts at `from`.
fn legacy_code(input: &str, from: usize, sentinel: char) -> Option<LegacyMatch> {
    let code = input[from..].chars().next()?;
    let code_end = from + code.len_utf8();

    let extended = if code.eq_ignore_ascii_case(&'x') {
        repeated_hex(input, code_end, sentinel)
    } else {
        inline_color(input, from, sentinel)
    };
    if let Some((color, end)) = extended {
        return Some(LegacyMatch {
            code: Some(StyleCode::Color(color)),
            end,
        });
    }

    Some(LegacyMatch {
        code: StyleCode::from_legacy(code),
        end: code_end,
    })
}

/// `&x&R&R&G&G&B&B`: six sentinel-prefixed hex digits after the `x`.
fn repeated_hex(input: &str, from: usize, sentinel: char) -> Option<(Color, usize)> {
    let mut digits = String::with_capacity(6);
    let mut chars = input[from..].char_indices();
    let mut end = from;
    for _ in 0..6 {
        let (_, s) = chars.next()?;
        if s != sentinel {
            return None;
        }
        let (offset, digit) = chars.next()?;
        if !digit.is_ascii_hexdigit() {
            return None;
        }
        digits.push(digit);
        end = from + offset + digit.len_utf8();
    }
    Some((Color::from_hex_digits(&digits)?, end))
}

/// `&#ff00ff&` or `&gold&`: a color name closed by the sentinel.
fn inline_color(input: &str, from: usize, sentinel: char) -> Option<(Color, usize)> {
    let rest = &input[from..];
    let len = rest
        .find(|c: char| c == sentinel || !(c.is_ascii_alphanumeric() || c == '_' || c == '#'))
        .unwrap_or(rest.len());
    let name = &rest[..len];
    if name.len() < 2 || !rest[len..].starts_with(sentinel) {
        return None;
    }
    let color = Color::parse(name).ok()?;
    Some((color, from + len + sentinel.len_utf8()))
}

/// Find the `[text](definitions)` construct starting at the `[` at `start`.
///
/// The text runs to the unescaped `]` that balances the opening bracket. If
/// that bracket is not immediately followed by `(`, there is no construct
/// here, even if a later `](` exists. The definitions run to the first
/// unescaped `)` at parenthesis depth zero.
fn find_event(input: &str, start: usize) -> Option<EventSpan> {
    let bytes = input.as_bytes();
    let text_start = start + 1;

    let mut depth = 1usize;
    let mut i = text_start;
    let close = loop {
        match *bytes.get(i)? {
            b'\\' => i += 1,
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    break i;
                }
            }
            _ => {}
        }
        i += 1;
    };

    if bytes.get(close + 1) != Some(&b'(') {
        trace!("`[` at {} is not followed by definitions", start);
        return None;
    }

    let definitions_start = close + 2;
    let mut parens = 0usize;
    let mut i = definitions_start;
    let end = loop {
        match *bytes.get(i)? {
            b'\\' => i += 1,
            b'(' => parens += 1,
            b')' if parens == 0 => break i,
            b')' => parens -= 1,
            _ => {}
        }
        i += 1;
    };

    Some(EventSpan {
        text: text_start..close,
        definitions: definitions_start..end,
        end: end + 1,
    })
}
