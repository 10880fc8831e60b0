//! Parser configuration.
//!
//! [`ParserOptions`] is an immutable value: every builder method consumes
//! and returns it. The scanner only ever reads it, so one value can be shared
//! by every recursive sub-parse.

use bitflags::bitflags;

/// The historical sentinel that is always accepted for legacy codes.
pub const LEGACY_SENTINEL: char = '§';

bitflags! {
    /// Syntax families the scanner can recognize.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Features: u8 {
        /// Doubled-marker inline formatting (`**bold**`).
        const SIMPLE_FORMATTING   = 0b0000_0001;
        /// Interactive constructs (`[text](definitions)`).
        const ADVANCED_FORMATTING = 0b0000_0010;
        /// Legacy color codes (`&6`, `&#ff00ff&`).
        const LEGACY_COLORS       = 0b0000_0100;
    }
}

/// Configuration consumed by the scanner.
///
/// # Example
///
/// ```
/// use minedown::{Features, ParserOptions};
///
/// let options = ParserOptions::default()
///     .with_lenient(true)
///     .disable(Features::LEGACY_COLORS);
/// assert!(!options.recognizes(Features::LEGACY_COLORS));
/// assert!(options.recognizes(Features::SIMPLE_FORMATTING));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParserOptions {
    color_char: char,
    enabled: Features,
    filtered: Features,
    lenient: bool,
    url_detection: bool,
    auto_url_prefix: bool,
    url_hover_text: String,
    hover_text_width: usize,
    max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            color_char: '&',
            enabled: Features::all(),
            filtered: Features::empty(),
            lenient: false,
            url_detection: true,
            auto_url_prefix: true,
            url_hover_text: "Click to open url".to_string(),
            hover_text_width: 60,
            max_depth: 64,
        }
    }
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configurable legacy code character (default `&`).
    pub fn with_color_char(mut self, color_char: char) -> Self {
        self.color_char = color_char;
        self
    }

    /// Accept malformed definitions instead of failing.
    pub fn with_lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    /// Detect bare URLs in text and make them clickable.
    pub fn with_url_detection(mut self, url_detection: bool) -> Self {
        self.url_detection = url_detection;
        self
    }

    /// Prefix `http://` to `open_url` values without a scheme.
    pub fn with_auto_url_prefix(mut self, auto_url_prefix: bool) -> Self {
        self.auto_url_prefix = auto_url_prefix;
        self
    }

    /// Hover text for detected URLs. `%url%` is replaced by the URL. An empty
    /// template disables the hover.
    pub fn with_url_hover_text(mut self, text: impl Into<String>) -> Self {
        self.url_hover_text = text.into();
        self
    }

    /// Maximum hover text line width before wrapping.
    pub fn with_hover_text_width(mut self, width: usize) -> Self {
        self.hover_text_width = width;
        self
    }

    /// Maximum nesting depth of formatting spans, interactive constructs and
    /// hover documents.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn enable(mut self, features: Features) -> Self {
        self.enabled |= features;
        self
    }

    /// Disable a feature. Its characters are then left in the text as is;
    /// use [`filter`](Self::filter) to strip them instead.
    pub fn disable(mut self, features: Features) -> Self {
        self.enabled.remove(features);
        self
    }

    /// Recognize a feature's syntax but strip it without effect.
    pub fn filter(mut self, features: Features) -> Self {
        self.filtered |= features;
        self
    }

    /// Stop filtering a feature. Does not enable it.
    pub fn unfilter(mut self, features: Features) -> Self {
        self.filtered.remove(features);
        self
    }

    pub fn color_char(&self) -> char {
        self.color_char
    }

    pub fn is_enabled(&self, feature: Features) -> bool {
        self.enabled.contains(feature)
    }

    pub fn is_filtered(&self, feature: Features) -> bool {
        self.filtered.contains(feature)
    }

    /// Whether the scanner looks for this feature's syntax at all. A filtered
    /// feature is recognized regardless of its enabled flag.
    pub fn recognizes(&self, feature: Features) -> bool {
        self.is_enabled(feature) || self.is_filtered(feature)
    }

    pub fn lenient(&self) -> bool {
        self.lenient
    }

    pub fn url_detection(&self) -> bool {
        self.url_detection
    }

    pub fn auto_url_prefix(&self) -> bool {
        self.auto_url_prefix
    }

    pub fn url_hover_text(&self) -> &str {
        &self.url_hover_text
    }

    pub fn hover_text_width(&self) -> usize {
        self.hover_text_width
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// True for either the historical sentinel or the configured character.
    pub(crate) fn is_sentinel(&self, c: char) -> bool {
        c == LEGACY_SENTINEL || c == self.color_char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ParserOptions::default();
        assert_eq!(options.color_char(), '&');
        assert!(options.recognizes(Features::all()));
        assert!(!options.is_filtered(Features::LEGACY_COLORS));
        assert!(!options.lenient());
        assert!(options.url_detection());
        assert!(options.auto_url_prefix());
        assert_eq!(options.url_hover_text(), "Click to open url");
        assert_eq!(options.hover_text_width(), 60);
    }

    #[test]
    fn filtering_implies_recognition() {
        let options = ParserOptions::default()
            .disable(Features::SIMPLE_FORMATTING)
            .filter(Features::SIMPLE_FORMATTING);
        assert!(!options.is_enabled(Features::SIMPLE_FORMATTING));
        assert!(options.recognizes(Features::SIMPLE_FORMATTING));

        let options = options.unfilter(Features::SIMPLE_FORMATTING);
        assert!(!options.recognizes(Features::SIMPLE_FORMATTING));
    }

    #[test]
    fn sentinel_characters() {
        let options = ParserOptions::default().with_color_char('$');
        assert!(options.is_sentinel('$'));
        assert!(options.is_sentinel(LEGACY_SENTINEL));
        assert!(!options.is_sentinel('&'));
    }
}
