pub mod error;

pub use error::Result;
pub use minedown::{
    ClickAction, ClickEvent, Color, Decorations, EntityHover, Features, HoverAction, HoverEvent,
    ItemHover, NamedColor, ParsedMarkup, ParserOptions, RunBuilder, RunCollector, Style,
    StyledRun,
};

/// A chat message together with the options it is parsed with.
///
/// Nothing is cached: every call to [`parse`](Self::parse) scans the message
/// again.
///
/// # Example
///
/// ```
/// use minedown_rs::{MineDown, NamedColor};
///
/// let parsed = MineDown::new("&6Gold **and bold**").parse().unwrap();
/// assert_eq!(parsed.text(), "Gold and bold");
/// assert_eq!(parsed.runs()[1].color(), Some(NamedColor::Gold.into()));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MineDown {
    message: String,
    options: ParserOptions,
}

impl MineDown {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            options: ParserOptions::default(),
        }
    }

    /// Replace the parser options.
    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// Adjust the current options in place.
    pub fn configure(mut self, f: impl FnOnce(ParserOptions) -> ParserOptions) -> Self {
        self.options = f(self.options);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse the message into styled runs.
    pub fn parse(&self) -> Result<ParsedMarkup> {
        log::trace!("parsing {} byte message", self.message.len());
        minedown::parse(&self.message, &self.options)
    }

    /// Parse the message and hand the runs to a host builder.
    pub fn build_into<B: RunBuilder>(&self, builder: &mut B) -> Result<()> {
        self.parse()?.build_into(builder);
        Ok(())
    }

    /// Escape `text` so that it parses back to itself under the default
    /// options.
    pub fn escape(text: &str) -> String {
        minedown::escape(text, &ParserOptions::default())
    }
}
