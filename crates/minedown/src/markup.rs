//! ParsedMarkup result type and the host builder interface.

use crate::color::Color;
use crate::error::MarkupError;
use crate::event::{ClickEvent, HoverEvent};
use crate::options::ParserOptions;
use crate::run::StyledRun;
use crate::style::Decorations;

/// The result of parsing MineDown markup: an ordered sequence of runs.
///
/// A parsed document always holds at least one (possibly empty) run so a
/// host builder has a root to attach to.
///
/// # Examples
///
/// ```
/// use minedown::ParsedMarkup;
///
/// let parsed = ParsedMarkup::parse("**Hello** World").unwrap();
/// assert_eq!(parsed.text(), "Hello World");
/// assert_eq!(parsed.runs().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedMarkup {
    runs: Vec<StyledRun>,
}

impl ParsedMarkup {
    /// Wrap runs, seeding a single empty run if there are none.
    pub fn new(runs: Vec<StyledRun>) -> Self {
        if runs.is_empty() {
            return Self::default();
        }
        Self { runs }
    }

    /// A single unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            runs: vec![StyledRun::plain(text)],
        }
    }

    /// Parse markup with the default options.
    pub fn parse(input: &str) -> Result<Self, MarkupError> {
        crate::parser::parse(input, &ParserOptions::default())
    }

    /// Parse markup with explicit options.
    pub fn parse_with(input: &str, options: &ParserOptions) -> Result<Self, MarkupError> {
        crate::parser::parse(input, options)
    }

    /// The concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    pub fn into_runs(self) -> Vec<StyledRun> {
        self.runs
    }

    /// Returns true if every run is unstyled and non-interactive.
    pub fn is_plain(&self) -> bool {
        self.runs.iter().all(StyledRun::is_plain)
    }

    /// Number of runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Returns true if the document carries no text.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(StyledRun::is_empty)
    }

    /// Feed every run into a host builder, in order.
    pub fn build_into<B: RunBuilder>(&self, builder: &mut B) {
        for run in &self.runs {
            builder.append(&run.text);
            builder.color(run.style.color);
            for decoration in run.style.decorations.iter() {
                builder.decorate(decoration);
            }
            if let Some(font) = &run.style.font {
                builder.font(font);
            }
            if let Some(click) = &run.click {
                builder.click(click);
            }
            if let Some(hover) = &run.hover {
                builder.hover(hover);
            }
        }
    }

    /// Replace `placeholder` in every run's text.
    pub(crate) fn replace_text(&mut self, placeholder: &str, value: &str) {
        for run in &mut self.runs {
            if run.text.contains(placeholder) {
                run.text = run.text.replace(placeholder, value);
            }
        }
    }
}

impl Default for ParsedMarkup {
    fn default() -> Self {
        Self {
            runs: vec![StyledRun::default()],
        }
    }
}

/// Append-only builder of styled runs offered by a host rich-text model.
///
/// Every setter applies to the run most recently started by [`append`].
///
/// [`append`]: RunBuilder::append
pub trait RunBuilder {
    /// Start a new run with the given text.
    fn append(&mut self, text: &str);

    /// Set the current run's color.
    fn color(&mut self, color: Option<Color>);

    /// Add a single decoration to the current run. May be called repeatedly.
    fn decorate(&mut self, decoration: Decorations);

    /// Set the current run's font key.
    fn font(&mut self, font: &str);

    /// Set the current run's click action.
    fn click(&mut self, click: &ClickEvent);

    /// Set the current run's hover payload.
    fn hover(&mut self, hover: &HoverEvent);
}

/// A [`RunBuilder`] that materializes runs in memory.
#[derive(Clone, Debug, Default)]
pub struct RunCollector {
    runs: Vec<StyledRun>,
}

impl RunCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn current(&mut self) -> &mut StyledRun {
        if self.runs.is_empty() {
            self.runs.push(StyledRun::default());
        }
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// Finish building and return the document.
    pub fn finish(self) -> ParsedMarkup {
        ParsedMarkup::new(self.runs)
    }
}

impl RunBuilder for RunCollector {
    fn append(&mut self, text: &str) {
        self.runs.push(StyledRun::plain(text));
    }

    fn color(&mut self, color: Option<Color>) {
        self.current().style.color = color;
    }

    fn decorate(&mut self, decoration: Decorations) {
        self.current().style.decorations |= decoration;
    }

    fn font(&mut self, font: &str) {
        self.current().style.font = Some(font.to_string());
    }

    fn click(&mut self, click: &ClickEvent) {
        self.current().click = Some(click.clone());
    }

    fn hover(&mut self, hover: &HoverEvent) {
        self.current().hover = Some(hover.clone());
    }
}
