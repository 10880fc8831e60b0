//! Styled run type: the unit of parsed output.

use crate::color::Color;
use crate::event::{ClickEvent, HoverEvent};
use crate::style::{Decorations, Style};

/// A contiguous span of text sharing one style, click action and hover.
///
/// Runs are produced by flushing the scanner's pending text buffer and are
/// never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledRun {
    /// The literal text of this run, markup removed.
    pub text: String,
    /// Color, decorations and font.
    pub style: Style,
    /// Action performed when the run is clicked.
    pub click: Option<ClickEvent>,
    /// Payload shown when the run is hovered.
    pub hover: Option<HoverEvent>,
}

impl StyledRun {
    /// Create a new run with a style and no interactivity.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            click: None,
            hover: None,
        }
    }

    /// Create an unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }

    pub fn with_click(mut self, click: ClickEvent) -> Self {
        self.click = Some(click);
        self
    }

    pub fn with_hover(mut self, hover: HoverEvent) -> Self {
        self.hover = Some(hover);
        self
    }

    /// Returns true if this run has no style, click or hover.
    pub fn is_plain(&self) -> bool {
        self.style.is_empty() && self.click.is_none() && self.hover.is_none()
    }

    /// Returns true if the run carries no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn color(&self) -> Option<Color> {
        self.style.color
    }

    pub fn decorations(&self) -> Decorations {
        self.style.decorations
    }

    /// Check whether all of the given decorations are set.
    pub fn has(&self, decorations: Decorations) -> bool {
        self.style.decorations.contains(decorations)
    }

    pub fn font(&self) -> Option<&str> {
        self.style.font.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;
    use crate::event::ClickAction;

    #[test]
    fn run_plain() {
        let run = StyledRun::plain("hello");
        assert_eq!(run.text, "hello");
        assert!(run.is_plain());
        assert!(!run.is_empty());
    }

    #[test]
    fn run_with_click() {
        let run =
            StyledRun::plain("x").with_click(ClickEvent::new(ClickAction::RunCommand, "/help"));
        assert!(!run.is_plain());
        assert_eq!(run.click.unwrap().value, "/help");
    }

    #[test]
    fn run_accessors() {
        let mut style = Style::colored(NamedColor::Aqua);
        style.decorations = Decorations::BOLD | Decorations::UNDERLINED;
        let run = StyledRun::new("", style);
        assert!(run.is_empty());
        assert_eq!(run.color(), Some(Color::Named(NamedColor::Aqua)));
        assert!(run.has(Decorations::BOLD));
        assert!(!run.has(Decorations::BOLD | Decorations::ITALIC));
        assert_eq!(run.font(), None);
    }
}
