//! Tests for styles, escaping and the host builder interface.

use minedown::{
    ClickEvent, Color, Decorations, Features, HoverEvent, NamedColor, ParsedMarkup, ParserOptions,
    RunBuilder, RunCollector, Style, StyleCode, escape,
};

// ============================================================================
// Style Codes
// ============================================================================

#[test]
fn legacy_code_table() {
    assert_eq!(
        StyleCode::from_legacy('6'),
        Some(StyleCode::Color(Color::Named(NamedColor::Gold)))
    );
    assert_eq!(
        StyleCode::from_legacy('k'),
        Some(StyleCode::Decoration(Decorations::OBFUSCATED))
    );
    assert_eq!(StyleCode::from_legacy('R'), Some(StyleCode::Reset));
    assert_eq!(StyleCode::from_legacy('g'), None);
}

#[test]
fn style_names() {
    assert_eq!(
        StyleCode::parse("magic"),
        Ok(StyleCode::Decoration(Decorations::OBFUSCATED))
    );
    assert_eq!(StyleCode::parse("RESET"), Ok(StyleCode::Reset));
    assert!(StyleCode::parse("strikethrough").unwrap().is_decoration());
    assert!(!StyleCode::parse("#123").unwrap().is_decoration());
    assert!(StyleCode::parse("sparkly").is_err());
}

#[test]
fn apply_sequence() {
    let mut style = Style::new();
    style.font = Some("alt".into());
    style.apply(StyleCode::Decoration(Decorations::BOLD));
    style.apply(StyleCode::Color(Color::Named(NamedColor::Red)));
    assert_eq!(style.decorations, Decorations::empty());
    style.apply(StyleCode::Decoration(Decorations::ITALIC));
    assert_eq!(style.decorations, Decorations::ITALIC);
    style.apply(StyleCode::Reset);
    assert_eq!(style.color, None);
    assert_eq!(style.font.as_deref(), Some("alt"));
    assert!(!style.is_empty());
}

// ============================================================================
// Escaping
// ============================================================================

#[test]
fn escape_round_trips() {
    let options = ParserOptions::default();
    let samples = [
        "plain text",
        "&6Gold&rReset",
        "**Bold ##Italic## End**",
        "[Link](https://example.com)",
        "[[inner] text](https://x.com)",
        r"back\slash and \& escaped",
        "trailing &",
        "visit example.com/**x** now",
        "§cred ~~strike~~ __under__ ??magic??",
        "&x&f&f&0&0&f&fhex",
    ];
    for sample in samples {
        let parsed = ParsedMarkup::parse(&escape(sample, &options)).unwrap();
        assert_eq!(parsed.text(), sample, "round trip of {:?}", sample);
    }
}

#[test]
fn escape_with_custom_color_char() {
    let options = ParserOptions::default().with_color_char('$');
    assert_eq!(escape("$6 &6 §6", &options), r"\$6 &6 \§6");
}

#[test]
fn escape_is_not_idempotent() {
    let options = ParserOptions::default();
    let once = escape("&6", &options);
    assert_ne!(escape(&once, &options), once);
}

#[test]
fn escape_skips_unrecognized_features() {
    let options = ParserOptions::default().disable(Features::SIMPLE_FORMATTING);
    assert_eq!(escape("**x** [y]", &options), r"**x** \[y]");

    let options = options.filter(Features::SIMPLE_FORMATTING);
    assert_eq!(escape("**x**", &options), r"\**x\**");
}

// ============================================================================
// Host Builder
// ============================================================================

/// Renders runs the way a host with its own text model might.
#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

impl RunBuilder for Recorder {
    fn append(&mut self, text: &str) {
        self.calls.push(format!("append {:?}", text));
    }

    fn color(&mut self, color: Option<Color>) {
        if let Some(color) = color {
            self.calls.push(format!("color {}", color));
        }
    }

    fn decorate(&mut self, decoration: Decorations) {
        self.calls
            .push(format!("decorate {}", decoration.name().unwrap_or("?")));
    }

    fn font(&mut self, font: &str) {
        self.calls.push(format!("font {}", font));
    }

    fn click(&mut self, click: &ClickEvent) {
        self.calls
            .push(format!("click {} {}", click.action.key(), click.value));
    }

    fn hover(&mut self, hover: &HoverEvent) {
        let text = hover.as_text().map(|t| t.text()).unwrap_or_default();
        self.calls.push(format!("hover {:?}", text));
    }
}

#[test]
fn builder_receives_runs_in_order() {
    let parsed = ParsedMarkup::parse("&6a **b** [c](show_text=hi)").unwrap();
    let mut recorder = Recorder::default();
    parsed.build_into(&mut recorder);
    insta::assert_snapshot!(recorder.calls.join("\n"), @r#"
    append "a "
    color gold
    append "b"
    color gold
    decorate bold
    append " "
    color gold
    append "c"
    hover "hi"
    "#);
}

#[test]
fn collector_reproduces_parse() {
    let parsed = ParsedMarkup::parse("&cRed [**Go**](font=alt run_command=/go) done").unwrap();
    let mut collector = RunCollector::new();
    parsed.build_into(&mut collector);
    assert_eq!(collector.finish(), parsed);
}
