use ratatui::style::{Color, Style};
use ratatui::text::Span;
use std::sync::OnceLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;

use super::theme::syntect_theme_name;

struct HighlightAssets {
    syntax_set: SyntaxSet,
    theme: Theme,
}

// NOTE: highlight assets are initialized once per process. A theme change
// applied at runtime updates UI colors immediately, but code highlighting
// stays on the initially loaded syntect theme until restart.
static HIGHLIGHT_ASSETS: OnceLock<Option<HighlightAssets>> = OnceLock::new();

fn highlight_assets() -> Option<&'static HighlightAssets> {
    HIGHLIGHT_ASSETS
        .get_or_init(|| {
            let syntax_set = SyntaxSet::load_defaults_newlines();
            let theme_set = ThemeSet::load_defaults();
            let theme = theme_set
                .themes
                .get(syntect_theme_name())
                .cloned()
                .or_else(|| theme_set.themes.get("Solarized (dark)").cloned())
                .or_else(|| theme_set.themes.values().next().cloned())?;
            Some(HighlightAssets { syntax_set, theme })
        })
        .as_ref()
}

/// Highlights one line of the editor's JSON buffer. Falls back to an
/// unstyled span when the highlight assets are unavailable.
pub(crate) fn highlight_json_line(line: &str) -> Vec<Span<'static>> {
    let plain = || vec![Span::raw(line.to_string())];
    let Some(assets) = highlight_assets() else {
        return plain();
    };
    let Some(syntax) = assets.syntax_set.find_syntax_by_token("json") else {
        return plain();
    };
    let mut highlighter = HighlightLines::new(syntax, &assets.theme);
    match highlighter.highlight_line(line, &assets.syntax_set) {
        Ok(regions) => regions
            .into_iter()
            .map(|(style, text)| {
                let fg = style.foreground;
                Span::styled(
                    text.to_string(),
                    Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b)),
                )
            })
            .collect(),
        Err(_) => plain(),
    }
}

#[cfg(test)]
mod tests {
    use super::highlight_json_line;

    #[test]
    fn highlighted_line_round_trips_its_text() {
        let line = r#"  "id": "Serie 1","#;
        let spans = highlight_json_line(line);
        let joined: String = spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(joined, line);
    }

    #[test]
    fn empty_line_stays_empty() {
        let spans = highlight_json_line("");
        let joined: String = spans.iter().map(|span| span.content.as_ref()).collect();
        assert!(joined.is_empty());
    }
}
