use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::state::EditorState;
use crate::app::view::highlight::highlight_json_line;
use crate::app::view::theme::ui_colors;

use super::super::constants::APPLY_BUTTON_LABEL;
use super::super::text::pad_to_width;

/// JSON editor content: highlighted buffer with a cursor overlay and the
/// "Apply changes" action row. Returns the button's hit region.
pub(in crate::app::view::ui) fn render_editor_panel(
    f: &mut Frame,
    area: Rect,
    editor: &mut EditorState,
    focused: bool,
) -> Option<Rect> {
    if area.width == 0 || area.height < 2 {
        return None;
    }
    let text_height = (area.height - 1) as usize;
    let lines = editor.lines();
    let (cursor_line, cursor_col) = editor.cursor_line_col();

    // Keep the cursor inside the viewport.
    if cursor_line < editor.scroll {
        editor.scroll = cursor_line;
    } else if cursor_line >= editor.scroll + text_height {
        editor.scroll = cursor_line + 1 - text_height;
    }
    let max_scroll = lines.len().saturating_sub(text_height);
    if editor.scroll > max_scroll {
        editor.scroll = max_scroll;
    }

    let mut rendered: Vec<Line> = Vec::new();
    for (index, line) in lines
        .iter()
        .enumerate()
        .skip(editor.scroll)
        .take(text_height)
    {
        let mut spans = highlight_json_line(line);
        if focused && index == cursor_line {
            spans = overlay_cursor(spans, cursor_col);
        }
        rendered.push(Line::from(spans));
    }
    let text_area = Rect {
        height: text_height as u16,
        ..area
    };
    f.render_widget(Paragraph::new(Text::from(rendered)), text_area);

    let theme = ui_colors();
    let button_width = APPLY_BUTTON_LABEL.chars().count() as u16;
    if area.width <= button_width {
        return None;
    }
    let position = format!("Ln {}, Col {}", cursor_line + 1, cursor_col + 1);
    let spacer_width = (area.width - button_width) as usize;
    let action_row = Line::from(vec![
        Span::styled(
            pad_to_width(&position, spacer_width),
            Style::default()
                .fg(theme.panel_hint_fg)
                .add_modifier(Modifier::DIM),
        ),
        Span::styled(
            APPLY_BUTTON_LABEL,
            Style::default()
                .fg(theme.apply_button_fg)
                .bg(theme.apply_button_bg),
        ),
    ]);
    let action_area = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };
    f.render_widget(Paragraph::new(action_row), action_area);

    Some(Rect {
        x: area.x + area.width - button_width,
        y: action_area.y,
        width: button_width,
        height: 1,
    })
}

/// Reverses the video of the character at `col`, splitting whatever
/// highlight span it falls in. Past the end of the line the cursor shows
/// as a reversed space.
fn overlay_cursor(spans: Vec<Span<'static>>, col: usize) -> Vec<Span<'static>> {
    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);
    let mut out = Vec::new();
    let mut offset = 0_usize;
    let mut placed = false;
    for span in spans {
        let span_len = span.content.chars().count();
        if placed || col >= offset + span_len {
            offset += span_len;
            out.push(span);
            continue;
        }
        let local = col - offset;
        let content = span.content.as_ref();
        let split_at: usize = content
            .char_indices()
            .nth(local)
            .map(|(index, _)| index)
            .unwrap_or(content.len());
        let cursor_char_end = content[split_at..]
            .chars()
            .next()
            .map(|ch| split_at + ch.len_utf8())
            .unwrap_or(split_at);
        if split_at > 0 {
            out.push(Span::styled(content[..split_at].to_string(), span.style));
        }
        out.push(Span::styled(
            content[split_at..cursor_char_end].to_string(),
            span.style.patch(cursor_style),
        ));
        if cursor_char_end < content.len() {
            out.push(Span::styled(
                content[cursor_char_end..].to_string(),
                span.style,
            ));
        }
        offset += span_len;
        placed = true;
    }
    if !placed {
        out.push(Span::styled(" ", cursor_style));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::overlay_cursor;
    use ratatui::style::{Modifier, Style};
    use ratatui::text::Span;

    fn texts<'a>(spans: &'a [Span<'a>]) -> Vec<&'a str> {
        spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn cursor_splits_the_span_it_lands_in() {
        let spans = vec![Span::raw("abc"), Span::raw("def")];
        let out = overlay_cursor(spans, 4);
        assert_eq!(texts(&out), vec!["abc", "d", "e", "f"]);
        assert!(out[2].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn cursor_at_line_end_becomes_a_reversed_space() {
        let out = overlay_cursor(vec![Span::raw("ab")], 2);
        assert_eq!(texts(&out), vec!["ab", " "]);
        assert!(out[1].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn cursor_keeps_the_underlying_highlight_style() {
        let styled = Span::styled("xy", Style::default().add_modifier(Modifier::BOLD));
        let out = overlay_cursor(vec![styled], 0);
        assert!(out[0].style.add_modifier.contains(Modifier::BOLD));
        assert!(out[0].style.add_modifier.contains(Modifier::REVERSED));
    }
}
