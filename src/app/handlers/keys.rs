use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::state::{PanelId, Tab};
use crate::app::AppState;

/// Routes a key press to the active view. Returns whether the UI needs a
/// redraw. Quit handling stays in the main loop.
pub(crate) fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::ALT) {
        match key.code {
            KeyCode::Char('1') => return app.select_tab(Tab::from_index(0)),
            KeyCode::Char('2') => return app.select_tab(Tab::from_index(1)),
            KeyCode::Char('3') => return app.select_tab(Tab::from_index(2)),
            KeyCode::Up => return app.select_tab(app.tab.previous()),
            KeyCode::Down => return app.select_tab(app.tab.next()),
            KeyCode::Char('h') => {
                app.toggle_status_line_mode();
                return true;
            }
            _ => {}
        }
    }

    if app.tab != Tab::Dashboard || app.startup_error.is_some() {
        return false;
    }

    match key.code {
        KeyCode::Tab => {
            app.dashboard.focus = app.dashboard.focus.next();
            return true;
        }
        KeyCode::BackTab => {
            app.dashboard.focus = app.dashboard.focus.previous();
            return true;
        }
        _ => {}
    }

    match app.dashboard.focus {
        PanelId::Editor => handle_editor_key(app, key),
        PanelId::Data => handle_grid_key(app, key),
        PanelId::Media => handle_media_key(app, key),
        PanelId::Chart => false,
    }
}

fn handle_editor_key(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('s') => {
                app.apply_changes();
                return true;
            }
            KeyCode::Char('w') => {
                if app.dashboard.editor.delete_word_back() {
                    app.stage_editor();
                }
                return true;
            }
            KeyCode::Char('k') => {
                if app.dashboard.editor.kill_to_end() {
                    app.stage_editor();
                }
                return true;
            }
            _ => return false,
        }
    }

    let editor = &mut app.dashboard.editor;
    match key.code {
        KeyCode::Char(ch) => {
            editor.insert_char(ch);
            app.stage_editor();
        }
        KeyCode::Enter => {
            editor.insert_char('\n');
            app.stage_editor();
        }
        KeyCode::Backspace => {
            if editor.backspace() {
                app.stage_editor();
            }
        }
        KeyCode::Delete => {
            if editor.delete() {
                app.stage_editor();
            }
        }
        KeyCode::Left => editor.move_left(),
        KeyCode::Right => editor.move_right(),
        KeyCode::Up => {
            editor.move_up();
        }
        KeyCode::Down => {
            editor.move_down();
        }
        KeyCode::Home => editor.move_home(),
        KeyCode::End => editor.move_end(),
        _ => return false,
    }
    true
}

fn handle_grid_key(app: &mut AppState, key: KeyEvent) -> bool {
    let grid = &mut app.dashboard.grid;
    if let Some(edit) = grid.edit.as_mut() {
        match key.code {
            KeyCode::Char(ch) => edit.value.push(ch),
            KeyCode::Backspace => {
                edit.value.pop();
            }
            KeyCode::Enter => {
                grid.apply_edit();
            }
            KeyCode::Esc => {
                grid.cancel_edit();
            }
            _ => return false,
        }
        return true;
    }

    match key.code {
        KeyCode::Up => grid.move_cursor(-1, 0),
        KeyCode::Down => grid.move_cursor(1, 0),
        KeyCode::Left => grid.move_cursor(0, -1),
        KeyCode::Right => grid.move_cursor(0, 1),
        KeyCode::Char(' ') => return grid.toggle_selected(),
        KeyCode::Char('[') => return grid.previous_page(),
        KeyCode::Char(']') => return grid.next_page(),
        KeyCode::Enter => return grid.begin_edit(),
        _ => return false,
    }
    true
}

fn handle_media_key(app: &mut AppState, key: KeyEvent) -> bool {
    let media = &mut app.dashboard.media;
    match key.code {
        KeyCode::Char(' ') => media.toggle_playing(),
        KeyCode::Left => media.seek_back(),
        KeyCode::Right => media.seek_forward(),
        KeyCode::Char('+') => media.volume_up(),
        KeyCode::Char('-') => media.volume_down(),
        _ => return false,
    }
    true
}

/// Bracketed paste into the editor. CR/LF pairs collapse to newlines and
/// tabs widen to two spaces before insertion.
pub(crate) fn handle_paste(app: &mut AppState, pasted: &str) -> bool {
    if app.tab != Tab::Dashboard
        || app.startup_error.is_some()
        || app.dashboard.focus != PanelId::Editor
    {
        return false;
    }
    let sanitized = sanitize_paste(pasted);
    if sanitized.is_empty() {
        return false;
    }
    app.dashboard.editor.insert_str(&sanitized);
    app.stage_editor();
    true
}

fn sanitize_paste(value: &str) -> String {
    value
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', "  ")
}

#[cfg(test)]
mod tests {
    use super::{handle_key, handle_paste, sanitize_paste};
    use crate::app::state::{PanelId, SessionStore};
    use crate::app::{AppState, Tab};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn sample_app() -> AppState {
        AppState::new(SessionStore::new("[]"), Tab::Dashboard)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn typing_into_the_editor_stages_every_change() {
        let mut app = sample_app();
        app.dashboard.editor.set_from("");
        assert!(handle_key(&mut app, key(KeyCode::Char('['))));
        assert!(handle_key(&mut app, key(KeyCode::Char(']'))));

        assert!(app.session.has_staged());
        assert_eq!(app.session.get(), "[]");
        assert_eq!(app.dashboard.editor.current(), "[]");
    }

    #[test]
    fn ctrl_s_applies_the_staged_text() {
        let mut app = sample_app();
        app.dashboard.editor.set_from("[1]");
        app.stage_editor();

        assert!(handle_key(
            &mut app,
            key_with(KeyCode::Char('s'), KeyModifiers::CONTROL)
        ));
        assert_eq!(app.session.get(), "[1]");
        assert_eq!(app.chart_feed.version(), 1);
    }

    #[test]
    fn alt_digits_switch_tabs() {
        let mut app = sample_app();
        assert!(handle_key(
            &mut app,
            key_with(KeyCode::Char('2'), KeyModifiers::ALT)
        ));
        assert_eq!(app.tab, Tab::Money);

        // Keys other than the global chords are ignored off-dashboard.
        assert!(!handle_key(&mut app, key(KeyCode::Char('x'))));
        assert_eq!(app.session.commit_count(), 0);
    }

    #[test]
    fn tab_cycles_panel_focus() {
        let mut app = sample_app();
        assert!(handle_key(&mut app, key(KeyCode::Tab)));
        assert_eq!(app.dashboard.focus, PanelId::Chart);
        assert!(handle_key(&mut app, key(KeyCode::BackTab)));
        assert_eq!(app.dashboard.focus, PanelId::Editor);
    }

    #[test]
    fn grid_keys_stay_local_to_the_grid() {
        let mut app = sample_app();
        app.dashboard.focus = PanelId::Data;

        assert!(handle_key(&mut app, key(KeyCode::Char(' '))));
        assert!(handle_key(&mut app, key(KeyCode::Right)));
        assert!(handle_key(&mut app, key(KeyCode::Enter)));
        assert!(handle_key(&mut app, key(KeyCode::Char('!'))));
        assert!(handle_key(&mut app, key(KeyCode::Enter)));

        assert_eq!(app.dashboard.grid.rows[0].first_name.as_deref(), Some("Jon!"));
        assert!(!app.session.has_staged());
        assert_eq!(app.session.commit_count(), 0);
    }

    #[test]
    fn paste_goes_through_the_editor_and_stages() {
        let mut app = sample_app();
        app.dashboard.editor.set_from("");
        assert!(handle_paste(&mut app, "{\r\n\t\"a\": 1\r\n}"));
        assert_eq!(app.dashboard.editor.current(), "{\n  \"a\": 1\n}");
        assert!(app.session.has_staged());

        app.dashboard.focus = PanelId::Chart;
        assert!(!handle_paste(&mut app, "ignored"));
    }

    #[test]
    fn sanitize_normalizes_line_endings() {
        assert_eq!(sanitize_paste("a\r\nb\rc\td"), "a\nb\nc  d");
    }
}
