mod app;

use crate::app::handlers::{keys, mouse};
use crate::app::state::{SessionStore, Tab};
use crate::app::view::theme::{apply_theme_overrides, parse_theme_overrides};
use crate::app::view::ui::draw_ui;
use crate::app::AppState;
use crossterm::cursor::Show;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyCode, KeyEventKind, KeyModifiers,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::env;
use std::time::{Duration, Instant};

const DEFAULT_DATA_PATH: &str = "assets/data.json";

fn env_truthy(key: &str) -> bool {
    env::var(key)
        .ok()
        .as_deref()
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn cli_flag_enabled(flag: &str) -> bool {
    env::args().skip(1).any(|arg| arg == flag)
}

fn flag_value(args: impl IntoIterator<Item = impl AsRef<str>>, flag: &str) -> Option<String> {
    let mut args = args.into_iter();
    let prefix = format!("{flag}=");
    while let Some(arg) = args.next() {
        let arg = arg.as_ref();
        if arg == flag {
            return args.next().map(|value| value.as_ref().to_string());
        }
        if let Some(value) = arg.strip_prefix(&prefix) {
            return Some(value.to_string());
        }
    }
    None
}

fn parse_initial_tab_from_args(args: impl IntoIterator<Item = impl AsRef<str>>) -> Tab {
    flag_value(args, "--tab")
        .map(|value| Tab::from_name(&value))
        .unwrap_or_default()
}

fn parse_data_path_from_args(args: impl IntoIterator<Item = impl AsRef<str>>) -> String {
    flag_value(args, "--data")
        .or_else(|| env::var("PANEBOARD_DATA").ok())
        .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string())
}

fn load_theme_overrides() {
    let Ok(path) = env::var("PANEBOARD_THEME_FILE") else {
        return;
    };
    match std::fs::read_to_string(&path) {
        Ok(text) => match parse_theme_overrides(&text) {
            Ok(overrides) => apply_theme_overrides(&overrides),
            Err(error) => eprintln!("theme overrides {path}: {error}"),
        },
        Err(error) => eprintln!("theme overrides {path}: {error}"),
    }
}

struct TerminalRestoreGuard;

impl Drop for TerminalRestoreGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(DisableBracketedPaste);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let initial_tab = parse_initial_tab_from_args(env::args().skip(1));
    let data_path = parse_data_path_from_args(env::args().skip(1));
    load_theme_overrides();

    let mut app = match SessionStore::from_file(&data_path) {
        Ok(session) => AppState::new(session, initial_tab),
        Err(error) => AppState::with_startup_error(format!("{data_path}: {error}"), initial_tab),
    };
    app.debug_perf_enabled = cli_flag_enabled("--debug-perf") || env_truthy("PANEBOARD_DEBUG_PERF");

    let mut stdout = std::io::stdout();
    let _restore_guard = TerminalRestoreGuard;
    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    // Multi-line paste must arrive as Event::Paste instead of a stream of
    // Enter keypresses.
    let _ = stdout.execute(EnableBracketedPaste);
    // Drag gestures on panel headers need motion events.
    let _ = stdout.execute(EnableMouseCapture);
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut needs_redraw = true;
    let mut last_frame_at = Instant::now();
    loop {
        if needs_redraw {
            let frame_duration = last_frame_at.elapsed();
            let draw_started = Instant::now();
            terminal.draw(|f| draw_ui(f, &mut app))?;
            app.record_perf_frame(frame_duration, draw_started.elapsed());
            last_frame_at = Instant::now();
            needs_redraw = false;
        }

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    break;
                }
                if keys::handle_key(&mut app, key) {
                    needs_redraw = true;
                }
            }
            Event::Mouse(event) => {
                if mouse::handle_mouse(&mut app, event) {
                    needs_redraw = true;
                }
            }
            Event::Paste(text) => {
                if keys::handle_paste(&mut app, &text) {
                    needs_redraw = true;
                }
            }
            Event::Resize(_, _) => needs_redraw = true,
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{flag_value, parse_data_path_from_args, parse_initial_tab_from_args};
    use crate::app::state::Tab;

    #[test]
    fn flag_value_accepts_separate_and_equals_forms() {
        assert_eq!(
            flag_value(["--tab", "money"], "--tab"),
            Some("money".to_string())
        );
        assert_eq!(
            flag_value(["--tab=economy"], "--tab"),
            Some("economy".to_string())
        );
        assert_eq!(flag_value(["--other"], "--tab"), None);
    }

    #[test]
    fn initial_tab_defaults_to_dashboard() {
        assert_eq!(parse_initial_tab_from_args([] as [&str; 0]), Tab::Dashboard);
        assert_eq!(parse_initial_tab_from_args(["--tab", "money"]), Tab::Money);
        assert_eq!(
            parse_initial_tab_from_args(["--tab", "mystery"]),
            Tab::Dashboard
        );
    }

    #[test]
    fn data_path_prefers_the_cli_flag() {
        assert_eq!(
            parse_data_path_from_args(["--data", "/tmp/payload.json"]),
            "/tmp/payload.json"
        );
    }
}
