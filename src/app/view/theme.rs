use ratatui::style::Color;
use serde::Deserialize;
use std::sync::{Mutex, OnceLock};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ThemeName {
    Paneboard,
    Ocean,
    Forest,
    Rose,
}

pub(crate) fn parse_theme_name(value: &str) -> Option<ThemeName> {
    match value.trim().to_ascii_lowercase().as_str() {
        "paneboard" => Some(ThemeName::Paneboard),
        "ocean" => Some(ThemeName::Ocean),
        "forest" => Some(ThemeName::Forest),
        "rose" => Some(ThemeName::Rose),
        _ => None,
    }
}

#[derive(Clone, Copy)]
pub(crate) struct UiColors {
    pub(crate) panel_border_fg: Color,
    pub(crate) panel_border_focus_fg: Color,
    pub(crate) panel_header_fg: Color,
    pub(crate) panel_hint_fg: Color,
    pub(crate) sidebar_fg: Color,
    pub(crate) sidebar_active_fg: Color,
    pub(crate) status_fg: Color,
    pub(crate) error_fg: Color,
    pub(crate) apply_button_fg: Color,
    pub(crate) apply_button_bg: Color,
    pub(crate) chart_axis_fg: Color,
    pub(crate) table_header_fg: Color,
    pub(crate) table_cursor_fg: Color,
    pub(crate) gauge_fg: Color,
    pub(crate) debug_perf_fg: Color,
}

#[derive(Clone, Copy)]
struct ThemeDefinition {
    syntect_theme_name: &'static str,
    ui: UiColors,
}

/// Series colors of the fixed "spectral" scheme token fed to the chart.
pub(crate) const SPECTRAL: [Color; 10] = [
    Color::Rgb(158, 1, 66),
    Color::Rgb(213, 62, 79),
    Color::Rgb(244, 109, 67),
    Color::Rgb(253, 174, 97),
    Color::Rgb(254, 224, 139),
    Color::Rgb(230, 245, 152),
    Color::Rgb(171, 221, 164),
    Color::Rgb(102, 194, 165),
    Color::Rgb(50, 136, 189),
    Color::Rgb(94, 79, 162),
];

static THEME_DEFINITION: OnceLock<Mutex<ThemeDefinition>> = OnceLock::new();

fn selected_theme_name_from_env() -> ThemeName {
    if let Ok(selected) = std::env::var("PANEBOARD_THEME") {
        if let Some(parsed) = parse_theme_name(&selected) {
            return parsed;
        }
    }
    ThemeName::Paneboard
}

const fn accent_for_name(name: ThemeName) -> (u8, u8, u8) {
    match name {
        ThemeName::Paneboard => (232, 178, 92),
        ThemeName::Ocean => (124, 193, 255),
        ThemeName::Forest => (149, 208, 146),
        ThemeName::Rose => (222, 161, 175),
    }
}

fn ui_for_accent(accent: (u8, u8, u8)) -> UiColors {
    let accent_color = Color::Rgb(accent.0, accent.1, accent.2);
    UiColors {
        panel_border_fg: Color::DarkGray,
        panel_border_focus_fg: accent_color,
        panel_header_fg: Color::White,
        panel_hint_fg: Color::Gray,
        sidebar_fg: Color::Gray,
        sidebar_active_fg: accent_color,
        status_fg: Color::Gray,
        error_fg: Color::Red,
        apply_button_fg: Color::Black,
        apply_button_bg: accent_color,
        chart_axis_fg: Color::DarkGray,
        table_header_fg: accent_color,
        table_cursor_fg: Color::White,
        gauge_fg: accent_color,
        debug_perf_fg: Color::DarkGray,
    }
}

fn syntect_theme_name_for(name: ThemeName) -> &'static str {
    match name {
        ThemeName::Ocean => "base16-ocean.dark",
        ThemeName::Paneboard | ThemeName::Forest | ThemeName::Rose => "Solarized (dark)",
    }
}

fn build_theme_definition(name: ThemeName) -> ThemeDefinition {
    ThemeDefinition {
        syntect_theme_name: syntect_theme_name_for(name),
        ui: ui_for_accent(accent_for_name(name)),
    }
}

fn theme_definition_mutex() -> &'static Mutex<ThemeDefinition> {
    THEME_DEFINITION.get_or_init(|| Mutex::new(build_theme_definition(selected_theme_name_from_env())))
}

pub(crate) fn ui_colors() -> UiColors {
    theme_definition_mutex()
        .lock()
        .map(|theme| theme.ui)
        .unwrap_or_else(|_| ui_for_accent(accent_for_name(ThemeName::Paneboard)))
}

pub(crate) fn syntect_theme_name() -> &'static str {
    theme_definition_mutex()
        .lock()
        .map(|theme| theme.syntect_theme_name)
        .unwrap_or("Solarized (dark)")
}

/// Rendition of the original's injected stylesheet: an optional JSON file
/// of color overrides, merged verbatim over the active theme's UI colors
/// at startup and opaque to everything outside this module.
#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct UiColorOverrides {
    panel_border_fg: Option<[u8; 3]>,
    panel_header_fg: Option<[u8; 3]>,
    sidebar_active_fg: Option<[u8; 3]>,
    status_fg: Option<[u8; 3]>,
    error_fg: Option<[u8; 3]>,
    apply_button_bg: Option<[u8; 3]>,
    chart_axis_fg: Option<[u8; 3]>,
    table_header_fg: Option<[u8; 3]>,
    gauge_fg: Option<[u8; 3]>,
}

pub(crate) fn parse_theme_overrides(text: &str) -> Result<UiColorOverrides, serde_json::Error> {
    serde_json::from_str(text)
}

pub(crate) fn apply_theme_overrides(overrides: &UiColorOverrides) {
    let Ok(mut definition) = theme_definition_mutex().lock() else {
        return;
    };
    let ui = &mut definition.ui;
    let apply = |slot: &mut Color, value: &Option<[u8; 3]>| {
        if let Some([r, g, b]) = value {
            *slot = Color::Rgb(*r, *g, *b);
        }
    };
    apply(&mut ui.panel_border_fg, &overrides.panel_border_fg);
    apply(&mut ui.panel_header_fg, &overrides.panel_header_fg);
    apply(&mut ui.sidebar_active_fg, &overrides.sidebar_active_fg);
    apply(&mut ui.status_fg, &overrides.status_fg);
    apply(&mut ui.error_fg, &overrides.error_fg);
    apply(&mut ui.apply_button_bg, &overrides.apply_button_bg);
    apply(&mut ui.chart_axis_fg, &overrides.chart_axis_fg);
    apply(&mut ui.table_header_fg, &overrides.table_header_fg);
    apply(&mut ui.gauge_fg, &overrides.gauge_fg);
}

pub(crate) fn series_color(index: usize) -> Color {
    SPECTRAL[index % SPECTRAL.len()]
}
