pub(super) const SIDEBAR_WIDTH: u16 = 18;
pub(super) const PANEL_HEADER_HEIGHT: u16 = 1;
pub(super) const STATUS_HEIGHT: u16 = 1;
pub(super) const DEBUG_PANEL_HEIGHT: u16 = 2;
pub(super) const APPLY_BUTTON_LABEL: &str = " Apply changes ";
