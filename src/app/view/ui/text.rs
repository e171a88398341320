use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub(in crate::app::view) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.width() <= width {
        return value.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0_usize;
    let limit = width.saturating_sub(1);
    for ch in value.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > limit {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    out
}

pub(in crate::app::view) fn pad_to_width(value: &str, width: usize) -> String {
    let truncated = truncate_to_width(value, width);
    let missing = width.saturating_sub(truncated.width());
    format!("{truncated}{}", " ".repeat(missing))
}
