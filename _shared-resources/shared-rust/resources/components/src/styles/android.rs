// Android Style Sheet
// Filled tabs; the active tab is tinted directly and underlined

use ratatui::style::{Modifier, Style};

use super::tokens::colors;
use super::TabStyleSheet;
use crate::utilities::hex_color;

pub fn sheet() -> TabStyleSheet {
    TabStyleSheet {
        container: Style::default().bg(hex_color(colors::ANDROID_SURFACE)),
        tab: Style::default().bg(hex_color(colors::ANDROID_SURFACE)),
        active_tab: Style::default().bg(hex_color(colors::ANDROID_ACCENT)),
        tab_text: Style::default().fg(hex_color(colors::TEXT_MUTED)),
        active_tab_text: Style::default()
            .fg(hex_color(colors::ANDROID_ACCENT_TEXT))
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        first_tab: Style::default().bg(hex_color(colors::ANDROID_SURFACE_EDGE)),
        last_tab: Style::default().bg(hex_color(colors::ANDROID_SURFACE_EDGE)),
        separator: Style::default().fg(hex_color(colors::SEPARATOR)),
    }
}
