// iOS Style Sheet
// Flat tabs on a dark surface; the sliding highlight alone marks the active tab

use ratatui::style::{Modifier, Style};

use super::tokens::colors;
use super::TabStyleSheet;
use crate::utilities::hex_color;

pub fn sheet() -> TabStyleSheet {
    TabStyleSheet {
        container: Style::default().bg(hex_color(colors::IOS_SURFACE)),
        tab: Style::default(),
        active_tab: Style::default().bg(hex_color(colors::IOS_SURFACE_RAISED)),
        tab_text: Style::default().fg(hex_color(colors::TEXT_MUTED)),
        active_tab_text: Style::default()
            .fg(hex_color(colors::TEXT))
            .add_modifier(Modifier::BOLD),
        first_tab: Style::default().bg(hex_color(colors::IOS_SURFACE_EDGE)),
        last_tab: Style::default().bg(hex_color(colors::IOS_SURFACE_EDGE)),
        separator: Style::default().fg(hex_color(colors::SEPARATOR)),
    }
}
