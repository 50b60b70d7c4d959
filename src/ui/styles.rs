// UI Styles
// Color schemes and styling for the demo chrome around the control

use ratatui::style::{Color, Modifier, Style};

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Header / Footer ===

    pub fn header() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer() -> Style {
        Style::default().fg(Color::Yellow)
    }

    // === Content ===

    pub fn border() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_value() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn history_latest() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn history_item() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
