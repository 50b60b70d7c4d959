// Styles module
// Design tokens and the per-platform style sheets

pub mod android;
pub mod ios;
pub mod tokens;

use ratatui::style::Style;

/// Everything a platform has to supply to style a tab control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabStyleSheet {
    /// Background of the whole row
    pub container: Style,
    /// Base style of every tab
    pub tab: Style,
    /// Active tab (highlight, and the tab itself on Android)
    pub active_tab: Style,
    pub tab_text: Style,
    pub active_tab_text: Style,
    /// Layered onto the first tab
    pub first_tab: Style,
    /// Layered onto the last tab
    pub last_tab: Style,
    pub separator: Style,
}

impl TabStyleSheet {
    /// Style of the sliding highlight: base tab merged with active tab
    pub fn highlight(&self) -> Style {
        self.tab.patch(self.active_tab)
    }

    /// Compose a tab's style. Later layers override earlier ones:
    /// tab, then active tab (if `apply_active`), then first, then last.
    pub fn compose_tab(&self, is_active: bool, is_first: bool, is_last: bool, apply_active: bool) -> Style {
        let mut style = self.tab;
        if is_active && apply_active {
            style = style.patch(self.active_tab);
        }
        if is_first {
            style = style.patch(self.first_tab);
        }
        if is_last {
            style = style.patch(self.last_tab);
        }
        style
    }

    pub fn compose_text(&self, is_active: bool) -> Style {
        if is_active {
            self.tab_text.patch(self.active_tab_text)
        } else {
            self.tab_text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Modifier};

    fn layered_sheet() -> TabStyleSheet {
        TabStyleSheet {
            container: Style::default(),
            tab: Style::default().fg(Color::White).bg(Color::Black),
            active_tab: Style::default().bg(Color::Blue),
            tab_text: Style::default().fg(Color::Gray),
            active_tab_text: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            first_tab: Style::default().bg(Color::Green),
            last_tab: Style::default().bg(Color::Red),
            separator: Style::default(),
        }
    }

    #[test]
    fn test_compose_tab_layer_order() {
        let sheet = layered_sheet();

        let plain = sheet.compose_tab(false, false, false, true);
        assert_eq!(plain.bg, Some(Color::Black));

        let active = sheet.compose_tab(true, false, false, true);
        assert_eq!(active.bg, Some(Color::Blue));
        assert_eq!(active.fg, Some(Color::White));

        // Edge styles win over the active style
        let active_first = sheet.compose_tab(true, true, false, true);
        assert_eq!(active_first.bg, Some(Color::Green));

        // Last is layered after first
        let single = sheet.compose_tab(false, true, true, true);
        assert_eq!(single.bg, Some(Color::Red));
    }

    #[test]
    fn test_active_style_skipped_when_not_applied() {
        let sheet = layered_sheet();
        let active = sheet.compose_tab(true, false, false, false);
        assert_eq!(active.bg, Some(Color::Black));
    }

    #[test]
    fn test_highlight_and_text() {
        let sheet = layered_sheet();
        assert_eq!(sheet.highlight().bg, Some(Color::Blue));
        assert_eq!(sheet.highlight().fg, Some(Color::White));

        let text = sheet.compose_text(true);
        assert_eq!(text.fg, Some(Color::White));
        assert!(text.add_modifier.contains(Modifier::BOLD));
        assert_eq!(sheet.compose_text(false).fg, Some(Color::Gray));
    }

    #[test]
    fn test_platform_sheets_shade_edge_tabs() {
        for sheet in [ios::sheet(), android::sheet()] {
            let middle = sheet.compose_tab(false, false, false, true).bg;
            assert!(sheet.compose_tab(false, true, false, true).bg.is_some());
            assert_ne!(sheet.compose_tab(false, true, false, true).bg, middle);
            assert_ne!(sheet.compose_tab(false, false, true, true).bg, middle);
        }
    }

    #[test]
    fn test_platform_sheets_fill_highlight_background() {
        assert!(ios::sheet().highlight().bg.is_some());
        assert!(android::sheet().highlight().bg.is_some());
    }
}
