// Tab Element
// One segment: optional left separator, then the platform touchable wrapping the label

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::touchable::Touchable;
use crate::core::Platform;
use crate::styles::tokens::{spacing, SEPARATOR_SYMBOL};
use crate::styles::TabStyleSheet;
use crate::utilities::middle_row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab<'a> {
    pub label: &'a str,
    /// Position in the tab list; reported upward on press
    pub index: usize,
    pub is_active: bool,
    pub is_first: bool,
    pub is_last: bool,
    /// Draw a divider on the left edge
    pub render_separator: bool,
}

impl<'a> Tab<'a> {
    pub fn style(&self, sheet: &TabStyleSheet, platform: Platform) -> Style {
        sheet.compose_tab(
            self.is_active,
            self.is_first,
            self.is_last,
            platform.applies_active_tab_style(),
        )
    }

    pub fn text_style(&self, sheet: &TabStyleSheet) -> Style {
        sheet.compose_text(self.is_active)
    }

    /// Press through the platform touchable; returns this tab's index
    pub fn press(&self, touchable: &dyn Touchable) -> usize {
        touchable.press(self.index)
    }

    pub fn render(&self, f: &mut Frame, area: Rect, sheet: &TabStyleSheet, platform: Platform) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        f.buffer_mut().set_style(area, self.style(sheet, platform));

        let mut label_area = area;
        if self.render_separator {
            let separator_width = spacing::SEPARATOR_WIDTH.min(area.width);
            for y in area.top()..area.bottom() {
                f.buffer_mut().set_string(area.x, y, SEPARATOR_SYMBOL, sheet.separator);
            }
            label_area.x += separator_width;
            label_area.width -= separator_width;
        }
        if label_area.width == 0 {
            return;
        }

        let line = Line::from(Span::styled(self.label, self.text_style(sheet)));
        let paragraph = Paragraph::new(line).alignment(Alignment::Center);
        f.render_widget(paragraph, middle_row(label_area));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::touchable::tests::RecordingHaptics;
    use crate::elements::touchable::{touchable_for, HapticNotification};
    use crate::styles::{android, ios};
    use ratatui::{backend::TestBackend, Terminal};
    use std::rc::Rc;

    fn tab(label: &str, is_active: bool, render_separator: bool) -> Tab<'_> {
        Tab {
            label,
            index: 1,
            is_active,
            is_first: false,
            is_last: false,
            render_separator,
        }
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_renders_centered_label() {
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        let sheet = ios::sheet();
        terminal
            .draw(|f| tab("Two", false, false).render(f, f.area(), &sheet, Platform::Ios))
            .unwrap();

        assert_eq!(row_text(&terminal, 0).trim(), "");
        assert_eq!(row_text(&terminal, 1).trim(), "Two");
        assert!(!row_text(&terminal, 1).contains(SEPARATOR_SYMBOL));
    }

    #[test]
    fn test_renders_separator_on_every_row() {
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        let sheet = ios::sheet();
        terminal
            .draw(|f| tab("Two", false, true).render(f, f.area(), &sheet, Platform::Ios))
            .unwrap();

        for y in 0..3 {
            assert_eq!(terminal.backend().buffer()[(0, y)].symbol(), SEPARATOR_SYMBOL);
        }
        assert_eq!(row_text(&terminal, 1).trim_start_matches(SEPARATOR_SYMBOL).trim(), "Two");
    }

    #[test]
    fn test_active_style_only_layered_on_android() {
        let android_sheet = android::sheet();
        let active = tab("A", true, false);
        assert_eq!(active.style(&android_sheet, Platform::Android).bg, android_sheet.active_tab.bg);

        let ios_sheet = ios::sheet();
        assert_eq!(active.style(&ios_sheet, Platform::Ios), ios_sheet.tab);
    }

    #[test]
    fn test_press_goes_through_touchable() {
        let haptics = Rc::new(RecordingHaptics::default());
        let touchable = touchable_for(Platform::Ios, haptics.clone());

        assert_eq!(tab("A", false, false).press(touchable.as_ref()), 1);
        assert_eq!(*haptics.received.borrow(), vec![HapticNotification::Success]);
    }
}
