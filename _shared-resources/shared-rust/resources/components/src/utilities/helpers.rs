// Helper utilities for the segmented control
use ratatui::layout::Rect;
use ratatui::style::Color;

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Check if a cell coordinate (column, row) lies inside a rect
pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Single-row rect at the vertical middle of `area`
pub fn middle_row(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1) / 2,
        width: area.width,
        height: area.height.min(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color(0x1C2B3A), Color::Rgb(0x1C, 0x2B, 0x3A));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10, 5, 4, 2);
        assert!(rect_contains(rect, 10, 5));
        assert!(rect_contains(rect, 13, 6));
        assert!(!rect_contains(rect, 14, 5));
        assert!(!rect_contains(rect, 10, 7));
        assert!(!rect_contains(rect, 9, 5));
    }

    #[test]
    fn test_middle_row() {
        assert_eq!(middle_row(Rect::new(0, 2, 10, 3)), Rect::new(0, 3, 10, 1));
        assert_eq!(middle_row(Rect::new(0, 2, 10, 1)), Rect::new(0, 2, 10, 1));
        assert_eq!(middle_row(Rect::new(0, 2, 10, 0)).height, 0);
    }
}
