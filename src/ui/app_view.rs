// App View
// Lays out header, segmented control, selection panel and status bar

use ratatui::{
    layout::{Constraint, Layout, Margin},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

use segmented_components::styles::tokens::spacing;

use super::Styles;
use crate::core::App;

pub fn render_app(f: &mut Frame, app: &mut App, now: Instant) {
    let [header, control, content, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(spacing::CONTROL_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(f.area());

    f.render_widget(Paragraph::new(Span::styled(app.title.as_str(), Styles::header())), header);

    app.control.render(f, control.inner(Margin::new(1, 0)), now);

    render_selection(f, app, content);

    f.render_widget(Paragraph::new(Span::styled(app.status_text.as_str(), Styles::footer())), footer);
}

fn render_selection(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border())
        .title(Span::styled(" Selected ", Styles::title()));

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(app.selected_label(), Styles::selected_value()),
        ]),
        Line::default(),
    ];
    lines.extend(app.history().into_iter().enumerate().map(|(i, label)| {
        let style = if i == 0 { Styles::history_latest() } else { Styles::history_item() };
        Line::from(Span::styled(format!("  {label}"), style))
    }));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use ratatui::{backend::TestBackend, Terminal};
    use segmented_components::{Platform, SilentHaptics};
    use std::rc::Rc;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_app() {
        let config = parse_config(
            "application:\n  title: Demo Title\n  status_bar:\n    default_text: press q\nsegmented_controls:\n  main:\n    hwnd: hwndMainTabs\n    tabs: [Day, Week]\n",
        )
        .unwrap();
        let mut app = App::new(&config, Some(Platform::Ios), Rc::new(SilentHaptics)).unwrap();
        app.control.press(1, Instant::now());

        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal.draw(|f| render_app(f, &mut app, Instant::now())).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Demo Title"));
        assert!(text.contains("Day"));
        assert!(text.contains("Current: Week"));
        assert!(text.contains("press q"));
        assert_eq!(app.control.container_width(), 38);
    }
}
