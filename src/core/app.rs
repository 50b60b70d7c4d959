// Application State
// Hosts one segmented control and keeps what it reported

use anyhow::Result;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Instant;
use tracing::info;

use segmented_components::{create_tab_control_from_config, find_control_config, HapticEngine, Platform, TabControl};

use super::AppEvent;
use crate::config::AppConfig;
use crate::constants::{HISTORY_LIMIT, HWND_MAIN_TABS};

/// Labels reported by the control's change callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionLog {
    /// Most recently reported label
    current: String,
    /// Reported labels, newest first
    history: VecDeque<String>,
    limit: usize,
}

impl SelectionLog {
    pub fn new(initial: impl Into<String>, limit: usize) -> Self {
        Self {
            current: initial.into(),
            history: VecDeque::with_capacity(limit),
            limit,
        }
    }

    pub fn record(&mut self, label: &str) {
        self.current = label.to_string();
        self.history.push_front(label.to_string());
        self.history.truncate(self.limit);
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn history(&self) -> impl Iterator<Item = &String> {
        self.history.iter()
    }
}

/// Main application state
pub struct App {
    /// Header title
    pub title: String,

    /// Status bar text
    pub status_text: String,

    /// The hosted segmented control
    pub control: TabControl,

    /// Shared with the control's change callback
    selections: Rc<RefCell<SelectionLog>>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create the application from configuration
    pub fn new(
        config: &AppConfig,
        platform_override: Option<Platform>,
        haptics: Rc<dyn HapticEngine>,
    ) -> Result<Self> {
        let control_config = find_control_config(&config.segmented_controls, HWND_MAIN_TABS)?;

        let initial = control_config.tabs.first().cloned().unwrap_or_default();
        let selections = Rc::new(RefCell::new(SelectionLog::new(initial, HISTORY_LIMIT)));
        let sink = Rc::clone(&selections);

        let mut control = create_tab_control_from_config(control_config, move |label| {
            sink.borrow_mut().record(label)
        })?
        .with_haptics(haptics);
        if let Some(platform) = platform_override {
            control = control.with_platform(platform);
        }

        info!(
            hwnd = HWND_MAIN_TABS,
            tabs = control.labels().len(),
            platform = %control.platform(),
            separators = control.separators(),
            "segmented control created"
        );

        Ok(Self {
            title: config.application.title.clone(),
            status_text: config.application.status_bar.default_text.clone(),
            control,
            selections,
            should_quit: false,
        })
    }

    /// Label last reported by the control
    pub fn selected_label(&self) -> String {
        self.selections.borrow().current().to_string()
    }

    /// Reported labels, newest first
    pub fn history(&self) -> Vec<String> {
        self.selections.borrow().history().cloned().collect()
    }

    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Quit => self.quit(),
            AppEvent::SelectPrevious => {
                self.control.select_relative(-1, now);
            }
            AppEvent::SelectNext => {
                self.control.select_relative(1, now);
            }
            AppEvent::Pointer(mouse) => {
                self.control.handle_mouse(&mouse, now);
            }
            AppEvent::None => {}
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use segmented_components::SilentHaptics;

    fn app(platform: Platform) -> App {
        let config = parse_config(
            "application:\n  title: Demo\n  status_bar:\n    default_text: hi\nsegmented_controls:\n  main:\n    hwnd: hwndMainTabs\n    tabs: [Day, Week, Month]\n",
        )
        .unwrap();
        App::new(&config, Some(platform), Rc::new(SilentHaptics)).unwrap()
    }

    #[test]
    fn test_selection_log_is_bounded() {
        let mut log = SelectionLog::new("A", 2);
        log.record("B");
        log.record("C");
        log.record("D");
        assert_eq!(log.current(), "D");
        assert_eq!(log.history().cloned().collect::<Vec<_>>(), vec!["D", "C"]);
    }

    #[test]
    fn test_new_app_starts_on_first_tab() {
        let app = app(Platform::Android);
        assert_eq!(app.title, "Demo");
        assert_eq!(app.selected_label(), "Day");
        assert!(app.history().is_empty());
        assert_eq!(app.control.platform(), Platform::Android);
    }

    #[test]
    fn test_keyboard_navigation_records_labels() {
        let mut app = app(Platform::Android);
        let now = Instant::now();
        app.handle_event(AppEvent::SelectNext, now);
        app.handle_event(AppEvent::SelectNext, now);
        app.handle_event(AppEvent::SelectNext, now);
        app.handle_event(AppEvent::SelectPrevious, now);

        assert_eq!(app.selected_label(), "Week");
        assert_eq!(app.history(), vec!["Week", "Month", "Week"]);
    }

    #[test]
    fn test_quit() {
        let mut app = app(Platform::Ios);
        app.handle_event(AppEvent::Quit, Instant::now());
        assert!(app.should_quit);
    }
}
