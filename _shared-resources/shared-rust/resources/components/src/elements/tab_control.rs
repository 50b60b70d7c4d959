// Tab Control
// Entry point of the widget: owns the selected index and reports the selected label
//
// Usage:
//   let mut control = TabControl::new(["Day", "Week", "Month"], |label| println!("{label}"))?
//       .with_separators(true);
//   terminal.draw(|f| control.render(f, area, Instant::now()))?;
//   control.handle_mouse(&mouse_event, Instant::now());

use crossterm::event::MouseEvent;
use ratatui::{layout::Rect, Frame};
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

use super::container::{ContainerGesture, ContainerState};
use super::segmented_control::SegmentedControl;
use super::touchable::{touchable_for, HapticEngine, SilentHaptics, Touchable};
use crate::core::{clamp_index, validate_labels, ControlState, Platform, StateUpdate, TabControlError};
use crate::styles::TabStyleSheet;

/// Called with the label of the selected tab after every selection event
pub type ChangeCallback = Box<dyn FnMut(&str)>;

pub struct TabControl {
    labels: Vec<String>,
    separators: bool,
    platform: Platform,
    sheet: TabStyleSheet,
    haptics: Rc<dyn HapticEngine>,
    /// Chosen from `platform` when the control is built
    touchable: Box<dyn Touchable>,
    state: ControlState,
    container: ContainerState,
    on_change: ChangeCallback,
}

impl TabControl {
    /// Build a control for the host platform. Labels must be non-empty and unique.
    pub fn new<I, S, F>(labels: I, on_change: F) -> Result<Self, TabControlError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: FnMut(&str) + 'static,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        validate_labels(&labels)?;

        let platform = Platform::current();
        let haptics: Rc<dyn HapticEngine> = Rc::new(SilentHaptics);
        Ok(Self {
            state: ControlState::new(labels.len()),
            labels,
            separators: false,
            platform,
            sheet: platform.style_sheet(),
            touchable: touchable_for(platform, haptics.clone()),
            haptics,
            container: ContainerState::default(),
            on_change: Box::new(on_change),
        })
    }

    pub fn with_separators(mut self, separators: bool) -> Self {
        self.separators = separators;
        self
    }

    /// Switch platform; also replaces the style sheet and touch wrapper
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self.sheet = platform.style_sheet();
        self.touchable = touchable_for(platform, self.haptics.clone());
        self
    }

    pub fn with_haptics(mut self, haptics: Rc<dyn HapticEngine>) -> Self {
        self.touchable = touchable_for(self.platform, haptics.clone());
        self.haptics = haptics;
        self
    }

    pub fn with_style_sheet(mut self, sheet: TabStyleSheet) -> Self {
        self.sheet = sheet;
        self
    }

    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        let area = self.container.area();
        self.container = ContainerState::new(duration);
        self.container.set_area(area);
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn selected_index(&self) -> usize {
        self.state.selected_index()
    }

    pub fn selected_value(&self) -> &str {
        &self.labels[self.state.selected_index()]
    }

    pub fn separators(&self) -> bool {
        self.separators
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn container_width(&self) -> u16 {
        self.state.container_width()
    }

    /// Resting position of the highlight for the current state
    pub fn indicator_target(&self) -> f32 {
        self.state.indicator_target()
    }

    /// Displayed (animated) position of the highlight
    pub fn indicator_offset(&self, now: Instant) -> f32 {
        self.container.animation().value_at(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.container.animation().is_running(now)
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                        State Updates                                       │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Single mutation entry point. Retargets the highlight when the state changes.
    pub fn apply(&mut self, update: StateUpdate, now: Instant) -> bool {
        if !self.state.apply(update) {
            return false;
        }
        let target = self.state.indicator_target();
        if self.container.animation_mut().retarget(target, now) {
            trace!(?update, offset = target, "indicator retargeted");
        }
        true
    }

    /// Tap on the tab at `index` (clamped). The callback fires even if the tab is already active.
    pub fn press(&mut self, index: usize, now: Instant) -> usize {
        let index = clamp_index(index, self.labels.len());
        let control = SegmentedControl::new(&self.labels, self.state.selected_index(), self.separators);
        let reported = control.press(index, self.touchable.as_ref()).unwrap_or(index);
        self.commit(reported, now);
        reported
    }

    /// Route a mouse event. Returns the index reported to the callback, if any.
    pub fn handle_mouse(&mut self, event: &MouseEvent, now: Instant) -> Option<usize> {
        let gesture = self.container.interpret(
            event,
            self.platform,
            self.labels.len(),
            self.state.selected_index(),
        )?;
        match gesture {
            ContainerGesture::Tap(index) => Some(self.press(index, now)),
            ContainerGesture::Scrub(index) => {
                self.commit(index, now);
                Some(index)
            }
        }
    }

    /// Move the selection by `delta` tabs, stopping at either end
    pub fn select_relative(&mut self, delta: isize, now: Instant) -> Option<usize> {
        let last = self.labels.len().saturating_sub(1) as isize;
        let index = (self.state.selected_index() as isize + delta).clamp(0, last) as usize;
        if index == self.state.selected_index() {
            return None;
        }
        self.commit(index, now);
        Some(index)
    }

    fn commit(&mut self, index: usize, now: Instant) {
        let changed = self.apply(StateUpdate::Select(index), now);
        let label = &self.labels[self.state.selected_index()];
        debug!(index = self.state.selected_index(), %label, changed, "tab selected");
        (self.on_change)(label);
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                          Rendering                                         │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Lay out and draw the control. Measures the container width as part of layout.
    pub fn render(&mut self, f: &mut Frame, area: Rect, now: Instant) {
        self.container.set_area(area);
        self.apply(StateUpdate::Measured(area.width), now);

        let offset = self.container.animation().value_at(now);
        SegmentedControl::new(&self.labels, self.state.selected_index(), self.separators)
            .container(&self.sheet, self.platform)
            .with_indicator_offset(offset)
            .render(f, area);
    }
}

impl fmt::Debug for TabControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabControl")
            .field("labels", &self.labels)
            .field("separators", &self.separators)
            .field("platform", &self.platform)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
