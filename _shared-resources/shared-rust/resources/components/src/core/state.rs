// Control State
// Selected index and measured container width, plus the pure functions derived from them
//
// Usage:
//   let mut state = ControlState::new(4);
//   state.apply(StateUpdate::Measured(200));
//   state.apply(StateUpdate::Select(3));
//   assert_eq!(state.indicator_target(), 150.0);

/// Mutations accepted by [`ControlState::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateUpdate {
    /// Select the tab at this index (clamped to the tab range)
    Select(usize),
    /// Record a newly measured container width
    Measured(u16),
}

/// Owned state of one tab control instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    /// Index of the currently selected tab
    selected_index: usize,
    /// Width of the rendered row, 0 until the first layout pass
    container_width: u16,
    /// Number of tabs (fixed for the lifetime of the control)
    tab_count: usize,
}

impl ControlState {
    pub fn new(tab_count: usize) -> Self {
        Self {
            selected_index: 0,
            container_width: 0,
            tab_count,
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn container_width(&self) -> u16 {
        self.container_width
    }

    pub fn tab_count(&self) -> usize {
        self.tab_count
    }

    /// Apply an update. Returns true if the state changed.
    pub fn apply(&mut self, update: StateUpdate) -> bool {
        match update {
            StateUpdate::Select(index) => {
                let index = clamp_index(index, self.tab_count);
                if index == self.selected_index {
                    return false;
                }
                self.selected_index = index;
                true
            }
            StateUpdate::Measured(width) => {
                if width == self.container_width {
                    return false;
                }
                self.container_width = width;
                true
            }
        }
    }

    /// Width of a single tab at the current measured width
    pub fn tab_width(&self) -> f32 {
        tab_width(self.container_width as f32, self.tab_count)
    }

    /// Where the highlight indicator should come to rest
    pub fn indicator_target(&self) -> f32 {
        indicator_target(self.container_width as f32, self.tab_count, self.selected_index)
    }
}

/// Clamp an index into `[0, tab_count - 1]`
pub fn clamp_index(index: usize, tab_count: usize) -> usize {
    index.min(tab_count.saturating_sub(1))
}

pub fn tab_width(container_width: f32, tab_count: usize) -> f32 {
    if tab_count == 0 {
        return 0.0;
    }
    container_width / tab_count as f32
}

/// Left offset of the highlight for the given selection: `(width / count) * index`
pub fn indicator_target(container_width: f32, tab_count: usize, selected_index: usize) -> f32 {
    tab_width(container_width, tab_count) * selected_index as f32
}

/// Map a horizontal coordinate (relative to the container's left edge) to a tab index.
/// Coordinates outside the row clamp to the first or last tab.
pub fn index_at(x: f32, container_width: f32, tab_count: usize) -> usize {
    let width = tab_width(container_width, tab_count);
    if width <= 0.0 {
        return 0;
    }
    let raw = (x / width).floor();
    if raw <= 0.0 {
        0
    } else {
        clamp_index(raw as usize, tab_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ControlState::new(3);
        assert_eq!(state.selected_index(), 0);
        assert_eq!(state.container_width(), 0);
        assert_eq!(state.indicator_target(), 0.0);
    }

    #[test]
    fn test_select_clamps_and_reports_change() {
        let mut state = ControlState::new(3);
        assert!(state.apply(StateUpdate::Select(2)));
        assert!(!state.apply(StateUpdate::Select(2)));
        assert!(!state.apply(StateUpdate::Select(99)));
        assert_eq!(state.selected_index(), 2);
    }

    #[test]
    fn test_measured_width() {
        let mut state = ControlState::new(2);
        assert!(state.apply(StateUpdate::Measured(80)));
        assert!(!state.apply(StateUpdate::Measured(80)));
        assert_eq!(state.tab_width(), 40.0);
    }

    #[test]
    fn test_indicator_target() {
        assert_eq!(indicator_target(200.0, 4, 3), 150.0);

        let mut state = ControlState::new(4);
        state.apply(StateUpdate::Select(3));
        assert_eq!(state.indicator_target(), 0.0);
        state.apply(StateUpdate::Measured(200));
        assert_eq!(state.indicator_target(), 150.0);
    }

    #[test]
    fn test_index_at() {
        assert_eq!(index_at(250.0, 300.0, 3), 2);
        assert_eq!(index_at(-5.0, 300.0, 3), 0);
        assert_eq!(index_at(305.0, 300.0, 3), 2);
        assert_eq!(index_at(100.0, 300.0, 3), 1);
        assert_eq!(index_at(99.9, 300.0, 3), 0);
    }

    #[test]
    fn test_index_at_before_measurement() {
        assert_eq!(index_at(10.0, 0.0, 3), 0);
        assert_eq!(index_at(10.0, 100.0, 0), 0);
    }
}
