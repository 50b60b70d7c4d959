// Segmented Control
// Pure composition: one Tab per label inside a Container

use super::container::Container;
use super::separator::should_render_left_separator;
use super::tab::Tab;
use super::touchable::Touchable;
use crate::core::Platform;
use crate::styles::TabStyleSheet;

#[derive(Debug, Clone, Copy)]
pub struct SegmentedControl<'a> {
    labels: &'a [String],
    selected_index: usize,
    separators: bool,
}

impl<'a> SegmentedControl<'a> {
    pub fn new(labels: &'a [String], selected_index: usize, separators: bool) -> Self {
        Self {
            labels,
            selected_index,
            separators,
        }
    }

    pub fn tabs(&self) -> Vec<Tab<'a>> {
        let last = self.labels.len().saturating_sub(1);
        self.labels
            .iter()
            .enumerate()
            .map(|(index, label)| Tab {
                label: label.as_str(),
                index,
                is_active: index == self.selected_index,
                is_first: index == 0,
                is_last: index == last,
                render_separator: self.separators
                    && should_render_left_separator(index, self.selected_index),
            })
            .collect()
    }

    pub fn container(&self, sheet: &'a TabStyleSheet, platform: Platform) -> Container<'a> {
        Container::new(self.tabs(), sheet, platform)
    }

    /// Press the tab at `index`; returns the index the tab reports upward
    pub fn press(&self, index: usize, touchable: &dyn Touchable) -> Option<usize> {
        self.tabs().get(index).map(|tab| tab.press(touchable))
    }
}
