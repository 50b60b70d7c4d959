// Separator Logic
// Decides where divider lines go so none touches the highlighted tab

/// Whether the tab at `index` draws a divider on its left edge.
/// False for the first tab, for the selected tab, and for the tab right after the selected one.
pub fn should_render_left_separator(index: usize, selected_index: usize) -> bool {
    if index == 0 || index == selected_index {
        return false;
    }
    index - 1 != selected_index
}
