// GUI Elements module
// Visual components of the segmented tab control, leaf-first

pub mod container;
pub mod segmented_control;
pub mod separator;
pub mod tab;
pub mod tab_control;
pub mod touchable;

pub use container::{highlight_rect, tab_rects, Container, ContainerGesture, ContainerState};
pub use segmented_control::SegmentedControl;
pub use separator::should_render_left_separator;
pub use tab::Tab;
pub use tab_control::{ChangeCallback, TabControl};
pub use touchable::{
    touchable_for, HapticEngine, HapticNotification, HapticTouchable, PlainTouchable, SilentHaptics,
    Touchable,
};
