// Core infrastructure module
// State, animation and platform primitives the widget elements are built on

pub mod animation;
pub mod error;
pub mod platform;
pub mod state;

pub use animation::{IndicatorAnimation, INDICATOR_ANIMATION_DURATION};
pub use error::{validate_labels, TabControlError};
pub use platform::Platform;
pub use state::{clamp_index, index_at, indicator_target, tab_width, ControlState, StateUpdate};
