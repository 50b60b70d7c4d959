// Segmented components library
// A segmented tab control for ratatui: sliding highlight, separators, platform touch feedback

// Core infrastructure
pub mod core;
// GUI elements (visual components)
pub mod elements;
// YAML configuration helpers
pub mod managers;
// Design tokens and platform style sheets
pub mod styles;
// Utilities and helpers
pub mod utilities;

// Re-export commonly used items
pub use self::core::*;
pub use elements::*;
pub use managers::*;
pub use styles::TabStyleSheet;
pub use utilities::*;
