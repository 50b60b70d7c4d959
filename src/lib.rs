// Segmented Tabs Library
// Terminal host application for the segmented tab control

// Configuration loading and validation
pub mod config;
pub mod config_validation;

// Application constants
pub mod constants;

// Core infrastructure - application state and events
pub mod core;

// UI - event loop and views
pub mod ui;

// Re-export commonly used items for convenience
pub use self::core::{App, AppEvent, EventHandler};
pub use config::AppConfig;
pub use constants::*;
