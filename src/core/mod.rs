// Core infrastructure module
// Application state and event translation

pub mod app;
pub mod events;

pub use app::{App, SelectionLog};
pub use events::{AppEvent, EventHandler};
