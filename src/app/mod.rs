mod app_events;
mod app_render;
mod app_state;
pub mod mouse_click;

// Re-export public types
pub use app_state::{App, TICK_INTERVAL};
