pub mod search_events;
pub mod search_render;
mod search_state;

// Re-export public types
pub use search_state::{SearchInput, SearchStatus};
