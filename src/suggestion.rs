mod highlight;
pub mod suggestion_render;

pub use highlight::{Segment, highlight_segments};
pub use suggestion_render::suggestion_line;
