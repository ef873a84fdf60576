pub mod colour;
pub mod line_segment;
pub mod panel_config;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
