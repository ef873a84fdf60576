pub mod draw_command;
pub mod geometry;
pub mod render_request;
pub mod scene;
pub mod style;
