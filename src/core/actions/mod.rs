pub mod draw_star;
pub mod rasterize;
pub mod render_panel;
