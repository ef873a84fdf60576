pub mod draw_surface;
