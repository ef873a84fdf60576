pub mod draw_star;
pub mod ports;
