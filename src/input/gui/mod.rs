//! Windowed viewer: winit owns the window, pixels shows the rendered panel
//! and egui paints the label on top.

mod app;
pub mod commands;
