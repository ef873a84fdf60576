pub mod render_panel;
