pub mod star_panel;
