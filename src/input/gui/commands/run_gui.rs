use std::error::Error;

use log::info;
use winit::{dpi::LogicalSize, event_loop::EventLoop, window::{Window, WindowBuilder}};

use crate::core::actions::render_panel::render_panel::render_panel;
use crate::core::data::panel_config::PanelConfig;
use crate::core::stars::scene::default_label;
use crate::input::gui::app::GuiApp;
use crate::presenters::pixels::presenter::PixelsPresenter;

pub struct RunGuiCommand {
    config: PanelConfig,
}

impl RunGuiCommand {
    pub fn new(config: PanelConfig) -> Self {
        Self { config }
    }

    /// Renders the panel once, then shows it until the window is closed.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let panel = render_panel(&self.config)?;
        let size = f64::from(self.config.panel_size());

        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Star Patterns")
                .with_inner_size(LogicalSize::new(size, size))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        info!("Showing {}x{} star panel", size, size);

        let presenter = PixelsPresenter::new(window, &panel)?;
        let app = GuiApp::new(window, &event_loop, presenter, default_label(&self.config));

        app.run(window, event_loop)?;

        Ok(())
    }
}
