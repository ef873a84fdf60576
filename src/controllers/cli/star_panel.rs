use std::error::Error;
use std::path::Path;
use std::time::Instant;

use log::{info, warn};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_panel::render_panel::render_stars;
use crate::core::data::panel_config::PanelConfig;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::stars::scene::default_scene;

pub struct StarPanelController<P: FilePresenterPort> {
    presenter: P,
    config: PanelConfig,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> StarPanelController<P> {
    pub fn new(presenter: P, config: PanelConfig) -> Self {
        Self {
            presenter,
            config,
            buffer: None,
        }
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn Error>> {
        let scene = default_scene(&self.config)?;

        info!("Rendering star panel...");
        info!(
            "Panel size: {}x{}",
            self.config.panel_size(),
            self.config.panel_size()
        );
        for request in &scene {
            info!("Quadrant: {}", request);
        }

        let start = Instant::now();
        let buffer = render_stars(&self.config, &scene)?;
        info!("Duration: {:?}", start.elapsed());

        self.buffer = Some(buffer);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        match &self.buffer {
            Some(buffer) => {
                self.presenter.present(buffer, &filepath)?;
                info!("Saved to {}", filepath.as_ref().display());
            }
            None => warn!("Nothing generated yet, skipping write"),
        }

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }
}
