use std::error::Error;
use std::fmt;

use log::debug;

use crate::core::actions::draw_star::draw_star::draw_star;
use crate::core::actions::rasterize::raster_surface::RasterSurface;
use crate::core::data::colour::Colour;
use crate::core::data::panel_config::PanelConfig;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::stars::render_request::{RenderRequest, RenderRequestError};
use crate::core::stars::scene::default_scene;

#[derive(Debug)]
pub enum RenderPanelError {
    PixelRect(PixelRectError),
    RenderRequest(RenderRequestError),
}

impl fmt::Display for RenderPanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelRect(err) => write!(f, "panel rect error: {}", err),
            Self::RenderRequest(err) => write!(f, "render request error: {}", err),
        }
    }
}

impl Error for RenderPanelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelRect(err) => Some(err),
            Self::RenderRequest(err) => Some(err),
        }
    }
}

impl From<PixelRectError> for RenderPanelError {
    fn from(err: PixelRectError) -> Self {
        Self::PixelRect(err)
    }
}

impl From<RenderRequestError> for RenderPanelError {
    fn from(err: RenderRequestError) -> Self {
        Self::RenderRequest(err)
    }
}

/// Renders `requests` in order onto a black panel sized by `config`.
pub fn render_stars(config: &PanelConfig, requests: &[RenderRequest]) -> Result<PixelBuffer, RenderPanelError> {
    let size = config.panel_size();
    let panel_rect = PixelRect::with_size(Point::new(0, 0), size, size)?;
    let mut surface = RasterSurface::new(PixelBuffer::new(panel_rect));

    surface.fill(Colour::BLACK);

    for request in requests {
        debug!("Drawing {}", request);
        draw_star(&mut surface, config, request);
    }

    Ok(surface.into_buffer())
}

/// Renders the four-quadrant star panel.
pub fn render_panel(config: &PanelConfig) -> Result<PixelBuffer, RenderPanelError> {
    let scene = default_scene(config)?;

    render_stars(config, &scene)
}
