mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::cli::star_panel::StarPanelController;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::render_panel::render_panel::{RenderPanelError, render_panel};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::line_segment::LineSegment;
pub use crate::core::data::panel_config::{PanelConfig, PanelConfigError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::stars::draw_command::{DrawCommand, draw_commands};
pub use crate::core::stars::render_request::{RenderRequest, RenderRequestError};
pub use crate::core::stars::style::StarStyle;
#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
pub use presenters::file::ppm::PpmFilePresenter;
