use crate::core::data::colour::Colour;
use crate::core::data::panel_config::PanelConfig;
use crate::core::data::point::Point;
use crate::core::stars::render_request::{RenderRequest, RenderRequestError};
use crate::core::stars::style::StarStyle;

#[cfg_attr(not(feature = "gui"), allow(dead_code))]
pub const LABEL_TEXT: &str = "Yabtse Amente";

/// Text drawn over the finished panel.
#[cfg_attr(not(feature = "gui"), allow(dead_code))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: &'static str,
    /// Left end of the text baseline.
    pub anchor: Point,
    pub colour: Colour,
}

/// The four quadrant stars, top-left, top-right, bottom-left, bottom-right.
pub fn default_scene(config: &PanelConfig) -> Result<[RenderRequest; 4], RenderRequestError> {
    let q = config.quadrant_size() as i32;
    let lines = config.line_count();

    Ok([
        RenderRequest::new(Point::new(0, 0), lines, 0, StarStyle::Classic)?,
        RenderRequest::new(Point::new(q, 0), lines, 5, StarStyle::Swirl)?,
        RenderRequest::new(Point::new(0, q), lines.wrapping_mul(2), 2, StarStyle::Dense)?,
        RenderRequest::new(Point::new(q, q), lines, 0, StarStyle::Rainbow)?,
    ])
}

#[must_use]
#[cfg_attr(not(feature = "gui"), allow(dead_code))]
pub fn default_label(config: &PanelConfig) -> Label {
    let size = config.panel_size() as i32;

    Label {
        text: LABEL_TEXT,
        anchor: Point::new(size - 120, size - 20),
        colour: Colour::WHITE,
    }
}
