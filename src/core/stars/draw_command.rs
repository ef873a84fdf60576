use std::iter;

use crate::core::data::colour::Colour;
use crate::core::data::line_segment::LineSegment;
use crate::core::data::panel_config::PanelConfig;
use crate::core::stars::geometry::star_arms;
use crate::core::stars::render_request::RenderRequest;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    SetColour(Colour),
    Line(LineSegment),
}

/// Flattens a star into surface commands: each arm's colour, then its lines.
pub fn draw_commands(config: PanelConfig, request: RenderRequest) -> impl Iterator<Item = DrawCommand> {
    star_arms(config, request).flat_map(|arm| {
        iter::once(DrawCommand::SetColour(arm.colour))
            .chain(arm.segments.into_iter().map(DrawCommand::Line))
    })
}
