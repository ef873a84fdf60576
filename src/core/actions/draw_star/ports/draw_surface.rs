use crate::core::data::colour::Colour;
use crate::core::data::line_segment::LineSegment;

/// A canvas that accepts colour changes and line draws, in call order.
///
/// Lines are drawn in the most recently set colour. Coordinates are panel
/// pixels; surfaces clip anything outside their own bounds.
pub trait DrawSurface {
    fn set_colour(&mut self, colour: Colour);

    fn draw_line(&mut self, segment: LineSegment);
}
