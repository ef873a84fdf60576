use crate::core::actions::draw_star::ports::draw_surface::DrawSurface;
use crate::core::data::panel_config::PanelConfig;
use crate::core::stars::draw_command::{DrawCommand, draw_commands};
use crate::core::stars::render_request::RenderRequest;

/// Replays one star's draw commands onto `surface`.
pub fn draw_star<S: DrawSurface + ?Sized>(surface: &mut S, config: &PanelConfig, request: &RenderRequest) {
    for command in draw_commands(*config, *request) {
        match command {
            DrawCommand::SetColour(colour) => surface.set_colour(colour),
            DrawCommand::Line(segment) => surface.draw_line(segment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::line_segment::LineSegment;
    use crate::core::data::point::Point;
    use crate::core::stars::style::StarStyle;

    #[derive(Default)]
    struct RecordingSurface {
        colour: Option<Colour>,
        colours: Vec<Colour>,
        lines: Vec<(Colour, LineSegment)>,
    }

    impl DrawSurface for RecordingSurface {
        fn set_colour(&mut self, colour: Colour) {
            self.colour = Some(colour);
            self.colours.push(colour);
        }

        fn draw_line(&mut self, segment: LineSegment) {
            let colour = self.colour.expect("colour is set before the first line");
            self.lines.push((colour, segment));
        }
    }

    fn draw(lines: u32, twist: i32, style: StarStyle) -> RecordingSurface {
        let mut surface = RecordingSurface::default();
        let request = RenderRequest::new(Point::new(0, 0), lines, twist, style).unwrap();

        draw_star(&mut surface, &PanelConfig::default(), &request);

        surface
    }

    #[test]
    fn test_classic_star_runs_thirty_one_magenta_arms() {
        let surface = draw(30, 0, StarStyle::Classic);

        assert_eq!(surface.colours.len(), 31);
        assert_eq!(surface.lines.len(), 31 * 8);
        assert!(surface.lines.iter().all(|(c, _)| *c == Colour::MAGENTA));
    }

    #[test]
    fn test_swirl_star_is_all_magenta() {
        let surface = draw(30, 5, StarStyle::Swirl);

        assert!(surface.colours.iter().all(|&c| c == Colour::MAGENTA));
    }

    #[test]
    fn test_rainbow_star_lines_follow_their_arm_colour() {
        let surface = draw(30, 0, StarStyle::Rainbow);

        for (i, chunk) in surface.lines.chunks(8).enumerate() {
            let expected = StarStyle::Rainbow.colour(i as u32, 30);
            assert!(chunk.iter().all(|(c, _)| *c == expected));
        }
        assert_eq!(surface.colours.first(), Some(&Colour::RED));
        assert_eq!(surface.colours.last(), Some(&Colour::RED));
    }

    #[test]
    fn test_first_arm_meets_at_centre() {
        let surface = draw(30, 0, StarStyle::Classic);

        // At i = 0 every diagonal point collapses onto the centre
        for (_, segment) in &surface.lines[..8] {
            assert_eq!(segment.end, Point::new(150, 150));
        }
    }
}
