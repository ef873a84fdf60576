use crate::core::actions::draw_star::ports::draw_surface::DrawSurface;
use crate::core::data::colour::Colour;
use crate::core::data::line_segment::LineSegment;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;

/// [`DrawSurface`] that rasterises lines into a [`PixelBuffer`].
///
/// Pixels that fall outside the buffer are dropped, so a segment touching
/// the panel's far edge draws without error.
#[derive(Debug)]
pub struct RasterSurface {
    buffer: PixelBuffer,
    colour: Colour,
}

impl RasterSurface {
    #[must_use]
    pub fn new(buffer: PixelBuffer) -> Self {
        Self {
            buffer,
            colour: Colour::WHITE,
        }
    }

    pub fn fill(&mut self, colour: Colour) {
        self.buffer.fill(colour);
    }

    #[must_use]
    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }

    fn plot(&mut self, point: Point) {
        // Steps are clipped to the surface first, so this never misses
        let _ = self.buffer.set_pixel(point, self.colour);
    }
}

/// One axis of a line walk.
#[derive(Debug, Copy, Clone)]
struct Axis {
    origin: i64,
    distance: i64,
    sign: i64,
    min: i64,
    max: i64,
}

impl Axis {
    fn new(from: i32, to: i32, min: i32, max: i32) -> Self {
        let delta = i64::from(to) - i64::from(from);

        Self {
            origin: from.into(),
            distance: delta.abs(),
            sign: if delta < 0 { -1 } else { 1 },
            min: min.into(),
            max: max.into(),
        }
    }

    /// Inclusive range of step counts that keep this axis on the surface.
    fn steps_on_surface(&self) -> (i64, i64) {
        if self.sign > 0 {
            (self.min - self.origin, self.max - self.origin)
        } else {
            (self.origin - self.max, self.origin - self.min)
        }
    }

    fn at(&self, steps: i64) -> i32 {
        (self.origin + self.sign * steps) as i32
    }
}

/// Minor-axis steps taken after `step` major-axis steps, rounded half up.
fn minor_steps(step: i64, major: &Axis, minor: &Axis) -> i64 {
    if major.distance == 0 {
        return 0;
    }

    let numerator = 2 * i128::from(step) * i128::from(minor.distance) + i128::from(major.distance);
    (numerator / (2 * i128::from(major.distance))) as i64
}

/// Major-axis steps whose pixel lands on the surface, or `None` if the line
/// misses it entirely.
fn visible_steps(major: &Axis, minor: &Axis) -> Option<(i64, i64)> {
    let (major_lo, major_hi) = major.steps_on_surface();
    let mut first = i128::from(major_lo.max(0));
    let mut last = i128::from(major_hi.min(major.distance));

    let (minor_lo, minor_hi) = minor.steps_on_surface();
    if minor.distance == 0 {
        if minor_lo > 0 || minor_hi < 0 {
            return None;
        }
    } else {
        let dm = i128::from(major.distance);
        let dn = i128::from(minor.distance);
        let lo_numerator = 2 * dm * i128::from(minor_lo) - dm;
        let hi_numerator = 2 * dm * (i128::from(minor_hi) + 1) - dm - 1;

        first = first.max(-(-lo_numerator).div_euclid(2 * dn));
        last = last.min(hi_numerator.div_euclid(2 * dn));
    }

    (first <= last).then_some((first as i64, last as i64))
}

impl DrawSurface for RasterSurface {
    fn set_colour(&mut self, colour: Colour) {
        self.colour = colour;
    }

    fn draw_line(&mut self, segment: LineSegment) {
        let LineSegment { start, end } = segment;
        let rect = self.buffer.pixel_rect();
        let (top_left, bottom_right) = (rect.top_left(), rect.bottom_right());

        let x = Axis::new(start.x, end.x, top_left.x, bottom_right.x);
        let y = Axis::new(start.y, end.y, top_left.y, bottom_right.y);
        let x_major = x.distance >= y.distance;
        let (major, minor) = if x_major { (x, y) } else { (y, x) };

        let Some((first, last)) = visible_steps(&major, &minor) else {
            return;
        };

        for step in first..=last {
            let along = major.at(step);
            let across = minor.at(minor_steps(step, &major, &minor));
            let point = if x_major {
                Point::new(along, across)
            } else {
                Point::new(across, along)
            };
            self.plot(point);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;
    use proptest::prelude::*;
    use std::time::{Duration, Instant};

    fn surface(width: u32, height: u32) -> RasterSurface {
        let rect = PixelRect::with_size(Point::new(0, 0), width, height).unwrap();
        RasterSurface::new(PixelBuffer::new(rect))
    }

    fn lit(surface: RasterSurface) -> Vec<Point> {
        let buffer = surface.into_buffer();
        let rect = buffer.pixel_rect();
        let mut points = Vec::new();

        for y in 0..rect.height() as i32 {
            for x in 0..rect.width() as i32 {
                let point = Point::new(x, y);
                if buffer.pixel(point) != Some(Colour::BLACK) {
                    points.push(point);
                }
            }
        }

        points
    }

    #[test]
    fn test_new_surface_draws_white() {
        let mut surface = surface(2, 2);

        surface.draw_line(LineSegment::new(Point::new(1, 1), Point::new(1, 1)));

        assert_eq!(surface.into_buffer().pixel(Point::new(1, 1)), Some(Colour::WHITE));
    }

    #[test]
    fn test_horizontal_line_includes_both_endpoints() {
        let mut surface = surface(5, 3);
        surface.set_colour(Colour::MAGENTA);

        surface.draw_line(LineSegment::new(Point::new(1, 1), Point::new(3, 1)));

        let buffer = surface.into_buffer();
        assert_eq!(buffer.pixel(Point::new(1, 1)), Some(Colour::MAGENTA));
        assert_eq!(buffer.pixel(Point::new(2, 1)), Some(Colour::MAGENTA));
        assert_eq!(buffer.pixel(Point::new(3, 1)), Some(Colour::MAGENTA));
        assert_eq!(buffer.pixel(Point::new(4, 1)), Some(Colour::BLACK));
        assert_eq!(buffer.pixel(Point::new(0, 1)), Some(Colour::BLACK));
    }

    #[test]
    fn test_diagonal_line_steps_both_axes() {
        let mut surface = surface(4, 4);

        surface.draw_line(LineSegment::new(Point::new(3, 3), Point::new(0, 0)));

        assert_eq!(
            lit(surface),
            vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2), Point::new(3, 3)]
        );
    }

    #[test]
    fn test_steep_line_has_one_pixel_per_row() {
        let mut surface = surface(3, 5);

        surface.draw_line(LineSegment::new(Point::new(0, 0), Point::new(2, 4)));

        let points = lit(surface);
        assert_eq!(points.len(), 5);
        for y in 0..5 {
            assert_eq!(points.iter().filter(|p| p.y == y).count(), 1);
        }
    }

    #[test]
    fn test_degenerate_line_plots_single_pixel() {
        let mut surface = surface(3, 3);

        surface.draw_line(LineSegment::new(Point::new(1, 2), Point::new(1, 2)));

        assert_eq!(lit(surface), vec![Point::new(1, 2)]);
    }

    #[test]
    fn test_line_leaving_surface_is_clipped() {
        let mut surface = surface(3, 3);

        surface.draw_line(LineSegment::new(Point::new(1, 1), Point::new(6, 1)));

        assert_eq!(lit(surface), vec![Point::new(1, 1), Point::new(2, 1)]);
    }

    #[test]
    fn test_fill_then_colour_switch() {
        let mut surface = surface(2, 1);
        surface.fill(Colour::RED);
        surface.set_colour(Colour::BLACK);

        surface.draw_line(LineSegment::new(Point::new(0, 0), Point::new(0, 0)));

        let buffer = surface.into_buffer();
        assert_eq!(buffer.pixel(Point::new(0, 0)), Some(Colour::BLACK));
        assert_eq!(buffer.pixel(Point::new(1, 0)), Some(Colour::RED));
    }

    #[test]
    fn test_steep_line_rounds_half_steps_up() {
        let mut surface = surface(3, 5);

        surface.draw_line(LineSegment::new(Point::new(0, 0), Point::new(2, 4)));

        assert_eq!(
            lit(surface),
            vec![
                Point::new(0, 0),
                Point::new(1, 1),
                Point::new(1, 2),
                Point::new(2, 3),
                Point::new(2, 4),
            ]
        );
    }

    #[test]
    fn test_line_missing_surface_draws_nothing() {
        let mut surface = surface(3, 3);

        surface.draw_line(LineSegment::new(Point::new(-5, 4), Point::new(10, 9)));
        surface.draw_line(LineSegment::new(Point::new(5, -1), Point::new(5, 2)));

        assert!(lit(surface).is_empty());
    }

    #[test]
    fn test_extreme_segments_only_walk_visible_pixels() {
        let mut surface = surface(3, 3);
        let started = Instant::now();

        surface.draw_line(LineSegment::new(
            Point::new(-2_000_000_000, 1),
            Point::new(2_000_000_000, 1),
        ));
        surface.draw_line(LineSegment::new(
            Point::new(i32::MAX, i32::MAX),
            Point::new(i32::MIN, i32::MIN),
        ));

        assert!(started.elapsed() < Duration::from_secs(1));
        assert_eq!(
            lit(surface),
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );
    }

    /// Every step of the line, on or off the surface, in walk order.
    fn full_walk(start: Point, end: Point) -> Vec<Point> {
        let dx = i64::from(end.x) - i64::from(start.x);
        let dy = i64::from(end.y) - i64::from(start.y);
        let (major, minor) = if dx.abs() >= dy.abs() { (dx, dy) } else { (dy, dx) };

        (0..=major.abs())
            .map(|k| {
                let offset = if major == 0 {
                    0
                } else {
                    (2 * k * minor.abs() + major.abs()) / (2 * major.abs())
                };
                let along = k * major.signum();
                let across = offset * minor.signum();
                if dx.abs() >= dy.abs() {
                    (i64::from(start.x) + along, i64::from(start.y) + across)
                } else {
                    (i64::from(start.x) + across, i64::from(start.y) + along)
                }
            })
            .map(|(x, y)| Point::new(x as i32, y as i32))
            .collect()
    }

    proptest! {
        #[test]
        fn clipped_walk_lights_the_visible_part_of_the_full_walk(
            x0 in -20i32..20, y0 in -20i32..20, x1 in -20i32..20, y1 in -20i32..20,
        ) {
            let mut surface = surface(7, 5);
            let rect = PixelRect::with_size(Point::new(0, 0), 7, 5).unwrap();
            let start = Point::new(x0, y0);
            let end = Point::new(x1, y1);

            surface.draw_line(LineSegment::new(start, end));

            let mut expected: Vec<Point> = full_walk(start, end)
                .into_iter()
                .filter(|p| rect.contains_point(*p))
                .collect();
            expected.sort_by_key(|p| (p.y, p.x));
            expected.dedup();
            prop_assert_eq!(lit(surface), expected);
        }
    }
}
