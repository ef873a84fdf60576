//! Star arm geometry.
//!
//! A star is `line_count + 1` arms. Arm `i` is eight segments joining points
//! that walk outward from the quadrant's centre along its axes and diagonals,
//! each paired with its reflection so the arm is symmetric about the centre.
//! All arithmetic is integer and truncating, so a given request always
//! produces the same pixels.

use std::f64::consts::SQRT_2;

use crate::core::data::colour::Colour;
use crate::core::data::line_segment::LineSegment;
use crate::core::data::panel_config::PanelConfig;
use crate::core::data::point::Point;
use crate::core::stars::render_request::RenderRequest;

pub const SEGMENTS_PER_ARM: usize = 8;

/// Quadrant-local coordinates of one arm, before the quadrant offset.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ArmGeometry {
    pub center: i32,
    pub y_start: i32,
    pub y_start_ref: i32,
    pub x_diag: i32,
    pub y_diag: i32,
    pub y_diag_ref: i32,
    pub center_x: i32,
    pub center_y: i32,
}

impl ArmGeometry {
    #[must_use]
    pub fn new(config: &PanelConfig, request: &RenderRequest, index: u32) -> Self {
        let quadrant_size = config.quadrant_size() as i32;
        let center = config.center();
        // Counts past i32::MAX wrap negative, matching 32-bit int geometry
        let increment = center.wrapping_div(request.line_count() as i32);
        let diag_step = (f64::from(increment) / SQRT_2) as i32;
        let i = index as i32;

        let twist = request.twist(index);
        let start = i.wrapping_mul(increment);
        let diag = i.wrapping_mul(diag_step);

        Self {
            center,
            y_start: start,
            y_start_ref: quadrant_size.wrapping_sub(start),
            x_diag: center.wrapping_add(diag),
            y_diag: center.wrapping_sub(diag),
            y_diag_ref: center.wrapping_add(diag),
            center_x: center.wrapping_add(twist),
            center_y: center.wrapping_sub(twist),
        }
    }

    /// Mirror of an x coordinate through the quadrant centre.
    fn mirror(&self, x: i32) -> i32 {
        self.center.wrapping_sub(x.wrapping_sub(self.center))
    }

    /// The eight segments of this arm, shifted onto the panel by `offset`.
    #[must_use]
    pub fn segments(&self, offset: Point) -> [LineSegment; SEGMENTS_PER_ARM] {
        let at = |x: i32, y: i32| offset.offset(x, y);

        let top = at(self.center_x, self.y_start);
        let bottom = at(self.center_x, self.y_start_ref);
        let right = at(self.y_start_ref, self.center_y);
        let left = at(self.mirror(self.y_start_ref), self.center_y);

        [
            LineSegment::new(top, at(self.x_diag, self.y_diag)),
            LineSegment::new(right, at(self.x_diag, self.y_diag)),
            LineSegment::new(right, at(self.y_diag_ref, self.y_diag_ref)),
            LineSegment::new(top, at(self.mirror(self.x_diag), self.y_diag)),
            LineSegment::new(bottom, at(self.x_diag, self.y_diag_ref)),
            LineSegment::new(bottom, at(self.y_diag, self.x_diag)),
            LineSegment::new(left, at(self.mirror(self.y_diag_ref), self.y_diag_ref)),
            LineSegment::new(left, at(self.mirror(self.x_diag), self.y_diag)),
        ]
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StarArm {
    pub index: u32,
    pub colour: Colour,
    pub segments: [LineSegment; SEGMENTS_PER_ARM],
}

#[must_use]
pub fn star_arm(config: &PanelConfig, request: &RenderRequest, index: u32) -> StarArm {
    let geometry = ArmGeometry::new(config, request, index);

    StarArm {
        index,
        colour: request.style().colour(index, request.line_count()),
        segments: geometry.segments(request.offset()),
    }
}

/// Lazily yields arms `0..=line_count` of the requested star.
pub fn star_arms(config: PanelConfig, request: RenderRequest) -> impl Iterator<Item = StarArm> {
    (0..=request.line_count()).map(move |index| star_arm(&config, &request, index))
}
