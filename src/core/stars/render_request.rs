use std::error::Error;
use std::fmt;

use crate::core::data::point::Point;
use crate::core::stars::style::StarStyle;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderRequestError {
    ZeroLineCount,
    NegativeOffset { offset: Point },
}

impl fmt::Display for RenderRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLineCount => write!(f, "line count must be greater than zero"),
            Self::NegativeOffset { offset } => {
                write!(f, "quadrant offset must not be negative: x:{}, y:{}", offset.x, offset.y)
            }
        }
    }
}

impl Error for RenderRequestError {}

/// One star to draw: where its quadrant sits on the panel and how it looks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    offset: Point,
    line_count: u32,
    twist_factor: i32,
    style: StarStyle,
}

impl RenderRequest {
    pub fn new(
        offset: Point,
        line_count: u32,
        twist_factor: i32,
        style: StarStyle,
    ) -> Result<Self, RenderRequestError> {
        if line_count == 0 {
            return Err(RenderRequestError::ZeroLineCount);
        }

        if offset.x < 0 || offset.y < 0 {
            return Err(RenderRequestError::NegativeOffset { offset });
        }

        Ok(Self {
            offset,
            line_count,
            twist_factor,
            style,
        })
    }

    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    #[must_use]
    pub fn line_count(&self) -> u32 {
        self.line_count
    }

    #[must_use]
    pub fn twist_factor(&self) -> i32 {
        self.twist_factor
    }

    #[must_use]
    pub fn style(&self) -> StarStyle {
        self.style
    }

    #[must_use]
    pub fn twist(&self, index: u32) -> i32 {
        self.style.twist(index, self.twist_factor)
    }
}

impl fmt::Display for RenderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} star at ({}, {}), {} lines, twist {}",
            self.style, self.offset.x, self.offset.y, self.line_count, self.twist_factor
        )
    }
}
