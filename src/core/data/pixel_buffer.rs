use std::error::Error;
use std::fmt;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

const BYTES_PER_PIXEL: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds { pixel: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of bounds top:{}, left:{}, bottom:{}, right:{}",
                    pixel.x,
                    pixel.y,
                    pixel_rect.top_left().y,
                    pixel_rect.top_left().x,
                    pixel_rect.bottom_right().y,
                    pixel_rect.bottom_right().x
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Packed RGB raster covering a [`PixelRect`], row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: Vec<u8>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self::filled(pixel_rect, Colour::BLACK)
    }

    #[must_use]
    pub fn filled(pixel_rect: PixelRect, colour: Colour) -> Self {
        let mut buffer = Self {
            pixel_rect,
            buffer: vec![0; pixel_rect.area() * BYTES_PER_PIXEL],
        };
        buffer.fill(colour);
        buffer
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn fill(&mut self, colour: Colour) {
        for pixel in self.buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[0] = colour.r;
            pixel[1] = colour.g;
            pixel[2] = colour.b;
        }
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel).ok_or(PixelBufferError::PixelOutsideBounds {
            pixel,
            pixel_rect: self.pixel_rect,
        })?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        self.index_of(pixel).map(|index| {
            Colour::new(
                self.buffer[index],
                self.buffer[index + 1],
                self.buffer[index + 2],
            )
        })
    }

    fn index_of(&self, pixel: Point) -> Option<usize> {
        if !self.pixel_rect.contains_point(pixel) {
            return None;
        }

        let relative_x = (pixel.x - self.pixel_rect.top_left().x) as usize;
        let relative_y = (pixel.y - self.pixel_rect.top_left().y) as usize;

        Some((relative_y * self.pixel_rect.width() as usize + relative_x) * BYTES_PER_PIXEL)
    }
}
