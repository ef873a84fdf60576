#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_adds_both_axes() {
        let point = Point::new(10, 20).offset(300, -5);

        assert_eq!(point, Point { x: 310, y: 15 });
    }

    #[test]
    fn test_offset_wraps_at_i32_limits() {
        let point = Point::new(480, -10).offset(i32::MAX, i32::MIN);

        assert_eq!(point, Point::new(i32::MIN + 479, i32::MAX - 9));
    }
}
