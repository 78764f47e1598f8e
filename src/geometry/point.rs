use std::ops::{Add, Mul};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Moves the point horizontally, leaving `y` bit-for-bit untouched
    pub fn offset_x(self, dx: f32) -> Self {
        Self::new(self.x + dx, self.y)
    }
}

impl Add<Point> for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Self::Output {
        Point {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn offset_x_keeps_y() {
        let p = Point::new(1.5, -0.0).offset_x(2.0);

        assert_eq!(p.x, 3.5);
        assert!(p.y.is_sign_negative());
    }

    #[test]
    fn scale_and_translate() {
        let p = Point::new(1.0, 2.0) * 0.5 + Point::new(1.0, 1.0);

        assert_eq!(p, Point::new(1.5, 2.0));
    }
}
