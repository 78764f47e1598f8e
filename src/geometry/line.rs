use super::{point::Point, BoundingBox};

/// A single straight segment, the unit the effect animates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn offset_x(self, dx: f32) -> Self {
        Self {
            start: self.start.offset_x(dx),
            end: self.end.offset_x(dx),
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox::new();

        bbox.add_point(self.start);
        bbox.add_point(self.end);

        bbox
    }
}
