use super::Shape;

impl Shape {
    /// Moves the shape left by half its rightmost x.
    ///
    /// Only the right edge is considered, so this centers on the origin only
    /// for shapes whose geometry starts at x = 0. `width` is not adjusted. A
    /// shape without segments has no right edge and is returned unchanged.
    pub fn center_horizontally(self) -> Self {
        match self.max_x() {
            Some(max_x) => self.shift_right(-(max_x / 2.0)),
            None => self,
        }
    }
}
