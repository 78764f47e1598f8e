use crate::geometry::{Line, Point};

/// One continuous polyline of a glyph
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consecutive point pairs, in stroke order. A stroke of `n` points yields
    /// `n - 1` segments, so a single-point stroke yields none.
    pub fn segments(&self) -> impl Iterator<Item = Line> + '_ {
        self.points
            .windows(2)
            .map(|pair| Line::new(pair[0], pair[1]))
    }
}

impl From<&[(f32, f32)]> for Stroke {
    fn from(points: &[(f32, f32)]) -> Self {
        Self::new(points.iter().copied().map(Point::from).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub(crate) strokes: Vec<Stroke>,

    /// The horizontal advance: how far the next glyph starts from this one
    pub(crate) width: f32,
}

impl Glyph {
    pub const fn empty() -> Self {
        Self {
            strokes: Vec::new(),
            width: 0.0,
        }
    }

    pub fn new(strokes: Vec<Stroke>, width: f32) -> Self {
        Self { strokes, width }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Every stroke flattened into segments, strokes in order
    pub fn segments(&self) -> impl Iterator<Item = Line> + '_ {
        self.strokes.iter().flat_map(Stroke::segments)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stroke_segments_pair_consecutive_points() {
        let stroke = Stroke::from(&[(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)][..]);

        let segments = stroke.segments().collect::<Vec<_>>();

        assert_eq!(
            segments,
            vec![
                Line::new(Point::new(0.0, 0.0), Point::new(1.0, 2.0)),
                Line::new(Point::new(1.0, 2.0), Point::new(2.0, 0.0)),
            ]
        );
    }

    #[test]
    fn single_point_stroke_has_no_segments() {
        let stroke = Stroke::from(&[(1.0, 1.0)][..]);

        assert_eq!(stroke.segments().count(), 0);
    }

    #[test]
    fn glyph_segments_follow_stroke_order() {
        let glyph = Glyph::new(
            vec![
                Stroke::from(&[(0.0, 0.0), (0.0, 1.0)][..]),
                Stroke::from(&[(5.0, 5.0)][..]),
                Stroke::from(&[(1.0, 0.0), (1.0, 1.0), (2.0, 1.0)][..]),
            ],
            2.0,
        );

        let starts = glyph.segments().map(|l| l.start).collect::<Vec<_>>();

        assert_eq!(
            starts,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0)
            ]
        );
        assert_eq!(Glyph::empty().segments().count(), 0);
    }
}
