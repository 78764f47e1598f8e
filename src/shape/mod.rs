//! Compiles characters and words into flat lists of segments.
//!
//! Segment order is significant: the packed texture is indexed purely by
//! position, so every operation here keeps segments in insertion order.

use crate::{
    font::OutlineProvider,
    geometry::{BoundingBox, Line, Point},
};

mod center;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shape {
    segments: Vec<Line>,

    /// Total horizontal advance consumed so far. Tracked separately from the
    /// geometry; shifting a shape does not change it.
    width: f32,
}

impl Shape {
    pub const fn empty() -> Self {
        Self {
            segments: Vec::new(),
            width: 0.0,
        }
    }

    pub fn new(segments: Vec<Line>, width: f32) -> Self {
        Self { segments, width }
    }

    /// The flattened outline of a single character. A code the font has no
    /// outline for becomes a zero-width gap.
    pub fn for_glyph<P: OutlineProvider + ?Sized>(font: &P, code: u32) -> Self {
        match font.outline_for(code) {
            Some(glyph) => Self {
                segments: glyph.segments().collect(),
                width: glyph.width(),
            },
            None => {
                log::trace!("no outline for code {:#x}", code);
                Self::empty()
            }
        }
    }

    /// Lays out `word` left to right, each glyph advancing by the width of
    /// everything before it
    pub fn for_word<P: OutlineProvider + ?Sized>(font: &P, word: &str) -> Self {
        word.chars().fold(Self::empty(), |shape, c| {
            shape.concat(Self::for_glyph(font, u32::from(c)))
        })
    }

    /// Moves every point `amount` along x. `width` is left alone.
    pub fn shift_right(mut self, amount: f32) -> Self {
        for segment in &mut self.segments {
            *segment = segment.offset_x(amount);
        }

        self
    }

    /// Appends `other` after this shape's advance
    pub fn concat(mut self, other: Shape) -> Self {
        let width = self.width + other.width;
        let other = other.shift_right(self.width);

        self.segments.extend(other.segments);
        self.width = width;

        self
    }

    pub fn segments(&self) -> &[Line] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn start_points(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.segments.iter().map(|segment| segment.start)
    }

    pub fn end_points(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.segments.iter().map(|segment| segment.end)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox::new();

        for segment in &self.segments {
            bbox.merge(segment.bounding_box());
        }

        bbox
    }

    /// The rightmost x over all start and end points, or `None` without
    /// segments
    pub fn max_x(&self) -> Option<f32> {
        let bbox = self.bounding_box();

        if bbox.is_empty() {
            None
        } else {
            Some(bbox.max().x)
        }
    }
}
