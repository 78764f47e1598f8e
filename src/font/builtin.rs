//! A small uppercase stick font, drawn on a 4x6 grid.

use once_cell::sync::Lazy;

use crate::geometry::Point;

use super::{Glyph, Stroke, StrokeFont};

/// Grid units to font units
const GRID_SCALE: f32 = 0.25;

/// Advance of every glyph, in grid units
const ADVANCE: f32 = 5.0;

type Strokes = &'static [&'static [(f32, f32)]];

const GLYPHS: &[(char, Strokes)] = &[
    (' ', &[]),
    ('A', &[&[(0.0, 0.0), (2.0, 6.0), (4.0, 0.0)], &[(1.0, 3.0), (3.0, 3.0)]]),
    (
        'B',
        &[
            &[(0.0, 0.0), (0.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 4.0), (3.0, 3.0), (0.0, 3.0)],
            &[(3.0, 3.0), (4.0, 2.0), (4.0, 1.0), (3.0, 0.0), (0.0, 0.0)],
        ],
    ),
    ('C', &[&[(4.0, 6.0), (0.0, 6.0), (0.0, 0.0), (4.0, 0.0)]]),
    (
        'D',
        &[&[(0.0, 0.0), (0.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 1.0), (3.0, 0.0), (0.0, 0.0)]],
    ),
    ('E', &[&[(4.0, 6.0), (0.0, 6.0), (0.0, 0.0), (4.0, 0.0)], &[(0.0, 3.0), (3.0, 3.0)]]),
    ('F', &[&[(4.0, 6.0), (0.0, 6.0), (0.0, 0.0)], &[(0.0, 3.0), (3.0, 3.0)]]),
    ('G', &[&[(4.0, 6.0), (0.0, 6.0), (0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (2.0, 3.0)]]),
    ('H', &[&[(0.0, 0.0), (0.0, 6.0)], &[(4.0, 0.0), (4.0, 6.0)], &[(0.0, 3.0), (4.0, 3.0)]]),
    ('I', &[&[(0.0, 6.0), (4.0, 6.0)], &[(2.0, 6.0), (2.0, 0.0)], &[(0.0, 0.0), (4.0, 0.0)]]),
    ('J', &[&[(4.0, 6.0), (4.0, 0.0), (0.0, 0.0), (0.0, 2.0)]]),
    ('K', &[&[(0.0, 0.0), (0.0, 6.0)], &[(4.0, 6.0), (0.0, 3.0), (4.0, 0.0)]]),
    ('L', &[&[(0.0, 6.0), (0.0, 0.0), (4.0, 0.0)]]),
    ('M', &[&[(0.0, 0.0), (0.0, 6.0), (2.0, 3.0), (4.0, 6.0), (4.0, 0.0)]]),
    ('N', &[&[(0.0, 0.0), (0.0, 6.0), (4.0, 0.0), (4.0, 6.0)]]),
    ('O', &[&[(0.0, 0.0), (0.0, 6.0), (4.0, 6.0), (4.0, 0.0), (0.0, 0.0)]]),
    ('P', &[&[(0.0, 0.0), (0.0, 6.0), (4.0, 6.0), (4.0, 3.0), (0.0, 3.0)]]),
    (
        'Q',
        &[&[(0.0, 0.0), (0.0, 6.0), (4.0, 6.0), (4.0, 0.0), (0.0, 0.0)], &[(2.0, 2.0), (4.0, -1.0)]],
    ),
    ('R', &[&[(0.0, 0.0), (0.0, 6.0), (4.0, 6.0), (4.0, 3.0), (0.0, 3.0), (4.0, 0.0)]]),
    ('S', &[&[(4.0, 6.0), (0.0, 6.0), (0.0, 3.0), (4.0, 3.0), (4.0, 0.0), (0.0, 0.0)]]),
    ('T', &[&[(0.0, 6.0), (4.0, 6.0)], &[(2.0, 6.0), (2.0, 0.0)]]),
    ('U', &[&[(0.0, 6.0), (0.0, 0.0), (4.0, 0.0), (4.0, 6.0)]]),
    ('V', &[&[(0.0, 6.0), (2.0, 0.0), (4.0, 6.0)]]),
    ('W', &[&[(0.0, 6.0), (1.0, 0.0), (2.0, 3.0), (3.0, 0.0), (4.0, 6.0)]]),
    ('X', &[&[(0.0, 0.0), (4.0, 6.0)], &[(0.0, 6.0), (4.0, 0.0)]]),
    ('Y', &[&[(0.0, 6.0), (2.0, 3.0), (4.0, 6.0)], &[(2.0, 3.0), (2.0, 0.0)]]),
    ('Z', &[&[(0.0, 6.0), (4.0, 6.0), (0.0, 0.0), (4.0, 0.0)]]),
];

static BUILTIN: Lazy<StrokeFont> = Lazy::new(|| {
    GLYPHS
        .iter()
        .fold(StrokeFont::new(u32::from(' ')), |font, (c, strokes)| {
            let strokes = strokes
                .iter()
                .map(|points| {
                    Stroke::new(
                        points
                            .iter()
                            .map(|&p| Point::from(p) * GRID_SCALE)
                            .collect(),
                    )
                })
                .collect();

            font.with_glyph(*c, Glyph::new(strokes, ADVANCE * GRID_SCALE))
        })
});

/// Space and the uppercase latin letters. Anything else has no outline.
pub fn builtin() -> &'static StrokeFont {
    &BUILTIN
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::font::OutlineProvider;

    #[test]
    fn covers_uppercase_and_space() {
        let font = builtin();

        for c in ('A'..='Z').chain(std::iter::once(' ')) {
            let glyph = font.outline_for(u32::from(c)).unwrap();
            assert_eq!(glyph.width(), 1.25, "{:?}", c);
        }
    }

    #[test]
    fn lowercase_is_missing() {
        assert!(builtin().outline_for(u32::from('a')).is_none());
    }

    #[test]
    fn space_has_no_segments() {
        let space = builtin().outline_for(u32::from(' ')).unwrap();

        assert_eq!(space.segments().count(), 0);
    }

    #[test]
    fn grid_is_scaled() {
        let a = builtin().outline_for(u32::from('A')).unwrap();

        assert_eq!(a.strokes()[0].points()[1], Point::new(0.5, 1.5));
    }
}
