pub use self::{
    builtin::builtin,
    glyph::{Glyph, Stroke},
    stroke_font::StrokeFont,
};

mod builtin;
mod glyph;
mod stroke_font;

/// Source of already-parsed glyph outlines.
///
/// Lookups never fail: a code the font has no entry for yields `None`, and the
/// caller decides what an absent glyph means.
pub trait OutlineProvider {
    fn outline_for(&self, code: u32) -> Option<&Glyph>;
}

impl<P: OutlineProvider + ?Sized> OutlineProvider for &P {
    fn outline_for(&self, code: u32) -> Option<&Glyph> {
        (**self).outline_for(code)
    }
}

/// `'A'` is a caret of width 2, `'B'` a unit baseline of width 1
#[cfg(test)]
pub(crate) fn caret_font() -> StrokeFont {
    StrokeFont::new(0)
        .with_glyph(
            'A',
            Glyph::new(
                vec![Stroke::from(&[(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)][..])],
                2.0,
            ),
        )
        .with_glyph(
            'B',
            Glyph::new(vec![Stroke::from(&[(0.0, 0.0), (1.0, 0.0)][..])], 1.0),
        )
}
