use super::{Glyph, OutlineProvider};

/// A code-indexed glyph table.
///
/// Codes below `first_char`, or past the end of the table, have no outline.
/// Holes inside the table are allowed and behave the same way.
#[derive(Debug, Clone, Default)]
pub struct StrokeFont {
    /// The character code of the first entry in `glyphs`
    first_char: u32,
    glyphs: Vec<Option<Glyph>>,
}

impl StrokeFont {
    pub fn new(first_char: u32) -> Self {
        Self {
            first_char,
            glyphs: Vec::new(),
        }
    }

    /// A dense table: `glyphs[i]` is the outline for `first_char + i`
    pub fn from_table(first_char: u32, glyphs: Vec<Glyph>) -> Self {
        Self {
            first_char,
            glyphs: glyphs.into_iter().map(Some).collect(),
        }
    }

    /// Sets the outline for `c`, growing the table as needed. Codes below
    /// `first_char` cannot be stored and are ignored.
    pub fn with_glyph(mut self, c: char, glyph: Glyph) -> Self {
        self.insert(u32::from(c), glyph);
        self
    }

    pub fn insert(&mut self, code: u32, glyph: Glyph) {
        let Some(idx) = code.checked_sub(self.first_char) else {
            log::warn!(
                "dropping glyph for code {} below first char {}",
                code,
                self.first_char
            );
            return;
        };
        let idx = idx as usize;

        if idx >= self.glyphs.len() {
            self.glyphs.resize(idx + 1, None);
        }

        self.glyphs[idx] = Some(glyph);
    }

    pub fn first_char(&self) -> u32 {
        self.first_char
    }

    /// Number of codes the table spans, holes included
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl OutlineProvider for StrokeFont {
    fn outline_for(&self, code: u32) -> Option<&Glyph> {
        let idx = code.checked_sub(self.first_char)?;

        self.glyphs.get(idx as usize)?.as_ref()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::font::Stroke;

    fn bar(width: f32) -> Glyph {
        Glyph::new(vec![Stroke::from(&[(0.0, 0.0), (0.0, 1.0)][..])], width)
    }

    #[test]
    fn lookup_inside_table() {
        let font = StrokeFont::from_table(65, vec![bar(1.0), bar(2.0)]);

        assert_eq!(font.outline_for(65).map(Glyph::width), Some(1.0));
        assert_eq!(font.outline_for(66).map(Glyph::width), Some(2.0));
    }

    #[test]
    fn codes_outside_table_have_no_outline() {
        let font = StrokeFont::from_table(65, vec![bar(1.0)]);

        assert!(font.outline_for(64).is_none());
        assert!(font.outline_for(66).is_none());
        assert!(font.outline_for(u32::MAX).is_none());
    }

    #[test]
    fn with_glyph_leaves_holes() {
        let font = StrokeFont::new(32)
            .with_glyph('A', bar(1.0))
            .with_glyph('C', bar(3.0));

        assert_eq!(font.len(), 36);
        assert!(font.outline_for(u32::from('B')).is_none());
        assert_eq!(font.outline_for(u32::from('C')).map(Glyph::width), Some(3.0));
    }

    #[test]
    fn glyph_below_first_char_is_dropped() {
        let font = StrokeFont::new(65).with_glyph(' ', bar(1.0));

        assert!(font.is_empty());
        assert!(font.outline_for(32).is_none());
    }
}
