//! Turns words into segment textures for GPU stroke-text effects.
//!
//! A word is laid out glyph by glyph from a stroke font, centered, and packed
//! into a 2-row float texture: row 0 holds segment starts, row 1 segment ends.

pub mod cycler;
pub mod error;
pub mod font;
pub mod geometry;
mod macros;
pub mod render;
pub mod shape;
pub mod texture;

pub use crate::{
    cycler::{CycleMode, CyclerConfig, WordCycler},
    font::{Glyph, OutlineProvider, Stroke, StrokeFont},
    render::{ParameterSink, RecordingSink},
    shape::Shape,
    texture::{SegmentTexture, TextureSettings},
};

/// Lays out, centers and packs `word`
pub fn compile_word<P: OutlineProvider + ?Sized>(font: &P, word: &str) -> SegmentTexture {
    let shape = Shape::for_word(font, word).center_horizontally();

    log::debug!("compiled {:?} into {} segments", word, shape.len());

    SegmentTexture::pack(&shape)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{font::caret_font, geometry::Point};

    #[test]
    fn compile_caret_word() {
        let texture = compile_word(&caret_font(), "AB");

        let starts = texture.row(0).iter().map(|p| p.point()).collect::<Vec<_>>();
        let ends = texture.row(1).iter().map(|p| p.point()).collect::<Vec<_>>();

        assert_eq!(texture.width(), 3);
        assert_eq!(texture.height(), 2);
        assert_eq!(
            starts,
            vec![
                Point::new(-1.5, 0.0),
                Point::new(-0.5, 2.0),
                Point::new(0.5, 0.0)
            ]
        );
        assert_eq!(
            ends,
            vec![
                Point::new(-0.5, 2.0),
                Point::new(0.5, 0.0),
                Point::new(1.5, 0.0)
            ]
        );
    }

    #[test]
    fn compile_empty_word() {
        let texture = compile_word(&caret_font(), "");

        assert_eq!(texture.width(), 0);
        assert!(texture.pixels().is_empty());
    }

    #[test]
    fn compile_with_builtin_font() {
        let texture = compile_word(font::builtin(), "HI");

        // H has three bars, I three
        assert_eq!(texture.width(), 6);
        assert!(texture.pixels().iter().all(|p| p.b == 0.0 && p.a == 1.0));
    }
}
