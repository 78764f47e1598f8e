pub mod error;
pub mod wgpu;

use crate::texture::{SegmentTexture, TextureSettings};

use self::error::RenderError;

/// Name of the segment texture parameter
pub const POSITIONS: &str = "Positions";

/// Name of the segment count parameter
pub const COUNT: &str = "Count";

/// Where a draw's parameters end up, usually an effect's exposed properties
pub trait ParameterSink {
    fn set_texture(
        &mut self,
        name: &str,
        texture: &SegmentTexture,
        settings: TextureSettings,
    ) -> anyhow::Result<()>;

    fn set_int(&mut self, name: &str, value: u32) -> anyhow::Result<()>;
}

/// Hands a packed texture and its segment count to `sink` as one unit.
///
/// The texture is set first, so a consumer that reacts to "Count" always sees
/// the matching "Positions".
pub fn publish<K: ParameterSink + ?Sized>(
    sink: &mut K,
    texture: &SegmentTexture,
    settings: TextureSettings,
) -> anyhow::Result<()> {
    sink.set_texture(POSITIONS, texture, settings)?;
    sink.set_int(COUNT, texture.width())?;

    Ok(())
}

/// Keeps the most recent parameters in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    positions: Option<(SegmentTexture, TextureSettings)>,
    count: Option<u32>,
    publishes: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn positions(&self) -> Option<&SegmentTexture> {
        self.positions.as_ref().map(|(texture, _)| texture)
    }

    pub fn settings(&self) -> Option<TextureSettings> {
        self.positions.as_ref().map(|(_, settings)| *settings)
    }

    pub fn count(&self) -> Option<u32> {
        self.count
    }

    /// How many times "Count" has been set
    pub fn publishes(&self) -> usize {
        self.publishes
    }
}

impl ParameterSink for RecordingSink {
    fn set_texture(
        &mut self,
        name: &str,
        texture: &SegmentTexture,
        settings: TextureSettings,
    ) -> anyhow::Result<()> {
        if name != POSITIONS {
            anyhow::bail!(RenderError::UnknownParameter {
                name: name.to_owned()
            });
        }

        self.positions = Some((texture.clone(), settings));

        Ok(())
    }

    fn set_int(&mut self, name: &str, value: u32) -> anyhow::Result<()> {
        if name != COUNT {
            anyhow::bail!(RenderError::UnknownParameter {
                name: name.to_owned()
            });
        }

        self.count = Some(value);
        self.publishes += 1;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{font::caret_font, shape::Shape};

    #[test]
    fn publish_sets_both_parameters() {
        let texture = SegmentTexture::pack(&Shape::for_word(&caret_font(), "AB"));
        let mut sink = RecordingSink::new();

        publish(&mut sink, &texture, TextureSettings::new(false)).unwrap();

        assert_eq!(sink.positions(), Some(&texture));
        assert_eq!(sink.count(), Some(3));
        assert_eq!(sink.settings(), Some(TextureSettings::new(false)));
        assert_eq!(sink.publishes(), 1);
    }

    #[test]
    fn unknown_parameter_names_are_rejected() {
        let mut sink = RecordingSink::new();
        let texture = SegmentTexture::pack(&Shape::empty());

        assert!(sink
            .set_texture("Colors", &texture, TextureSettings::default())
            .is_err());
        assert!(sink.set_int("Total", 1).is_err());
        assert_eq!(sink.publishes(), 0);
    }
}
