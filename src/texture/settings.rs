use super::{FilterMode, WrapMode};

/// How whoever binds the texture should sample it. The packed data is exact
/// regardless; these only affect presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSettings {
    pub filter: FilterMode,
    pub wrap: WrapMode,
}

impl TextureSettings {
    pub const fn new(morphable: bool) -> Self {
        Self {
            filter: FilterMode::from_morphable(morphable),
            wrap: WrapMode::Mirror,
        }
    }
}

impl Default for TextureSettings {
    fn default() -> Self {
        Self::new(true)
    }
}
