use std::time::Duration;

use crate::{config_enum, texture::FilterMode};

config_enum!(
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum CycleMode {
        /// A recurring timer advances to the next word
        Automatic = "automatic",

        /// Words only advance when [crate::cycler::WordCycler::draw_next] is called
        Manual = "manual",
    }
);

#[derive(Debug, Clone, PartialEq)]
pub struct CyclerConfig {
    pub words: Vec<String>,

    /// Time before the first automatic draw
    pub initial_delay: Duration,

    /// Time between automatic draws
    pub period: Duration,

    pub mode: CycleMode,

    /// Sampling the consumer should use for the packed texture.
    /// [FilterMode::Trilinear] lets the effect morph between segments.
    pub filter: FilterMode,
}

impl CyclerConfig {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

impl Default for CyclerConfig {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            initial_delay: Duration::ZERO,
            period: Duration::from_secs(1),
            mode: CycleMode::Automatic,
            filter: FilterMode::Trilinear,
        }
    }
}
