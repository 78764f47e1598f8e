use std::time::Duration;

use crate::{
    compile_word,
    font::OutlineProvider,
    render::{publish, ParameterSink},
    texture::{FilterMode, TextureSettings},
};

pub use self::{
    config::{CycleMode, CyclerConfig},
    scheduler::{Scheduler, TickScheduler},
};

mod config;
mod scheduler;

/// Draws the words of a list one after another, wrapping around at the end
pub struct WordCycler<'f, F: ?Sized, K, S = TickScheduler> {
    font: &'f F,
    sink: K,
    scheduler: S,
    words: Vec<String>,

    /// Index of the next word to draw. May run past the end of `words`; it is
    /// wrapped when the next draw happens.
    cursor: usize,
    mode: CycleMode,
    settings: TextureSettings,
    initial_delay: Duration,
    period: Duration,
}

impl<'f, F, K> WordCycler<'f, F, K, TickScheduler>
where
    F: OutlineProvider + ?Sized,
    K: ParameterSink,
{
    pub fn new(config: CyclerConfig, font: &'f F, sink: K) -> Self {
        Self::with_scheduler(config, font, sink, TickScheduler::new())
    }
}

impl<'f, F, K, S> WordCycler<'f, F, K, S>
where
    F: OutlineProvider + ?Sized,
    K: ParameterSink,
    S: Scheduler,
{
    pub fn with_scheduler(config: CyclerConfig, font: &'f F, sink: K, scheduler: S) -> Self {
        Self {
            font,
            sink,
            scheduler,
            words: config.words,
            cursor: 0,
            mode: config.mode,
            settings: TextureSettings {
                filter: config.filter,
                ..TextureSettings::default()
            },
            initial_delay: config.initial_delay,
            period: config.period,
        }
    }

    /// Draws the word under the cursor and moves the cursor on, returning the
    /// index of the word drawn. An empty word list draws nothing.
    pub fn draw_next(&mut self) -> anyhow::Result<Option<usize>> {
        if self.words.is_empty() {
            log::warn!("no words to draw");
            return Ok(None);
        }

        if self.cursor >= self.words.len() {
            self.cursor = 0;
        }

        let index = self.cursor;
        self.cursor += 1;

        let texture = compile_word(self.font, &self.words[index]);
        publish(&mut self.sink, &texture, self.settings)?;

        Ok(Some(index))
    }

    /// Draws `word` without touching the cursor
    pub fn draw_word(&mut self, word: &str) -> anyhow::Result<()> {
        let texture = compile_word(self.font, word);

        publish(&mut self.sink, &texture, self.settings)
    }

    /// Per-frame hook. Starts or stops the recurring draw to match the mode,
    /// then performs every draw that fell due within `elapsed`. Returns the
    /// number of words drawn.
    pub fn update(&mut self, elapsed: Duration) -> anyhow::Result<u32> {
        self.update_at_most(elapsed, u32::MAX)
    }

    /// Same as [WordCycler::update], but draws no more than `max_draws` words.
    /// Invocations past the limit are dropped, not deferred.
    pub fn update_at_most(&mut self, elapsed: Duration, max_draws: u32) -> anyhow::Result<u32> {
        match self.mode {
            CycleMode::Automatic if !self.scheduler.is_running() => {
                log::debug!(
                    "starting word cycle: delay {:?}, period {:?}",
                    self.initial_delay,
                    self.period
                );
                self.scheduler.start(self.initial_delay, self.period);
            }
            CycleMode::Manual if self.scheduler.is_running() => {
                log::debug!("stopping word cycle");
                self.scheduler.stop();
            }
            _ => {}
        }

        let due = self.scheduler.advance(elapsed).min(max_draws);
        let mut drawn = 0;

        for _ in 0..due {
            if self.draw_next()?.is_some() {
                drawn += 1;
            }
        }

        Ok(drawn)
    }

    pub fn set_automatic(&mut self, automatic: bool) {
        self.mode = if automatic {
            CycleMode::Automatic
        } else {
            CycleMode::Manual
        };
    }

    pub fn set_morphable(&mut self, morphable: bool) {
        self.settings.filter = FilterMode::from_morphable(morphable);
    }

    pub fn mode(&self) -> CycleMode {
        self.mode
    }

    pub fn settings(&self) -> TextureSettings {
        self.settings
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    pub fn into_sink(self) -> K {
        self.sink
    }
}
