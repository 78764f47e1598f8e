use std::{
    thread,
    time::{Duration, Instant},
};

use clap::Parser;
use vfx_text::{
    cycler::{CycleMode, CyclerConfig, WordCycler},
    font,
    render::{wgpu::WgpuSink, ParameterSink, RecordingSink},
    texture::FilterMode,
};

const FRAME: Duration = Duration::from_millis(16);

/// vfx_text - cycle words through a segment texture using the built-in stroke font
#[derive(Parser, Debug)]
#[command(name = "vfx_text")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Words to draw, in order
    #[arg(required = true, value_name = "WORD")]
    words: Vec<String>,

    /// Seconds before the first automatic draw
    #[arg(long, value_name = "SECONDS", default_value = "0", value_parser = parse_seconds)]
    delay: Duration,

    /// Seconds between automatic draws
    #[arg(long, value_name = "SECONDS", default_value = "1", value_parser = parse_seconds)]
    period: Duration,

    /// automatic or manual
    #[arg(long, value_name = "MODE", default_value = "automatic", value_parser = CycleMode::from_str)]
    mode: CycleMode,

    /// point or trilinear
    #[arg(long, value_name = "FILTER", default_value = "trilinear", value_parser = FilterMode::from_str)]
    filter: FilterMode,

    /// Stop after this many draws (default: one pass over the words)
    #[arg(long, value_name = "N")]
    draws: Option<usize>,

    /// Upload each draw to a headless GPU device
    #[arg(long)]
    gpu: bool,
}

impl Cli {
    fn draws(&self) -> usize {
        self.draws.unwrap_or(self.words.len())
    }

    fn into_config(self) -> CyclerConfig {
        CyclerConfig {
            words: self.words,
            initial_delay: self.delay,
            period: self.period,
            mode: self.mode,
            filter: self.filter,
        }
    }
}

fn parse_seconds(value: &str) -> anyhow::Result<Duration> {
    let secs = value.parse::<f32>()?;

    Ok(Duration::try_from_secs_f32(secs)?)
}

fn run<K: ParameterSink>(cli: Cli, sink: K, report: impl Fn(&K)) -> anyhow::Result<()> {
    let draws = cli.draws();
    let config = cli.into_config();
    let mode = config.mode;
    let mut cycler = WordCycler::new(config, font::builtin(), sink);

    if mode == CycleMode::Manual {
        for _ in 0..draws {
            if let Some(index) = cycler.draw_next()? {
                log::info!("drew {:?}", cycler.words()[index]);
                report(cycler.sink());
            }
        }

        return Ok(());
    }

    let mut done = 0;
    let mut last = Instant::now();

    while done < draws {
        thread::sleep(FRAME);

        let now = Instant::now();
        let left = u32::try_from(draws - done).unwrap_or(u32::MAX);
        let drawn = cycler.update_at_most(now - last, left)?;
        last = now;

        if drawn > 0 {
            report(cycler.sink());
        }

        done += drawn as usize;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.gpu {
        let sink = pollster::block_on(WgpuSink::headless())?;

        run(cli, sink, |sink| {
            log::info!("uploaded {} segments", sink.count());
        })
    } else {
        run(cli, RecordingSink::new(), |sink| {
            if let Some(positions) = sink.positions() {
                log::info!(
                    "{} segments, starts {:?}",
                    positions.width(),
                    positions
                        .row(0)
                        .iter()
                        .map(|p| (p.r, p.g))
                        .collect::<Vec<_>>()
                );
            }
        })
    }
}

#[cfg(test)]
mod test {
    use clap::{error::ErrorKind, CommandFactory};

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("vfx_text").chain(args.iter().copied()))
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn words_and_defaults() {
        let cli = parse(&["HELLO", "WORLD"]).unwrap();

        assert_eq!(cli.draws(), 2);
        assert!(!cli.gpu);

        let config = cli.into_config();
        assert_eq!(config.words, vec!["HELLO", "WORLD"]);
        assert_eq!(config.initial_delay, Duration::ZERO);
        assert_eq!(config.period, Duration::from_secs(1));
        assert_eq!(config.mode, CycleMode::Automatic);
        assert_eq!(config.filter, FilterMode::Trilinear);
    }

    #[test]
    fn flags() {
        let cli = parse(&[
            "--delay", "0.5", "--period", "2", "--mode", "manual", "--filter", "point", "--draws",
            "7", "--gpu", "HI",
        ])
        .unwrap();

        assert_eq!(cli.draws(), 7);
        assert!(cli.gpu);

        let config = cli.into_config();
        assert_eq!(config.initial_delay, Duration::from_millis(500));
        assert_eq!(config.period, Duration::from_secs(2));
        assert_eq!(config.mode, CycleMode::Manual);
        assert_eq!(config.filter, FilterMode::Point);
        assert_eq!(config.words, vec!["HI"]);
    }

    #[test]
    fn equals_form_and_separator() {
        let cli = parse(&["--delay=0.5", "HI"]).unwrap();
        assert_eq!(cli.delay, Duration::from_millis(500));

        let cli = parse(&["HI", "--", "--X"]).unwrap();
        assert_eq!(cli.words, vec!["HI", "--X"]);
    }

    #[test]
    fn help_is_not_an_error_flag() {
        assert_eq!(parse(&["--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn bad_arguments() {
        assert_eq!(
            parse(&["--mode", "sometimes", "HI"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse(&["--filter", "bilinear", "HI"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse(&["--delay=-1", "HI"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse(&["--draws", "many", "HI"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse(&["--loud", "HI"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert_eq!(
            parse(&[]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
    }
}
