//! Brick Breaker headless runner
//!
//! Drives the simulation core without a window: input comes from a scripted
//! source, and each frame can be dumped as a JSON line for an external
//! renderer or for inspection.

use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use brick_breaker::input::{Autopilot, InputSource, KeyState, RandomInput};
use brick_breaker::present::snapshot;
use brick_breaker::sim::{GameState, tick};
use brick_breaker::{ConfigError, Playfield};

/// Where paddle input comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputMode {
    /// Track the ball (demo mode)
    Autopilot,
    /// Seeded random presses
    Random,
    /// No keys pressed
    Idle,
}

/// Brick Breaker simulation core, headless
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Playfield JSON file (defaults are used for missing fields)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Frames to simulate before stopping
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Input source
    #[arg(long, value_enum, default_value_t = InputMode::Autopilot)]
    input: InputMode,

    /// Seed for the random input source
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Write one JSON snapshot per frame to stdout
    #[arg(long)]
    dump_frames: bool,
}

fn load_playfield(path: Option<&PathBuf>) -> Result<Playfield, ConfigError> {
    match path {
        Some(path) => Playfield::load(path),
        None => Ok(Playfield::default()),
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let playfield = load_playfield(cli.config.as_ref())?;
    let mut state = GameState::new(playfield)?;

    let mut input: Box<dyn InputSource> = match cli.input {
        InputMode::Autopilot => Box::new(Autopilot::new()),
        InputMode::Random => Box::new(RandomInput::new(cli.seed)),
        InputMode::Idle => Box::new(KeyState::default()),
    };
    log::info!("Input source: {:?}", cli.input);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut destroyed_total = 0usize;

    while state.is_running() {
        let mut frame_input = input.poll(&state);
        if state.frame >= cli.frames {
            frame_input.stop = true;
        }

        let events = tick(&mut state, &frame_input);
        if events.stopped {
            break;
        }
        destroyed_total += events.destroyed.len();

        if cli.dump_frames {
            serde_json::to_writer(&mut out, &snapshot(&state))?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;

    log::info!(
        "Simulated {} frames, {} bricks destroyed, {} remaining",
        state.frame,
        destroyed_total,
        state.bricks.len()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::info!("Brick Breaker (headless) starting...");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
