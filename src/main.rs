//! Blockfall runner (default binary).
//!
//! `play` (the default) drives the rules engine from the keyboard and draws it
//! with the framebuffer renderer. `headless` reads JSON commands on stdin and
//! answers each with one JSON line on stdout.

use std::fs::File;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event};
use tracing::{info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use blockfall::adapter::{HeadlessDriver, JsonSink};
use blockfall::core::{
    Game, GameSnapshot, HoldPolicy, RandomGenerator, RenderSink, RulesConfig, SpawnRotation,
};
use blockfall::input::{handle_key_event, InputEvent};
use blockfall::term::{TerminalRenderer, TerminalSink, Viewport};

#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle in the terminal")]
struct Cli {
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count, help = "Increase log verbosity (default WARN, -v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    verbose: u8,

    #[arg(
        long,
        global = true,
        env = "BLOCKFALL_LOG_FILE",
        help = "Write logs to this file (play mode logs nothing without it)"
    )]
    log_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        env = "BLOCKFALL_SEED",
        default_value_t = 1,
        help = "Seed for piece and spawn rotation draws"
    )]
    seed: u32,

    #[arg(
        long,
        global = true,
        env = "BLOCKFALL_SPAWN_ROTATION",
        default_value = "north",
        value_parser = parse_spawn_rotation,
        help = "Spawn rotation: north, east, south, west, 0-3, or random"
    )]
    spawn_rotation: SpawnRotation,

    #[arg(
        long = "hold",
        global = true,
        env = "BLOCKFALL_HOLD",
        default_value = "unlimited",
        value_parser = parse_hold_policy,
        help = "Hold policy: unlimited or once (once per piece)"
    )]
    hold_policy: HoldPolicy,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play,
    /// Line-delimited JSON commands on stdin, observations on stdout
    Headless,
}

fn parse_spawn_rotation(s: &str) -> Result<SpawnRotation, String> {
    SpawnRotation::from_str(s).ok_or_else(|| format!("invalid spawn rotation {s:?}"))
}

fn parse_hold_policy(s: &str) -> Result<HoldPolicy, String> {
    HoldPolicy::from_str(s).ok_or_else(|| format!("invalid hold policy {s:?}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let headless = matches!(cli.command, Some(Commands::Headless));
    init_logging(cli.verbose, cli.log_file.as_ref(), headless)?;

    let config = RulesConfig {
        spawn_rotation: cli.spawn_rotation,
        hold_policy: cli.hold_policy,
        // Keep rotation draws from mirroring the piece draws.
        seed: cli.seed.wrapping_add(0x9e37_79b9),
    };
    let game = Game::new(RandomGenerator::new(cli.seed), config);
    info!(seed = cli.seed, ?config, headless, "starting");

    if headless {
        run_headless(game)
    } else {
        run_play(game)
    }
}

/// Install the subscriber. Play mode owns the terminal, so it only logs to a
/// file; headless mode falls back to stderr.
fn init_logging(verbose: u8, log_file: Option<&PathBuf>, headless: bool) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .with(LevelFilter::from_level(level))
                .init();
        }
        None if headless => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .with(LevelFilter::from_level(level))
                .init();
        }
        None => {}
    }
    Ok(())
}

fn run_play(game: Game) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut sink = TerminalSink::new(TerminalRenderer::new(), Viewport::new(w, h));
    sink.renderer_mut().enter()?;

    let result = play(&mut sink, game);

    // Always try to restore terminal state.
    let _ = sink.renderer_mut().exit();
    result
}

fn play(sink: &mut TerminalSink, mut game: Game) -> Result<()> {
    game.spawn_next();
    let mut snap = GameSnapshot::default();

    loop {
        game.snapshot_into(&mut snap);
        sink.render(&snap)?;

        // No gravity: the board only changes on input.
        match event::read()? {
            Event::Key(key) => match handle_key_event(key) {
                Some(InputEvent::Quit) => return Ok(()),
                Some(InputEvent::Reset) => {
                    game.reset();
                    game.spawn_next();
                }
                Some(InputEvent::Action(action)) => {
                    game.apply_and_spawn(action);
                }
                None => {}
            },
            Event::Resize(w, h) => sink.resize(Viewport::new(w, h)),
            _ => {}
        }
    }
}

fn run_headless(game: Game) -> Result<()> {
    let mut driver = HeadlessDriver::new(game);
    let mut sink = JsonSink::new(io::stdout().lock());

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read command from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        match driver.handle_line(&line) {
            Ok(report) => {
                sink.set_report(report);
                sink.render(&driver.snapshot())?;
            }
            Err(err) => sink.write_error(driver.seq(), &err)?,
        }
    }
    Ok(())
}
