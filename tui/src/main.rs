use std::io::{self, Read, Write};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event};
use shared::command::Command;
use shared::config::WorldConfig;
use shared::grid::Grid;
use shared::headless;
use shared::render::status_line;
use shared::simulation::{Flow, Simulation};

mod input;
mod terminal;

use terminal::Terminal;

/// How long the loop waits for a key before stepping anyway.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Conway's Game of Life on a wrapping world.
///
/// Keys: w/a/s/d or arrows move, space toggles a cell, p pauses, i steps
/// once, z zooms out, c clears, r randomizes, q quits.
#[derive(Parser, Debug)]
#[command(name = "life", disable_help_flag = true)]
struct Args {
    /// World width in cells (5 to 1000)
    #[arg(short, long, allow_negative_numbers = true)]
    width: Option<i64>,

    /// World height in cells (5 to 1000)
    #[arg(short = 'h', long, allow_negative_numbers = true)]
    height: Option<i64>,

    /// Run without a display: read the seed from stdin, run this many
    /// generations and print the final world
    #[arg(short = 'I', long, value_name = "GENERATIONS")]
    iterations: Option<u64>,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = WorldConfig::from_requested(args.width, args.height);
    log::info!("world {}x{}", config.width, config.height);

    match args.iterations {
        Some(generations) => run_headless(config, generations),
        None => run_interactive(config),
    }
}

fn run_headless(config: WorldConfig, generations: u64) -> anyhow::Result<()> {
    log::info!("headless run for {generations} generations");

    let mut seed = Vec::new();
    io::stdin()
        .read_to_end(&mut seed)
        .context("reading seed from stdin")?;

    let mut grid = Grid::new(config.width, config.height)?;
    grid.seed_bytes(&seed);

    let dump = headless::evolve(&mut grid, generations);
    let mut out = io::stdout().lock();
    out.write_all(dump.as_bytes())
        .and_then(|()| out.flush())
        .context("writing final world")?;
    Ok(())
}

fn run_interactive(config: WorldConfig) -> anyhow::Result<()> {
    // Allocate before touching the terminal so a failure leaves it untouched.
    let size = terminal::terminal_size()?;
    let screen = terminal::screen_below_status(size)?;
    let mut simulation = Simulation::new(config.size(), screen)?;

    let mut terminal = Terminal::enter(size)?;
    log::debug!("screen {}x{}", screen.width, screen.height);
    terminal.draw(&simulation.frame(), &status_line(&simulation))?;

    loop {
        let command = next_command().context("reading input")?;
        if simulation.dispatch(command) == Flow::Quit {
            break;
        }
        simulation.tick();
        terminal
            .draw(&simulation.frame(), &status_line(&simulation))
            .context("drawing frame")?;
    }

    drop(terminal);
    log::info!("quit at generation {}", simulation.grid().generation());
    Ok(())
}

/// Waits up to [`POLL_TIMEOUT`] for one key.
fn next_command() -> io::Result<Command> {
    if !event::poll(POLL_TIMEOUT)? {
        return Ok(Command::NoOp);
    }
    Ok(match event::read()? {
        Event::Key(key) => input::command_for(&key),
        _ => Command::NoOp,
    })
}
