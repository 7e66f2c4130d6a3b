use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use minegrid_core::{CellCount, Coord, Game, GameConfig};

use render::Style;
use session::Ending;

mod command;
mod render;
mod session;

/// Minesweeper in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Number of rows
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u8).range(1..))]
    rows: Coord,

    /// Number of columns
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(1..))]
    cols: Coord,

    /// Number of mines, must leave at least one safe cell
    #[arg(long, default_value_t = 60)]
    mines: CellCount,

    /// Seed for mine placement, the same seed replays the same board
    #[arg(long)]
    seed: Option<u64>,

    /// Symbols used to draw the board
    #[arg(long, value_enum, default_value_t)]
    style: Style,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let config = GameConfig::new((cli.rows, cli.cols), cli.mines, cli.seed)
        .context("Invalid board configuration")?;
    let mut game = Game::new(config)?;
    log::info!(
        "New {}x{} game with {} mines, seed {:?}",
        cli.rows,
        cli.cols,
        cli.mines,
        game.seed()
    );

    let ending = session::play(&mut game, io::stdin().lock(), &mut io::stdout().lock(), cli.style)
        .context("Terminal I/O failed")?;
    if ending == Ending::Quit
        && let Some(seed) = game.seed()
    {
        println!("Replay this board with --seed {seed}");
    }
    Ok(())
}
