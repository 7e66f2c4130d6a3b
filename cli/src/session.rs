use std::io::{self, BufRead, Write};

use minegrid_core::{Game, GameError};

use crate::command::Command;
use crate::render::{self, Style};

const PROMPT: &str = "> ";

const HELP: &str = "\
o <row> <col>   open a cell
f <row> <col>   flag or unflag a cell
h               show this help
q               quit";

/// How a session stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ending {
    Won,
    Lost,
    Quit,
}

/// Runs the read/apply/print loop until the game ends, the player quits, or input runs out.
pub fn play<R: BufRead, W: Write>(
    game: &mut Game,
    input: R,
    out: &mut W,
    style: Style,
) -> io::Result<Ending> {
    let mut lines = input.lines();
    show(game, out, style)?;

    while !game.is_finished() {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(Ending::Quit);
        };
        let command = match line?.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}, type `h` for help")?;
                continue;
            }
        };
        log::debug!("Command: {:?}", command);

        let applied: Result<(), GameError> = match command {
            Command::Open(position) => position
                .to_coords()
                .and_then(|coords| game.try_open(coords))
                .map(drop),
            Command::Flag(position) => position
                .to_coords()
                .and_then(|coords| game.try_flag(coords))
                .map(drop),
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Quit => return Ok(Ending::Quit),
        };

        match applied {
            Ok(()) => show(game, out, style)?,
            Err(err) => writeln!(out, "{err}")?,
        }
    }

    let ending = if game.has_won() {
        writeln!(out, "All safe cells opened, you won!")?;
        Ending::Won
    } else {
        match game.triggered_mine() {
            Some((row, col)) => writeln!(
                out,
                "Boom! Mine at row {}, column {}. Game over.",
                u16::from(row) + 1,
                u16::from(col) + 1
            )?,
            None => writeln!(out, "Game over.")?,
        }
        Ending::Lost
    };
    log::info!("Session ended: {:?}", ending);
    Ok(ending)
}

fn show<W: Write>(game: &Game, out: &mut W, style: Style) -> io::Result<()> {
    render::write_board(out, &game.snapshot(), style)?;
    if !game.is_finished() {
        writeln!(out, "Mines left: {}", game.mines_left())?;
    }
    Ok(())
}
