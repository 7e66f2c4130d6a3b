use std::str::FromStr;

use minegrid_core::{Coord, Coord2, GameError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty input")]
    Empty,
    #[error("Unknown action `{0}`")]
    UnknownAction(String),
    #[error("`{0}` takes a row and a column")]
    WrongArity(String),
    #[error("`{0}` takes no arguments")]
    UnexpectedArguments(String),
    #[error("`{0}` is not a row or column number")]
    BadNumber(String),
}

/// A cell as typed by the player, 1-indexed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    fn parse(action: &str, args: &[&str]) -> Result<Self, CommandError> {
        let &[row, col] = args else {
            return Err(CommandError::WrongArity(action.to_owned()));
        };
        let number = |token: &str| {
            token
                .parse::<u32>()
                .map_err(|_| CommandError::BadNumber(token.to_owned()))
        };
        Ok(Self {
            row: number(row)?,
            col: number(col)?,
        })
    }

    /// Engine coordinates; anything that cannot exist on a board is out of bounds.
    pub fn to_coords(self) -> Result<Coord2, GameError> {
        let axis = |n: u32| {
            n.checked_sub(1)
                .and_then(|n| Coord::try_from(n).ok())
                .ok_or(GameError::OutOfBounds)
        };
        Ok((axis(self.row)?, axis(self.col)?))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Open(Position),
    Flag(Position),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let action = tokens.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = tokens.collect();

        match action.to_ascii_lowercase().as_str() {
            "o" | "open" => Ok(Self::Open(Position::parse(action, &args)?)),
            "f" | "flag" => Ok(Self::Flag(Position::parse(action, &args)?)),
            "h" | "help" | "?" if args.is_empty() => Ok(Self::Help),
            "q" | "quit" | "exit" if args.is_empty() => Ok(Self::Quit),
            "h" | "help" | "?" | "q" | "quit" | "exit" => {
                Err(CommandError::UnexpectedArguments(action.to_owned()))
            }
            _ => Err(CommandError::UnknownAction(action.to_owned())),
        }
    }
}
