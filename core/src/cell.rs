use core::fmt;
use serde::{Deserialize, Serialize};

use crate::{PlainSymbols, SymbolSet};

/// What covers a cell from the player's point of view.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cover {
    #[default]
    Hidden,
    Flagged,
    Opened,
}

impl Cover {
    pub const fn is_opened(self) -> bool {
        matches!(self, Self::Opened)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

/// Full state of one grid position, mine included.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub mined: bool,
    pub opened: bool,
    pub flagged: bool,
    /// Mined neighbors, not counting the cell itself.
    pub adjacent_mines: u8,
}

/// Player-visible symbol of a cell, independent of any glyph set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
}

impl CellView {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl From<Cell> for CellView {
    fn from(cell: Cell) -> Self {
        match (cell.opened, cell.mined, cell.flagged) {
            (true, true, _) => Self::Mine,
            (true, false, _) => Self::Revealed(cell.adjacent_mines),
            (false, _, true) => Self::Flagged,
            (false, _, false) => Self::Hidden,
        }
    }
}

impl fmt::Display for CellView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PlainSymbols.symbol(*self))
    }
}
