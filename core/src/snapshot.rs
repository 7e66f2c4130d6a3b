use alloc::vec::Vec;
use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Maps cell symbols to the glyphs a front end prints.
pub trait SymbolSet {
    fn symbol(&self, view: CellView) -> &str;
}

/// `!` mine, `0`-`8` adjacent count, `X` flag, `?` hidden.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlainSymbols;

const DIGITS: [&str; 9] = ["0", "1", "2", "3", "4", "5", "6", "7", "8"];

impl SymbolSet for PlainSymbols {
    fn symbol(&self, view: CellView) -> &str {
        match view {
            CellView::Hidden => "?",
            CellView::Flagged => "X",
            CellView::Revealed(count) => DIGITS.get(usize::from(count)).copied().unwrap_or("*"),
            CellView::Mine => "!",
        }
    }
}

/// Player-visible board at one point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    cells: Array2<CellView>,
}

impl Snapshot {
    pub fn from_game(game: &Game) -> Self {
        let (rows, cols) = game.size();
        let cells = Array2::from_shape_fn((usize::from(rows), usize::from(cols)), |(row, col)| {
            CellView::from(game.cell_at((row as Coord, col as Coord)))
        });
        Self { cells }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn get(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// One row of views, left to right, or `None` past the last row.
    pub fn row(&self, row: Coord) -> Option<impl Iterator<Item = CellView> + '_> {
        let row = usize::from(row);
        (row < self.cells.nrows()).then(|| self.cells.row(row).into_iter().copied())
    }

    /// Row-major grid of glyphs from `set`.
    pub fn symbols<'s, S: SymbolSet + ?Sized>(&self, set: &'s S) -> Vec<Vec<&'s str>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&view| set.symbol(view)).collect())
            .collect()
    }
}

/// Plain symbols, one line per row.
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.symbols(&PlainSymbols).into_iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            for symbol in row {
                f.write_str(symbol)?;
            }
        }
        Ok(())
    }
}
