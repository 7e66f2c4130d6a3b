#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod snapshot;
mod types;

/// Validated parameters for a new game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
    /// Fixed seed for mine placement; `None` draws one from the clock.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new(size: Coord2, mines: CellCount, seed: Option<u64>) -> Result<Self> {
        check_board_params(size, mines)?;
        Ok(Self { size, mines, seed })
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

fn check_board_params((rows, cols): Coord2, mines: CellCount) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(GameError::InvalidDimensions);
    }
    if mines >= mult(rows, cols) {
        return Err(GameError::TooManyMines);
    }
    Ok(())
}

/// Mine layout plus the adjacency counts derived from it. Immutable once built.
///
/// Only the mine mask is serialized; loading re-validates it and recomputes the rest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MineMask", into = "MineMask")]
pub struct Board {
    mine_mask: Array2<bool>,
    adjacent: Array2<u8>,
    mine_count: CellCount,
}

impl Board {
    /// Builds a board with mines at exactly the given coordinates; duplicates count once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if mine_coords
            .iter()
            .any(|&(row, col)| row >= size.0 || col >= size.1)
        {
            return Err(GameError::OutOfBounds);
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            mine_mask[coords.to_nd_index()] = true;
        }
        let mine_count = mine_mask.iter().filter(|&&mined| mined).count() as CellCount;
        check_board_params(size, mine_count)?;

        Ok(Self::from_mine_mask(mine_mask, mine_count))
    }

    /// Callers guarantee the mask is non-empty and holds `mine_count` mines.
    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>, mine_count: CellCount) -> Self {
        let mut adjacent: Array2<u8> = Array2::zeros(mine_mask.raw_dim());
        for ((row, col), _) in mine_mask.indexed_iter().filter(|(_, mined)| **mined) {
            for pos in mine_mask.iter_neighbors((row as Coord, col as Coord)) {
                adjacent[pos.to_nd_index()] += 1;
            }
        }

        Self {
            mine_mask,
            adjacent,
            mine_count,
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// `(rows, cols)`
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.adjacent[coords.to_nd_index()]
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> Neighbors {
        self.mine_mask.iter_neighbors(coords)
    }

    /// Coordinates of every mine in row-major order.
    pub fn mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|(_, mined)| **mined)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }
}

/// Serialized form of a [`Board`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct MineMask {
    mine_mask: Array2<bool>,
}

impl From<Board> for MineMask {
    fn from(board: Board) -> Self {
        Self {
            mine_mask: board.mine_mask,
        }
    }
}

impl TryFrom<MineMask> for Board {
    type Error = GameError;

    fn try_from(MineMask { mine_mask }: MineMask) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let size = (
            Coord::try_from(rows).map_err(|_| GameError::InvalidDimensions)?,
            Coord::try_from(cols).map_err(|_| GameError::InvalidDimensions)?,
        );
        // at most 255 * 255 cells once the size fits
        let mine_count = mine_mask.iter().filter(|&&mined| mined).count() as CellCount;
        check_board_params(size, mine_count)?;

        Ok(Self::from_mine_mask(mine_mask, mine_count))
    }
}

impl Index<Coord2> for Board {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// Successful result of opening a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Cell (and possibly a flood-filled region) opened, game goes on.
    Opened,
    HitMine,
    Won,
}

/// Successful result of toggling a flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Flagged,
    Unflagged,
}
