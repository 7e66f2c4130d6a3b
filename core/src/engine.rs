use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Ongoing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        match self {
            Self::Ongoing => false,
            Self::Won | Self::Lost => true,
        }
    }
}

/// A single game from the first move to a win or a loss.
///
/// Only [`Game::open`] and [`Game::flag`] (and their `try_` forms) mutate the game, and both refuse every move once
/// the status is no longer [`GameStatus::Ongoing`].
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    board: Board,
    covers: Array2<Cover>,
    unmined_left: CellCount,
    flagged_count: CellCount,
    status: GameStatus,
    seed: Option<u64>,
    triggered_mine: Option<Coord2>,
}

impl Game {
    /// Starts a game on a freshly generated random layout.
    pub fn new(config: GameConfig) -> Result<Self> {
        let generator = RandomLayout::from_config(&config);
        let board = generator.generate(config.size, config.mines)?;
        Ok(Self {
            seed: Some(generator.seed()),
            ..Self::from_board(board)
        })
    }

    /// Starts a game on a known layout.
    pub fn from_board(board: Board) -> Self {
        let size = board.size();
        Self {
            unmined_left: board.safe_cell_count(),
            covers: Array2::default(size.to_nd_index()),
            board,
            flagged_count: 0,
            status: GameStatus::default(),
            seed: None,
            triggered_mine: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn has_won(&self) -> bool {
        matches!(self.status, GameStatus::Won)
    }

    pub fn has_lost(&self) -> bool {
        matches!(self.status, GameStatus::Lost)
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    /// Safe cells still to be opened.
    pub fn unmined_left(&self) -> CellCount {
        self.unmined_left
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Mines not yet accounted for by a flag, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.board.mine_count() as isize) - (self.flagged_count as isize)
    }

    /// Seed the layout was generated from, `None` for games built from a known board.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The mine whose opening lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, coords: Coord2) -> Option<Cell> {
        let coords = self.board.validate_coords(coords).ok()?;
        Some(self.cell_at(coords))
    }

    pub(crate) fn cell_at(&self, coords: Coord2) -> Cell {
        let cover = self.covers[coords.to_nd_index()];
        Cell {
            mined: self.board.contains_mine(coords),
            opened: cover.is_opened(),
            flagged: cover.is_flagged(),
            adjacent_mines: self.board.adjacent_mine_count(coords),
        }
    }

    pub fn view_at(&self, coords: Coord2) -> Option<CellView> {
        self.cell(coords).map(CellView::from)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_game(self)
    }

    /// Opens a cell, returning whether the move was accepted.
    pub fn open(&mut self, coords: Coord2) -> bool {
        self.try_open(coords).is_ok()
    }

    /// Toggles the flag on a cell, returning whether the move was accepted.
    pub fn flag(&mut self, coords: Coord2) -> bool {
        self.try_flag(coords).is_ok()
    }

    pub fn try_open(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_ongoing()?;

        match self.covers[coords.to_nd_index()] {
            Cover::Hidden => Ok(self.open_hidden(coords)),
            Cover::Flagged => Err(GameError::Flagged),
            Cover::Opened => Err(GameError::AlreadyOpened),
        }
    }

    pub fn try_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_ongoing()?;

        let cover = &mut self.covers[coords.to_nd_index()];
        match *cover {
            Cover::Hidden => {
                *cover = Cover::Flagged;
                self.flagged_count += 1;
                Ok(FlagOutcome::Flagged)
            }
            Cover::Flagged => {
                *cover = Cover::Hidden;
                self.flagged_count -= 1;
                Ok(FlagOutcome::Unflagged)
            }
            Cover::Opened => Err(GameError::AlreadyOpened),
        }
    }

    fn open_hidden(&mut self, coords: Coord2) -> RevealOutcome {
        if self.board.contains_mine(coords) {
            self.triggered_mine = Some(coords);
            self.end_game(GameStatus::Lost);
            return RevealOutcome::HitMine;
        }

        self.open_safe(coords);
        if self.board.adjacent_mine_count(coords) == 0 {
            self.flood_fill(coords);
        }

        if self.unmined_left == 0 {
            self.end_game(GameStatus::Won);
            RevealOutcome::Won
        } else {
            RevealOutcome::Opened
        }
    }

    /// Opens the zero region around `origin` and its ring of numbered cells.
    ///
    /// A cell is queued only while hidden and re-checked when popped, so each cell opens at most once. Flags stop the
    /// fill, and no mine is ever reached since mines only border non-zero cells.
    fn flood_fill(&mut self, origin: Coord2) {
        let mut to_visit: VecDeque<Coord2> = self.hidden_neighbors(origin).collect();
        log::trace!("Starting flood-fill from {:?}, initial neighbors: {:?}", origin, to_visit);

        while let Some(coords) = to_visit.pop_front() {
            if !matches!(self.covers[coords.to_nd_index()], Cover::Hidden) {
                continue;
            }

            self.open_safe(coords);
            if self.board.adjacent_mine_count(coords) == 0 {
                to_visit.extend(self.hidden_neighbors(coords));
            }
        }
    }

    fn open_safe(&mut self, coords: Coord2) {
        self.covers[coords.to_nd_index()] = Cover::Opened;
        self.unmined_left -= 1;
        log::trace!(
            "Opened cell at {:?}, adjacent mines: {}",
            coords,
            self.board.adjacent_mine_count(coords)
        );
    }

    fn hidden_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<'_> {
        self.board
            .iter_neighbors(coords)
            .filter(|&pos| matches!(self.covers[pos.to_nd_index()], Cover::Hidden))
    }

    fn end_game(&mut self, status: GameStatus) {
        self.status = status;
        if let GameStatus::Lost = status {
            self.covers.fill(Cover::Opened);
            self.flagged_count = 0;
        }
        log::debug!(
            "Game ended: {:?}, {} safe cells left unopened",
            status,
            self.unmined_left
        );
    }

    fn check_ongoing(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
