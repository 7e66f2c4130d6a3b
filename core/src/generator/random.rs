use core::time::Duration;

use super::LayoutGenerator;
use crate::*;
use crate::types::from_linear;
use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_time::SystemTime;

/// Uniform placement: every subset of `mines` cells is equally likely, and the same seed always yields the
/// same subset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomLayout {
    seed: u64,
}

impl RandomLayout {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Uses the configured seed, or one taken from the clock when there is none.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.seed.unwrap_or_else(clock_seed))
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl LayoutGenerator for RandomLayout {
    fn generate(self, size: Coord2, mines: CellCount) -> Result<Board> {
        let config = GameConfig::new(size, mines, Some(self.seed))?;
        let total_cells = usize::from(config.total_cells());

        log::debug!(
            "Placing {} mines on a {}x{} board, seed {}",
            mines,
            size.0,
            size.1,
            self.seed
        );

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for index in rand::seq::index::sample(&mut rng, total_cells, usize::from(mines)) {
            mine_mask[from_linear(index, size.1).to_nd_index()] = true;
        }

        Ok(Board::from_mine_mask(mine_mask, mines))
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map_or(0, nanos_seed)
}

/// Saturates instead of wrapping once the nanosecond count outgrows `u64`.
fn nanos_seed(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
}
