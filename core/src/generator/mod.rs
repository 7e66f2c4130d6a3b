use crate::*;
pub use random::*;

mod random;

pub trait LayoutGenerator {
    fn generate(self, size: Coord2, mines: CellCount) -> Result<Board>;
}
