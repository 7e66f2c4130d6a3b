use ndarray::Array2;

/// Single coordinate axis, used for row/column counts and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`, 0-indexed.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount) * (b as CellCount)
}

/// Maps a row-major linear index back to `(row, col)` for a grid `cols` wide.
pub(crate) fn from_linear(index: usize, cols: Coord) -> Coord2 {
    let cols = usize::from(cols);
    // index < rows * cols, so both halves fit the axis type
    ((index / cols) as Coord, (index % cols) as Coord)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, center: Coord2) -> Neighbors;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, center: Coord2) -> Neighbors {
        let (rows, cols) = self.dim();
        Neighbors::new(center, (rows as Coord, cols as Coord))
    }
}

/// Offsets of the eight cells sharing an edge or a corner with the center.
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn offset_within(center: Coord2, (dr, dc): (i8, i8), (rows, cols): Coord2) -> Option<Coord2> {
    let row = center.0.checked_add_signed(dr).filter(|&row| row < rows)?;
    let col = center.1.checked_add_signed(dc).filter(|&col| col < cols)?;
    Some((row, col))
}

/// In-bounds neighbors of a cell; up to 8, fewer along edges and corners.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    bounds: Coord2,
    next: usize,
}

impl Neighbors {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            next: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&offset) = OFFSETS.get(self.next) {
            self.next += 1;
            if let Some(coords) = offset_within(self.center, offset, self.bounds) {
                return Some(coords);
            }
        }
        None
    }
}
