use rand::Rng;

/// Side of one board cell, in pixel units.
pub const CELL_SIZE: i32 = 24;
pub const BOARD_WIDTH: i32 = 600;
pub const BOARD_HEIGHT: i32 = 600;

/// A board position in pixel units. On-board cells are multiples of `CELL_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// Cell at the given column and row of the grid.
    pub const fn at(col: i32, row: i32) -> Self {
        Cell { x: col * CELL_SIZE, y: row * CELL_SIZE }
    }

    pub fn col(&self) -> i32 {
        self.x.div_euclid(CELL_SIZE)
    }

    pub fn row(&self) -> i32 {
        self.y.div_euclid(CELL_SIZE)
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Cell { x: self.x + dx, y: self.y + dy }
    }
}

pub const fn cols() -> i32 {
    BOARD_WIDTH / CELL_SIZE
}

pub const fn rows() -> i32 {
    BOARD_HEIGHT / CELL_SIZE
}

/// Overlap test between a moving cell `a` (always the snake head) and `b`.
///
/// Half-open on both axes: true iff `a` lies within `[b, b + CELL_SIZE)`.
/// The test is not symmetric in its arguments.
pub fn overlaps(a: Cell, b: Cell) -> bool {
    a.x >= b.x && b.x + CELL_SIZE > a.x && a.y >= b.y && b.y + CELL_SIZE > a.y
}

pub fn in_bounds(cell: Cell) -> bool {
    (0..BOARD_WIDTH).contains(&cell.x) && (0..BOARD_HEIGHT).contains(&cell.y)
}

/// Uniformly random on-grid cell.
pub fn random_cell<R: Rng>(rng: &mut R) -> Cell {
    Cell::at(rng.gen_range(0..cols()), rng.gen_range(0..rows()))
}
