use rand::Rng;

use crate::grid::{self, Cell};

pub const FOOD_START: Cell = Cell::at(5, 5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    cell: Cell,
}

impl Food {
    pub fn new() -> Self {
        Food { cell: FOOD_START }
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Moves to a uniformly random grid cell. Snake occupancy is not considered,
    /// so the food can land under the body.
    pub fn relocate<R: Rng>(&mut self, rng: &mut R) {
        self.cell = grid::random_cell(rng);
    }

    #[cfg(test)]
    pub fn place(&mut self, cell: Cell) {
        self.cell = cell;
    }
}

impl Default for Food {
    fn default() -> Self {
        Food::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_food_start() {
        assert_eq!(Food::new().cell(), Cell::new(120, 120));
    }

    #[test]
    fn test_relocate_stays_on_grid_and_moves() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut food = Food::new();
        let mut moved = 0;

        for _ in 0..200 {
            let before = food.cell();
            food.relocate(&mut rng);
            assert!(grid::in_bounds(food.cell()));
            assert_eq!(food.cell().x % grid::CELL_SIZE, 0);
            assert_eq!(food.cell().y % grid::CELL_SIZE, 0);
            if food.cell() != before {
                moved += 1;
            }
        }

        // 1 in 625 chance of staying put per draw
        assert!(moved > 190);
    }

    #[test]
    fn test_relocate_covers_far_corner() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut food = Food::new();
        let corner = Cell::at(24, 24);
        let hit = (0..20_000).any(|_| {
            food.relocate(&mut rng);
            food.cell() == corner
        });
        assert!(hit);
    }
}
