use crate::grid::{Cell, CELL_SIZE};
use Direction::*;

/// Where the snake starts every round.
pub const START_CELL: Cell = Cell::at(10, 10);

/// Position given to a freshly grown segment until the next shift moves it.
pub const OFF_BOARD: Cell = Cell::new(-1, -1);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    fn delta(&self) -> (i32, i32) {
        match self {
            Up => (0, -CELL_SIZE),
            Down => (0, CELL_SIZE),
            Left => (-CELL_SIZE, 0),
            Right => (CELL_SIZE, 0),
        }
    }
}

/// Body segments with the head at index 0.
#[derive(Debug, Clone)]
pub struct Snake {
    body: Vec<Cell>,
    direction: Direction,
}

impl Snake {
    pub fn new() -> Self {
        Snake { body: vec![START_CELL], direction: Right }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Takes effect on the next `advance`. Reversing into the neck is allowed.
    pub fn set_direction(&mut self, new_direction: Direction) {
        self.direction = new_direction;
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn grow(&mut self) {
        self.body.push(OFF_BOARD);
    }

    /// Shifts every segment onto its predecessor, then moves the head one cell.
    /// The head is not clamped to the board.
    pub fn advance(&mut self) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }

        let (dx, dy) = self.direction.delta();
        self.body[0] = self.body[0].offset(dx, dy);
    }

    #[cfg(test)]
    pub fn from_body(body: Vec<Cell>, direction: Direction) -> Self {
        assert!(!body.is_empty());
        Snake { body, direction }
    }

    pub fn head_char(&self) -> char {
        match self.direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

impl Default for Snake {
    fn default() -> Self {
        Snake::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::in_bounds;

    #[test]
    fn test_new_snake() {
        let snake = Snake::new();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(240, 240));
        assert_eq!(snake.get_direction(), Right);
    }

    #[test]
    fn test_advance_each_direction() {
        for (dir, expected) in [
            (Up, Cell::new(240, 216)),
            (Down, Cell::new(240, 264)),
            (Left, Cell::new(216, 240)),
            (Right, Cell::new(264, 240)),
        ] {
            let mut snake = Snake::new();
            snake.set_direction(dir);
            snake.advance();
            assert_eq!(snake.head(), expected);
        }
    }

    #[test]
    fn test_follow_the_leader() {
        let mut snake = Snake::new();
        snake.grow();
        snake.grow();
        snake.advance();
        snake.advance();
        assert_eq!(
            snake.body(),
            &[Cell::new(288, 240), Cell::new(264, 240), Cell::new(240, 240)]
        );

        snake.set_direction(Down);
        snake.advance();
        assert_eq!(
            snake.body(),
            &[Cell::new(288, 264), Cell::new(288, 240), Cell::new(264, 240)]
        );
    }

    #[test]
    fn test_grown_segment_lands_on_board_within_two_ticks() {
        let mut snake = Snake::new();
        snake.advance();
        snake.grow();
        snake.grow();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.body()[2], OFF_BOARD);

        snake.advance();
        assert_eq!(snake.body()[2], OFF_BOARD);
        snake.advance();
        assert!(in_bounds(snake.body()[2]));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_reversal_is_not_guarded() {
        let mut snake = Snake::new();
        snake.grow();
        snake.advance();
        snake.set_direction(Left);
        assert_eq!(snake.get_direction(), Left);
        snake.advance();
        assert_eq!(snake.head(), snake.body()[1].offset(-CELL_SIZE, 0));
    }

    #[test]
    fn test_head_char_follows_direction() {
        let mut snake = Snake::new();
        assert_eq!(snake.head_char(), '>');
        snake.set_direction(Up);
        assert_eq!(snake.head_char(), '^');
    }
}
