use std::time::Duration;

use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, info};

use crate::audio::{Audio, Effect};
use crate::food::Food;
use crate::grid::{in_bounds, overlaps};
use crate::snake::{Direction, Snake};

/// Segments before this index never count as a self-collision.
const SELF_COLLISION_START: usize = 3;

/// Why a round ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Terminal {
    HitSelf,
    HitBoundary,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    AteFood,
    Terminated(Terminal),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    Playing,
    GameOver { score: usize, reason: Terminal },
}

/// Delay between ticks for a snake of the given length.
pub fn speed_curve(length: usize) -> Duration {
    let millis = match length {
        0..=9 => 200,
        10..=19 => 175,
        20..=29 => 150,
        30..=39 => 125,
        _ => 100,
    };

    Duration::from_millis(millis)
}

pub struct GameController<R = ThreadRng> {
    snake: Snake,
    food: Food,
    state: GameState,
    rng: R,
}

impl GameController<ThreadRng> {
    pub fn new() -> Self {
        GameController::with_rng(rand::thread_rng())
    }
}

impl<R: Rng> GameController<R> {
    pub fn with_rng(rng: R) -> Self {
        GameController { snake: Snake::new(), food: Food::new(), state: GameState::Playing, rng }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn score(&self) -> usize {
        self.snake.len()
    }

    /// Directional input is dropped while the game is over.
    pub fn steer(&mut self, direction: Direction) {
        if self.is_playing() {
            self.snake.set_direction(direction);
        }
    }

    /// Starts a fresh round after a game over. Returns whether a reset happened.
    pub fn acknowledge(&mut self) -> bool {
        if self.is_playing() {
            return false;
        }

        self.snake = Snake::new();
        self.food = Food::new();
        self.state = GameState::Playing;
        info!("new round started");
        true
    }

    /// Runs one simulation step. Does nothing unless the game is being played.
    pub fn tick(&mut self, audio: &mut dyn Audio) -> TickOutcome {
        if !self.is_playing() {
            return TickOutcome::Continue;
        }

        self.snake.advance();
        let head = self.snake.head();
        let mut outcome = TickOutcome::Continue;

        if overlaps(head, self.food.cell()) {
            audio.play(Effect::Eat);
            self.food.relocate(&mut self.rng);
            self.snake.grow();
            debug!(length = self.snake.len(), food = ?self.food.cell(), "food eaten");
            outcome = TickOutcome::AteFood;
        }

        let hit_self = self.snake.body()[SELF_COLLISION_START.min(self.snake.len())..]
            .iter()
            .any(|segment| overlaps(head, *segment));
        if hit_self {
            return self.terminate(Terminal::HitSelf, audio);
        }

        if !in_bounds(head) {
            return self.terminate(Terminal::HitBoundary, audio);
        }

        outcome
    }

    /// Delay before the next tick. A finished round is paced like a new one.
    pub fn tick_interval(&self) -> Duration {
        match self.state {
            GameState::Playing => speed_curve(self.snake.len()),
            GameState::GameOver { .. } => speed_curve(1),
        }
    }

    fn terminate(&mut self, reason: Terminal, audio: &mut dyn Audio) -> TickOutcome {
        audio.play(Effect::Collision);
        let score = self.score();
        self.state = GameState::GameOver { score, reason };
        info!(?reason, score, head = ?self.snake.head(), "game over");
        TickOutcome::Terminated(reason)
    }

    #[cfg(test)]
    fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    #[cfg(test)]
    fn food_mut(&mut self) -> &mut Food {
        &mut self.food
    }
}
