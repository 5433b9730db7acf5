use std::thread::sleep;

use crossterm::style::Color;
use tracing::{debug, info};

use crate::audio::Audio;
use crate::controller::{GameController, GameState, TickOutcome};
use crate::error::Result;
use crate::input::{command_for, Command};
use crate::term::TermManager;

const SNAKE_BODY_GLYPH: &str = "██";
const FOOD_GLYPH: &str = "()";

const SNAKE_COLOR: Color = Color::Green;
const HEAD_COLOR: Color = Color::Yellow;
const FOOD_COLOR: Color = Color::Red;

const CONTROLS_HINT: &str = "Arrow keys or WASD to move, Esc to quit";

pub struct SnakeGame {
    term: TermManager,
    controller: GameController,
    audio: Box<dyn Audio>,
}

impl SnakeGame {
    pub fn new(audio: Box<dyn Audio>) -> Result<Self> {
        let term = TermManager::new()?;
        let (width, height) = term.get_terminal_size();
        debug!(width, height, "terminal ready");

        Ok(SnakeGame { term, controller: GameController::new(), audio })
    }

    /// Runs until the player quits, leaving the terminal as it was found.
    pub fn run(&mut self) -> Result<()> {
        self.term.setup()?;
        let res = self.play();
        let restored = self.term.restore();
        res.and(restored)
    }

    fn play(&mut self) -> Result<()> {
        info!("new round started");
        self.redraw_all()?;

        loop {
            for key_ev in self.term.read_key_events_queue()? {
                match command_for(&key_ev) {
                    Command::Quit => {
                        info!(score = self.controller.score(), "player quit");
                        return Ok(());
                    }
                    Command::Confirm => {
                        if self.controller.acknowledge() {
                            self.redraw_all()?;
                        }
                    }
                    Command::Turn(dir) => {
                        debug!(from = ?self.controller.snake().get_direction(), to = ?dir, "turn");
                        self.controller.steer(dir);
                    }
                    Command::None => {}
                }
            }

            if self.controller.is_playing() {
                match self.controller.tick(self.audio.as_mut()) {
                    TickOutcome::Terminated(_) => self.show_game_over()?,
                    TickOutcome::Continue | TickOutcome::AteFood => self.draw_board()?,
                }
            }

            sleep(self.controller.tick_interval());
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn redraw_all(&mut self) -> Result<()> {
        self.term.clear()?;
        self.term.draw_borders()?;
        self.term.print_hint(CONTROLS_HINT)?;
        self.draw_board()
    }

    fn draw_board(&mut self) -> Result<()> {
        self.term.clear_board()?;
        self.term.draw_cell(self.controller.food().cell(), FOOD_GLYPH, FOOD_COLOR)?;

        let snake = self.controller.snake();
        for pos in snake.body().iter().skip(1).rev() {
            self.term.draw_cell(*pos, SNAKE_BODY_GLYPH, SNAKE_COLOR)?;
        }

        let head = snake.head_char().to_string().repeat(2);
        self.term.draw_cell(snake.head(), &head, HEAD_COLOR)?;

        self.term.print_status(&format!("Score: {}", self.controller.score()))?;
        self.term.flush()
    }

    fn show_game_over(&mut self) -> Result<()> {
        let score = match self.controller.state() {
            GameState::GameOver { score, .. } => score,
            GameState::Playing => return Ok(()),
        };

        self.term.clear_board()?;
        self.term.show_message(&[
            &*format!("Game is over! Your score is {}.", score),
            "",
            "To play again press Enter. To exit press Esc.",
        ])
    }
}
