use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use tracing::info;

use super::renderer::Puzzle2048Renderer;
use super::rules::{Direction, Puzzle2048Rules};
use crate::core::game::{Context, Game, GameOverTimer};
use crate::core::registry::SessionOptions;
use crate::core::renderer::GameRenderer;

pub const NAME: &str = "2048";

pub struct Puzzle2048Game {
    rules: Puzzle2048Rules,
    timer: GameOverTimer,
    announced_win: bool,
}

impl Puzzle2048Game {
    pub fn new(options: &SessionOptions) -> Self {
        Self {
            rules: Puzzle2048Rules::new(options.rng()),
            timer: GameOverTimer::new(options.grace_period),
            announced_win: false,
        }
    }

    pub fn rules(&self) -> &Puzzle2048Rules {
        &self.rules
    }

    pub fn timer(&self) -> &GameOverTimer {
        &self.timer
    }
}

impl Game for Puzzle2048Game {
    fn name(&self) -> &'static str {
        NAME
    }

    fn init(&mut self) {
        self.rules.reset();
        self.timer.reset();
        self.announced_win = false;
    }

    fn handle_input(&mut self, key: KeyEvent) {
        let direction = match key.code {
            KeyCode::Left | KeyCode::Char('a') => Direction::Left,
            KeyCode::Right | KeyCode::Char('d') => Direction::Right,
            KeyCode::Up | KeyCode::Char('w') => Direction::Up,
            KeyCode::Down | KeyCode::Char('s') => Direction::Down,
            _ => return,
        };
        self.rules.make_move(direction);
    }

    fn update(&mut self, dt: f32, ctx: &Context) {
        if self.rules.won() && !self.announced_win {
            self.announced_win = true;
            info!(game = NAME, score = self.rules.score(), "reached 2048");
        }
        self.timer.tick(dt, NAME, self.rules.result_text(), ctx);
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        Puzzle2048Renderer::render(frame, area, self);
    }

    fn is_over(&self) -> bool {
        self.timer.expired(self.rules.is_game_over())
    }
}
