use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use tracing::{debug, info};

use super::renderer::TicTacToeRenderer;
use super::rules::{Player, TicTacToeRules, SIZE};
use crate::ai::{MoveStrategy, RandomMoveSelector};
use crate::core::game::{Context, Game, GameOverTimer};
use crate::core::registry::SessionOptions;
use crate::core::renderer::GameRenderer;

pub const NAME: &str = "Tic-Tac-Toe";

/// Session adapter around [`TicTacToeRules`]. With the AI on, the human
/// plays X and the random selector answers as O.
pub struct TicTacToeGame {
    rules: TicTacToeRules,
    ai: RandomMoveSelector,
    vs_ai: bool,
    cursor: (usize, usize),
    timer: GameOverTimer,
}

impl TicTacToeGame {
    pub fn new(options: &SessionOptions) -> Self {
        Self {
            rules: TicTacToeRules::new(),
            ai: RandomMoveSelector::new(options.rng()),
            vs_ai: options.vs_ai,
            cursor: (1, 1),
            timer: GameOverTimer::new(options.grace_period),
        }
    }

    pub fn rules(&self) -> &TicTacToeRules {
        &self.rules
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn vs_ai(&self) -> bool {
        self.vs_ai
    }

    pub fn set_vs_ai(&mut self, vs_ai: bool) {
        self.vs_ai = vs_ai;
        self.ai_turn();
    }

    pub fn ai_name(&self) -> &str {
        self.ai.name()
    }

    pub fn timer(&self) -> &GameOverTimer {
        &self.timer
    }

    /// Place the current player's mark, then let the AI answer if it is on.
    pub fn play(&mut self, row: usize, col: usize) -> bool {
        if self.vs_ai && self.rules.current_player() == Player::O {
            return false;
        }
        if !self.rules.place_mark(row, col) {
            return false;
        }
        self.ai_turn();
        true
    }

    fn ai_turn(&mut self) {
        if self.vs_ai && !self.rules.is_over() && self.rules.current_player() == Player::O {
            if let Some((row, col)) = self.rules.apply_strategy(&mut self.ai) {
                debug!(row, col, strategy = self.ai.name(), "ai replied");
            }
        }
    }

    fn move_cursor(&mut self, dr: isize, dc: isize) {
        let step = |v: usize, d: isize| (v as isize + d).clamp(0, SIZE as isize - 1) as usize;
        self.cursor = (step(self.cursor.0, dr), step(self.cursor.1, dc));
    }
}

impl Game for TicTacToeGame {
    fn name(&self) -> &'static str {
        NAME
    }

    fn init(&mut self) {
        self.rules.reset();
        self.timer.reset();
        self.cursor = (1, 1);
    }

    fn handle_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('w') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('s') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('a') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('d') => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let (row, col) = self.cursor;
                self.play(row, col);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.cursor = (index / SIZE, index % SIZE);
                self.play(index / SIZE, index % SIZE);
            }
            KeyCode::Char('r') => {
                info!(game = NAME, "restarted");
                self.init();
            }
            KeyCode::Char('t') => self.set_vs_ai(!self.vs_ai),
            _ => {}
        }
    }

    fn update(&mut self, dt: f32, ctx: &Context) {
        self.timer.tick(dt, NAME, self.rules.result_text(), ctx);
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        TicTacToeRenderer::render(frame, area, self);
    }

    fn is_over(&self) -> bool {
        self.timer.expired(self.rules.is_over())
    }
}
