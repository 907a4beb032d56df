use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

use super::renderer::SudokuRenderer;
use super::rules::{Puzzle, SudokuRules};
use crate::core::game::{Context, Game, GameOverTimer};
use crate::core::registry::SessionOptions;
use crate::core::renderer::GameRenderer;

pub const NAME: &str = "Sudoku";

pub struct SudokuGame {
    rules: SudokuRules,
    puzzle: Puzzle,
    timer: GameOverTimer,
    /// Set when the last digit entered was refused.
    rejected: bool,
}

impl SudokuGame {
    pub fn new(options: &SessionOptions) -> Self {
        let puzzle = options.puzzle.clone().unwrap_or_default();
        Self {
            rules: SudokuRules::with_puzzle(&puzzle),
            puzzle,
            timer: GameOverTimer::new(options.grace_period),
            rejected: false,
        }
    }

    pub fn rules(&self) -> &SudokuRules {
        &self.rules
    }

    pub fn rejected(&self) -> bool {
        self.rejected
    }

    fn enter(&mut self, value: u8) {
        if let Some((row, col)) = self.rules.selected() {
            self.rejected = !self.rules.place(row, col, value) && !self.rules.is_over();
        }
    }

    fn clear(&mut self) {
        if let Some((row, col)) = self.rules.selected() {
            self.rules.clear_cell(row, col);
            self.rejected = false;
        }
    }
}

impl Game for SudokuGame {
    fn name(&self) -> &'static str {
        NAME
    }

    fn init(&mut self) {
        self.rules.load_puzzle(&self.puzzle);
        self.rules.select(0, 0);
        self.timer.reset();
        self.rejected = false;
    }

    fn handle_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('w') => self.rules.move_selection(-1, 0),
            KeyCode::Down | KeyCode::Char('s') => self.rules.move_selection(1, 0),
            KeyCode::Left | KeyCode::Char('a') => self.rules.move_selection(0, -1),
            KeyCode::Right | KeyCode::Char('d') => self.rules.move_selection(0, 1),
            KeyCode::Char(c @ '1'..='9') => self.enter(c as u8 - b'0'),
            KeyCode::Char('0') | KeyCode::Backspace | KeyCode::Delete => self.clear(),
            _ => {}
        }
    }

    fn update(&mut self, dt: f32, ctx: &Context) {
        self.timer.tick(dt, NAME, self.rules.result_text(), ctx);
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        SudokuRenderer::render(frame, area, self);
    }

    fn is_over(&self) -> bool {
        self.timer.expired(self.rules.is_over())
    }
}
