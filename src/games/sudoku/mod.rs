/// Sudoku: rules, session and renderer.
pub mod game;
pub mod renderer;
pub mod rules;

pub use game::SudokuGame;
pub use renderer::SudokuRenderer;
pub use rules::{Puzzle, SudokuRules};
