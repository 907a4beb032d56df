/// Tic-Tac-Toe: rules, session and renderer.
pub mod game;
pub mod renderer;
pub mod rules;

pub use game::TicTacToeGame;
pub use renderer::TicTacToeRenderer;
pub use rules::{Cell, Outcome, Player, TicTacToeRules, WinLine};
