/// 2048: rules, session and renderer.
pub mod game;
pub mod renderer;
pub mod rules;

pub use game::Puzzle2048Game;
pub use renderer::Puzzle2048Renderer;
pub use rules::{Direction, Puzzle2048Rules};
