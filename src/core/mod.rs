pub mod engine;
pub mod game;
pub mod grid;
pub mod registry;
pub mod renderer;
