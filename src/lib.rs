pub mod ai;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod games;
pub mod scores;
pub mod ui;

// Re-export for convenience
pub use crate::core::game::{Context, Game};
pub use crate::core::grid::Grid;
pub use crate::games::Session;
