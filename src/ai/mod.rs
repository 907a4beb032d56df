//! Move selection for computer-controlled Tic-Tac-Toe players.

pub mod random;

use crate::core::grid::Grid;
use crate::games::tictactoe::{Cell, Player};

pub use random::RandomMoveSelector;

/// Chooses and plays a move for `symbol` directly on the board.
///
/// Callers only invoke this on `symbol`'s turn while the game is undecided;
/// terminal evaluation stays with the rule engine.
pub trait MoveStrategy {
    /// Place `symbol` on some empty cell and return it, or `None` if the
    /// board has no empty cell.
    fn make_move(&mut self, board: &mut Grid<Cell>, symbol: Player) -> Option<(usize, usize)>;

    fn name(&self) -> &str;
}
