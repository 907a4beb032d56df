use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::MoveStrategy;
use crate::core::grid::Grid;
use crate::games::tictactoe::{Cell, Player};

/// Plays uniformly at random among the empty cells.
#[derive(Debug, Clone)]
pub struct RandomMoveSelector {
    rng: StdRng,
}

impl RandomMoveSelector {
    pub fn new(rng: StdRng) -> Self {
        RandomMoveSelector { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomMoveSelector {
    fn default() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl MoveStrategy for RandomMoveSelector {
    fn make_move(&mut self, board: &mut Grid<Cell>, symbol: Player) -> Option<(usize, usize)> {
        let empty = board.positions(|&cell| cell == Cell::Empty);
        if empty.is_empty() {
            return None;
        }
        let (row, col) = empty[self.rng.random_range(0..empty.len())];
        board[(row, col)] = symbol.cell();
        Some((row, col))
    }

    fn name(&self) -> &str {
        "Random"
    }
}
