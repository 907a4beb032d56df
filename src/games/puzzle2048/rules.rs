use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::core::grid::Grid;

pub const SIZE: usize = 4;
pub const WINNING_TILE: u32 = 2048;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Coordinates of line `index`, ordered from the target edge inward.
    fn line(self, index: usize) -> [(usize, usize); SIZE] {
        std::array::from_fn(|i| match self {
            Direction::Left => (index, i),
            Direction::Right => (index, SIZE - 1 - i),
            Direction::Up => (i, index),
            Direction::Down => (SIZE - 1 - i, index),
        })
    }
}

/// Slide non-zero values to the front of `line`, keeping their order.
fn compress(line: &mut [u32; SIZE]) {
    let mut write = 0;
    for read in 0..SIZE {
        if line[read] != 0 {
            line.swap(write, read);
            write += 1;
        }
    }
}

/// Merge equal neighbours front to back. Returns the merged values.
fn merge(line: &mut [u32; SIZE]) -> Vec<u32> {
    let mut merged = Vec::new();
    for i in 0..SIZE - 1 {
        if line[i] != 0 && line[i] == line[i + 1] {
            line[i] *= 2;
            line[i + 1] = 0;
            merged.push(line[i]);
        }
    }
    merged
}

/// 2048 on a 4x4 board. Owns its random source so spawns are reproducible.
#[derive(Debug, Clone)]
pub struct Puzzle2048Rules {
    board: Grid<u32>,
    score: u32,
    won: bool,
    game_over: bool,
    rng: StdRng,
}

impl Puzzle2048Rules {
    /// A fresh game with two spawned tiles.
    pub fn new(rng: StdRng) -> Self {
        let mut rules = Self {
            board: Grid::new(SIZE, SIZE, 0),
            score: 0,
            won: false,
            game_over: false,
            rng,
        };
        rules.reset();
        rules
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Start from a fixed layout, without spawning.
    pub fn from_board(rows: [[u32; SIZE]; SIZE], rng: StdRng) -> Self {
        let mut board = Grid::new(SIZE, SIZE, 0);
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                board[(r, c)] = value;
            }
        }
        let mut rules = Self {
            board,
            score: 0,
            won: false,
            game_over: false,
            rng,
        };
        rules.won = rules.board.iter().any(|(_, &v)| v >= WINNING_TILE);
        rules.game_over = !rules.can_move();
        rules
    }

    pub fn reset(&mut self) {
        self.board.reset(0);
        self.score = 0;
        self.won = false;
        self.game_over = false;
        self.spawn_tile();
        self.spawn_tile();
    }

    pub fn board(&self) -> &Grid<u32> {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn highest_tile(&self) -> u32 {
        self.board.iter().map(|(_, &v)| v).max().unwrap_or(0)
    }

    /// Put a 2 (90%) or a 4 (10%) on a uniformly chosen empty cell.
    pub fn spawn_tile(&mut self) -> Option<(usize, usize)> {
        let empty = self.board.positions(|&v| v == 0);
        if empty.is_empty() {
            return None;
        }
        let (row, col) = empty[self.rng.random_range(0..empty.len())];
        let value = if self.rng.random_bool(0.9) { 2 } else { 4 };
        self.board[(row, col)] = value;
        Some((row, col))
    }

    /// Compress, merge and compress each line toward `direction`.
    /// Returns whether any cell changed. Does not spawn.
    pub fn slide(&mut self, direction: Direction) -> bool {
        let mut moved = false;
        for index in 0..SIZE {
            let coords = direction.line(index);
            let before: [u32; SIZE] = coords.map(|pos| self.board[pos]);
            let mut line = before;
            compress(&mut line);
            for value in merge(&mut line) {
                self.score += value;
                if value == WINNING_TILE {
                    self.won = true;
                }
            }
            compress(&mut line);
            if line != before {
                moved = true;
                for (pos, value) in coords.into_iter().zip(line) {
                    self.board[pos] = value;
                }
            }
        }
        moved
    }

    pub fn move_left(&mut self) -> bool {
        self.slide(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.slide(Direction::Right)
    }

    pub fn move_up(&mut self) -> bool {
        self.slide(Direction::Up)
    }

    pub fn move_down(&mut self) -> bool {
        self.slide(Direction::Down)
    }

    /// One player turn: slide, spawn on change, then detect a dead board.
    pub fn make_move(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }
        let moved = self.slide(direction);
        if moved {
            self.spawn_tile();
            debug!(?direction, score = self.score, "tiles slid");
            if !self.can_move() {
                self.game_over = true;
            }
        }
        moved
    }

    /// An empty cell or an adjacent equal pair exists somewhere.
    pub fn can_move(&self) -> bool {
        self.board.iter().any(|((r, c), &v)| {
            v == 0
                || (c + 1 < SIZE && self.board[(r, c + 1)] == v)
                || (r + 1 < SIZE && self.board[(r + 1, c)] == v)
        })
    }

    pub fn result_text(&self) -> Option<String> {
        if !self.game_over {
            return None;
        }
        let tag = if self.won { "Won!" } else { "Game Over" };
        Some(format!("Score: {} ({tag})", self.score))
    }

    fn row(&self, r: usize) -> [u32; SIZE] {
        std::array::from_fn(|c| self.board[(r, c)])
    }

    /// Board as rows, for display and tests.
    pub fn rows(&self) -> [[u32; SIZE]; SIZE] {
        std::array::from_fn(|r| self.row(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKERBOARD: [[u32; SIZE]; SIZE] = [
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ];

    fn rules(rows: [[u32; SIZE]; SIZE]) -> Puzzle2048Rules {
        Puzzle2048Rules::from_board(rows, StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_new_game_spawns_two_tiles() {
        let game = Puzzle2048Rules::from_seed(42);
        let tiles = game.board().positions(|&v| v != 0);
        assert_eq!(tiles.len(), 2);
        for pos in tiles {
            assert!(matches!(game.board()[pos], 2 | 4));
        }
        assert_eq!(game.score(), 0);
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_merge_pair_then_compress() {
        let mut game = rules([[2, 2, 4, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(game.move_left());
        assert_eq!(game.rows()[0], [4, 4, 0, 0]);
        assert_eq!(game.score(), 4);
    }

    #[test]
    fn test_four_equal_merge_pairwise() {
        let mut game = rules([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
        assert!(game.move_left());
        assert_eq!(game.rows()[0], [4, 4, 0, 0]);
        assert_eq!(game.score(), 8);
    }

    #[test]
    fn test_right_and_vertical_slides() {
        let mut game = rules([[2, 2, 4, 0], [0; 4], [0; 4], [0; 4]]);
        game.move_right();
        assert_eq!(game.rows()[0], [0, 0, 4, 4]);

        let mut game = rules([[2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0], [0; 4]]);
        game.move_down();
        let col: Vec<u32> = game.rows().iter().map(|r| r[0]).collect();
        assert_eq!(col, vec![0, 0, 4, 4]);
        game.move_up();
        let col: Vec<u32> = game.rows().iter().map(|r| r[0]).collect();
        assert_eq!(col, vec![8, 0, 0, 0]);
        assert_eq!(game.score(), 12);
    }

    #[test]
    fn test_blocked_slide_reports_no_change() {
        let mut game = rules([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(!game.move_left());
        assert!(!game.make_move(Direction::Left));
        assert_eq!(game.board().positions(|&v| v != 0).len(), 2);
    }

    #[test]
    fn test_successful_move_spawns_one_tile() {
        let mut game = rules([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(game.make_move(Direction::Left));
        assert_eq!(game.board().positions(|&v| v != 0).len(), 2);
    }

    #[test]
    fn test_checkerboard_has_no_moves() {
        let mut game = rules(CHECKERBOARD);
        assert!(!game.can_move());
        assert!(game.is_game_over());
        for direction in Direction::ALL {
            assert!(!game.make_move(direction));
        }
        assert_eq!(game.rows(), CHECKERBOARD);
        assert_eq!(game.result_text().as_deref(), Some("Score: 0 (Game Over)"));
    }

    #[test]
    fn test_full_board_with_pair_can_move() {
        let mut rows = CHECKERBOARD;
        rows[3][3] = 4;
        let game = rules(rows);
        assert!(game.can_move());
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_spawn_into_last_gap_keeps_game_alive_while_pairs_remain() {
        // Row 3 merges, the spawn fills its gap, and the new 4,4 pair remains.
        let mut game = rules([[4, 8, 16, 32], [64, 128, 256, 512], [8, 16, 32, 64], [2, 2, 4, 8]]);
        assert!(game.make_move(Direction::Left));
        assert_eq!(game.rows()[3][..3], [4, 4, 8]);
        assert!(game.can_move());
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_reaching_2048_sets_sticky_win() {
        let mut game = rules([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(game.make_move(Direction::Left));
        assert!(game.won());
        assert_eq!(game.score(), 2048);
        assert!(!game.is_game_over());
        game.make_move(Direction::Right);
        assert!(game.won());
    }

    #[test]
    fn test_won_game_result_text() {
        let mut rows = CHECKERBOARD;
        rows[0][0] = 2048;
        let game = rules(rows);
        assert!(game.won());
        assert_eq!(game.result_text().as_deref(), Some("Score: 0 (Won!)"));
    }

    #[test]
    fn test_reset_clears_score_and_flags() {
        let mut game = rules(CHECKERBOARD);
        game.reset();
        assert_eq!(game.score(), 0);
        assert!(!game.is_game_over());
        assert_eq!(game.board().positions(|&v| v != 0).len(), 2);
    }

    #[test]
    fn test_spawn_distribution_is_mostly_twos() {
        let mut game = rules([[0; 4]; 4]);
        let mut fours = 0;
        for _ in 0..1000 {
            game.board.reset(0);
            let pos = game.spawn_tile().unwrap();
            if game.board()[pos] == 4 {
                fours += 1;
            }
        }
        assert!((50..=150).contains(&fours), "fours = {fours}");
    }
}
