use std::str::FromStr;

use tracing::debug;

use crate::core::grid::Grid;
use crate::error::PuzzleError;

pub const SIZE: usize = 9;
const BOX: usize = 3;

/// A starting layout, 0 for blank cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    cells: [[u8; SIZE]; SIZE],
}

impl Puzzle {
    pub const CLASSIC: Puzzle = Puzzle {
        cells: [
            [5, 3, 0, 0, 7, 0, 0, 0, 0],
            [6, 0, 0, 1, 9, 5, 0, 0, 0],
            [0, 9, 8, 0, 0, 0, 0, 6, 0],
            [8, 0, 0, 0, 6, 0, 0, 0, 3],
            [4, 0, 0, 8, 0, 3, 0, 0, 1],
            [7, 0, 0, 0, 2, 0, 0, 0, 6],
            [0, 6, 0, 0, 0, 0, 2, 8, 0],
            [0, 0, 0, 4, 1, 9, 0, 0, 5],
            [0, 0, 0, 0, 8, 0, 0, 7, 9],
        ],
    };

    pub fn new(cells: [[u8; SIZE]; SIZE]) -> Self {
        Puzzle { cells }
    }

    pub fn cell(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Parse 81 cells in reading order. Digits 1-9 are givens, `0` or `.`
    /// are blanks; whitespace is ignored. Givens must not repeat.
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let mut values = Vec::with_capacity(SIZE * SIZE);
        for ch in text.chars().filter(|c| !c.is_whitespace()) {
            let value = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                other => return Err(PuzzleError::BadCharacter(other)),
            };
            values.push(value);
        }
        if values.len() != SIZE * SIZE {
            return Err(PuzzleError::BadLength(values.len()));
        }

        let mut cells = [[0u8; SIZE]; SIZE];
        for (i, value) in values.into_iter().enumerate() {
            cells[i / SIZE][i % SIZE] = value;
        }
        let puzzle = Puzzle { cells };
        puzzle.check_givens()?;
        Ok(puzzle)
    }

    fn check_givens(&self) -> Result<(), PuzzleError> {
        let rules = SudokuRules::with_puzzle(self);
        for row in 0..SIZE {
            for col in 0..SIZE {
                let value = self.cells[row][col];
                if value != 0 && !rules.is_valid_placement(row, col, value) {
                    return Err(PuzzleError::ConflictingGiven { row, col, value });
                }
            }
        }
        Ok(())
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        Puzzle::CLASSIC
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Puzzle::parse(s)
    }
}

/// Sudoku state machine: a 9x9 board, the fixed givens and a selected cell.
#[derive(Debug, Clone)]
pub struct SudokuRules {
    board: Grid<u8>,
    fixed: Grid<bool>,
    selected: Option<(usize, usize)>,
    solved: bool,
}

impl SudokuRules {
    pub fn new() -> Self {
        Self::with_puzzle(&Puzzle::CLASSIC)
    }

    pub fn with_puzzle(puzzle: &Puzzle) -> Self {
        let mut rules = SudokuRules {
            board: Grid::new(SIZE, SIZE, 0),
            fixed: Grid::new(SIZE, SIZE, false),
            selected: None,
            solved: false,
        };
        rules.load_puzzle(puzzle);
        rules
    }

    /// Replace the board with `puzzle`; its non-zero cells become fixed.
    pub fn load_puzzle(&mut self, puzzle: &Puzzle) {
        self.board.reset(0);
        self.fixed.reset(false);
        for row in 0..SIZE {
            for col in 0..SIZE {
                let value = puzzle.cell(row, col);
                self.board[(row, col)] = value;
                self.fixed[(row, col)] = value != 0;
            }
        }
        self.selected = None;
        self.solved = self.is_solved();
    }

    pub fn board(&self) -> &Grid<u8> {
        &self.board
    }

    pub fn value(&self, row: usize, col: usize) -> u8 {
        self.board[(row, col)]
    }

    pub fn is_fixed(&self, row: usize, col: usize) -> bool {
        self.fixed[(row, col)]
    }

    pub fn selected(&self) -> Option<(usize, usize)> {
        self.selected
    }

    pub fn select(&mut self, row: usize, col: usize) -> bool {
        if !self.board.contains(row, col) {
            return false;
        }
        self.selected = Some((row, col));
        true
    }

    /// Move the selection by `(dr, dc)`, clamped to the board.
    pub fn move_selection(&mut self, dr: isize, dc: isize) {
        let Some((row, col)) = self.selected else {
            self.selected = Some((0, 0));
            return;
        };
        let clamp = |v: usize, d: isize| (v as isize + d).clamp(0, SIZE as isize - 1) as usize;
        self.selected = Some((clamp(row, dr), clamp(col, dc)));
    }

    /// True iff no other cell in the row, column or box already holds `value`.
    pub fn is_valid_placement(&self, row: usize, col: usize, value: u8) -> bool {
        let row_clash = (0..SIZE).any(|c| c != col && self.board[(row, c)] == value);
        let col_clash = (0..SIZE).any(|r| r != row && self.board[(r, col)] == value);
        let (box_r, box_c) = ((row / BOX) * BOX, (col / BOX) * BOX);
        let box_clash = (box_r..box_r + BOX)
            .flat_map(|r| (box_c..box_c + BOX).map(move |c| (r, c)))
            .any(|(r, c)| (r, c) != (row, col) && self.board[(r, c)] == value);
        !(row_clash || col_clash || box_clash)
    }

    /// Enter `value` at a non-fixed cell if it breaks no uniqueness rule.
    pub fn place(&mut self, row: usize, col: usize, value: u8) -> bool {
        if self.solved
            || !self.board.contains(row, col)
            || !(1..=9).contains(&value)
            || self.is_fixed(row, col)
            || !self.is_valid_placement(row, col, value)
        {
            return false;
        }
        self.board[(row, col)] = value;
        debug!(row, col, value, "digit placed");
        if self.is_solved() {
            self.solved = true;
        }
        true
    }

    /// Blank a non-fixed cell.
    pub fn clear_cell(&mut self, row: usize, col: usize) -> bool {
        if self.solved || !self.board.contains(row, col) || self.is_fixed(row, col) {
            return false;
        }
        self.board[(row, col)] = 0;
        true
    }

    /// Every cell filled and every cell unique in its row, column and box.
    pub fn is_solved(&self) -> bool {
        self.board
            .iter()
            .all(|((r, c), &v)| v != 0 && self.is_valid_placement(r, c, v))
    }

    /// Terminal flag, set by the placement that completes the board or by
    /// loading an already complete one.
    pub fn is_over(&self) -> bool {
        self.solved
    }

    /// Whether a filled, non-fixed cell currently clashes with another cell.
    pub fn has_conflict(&self, row: usize, col: usize) -> bool {
        let value = self.board[(row, col)];
        value != 0 && !self.is_fixed(row, col) && !self.is_valid_placement(row, col, value)
    }

    /// Every cell [`has_conflict`](Self::has_conflict) would highlight.
    pub fn conflicts(&self) -> Vec<(usize, usize)> {
        self.board
            .iter()
            .map(|(pos, _)| pos)
            .filter(|&(r, c)| self.has_conflict(r, c))
            .collect()
    }

    pub fn filled(&self) -> usize {
        self.board.positions(|&v| v != 0).len()
    }

    pub fn result_text(&self) -> Option<String> {
        self.solved.then(|| "Solved!".to_string())
    }
}

impl Default for SudokuRules {
    fn default() -> Self {
        Self::new()
    }
}
