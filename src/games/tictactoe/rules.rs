use std::fmt;

use tracing::debug;

use crate::ai::MoveStrategy;
use crate::core::grid::Grid;

pub const SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

/// End points of a completed line, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    pub start: (usize, usize),
    pub end: (usize, usize),
}

impl WinLine {
    /// The three cells on the line, start to end.
    pub fn cells(&self) -> [(usize, usize); SIZE] {
        let step = |from: usize, to: usize| -> isize { (to as isize - from as isize).signum() };
        let (dr, dc) = (
            step(self.start.0, self.end.0),
            step(self.start.1, self.end.1),
        );
        let at = |i: isize| {
            (
                (self.start.0 as isize + dr * i) as usize,
                (self.start.1 as isize + dc * i) as usize,
            )
        };
        [at(0), at(1), at(2)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner { player: Player, line: WinLine },
    Draw,
}

/// Every line in scan order: rows, then columns, then the two diagonals.
const LINES: [WinLine; 8] = [
    WinLine { start: (0, 0), end: (0, 2) },
    WinLine { start: (1, 0), end: (1, 2) },
    WinLine { start: (2, 0), end: (2, 2) },
    WinLine { start: (0, 0), end: (2, 0) },
    WinLine { start: (0, 1), end: (2, 1) },
    WinLine { start: (0, 2), end: (2, 2) },
    WinLine { start: (0, 0), end: (2, 2) },
    WinLine { start: (0, 2), end: (2, 0) },
];

/// Tic-Tac-Toe state machine. X always opens.
#[derive(Debug, Clone)]
pub struct TicTacToeRules {
    board: Grid<Cell>,
    turn: Player,
    outcome: Option<Outcome>,
}

impl TicTacToeRules {
    pub fn new() -> Self {
        TicTacToeRules {
            board: Grid::new(SIZE, SIZE, Cell::Empty),
            turn: Player::X,
            outcome: None,
        }
    }

    pub fn reset(&mut self) {
        self.board.reset(Cell::Empty);
        self.turn = Player::X;
        self.outcome = None;
    }

    pub fn board(&self) -> &Grid<Cell> {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.turn
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Some(Outcome::Winner { player, .. }) => Some(player),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinLine> {
        match self.outcome {
            Some(Outcome::Winner { line, .. }) => Some(line),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == Some(Outcome::Draw)
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Place the current player's mark. Returns false, changing nothing, when
    /// the cell is out of bounds or occupied or the game is already decided.
    pub fn place_mark(&mut self, row: usize, col: usize) -> bool {
        if self.is_over() {
            return false;
        }
        match self.board.get_mut(row, col) {
            Ok(cell) if *cell == Cell::Empty => *cell = self.turn.cell(),
            _ => return false,
        }
        debug!(player = %self.turn, row, col, "mark placed");
        self.finish_turn();
        true
    }

    /// Let `strategy` play the current player's move.
    pub fn apply_strategy(&mut self, strategy: &mut dyn MoveStrategy) -> Option<(usize, usize)> {
        if self.is_over() {
            return None;
        }
        let placed = strategy.make_move(&mut self.board, self.turn)?;
        debug!(player = %self.turn, row = placed.0, col = placed.1, "strategy move");
        self.finish_turn();
        Some(placed)
    }

    fn finish_turn(&mut self) {
        if let Some((player, line)) = self.check_winner() {
            self.outcome = Some(Outcome::Winner { player, line });
        } else if self.is_full() {
            self.outcome = Some(Outcome::Draw);
        } else {
            self.turn = self.turn.other();
        }
    }

    /// First completed line in scan order, if any.
    pub fn check_winner(&self) -> Option<(Player, WinLine)> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = line.cells();
            let first = self.board[a];
            let player = first.player()?;
            (first == self.board[b] && first == self.board[c]).then_some((player, *line))
        })
    }

    pub fn is_full(&self) -> bool {
        self.board.iter().all(|(_, &cell)| cell != Cell::Empty)
    }

    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.board.positions(|&cell| cell == Cell::Empty)
    }

    /// Text recorded in the score log once the game is decided.
    pub fn result_text(&self) -> Option<String> {
        match self.outcome? {
            Outcome::Winner { player, .. } => Some(format!("Winner: {player}")),
            Outcome::Draw => Some("Draw".to_string()),
        }
    }
}

impl Default for TicTacToeRules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::random::RandomMoveSelector;
    use proptest::prelude::*;

    fn play(rules: &mut TicTacToeRules, moves: &[(usize, usize)]) {
        for &(r, c) in moves {
            assert!(rules.place_mark(r, c), "move ({r}, {c}) rejected");
        }
    }

    #[test]
    fn test_x_moves_first_and_turns_alternate() {
        let mut rules = TicTacToeRules::new();
        assert_eq!(rules.current_player(), Player::X);
        rules.place_mark(1, 1);
        assert_eq!(rules.current_player(), Player::O);
        assert_eq!(rules.board()[(1, 1)], Cell::X);
        rules.place_mark(0, 0);
        assert_eq!(rules.current_player(), Player::X);
        assert_eq!(rules.board()[(0, 0)], Cell::O);
    }

    #[test]
    fn test_occupied_and_out_of_bounds_are_ignored() {
        let mut rules = TicTacToeRules::new();
        rules.place_mark(0, 0);
        assert!(!rules.place_mark(0, 0));
        assert!(!rules.place_mark(3, 0));
        assert!(!rules.place_mark(0, 7));
        assert_eq!(rules.current_player(), Player::O);
        assert_eq!(rules.empty_cells().len(), 8);
    }

    #[test]
    fn test_row_win_records_line() {
        let mut rules = TicTacToeRules::new();
        play(&mut rules, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(rules.is_over());
        assert_eq!(rules.winner(), Some(Player::X));
        assert_eq!(
            rules.winning_line(),
            Some(WinLine { start: (0, 0), end: (0, 2) })
        );
        assert_eq!(rules.result_text().as_deref(), Some("Winner: X"));
    }

    #[test]
    fn test_column_and_diagonal_lines() {
        let mut rules = TicTacToeRules::new();
        play(&mut rules, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 1)]);
        assert_eq!(rules.winner(), Some(Player::O));
        assert_eq!(
            rules.winning_line(),
            Some(WinLine { start: (0, 1), end: (2, 1) })
        );

        let mut rules = TicTacToeRules::new();
        play(&mut rules, &[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)]);
        assert_eq!(
            rules.winning_line(),
            Some(WinLine { start: (0, 2), end: (2, 0) })
        );
        assert_eq!(rules.winning_line().unwrap().cells(), [(0, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_scan_order_prefers_rows() {
        // X completes row 0 and column 0 with the same final move.
        let mut rules = TicTacToeRules::new();
        play(
            &mut rules,
            &[(0, 1), (1, 1), (0, 2), (1, 2), (1, 0), (2, 1), (2, 0), (2, 2), (0, 0)],
        );
        assert_eq!(rules.winner(), Some(Player::X));
        assert_eq!(
            rules.winning_line(),
            Some(WinLine { start: (0, 0), end: (0, 2) })
        );
        assert!(!rules.is_draw());
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut rules = TicTacToeRules::new();
        play(
            &mut rules,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert!(rules.is_draw());
        assert_eq!(rules.winner(), None);
        assert_eq!(rules.result_text().as_deref(), Some("Draw"));
    }

    #[test]
    fn test_no_moves_after_terminal() {
        let mut rules = TicTacToeRules::new();
        play(&mut rules, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(!rules.place_mark(2, 2));
        let mut ai = RandomMoveSelector::from_seed(7);
        assert_eq!(rules.apply_strategy(&mut ai), None);
        assert_eq!(rules.board()[(2, 2)], Cell::Empty);
    }

    #[test]
    fn test_reset_clears_outcome() {
        let mut rules = TicTacToeRules::new();
        play(&mut rules, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        rules.reset();
        assert!(!rules.is_over());
        assert_eq!(rules.current_player(), Player::X);
        assert_eq!(rules.empty_cells().len(), 9);
    }

    #[test]
    fn test_strategy_move_passes_turn() {
        let mut rules = TicTacToeRules::new();
        rules.place_mark(1, 1);
        let mut ai = RandomMoveSelector::from_seed(1);
        let (r, c) = rules.apply_strategy(&mut ai).unwrap();
        assert_eq!(rules.board()[(r, c)], Cell::O);
        assert_eq!(rules.current_player(), Player::X);
    }

    proptest! {
        #[test]
        fn prop_turns_alternate_and_outcomes_exclusive(
            picks in proptest::collection::vec(0usize..9, 0..20)
        ) {
            let mut rules = TicTacToeRules::new();
            let mut expected = Player::X;
            for pick in picks {
                let (r, c) = (pick / 3, pick % 3);
                let before = rules.current_player();
                prop_assert_eq!(before, expected);
                if rules.place_mark(r, c) {
                    prop_assert_eq!(rules.board()[(r, c)], before.cell());
                    if !rules.is_over() {
                        expected = before.other();
                    }
                }
                prop_assert!(!(rules.winner().is_some() && rules.is_draw()));
            }
            let x = rules.board().positions(|&c| c == Cell::X).len();
            let o = rules.board().positions(|&c| c == Cell::O).len();
            prop_assert!(x == o || x == o + 1);
        }
    }
}
