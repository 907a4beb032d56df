pub mod macros;
pub mod puzzle2048;
pub mod sudoku;
pub mod tictactoe;

use crate::register_games;

// Register all games here. Menu order follows declaration order.
register_games! {
    TicTacToe => {
        game: tictactoe::TicTacToeGame,
        name: "Tic-Tac-Toe",
        description: "Three in a row against a friend or a random AI"
    },
    Sudoku => {
        game: sudoku::SudokuGame,
        name: "Sudoku",
        description: "Fill the 9x9 grid so no row, column or box repeats"
    },
    Puzzle2048 => {
        game: puzzle2048::Puzzle2048Game,
        name: "2048",
        description: "Slide and merge tiles until one reads 2048"
    },
}
