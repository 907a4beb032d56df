use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const TEXT: &str = "\
Features
  - Three classic puzzles behind one menu
  - Scores saved to a plain text log with player names
  - Hall of Legends and achievement tiers

Controls
  Tic-Tac-Toe  arrows/WASD move, Enter or 1-9 place, R restart, T toggle AI
  Sudoku       arrows/WASD select, 1-9 enter, 0 or Backspace clear
  2048         arrows/WASD slide tiles
  Anywhere     Esc returns to the main menu

Press Esc or Backspace to go back.";

pub fn render(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(TEXT)
            .wrap(Wrap { trim: false })
            .block(Block::default().title(" SETTINGS ").borders(Borders::ALL)),
        area,
    );
}
