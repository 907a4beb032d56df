use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::game::TicTacToeGame;
use super::rules::{Cell, Outcome, SIZE};
use crate::core::renderer::{centered, GameRenderer};

pub struct TicTacToeRenderer;

impl GameRenderer<TicTacToeGame> for TicTacToeRenderer {
    fn render(frame: &mut Frame, area: Rect, game: &TicTacToeGame) {
        let rules = game.rules();
        let block = Block::default()
            .title(" Tic-Tac-Toe ")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [board_area, status_area, help_area] = Layout::vertical([
            Constraint::Min(7),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(inner);

        let line = rules.winning_line().map(|l| l.cells());
        let mut lines = Vec::with_capacity(SIZE * 2 - 1);
        for row in 0..SIZE {
            let mut spans = Vec::with_capacity(SIZE * 2 - 1);
            for col in 0..SIZE {
                let cell = rules.board()[(row, col)];
                let (symbol, color) = match cell {
                    Cell::Empty => (' ', Color::DarkGray),
                    Cell::X => ('X', Color::Cyan),
                    Cell::O => ('O', Color::Magenta),
                };
                let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
                if line.is_some_and(|cells| cells.contains(&(row, col))) {
                    style = style.bg(Color::Green).fg(Color::Black);
                }
                if game.cursor() == (row, col) && !rules.is_over() {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(format!(" {symbol} "), style));
                if col + 1 < SIZE {
                    spans.push(Span::raw("│"));
                }
            }
            lines.push(Line::from(spans));
            if row + 1 < SIZE {
                lines.push(Line::from("───┼───┼───"));
            }
        }
        frame.render_widget(Paragraph::new(lines), centered(board_area, 11, 5));

        let status = match rules.outcome() {
            Some(Outcome::Winner { player, .. }) => format!("Winner: {player}!"),
            Some(Outcome::Draw) => "Draw!".to_string(),
            None if game.vs_ai() => format!(
                "Turn: {}  (you are X, {} AI is O)",
                rules.current_player(),
                game.ai_name()
            ),
            None => format!("Turn: {}", rules.current_player()),
        };
        let mut status_lines = vec![Line::from(status).style(Style::default().fg(Color::Yellow))];
        if rules.is_over() {
            status_lines.push(Line::from("Press [R] to play again or [Esc] for the menu"));
        }
        frame.render_widget(
            Paragraph::new(status_lines).alignment(Alignment::Center),
            status_area,
        );

        frame.render_widget(
            Paragraph::new("[Arrows/WASD] Move  [Enter] Place  [1-9] Cell  [R] Restart  [T] Toggle AI")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            help_area,
        );
    }
}
