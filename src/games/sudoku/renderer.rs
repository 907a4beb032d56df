use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::game::SudokuGame;
use super::rules::SIZE;
use crate::core::renderer::{centered, GameRenderer};

const SEPARATOR: &str = "─────────┼─────────┼─────────";

pub struct SudokuRenderer;

impl GameRenderer<SudokuGame> for SudokuRenderer {
    fn render(frame: &mut Frame, area: Rect, game: &SudokuGame) {
        let rules = game.rules();
        let block = Block::default().title(" Sudoku ").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [board_area, status_area, help_area] = Layout::vertical([
            Constraint::Min(11),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let conflicts = rules.conflicts();
        let mut lines = Vec::with_capacity(SIZE + 2);
        for row in 0..SIZE {
            if row > 0 && row % 3 == 0 {
                lines.push(Line::from(SEPARATOR).style(Style::default().fg(Color::DarkGray)));
            }
            let mut spans = Vec::new();
            for col in 0..SIZE {
                if col > 0 && col % 3 == 0 {
                    spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
                }
                let value = rules.value(row, col);
                let text = if value == 0 {
                    " · ".to_string()
                } else {
                    format!(" {value} ")
                };
                let mut style = if rules.is_fixed(row, col) {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                if conflicts.contains(&(row, col)) {
                    style = style.fg(Color::Red);
                }
                if rules.selected() == Some((row, col)) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(text, style));
            }
            lines.push(Line::from(spans));
        }
        frame.render_widget(Paragraph::new(lines), centered(board_area, 29, 11));

        let status = if rules.is_over() {
            Line::from("SOLVED! Well done.").style(Style::default().fg(Color::Green))
        } else if game.rejected() {
            Line::from("That digit breaks a row, column or box rule")
                .style(Style::default().fg(Color::Red))
        } else {
            Line::from(format!("Filled {}/{}", rules.filled(), SIZE * SIZE))
        };
        frame.render_widget(
            Paragraph::new(status).alignment(Alignment::Center),
            status_area,
        );

        frame.render_widget(
            Paragraph::new("[Arrows/WASD] Select  [1-9] Enter  [0/Backspace] Clear  [Esc] Menu")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            help_area,
        );
    }
}
