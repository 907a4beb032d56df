use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::game::Puzzle2048Game;
use super::rules::SIZE;
use crate::core::renderer::{centered, GameRenderer};

const TILE_WIDTH: u16 = 7;

fn tile_style(value: u32) -> Style {
    let bg = match value {
        0 => Color::Indexed(237),
        2 => Color::Indexed(230),
        4 => Color::Indexed(223),
        8 => Color::Indexed(215),
        16 => Color::Indexed(209),
        32 => Color::Indexed(203),
        64 => Color::Indexed(196),
        128 | 256 | 512 => Color::Indexed(220),
        1024 | 2048 => Color::Indexed(214),
        _ => Color::Indexed(93),
    };
    let fg = if value <= 4 { Color::Black } else { Color::White };
    Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD)
}

pub struct Puzzle2048Renderer;

impl GameRenderer<Puzzle2048Game> for Puzzle2048Renderer {
    fn render(frame: &mut Frame, area: Rect, game: &Puzzle2048Game) {
        let rules = game.rules();
        let block = Block::default().title(" 2048 ").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [score_area, board_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(SIZE as u16 * 2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(format!(
                "Score: {}   Best tile: {}",
                rules.score(),
                rules.highest_tile()
            ))
            .alignment(Alignment::Center),
            score_area,
        );

        let mut lines = Vec::with_capacity(SIZE * 2);
        for row in rules.rows() {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|&value| {
                    let label = if value == 0 {
                        String::new()
                    } else {
                        value.to_string()
                    };
                    [
                        Span::styled(
                            format!("{label:^width$}", width = TILE_WIDTH as usize),
                            tile_style(value),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            lines.push(Line::from(spans));
            lines.push(Line::default());
        }
        let width = (TILE_WIDTH + 1) * SIZE as u16;
        frame.render_widget(
            Paragraph::new(lines),
            centered(board_area, width, SIZE as u16 * 2),
        );

        let status = if rules.is_game_over() && rules.won() {
            Line::from("YOU WON! No moves left.").style(Style::default().fg(Color::Yellow))
        } else if rules.is_game_over() {
            Line::from("GAME OVER! Press [Esc] for the menu").style(Style::default().fg(Color::Red))
        } else if rules.won() {
            Line::from("2048 reached! Keep going.").style(Style::default().fg(Color::Yellow))
        } else {
            Line::default()
        };
        frame.render_widget(
            Paragraph::new(status).alignment(Alignment::Center),
            status_area,
        );

        frame.render_widget(
            Paragraph::new("[Arrows/WASD] Slide tiles  [Esc] Menu")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            help_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::SessionOptions;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_render_shows_score_and_tiles() {
        let game = Puzzle2048Game::new(&SessionOptions::default());
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal
            .draw(|frame| Puzzle2048Renderer::render(frame, frame.area(), &game))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Score: 0"));
        assert!(text.contains('2') || text.contains('4'));
    }
}
