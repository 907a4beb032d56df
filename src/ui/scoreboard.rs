use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::scores::{PlayerStats, ScoreEntry, ScoreLog};

pub const RECENT_LIMIT: usize = 10;
pub const LEGENDS_LIMIT: usize = 3;
pub const EMPTY_TEXT: &str = "No champions recorded yet. Play a game!";

/// Snapshot of the score log taken when the screen opens.
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    recent: Vec<ScoreEntry>,
    legends: Vec<(String, usize)>,
    stats: PlayerStats,
}

impl ScoreBoard {
    pub fn load(log: &ScoreLog, player: &str) -> Self {
        Self {
            recent: log.recent(RECENT_LIMIT),
            legends: log.legends(LEGENDS_LIMIT),
            stats: log.player_stats(player),
        }
    }

    pub fn recent(&self) -> &[ScoreEntry] {
        &self.recent
    }

    pub fn legends(&self) -> &[(String, usize)] {
        &self.legends
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let [recent_area, side_area] =
            Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
                .areas(area);
        let [legends_area, stats_area] =
            Layout::vertical([Constraint::Length(LEGENDS_LIMIT as u16 + 3), Constraint::Min(0)])
                .areas(side_area);

        let recent_block = Block::default()
            .title(" RECENT CHAMPIONS ")
            .borders(Borders::ALL);
        if self.recent.is_empty() {
            frame.render_widget(
                Paragraph::new(EMPTY_TEXT)
                    .alignment(Alignment::Center)
                    .block(recent_block),
                recent_area,
            );
        } else {
            let mut lines = Vec::with_capacity(self.recent.len() * 2);
            for entry in &self.recent {
                lines.push(
                    Line::from(format!("{} conquered {}", entry.player, entry.game))
                        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                );
                lines.push(
                    Line::from(format!("  {}  |  {}", entry.result, entry.timestamp))
                        .style(Style::default().fg(Color::Gray)),
                );
            }
            frame.render_widget(Paragraph::new(lines).block(recent_block), recent_area);
        }

        let legend_lines: Vec<Line> = if self.legends.is_empty() {
            vec![Line::from("Nobody yet")]
        } else {
            self.legends
                .iter()
                .enumerate()
                .map(|(rank, (player, games))| {
                    Line::from(format!("{}. {player}  ({games} games)", rank + 1))
                })
                .collect()
        };
        frame.render_widget(
            Paragraph::new(legend_lines).block(
                Block::default()
                    .title(" HALL OF LEGENDS ")
                    .borders(Borders::ALL),
            ),
            legends_area,
        );

        let stats = &self.stats;
        let stat_lines = vec![
            Line::from(stats.player.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
            Line::from(format!("Games played: {}", stats.games_played)),
            Line::from(format!("Wins: {}", stats.wins)),
            Line::from(format!("Rank: {}", stats.achievement))
                .style(Style::default().fg(Color::Yellow)),
            Line::default(),
            Line::from("[Esc] Back").style(Style::default().fg(Color::DarkGray)),
        ];
        frame.render_widget(
            Paragraph::new(stat_lines)
                .block(Block::default().title(" YOUR STATS ").borders(Borders::ALL)),
            stats_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(board: &ScoreBoard) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| board.render(frame, frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_log_shows_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let log = ScoreLog::open(dir.path().join("scores.txt"));
        let board = ScoreBoard::load(&log, "Player");
        assert!(board.recent().is_empty());
        assert!(screen_text(&board).contains(EMPTY_TEXT));
    }

    #[test]
    fn test_snapshot_lists_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let log = ScoreLog::open(dir.path().join("scores.txt"));
        for i in 0..12 {
            log.record("kim", "Sudoku", &format!("Solved! #{i}"));
        }
        let board = ScoreBoard::load(&log, "kim");
        assert_eq!(board.recent().len(), RECENT_LIMIT);
        assert_eq!(board.recent()[0].result, "Solved! #11");
        assert_eq!(board.legends(), [("kim".to_string(), 12)]);
        assert_eq!(board.stats().games_played, 12);

        let text = screen_text(&board);
        assert!(text.contains("kim conquered Sudoku"));
        assert!(text.contains("Regular Champion"));
    }
}
