use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::renderer::centered;

/// Title card shown at start-up. Any key or the timeout moves on.
#[derive(Debug, Clone)]
pub struct Splash {
    elapsed: f32,
    duration: f32,
}

impl Splash {
    pub fn new(duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration,
        }
    }

    /// Advance the timer; true once the splash has been shown long enough.
    pub fn update(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed >= self.duration
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let pulse = (self.elapsed * 2.0) as u32 % 2 == 0;
        let prompt_style = if pulse {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let lines = vec![
            Line::from("P U Z Z L E   S T U D I O").style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::from("Tic-Tac-Toe  ·  Sudoku  ·  2048"),
            Line::default(),
            Line::from("Press any key to continue...").style(prompt_style),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            centered(area, 44, 7),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splash_times_out() {
        let mut splash = Splash::new(1.0);
        assert!(!splash.update(0.6));
        assert!(splash.update(0.6));
    }

    #[test]
    fn test_zero_duration_ends_immediately() {
        assert!(Splash::new(0.0).update(0.0));
    }
}
