use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::renderer::centered;
use crate::scores::DEFAULT_PLAYER;

pub const MAX_NAME_LEN: usize = 16;

/// Collects the player name before a game starts.
#[derive(Debug, Clone)]
pub struct NameEntry {
    game: &'static str,
    name: String,
    caret_timer: f32,
    caret_visible: bool,
}

impl NameEntry {
    pub fn new(game: &'static str) -> Self {
        Self {
            game,
            name: String::new(),
            caret_timer: 0.0,
            caret_visible: true,
        }
    }

    pub fn game(&self) -> &'static str {
        self.game
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name to play under; blank input falls back to the default.
    pub fn final_name(&self) -> String {
        match self.name.trim() {
            "" => DEFAULT_PLAYER.to_string(),
            name => name.to_string(),
        }
    }

    /// Edit the buffer. Returns true when Enter confirms the name.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => return true,
            KeyCode::Backspace => {
                self.name.pop();
            }
            // '|' is the score log's field separator.
            KeyCode::Char(c)
                if (c.is_ascii_graphic() || c == ' ')
                    && c != '|'
                    && self.name.len() < MAX_NAME_LEN =>
            {
                self.name.push(c);
            }
            _ => {}
        }
        false
    }

    pub fn update(&mut self, dt: f32) {
        self.caret_timer += dt;
        if self.caret_timer >= 0.5 {
            self.caret_visible = !self.caret_visible;
            self.caret_timer = 0.0;
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let shown = if self.name.is_empty() {
            Span::styled(DEFAULT_PLAYER, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(self.name.as_str())
        };
        let caret = if self.caret_visible { "▏" } else { " " };
        let lines = vec![
            Line::from(format!("Enter your legend name for {}", self.game)),
            Line::default(),
            Line::from(vec![
                Span::raw("Name: "),
                shown,
                Span::styled(caret, Style::default().fg(Color::Yellow)),
            ]),
            Line::default(),
            Line::from(format!(
                "Tip: keep it short (max {MAX_NAME_LEN} chars). Press Enter to begin!"
            ))
            .style(Style::default().fg(Color::Gray)),
            Line::from("Your results are tagged with this name on the scoreboard.")
                .style(Style::default().fg(Color::Gray)),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().title(" NEW GAME ").borders(Borders::ALL)),
            centered(area, 64, 8),
        );
    }
}
