use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::game::Game;
use crate::games::Session;

/// `MM:SS`, minutes uncapped.
pub fn format_elapsed(secs: f32) -> String {
    let total = secs.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// A running session plus the HUD drawn above it.
pub struct GameScreen {
    session: Session,
    player: String,
    elapsed: f32,
}

impl GameScreen {
    pub fn new(session: Session, player: String) -> Self {
        Self {
            session,
            player,
            elapsed: 0.0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let [hud, body] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        let bold = Style::default().add_modifier(Modifier::BOLD);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!(" {} ", self.session.name()), bold.fg(Color::Cyan)),
                Span::raw("│ Player: "),
                Span::styled(self.player.as_str(), bold),
                Span::raw(" │ Time: "),
                Span::raw(format_elapsed(self.elapsed)),
                Span::styled(" │ [Esc] Menu", Style::default().fg(Color::DarkGray)),
            ])),
            hud,
        );
        self.session.render(frame, body);
    }
}
