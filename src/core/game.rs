/// Core game interface: the lifecycle every bundled game implements.
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::warn;

/// Seconds a finished session stays on screen before handing control back.
pub const DEFAULT_GRACE_PERIOD: f32 = 45.0;

/// Result of one finished session, as sent to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub game: String,
    pub result: String,
}

/// Handle passed into [`Game::update`] so a session can report its result.
#[derive(Debug, Clone)]
pub struct Context {
    tx: UnboundedSender<GameReport>,
}

impl Context {
    pub fn new(tx: UnboundedSender<GameReport>) -> Self {
        Self { tx }
    }

    /// A fresh context plus the receiving end the shell drains each frame.
    pub fn channel() -> (Self, UnboundedReceiver<GameReport>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    pub fn report(&self, game: &str, result: String) {
        let report = GameReport {
            game: game.to_string(),
            result,
        };
        if let Err(err) = self.tx.send(report) {
            warn!(game, result = %err.0.result, "result receiver dropped; report lost");
        }
    }
}

/// Main game trait that all bundled games implement.
pub trait Game {
    /// Display name, also the registry key.
    fn name(&self) -> &'static str;

    /// Reset the underlying rule engine to a fresh game.
    fn init(&mut self);

    fn handle_input(&mut self, key: KeyEvent);

    /// Advance timers by `dt` seconds. Emits the result report once.
    fn update(&mut self, dt: f32, ctx: &Context);

    fn render(&self, frame: &mut Frame, area: Rect);

    /// True once the game is finished and its grace window has elapsed.
    fn is_over(&self) -> bool;
}

/// Post-terminal bookkeeping shared by every session: the one-shot report
/// and the grace window that keeps the end screen visible.
#[derive(Debug, Clone)]
pub struct GameOverTimer {
    grace_period: f32,
    elapsed: f32,
    reported: bool,
}

impl GameOverTimer {
    pub fn new(grace_period: f32) -> Self {
        Self {
            grace_period,
            elapsed: 0.0,
            reported: false,
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.reported = false;
    }

    /// Call once per frame. `result` is `Some` only while the rule engine is
    /// terminal; the first such call reports, later ones only count time.
    pub fn tick(&mut self, dt: f32, game: &str, result: Option<String>, ctx: &Context) {
        let Some(result) = result else {
            return;
        };
        if !self.reported {
            self.reported = true;
            ctx.report(game, result);
        } else {
            self.elapsed += dt;
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn reported(&self) -> bool {
        self.reported
    }

    /// Whether the grace window is used up for a terminal engine.
    pub fn expired(&self, terminal: bool) -> bool {
        terminal && self.reported && self.elapsed >= self.grace_period
    }
}

impl Default for GameOverTimer {
    fn default() -> Self {
        Self::new(DEFAULT_GRACE_PERIOD)
    }
}
