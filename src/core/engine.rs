use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::ui::Shell;

/// Drives the shell: terminal events in, one update and one draw per frame.
pub struct Engine {
    shell: Shell,
    frame: Duration,
}

impl Engine {
    pub fn new(shell: Shell, fps: u32) -> Self {
        Self {
            shell,
            frame: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
        }
    }

    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(self.frame);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last_tick = Instant::now();
        info!(frame_ms = self.frame.as_millis() as u64, "engine started");

        while !self.shell.should_quit() {
            tokio::select! {
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            self.shell.handle_key(key);
                        }
                        Some(Ok(Event::Resize(width, height))) => {
                            debug!(width, height, "terminal resized");
                        }
                        Some(Ok(_)) => {}
                        Some(Err(err)) => return Err(err.into()),
                        None => break,
                    }
                }

                _ = ticker.tick() => {
                    let now = Instant::now();
                    let dt = now.duration_since(last_tick).as_secs_f32();
                    last_tick = now;
                    self.shell.update(dt);
                    terminal.draw(|frame| self.shell.render(frame))?;
                }
            }
        }

        info!("engine stopped");
        Ok(())
    }
}
