//! The screen shell: one active [`Screen`], transitions between them, and
//! forwarding of finished-session reports to the score log.

pub mod game_screen;
pub mod menu;
pub mod name_entry;
pub mod scoreboard;
pub mod settings;
pub mod splash;

use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::Frame;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::core::game::{Context, Game, GameReport};
use crate::core::registry::{GameRegistry, SessionOptions};
use crate::error::ConfigError;
use crate::scores::{ScoreLog, DEFAULT_PLAYER};

pub use game_screen::{format_elapsed, GameScreen};
pub use menu::{MainMenu, MenuItem};
pub use name_entry::NameEntry;
pub use scoreboard::ScoreBoard;
pub use splash::Splash;

pub enum Screen {
    Splash(Splash),
    MainMenu(MainMenu),
    NameEntry(NameEntry),
    Game(GameScreen),
    ScoreBoard(ScoreBoard),
    Settings,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Splash(_) => "Splash",
            Screen::MainMenu(_) => "MainMenu",
            Screen::NameEntry(_) => "NameEntry",
            Screen::Game(_) => "Game",
            Screen::ScoreBoard(_) => "ScoreBoard",
            Screen::Settings => "Settings",
        }
    }
}

enum Transition {
    Stay,
    ToMenu,
    EnterName(&'static str),
    StartGame { game: &'static str, player: String },
    ShowScores,
    ShowSettings,
    Quit,
}

pub struct Shell {
    registry: GameRegistry,
    scores: ScoreLog,
    options: SessionOptions,
    splash_secs: f32,
    rng: StdRng,
    ctx: Context,
    reports: UnboundedReceiver<GameReport>,
    player: String,
    screen: Screen,
    quit: bool,
}

impl Shell {
    /// `seed` overrides the configured master seed; with neither, the OS
    /// seeds the session RNG.
    pub fn new(
        config: &AppConfig,
        registry: GameRegistry,
        scores: ScoreLog,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let rng = match seed.or(config.seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let (ctx, reports) = Context::channel();
        Ok(Self {
            registry,
            scores,
            options: config.session_options(0)?,
            splash_secs: config.display.splash_secs,
            rng,
            ctx,
            reports,
            player: DEFAULT_PLAYER.to_string(),
            screen: Screen::Splash(Splash::new(config.display.splash_secs)),
            quit: false,
        })
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn scores(&self) -> &ScoreLog {
        &self.scores
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let transition = match &mut self.screen {
            Screen::Splash(_) => Transition::ToMenu,
            Screen::MainMenu(menu) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    menu.select_previous();
                    Transition::Stay
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    menu.select_next();
                    Transition::Stay
                }
                KeyCode::Enter => match menu.selected() {
                    MenuItem::Game(info) => Transition::EnterName(info.name),
                    MenuItem::Scores => Transition::ShowScores,
                    MenuItem::Settings => Transition::ShowSettings,
                    MenuItem::Exit => Transition::Quit,
                },
                KeyCode::Esc | KeyCode::Char('q') => Transition::Quit,
                _ => Transition::Stay,
            },
            Screen::Game(game) => {
                let leaving = key.code == KeyCode::Esc;
                if !leaving {
                    game.session_mut().handle_input(key);
                }
                // A terminal move reports on this zero-length tick.
                game.session_mut().update(0.0, &self.ctx);
                if leaving {
                    Transition::ToMenu
                } else {
                    Transition::Stay
                }
            }
            _ if key.code == KeyCode::Esc => Transition::ToMenu,
            Screen::NameEntry(entry) => {
                if entry.handle_key(key) {
                    Transition::StartGame {
                        game: entry.game(),
                        player: entry.final_name(),
                    }
                } else {
                    Transition::Stay
                }
            }
            Screen::ScoreBoard(_) => Transition::Stay,
            Screen::Settings => match key.code {
                KeyCode::Backspace => Transition::ToMenu,
                _ => Transition::Stay,
            },
        };
        self.drain_reports();
        self.apply(transition);
    }

    /// Advance the active screen by `dt` seconds and record any finished
    /// sessions.
    pub fn update(&mut self, dt: f32) {
        let transition = match &mut self.screen {
            Screen::Splash(splash) => {
                if splash.update(dt) {
                    Transition::ToMenu
                } else {
                    Transition::Stay
                }
            }
            Screen::NameEntry(entry) => {
                entry.update(dt);
                Transition::Stay
            }
            Screen::Game(game) => {
                game.tick(dt);
                game.session_mut().update(dt, &self.ctx);
                if game.session().is_over() {
                    info!(game = game.session().name(), "session finished");
                    Transition::ToMenu
                } else {
                    Transition::Stay
                }
            }
            _ => Transition::Stay,
        };
        self.drain_reports();
        self.apply(transition);
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        match &self.screen {
            Screen::Splash(splash) => splash.render(frame, area),
            Screen::MainMenu(menu) => menu.render(frame, area),
            Screen::NameEntry(entry) => entry.render(frame, area),
            Screen::Game(game) => game.render(frame, area),
            Screen::ScoreBoard(board) => board.render(frame, area),
            Screen::Settings => settings::render(frame, area),
        }
    }

    fn drain_reports(&mut self) {
        while let Ok(report) = self.reports.try_recv() {
            self.scores.record(&self.player, &report.game, &report.result);
        }
    }

    fn main_menu(&self) -> MainMenu {
        MainMenu::new(self.registry.list_games(), self.scores.total_games())
    }

    fn apply(&mut self, transition: Transition) {
        let next = match transition {
            Transition::Stay => return,
            Transition::Quit => {
                info!("quit requested");
                self.quit = true;
                return;
            }
            Transition::ToMenu => Screen::MainMenu(self.main_menu()),
            Transition::EnterName(game) => Screen::NameEntry(NameEntry::new(game)),
            Transition::ShowScores => {
                Screen::ScoreBoard(ScoreBoard::load(&self.scores, &self.player))
            }
            Transition::ShowSettings => Screen::Settings,
            Transition::StartGame { game, player } => {
                let options = SessionOptions {
                    seed: self.rng.random(),
                    ..self.options.clone()
                };
                match self.registry.create(game, &options) {
                    Ok(session) => {
                        info!(game, player = %player, seed = options.seed, "session started");
                        self.player = player.clone();
                        Screen::Game(GameScreen::new(session, player))
                    }
                    Err(err) => {
                        warn!(error = %err, "could not start session");
                        Screen::MainMenu(self.main_menu())
                    }
                }
            }
        };
        self.screen = next;
    }

    /// Seconds the splash screen stays up before moving on.
    pub fn splash_secs(&self) -> f32 {
        self.splash_secs
    }
}
