use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::game::DEFAULT_GRACE_PERIOD;
use crate::error::RegistryError;
use crate::games::sudoku::Puzzle;
use crate::games::Session;

/// Everything a constructor needs to build a fresh session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Seed for the session's own random source (AI moves, tile spawns).
    pub seed: u64,
    pub grace_period: f32,
    /// Tic-Tac-Toe: whether O is played by the random AI.
    pub vs_ai: bool,
    /// Sudoku: layout to load instead of the built-in one.
    pub puzzle: Option<Puzzle>,
}

impl SessionOptions {
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            grace_period: DEFAULT_GRACE_PERIOD,
            vs_ai: true,
            puzzle: None,
        }
    }
}

/// Builds a ready-to-play session.
pub type Constructor = fn(&SessionOptions) -> Session;

/// Metadata about a registered game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInfo {
    pub name: &'static str,
    pub description: &'static str,
}

struct Registration {
    info: GameInfo,
    constructor: Constructor,
}

/// Name-keyed game factory. Names are listed in registration order.
pub struct GameRegistry {
    games: Vec<Registration>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self { games: Vec::new() }
    }

    /// Register a constructor under `info.name`, replacing any earlier one.
    pub fn register(&mut self, info: GameInfo, constructor: Constructor) {
        match self.games.iter_mut().find(|r| r.info.name == info.name) {
            Some(existing) => {
                existing.info = info;
                existing.constructor = constructor;
            }
            None => self.games.push(Registration { info, constructor }),
        }
    }

    /// Create and initialise a session for `name`.
    pub fn create(&self, name: &str, options: &SessionOptions) -> Result<Session, RegistryError> {
        self.games
            .iter()
            .find(|r| r.info.name == name)
            .map(|r| (r.constructor)(options))
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.games.iter().map(|r| r.info.name).collect()
    }

    pub fn list_games(&self) -> Vec<GameInfo> {
        self.games.iter().map(|r| r.info.clone()).collect()
    }

    pub fn has_game(&self, name: &str) -> bool {
        self.games.iter().any(|r| r.info.name == name)
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}
