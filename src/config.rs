use std::path::{Path, PathBuf};

use tracing::warn;

use crate::core::game::DEFAULT_GRACE_PERIOD;
use crate::core::registry::SessionOptions;
use crate::error::ConfigError;
use crate::games::sudoku::Puzzle;

pub const DEFAULT_CONFIG_PATH: &str = "puzzle-studio.toml";

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Master seed for AI moves and tile spawns. Random when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub scores: ScoresConfig,
    pub session: SessionConfig,
    pub display: DisplayConfig,
    pub sudoku: SudokuConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScoresConfig {
    pub path: PathBuf,
}

impl Default for ScoresConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("scores.txt"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seconds a finished game stays on screen.
    pub grace_period_secs: f32,
    /// Tic-Tac-Toe starts against the random AI.
    pub vs_ai: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grace_period_secs: DEFAULT_GRACE_PERIOD,
            vs_ai: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub fps: u32,
    pub splash_secs: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            splash_secs: 5.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SudokuConfig {
    /// 81 cells in reading order; digits are givens, `.` or `0` blanks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub puzzle: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            seed: None,
            scores: ScoresConfig::default(),
            session: SessionConfig::default(),
            display: DisplayConfig::default(),
            sudoku: SudokuConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=240).contains(&self.display.fps) {
            return Err(ConfigError::Validation(
                "display.fps must be in 1..=240".into(),
            ));
        }
        if !(self.display.splash_secs >= 0.0) {
            return Err(ConfigError::Validation(
                "display.splash_secs must be >= 0".into(),
            ));
        }
        if !(self.session.grace_period_secs >= 0.0) {
            return Err(ConfigError::Validation(
                "session.grace_period_secs must be >= 0".into(),
            ));
        }
        if self.scores.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "scores.path must not be empty".into(),
            ));
        }
        self.puzzle()?;
        Ok(())
    }

    /// The configured Sudoku layout, if any.
    pub fn puzzle(&self) -> Result<Option<Puzzle>, ConfigError> {
        match &self.sudoku.puzzle {
            Some(text) => Ok(Some(Puzzle::parse(text)?)),
            None => Ok(None),
        }
    }

    /// Options for one new session, seeded with `seed`.
    pub fn session_options(&self, seed: u64) -> Result<SessionOptions, ConfigError> {
        Ok(SessionOptions {
            seed,
            grace_period: self.session.grace_period_secs,
            vs_ai: self.session.vs_ai,
            puzzle: self.puzzle()?,
        })
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&AppConfig::default())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.display.fps, 60);
        assert_eq!(config.scores.path, PathBuf::from("scores.txt"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
seed = 7

[session]
vs_ai = false
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.seed, Some(7));
        assert!(!config.session.vs_ai);
        assert!((config.session.grace_period_secs - 45.0).abs() < 1e-6);
        assert_eq!(config.display.fps, 60);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_bad_fps() {
        let mut config = AppConfig::default();
        config.display.fps = 0;
        assert!(config.validate().is_err());
        config.display.fps = 241;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_negative_durations() {
        let mut config = AppConfig::default();
        config.session.grace_period_secs = -1.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.display.splash_secs = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_puzzle() {
        let mut config = AppConfig::default();
        config.sudoku.puzzle = Some("12345".into());
        assert!(matches!(config.validate(), Err(ConfigError::Puzzle(_))));
    }

    #[test]
    fn test_session_options_carry_settings() {
        let mut config = AppConfig::default();
        config.session.grace_period_secs = 3.0;
        config.sudoku.puzzle = Some(format!("1{}", ".".repeat(80)));
        let options = config.session_options(42).unwrap();
        assert_eq!(options.seed, 42);
        assert!((options.grace_period - 3.0).abs() < 1e-6);
        assert_eq!(options.puzzle.map(|p| p.cell(0, 0)), Some(1));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puzzle-studio.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[scores]
path = "elsewhere.txt"

[display]
fps = 30
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.scores.path, PathBuf::from("elsewhere.txt"));
        assert_eq!(config.display.fps, 30);
        assert!((config.display.splash_secs - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_load_reports_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[display]\nfps = \"fast\"\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
