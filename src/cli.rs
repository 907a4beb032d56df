use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use crate::config::{AppConfig, DEFAULT_CONFIG_PATH};
use crate::games::create_default_registry;
use crate::scores::ScoreLog;

#[derive(Parser, Debug)]
#[command(name = "puzzle-studio")]
#[command(about = "Tic-Tac-Toe, Sudoku and 2048 in your terminal")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML). Missing file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Score log to read and append to (overrides the config)
    #[arg(long, global = true)]
    pub scores: Option<PathBuf>,

    /// Master random seed (default: from config, else random)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Where diagnostics are written; the terminal belongs to the UI
    #[arg(long, global = true, default_value = "puzzle-studio.log")]
    pub log_file: PathBuf,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, global = true, default_value = "info")]
    pub log_level: Level,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the full-screen launcher (default)
    Play,
    /// List available games
    List,
    /// Show the most recent scores, newest first
    Scores {
        /// Number of entries to show
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show games played, wins and rank for a player
    Stats {
        player: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a config file with every default value
    Config,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Play)
    }

    /// Load the config file and apply command-line overrides.
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load_or_default(&self.config)?;
        if let Some(path) = &self.scores {
            config.scores.path = path.clone();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

/// Run a non-interactive subcommand, writing its output to `out`.
pub fn run_command(command: &Commands, config: &AppConfig, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Play => anyhow::bail!("play needs a terminal"),
        Commands::List => {
            writeln!(out, "Available games:")?;
            for info in create_default_registry().list_games() {
                writeln!(out, "  {:<12} {}", info.name, info.description)?;
            }
        }
        Commands::Scores { limit, json } => {
            let log = ScoreLog::open(&config.scores.path);
            let entries = log.recent(*limit);
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
            } else if entries.is_empty() {
                writeln!(out, "No champions recorded yet. Play a game!")?;
            } else {
                for entry in entries {
                    writeln!(
                        out,
                        "{}  {:<12} {:<16} {}",
                        entry.timestamp, entry.game, entry.player, entry.result
                    )?;
                }
            }
        }
        Commands::Stats { player, json } => {
            let stats = ScoreLog::open(&config.scores.path).player_stats(player);
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
            } else {
                writeln!(out, "Player:       {}", stats.player)?;
                writeln!(out, "Games played: {}", stats.games_played)?;
                writeln!(out, "Wins:         {}", stats.wins)?;
                writeln!(out, "Rank:         {}", stats.achievement)?;
            }
        }
        Commands::Config => write!(out, "{}", AppConfig::default_toml()?)?,
    }
    Ok(())
}
