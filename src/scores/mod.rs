//! Append-only score log: one `timestamp | game | player | result` line per
//! finished session.

use std::collections::HashMap;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ScoreLogError;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const UNKNOWN_PLAYER: &str = "Unknown";
pub const DEFAULT_PLAYER: &str = "Player";
const SEPARATOR: &str = " | ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub timestamp: String,
    pub game: String,
    pub player: String,
    pub result: String,
}

impl ScoreEntry {
    pub fn to_line(&self) -> String {
        [
            self.timestamp.as_str(),
            &self.game,
            &self.player,
            &self.result,
        ]
        .join(SEPARATOR)
    }

    /// Parse one log line. Blank lines yield `None`.
    ///
    /// Three-field lines predate player names and get [`UNKNOWN_PLAYER`].
    /// Anything shorter keeps the whole raw line as its result.
    pub fn parse_line(line: &str) -> Option<ScoreEntry> {
        if line.trim().is_empty() {
            return None;
        }
        let parts: Vec<&str> = line.split('|').map(str::trim).collect();
        let entry = match parts.as_slice() {
            [timestamp, game, player, rest @ ..] if !rest.is_empty() => ScoreEntry {
                timestamp: timestamp.to_string(),
                game: game.to_string(),
                player: player.to_string(),
                result: rest.join(SEPARATOR),
            },
            [timestamp, game, result] => ScoreEntry {
                timestamp: timestamp.to_string(),
                game: game.to_string(),
                player: UNKNOWN_PLAYER.to_string(),
                result: result.to_string(),
            },
            _ => ScoreEntry {
                timestamp: parts.first().copied().unwrap_or_default().to_string(),
                game: parts.get(1).copied().unwrap_or_default().to_string(),
                player: UNKNOWN_PLAYER.to_string(),
                result: line.to_string(),
            },
        };
        Some(entry)
    }

    /// Whether the result counts as a win for player statistics.
    pub fn is_win(&self) -> bool {
        ["Winner", "Solved", "Score:"]
            .iter()
            .any(|marker| self.result.contains(marker))
    }
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

/// Tier derived from the number of games a player has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Achievement {
    Newcomer,
    RisingStar,
    RegularChampion,
    SeasonedPlayer,
    LegendaryMaster,
}

impl Achievement {
    pub fn from_games_played(count: usize) -> Self {
        match count {
            50.. => Achievement::LegendaryMaster,
            20.. => Achievement::SeasonedPlayer,
            10.. => Achievement::RegularChampion,
            5.. => Achievement::RisingStar,
            _ => Achievement::Newcomer,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Achievement::Newcomer => "Newcomer",
            Achievement::RisingStar => "Rising Star",
            Achievement::RegularChampion => "Regular Champion",
            Achievement::SeasonedPlayer => "Seasoned Player",
            Achievement::LegendaryMaster => "Legendary Master",
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerStats {
    pub player: String,
    pub games_played: usize,
    pub wins: usize,
    pub achievement: Achievement,
}

/// Handle on the score file. Every query re-reads the file.
#[derive(Debug, Clone)]
pub struct ScoreLog {
    path: PathBuf,
}

impl ScoreLog {
    /// Use `path` as the log, creating an empty file if none exists.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if !path.exists() {
            if let Err(err) = OpenOptions::new().create(true).append(true).open(&path) {
                warn!(path = %path.display(), error = %err, "could not create score log");
            }
        }
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_entries(&self) -> Result<Vec<ScoreEntry>, ScoreLogError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(ScoreLogError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        Ok(text.lines().filter_map(ScoreEntry::parse_line).collect())
    }

    /// All entries in append order; an unreadable log reads as empty.
    pub fn entries(&self) -> Vec<ScoreEntry> {
        self.try_entries().unwrap_or_else(|err| {
            warn!(error = %err, "score log unreadable, treating as empty");
            Vec::new()
        })
    }

    pub fn try_append(&self, entry: &ScoreEntry) -> Result<(), ScoreLogError> {
        let write = || -> io::Result<()> {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            writeln!(file, "{}", entry.to_line())
        };
        write().map_err(|source| ScoreLogError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Append `entry`, dropping it with a warning if the write fails.
    pub fn append(&self, entry: &ScoreEntry) -> bool {
        match self.try_append(entry) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "score entry dropped");
                false
            }
        }
    }

    /// Record a finished session stamped with the current local time.
    pub fn record(&self, player: &str, game: &str, result: &str) -> ScoreEntry {
        self.record_at(Local::now().naive_local(), player, game, result)
    }

    pub fn record_at(
        &self,
        at: NaiveDateTime,
        player: &str,
        game: &str,
        result: &str,
    ) -> ScoreEntry {
        let player = match player.trim() {
            "" => DEFAULT_PLAYER,
            name => name,
        };
        let entry = ScoreEntry {
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            game: game.to_string(),
            player: player.to_string(),
            result: result.to_string(),
        };
        if self.append(&entry) {
            info!(player, game, result, "score recorded");
        }
        entry
    }

    pub fn total_games(&self) -> usize {
        self.entries().len()
    }

    pub fn player_stats(&self, player: &str) -> PlayerStats {
        let (games_played, wins) = self
            .entries()
            .iter()
            .filter(|e| e.player == player)
            .fold((0, 0), |(played, wins), e| {
                (played + 1, wins + usize::from(e.is_win()))
            });
        PlayerStats {
            player: player.to_string(),
            games_played,
            wins,
            achievement: Achievement::from_games_played(games_played),
        }
    }

    /// The `limit` most recent entries, newest first.
    pub fn recent(&self, limit: usize) -> Vec<ScoreEntry> {
        self.entries().into_iter().rev().take(limit).collect()
    }

    /// Top `limit` players by number of entries; ties broken by name.
    pub fn legends(&self, limit: usize) -> Vec<(String, usize)> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for entry in self.entries() {
            *counts.entry(entry.player).or_default() += 1;
        }
        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(limit);
        ranked
    }
}
