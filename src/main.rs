use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use puzzle_studio::cli::{self, Cli, Commands};
use puzzle_studio::config::AppConfig;
use puzzle_studio::core::engine::Engine;
use puzzle_studio::games::create_default_registry;
use puzzle_studio::scores::ScoreLog;
use puzzle_studio::ui::Shell;

/// Log to a file; the terminal is owned by the UI. Falls back to a sink
/// if the file cannot be opened.
fn init_tracing(path: &Path, level: Level) {
    let writer = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(_) => BoxMakeWriter::new(io::sink),
    };
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
}

async fn play(config: &AppConfig) -> Result<()> {
    let scores = ScoreLog::open(&config.scores.path);
    let shell = Shell::new(config, create_default_registry(), scores, config.seed)?;
    let engine = Engine::new(shell, config.display.fps);

    let mut terminal = ratatui::init();
    let result = engine.run(&mut terminal).await;
    ratatui::restore();
    result
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_file, cli.log_level);
    let config = cli.load_config()?;

    let command = cli.command();
    info!(?command, scores = %config.scores.path.display(), "starting");
    match command {
        Commands::Play => play(&config).await,
        other => cli::run_command(&other, &config, &mut io::stdout().lock()),
    }
}
