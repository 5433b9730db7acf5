mod audio;
mod config;
mod controller;
mod error;
mod food;
mod game;
mod grid;
mod input;
mod snake;
mod term;

use std::path::Path;

use anyhow::Context;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub type TermInt = u16;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Keep the guard alive so buffered log lines are written on exit
    let _log_guard = init_logging(&config)?;
    info!(?config, "starting snake");

    let audio = audio::for_mode(config.sound);
    let mut game = game::SnakeGame::new(audio).context("Failed to initialize the terminal")?;
    game.run().context("Game loop failed")?;

    info!("exiting");
    Ok(())
}

/// Logs go to a file, since the terminal is taken over by the game.
fn init_logging(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let Some(path) = &config.log_file else {
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path {} has no file name", path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();

    Ok(Some(guard))
}
