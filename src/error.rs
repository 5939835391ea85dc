use std::io;

use thiserror::Error;

use crate::config::INITIAL_SNAKE_LENGTH;

/// Faults detected while building a game from its configuration.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error(
        "grid {width}x{height} is too small: need at least {} columns and a free cell for food",
        INITIAL_SNAKE_LENGTH
    )]
    GridTooSmall { width: u16, height: u16 },
}

/// Top-level failures surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
