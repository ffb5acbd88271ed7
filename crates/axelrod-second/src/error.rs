//! Errors raised while configuring a match
//!
//! Strategy decisions never fail; only the configuration around a match can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("match must have at least one turn")]
    ZeroTurns,

    #[error("advertised match length must be positive or unbounded")]
    ZeroLength,

    #[error("invalid match config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
