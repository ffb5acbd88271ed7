//! Match attributes and match configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of turns a match is advertised to last
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLength {
    Finite(u32),
    /// Length unknown to the players; compares as infinite.
    Unbounded,
}

impl MatchLength {
    /// The length as a float, `f64::INFINITY` when unbounded
    pub fn as_f64(self) -> f64 {
        match self {
            MatchLength::Finite(n) => n as f64,
            MatchLength::Unbounded => f64::INFINITY,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, MatchLength::Finite(_))
    }
}

/// Keys of [`MatchAttributes`] a strategy may read
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchAttribute {
    Length,
}

/// Parameters of the current match visible to both players
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchAttributes {
    pub length: MatchLength,
}

impl MatchAttributes {
    pub fn new(length: MatchLength) -> Self {
        Self { length }
    }
}

impl Default for MatchAttributes {
    fn default() -> Self {
        Self::new(MatchLength::Unbounded)
    }
}

/// Configuration for the reference match driver
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Turns actually played
    pub turns: u32,
    /// What the players are told about the match
    pub attributes: MatchAttributes,
}

impl MatchConfig {
    /// A match of `turns` turns whose advertised length is exact
    pub fn new(turns: u32) -> Self {
        Self {
            turns,
            attributes: MatchAttributes::new(MatchLength::Finite(turns)),
        }
    }

    /// Override the advertised length
    pub fn with_length(mut self, length: MatchLength) -> Self {
        self.attributes.length = length;
        self
    }

    /// Parse and validate a JSON config such as
    /// `{"turns": 200, "attributes": {"length": {"finite": 200}}}`
    pub fn from_json(json: &str) -> Result<Self> {
        let config: MatchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.turns == 0 {
            return Err(Error::ZeroTurns);
        }
        if self.attributes.length == MatchLength::Finite(0) {
            return Err(Error::ZeroLength);
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(200)
    }
}
