//! Strategies from Axelrod's second tournament
//!
//! Five decision rules for the Iterated Prisoner's Dilemma, each a small
//! state machine over both players' histories:
//! - Champion
//! - Eatherley
//! - Tester
//! - Gladstein
//! - MoreGrofman
//!
//! The match engine owns the histories and randomness. A reference driver
//! ([`run_match`], [`play_match`]) plays two strategies against each other for replay and tests.

mod attributes;
mod error;
mod game;
mod random;
mod strategies;
mod strategy;

pub use attributes::{MatchAttribute, MatchAttributes, MatchConfig, MatchLength};
pub use error::{Error, Result};
pub use game::{payoff, play_match, run_match, MatchResult, Player, RoundResult};
pub use random::{random_choice, SeededRng};
pub use strategies::{Champion, Eatherley, Gladstein, MoreGrofman, Tester};
pub use strategy::{Classifier, MemoryDepth, Move, PlayerView, Strategy, StrategyKind};
