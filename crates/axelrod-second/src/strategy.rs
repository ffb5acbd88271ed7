//! Strategy interface, classification metadata and the strategy catalog

use std::collections::BTreeSet;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::attributes::{MatchAttribute, MatchAttributes};
use crate::strategies::{Champion, Eatherley, Gladstein, MoreGrofman, Tester};

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Cooperate,
    Defect,
}

impl Move {
    pub fn flip(self) -> Move {
        match self {
            Move::Cooperate => Move::Defect,
            Move::Defect => Move::Cooperate,
        }
    }
}

/// Read-only view of a player held by the match engine.
///
/// The engine appends to the history after every round; strategies only
/// ever borrow the view.
pub trait PlayerView {
    /// Moves played so far, oldest first
    fn history(&self) -> &[Move];

    fn match_attributes(&self) -> &MatchAttributes;

    fn defections(&self) -> usize {
        self.history().iter().filter(|m| **m == Move::Defect).count()
    }

    fn cooperations(&self) -> usize {
        self.history().iter().filter(|m| **m == Move::Cooperate).count()
    }
}

/// How many past rounds a strategy may look at
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryDepth {
    Finite(u32),
    Unbounded,
}

/// Tournament classification of a strategy. Has no effect on behaviour.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classifier {
    pub memory_depth: MemoryDepth,
    pub stochastic: bool,
    pub makes_use_of: BTreeSet<MatchAttribute>,
    pub long_run_time: bool,
    pub inspects_source: bool,
    pub manipulates_source: bool,
    pub manipulates_state: bool,
}

impl Classifier {
    /// Deterministic, unbounded memory, reads no match attributes
    pub fn new(memory_depth: MemoryDepth) -> Self {
        Self {
            memory_depth,
            stochastic: false,
            makes_use_of: BTreeSet::new(),
            long_run_time: false,
            inspects_source: false,
            manipulates_source: false,
            manipulates_state: false,
        }
    }

    pub fn stochastic(mut self) -> Self {
        self.stochastic = true;
        self
    }

    pub fn uses(mut self, attribute: MatchAttribute) -> Self {
        self.makes_use_of.insert(attribute);
        self
    }
}

/// A decision rule played by one side of a match.
///
/// One instance per match: any state it keeps starts fresh at
/// construction and is dropped with the match.
pub trait Strategy {
    fn name(&self) -> &'static str;

    fn classifier(&self) -> Classifier;

    /// Choose the next move from the completed rounds
    ///
    /// # Arguments
    /// * `me` - This strategy's own player view
    /// * `opponent` - The other player's view
    /// * `rng` - Engine-provided randomness for this decision
    fn decide(
        &mut self,
        me: &dyn PlayerView,
        opponent: &dyn PlayerView,
        rng: &mut dyn RngCore,
    ) -> Move;
}

/// Strategies submitted to Axelrod's second tournament
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Cooperate, then mirror, then defect against frequent defectors.
    Champion,
    /// Answer defection with the opponent's own defection rate.
    Eatherley,
    /// Probe with a defection, then alternate or apologise into Tit-for-Tat.
    Tester,
    /// Probe with a defection, then exploit up to half or apologise into Tit-for-Tat.
    Gladstein,
    /// Tit-for-Tat early, then react to defections in the last seven rounds.
    MoreGrofman,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Champion,
        StrategyKind::Eatherley,
        StrategyKind::Tester,
        StrategyKind::Gladstein,
        StrategyKind::MoreGrofman,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Champion => "Champion",
            StrategyKind::Eatherley => "Eatherley",
            StrategyKind::Tester => "Tester",
            StrategyKind::Gladstein => "Gladstein",
            StrategyKind::MoreGrofman => "MoreGrofman",
        }
    }

    /// Fresh instance for a new match
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Champion => Box::new(Champion),
            StrategyKind::Eatherley => Box::new(Eatherley),
            StrategyKind::Tester => Box::new(Tester::new()),
            StrategyKind::Gladstein => Box::new(Gladstein::new()),
            StrategyKind::MoreGrofman => Box::new(MoreGrofman),
        }
    }

    /// Get a human-readable description of a strategy
    pub fn describe(self) -> &'static str {
        match self {
            StrategyKind::Champion => {
                "Cooperates early, mirrors for a while, then defects at random against frequent defectors."
            }
            StrategyKind::Eatherley => {
                "Cooperates after cooperation; after a defection, defects with the opponent's defection rate."
            }
            StrategyKind::Tester => {
                "Defects first. Apologises and plays Tit-for-Tat if punished, otherwise alternates."
            }
            StrategyKind::Gladstein => {
                "Defects first. Apologises and plays Tit-for-Tat if punished, otherwise keeps cooperation near half."
            }
            StrategyKind::MoreGrofman => {
                "Cooperates twice, mirrors through move 7, then counts defections in the last 7 rounds."
            }
        }
    }
}
