use rand::RngCore;

use crate::random::random_choice;
use crate::strategy::{Classifier, MemoryDepth, Move, PlayerView, Strategy};

/// Graham Eatherley's entry.
///
/// Reciprocates cooperation. After a defection it defects with probability
/// equal to the opponent's overall defection rate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Eatherley;

impl Strategy for Eatherley {
    fn name(&self) -> &'static str {
        "Eatherley"
    }

    fn classifier(&self) -> Classifier {
        Classifier::new(MemoryDepth::Unbounded).stochastic()
    }

    fn decide(
        &mut self,
        _me: &dyn PlayerView,
        opponent: &dyn PlayerView,
        rng: &mut dyn RngCore,
    ) -> Move {
        let history = opponent.history();
        match history.last() {
            None | Some(Move::Cooperate) => Move::Cooperate,
            Some(Move::Defect) => {
                let defection_prop = opponent.defections() as f64 / history.len() as f64;
                random_choice(1.0 - defection_prop, rng)
            }
        }
    }
}
