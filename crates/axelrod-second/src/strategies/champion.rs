use rand::{Rng, RngCore};

use crate::attributes::MatchAttribute;
use crate::strategy::{Classifier, MemoryDepth, Move, PlayerView, Strategy};

/// Danny Champion's entry.
///
/// Cooperates for the first 1/20 of the advertised match and mirrors the
/// opponent until 1/8 of it. Afterwards it cooperates unless the opponent
/// just defected, has defected at least 40% of the time, and has also
/// defected more often than a uniform draw.
#[derive(Clone, Copy, Debug, Default)]
pub struct Champion;

impl Strategy for Champion {
    fn name(&self) -> &'static str {
        "Champion"
    }

    fn classifier(&self) -> Classifier {
        Classifier::new(MemoryDepth::Unbounded)
            .stochastic()
            .uses(MatchAttribute::Length)
    }

    fn decide(
        &mut self,
        me: &dyn PlayerView,
        opponent: &dyn PlayerView,
        rng: &mut dyn RngCore,
    ) -> Move {
        let current_round = me.history().len();
        if current_round == 0 {
            return Move::Cooperate;
        }

        // An unbounded match skips both early phases
        let length = opponent.match_attributes().length;
        if length.is_finite() {
            let expected_length = length.as_f64();
            let round = current_round as f64;
            if round < expected_length / 20.0 {
                return Move::Cooperate;
            }
            if round < expected_length * 5.0 / 40.0 {
                return opponent.history().last().copied().unwrap_or(Move::Cooperate);
            }
        }

        let history = opponent.history();
        if history.last() == Some(&Move::Defect) {
            let defection_prop = opponent.defections() as f64 / history.len() as f64;
            let r: f64 = rng.gen();
            tracing::trace!(defection_prop, r, "champion draw");
            if defection_prop >= r.max(0.4) {
                return Move::Defect;
            }
        }
        Move::Cooperate
    }
}
