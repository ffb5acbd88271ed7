use rand::RngCore;

use crate::strategy::{Classifier, MemoryDepth, Move, PlayerView, Strategy};

/// David Gladstein's entry, reverse engineered from the Fortran listing.
///
/// Defects first to probe. If the opponent ever defects it apologises and
/// plays Tit-for-Tat from then on. Otherwise it defects whenever its own
/// cooperation ratio is above one half.
#[derive(Clone, Debug)]
pub struct Gladstein {
    /// The opponent has not defected yet
    patsy: bool,
}

impl Gladstein {
    pub fn new() -> Self {
        Self { patsy: true }
    }

    pub fn patsy(&self) -> bool {
        self.patsy
    }
}

impl Default for Gladstein {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Gladstein {
    fn name(&self) -> &'static str {
        "Gladstein"
    }

    fn classifier(&self) -> Classifier {
        Classifier::new(MemoryDepth::Unbounded)
    }

    fn decide(
        &mut self,
        me: &dyn PlayerView,
        opponent: &dyn PlayerView,
        _rng: &mut dyn RngCore,
    ) -> Move {
        let own = me.history();
        if own.is_empty() {
            return Move::Defect;
        }

        let opp_last = opponent.history().last().copied();
        if !self.patsy {
            return opp_last.unwrap_or(Move::Cooperate);
        }

        if opp_last == Some(Move::Defect) {
            tracing::trace!("gladstein apologizes, switching to tit for tat");
            self.patsy = false;
            return Move::Cooperate;
        }

        let cooperation_ratio = me.cooperations() as f64 / own.len() as f64;
        if cooperation_ratio > 0.5 {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }
}
