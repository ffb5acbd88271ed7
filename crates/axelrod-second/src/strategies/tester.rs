use rand::RngCore;

use crate::strategy::{Classifier, MemoryDepth, Move, PlayerView, Strategy};

/// David Gladstein's TESTER.
///
/// Defects first. The first time the opponent defects it apologises with a
/// cooperation and plays Tit-for-Tat for the rest of the match. Until then
/// it cooperates on moves 2 and 3 and alternates afterwards.
#[derive(Clone, Debug, Default)]
pub struct Tester {
    apologized: bool,
}

impl Tester {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the strategy has switched to Tit-for-Tat
    pub fn apologized(&self) -> bool {
        self.apologized
    }
}

impl Strategy for Tester {
    fn name(&self) -> &'static str {
        "Tester"
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
        let Some(&opp_last) = opponent.history().last() else {
            return Move::Defect;
        };

        if self.apologized {
            return opp_last;
        }

        if opp_last == Move::Defect {
            tracing::trace!("tester apologizes, switching to tit for tat");
            self.apologized = true;
            return Move::Cooperate;
        }

        let own = me.history();
        match own.len() {
            1 | 2 => Move::Cooperate,
            _ => own.last().map_or(Move::Cooperate, |m| m.flip()),
        }
    }
}
