use rand::RngCore;

use crate::strategy::{Classifier, MemoryDepth, Move, PlayerView, Strategy};

/// Rounds inspected in the final phase
const WINDOW: usize = 7;

/// Bernard Grofman's entry.
///
/// Cooperates on moves 1 and 2 and mirrors the opponent on moves 3 to 7.
/// From move 8 on it counts the opponent's defections over the last seven
/// rounds: after its own C it defects on three or more, after its own D on
/// two or more.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoreGrofman;

impl MoreGrofman {
    /// Opponent defections counted for a decision at `move_number` (1-indexed).
    ///
    /// The listing sums rounds `move_number - 7 ..= move_number - 1`, which
    /// are 0-indexed positions `move_number - 8 ..= move_number - 2`.
    pub fn recent_defections(opponent: &[Move], move_number: usize) -> usize {
        let start = move_number.saturating_sub(WINDOW + 1);
        let end = move_number.saturating_sub(1).min(opponent.len());
        opponent
            .get(start..end)
            .map_or(0, |window| window.iter().filter(|m| **m == Move::Defect).count())
    }
}

impl Strategy for MoreGrofman {
    fn name(&self) -> &'static str {
        "MoreGrofman"
    }

    fn classifier(&self) -> Classifier {
        Classifier::new(MemoryDepth::Finite(WINDOW as u32))
    }

    fn decide(
        &mut self,
        me: &dyn PlayerView,
        opponent: &dyn PlayerView,
        _rng: &mut dyn RngCore,
    ) -> Move {
        let own = me.history();
        let move_number = own.len() + 1;

        if move_number <= 2 {
            return Move::Cooperate;
        }
        if move_number <= WINDOW {
            return opponent.history().last().copied().unwrap_or(Move::Cooperate);
        }

        let recent = Self::recent_defections(opponent.history(), move_number);
        match own.last() {
            Some(Move::Cooperate) if recent <= 2 => Move::Cooperate,
            Some(Move::Defect) if recent <= 1 => Move::Cooperate,
            _ => Move::Defect,
        }
    }
}
