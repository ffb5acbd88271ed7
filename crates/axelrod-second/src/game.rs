//! Reference match driver

use serde::{Deserialize, Serialize};

use crate::attributes::{MatchAttributes, MatchConfig};
use crate::error::Result;
use crate::random::SeededRng;
use crate::strategy::{Move, PlayerView, Strategy, StrategyKind};

/// Payoff matrix for the Prisoner's Dilemma
/// Returns (score_a, score_b)
pub fn payoff(a: Move, b: Move) -> (u8, u8) {
    match (a, b) {
        (Move::Cooperate, Move::Cooperate) => (3, 3),
        (Move::Cooperate, Move::Defect) => (0, 5),
        (Move::Defect, Move::Cooperate) => (5, 0),
        (Move::Defect, Move::Defect) => (1, 1),
    }
}

/// Engine-side record of one player: history plus running counters
#[derive(Clone, Debug)]
pub struct Player {
    history: Vec<Move>,
    defections: usize,
    cooperations: usize,
    attributes: MatchAttributes,
}

impl Player {
    pub fn new(attributes: MatchAttributes) -> Self {
        Self {
            history: Vec::new(),
            defections: 0,
            cooperations: 0,
            attributes,
        }
    }

    /// A player who has already played `history`
    pub fn with_history(history: &[Move], attributes: MatchAttributes) -> Self {
        let mut player = Self::new(attributes);
        for m in history {
            player.push(*m);
        }
        player
    }

    /// Record a resolved round
    pub fn push(&mut self, m: Move) {
        match m {
            Move::Cooperate => self.cooperations += 1,
            Move::Defect => self.defections += 1,
        }
        self.history.push(m);
    }
}

impl PlayerView for Player {
    fn history(&self) -> &[Move] {
        &self.history
    }

    fn match_attributes(&self) -> &MatchAttributes {
        &self.attributes
    }

    fn defections(&self) -> usize {
        self.defections
    }

    fn cooperations(&self) -> usize {
        self.cooperations
    }
}

/// Result of a single round
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    pub move_a: Move,
    pub move_b: Move,
    pub score_a: u8,
    pub score_b: u8,
    pub cumulative_a: u32,
    pub cumulative_b: u32,
}

/// Result of a complete match
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchResult {
    pub rounds: Vec<RoundResult>,
    pub total_score_a: u32,
    pub total_score_b: u32,
    pub round_count: u32,
}

impl MatchResult {
    pub fn moves_a(&self) -> Vec<Move> {
        self.rounds.iter().map(|r| r.move_a).collect()
    }

    pub fn moves_b(&self) -> Vec<Move> {
        self.rounds.iter().map(|r| r.move_b).collect()
    }
}

/// Run a complete match between two catalog strategies
///
/// # Arguments
/// * `kind_a` - First player's strategy
/// * `kind_b` - Second player's strategy
/// * `config` - Turn count and advertised match attributes
/// * `seed` - Tournament randomness seed
/// * `match_index` - Index of this match in the tournament
///
/// Both strategies are freshly built, so no state leaks between matches.
pub fn run_match(
    kind_a: StrategyKind,
    kind_b: StrategyKind,
    config: &MatchConfig,
    seed: &[u8; 32],
    match_index: u32,
) -> Result<MatchResult> {
    let mut strategy_a = kind_a.build();
    let mut strategy_b = kind_b.build();
    play_match(
        strategy_a.as_mut(),
        strategy_b.as_mut(),
        config,
        seed,
        match_index,
    )
}

/// Play two strategy instances against each other
pub fn play_match(
    strategy_a: &mut dyn Strategy,
    strategy_b: &mut dyn Strategy,
    config: &MatchConfig,
    seed: &[u8; 32],
    match_index: u32,
) -> Result<MatchResult> {
    config.validate()?;

    tracing::debug!(
        a = strategy_a.name(),
        b = strategy_b.name(),
        turns = config.turns,
        match_index,
        "starting match"
    );

    let rng = SeededRng::new(seed, match_index);
    let mut player_a = Player::new(config.attributes);
    let mut player_b = Player::new(config.attributes);
    let mut rounds: Vec<RoundResult> = Vec::with_capacity(config.turns as usize);
    let mut total_a = 0u32;
    let mut total_b = 0u32;

    for round in 0..config.turns {
        // Separate stream per player so one strategy's draws never shift the other's
        let mut rng_a = rng.for_round(round.wrapping_mul(2));
        let mut rng_b = rng.for_round(round.wrapping_mul(2).wrapping_add(1));

        // Both decide from completed rounds only
        let move_a = strategy_a.decide(&player_a, &player_b, &mut rng_a);
        let move_b = strategy_b.decide(&player_b, &player_a, &mut rng_b);

        let (score_a, score_b) = payoff(move_a, move_b);
        total_a += score_a as u32;
        total_b += score_b as u32;

        rounds.push(RoundResult {
            round,
            move_a,
            move_b,
            score_a,
            score_b,
            cumulative_a: total_a,
            cumulative_b: total_b,
        });

        player_a.push(move_a);
        player_b.push(move_b);
    }

    tracing::debug!(
        a = strategy_a.name(),
        b = strategy_b.name(),
        total_a,
        total_b,
        "match finished"
    );

    Ok(MatchResult {
        rounds,
        total_score_a: total_a,
        total_score_b: total_b,
        round_count: config.turns,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::attributes::MatchLength;
    use crate::error::Error;
    use rand::RngCore;

    /// Plays a fixed sequence, repeating the last move once exhausted
    pub(crate) struct Scripted(pub Vec<Move>);

    impl Strategy for Scripted {
        fn name(&self) -> &'static str {
            "Scripted"
        }

        fn classifier(&self) -> crate::strategy::Classifier {
            crate::strategy::Classifier::new(crate::strategy::MemoryDepth::Finite(0))
        }

        fn decide(
            &mut self,
            me: &dyn PlayerView,
            _opponent: &dyn PlayerView,
            _rng: &mut dyn RngCore,
        ) -> Move {
            let turn = me.history().len();
            self.0
                .get(turn)
                .or(self.0.last())
                .copied()
                .unwrap_or(Move::Cooperate)
        }
    }

    pub(crate) fn always(m: Move) -> Scripted {
        Scripted(vec![m])
    }

    #[test]
    fn test_payoff_matrix() {
        assert_eq!(payoff(Move::Cooperate, Move::Cooperate), (3, 3));
        assert_eq!(payoff(Move::Cooperate, Move::Defect), (0, 5));
        assert_eq!(payoff(Move::Defect, Move::Cooperate), (5, 0));
        assert_eq!(payoff(Move::Defect, Move::Defect), (1, 1));
    }

    #[test]
    fn test_player_counters() {
        let player = Player::with_history(
            &[Move::Cooperate, Move::Defect, Move::Defect],
            MatchAttributes::default(),
        );
        assert_eq!(player.history().len(), 3);
        assert_eq!(player.defections(), 2);
        assert_eq!(player.cooperations(), 1);
    }

    #[test]
    fn test_zero_turns_rejected() {
        let result = run_match(
            StrategyKind::Tester,
            StrategyKind::Gladstein,
            &MatchConfig::new(0),
            &[42u8; 32],
            0,
        );
        assert!(matches!(result, Err(Error::ZeroTurns)));
    }

    #[test]
    fn test_round_count() {
        let result = run_match(
            StrategyKind::Tester,
            StrategyKind::MoreGrofman,
            &MatchConfig::new(37),
            &[42u8; 32],
            0,
        )
        .unwrap();
        assert_eq!(result.round_count, 37);
        assert_eq!(result.rounds.len(), 37);
    }

    #[test]
    fn test_match_determinism() {
        let seed = [42u8; 32];
        let config = MatchConfig::new(100);

        let result1 = run_match(StrategyKind::Champion, StrategyKind::Eatherley, &config, &seed, 0).unwrap();
        let result2 = run_match(StrategyKind::Champion, StrategyKind::Eatherley, &config, &seed, 0).unwrap();

        assert_eq!(result1.total_score_a, result2.total_score_a);
        assert_eq!(result1.total_score_b, result2.total_score_b);
        assert_eq!(result1.moves_a(), result2.moves_a());
        assert_eq!(result1.moves_b(), result2.moves_b());
    }

    #[test]
    fn test_cumulative_scores() {
        let result = run_match(
            StrategyKind::Gladstein,
            StrategyKind::Tester,
            &MatchConfig::new(40),
            &[42u8; 32],
            0,
        )
        .unwrap();

        let mut expected_a = 0u32;
        let mut expected_b = 0u32;
        for round in &result.rounds {
            expected_a += round.score_a as u32;
            expected_b += round.score_b as u32;
            assert_eq!(round.cumulative_a, expected_a);
            assert_eq!(round.cumulative_b, expected_b);
        }
        assert_eq!(result.total_score_a, expected_a);
        assert_eq!(result.total_score_b, expected_b);
    }

    #[test]
    fn test_tester_vs_gladstein() {
        // Both open with D, both see a defection and apologise, then TFT locks in C
        let result = run_match(
            StrategyKind::Tester,
            StrategyKind::Gladstein,
            &MatchConfig::new(10),
            &[42u8; 32],
            0,
        )
        .unwrap();

        use Move::{Cooperate as C, Defect as D};
        assert_eq!(result.moves_a(), vec![D, C, C, C, C, C, C, C, C, C]);
        assert_eq!(result.moves_b(), vec![D, C, C, C, C, C, C, C, C, C]);
    }

    #[test]
    fn test_state_does_not_leak_between_matches() {
        // Tester switches to TFT against a defector; a rerun must start over
        let config = MatchConfig::new(4);
        let seed = [42u8; 32];
        let first = run_match(StrategyKind::Tester, StrategyKind::Gladstein, &config, &seed, 0).unwrap();
        let second = run_match(StrategyKind::Tester, StrategyKind::Gladstein, &config, &seed, 1).unwrap();
        assert_eq!(first.rounds[0].move_a, Move::Defect);
        assert_eq!(second.rounds[0].move_a, Move::Defect);
        assert_eq!(first.moves_a(), second.moves_a());
    }

    #[test]
    fn test_scripted_opponent() {
        let mut tester = StrategyKind::Tester.build();
        let mut opponent = always(Move::Cooperate);
        let result = play_match(
            tester.as_mut(),
            &mut opponent,
            &MatchConfig::new(7).with_length(MatchLength::Unbounded),
            &[42u8; 32],
            0,
        )
        .unwrap();

        use Move::{Cooperate as C, Defect as D};
        assert_eq!(result.moves_a(), vec![D, C, C, D, C, D, C]);
        assert_eq!(result.total_score_a, 5 + 3 + 3 + 5 + 3 + 5 + 3);
    }
}
