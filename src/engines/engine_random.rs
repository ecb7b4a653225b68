//! Random player built on the accepted-move generator.
//!
//! Picks uniformly among the requests the rules engine would accept. Useful
//! for soak-testing the dispatch and for the console's `random` command.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_state::{chess_types::MoveRequest, game_state::GameState};
use crate::move_generation::move_generator::generate_accepted_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A random accepted request, or `None` when the side to move has none.
    pub fn choose_move(&mut self, game_state: &GameState) -> Option<MoveRequest> {
        let moves = generate_accepted_moves(game_state);
        moves.as_slice().choose(&mut self.rng).map(|mv| mv.request)
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::GameRules;
    use crate::engines::rules_engine::RulesEngine;

    #[test]
    fn random_games_only_submit_accepted_moves() {
        for seed in 0..4u64 {
            let mut player = RandomEngine::seeded(seed);
            let mut engine = RulesEngine::new();

            for _ in 0..120 {
                let Some(request) = player.choose_move(engine.state()) else {
                    break;
                };
                let outcome = engine.submit_move(request);
                assert!(outcome.is_accepted(), "seed {seed}: {request:?} gave {outcome:?}");
            }
        }
    }

    #[test]
    fn same_seed_plays_the_same_game() {
        let mut first = RandomEngine::seeded(42);
        let mut second = RandomEngine::seeded(42);
        let mut a = RulesEngine::new();
        let mut b = RulesEngine::new();

        for _ in 0..30 {
            let (Some(ra), Some(rb)) = (first.choose_move(a.state()), second.choose_move(b.state())) else {
                break;
            };
            assert_eq!(ra, rb);
            a.submit_move(ra);
            b.submit_move(rb);
        }
        assert_eq!(a.state(), b.state());
    }
}
