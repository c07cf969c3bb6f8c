use detonello_types::{Placement, DISC_KINDS};
use search::PolicyRng;
use tracing::debug;

use super::{legal_cells, Agent, AgentError};
use crate::board::Board;

/// Uniform over legal cells, then uniform over the disc kinds still affordable.
#[derive(Clone, Default)]
pub struct RandomAgent {
    rng: PolicyRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: PolicyRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &Board) -> Result<Placement, AgentError> {
        let mover = board.player_to_move();
        let no_moves = AgentError::NoLegalMoves(mover);
        let (_, position) = self
            .rng
            .select_random(legal_cells(board)?.iter())
            .ok_or(no_moves)?;
        let record = board.record(mover);
        let affordable = DISC_KINDS.into_iter().filter(|kind| record.has_budget(*kind));
        // Plain is always affordable
        let (_, kind) = self.rng.select_random(affordable).ok_or(no_moves)?;
        let placement = Placement::new(position, kind);
        debug!(agent = self.name(), %placement, "chose");
        Ok(placement)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use detonello_types::{DiscKind, Player};

    use super::*;
    use crate::board::PlayerRecord;

    #[test]
    fn same_seed_same_game() {
        let mut a = RandomAgent::new(11);
        let mut b = RandomAgent::new(11);
        let mut board = Board::new();
        while !board.is_finished() {
            let placement = a.choose_move(&board).unwrap();
            assert_eq!(b.choose_move(&board).unwrap(), placement);
            board.play(placement).unwrap();
        }
    }

    #[test]
    fn tries_every_cell_and_kind() {
        let board = Board::new();
        let mut agent = RandomAgent::new(2);
        let seen: HashSet<Placement> = (0..400)
            .map(|_| agent.choose_move(&board).unwrap())
            .collect();
        assert_eq!(seen.len(), board.legal_placements().len());
    }

    #[test]
    fn never_spends_missing_budget() {
        let board = Board::new().with_record(
            Player::First,
            PlayerRecord {
                detonating: 0,
                immune: 1,
                wins: 0,
            },
        );
        let mut agent = RandomAgent::default();
        for _ in 0..100 {
            let placement = agent.choose_move(&board).unwrap();
            assert_ne!(placement.kind, DiscKind::Detonating);
        }
    }
}
