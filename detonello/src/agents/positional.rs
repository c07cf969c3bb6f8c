use detonello_types::{DiscKind, Placement, Position};
use tracing::debug;

use super::{legal_cells, Agent, AgentError};
use crate::board::Board;

/// Occupied neighbours from which a cell is worth protecting with an immune disc.
const CROWDED: usize = 3;

/// Captures plus a positional bonus: corners, edges and the center are good,
/// cells next to an unclaimed corner are bad, and a move that wins outright beats everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Positional;

impl Positional {
    #[allow(clippy::cast_possible_wrap)]
    fn score(board: &Board, position: Position) -> i64 {
        board.capture_count(position) as i64 + board.positional_bonus(position)
    }
}

impl Agent for Positional {
    fn name(&self) -> &str {
        "positional"
    }

    fn choose_move(&mut self, board: &Board) -> Result<Placement, AgentError> {
        let mover = board.player_to_move();
        let (position, score) = legal_cells(board)?
            .iter()
            .map(|position| (position, Self::score(board, position)))
            .max_by_key(|(position, score)| (*score, position.col(), position.row()))
            .ok_or(AgentError::NoLegalMoves(mover))?;
        let kind = if board.crowding(position) >= CROWDED
            && board.record(mover).has_budget(DiscKind::Immune)
        {
            DiscKind::Immune
        } else {
            DiscKind::Plain
        };
        let placement = Placement::new(position, kind);
        debug!(agent = self.name(), %placement, score, "chose");
        Ok(placement)
    }
}
