use detonello_types::Placement;
use tracing::debug;

use super::{legal_cells, Agent, AgentError};
use crate::board::Board;

/// Most captures now, plain discs only. Ties go to the highest column, then the highest row.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Agent for Greedy {
    fn name(&self) -> &str {
        "greedy"
    }

    fn choose_move(&mut self, board: &Board) -> Result<Placement, AgentError> {
        let mover = board.player_to_move();
        let (position, captures) = legal_cells(board)?
            .iter()
            .map(|position| (position, board.capture_count(position)))
            .max_by_key(|(position, captures)| (*captures, position.col(), position.row()))
            .ok_or(AgentError::NoLegalMoves(mover))?;
        debug!(agent = self.name(), %position, captures, "chose");
        Ok(Placement::plain(position))
    }
}
