use detonello_types::Placement;
use search::Minimax;
use tracing::debug;

use super::{legal_cells, Agent, AgentError};
use crate::{board::Board, DiscDifferential};

pub const DEFAULT_DEPTH: u32 = 3;

/// Full-width fixed-depth search over every affordable placement, scored by disc differential.
#[derive(Debug, Clone)]
pub struct MinimaxAgent {
    search: Minimax<DiscDifferential>,
}

impl MinimaxAgent {
    #[must_use]
    pub fn new(depth: u32) -> Self {
        Self {
            search: Minimax::new(depth, DiscDifferential),
        }
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.search.depth()
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Agent for MinimaxAgent {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move(&mut self, board: &Board) -> Result<Placement, AgentError> {
        legal_cells(board)?;
        let result = self.search.search(board);
        let (placement, value) = result
            .best
            .ok_or(AgentError::NoLegalMoves(board.player_to_move()))?;
        debug!(
            agent = self.name(),
            %placement,
            value,
            nodes = result.nodes,
            depth = self.depth(),
            "chose"
        );
        Ok(placement)
    }
}
