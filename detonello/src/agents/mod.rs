use std::{fmt::Display, str::FromStr};

use detonello_types::{BitBoard, Placement, Player};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;

pub mod greedy;
pub mod minimax;
pub mod positional;
pub mod random;

pub use greedy::Greedy;
pub use minimax::{MinimaxAgent, DEFAULT_DEPTH};
pub use positional::Positional;
pub use random::RandomAgent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AgentError {
    /// The agent was asked to move in a position without legal moves.
    #[error("{0} has no legal move")]
    NoLegalMoves(Player),
}

/// Something that picks a placement for the player to move.
pub trait Agent {
    fn name(&self) -> &str;

    /// # Errors
    /// [`AgentError::NoLegalMoves`] if the player to move has nothing to play.
    fn choose_move(&mut self, board: &Board) -> Result<Placement, AgentError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Random,
    Greedy,
    Minimax,
    Positional,
}

pub const ALL_AGENT_KINDS: [AgentKind; 4] = [
    AgentKind::Random,
    AgentKind::Greedy,
    AgentKind::Minimax,
    AgentKind::Positional,
];

impl AgentKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AgentKind::Random => "random",
            AgentKind::Greedy => "greedy",
            AgentKind::Minimax => "minimax",
            AgentKind::Positional => "positional",
        }
    }

    /// `seed` only matters for the random agent and `depth` only for minimax.
    #[must_use]
    pub fn build(self, seed: u64, depth: u32) -> Box<dyn Agent> {
        match self {
            AgentKind::Random => Box::new(RandomAgent::new(seed)),
            AgentKind::Greedy => Box::new(Greedy),
            AgentKind::Minimax => Box::new(MinimaxAgent::new(depth)),
            AgentKind::Positional => Box::new(Positional),
        }
    }
}

impl Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown agent `{0}`, expected one of random, greedy, minimax, positional")]
pub struct UnknownAgent(pub String);

impl FromStr for AgentKind {
    type Err = UnknownAgent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_AGENT_KINDS
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAgent(s.to_owned()))
    }
}

/// Legal cells for the player to move, or the error every agent reports without them.
fn legal_cells(board: &Board) -> Result<BitBoard, AgentError> {
    let moves = board.legal_moves();
    if board.is_finished() || moves.is_empty() {
        return Err(AgentError::NoLegalMoves(board.player_to_move()));
    }
    Ok(moves)
}
