#![warn(clippy::pedantic)]
#![allow(
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]
use board::Board;
use detonello_types::{Placement, Player};
use movegen::PlacementList;
use search::{Evaluator, GameState};

pub mod agents;
pub mod board;
pub mod eval;
pub mod game;
pub mod history;
pub mod movegen;

pub use agents::{Agent, AgentError, AgentKind};
pub use board::{Outcome, PlaceError, PlayerRecord};
pub use game::Game;
pub use history::History;

/// Own discs minus opponent discs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscDifferential;

impl Evaluator<Board> for DiscDifferential {
    fn evaluate(&self, state: &Board, player: &Player) -> i64 {
        state.disc_differential(*player)
    }
}

impl GameState for Board {
    type Move = Placement;
    type Player = Player;
    type MoveList = PlacementList;

    fn current_player(&self) -> Self::Player {
        self.player_to_move()
    }

    fn legal_moves(&self) -> Self::MoveList {
        self.legal_placements()
    }

    fn make_move(&mut self, mv: &Self::Move) -> bool {
        self.play(*mv).is_ok()
    }

    fn is_terminal(&self) -> bool {
        self.is_finished()
    }
}
