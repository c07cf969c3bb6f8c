pub mod minimax;
pub mod policies;

pub use minimax::{Minimax, SearchResult};
pub use policies::PolicyRng;

pub type Move<S> = <S as GameState>::Move;
pub type Player<S> = <S as GameState>::Player;

pub trait GameState: Clone {
    type Move: Clone + PartialEq + std::fmt::Debug;
    type Player: Copy + PartialEq + std::fmt::Debug;
    type MoveList: std::iter::IntoIterator<Item = Self::Move> + Clone;

    fn current_player(&self) -> Self::Player;
    fn legal_moves(&self) -> Self::MoveList;
    /// Applies `mv`. Returns `false` and leaves the state untouched if the move is rejected.
    fn make_move(&mut self, mv: &Self::Move) -> bool;
    fn is_terminal(&self) -> bool;
}

pub trait Evaluator<S: GameState> {
    /// Score of `state` from the point of view of `player`, higher is better.
    fn evaluate(&self, state: &S, player: &Player<S>) -> i64;
}
