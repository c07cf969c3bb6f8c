use tracing::trace;

use crate::{Evaluator, GameState, Move, Player};

/// Fixed-depth minimax without pruning. The searcher never touches the
/// state it is given, every candidate is tried on a clone.
#[derive(Debug, Clone)]
pub struct Minimax<E> {
    depth: u32,
    eval: E,
}

#[derive(Debug, Clone)]
pub struct SearchResult<M> {
    /// Best root move with its backed-up value. `None` if no root move could be made.
    pub best: Option<(M, i64)>,
    /// Positions reached by making a move, root children included.
    pub nodes: u64,
}

impl<E> Minimax<E> {
    pub fn new(depth: u32, eval: E) -> Self {
        Self { depth, eval }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn evaluator(&self) -> &E {
        &self.eval
    }

    /// Scores every root move by a minimax of depth `depth - 1` below it, from the
    /// point of view of the player to move at `root`. Ties keep the first move found.
    pub fn search<S>(&self, root: &S) -> SearchResult<Move<S>>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let player = root.current_player();
        let mut nodes = 0;
        let mut best: Option<(Move<S>, i64)> = None;
        for mv in root.legal_moves() {
            let mut child = root.clone();
            if !child.make_move(&mv) {
                continue;
            }
            nodes += 1;
            let depth = self.depth.saturating_sub(1);
            let value = self.minimax(&child, depth, false, &player, &mut nodes);
            trace!(?mv, value, "root move");
            if best.as_ref().map_or(true, |(_, best_value)| value > *best_value) {
                best = Some((mv, value));
            }
        }
        SearchResult { best, nodes }
    }

    fn minimax<S>(
        &self,
        state: &S,
        depth: u32,
        maximizing: bool,
        player: &Player<S>,
        nodes: &mut u64,
    ) -> i64
    where
        S: GameState,
        E: Evaluator<S>,
    {
        if depth == 0 || state.is_terminal() {
            return self.eval.evaluate(state, player);
        }

        let mut best = None;
        for mv in state.legal_moves() {
            let mut child = state.clone();
            if !child.make_move(&mv) {
                continue;
            }
            *nodes += 1;
            let value = self.minimax(&child, depth - 1, !maximizing, player, nodes);
            best = Some(match best {
                None => value,
                Some(current) if maximizing => value.max(current),
                Some(current) => value.min(current),
            });
        }

        // A side without moves gets the worst score for that side
        best.unwrap_or(if maximizing { i64::MIN } else { i64::MAX })
    }
}
