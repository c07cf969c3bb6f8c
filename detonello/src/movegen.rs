use detonello_types::{
    BitBoard, Direction, Placement, Player, Position, ALL_DIRECTIONS, DISC_KINDS,
};
use itertools::Itertools;
use smallvec::SmallVec;

use crate::board::Board;

pub type PlacementList = SmallVec<Placement, 48>;

impl Board {
    /// Every disc that changes hands if `mover` places on `at`.
    ///
    /// Runs of opponent discs are committed when a disc of `mover` closes them off. An
    /// opponent immune disc, an empty cell or the edge ends a run without capturing
    /// anything. Committed detonating discs then go off, see [`Board::detonate`].
    #[must_use]
    pub fn captures(&self, at: Position, mover: Player) -> BitBoard {
        let mut captured = BitBoard::EMPTY;
        for direction in ALL_DIRECTIONS {
            captured |= self.bracketed_run(at, direction, mover);
        }
        let fuses = captured & self.detonating();
        captured |= self.detonate(fuses, mover);
        (captured - self.discs_of(mover)).without(at)
    }

    /// The opponent discs between `from` and the nearest disc of `mover` in `direction`.
    /// Empty unless that run is closed off by `mover`.
    #[must_use]
    pub fn bracketed_run(&self, from: Position, direction: Direction, mover: Player) -> BitBoard {
        let own = self.discs_of(mover);
        let theirs = self.discs_of(!mover);
        let mut run = BitBoard::EMPTY;
        for position in from.ray(direction) {
            if own.has(position) {
                return run;
            }
            if !theirs.has(position) || self.immune().has(position) {
                break;
            }
            run = run.with(position);
        }
        BitBoard::EMPTY
    }

    /// Chain reaction from the detonating discs in `fuses`. Each one flips itself and its
    /// non-immune opponent neighbours, and opponent detonating neighbours go off in turn.
    /// Every detonating disc goes off at most once, so cycles terminate.
    #[must_use]
    pub fn detonate(&self, fuses: BitBoard, mover: Player) -> BitBoard {
        let theirs = self.discs_of(!mover) - self.immune();
        let mut pending = fuses;
        let mut detonated = BitBoard::EMPTY;
        let mut blast = BitBoard::EMPTY;
        while let Some(fuse) = pending.try_next_position() {
            pending = pending.without(fuse);
            detonated = detonated.with(fuse);
            let hit = fuse.neighbors() & theirs;
            blast |= hit.with(fuse);
            pending |= (hit & self.detonating()) - detonated;
        }
        blast
    }

    /// Legality only needs one non-empty run, detonation can only add to it.
    #[must_use]
    pub fn is_legal(&self, at: Position) -> bool {
        let mover = self.player_to_move();
        !self.occupied().has(at)
            && ALL_DIRECTIONS
                .into_iter()
                .any(|direction| !self.bracketed_run(at, direction, mover).is_empty())
    }

    /// Cells the player to move can place on.
    #[must_use]
    pub fn legal_moves(&self) -> BitBoard {
        self.empty_cells()
            .iter()
            .filter(|position| self.is_legal(*position))
            .collect()
    }

    /// Number of discs a placement by the player to move on `at` would flip.
    /// Zero for occupied cells.
    #[must_use]
    pub fn capture_count(&self, at: Position) -> usize {
        if self.occupied().has(at) {
            return 0;
        }
        self.captures(at, self.player_to_move()).len()
    }

    /// Every legal cell paired with each disc kind the mover can still afford,
    /// cells in row-major order and kinds in `DISC_KINDS` order.
    #[must_use]
    pub fn legal_placements(&self) -> PlacementList {
        if self.is_finished() {
            return PlacementList::new();
        }
        let record = self.record(self.player_to_move());
        let kinds = DISC_KINDS
            .into_iter()
            .filter(|kind| record.has_budget(*kind))
            .collect_vec();
        self.legal_moves()
            .iter()
            .cartesian_product(kinds)
            .map(|(position, kind)| Placement::new(position, kind))
            .collect()
    }
}
