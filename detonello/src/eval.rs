use detonello_types::{BitBoard, Placement, Player, Position, BOARD_SIZE};

use crate::board::{Board, Outcome};

pub const WIN_BONUS: i64 = 2000;
pub const CORNER_BONUS: i64 = 1000;
pub const X_SQUARE_PENALTY: i64 = -3;
pub const C_SQUARE_PENALTY: i64 = -2;
pub const STABLE_EDGE_BONUS: i64 = 10;
pub const EDGE_BONUS: i64 = 2;
pub const CENTER_BONUS: i64 = 3;

/// Occupied cells an edge line needs before it can count as stable.
const STABLE_EDGE_MIN: usize = BOARD_SIZE as usize - 1;

/// Cells diagonally adjacent to a corner.
pub const X_SQUARES: BitBoard = BitBoard(1 << 9 | 1 << 14 | 1 << 49 | 1 << 54);
/// Cells orthogonally adjacent to a corner.
pub const C_SQUARES: BitBoard =
    BitBoard(1 << 1 | 1 << 6 | 1 << 8 | 1 << 15 | 1 << 48 | 1 << 55 | 1 << 57 | 1 << 62);

const EDGE_LINES: [BitBoard; 4] = [
    BitBoard::TOP_EDGE,
    BitBoard::BOTTOM_EDGE,
    BitBoard::LEFT_EDGE,
    BitBoard::RIGHT_EDGE,
];

/// The corner `position` touches, for X- and C-squares.
fn adjacent_corner(position: Position) -> Option<Position> {
    (position.neighbors() & BitBoard::CORNERS).try_next_position()
}

/// Edge lines running through `position`. Empty away from the border.
fn edge_lines(position: Position) -> impl Iterator<Item = BitBoard> {
    EDGE_LINES.into_iter().filter(move |line| line.has(position))
}

#[allow(clippy::cast_possible_wrap)]
impl Board {
    /// Own discs minus opponent discs, from `player`'s side.
    #[must_use]
    pub fn disc_differential(&self, player: Player) -> i64 {
        self.count(player) as i64 - self.count(!player) as i64
    }

    /// Whether every edge line through `position` is nearly full and held entirely by `player`.
    #[must_use]
    pub fn stable_edge(&self, position: Position, player: Player) -> bool {
        let mut lines = edge_lines(position).peekable();
        lines.peek().is_some()
            && lines.all(|line| {
                let taken = line & self.occupied();
                taken.len() >= STABLE_EDGE_MIN && taken.is_subset(self.discs_of(player))
            })
    }

    /// Whether a plain disc on `position` ends the game with the player to move ahead.
    #[must_use]
    pub fn wins_immediately(&self, position: Position) -> bool {
        let mover = self.player_to_move();
        let mut lookahead = *self;
        lookahead.play(Placement::plain(position)).is_ok()
            && lookahead.outcome() == Some(Outcome::Winner(mover))
    }

    /// Situational worth of `position` for the player to move. The first matching term applies.
    #[must_use]
    pub fn positional_bonus(&self, position: Position) -> i64 {
        let mover = self.player_to_move();
        let corner_owned =
            || adjacent_corner(position).is_some_and(|corner| self.owner_at(corner) == Some(mover));
        let bb = position.bitboard();

        if self.wins_immediately(position) {
            WIN_BONUS
        } else if position.is_corner() {
            CORNER_BONUS
        } else if X_SQUARES.is_superset(bb) && !corner_owned() {
            X_SQUARE_PENALTY
        } else if C_SQUARES.is_superset(bb) && !self.stable_edge(position, mover) {
            C_SQUARE_PENALTY
        } else if self.stable_edge(position, mover) {
            STABLE_EDGE_BONUS
        } else if position.is_edge() {
            EDGE_BONUS
        } else if BitBoard::CENTER.is_superset(bb) {
            CENTER_BONUS
        } else {
            0
        }
    }

    /// Number of occupied cells around `position`.
    #[must_use]
    pub fn crowding(&self, position: Position) -> usize {
        (position.neighbors() & self.occupied()).len()
    }
}
