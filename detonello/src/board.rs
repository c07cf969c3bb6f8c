use std::fmt::Display;

use detonello_types::{
    BitBoard, Disc, DiscKind, Move, Placement, Player, Position, ALL_PLAYERS, BOARD_SIZE,
};
use enum_map::{enum_map, EnumMap};
use thiserror::Error;
use tracing::debug;

pub const DETONATING_BUDGET: u8 = 3;
pub const IMMUNE_BUDGET: u8 = 2;

/// Why a placement was refused. The board is untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("position ({row},{col}) is off the board")]
    OutOfRange { row: i32, col: i32 },
    #[error("{0} is already occupied")]
    Occupied(Position),
    #[error("a disc at {0} would not capture anything")]
    NoCaptures(Position),
    #[error("no {} left", .0.name())]
    BudgetExhausted(DiscKind),
    #[error("the game is already finished")]
    GameFinished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// Per player bookkeeping: special disc budgets and the win tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerRecord {
    pub detonating: u8,
    pub immune: u8,
    pub wins: u32,
}

impl Default for PlayerRecord {
    fn default() -> Self {
        Self {
            detonating: DETONATING_BUDGET,
            immune: IMMUNE_BUDGET,
            wins: 0,
        }
    }
}

impl PlayerRecord {
    /// Remaining budget for `kind`, `None` meaning unlimited.
    #[must_use]
    pub fn budget(&self, kind: DiscKind) -> Option<u8> {
        match kind {
            DiscKind::Plain => None,
            DiscKind::Detonating => Some(self.detonating),
            DiscKind::Immune => Some(self.immune),
        }
    }

    #[must_use]
    pub fn has_budget(&self, kind: DiscKind) -> bool {
        self.budget(kind).map_or(true, |left| left > 0)
    }

    fn spend(&mut self, kind: DiscKind) {
        match kind {
            DiscKind::Plain => {}
            DiscKind::Detonating => self.detonating -= 1,
            DiscKind::Immune => self.immune -= 1,
        }
    }

    fn refund(&mut self, kind: DiscKind) {
        match kind {
            DiscKind::Plain => {}
            DiscKind::Detonating => self.detonating += 1,
            DiscKind::Immune => self.immune += 1,
        }
    }
}

/// The full game state as a plain value. Copying it is how search simulates moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    discs: EnumMap<Player, BitBoard>,
    detonating: BitBoard,
    immune: BitBoard,
    players: EnumMap<Player, PlayerRecord>,
    player_to_move: Player,
    finished: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Starting position: the four center cells seeded, first player to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set(Position::new(3, 3), Disc::plain(Player::First));
        board.set(Position::new(4, 4), Disc::plain(Player::First));
        board.set(Position::new(3, 4), Disc::plain(Player::Second));
        board.set(Position::new(4, 3), Disc::plain(Player::Second));
        board
    }

    /// A board without any discs, for building positions by hand.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            discs: enum_map! { _ => BitBoard::EMPTY },
            detonating: BitBoard::EMPTY,
            immune: BitBoard::EMPTY,
            players: EnumMap::default(),
            player_to_move: Player::First,
            finished: false,
        }
    }

    /// Back to the starting position with full budgets. Win tallies are kept.
    pub fn reset(&mut self) {
        let wins = self.players.map(|_, record| record.wins);
        *self = Self::new();
        for player in ALL_PLAYERS {
            self.players[player].wins = wins[player];
        }
    }

    #[must_use]
    pub fn with_player_to_move(mut self, player: Player) -> Self {
        self.player_to_move = player;
        self
    }

    #[must_use]
    pub fn with_record(mut self, player: Player, record: PlayerRecord) -> Self {
        self.players[player] = record;
        self
    }

    /// Puts `disc` on an empty cell without resolving any captures.
    pub fn set(&mut self, position: Position, disc: Disc) {
        assert!(
            self.disc_at(position).is_none(),
            "{position} is occupied by {:?}",
            self.disc_at(position),
        );
        let bb = position.bitboard();
        self.discs[disc.owner] |= bb;
        match disc.kind {
            DiscKind::Plain => {}
            DiscKind::Detonating => self.detonating |= bb,
            DiscKind::Immune => self.immune |= bb,
        }
    }

    /// Takes the disc off `position`, returning it.
    pub fn remove(&mut self, position: Position) -> Option<Disc> {
        let disc = self.disc_at(position)?;
        let bb = position.bitboard();
        self.discs[disc.owner] -= bb;
        self.detonating -= bb;
        self.immune -= bb;
        Some(disc)
    }

    /// Hands every disc in `cells` from its owner to the other player.
    /// Kinds stay with the cell, only ownership moves.
    fn flip(&mut self, cells: BitBoard) {
        let first = self.discs[Player::First] & cells;
        let second = self.discs[Player::Second] & cells;
        self.discs[Player::First] ^= first | second;
        self.discs[Player::Second] ^= first | second;
    }

    #[must_use]
    pub fn size(&self) -> usize {
        BOARD_SIZE as usize
    }

    #[must_use]
    pub fn disc_at(&self, position: Position) -> Option<Disc> {
        let owner = self.owner_at(position)?;
        let kind = if self.detonating.has(position) {
            DiscKind::Detonating
        } else if self.immune.has(position) {
            DiscKind::Immune
        } else {
            DiscKind::Plain
        };
        Some(Disc::new(owner, kind))
    }

    #[must_use]
    pub fn owner_at(&self, position: Position) -> Option<Player> {
        ALL_PLAYERS
            .into_iter()
            .find(|player| self.discs[*player].has(position))
    }

    /// Cells holding a disc of `player`.
    #[must_use]
    pub fn discs_of(&self, player: Player) -> BitBoard {
        self.discs[player]
    }

    #[must_use]
    pub fn occupied(&self) -> BitBoard {
        self.discs[Player::First] | self.discs[Player::Second]
    }

    #[must_use]
    pub fn empty_cells(&self) -> BitBoard {
        !self.occupied()
    }

    #[must_use]
    pub fn detonating(&self) -> BitBoard {
        self.detonating
    }

    #[must_use]
    pub fn immune(&self) -> BitBoard {
        self.immune
    }

    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.discs[player].len()
    }

    #[must_use]
    pub fn total_discs(&self) -> usize {
        self.occupied().len()
    }

    #[must_use]
    pub fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    #[must_use]
    pub fn record(&self, player: Player) -> &PlayerRecord {
        &self.players[player]
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Result by strict disc majority. Only meaningful once the game is finished.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.finished {
            return None;
        }
        Some(self.majority())
    }

    fn majority(&self) -> Outcome {
        let first = self.count(Player::First);
        let second = self.count(Player::Second);
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::First),
            std::cmp::Ordering::Less => Outcome::Winner(Player::Second),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Place a disc for the player to move, resolve captures and pass the turn.
    /// Ends the game when the next player has no legal move.
    pub fn play(&mut self, placement: Placement) -> Result<Move, PlaceError> {
        if self.finished {
            return Err(PlaceError::GameFinished);
        }
        let Placement { position, kind } = placement;
        let mover = self.player_to_move;
        if self.occupied().has(position) {
            return Err(PlaceError::Occupied(position));
        }
        if !self.players[mover].has_budget(kind) {
            return Err(PlaceError::BudgetExhausted(kind));
        }
        let captured = self.captures(position, mover);
        if captured.is_empty() {
            return Err(PlaceError::NoCaptures(position));
        }

        let disc = Disc::new(mover, kind);
        self.set(position, disc);
        self.players[mover].spend(kind);
        debug_assert!(captured.is_subset(self.discs[!mover]));
        self.flip(captured);
        self.player_to_move = !mover;

        let mv = Move::new(position, disc, captured);
        debug!(%mv, captures = captured.len(), "placed");

        if self.legal_moves().is_empty() {
            self.finish();
        }
        Ok(mv)
    }

    fn finish(&mut self) {
        self.finished = true;
        let outcome = self.majority();
        if let Outcome::Winner(player) = outcome {
            self.players[player].wins += 1;
        }
        debug!(?outcome, "finished");
    }

    /// Exact inverse of the `play` that produced `mv`. `mv` has to be the last move played.
    pub fn unplay(&mut self, mv: &Move) {
        let mover = mv.disc.owner;
        if self.finished {
            if let Outcome::Winner(player) = self.majority() {
                self.players[player].wins -= 1;
            }
            self.finished = false;
        }
        self.player_to_move = mover;
        self.players[mover].refund(mv.disc.kind);
        self.remove(mv.position);
        debug_assert!(mv.captured.is_subset(self.discs[mover]));
        self.flip(mv.captured);
        debug!(%mv, "undone");
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, " ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {col}")?;
        }
        for row in 0..BOARD_SIZE {
            write!(f, "\n{row}")?;
            for col in 0..BOARD_SIZE {
                let symbol = self
                    .disc_at(Position::new(row, col))
                    .map_or('.', |disc| disc.symbol());
                write!(f, " {symbol}")?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self}")?;
        for player in ALL_PLAYERS {
            let record = self.players[player];
            writeln!(
                f,
                "{player}: discs {}, detonating {}, immune {}, wins {}",
                self.count(player),
                record.detonating,
                record.immune,
                record.wins
            )?;
        }
        write!(
            f,
            "to_move {:?}, finished {}",
            self.player_to_move, self.finished
        )
    }
}
