use detonello_types::{BitBoard, Disc, DiscKind, Move, Placement, Player, Position};
use tracing::{info, warn};

use crate::{
    board::{Board, Outcome, PlaceError, PlayerRecord},
    history::History,
};

/// The authoritative game: a board plus the moves that led to it.
/// This is the surface front ends and agents talk to.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    history: History,
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue from an arbitrary position. The history starts out empty.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: History::new(),
        }
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// The disc at (`row`, `col`), `None` for empty or off-board cells.
    #[must_use]
    pub fn disc_at(&self, row: i32, col: i32) -> Option<Disc> {
        Position::try_new(row, col).and_then(|position| self.board.disc_at(position))
    }

    #[must_use]
    pub fn disc_at_position(&self, position: Position) -> Option<Disc> {
        self.board.disc_at(position)
    }

    #[must_use]
    pub fn legal_moves(&self) -> BitBoard {
        if self.board.is_finished() {
            return BitBoard::EMPTY;
        }
        self.board.legal_moves()
    }

    #[must_use]
    pub fn capture_count(&self, position: Position) -> usize {
        self.board.capture_count(position)
    }

    /// Applies `placement` for the player to move and records it.
    pub fn try_place_disc(&mut self, placement: Placement) -> Result<Move, PlaceError> {
        let mv = self.board.play(placement)?;
        self.history.push(mv);
        if let Some(outcome) = self.board.outcome() {
            info!(
                ?outcome,
                first = self.board.count(Player::First),
                second = self.board.count(Player::Second),
                moves = self.history.len(),
                "game finished"
            );
        }
        Ok(mv)
    }

    /// Like [`Game::try_place_disc`] for raw coordinates, which may be off the board.
    pub fn place_at(&mut self, row: i32, col: i32, kind: DiscKind) -> Result<Move, PlaceError> {
        let position = Position::try_new(row, col).ok_or(PlaceError::OutOfRange { row, col })?;
        self.try_place_disc(Placement::new(position, kind))
    }

    /// Whether the placement was accepted. Refused placements change nothing.
    pub fn place_disc(&mut self, position: Position, kind: DiscKind) -> bool {
        self.try_place_disc(Placement::new(position, kind)).is_ok()
    }

    /// Takes back the last move. Does nothing but log when there is none.
    pub fn undo_last_move(&mut self) -> Option<Move> {
        let Some(mv) = self.history.pop() else {
            warn!("nothing to undo");
            return None;
        };
        self.board.unplay(&mv);
        Some(mv)
    }

    #[must_use]
    pub fn is_mover_one(&self) -> bool {
        self.board.player_to_move().is_first()
    }

    #[must_use]
    pub fn player_to_move(&self) -> Player {
        self.board.player_to_move()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.board.is_finished()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.board.outcome()
    }

    #[must_use]
    pub fn first_player(&self) -> &PlayerRecord {
        self.board.record(Player::First)
    }

    #[must_use]
    pub fn second_player(&self) -> &PlayerRecord {
        self.board.record(Player::Second)
    }

    /// New game from the starting position. Win tallies carry over.
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
    }

    /// Read view for agents. Copy it to simulate.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_and_undo() {
        let mut game = Game::new();
        let before = *game.board();
        assert!(game.place_disc(Position::new(2, 4), DiscKind::Detonating));
        assert_eq!(game.history().len(), 1);
        assert!(!game.is_mover_one());
        assert_eq!(game.first_player().detonating, 2);

        let mv = game.undo_last_move().unwrap();
        assert_eq!(mv.position, Position::new(2, 4));
        assert_eq!(*game.board(), before);
        assert!(game.history().is_empty());
        assert!(game.undo_last_move().is_none());
        assert_eq!(*game.board(), before);
    }

    #[test]
    fn refused_placements_are_not_recorded() {
        let mut game = Game::new();
        assert!(!game.place_disc(Position::new(2, 3), DiscKind::Plain));
        assert!(!game.place_disc(Position::new(3, 3), DiscKind::Plain));
        assert_eq!(
            game.place_at(8, 0, DiscKind::Plain),
            Err(PlaceError::OutOfRange { row: 8, col: 0 })
        );
        assert_eq!(
            game.place_at(-1, 3, DiscKind::Plain),
            Err(PlaceError::OutOfRange { row: -1, col: 3 })
        );
        assert!(game.history().is_empty());
        assert!(game.is_mover_one());
    }

    #[test]
    fn disc_lookup_is_lenient() {
        let game = Game::new();
        assert_eq!(game.board_size(), 8);
        assert_eq!(game.disc_at(3, 3), Some(Disc::plain(Player::First)));
        assert_eq!(game.disc_at(0, 0), None);
        assert_eq!(game.disc_at(-1, 0), None);
        assert_eq!(game.disc_at(0, 8), None);
    }

    #[test]
    fn reset_clears_history() {
        let mut game = Game::new();
        game.place_at(2, 4, DiscKind::Immune).unwrap();
        game.reset();
        assert!(game.history().is_empty());
        assert_eq!(*game.board(), Board::new());
        assert_eq!(game.first_player().immune, 2);
    }

    #[test]
    fn finished_game_has_no_moves() {
        let mut board = Board::empty();
        board.set(Position::new(0, 0), Disc::plain(Player::First));
        board.set(Position::new(0, 1), Disc::plain(Player::Second));
        let mut game = Game::from_board(board);
        game.place_at(0, 2, DiscKind::Plain).unwrap();
        assert!(game.is_finished());
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.outcome(), Some(Outcome::Winner(Player::First)));
        assert_eq!(game.first_player().wins, 1);

        game.undo_last_move();
        assert!(!game.is_finished());
        assert_eq!(game.first_player().wins, 0);
        assert_eq!(game.legal_moves(), Position::new(0, 2).bitboard());
    }
}
