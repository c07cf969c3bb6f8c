use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{BitBoard, Disc, DiscKind, Position};

/// What an agent asks for: a cell and the kind of disc to put there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub position: Position,
    pub kind: DiscKind,
}

impl Placement {
    #[must_use]
    pub fn new(position: Position, kind: DiscKind) -> Self {
        Self { position, kind }
    }

    #[must_use]
    pub fn plain(position: Position) -> Self {
        Self::new(position, DiscKind::Plain)
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.kind.name(), self.position)
    }
}

/// A resolved move. `captured` is computed once when the move is applied
/// and is what undo flips back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub disc: Disc,
    pub captured: BitBoard,
}

impl Move {
    #[must_use]
    pub fn new(position: Position, disc: Disc, captured: BitBoard) -> Self {
        Self {
            position,
            disc,
            captured,
        }
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        Placement::new(self.position, self.disc.kind)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} placed a {} in {}",
            self.disc.owner,
            self.disc.kind.name(),
            self.position
        )?;
        if !self.captured.is_empty() {
            write!(f, ", flipping")?;
            for position in self.captured {
                write!(f, " {position}")?;
            }
        }
        Ok(())
    }
}
