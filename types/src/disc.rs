use enum_map::Enum;
use serde::{Deserialize, Serialize};

use crate::Player;

/// Kinds in the order agents try them.
pub const DISC_KINDS: [DiscKind; 3] = [DiscKind::Plain, DiscKind::Detonating, DiscKind::Immune];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiscKind {
    Plain,
    /// Flips its non-immune neighbours when captured.
    Detonating,
    /// Can never be captured and blocks capture runs.
    Immune,
}

impl DiscKind {
    /// Whether placing this kind draws from a limited per-player budget.
    #[must_use]
    pub fn is_special(self) -> bool {
        !matches!(self, DiscKind::Plain)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            DiscKind::Plain => "plain disc",
            DiscKind::Detonating => "detonating disc",
            DiscKind::Immune => "immune disc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Disc {
    pub owner: Player,
    pub kind: DiscKind,
}

impl Disc {
    #[must_use]
    pub fn new(owner: Player, kind: DiscKind) -> Self {
        Self { owner, kind }
    }

    #[must_use]
    pub fn plain(owner: Player) -> Self {
        Self::new(owner, DiscKind::Plain)
    }

    /// Single character used by the text board.
    #[must_use]
    pub fn symbol(&self) -> char {
        match (self.kind, self.owner) {
            (DiscKind::Plain, Player::First) => 'X',
            (DiscKind::Plain, Player::Second) => 'O',
            (DiscKind::Detonating, Player::First) => 'B',
            (DiscKind::Detonating, Player::Second) => 'b',
            (DiscKind::Immune, Player::First) => 'I',
            (DiscKind::Immune, Player::Second) => 'i',
        }
    }
}
