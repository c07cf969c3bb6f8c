use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Sub, SubAssign,
};

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Set of cells on the 8x8 board, one bit per cell in row-major order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize)]
pub struct BitBoard(pub u64);

impl BitBoard {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self(u64::MAX);

    pub const TOP_EDGE: Self = Self(0xFF);
    pub const BOTTOM_EDGE: Self = Self(0xFF << 56);
    pub const LEFT_EDGE: Self = Self(0x0101_0101_0101_0101);
    pub const RIGHT_EDGE: Self = Self(0x8080_8080_8080_8080);
    pub const EDGES: Self =
        Self(Self::TOP_EDGE.0 | Self::BOTTOM_EDGE.0 | Self::LEFT_EDGE.0 | Self::RIGHT_EDGE.0);
    pub const CORNERS: Self = Self(1 | 1 << 7 | 1 << 56 | 1 << 63);
    // Rows and columns 2..=5
    pub const CENTER: Self = Self(0x0000_3C3C_3C3C_0000);

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn has(self, position: Position) -> bool {
        !self.is_disjoint(position.bitboard())
    }

    #[must_use]
    pub const fn with(self, position: Position) -> Self {
        Self(self.0 | position.bitboard().0)
    }

    #[must_use]
    pub const fn without(self, position: Position) -> Self {
        Self(self.0 & !position.bitboard().0)
    }

    #[must_use]
    pub const fn is_disjoint(self, other: BitBoard) -> bool {
        self.0 & other.0 == Self::EMPTY.0
    }

    #[must_use]
    pub const fn is_subset(self, other: BitBoard) -> bool {
        other.0 & self.0 == self.0
    }

    #[must_use]
    pub const fn is_superset(self, other: BitBoard) -> bool {
        other.is_subset(self)
    }

    #[must_use]
    pub const fn try_next_position(self) -> Option<Position> {
        if self.is_empty() {
            return None;
        }
        Some(Position::from_index(self.0.trailing_zeros() as u8))
    }

    /// Iterates the cells in ascending index order, i.e. row by row.
    #[must_use]
    pub const fn iter(self) -> BitBoardIter {
        BitBoardIter(self)
    }
}

impl std::fmt::Debug for BitBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

pub struct BitBoardIter(BitBoard);

impl Iterator for BitBoardIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.0.try_next_position();
        if let Some(position) = position {
            self.0 ^= position.bitboard();
        }
        position
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl IntoIterator for BitBoard {
    type Item = Position;
    type IntoIter = BitBoardIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl ExactSizeIterator for BitBoardIter {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<Position> for BitBoard {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        let mut res = BitBoard::EMPTY;
        for position in iter {
            res |= position.bitboard();
        }
        res
    }
}

macro_rules! impl_math_ops {
    ($($trait:ident, $fn:ident;)*) => {$(
        impl $trait for BitBoard {
            type Output = Self;

            fn $fn(self, rhs: Self) -> Self::Output {
                Self($trait::$fn(self.0, rhs.0))
            }
        }
    )*};
}
impl_math_ops! {
    BitAnd, bitand;
    BitOr, bitor;
    BitXor, bitxor;
}

macro_rules! impl_math_assign_ops {
    ($($trait:ident, $fn:ident;)*) => {$(
        impl $trait for BitBoard {
            fn $fn(&mut self, rhs: Self) {
                $trait::$fn(&mut self.0, rhs.0)
            }
        }
    )*};
}
impl_math_assign_ops! {
    BitAndAssign, bitand_assign;
    BitOrAssign, bitor_assign;
    BitXorAssign, bitxor_assign;
}

impl Sub for BitBoard {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self & !rhs
    }
}

impl SubAssign for BitBoard {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Not for BitBoard {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}
