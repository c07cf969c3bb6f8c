use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::bitboard::BitBoard;

/// Board side length.
pub const BOARD_SIZE: u8 = 8;

/// A cell on the board. Ordered by row, then column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// # Panics
    /// If either coordinate is outside the board.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self { row, col }
    }

    /// Returns `None` for coordinates off the board.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        let size = i32::from(BOARD_SIZE);
        if (0..size).contains(&row) && (0..size).contains(&col) {
            // Both are in 0..8 so the casts are lossless
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[must_use]
    #[inline(always)]
    pub const fn from_index(index: u8) -> Self {
        Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    #[must_use]
    #[inline(always)]
    pub const fn index(self) -> u8 {
        self.row * BOARD_SIZE + self.col
    }

    #[must_use]
    #[inline(always)]
    pub const fn bitboard(self) -> BitBoard {
        BitBoard(1 << self.index())
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The neighbouring cell in `direction`, if it is on the board.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        Self::try_new(i32::from(self.row) + dr, i32::from(self.col) + dc)
    }

    /// Walks from this cell in `direction` until the board edge, excluding the start.
    pub fn ray(self, direction: Direction) -> impl Iterator<Item = Position> {
        std::iter::successors(self.step(direction), move |p| p.step(direction))
    }

    /// All in-bounds cells among the eight surrounding this one.
    #[must_use]
    pub fn neighbors(self) -> BitBoard {
        ALL_DIRECTIONS
            .into_iter()
            .filter_map(|d| self.step(d))
            .collect()
    }

    #[must_use]
    pub const fn is_corner(self) -> bool {
        BitBoard::CORNERS.has(self)
    }

    #[must_use]
    pub const fn is_edge(self) -> bool {
        BitBoard::EDGES.has(self)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The eight compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

impl Direction {
    /// (row, column) offset of one step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}
