use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Light,
    Dark,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Light,
    Dark,
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Light => Self::Light,
            Side::Dark => Self::Dark,
        }
    }
}

/// A square addressed by its 1-based row-major index (`row * 8 + col + 1`).
///
/// Only indices `1..=64` can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Move(u8);

impl Move {
    pub fn new(index: i32) -> Option<Self> {
        if (1..=NUM_SQUARES as i32).contains(&index) {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Zero-indexed `row, col`; `None` when either is outside `0..8`.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(Self((row * BOARD_SIZE + col + 1) as u8))
    }

    pub fn index(self) -> i32 {
        self.0 as i32
    }

    pub fn row(self) -> usize {
        self.square() / BOARD_SIZE
    }

    pub fn col(self) -> usize {
        self.square() % BOARD_SIZE
    }

    /// Zero-based square number, i.e. the bit position on a bitboard.
    pub(crate) fn square(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of a game handed to rendering collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub cells: Vec<Cell>,
    pub side_to_move: Side,
    pub light_count: u8,
    pub dark_count: u8,
    pub is_game_over: bool,
    /// `true` when the previous turn was skipped because its side had no move.
    pub is_pass: bool,
    pub last_move: Option<Move>,
}

/// Final result after game over. `winner` is `None` on a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Option<Side>,
    pub light_count: u8,
    pub dark_count: u8,
}
