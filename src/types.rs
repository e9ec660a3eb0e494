use std::fmt;

use serde::Serialize;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Disc {
    White,
    Black,
    Empty,
}

impl Disc {
    /// Returns the opposite disc. `Empty` has no inverse and maps to itself.
    pub fn opposite(self) -> Disc {
        match self {
            Disc::White => Disc::Black,
            Disc::Black => Disc::White,
            Disc::Empty => Disc::Empty,
        }
    }

    /// Wire encoding used by [`GameState::board`]: 0=empty, 1=black, 2=white.
    pub fn to_u8(self) -> u8 {
        match self {
            Disc::Empty => 0,
            Disc::Black => 1,
            Disc::White => 2,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Disc::White => 'W',
            Disc::Black => 'B',
            Disc::Empty => ' ',
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Disc::White => 0,
            Disc::Black => 1,
            Disc::Empty => 2,
        }
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Disc::White => "White",
            Disc::Black => "Black",
            Disc::Empty => "Empty",
        };
        f.write_str(name)
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Returns `None` when the coordinate lies off the board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Row-major index in `0..64`.
    pub fn index(self) -> u8 {
        self.row * BOARD_SIZE as u8 + self.col
    }

    /// Steps one cell in direction `(dr, dc)`, or `None` at the board edge.
    pub(crate) fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if in_bounds(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// Discs flipped by one move, in the order they were flipped.
///
/// This is the undo log for a move: replaying it through
/// [`Board::revert_move`](crate::board::Board::revert_move) restores the
/// position exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlipRecord(Vec<Position>);

impl FlipRecord {
    pub(crate) fn push(&mut self, pos: Position) {
        self.0.push(pos);
    }

    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the previous action was a pass.
    /// - `false` when the previous action was a normal move.
    pub is_pass: bool,
    /// Contract:
    /// - Normal move: list of flipped positions (0..=63).
    /// - Pass: must be an empty list.
    pub flipped: Vec<u8>,
    pub turns: u32,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// 0 on a draw, otherwise the [`Disc::to_u8`] code of the winner.
    pub winner: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub turns: u32,
}

impl GameResult {
    pub fn winner_disc(&self) -> Disc {
        match self.winner {
            1 => Disc::Black,
            2 => Disc::White,
            _ => Disc::Empty,
        }
    }
}
