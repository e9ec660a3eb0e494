use std::collections::BTreeSet;

use crate::error::{OthelloError, Result};
use crate::types::{BOARD_SIZE, Disc, FlipRecord, NUM_SQUARES, Position};

/// Capture lines are scanned along the four orthogonal directions only,
/// in this order: +row, -row, +col, -col.
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Othello board: an 8x8 grid plus, for every disc kind, the set of
/// coordinates currently holding it.
///
/// Every coordinate is in exactly one of the three occupant sets, and that
/// set agrees with the grid. [`Board::change_color`] is the only place that
/// writes a cell, so the two views can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Disc; BOARD_SIZE]; BOARD_SIZE],
    occupants: [BTreeSet<Position>; 3],
}

impl Board {
    /// Creates the initial board:
    /// (3,3) and (4,4) white, (3,4) and (4,3) black.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.change_color(Position { row: 3, col: 3 }, Disc::White);
        board.change_color(Position { row: 4, col: 4 }, Disc::White);
        board.change_color(Position { row: 3, col: 4 }, Disc::Black);
        board.change_color(Position { row: 4, col: 3 }, Disc::Black);
        board
    }

    /// Creates a board with all 64 cells empty.
    pub fn empty() -> Self {
        let mut occupants: [BTreeSet<Position>; 3] = Default::default();
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                occupants[Disc::Empty.index()].insert(Position { row, col });
            }
        }
        Self {
            grid: [[Disc::Empty; BOARD_SIZE]; BOARD_SIZE],
            occupants,
        }
    }

    /// Builds a board from eight rows of `B`, `W` and `.` (or space).
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(OthelloError::InvalidBoard(format!(
                "expected {BOARD_SIZE} rows, got {}",
                rows.len()
            )));
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().collect();
            if cells.len() != BOARD_SIZE {
                return Err(OthelloError::InvalidBoard(format!(
                    "row {row} has {} cells, expected {BOARD_SIZE}",
                    cells.len()
                )));
            }
            for (col, ch) in cells.into_iter().enumerate() {
                let disc = match ch {
                    'B' | 'b' => Disc::Black,
                    'W' | 'w' => Disc::White,
                    '.' | ' ' => continue,
                    other => {
                        return Err(OthelloError::InvalidBoard(format!(
                            "unexpected character {other:?} at ({row}, {col})"
                        )));
                    }
                };
                board.change_color(
                    Position {
                        row: row as u8,
                        col: col as u8,
                    },
                    disc,
                );
            }
        }
        Ok(board)
    }

    /// Disc at `pos`.
    pub fn get(&self, pos: Position) -> Disc {
        self.grid[pos.row as usize][pos.col as usize]
    }

    /// Coordinates currently holding `disc`.
    pub fn occupants(&self, disc: Disc) -> &BTreeSet<Position> {
        &self.occupants[disc.index()]
    }

    pub fn count(&self, disc: Disc) -> usize {
        self.occupants(disc).len()
    }

    pub fn empty_count(&self) -> usize {
        self.count(Disc::Empty)
    }

    /// Writes `disc` into `pos`, moving the coordinate between occupant sets.
    pub fn change_color(&mut self, pos: Position, disc: Disc) {
        let old = self.get(pos);
        self.occupants[old.index()].remove(&pos);
        self.grid[pos.row as usize][pos.col as usize] = disc;
        self.occupants[disc.index()].insert(pos);
    }

    /// Returns the legal destinations for `color` in row-major order.
    ///
    /// A destination is an empty cell reached by walking from one of
    /// `color`'s discs across at least one opponent disc. `Disc::Empty`
    /// has no moves.
    pub fn legal_moves(&self, color: Disc) -> Vec<Position> {
        if color == Disc::Empty {
            return Vec::new();
        }

        let opponent = color.opposite();
        let mut moves = BTreeSet::new();

        for &origin in self.occupants(color) {
            for (dr, dc) in DIRECTIONS {
                let mut opposite_count = 0;
                let mut cursor = origin.offset(dr, dc);
                while let Some(pos) = cursor {
                    if self.get(pos) != opponent {
                        break;
                    }
                    opposite_count += 1;
                    cursor = pos.offset(dr, dc);
                }
                if let Some(pos) = cursor
                    && opposite_count > 0
                    && self.get(pos) == Disc::Empty
                {
                    moves.insert(pos);
                }
            }
        }

        moves.into_iter().collect()
    }

    pub fn is_legal(&self, color: Disc, pos: Position) -> bool {
        self.legal_moves(color).contains(&pos)
    }

    /// Places a `color` disc at `pos` and flips every captured line.
    ///
    /// With `forced` the legality check is skipped, but the target must still
    /// be empty. On error the board is left untouched. The returned record is
    /// exactly what [`Board::revert_move`] needs to undo the move.
    pub fn make_move(&mut self, color: Disc, pos: Position, forced: bool) -> Result<FlipRecord> {
        if Position::new(pos.row, pos.col).is_none() {
            return Err(OthelloError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        if self.get(pos) != Disc::Empty {
            return Err(OthelloError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }
        if color == Disc::Empty || (!forced && !self.is_legal(color, pos)) {
            return Err(OthelloError::IllegalMove {
                row: pos.row,
                col: pos.col,
                color,
            });
        }

        self.change_color(pos, color);

        let opponent = color.opposite();
        let mut flips = FlipRecord::default();
        for (dr, dc) in DIRECTIONS {
            let mut line = Vec::new();
            let mut cursor = pos.offset(dr, dc);
            let mut closed = false;
            while let Some(next) = cursor {
                let disc = self.get(next);
                if disc == opponent {
                    line.push(next);
                } else {
                    closed = disc == color;
                    break;
                }
                cursor = next.offset(dr, dc);
            }
            if !closed {
                continue;
            }
            for captured in line {
                self.change_color(captured, color);
                flips.push(captured);
            }
        }

        Ok(flips)
    }

    /// Undoes a move previously returned by [`Board::make_move`].
    ///
    /// `flips` must be the record produced for `last_move` on this exact
    /// position; every flipped disc is turned back to the opposite color.
    pub fn revert_move(&mut self, last_move: Position, flips: &FlipRecord) {
        self.change_color(last_move, Disc::Empty);
        for &pos in flips.positions() {
            let restored = self.get(pos).opposite();
            self.change_color(pos, restored);
        }
    }

    /// True while at least one side can still move.
    pub fn has_valid_moves(&self) -> bool {
        !self.legal_moves(Disc::White).is_empty() || !self.legal_moves(Disc::Black).is_empty()
    }

    /// Checks that every coordinate sits in exactly the occupant set that
    /// matches its grid cell.
    pub fn is_consistent(&self) -> bool {
        let total: usize = self.occupants.iter().map(BTreeSet::len).sum();
        if total != NUM_SQUARES {
            return false;
        }
        (0..BOARD_SIZE as u8).all(|row| {
            (0..BOARD_SIZE as u8).all(|col| {
                let pos = Position { row, col };
                self.occupants(self.get(pos)).contains(&pos)
            })
        })
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut cells = [0u8; NUM_SQUARES];
        for (row, line) in self.grid.iter().enumerate() {
            for (col, disc) in line.iter().enumerate() {
                cells[row * BOARD_SIZE + col] = disc.to_u8();
            }
        }
        cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
