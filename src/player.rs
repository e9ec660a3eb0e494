use std::io::{self, BufRead};

use crate::ai::{self, Difficulty};
use crate::board::Board;
use crate::error::Result;
use crate::types::{Disc, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// Moves are typed in as `"ROW COL"`.
    Human,
    Ai(Difficulty),
}

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    color: Disc,
    kind: PlayerKind,
}

impl Player {
    pub fn human(name: impl Into<String>, color: Disc) -> Self {
        Self {
            name: name.into(),
            color,
            kind: PlayerKind::Human,
        }
    }

    pub fn ai(name: impl Into<String>, color: Disc, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            color,
            kind: PlayerKind::Ai(difficulty),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Disc {
        self.color
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }

    /// Asks this player for a move.
    ///
    /// Humans read one line from `input`; an unparseable line yields `None`
    /// and the caller re-prompts. The AI searches `board` and yields `None`
    /// only when it has to pass. End of input is an error.
    pub fn get_move<R: BufRead>(
        &self,
        board: &mut Board,
        input: &mut R,
    ) -> Result<Option<Position>> {
        match self.kind {
            PlayerKind::Human => {
                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "input closed");
                    return Err(eof.into());
                }
                Ok(parse_move(&line))
            }
            PlayerKind::Ai(difficulty) => Ok(ai::choose_move(board, self.color, difficulty)),
        }
    }
}

/// Parses `"ROW COL"` into an on-board position.
pub fn parse_move(line: &str) -> Option<Position> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse::<u8>().ok()?;
    let col = parts.next()?.parse::<u8>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Position::new(row, col)
}
