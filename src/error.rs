//! Error type shared by the board, game driver and console front end.

use crate::types::Disc;

#[derive(Debug, thiserror::Error)]
pub enum OthelloError {
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: u8, col: u8 },

    #[error("position ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },

    #[error("illegal move for {color} at ({row}, {col})")]
    IllegalMove { row: u8, col: u8, color: Disc },

    #[error("{seat} seat must be played by {seat}, got a {found} player")]
    ColorMismatch { seat: Disc, found: Disc },

    #[error("game is already over")]
    GameOver,

    #[error("it is not an AI player's turn")]
    NotAiTurn,

    #[error("it is not a human player's turn")]
    NotHumanTurn,

    #[error("cannot pass while legal moves exist")]
    MustMove,

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OthelloError>;
