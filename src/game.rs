use tracing::{debug, info};

use crate::ai;
use crate::board::Board;
use crate::error::{OthelloError, Result};
use crate::player::{Player, PlayerKind};
use crate::types::{Disc, FlipRecord, GameResult, GameState, Position};
use crate::view::BoardView;

/// A game between two seated players. Black moves first.
pub struct Game {
    board: Board,
    black: Player,
    white: Player,
    current: Disc,
    turns: u32,
    is_pass: bool,
    flipped: FlipRecord,
}

impl Game {
    /// Seats the players. Each must carry the color of the seat it takes.
    pub fn new(black: Player, white: Player) -> Result<Self> {
        if black.color() != Disc::Black {
            return Err(OthelloError::ColorMismatch {
                seat: Disc::Black,
                found: black.color(),
            });
        }
        if white.color() != Disc::White {
            return Err(OthelloError::ColorMismatch {
                seat: Disc::White,
                found: white.color(),
            });
        }

        Ok(Self {
            board: Board::new(),
            black,
            white,
            current: Disc::Black,
            turns: 0,
            is_pass: false,
            flipped: FlipRecord::default(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_color(&self) -> Disc {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        match self.current {
            Disc::White => &self.white,
            _ => &self.black,
        }
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn is_game_over(&self) -> bool {
        !self.board.has_valid_moves()
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.legal_moves(self.current)
    }

    /// Plays `(row, col)` for the human seated at the side to move.
    pub fn place(&mut self, row: u8, col: u8) -> Result<&FlipRecord> {
        if self.is_game_over() {
            return Err(OthelloError::GameOver);
        }
        if !self.current_player().is_human() {
            return Err(OthelloError::NotHumanTurn);
        }
        let pos = Position::new(row, col).ok_or(OthelloError::OutOfBounds { row, col })?;
        self.apply_move(pos)?;
        Ok(&self.flipped)
    }

    /// Passes for the side to move. Only allowed when it has no legal move.
    pub fn pass(&mut self) -> Result<()> {
        if self.is_game_over() {
            return Err(OthelloError::GameOver);
        }
        if !self.legal_moves().is_empty() {
            return Err(OthelloError::MustMove);
        }
        self.record_pass();
        Ok(())
    }

    /// Lets the AI seated at the side to move play. Returns `None` on a pass.
    pub fn ai_move(&mut self) -> Result<Option<Position>> {
        if self.is_game_over() {
            return Err(OthelloError::GameOver);
        }
        let PlayerKind::Ai(difficulty) = self.current_player().kind() else {
            return Err(OthelloError::NotAiTurn);
        };

        match ai::choose_move(&mut self.board, self.current, difficulty) {
            Some(pos) => {
                self.apply_move(pos)?;
                Ok(Some(pos))
            }
            None => {
                self.record_pass();
                Ok(None)
            }
        }
    }

    /// Runs the game to completion, asking `view` for every move.
    pub fn play<V: BoardView>(&mut self, view: &mut V) -> Result<GameResult> {
        info!(
            black = self.black.name(),
            white = self.white.name(),
            "game started"
        );

        while !self.is_game_over() {
            let player = match self.current {
                Disc::White => &self.white,
                _ => &self.black,
            };
            view.draw(&self.board, player)?;
            match view.prompt_player_to_move(player, &mut self.board)? {
                Some(pos) => self.apply_move(pos)?,
                None => self.record_pass(),
            }
        }

        view.draw(&self.board, self.current_player())?;
        let result = self.to_game_result();
        view.print_winner(&result, &self.black, &self.white)?;

        info!(
            black = result.black_count,
            white = result.white_count,
            turns = result.turns,
            "game over"
        );
        Ok(result)
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current.to_u8(),
            black_count: self.board.count(Disc::Black) as u8,
            white_count: self.board.count(Disc::White) as u8,
            is_game_over: self.is_game_over(),
            is_pass: self.is_pass,
            flipped: self.flipped.positions().iter().map(|p| p.index()).collect(),
            turns: self.turns,
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let black_count = self.board.count(Disc::Black) as u8;
        let white_count = self.board.count(Disc::White) as u8;
        let winner = if black_count > white_count {
            Disc::Black
        } else if white_count > black_count {
            Disc::White
        } else {
            Disc::Empty
        };
        GameResult {
            winner: winner.to_u8(),
            black_count,
            white_count,
            turns: self.turns,
        }
    }

    fn apply_move(&mut self, pos: Position) -> Result<()> {
        let flips = self.board.make_move(self.current, pos, false)?;
        debug!(color = %self.current, %pos, flipped = flips.len(), "move committed");

        self.is_pass = false;
        self.flipped = flips;
        self.turns += 1;
        self.current = self.current.opposite();
        Ok(())
    }

    fn record_pass(&mut self) {
        debug!(color = %self.current, "pass");
        self.is_pass = true;
        self.flipped = FlipRecord::default();
        self.turns += 1;
        self.current = self.current.opposite();
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current: Disc) {
        self.board = board;
        self.current = current;
        self.is_pass = false;
        self.flipped = FlipRecord::default();
    }
}
