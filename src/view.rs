//! Presentation side of the game loop.
//!
//! A view reads the board but never mutates it; the only exception is that
//! asking an AI player for a move lends it the board for an in-place search,
//! which always leaves the board as it found it.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::warn;

use crate::board::Board;
use crate::error::Result;
use crate::player::Player;
use crate::types::{BOARD_SIZE, Disc, GameResult, Position};

pub trait BoardView {
    fn draw(&mut self, board: &Board, player: &Player) -> Result<()>;

    /// Returns the move to play, or `None` when `player` has no legal move.
    fn prompt_player_to_move(
        &mut self,
        player: &Player,
        board: &mut Board,
    ) -> Result<Option<Position>>;

    fn print_winner(&mut self, result: &GameResult, black: &Player, white: &Player) -> Result<()>;
}

/// Plain-text view over any line-oriented input and output.
pub struct ConsoleView<R, W> {
    input: R,
    output: W,
}

impl ConsoleView<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> BoardView for ConsoleView<R, W> {
    fn draw(&mut self, board: &Board, _player: &Player) -> Result<()> {
        let rule = "_".repeat(BOARD_SIZE * 4 + 1);
        writeln!(self.output, "{rule}")?;
        for row in 0..BOARD_SIZE as u8 {
            write!(self.output, "|")?;
            for col in 0..BOARD_SIZE as u8 {
                write!(self.output, " {} |", board.get(Position { row, col }).to_char())?;
            }
            writeln!(self.output)?;
        }
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "Scores:")?;
        writeln!(self.output, "White: {}", board.count(Disc::White))?;
        writeln!(self.output, "Black: {}", board.count(Disc::Black))?;
        Ok(())
    }

    fn prompt_player_to_move(
        &mut self,
        player: &Player,
        board: &mut Board,
    ) -> Result<Option<Position>> {
        writeln!(
            self.output,
            "Current player: {} ({})",
            player.name(),
            player.color()
        )?;

        let moves = board.legal_moves(player.color());
        if moves.is_empty() {
            writeln!(self.output, "No valid moves. Passing turn.")?;
            return Ok(None);
        }
        let listed: Vec<String> = moves.iter().map(Position::to_string).collect();
        writeln!(self.output, "Valid moves: {}", listed.join(", "))?;

        if !player.is_human() {
            writeln!(self.output, "AI is thinking...")?;
            return player.get_move(board, &mut self.input);
        }

        writeln!(self.output, "Please enter your move ROW COL (separated by space):")?;
        self.output.flush()?;
        loop {
            match player.get_move(board, &mut self.input)? {
                Some(mv) if moves.contains(&mv) => return Ok(Some(mv)),
                rejected => {
                    warn!(player = player.name(), ?rejected, "rejected move input");
                    writeln!(self.output, "Invalid move. Please try again.")?;
                    self.output.flush()?;
                }
            }
        }
    }

    fn print_winner(&mut self, result: &GameResult, black: &Player, white: &Player) -> Result<()> {
        writeln!(self.output, "White score: {}", result.white_count)?;
        writeln!(self.output, "Black score: {}", result.black_count)?;
        match result.winner_disc() {
            Disc::White => writeln!(self.output, "{} (White) wins!", white.name())?,
            Disc::Black => writeln!(self.output, "{} (Black) wins!", black.name())?,
            Disc::Empty => writeln!(self.output, "Draw!")?,
        }
        writeln!(self.output, "Game ended in {} turns.", result.turns)?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::ai::Difficulty;

    fn view(input: &str) -> ConsoleView<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleView::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(view: ConsoleView<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(view.into_output()).unwrap()
    }

    #[test]
    fn draw_renders_grid_and_scores() {
        let mut view = view("");
        let player = Player::human("Alice", Disc::Black);

        view.draw(&Board::new(), &player).unwrap();

        let text = output(view);
        assert!(text.contains("|   |   |   | W | B |   |   |   |"));
        assert!(text.contains("|   |   |   | B | W |   |   |   |"));
        assert!(text.contains("White: 2\nBlack: 2"));
    }

    #[test]
    fn human_is_reprompted_until_a_legal_move_arrives() {
        let mut view = view("hello\n0 0\n2 3\n");
        let player = Player::human("Alice", Disc::Black);
        let mut board = Board::new();

        let mv = view.prompt_player_to_move(&player, &mut board).unwrap();

        assert_eq!(mv, Some(Position { row: 2, col: 3 }));
        let text = output(view);
        assert_eq!(text.matches("Invalid move. Please try again.").count(), 2);
        assert!(text.contains("Valid moves: (2, 3), (3, 2), (4, 5), (5, 4)"));
    }

    #[test]
    fn player_without_moves_passes() {
        let mut view = view("");
        let player = Player::ai("Bot", Disc::Black, Difficulty::Easy);
        let mut board = Board::from_rows(&[
            "WB......",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ])
        .unwrap();

        assert_eq!(view.prompt_player_to_move(&player, &mut board).unwrap(), None);
        assert!(output(view).contains("No valid moves. Passing turn."));
    }

    #[test]
    fn winner_announcement_names_the_seat() {
        let mut view = view("");
        let black = Player::human("Alice", Disc::Black);
        let white = Player::ai("Bot", Disc::White, Difficulty::Easy);
        let result = GameResult {
            winner: 2,
            black_count: 20,
            white_count: 44,
            turns: 60,
        };

        view.print_winner(&result, &black, &white).unwrap();

        let text = output(view);
        assert!(text.contains("Bot (White) wins!"));
        assert!(text.contains("Game ended in 60 turns."));
    }
}
