use crate::ai::eval::evaluate;
use crate::board::Board;
use crate::types::{Disc, Position};

pub const MIN_SCORE: i32 = i32::MIN;
pub const MAX_SCORE: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    /// `None` at leaves, and at the root when the mover has to pass.
    pub best_move: Option<Position>,
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// The search runs on the caller's board in place: each candidate is applied
/// with [`Board::make_move`], searched, then undone with
/// [`Board::revert_move`] before the next one is tried. The board is back in
/// its starting state when [`Searcher::minimax`] returns.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes visited since construction.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches `depth` plies with `mover` to play, scoring leaves for
    /// `maximizing`.
    ///
    /// A pass costs one ply and yields no move. Among equal scores the first
    /// candidate in [`Board::legal_moves`] order is kept.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        mover: Disc,
        maximizing: Disc,
    ) -> SearchResult {
        self.nodes += 1;

        if depth == 0 || !board.has_valid_moves() {
            return SearchResult {
                score: evaluate(board, maximizing),
                best_move: None,
            };
        }

        let moves = board.legal_moves(mover);
        if moves.is_empty() {
            let child = self.minimax(board, depth - 1, alpha, beta, mover.opposite(), maximizing);
            return SearchResult {
                score: child.score,
                best_move: None,
            };
        }

        let maximize = mover == maximizing;
        let mut best: Option<(i32, Position)> = None;

        for mv in moves {
            let flips = match board.make_move(mover, mv, true) {
                Ok(flips) => flips,
                Err(err) => {
                    debug_assert!(false, "generated move {mv} rejected: {err}");
                    continue;
                }
            };
            let score = self
                .minimax(board, depth - 1, alpha, beta, mover.opposite(), maximizing)
                .score;
            board.revert_move(mv, &flips);

            if maximize {
                if best.is_none_or(|(best_score, _)| score > best_score) {
                    best = Some((score, mv));
                }
                alpha = alpha.max(score);
            } else {
                if best.is_none_or(|(best_score, _)| score < best_score) {
                    best = Some((score, mv));
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        match best {
            Some((score, mv)) => SearchResult {
                score,
                best_move: Some(mv),
            },
            None => SearchResult {
                score: evaluate(board, maximizing),
                best_move: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position { row, col }
    }

    fn search(board: &mut Board, depth: u8, color: Disc) -> SearchResult {
        Searcher::new().minimax(board, depth, MIN_SCORE, MAX_SCORE, color, color)
    }

    #[test]
    fn search_returns_single_legal_move() {
        let mut board = Board::from_rows(&[
            ".WB.....",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ])
        .unwrap();
        assert_eq!(board.legal_moves(Disc::Black), vec![pos(0, 0)]);

        let result = search(&mut board, 1, Disc::Black);

        assert_eq!(result.best_move, Some(pos(0, 0)));
        assert_eq!(result.score, 3);
    }

    #[test]
    fn depth_one_picks_the_largest_capture() {
        let mut board = Board::from_rows(&[
            "B.......",
            "W.......",
            "W.......",
            "........",
            ".WB.....",
            "........",
            "........",
            "........",
        ])
        .unwrap();

        let result = search(&mut board, 1, Disc::Black);

        // (3,0) flips two discs, (4,0) flips one.
        assert_eq!(result.best_move, Some(pos(3, 0)));
        assert_eq!(result.score, 5 - 1);
    }

    #[test]
    fn search_leaves_the_board_untouched() {
        let mut board = Board::new();
        board.make_move(Disc::Black, pos(2, 3), false).unwrap();
        let before = board.clone();

        let result = search(&mut board, 5, Disc::White);

        assert_eq!(board, before);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn terminal_position_returns_disc_difference() {
        let mut board = Board::from_rows(&[
            ".BBBBBBB",
            "BBBBBBBB",
            "BBBBBBBB",
            "BBBBBBBB",
            "BBBBBBBB",
            "BBBBBBBB",
            "BBBBBBBB",
            "BBBBBBBB",
        ])
        .unwrap();

        let result = search(&mut board, 3, Disc::White);

        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -63);
    }

    #[test]
    fn pass_consumes_a_ply_without_a_move() {
        // Black cannot move; White can capture (0,1) by playing (0,2).
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
        assert!(board.legal_moves(Disc::Black).is_empty());

        let result = search(&mut board, 2, Disc::Black);

        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -3);
        assert_eq!(board.count(Disc::Black), 1);
    }

    #[test]
    fn node_counter_accumulates() {
        let mut board = Board::new();
        let mut searcher = Searcher::new();

        searcher.minimax(&mut board, 1, MIN_SCORE, MAX_SCORE, Disc::Black, Disc::Black);

        assert_eq!(searcher.nodes(), 1 + 4);
    }
}
