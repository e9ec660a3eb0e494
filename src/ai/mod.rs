pub mod eval;
pub mod search;

use clap::ValueEnum;
use tracing::debug;
use web_time::Instant;

use crate::board::Board;
use crate::types::{Disc, Position};

use self::search::{MAX_SCORE, MIN_SCORE, Searcher};

/// AI strength, expressed as a search depth in plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl Difficulty {
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
            Difficulty::VeryHard => 7,
        }
    }
}

/// Picks a move for `color`, or `None` when `color` has to pass.
///
/// `board` is borrowed mutably for the search but is unchanged on return.
pub fn choose_move(board: &mut Board, color: Disc, difficulty: Difficulty) -> Option<Position> {
    let depth = difficulty.depth();
    let started = Instant::now();
    let mut searcher = Searcher::new();

    let result = searcher.minimax(board, depth, MIN_SCORE, MAX_SCORE, color, color);

    debug!(
        %color,
        depth,
        nodes = searcher.nodes(),
        score = result.score,
        best_move = ?result.best_move,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "search finished"
    );
    result.best_move
}
