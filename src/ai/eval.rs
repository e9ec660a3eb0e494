use crate::board::Board;
use crate::types::Disc;

/// Disc-count differential from `maximizing`'s point of view.
pub fn evaluate(board: &Board, maximizing: Disc) -> i32 {
    board.count(maximizing) as i32 - board.count(maximizing.opposite()) as i32
}
