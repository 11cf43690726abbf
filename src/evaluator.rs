//! Static evaluation of a board by counting lines of four

use crate::board::{Board, PlayerId};
use crate::CONNECT;

/// A direction in which tiles can be aligned
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// bottom-left to top-right
    DiagonalUp,
    /// top-left to bottom-right
    DiagonalDown,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    // (row step, column step)
    fn step(self) -> (i64, i64) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalUp => (1, 1),
            Direction::DiagonalDown => (-1, 1),
        }
    }
}

/// Counts the windows of `CONNECT` cells in one direction that are all
/// owned by `player`
///
/// Overlapping windows are counted separately, so five in a row scores 2.
pub fn count_direction<B: Board>(board: &B, player: PlayerId, direction: Direction) -> i32 {
    let (rows, cols) = (board.num_rows() as i64, board.num_cols() as i64);
    let (dr, dc) = direction.step();
    let reach = CONNECT as i64 - 1;
    let mut score = 0;

    for row in 0..rows {
        for col in 0..cols {
            let (end_row, end_col) = (row + dr * reach, col + dc * reach);
            if end_row < 0 || end_row >= rows || end_col >= cols {
                continue;
            }
            let aligned = (0..CONNECT as i64).all(|i| {
                board.get((row + dr * i) as usize, (col + dc * i) as usize) == Some(player)
            });
            if aligned {
                score += 1;
            }
        }
    }
    score
}

/// Counts the lines of four owned by `player` in every direction
pub fn count_alignments<B: Board>(board: &B, player: PlayerId) -> i32 {
    Direction::ALL
        .iter()
        .map(|&direction| count_direction(board, player, direction))
        .sum()
}

/// Positional value of a board from `player`'s point of view
pub fn evaluate<B: Board>(board: &B, player: PlayerId, opponent: PlayerId) -> i32 {
    count_alignments(board, player) - count_alignments(board, opponent)
}
