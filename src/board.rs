//! The board interface consumed by the search

use std::fmt;
use std::ops::Deref;

use crate::NUM_PLAYERS;

/// Identifier of one of the two players, either 1 or 2
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct PlayerId(u8);

impl PlayerId {
    pub const ONE: PlayerId = PlayerId(1);
    pub const TWO: PlayerId = PlayerId(2);

    /// Returns `None` for anything outside `1..=NUM_PLAYERS`
    pub fn new(id: u8) -> Option<Self> {
        match id {
            1..=NUM_PLAYERS => Some(Self(id)),
            _ => None,
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The opponent of this player
    pub fn other(self) -> Self {
        Self(NUM_PLAYERS + 1 - self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A mutable Connect 4 grid
///
/// Row 0 is the bottom row. Every `play` made by the search is paired with
/// an `unplay` of the same column and player, see [`MoveGuard`].
pub trait Board: Clone {
    fn num_rows(&self) -> usize;

    fn num_cols(&self) -> usize;

    /// The owner of a cell, `None` if it is empty
    fn get(&self, row: usize, col: usize) -> Option<PlayerId>;

    fn is_column_full(&self, col: usize) -> bool;

    /// Drops a tile for `player` into `col`
    ///
    /// # Panics
    /// The column must be in range and not full.
    fn play(&mut self, col: usize, player: PlayerId);

    /// Removes the top tile of `col`, which must belong to `player`
    fn unplay(&mut self, col: usize, player: PlayerId);

    fn num_empty_cells(&self) -> usize {
        let rows = self.num_rows();
        (0..self.num_cols())
            .map(|col| (0..rows).filter(|&row| self.get(row, col).is_none()).count())
            .sum()
    }

    fn is_valid_move(&self, col: usize) -> bool {
        col < self.num_cols() && !self.is_column_full(col)
    }

    fn is_full(&self) -> bool {
        (0..self.num_cols()).all(|col| self.is_column_full(col))
    }
}

/// Plays a move on creation and takes it back when dropped
///
/// The board is readable through the guard while the move is applied.
pub struct MoveGuard<'a, B: Board> {
    board: &'a mut B,
    column: usize,
    player: PlayerId,
}

impl<'a, B: Board> MoveGuard<'a, B> {
    pub fn new(board: &'a mut B, column: usize, player: PlayerId) -> Self {
        board.play(column, player);
        Self {
            board,
            column,
            player,
        }
    }

    /// An independent copy of the board with the move applied
    pub fn snapshot(&self) -> B {
        self.board.clone()
    }
}

impl<'a, B: Board> Deref for MoveGuard<'a, B> {
    type Target = B;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl<'a, B: Board> Drop for MoveGuard<'a, B> {
    fn drop(&mut self) {
        self.board.unplay(self.column, self.player);
    }
}
