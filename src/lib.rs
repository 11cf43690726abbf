//! A time-bounded search agent for the board game 'Connect 4'
//!
//! The agent builds a game tree of future boards and walks it with an
//! iterative deepening minimax or alpha-beta search, publishing the best
//! column found after every completed depth so that a move is always
//! available when the time budget runs out.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_search::{arbitrator::TimedArbitrator, arrayboard::ArrayBoard};
//! use connect4_search::{board::PlayerId, search::{Algorithm, Search}};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = ArrayBoard::from_moves(6, 7, "4453")?;
//! let mut arbitrator = TimedArbitrator::from_millis(50);
//! let mut search = Search::new(PlayerId::ONE, Algorithm::AlphaBeta);
//!
//! let outcome = search.calc_move(&board, &mut arbitrator)?;
//! assert_eq!(outcome.column, arbitrator.chosen_move());
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod arbitrator;

pub mod board;

pub mod arrayboard;

pub mod error;

pub mod evaluator;

pub mod selector;

pub mod tree;

pub mod search;

pub mod player;

pub mod game;

pub mod tournament;


/// The number of players taking part in a game
pub const NUM_PLAYERS: u8 = 2;

/// The number of aligned tiles that score a point
pub const CONNECT: usize = 4;

/// The default height of the game board in tiles
pub const DEFAULT_ROWS: usize = 6;

/// The default width of the game board in tiles
pub const DEFAULT_COLS: usize = 7;

/// The default time budget for a single move
pub const DEFAULT_MSEC_PER_MOVE: u64 = 1000;

// the default board must be able to hold an alignment in every direction
const_assert!(DEFAULT_ROWS >= CONNECT && DEFAULT_COLS >= CONNECT);
// player ids are derived from each other with NUM_PLAYERS + 1 - id
const_assert_eq!(NUM_PLAYERS, 2);
