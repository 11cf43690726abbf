//! Runs a match between two players

use anyhow::{anyhow, Context, Result};
use log::{info, warn};

use crate::arbitrator::TimedArbitrator;
use crate::arrayboard::ArrayBoard;
use crate::board::{Board, PlayerId};
use crate::error::ConfigError;
use crate::player::Player;
use crate::{DEFAULT_COLS, DEFAULT_MSEC_PER_MOVE, DEFAULT_ROWS};

/// Board dimensions and time control of a match
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MatchConfig {
    pub rows: usize,
    pub cols: usize,
    pub msec_per_move: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            msec_per_move: DEFAULT_MSEC_PER_MOVE,
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.msec_per_move == 0 {
            return Err(ConfigError::NoTime);
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Win(PlayerId),
    Draw,
}

/// The result of a finished match
#[derive(Clone, Debug)]
pub struct MatchRecord {
    pub outcome: Outcome,
    /// Columns played in order, player one first
    pub moves: Vec<usize>,
    pub board: ArrayBoard,
}

/// Plays `first` (player 1) against `second` (player 2) until someone
/// connects four or the board is full
pub fn play_match(
    config: &MatchConfig,
    first: &mut dyn Player<ArrayBoard>,
    second: &mut dyn Player<ArrayBoard>,
) -> Result<MatchRecord> {
    config.validate()?;
    let mut board = ArrayBoard::new(config.rows, config.cols);
    let mut players: [&mut dyn Player<ArrayBoard>; 2] = [first, second];
    for (player, id) in players.iter_mut().zip([PlayerId::ONE, PlayerId::TWO].iter()) {
        player.init(*id, config.msec_per_move, config.rows, config.cols);
    }

    let mut moves = Vec::new();
    let mut id = PlayerId::ONE;
    loop {
        let column = next_move(players[id.get() as usize - 1], &board, moves.last().copied(), config)?;
        let won = board.is_winning_move(column, id);
        board.play(column, id);
        moves.push(column);

        let outcome = if won {
            Some(Outcome::Win(id))
        } else if board.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        };
        if let Some(outcome) = outcome {
            info!("match over after {} moves: {:?}", moves.len(), outcome);
            return Ok(MatchRecord {
                outcome,
                moves,
                board,
            });
        }
        id = id.other();
    }
}

/// Asks `player` for a column with a fresh `msec_per_move` deadline
///
/// Falls back to the lowest open column if the player never reported one in
/// time, and fails if it reported a column that cannot be played.
pub fn next_move(
    player: &mut dyn Player<ArrayBoard>,
    board: &ArrayBoard,
    opponent_last_move: Option<usize>,
    config: &MatchConfig,
) -> Result<usize> {
    let mut arbitrator = TimedArbitrator::from_millis(config.msec_per_move);
    player
        .calc_move(board, opponent_last_move, &mut arbitrator)
        .with_context(|| format!("{} failed to calculate a move", player.name()))?;

    match arbitrator.chosen_move() {
        Some(column) if board.is_valid_move(column) => Ok(column),
        Some(column) => Err(anyhow!("{} chose invalid column {}", player.name(), column)),
        None => {
            let fallback = (0..board.num_cols())
                .find(|&col| board.is_valid_move(col))
                .ok_or_else(|| anyhow!("no valid move left on the board"))?;
            warn!(
                "{} did not report a move in time, playing column {}",
                player.name(),
                fallback
            );
            Ok(fallback)
        }
    }
}
