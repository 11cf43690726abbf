//! Players that can be driven through a match

use clap::ValueEnum;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::arbitrator::Arbitrator;
use crate::board::{Board, PlayerId};
use crate::error::SearchError;
use crate::search::{Algorithm, Search, SearchOutcome};

/// A strategy for choosing moves, driven by a match runner
pub trait Player<B: Board> {
    fn name(&self) -> &str;

    /// Called once before any call to `calc_move`
    fn init(&mut self, id: PlayerId, msec_per_move: u64, rows: usize, cols: usize);

    /// Reports a column for the current board to the arbitrator
    ///
    /// `opponent_last_move` is `None` on the first move of the game, which
    /// does not imply that the board is empty.
    fn calc_move(
        &mut self,
        board: &B,
        opponent_last_move: Option<usize>,
        arbitrator: &mut dyn Arbitrator,
    ) -> Result<(), SearchError>;
}

/// A player backed by the iterative deepening [`Search`]
#[derive(Clone, Debug)]
pub struct SearchPlayer {
    name: &'static str,
    algorithm: Algorithm,
    search: Option<Search>,
    msec_per_move: u64,
    dimensions: (usize, usize),
    last_outcome: Option<SearchOutcome>,
}

impl SearchPlayer {
    pub fn new(name: &'static str, algorithm: Algorithm) -> Self {
        Self {
            name,
            algorithm,
            search: None,
            msec_per_move: 0,
            dimensions: (0, 0),
            last_outcome: None,
        }
    }

    pub fn minimax() -> Self {
        Self::new("MiniMax", Algorithm::Minimax)
    }

    pub fn alpha_beta() -> Self {
        Self::new("AlphaBeta", Algorithm::AlphaBeta)
    }

    /// Statistics of the most recent move calculation
    pub fn last_outcome(&self) -> Option<SearchOutcome> {
        self.last_outcome
    }
}

impl<B: Board> Player<B> for SearchPlayer {
    fn name(&self) -> &str {
        self.name
    }

    fn init(&mut self, id: PlayerId, msec_per_move: u64, rows: usize, cols: usize) {
        self.search = Some(Search::new(id, self.algorithm));
        self.msec_per_move = msec_per_move;
        self.dimensions = (rows, cols);
    }

    fn calc_move(
        &mut self,
        board: &B,
        _opponent_last_move: Option<usize>,
        arbitrator: &mut dyn Arbitrator,
    ) -> Result<(), SearchError> {
        let search = self.search.as_mut().ok_or(SearchError::NotInitialised)?;
        if (board.num_rows(), board.num_cols()) != self.dimensions {
            warn!(
                "{} initialised for a {}x{} board but given {}x{}",
                self.name,
                self.dimensions.0,
                self.dimensions.1,
                board.num_rows(),
                board.num_cols()
            );
        }
        debug!("{} searching with {} ms per move", self.name, self.msec_per_move);
        self.last_outcome = Some(search.calc_move(board, arbitrator)?);
        Ok(())
    }
}

/// A player choosing uniformly among the columns that are not full
pub struct RandomPlayer<R: Rng> {
    rng: R,
    initialised: bool,
}

impl<R: Rng> RandomPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            initialised: false,
        }
    }
}

impl RandomPlayer<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<B: Board, R: Rng> Player<B> for RandomPlayer<R> {
    fn name(&self) -> &str {
        "Greedo"
    }

    fn init(&mut self, _id: PlayerId, _msec_per_move: u64, _rows: usize, _cols: usize) {
        self.initialised = true;
    }

    fn calc_move(
        &mut self,
        board: &B,
        _opponent_last_move: Option<usize>,
        arbitrator: &mut dyn Arbitrator,
    ) -> Result<(), SearchError> {
        if !self.initialised {
            return Err(SearchError::NotInitialised);
        }
        if board.is_full() {
            return Err(SearchError::BoardFull);
        }
        let columns: Vec<usize> = (0..board.num_cols())
            .filter(|&col| board.is_valid_move(col))
            .collect();
        arbitrator.set_move(columns[self.rng.gen_range(0..columns.len())]);
        Ok(())
    }
}

/// The computer players available to the driver
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, ValueEnum)]
pub enum PlayerKind {
    Minimax,
    AlphaBeta,
    Random,
}

impl PlayerKind {
    /// Builds a fresh player, `seed` feeds the random player only
    pub fn create<B: Board>(self, seed: u64) -> Box<dyn Player<B> + Send> {
        match self {
            PlayerKind::Minimax => Box::new(SearchPlayer::minimax()),
            PlayerKind::AlphaBeta => Box::new(SearchPlayer::alpha_beta()),
            PlayerKind::Random => Box::new(RandomPlayer::seeded(seed)),
        }
    }
}
