//! Plays a series of independent matches between two kinds of player

use anyhow::Result;
use indicatif::ProgressBar;
use rayon::prelude::*;

use crate::arrayboard::ArrayBoard;
use crate::game::{play_match, MatchConfig, Outcome};
use crate::player::{Player, PlayerKind};

/// Results of a tournament, indexed like the `kinds` it was run with
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Summary {
    pub wins: [usize; 2],
    pub draws: usize,
}

impl Summary {
    pub fn games(&self) -> usize {
        self.wins[0] + self.wins[1] + self.draws
    }
}

/// Plays `games` matches in parallel, alternating which kind moves first
///
/// Every match gets its own players and board, game `i` seeds random
/// players with `seed + i`.
pub fn run(
    config: &MatchConfig,
    kinds: [PlayerKind; 2],
    games: usize,
    seed: u64,
    progress: Option<&ProgressBar>,
) -> Result<Summary> {
    config.validate()?;

    let results = (0..games)
        .into_par_iter()
        .map(|game| -> Result<Option<usize>> {
            // the kind at index `starter` plays first
            let starter = game % 2;
            let game_seed = seed.wrapping_add(game as u64);
            let mut first: Box<dyn Player<ArrayBoard> + Send> = kinds[starter].create(game_seed);
            let mut second: Box<dyn Player<ArrayBoard> + Send> =
                kinds[1 - starter].create(game_seed.wrapping_add(1));

            let record = play_match(config, first.as_mut(), second.as_mut())?;
            if let Some(progress) = progress {
                progress.inc(1);
            }
            Ok(match record.outcome {
                Outcome::Win(id) if id.get() == 1 => Some(starter),
                Outcome::Win(_) => Some(1 - starter),
                Outcome::Draw => None,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut summary = Summary::default();
    for winner in results {
        match winner {
            Some(index) => summary.wins[index] += 1,
            None => summary.draws += 1,
        }
    }
    Ok(summary)
}
