use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use std::io::{stdin, stdout, Write};

use connect4_search::arrayboard::ArrayBoard;
use connect4_search::board::{Board, PlayerId};
use connect4_search::game::{self, MatchConfig};
use connect4_search::player::{Player, PlayerKind};
use connect4_search::search::{Algorithm, Search};
use connect4_search::{tournament, DEFAULT_COLS, DEFAULT_MSEC_PER_MOVE, DEFAULT_ROWS};

/// Play and analyse Connect 4 against a time-bounded game tree search
#[derive(Parser)]
#[command(name = "connect4", about = "Connect 4 with a minimax / alpha-beta AI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play an interactive game in the terminal
    Play {
        #[command(flatten)]
        board: BoardArgs,

        /// Computer player for player 1, human if omitted
        #[arg(long, value_enum)]
        one: Option<PlayerKind>,

        /// Computer player for player 2, human if omitted
        #[arg(long, value_enum)]
        two: Option<PlayerKind>,
    },
    /// Play many computer matches in parallel and report the results
    Tournament {
        #[command(flatten)]
        board: BoardArgs,

        #[arg(long, value_enum, default_value = "alpha-beta")]
        first: PlayerKind,

        #[arg(long, value_enum, default_value = "minimax")]
        second: PlayerKind,

        /// Number of matches to play
        #[arg(long, default_value_t = 10)]
        games: usize,

        /// Seed for random players
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Search a position to a fixed depth with both algorithms
    Analyse {
        #[command(flatten)]
        board: BoardArgs,

        /// Moves played so far as 1-indexed columns, e.g. 4453, on at most 9 columns
        #[arg(default_value = "")]
        moves: String,

        #[arg(long, default_value_t = 4)]
        depth: usize,
    },
}

#[derive(Args)]
struct BoardArgs {
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Time allowed for each computer move
    #[arg(long, default_value_t = DEFAULT_MSEC_PER_MOVE)]
    msec: u64,
}

impl BoardArgs {
    fn config(&self) -> Result<MatchConfig> {
        let config = MatchConfig {
            rows: self.rows,
            cols: self.cols,
            msec_per_move: self.msec,
        };
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Play { board, one, two } => play(&board.config()?, [one, two]),
        Command::Tournament {
            board,
            first,
            second,
            games,
            seed,
        } => {
            let config = board.config()?;
            let progress = ProgressBar::new(games as u64);
            progress.set_style(
                ProgressStyle::default_bar()
                    .template("Playing matches: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
                    .progress_chars("█▓▒░  "),
            );
            let summary = tournament::run(&config, [first, second], games, seed, Some(&progress))?;
            progress.finish();

            println!("{:?} wins: {}", first, summary.wins[0]);
            println!("{:?} wins: {}", second, summary.wins[1]);
            println!("Draws: {}", summary.draws);
            Ok(())
        }
        Command::Analyse { board, moves, depth } => {
            let config = board.config()?;
            let board = ArrayBoard::from_moves(config.rows, config.cols, &moves)?;
            // the player to move is the one who has played fewer tiles
            let player = if board.num_moves() % 2 == 0 {
                PlayerId::ONE
            } else {
                PlayerId::TWO
            };
            print!("{}", board);
            for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta].iter() {
                let outcome = Search::new(player, *algorithm).search_to_depth(&board, depth)?;
                println!(
                    "{:?}: player {} plays column {:?} with value {} ({} nodes)",
                    algorithm,
                    player,
                    outcome.column.map(|column| column + 1),
                    outcome.value,
                    outcome.node_count
                );
            }
            Ok(())
        }
    }
}

fn play(config: &MatchConfig, kinds: [Option<PlayerKind>; 2]) -> Result<()> {
    let mut board = ArrayBoard::new(config.rows, config.cols);
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let mut ai_players: Vec<Option<Box<dyn Player<ArrayBoard> + Send>>> = kinds
        .iter()
        .enumerate()
        .map(|(index, kind)| kind.map(|kind| kind.create(index as u64)))
        .collect();
    for (index, ai) in ai_players.iter_mut().enumerate() {
        if let Some(ai) = ai {
            let id = if index == 0 { PlayerId::ONE } else { PlayerId::TWO };
            ai.init(id, config.msec_per_move, config.rows, config.cols);
        }
    }

    let all_ai = ai_players.iter().all(Option::is_some);
    let mut player = PlayerId::ONE;
    let mut last_move = None;
    // game loop
    loop {
        board.display()?;

        let next_move = match ai_players[player.get() as usize - 1].as_mut() {
            // AI player
            Some(ai) => {
                println!("{} is thinking...", ai.name());
                stdout().flush()?;

                // slow down play if both players are AI
                if all_ai {
                    std::thread::sleep(std::time::Duration::new(1, 0));
                }

                let column = game::next_move(&mut **ai, &board, last_move, config)?;

                println!("Best move: {}", column + 1);
                column + 1
            }
            // human player
            None => {
                print!("Player {} move input > ", player);
                stdout().flush()?;
                let mut input_str = String::new();
                stdin.read_line(&mut input_str)?;

                match input_str.trim().parse::<usize>() {
                    Err(_) => {
                        println!("Invalid number: {}", input_str.trim());
                        continue;
                    }
                    Ok(column) => column,
                }
            }
        };

        let won = next_move >= 1
            && next_move <= board.num_cols()
            && board.is_valid_move(next_move - 1)
            && board.is_winning_move(next_move - 1, player);
        if let Err(err) = board.play_checked(next_move, player) {
            println!("{}", err);
            // try the move again
            continue;
        }
        last_move = Some(next_move - 1);

        // end states
        if won {
            board.display()?;
            println!("Player {} wins!", player);
            break;
        }
        if board.is_full() {
            board.display()?;
            println!("Draw!");
            break;
        }
        player = player.other();
    }
    Ok(())
}
