//! Iterative deepening minimax and alpha-beta search

use log::{debug, info};

use crate::arbitrator::{Arbitrator, Unbounded};
use crate::board::{Board, PlayerId};
use crate::error::SearchError;
use crate::evaluator::evaluate;
use crate::selector;
use crate::tree::{NodeId, SearchTree};

/// The tree walk used for each depth of the search
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Algorithm {
    /// Visits every node up to the depth limit
    Minimax,
    /// Skips siblings once they can no longer change the result
    AlphaBeta,
}

/// The state of the root after a search
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchOutcome {
    /// The last column published, `None` if time ran out before any pass
    pub column: Option<usize>,
    /// Backed-up value of the root from the deepest pass that searched its
    /// children
    pub value: i32,
    /// The deepest pass that searched the root's children, 0 if none did
    pub depth: usize,
    /// Nodes visited across all passes
    pub node_count: usize,
}

/// A game tree search on behalf of one player
///
/// # Notes
/// Nodes are scored by [`evaluate`] from the searching player's point of
/// view: the number of lines of four it owns minus the number its opponent
/// owns. The searching player maximizes this value on its own moves and the
/// opponent minimizes it. Equal values are resolved in favour of the column
/// closest to the center, see [`selector::prefer`].
#[derive(Clone, Debug)]
pub struct Search {
    player: PlayerId,
    opponent: PlayerId,
    algorithm: Algorithm,

    /// The number of nodes visited by this `Search` so far (for diagnostics only)
    pub node_count: usize,
}

impl Search {
    pub fn new(player: PlayerId, algorithm: Algorithm) -> Self {
        Self {
            player,
            opponent: player.other(),
            algorithm,
            node_count: 0,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Searches one depth deeper at a time until the arbitrator runs out of
    /// time or the depth covers every empty cell
    ///
    /// The root's chosen column is published to the arbitrator after every
    /// pass, including a pass cut short by the deadline.
    pub fn calc_move<B, A>(&mut self, board: &B, arbitrator: &mut A) -> Result<SearchOutcome, SearchError>
    where
        B: Board,
        A: Arbitrator + ?Sized,
    {
        let mut tree = self.root_tree(board)?;
        let start_count = self.node_count;

        let mut depth = 1;
        let mut published = None;
        // value and depth of the last pass that reached the root's children
        let mut reached = (tree.root().value, 0);
        while !arbitrator.is_time_up() && depth <= board.num_empty_cells() {
            tree[SearchTree::<B>::ROOT].chosen_move = None;
            let value = self.search(&mut tree, SearchTree::<B>::ROOT, depth, i32::MIN, i32::MAX, true, &*arbitrator);
            // the deadline hit at the root itself, nothing was searched
            let column = match tree.root().chosen_move {
                Some(column) => column,
                None => break,
            };
            arbitrator.set_move(column);
            published = Some(column);
            reached = (value, depth);
            debug!(
                "player {} depth {}: column {}, value {}, {} nodes",
                self.player,
                depth,
                column,
                value,
                self.node_count - start_count
            );
            depth += 1;
        }

        let outcome = SearchOutcome {
            column: published,
            value: reached.0,
            depth: reached.1,
            node_count: self.node_count - start_count,
        };
        info!(
            "player {} ({:?}) chose column {:?} at depth {} after {} nodes",
            self.player, self.algorithm, outcome.column, outcome.depth, outcome.node_count
        );
        Ok(outcome)
    }

    /// Runs a single pass at a fixed depth with no deadline
    pub fn search_to_depth<B: Board>(&mut self, board: &B, depth: usize) -> Result<SearchOutcome, SearchError> {
        let mut tree = self.root_tree(board)?;
        let start_count = self.node_count;

        let value = self.search(&mut tree, SearchTree::<B>::ROOT, depth, i32::MIN, i32::MAX, true, &Unbounded::new());

        Ok(SearchOutcome {
            column: tree.root().chosen_move,
            value,
            depth,
            node_count: self.node_count - start_count,
        })
    }

    fn root_tree<B: Board>(&self, board: &B) -> Result<SearchTree<B>, SearchError> {
        if board.is_full() {
            return Err(SearchError::BoardFull);
        }
        let mut tree = SearchTree::new(board.clone());
        tree.expand(SearchTree::<B>::ROOT, self.player);
        Ok(tree)
    }

    /// Backs up the value of `id` from a search `depth` plies deep
    ///
    /// The window is closed: a returned value equal to alpha or beta is exact
    /// and siblings are only skipped once alpha exceeds beta, so every tie a
    /// node sees is between exact values.
    #[allow(clippy::too_many_arguments)]
    fn search<B, A>(
        &mut self,
        tree: &mut SearchTree<B>,
        id: NodeId,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        arbitrator: &A,
    ) -> i32
    where
        B: Board,
        A: Arbitrator + ?Sized,
    {
        self.node_count += 1;

        if arbitrator.is_time_up() || depth == 0 || tree[id].is_terminal() {
            let value = evaluate(&tree[id].board, self.player, self.opponent);
            tree[id].value = value;
            return value;
        }

        if tree[id].is_leaf() {
            let mover = if maximizing { self.player } else { self.opponent };
            tree.expand(id, mover);
        }

        let cols = tree[id].board.num_cols();
        let pruning = self.algorithm == Algorithm::AlphaBeta;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for index in 0..tree[id].children().len() {
            let (column, child) = tree[id].children()[index];
            let value = self.search(tree, child, depth - 1, alpha, beta, !maximizing, arbitrator);

            let node = &mut tree[id];
            let improves = if maximizing { value > best } else { value < best };
            if improves {
                best = value;
                node.value = value;
                node.chosen_move = Some(column);
                if pruning {
                    if maximizing {
                        alpha = alpha.max(value);
                    } else {
                        beta = beta.min(value);
                    }
                }
            } else if value == best {
                if let Some(current) = node.chosen_move {
                    node.chosen_move = Some(selector::prefer(current, column, cols));
                }
            }

            if pruning && alpha > beta {
                break;
            }
        }

        best
    }
}
