//! A lazily expanded tree of future boards

use std::ops::{Index, IndexMut};

use crate::board::{Board, MoveGuard, PlayerId};

/// Index of a node in a [`SearchTree`]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NodeId(usize);

/// One board state reached from the root by a sequence of moves
#[derive(Clone, Debug)]
pub struct Node<B> {
    /// The column played from the parent, `None` at the root
    pub column: Option<usize>,
    pub board: B,
    /// The best column among the children, once a search has visited them
    pub chosen_move: Option<usize>,
    /// The backed-up score of the last search pass through this node
    pub value: i32,
    children: Vec<(usize, NodeId)>,
}

impl<B: Board> Node<B> {
    fn new(column: Option<usize>, board: B) -> Self {
        Self {
            column,
            board,
            chosen_move: None,
            value: 0,
            children: Vec::new(),
        }
    }

    /// The children in ascending column order, with the column leading to each
    pub fn children(&self) -> &[(usize, NodeId)] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_terminal(&self) -> bool {
        self.board.is_full()
    }
}

/// An arena of nodes owning a snapshot of the board at each node
///
/// The tree lives for a single move calculation and is grown across the
/// iterations of the search rather than rebuilt.
#[derive(Clone, Debug)]
pub struct SearchTree<B> {
    nodes: Vec<Node<B>>,
}

impl<B: Board> SearchTree<B> {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new(board: B) -> Self {
        Self {
            nodes: vec![Node::new(None, board)],
        }
    }

    pub fn root(&self) -> &Node<B> {
        &self[Self::ROOT]
    }

    /// Number of nodes created so far
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds one child per non-full column with `player`'s tile dropped in it
    ///
    /// Returns false without touching the tree if the node already has
    /// children.
    pub fn expand(&mut self, id: NodeId, player: PlayerId) -> bool {
        if !self[id].is_leaf() {
            return false;
        }

        let board = &mut self.nodes[id.0].board;
        let cols = board.num_cols();
        let mut snapshots = Vec::with_capacity(cols);
        for column in 0..cols {
            if !board.is_column_full(column) {
                let guard = MoveGuard::new(&mut *board, column, player);
                snapshots.push((column, guard.snapshot()));
            }
        }

        for (column, board) in snapshots {
            let child = NodeId(self.nodes.len());
            self.nodes.push(Node::new(Some(column), board));
            self.nodes[id.0].children.push((column, child));
        }
        true
    }
}

impl<B> Index<NodeId> for SearchTree<B> {
    type Output = Node<B>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

impl<B> IndexMut<NodeId> for SearchTree<B> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.0]
    }
}
