//! Solution nodes stored in an index-addressed arena.
//!
//! A [`SolutionTree`] owns every node it contains. Parent and child links are
//! [`NodeId`] handles into the arena, so back-references never fight the
//! ownership of the states themselves.

use std::fmt;

use smallvec::SmallVec;

use crate::puzzle::Puzzle;

/// Handle to a node inside a [`SolutionTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One puzzle state plus its links along a solution path
#[derive(Debug, Clone)]
pub struct SolutionNode<P> {
    puzzle: P,
    parent: Option<NodeId>,
    /// Solver output is always a chain, so one inline slot covers it
    children: SmallVec<[NodeId; 1]>,
    in_solution: bool,
}

impl<P> SolutionNode<P> {
    fn new(puzzle: P) -> Self {
        Self {
            puzzle,
            parent: None,
            children: SmallVec::new(),
            in_solution: false,
        }
    }

    pub fn puzzle(&self) -> &P {
        &self.puzzle
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether the depth-first solver marked this node as lying on the
    /// path to a solved state
    pub fn in_solution(&self) -> bool {
        self.in_solution
    }
}

/// A rooted tree of solution nodes.
///
/// Both solvers return a linear chain: every node has at most one child and
/// the root has no parent.
#[derive(Debug, Clone)]
pub struct SolutionTree<P> {
    nodes: Vec<SolutionNode<P>>,
}

impl<P: Puzzle> SolutionTree<P> {
    /// Create a tree holding only `root`
    pub fn new(root: P) -> Self {
        Self {
            nodes: vec![SolutionNode::new(root)],
        }
    }

    /// Build a linear chain from `path`, first element becoming the root.
    ///
    /// Returns `None` for an empty path.
    pub fn from_path<I>(path: I) -> Option<Self>
    where
        I: IntoIterator<Item = P>,
    {
        let mut path = path.into_iter();
        let mut tree = Self::new(path.next()?);
        let mut tail = tree.root();
        for puzzle in path {
            tail = tree.add_child(tail, puzzle);
        }
        Some(tree)
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Attach a new node holding `puzzle` as the last child of `parent`
    pub fn add_child(&mut self, parent: NodeId, puzzle: P) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut node = SolutionNode::new(puzzle);
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn node(&self, id: NodeId) -> &SolutionNode<P> {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&SolutionNode<P>> {
        self.nodes.get(id.0)
    }

    pub fn puzzle(&self, id: NodeId) -> &P {
        &self.nodes[id.0].puzzle
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Mark every node as lying on the solution path
    pub(crate) fn mark_in_solution(&mut self) {
        for node in &mut self.nodes {
            node.in_solution = true;
        }
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of moves along the chain (nodes minus one)
    pub fn steps(&self) -> usize {
        self.chain().count() - 1
    }

    /// Whether every node has at most one child
    pub fn is_linear(&self) -> bool {
        self.nodes.iter().all(|n| n.children.len() <= 1)
    }

    /// Node handles from the root following the first child at each step
    pub fn chain(&self) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(self.root()), move |id| {
            self.nodes[id.0].children.first().copied()
        })
    }

    /// States from the root to the leaf of the chain
    pub fn states(&self) -> impl Iterator<Item = &P> + '_ {
        self.chain().map(move |id| &self.nodes[id.0].puzzle)
    }

    /// Last node of the chain
    pub fn leaf(&self) -> NodeId {
        self.chain().last().unwrap_or_else(|| self.root())
    }

    /// Consume the tree, returning the chain's states in order
    pub fn into_states(self) -> Vec<P> {
        let order: Vec<NodeId> = self.chain().collect();
        let mut slots: Vec<Option<P>> = self.nodes.into_iter().map(|n| Some(n.puzzle)).collect();
        order
            .into_iter()
            .filter_map(|id| slots[id.0].take())
            .collect()
    }
}

/// Pending output while rendering a tree without recursion
enum Emit {
    Node(NodeId),
    Separator,
}

impl<P: Puzzle> fmt::Display for SolutionTree<P> {
    /// Each node's state, a blank line, then its children's renderings
    /// joined by newlines
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Emit::Node(self.root())];
        while let Some(item) = pending.pop() {
            match item {
                Emit::Separator => f.write_str("\n")?,
                Emit::Node(id) => {
                    let node = &self.nodes[id.0];
                    write!(f, "{}\n\n", node.puzzle)?;
                    // Reverse order so the first child is rendered first
                    for (i, &child) in node.children.iter().enumerate().rev() {
                        pending.push(Emit::Node(child));
                        if i > 0 {
                            pending.push(Emit::Separator);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
