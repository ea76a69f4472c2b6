//! Height diagnostics and on-demand rebalancing.
//!
//! Rebalancing doesn't rotate anything. The keys are taken out in sorted order and reinserted
//! by recursive bisection: the middle key of a sorted run goes in first, then the middles of the
//! runs on either side, and so on. Whatever order the runs are worked off in, every key lands in
//! the same place. With distinct keys the result has the minimal height `ceil(lg(N + 1)) - 1`;
//! equal keys left of a middle are reinserted to its right, so duplicates can add levels.

use std::collections::VecDeque;
use std::ops::Range;

use log::debug;

use super::Tree;
use crate::node::Node;
use crate::stack::Stack;

/// How the pending sorted runs are worked off while rebalancing. Both strategies build the very
/// same tree, they only differ in how much bookkeeping is held at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Keep pending runs on a stack: finish one side of a split before starting the other.
    #[default]
    DepthFirst,
    /// Keep pending runs in a queue: bisect one whole level of runs before the next.
    BreadthFirst,
}

impl<K> Tree<K> {
    /// The number of edges on the longest path from the root down to a leaf. Both an empty tree
    /// and a tree holding a single key have a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending = Stack::new();
        pending.push_some(self.root().map(|node| (node, 0)));
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.push_some(node.left().map(|left| (left, depth + 1)));
            pending.push_some(node.right().map(|right| (right, depth + 1)));
        }
        height
    }

    /// Whether the height is below `2 * lg(N + 1) - 1` for the `N` keys stored. This is a
    /// heuristic based on the optimal height for `N` keys, checked on demand and never enforced.
    ///
    /// Note an empty tree is never considered balanced, the bound being negative for `N = 0`.
    pub fn is_balanced(&self) -> bool {
        let count = self.inorder().count();
        let bound = 2.0 * ((count + 1) as f64).log2() - 1.0;
        (self.height() as f64) < bound
    }

    /// Empties the tree, returning its keys in ascending order. Nodes are unlinked as they are
    /// visited so the keys can be moved out without cloning.
    fn drain_sorted(&mut self) -> Vec<K> {
        let mut sorted = Vec::with_capacity(self.size);
        let mut pending: Stack<Box<Node<K>>> = Stack::new();
        let mut next = self.root.take();
        loop {
            while let Some(mut node) = next {
                next = node.left.take();
                pending.push(node);
            }
            let Some(mut node) = pending.pop() else {
                break;
            };
            next = node.right.take();
            sorted.push(node.key);
        }
        self.size = 0;
        sorted
    }
}

impl<K: Ord> Tree<K> {
    /// Rebuilds the tree into a shape of minimal height for its keys using the default
    /// [`Strategy`]. The same keys are stored afterwards but every node is new.
    ///
    /// The height is only minimal when the keys are distinct. Duplicates still go right of an
    /// equal key, so `[1, 1, 1]` comes back with height 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=7).collect();
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![4, 2, 1, 3, 6, 5, 7]);
    /// ```
    pub fn rebalance(&mut self) {
        self.rebalance_with(Strategy::default());
    }

    /// Rebuilds the tree into a shape of minimal height, working off pending sorted runs as
    /// `strategy` says. Both strategies produce the same tree.
    pub fn rebalance_with(&mut self, strategy: Strategy) {
        debug!(
            "rebalancing {} keys of height {} ({:?})",
            self.size,
            self.height(),
            strategy
        );

        let mut keys: Vec<Option<K>> = self.drain_sorted().into_iter().map(Some).collect();
        let all = 0..keys.len();
        match strategy {
            Strategy::DepthFirst => {
                let mut runs = Stack::new();
                runs.push(all);
                while let Some(run) = runs.pop() {
                    if let Some((left, right)) = self.insert_middle(&mut keys, run) {
                        runs.push(right);
                        runs.push(left);
                    }
                }
            }
            Strategy::BreadthFirst => {
                let mut runs = VecDeque::from([all]);
                while let Some(run) = runs.pop_front() {
                    if let Some((left, right)) = self.insert_middle(&mut keys, run) {
                        runs.push_back(left);
                        runs.push_back(right);
                    }
                }
            }
        }

        debug!("rebalanced {} keys to height {}", self.size, self.height());
    }

    /// Inserts the middle key of the sorted run `run` (the one at `len / 2`) and returns the runs
    /// left and right of it. Empty runs insert nothing and return `None`.
    fn insert_middle(
        &mut self,
        keys: &mut [Option<K>],
        run: Range<usize>,
    ) -> Option<(Range<usize>, Range<usize>)> {
        if run.is_empty() {
            return None;
        }
        let middle = run.start + run.len() / 2;
        if let Some(key) = keys[middle].take() {
            self.insert(key);
        }
        Some((run.start..middle, middle + 1..run.end))
    }
}
