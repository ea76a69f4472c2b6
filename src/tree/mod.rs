//! A mutable, linked, unbalanced BST. Keys are compared with [`Ord`]; keys that compare equal
//! to a stored key are placed in its right subtree.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.insert(1);
//! tree.insert(3);
//! assert_eq!(tree.find(&1), Some(&1));
//! assert_eq!(tree.successor(&1), Some(&3));
//!
//! // Removing a key returns it, removing an absent key is an error.
//! assert_eq!(tree.remove(&1), Ok(Some(1)));
//! assert_eq!(tree.remove(&1), Err(TreeError::NotFound));
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::trace;

use crate::error::{Result, TreeError};
use crate::node::{Link, Node};
use crate::stack::Stack;

mod balance;
mod iter;

pub use balance::Strategy;
pub use iter::{InOrder, Iter, LevelOrder, PostOrder};

/// An unbalanced Binary Search Tree over keys of type `K`. This can be used for inserting,
/// finding, and removing keys, walking them in several orders, and querying by range.
pub struct Tree<K> {
    root: Link<K>,
    size: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// How many keys are stored, duplicates included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every key. Nodes are unlinked one at a time, so clearing a tree that degenerated
    /// into a linked list doesn't blow the call stack.
    pub fn clear(&mut self) {
        trace!("clearing tree of {} keys", self.size);
        let mut pending = Stack::new();
        pending.push_some(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.push_some(node.left.take());
            pending.push_some(node.right.take());
        }
        self.size = 0;
    }

    /// Iterates over the keys in pre-order, the default order for this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![5, 3, 1, 4, 8]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root())
    }

    /// Iterates over the keys in ascending order.
    pub fn inorder(&self) -> InOrder<'_, K> {
        InOrder::new(self.root())
    }

    /// Iterates over the keys children-first.
    pub fn postorder(&self) -> PostOrder<'_, K> {
        PostOrder::new(self.root())
    }

    /// Iterates over the keys one level at a time, starting at the root.
    pub fn levelorder(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(self.root())
    }

    fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }
}

impl<K: Ord> Tree<K> {
    /// Potentially finds the stored key equal to `key`. If no node has the corresponding key,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&K> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Equal => return Some(&node.key),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether some stored key is equal to `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Inserts `key` as a new leaf. Always succeeds, even if an equal key is already stored: the
    /// new key ends up to the right of it.
    pub fn insert(&mut self, key: K) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Node::new_boxed(key));
        self.size += 1;
    }

    /// Removes the first node reached whose key equals `key` and returns the key it held.
    ///
    /// Returns `Ok(None)` when the tree is empty and [`TreeError::NotFound`] when the tree has
    /// keys but none equal to `key`.
    ///
    /// A node with two children keeps its place and takes over the largest key of its left
    /// subtree, whose node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Tree, TreeError};
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Ok(Some(5)));
    /// // 4 was the largest key left of 5, so it moved up into the root.
    /// assert_eq!(tree.iter().next(), Some(&4));
    /// assert_eq!(tree.remove(&5), Err(TreeError::NotFound));
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<Option<K>> {
        if self.is_empty() {
            return Ok(None);
        }

        let slot = Self::find_slot(&mut self.root, key).ok_or(TreeError::NotFound)?;
        let removed = Self::unlink(slot);

        self.size -= 1;
        debug_assert_eq!(self.root.is_none(), self.size == 0);
        Ok(Some(removed))
    }

    /// If a stored key compares equal to `key`, swaps `key` in and returns the old one. Otherwise
    /// nothing changes and `None` is returned. Only the first match reached is replaced.
    pub fn replace(&mut self, key: K) -> Option<K> {
        let slot = Self::find_slot(&mut self.root, &key)?;
        slot.as_mut().map(|node| std::mem::replace(&mut node.key, key))
    }

    /// Every key `k` with `low <= k <= high`, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    /// assert_eq!(tree.range_find(&3, &8), vec![&3, &4, &5, &8]);
    /// ```
    pub fn range_find(&self, low: &K, high: &K) -> Vec<&K> {
        self.inorder()
            .filter(|&key| key >= low && key <= high)
            .collect()
    }

    /// The smallest stored key strictly greater than `key`.
    pub fn successor(&self, key: &K) -> Option<&K> {
        let mut best = None;
        let mut current = self.root();
        while let Some(node) = current {
            if node.key > *key {
                best = Some(&node.key);
                current = node.left();
            } else {
                current = node.right();
            }
        }
        best
    }

    /// The largest stored key strictly smaller than `key`.
    pub fn predecessor(&self, key: &K) -> Option<&K> {
        let mut best = None;
        let mut current = self.root();
        while let Some(node) = current {
            if node.key < *key {
                best = Some(&node.key);
                current = node.right();
            } else {
                current = node.left();
            }
        }
        best
    }

    /// Walks down from `slot` and returns the link holding the first node whose key equals `key`.
    fn find_slot<'a>(mut slot: &'a mut Link<K>, key: &K) -> Option<&'a mut Link<K>> {
        loop {
            match key.cmp(&slot.as_ref()?.key) {
                Ordering::Equal => return Some(slot),
                Ordering::Less => slot = &mut slot.as_mut()?.left,
                Ordering::Greater => slot = &mut slot.as_mut()?.right,
            }
        }
    }

    /// Detaches the node held by `slot` and returns its key.
    ///
    /// ## Panics
    ///
    /// When `slot` is empty.
    fn unlink(slot: &mut Link<K>) -> K {
        let node = slot.as_mut().expect("Unlinking a node => node");
        match (node.left.is_some(), node.right.is_some()) {
            (true, true) => {
                trace!("removing a node with two children");
                node.lift_max_in_left_subtree()
            }
            (false, _) => {
                trace!("removing a node without a left child");
                let mut node = slot.take().expect("Unlinking a node => node");
                *slot = node.right.take();
                node.key
            }
            (true, false) => {
                trace!("removing a node without a right child");
                let mut node = slot.take().expect("Unlinking a node => node");
                *slot = node.left.take();
                node.key
            }
        }
    }
}

impl<K: Clone> Clone for Tree<K> {
    /// Re-links copies of every node in pre-order, so the clone has the very same shape.
    fn clone(&self) -> Self {
        let mut clone = Self::new();
        {
            // Each source node is paired with the empty slot its copy goes in.
            let mut pending = Stack::new();
            if let Some(root) = self.root() {
                pending.push((root, &mut clone.root));
            }
            while let Some((node, slot)) = pending.pop() {
                let copy = slot.insert(Node::new_boxed(node.key.clone()));
                let Node { left, right, .. } = &mut **copy;
                if let Some(source) = node.right() {
                    pending.push((source, right));
                }
                if let Some(source) = node.left() {
                    pending.push((source, left));
                }
            }
        }
        clone.size = self.size;
        clone
    }
}

impl<K: PartialEq> PartialEq for Tree<K> {
    /// Two trees are equal when they hold the same keys, regardless of shape.
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.inorder().eq(other.inorder())
    }
}

impl<K: Eq> Eq for Tree<K> {}

impl<K: fmt::Debug> fmt::Debug for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<K: fmt::Display> fmt::Display for Tree<K> {
    /// Draws the tree rotated 90 degrees counterclockwise: the root sits in the first column and
    /// every level down is indented by one more `"| "`.
    ///
    /// ```text
    /// | 8
    /// 5
    /// | | 4
    /// | 3
    /// | | 1
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = Stack::new();
        pending.push_some(self.root().map(|node| (node, 0, false)));
        while let Some((node, level, expanded)) = pending.pop() {
            if expanded {
                writeln!(f, "{}{}", "| ".repeat(level), node.key)?;
                continue;
            }
            // Right subtree first, then the node itself, then the left subtree.
            pending.push_some(node.left().map(|left| (left, level + 1, false)));
            pending.push((node, level, true));
            pending.push_some(node.right().map(|right| (right, level + 1, false)));
        }
        Ok(())
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    /// Inserts the keys one after the other, in iteration order.
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}
