//! Lazy traversals over a [`Tree`](super::Tree). None of them recurse, so a tree that has
//! degenerated into a linked list can be walked no matter how tall it is.

use std::collections::VecDeque;

use crate::node::Node;
use crate::stack::Stack;

/// Pre-order iterator (node, left subtree, right subtree). This is the default iteration order
/// of a tree. Created by [`Tree::iter`](super::Tree::iter).
pub struct Iter<'a, K> {
    stack: Stack<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    pub(super) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut stack = Stack::new();
        stack.push_some(root);
        Self { stack }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so the left subtree comes out first.
        self.stack.push_some(node.right());
        self.stack.push_some(node.left());
        Some(&node.key)
    }
}

/// In-order iterator (left subtree, node, right subtree), yielding keys in ascending order.
/// Created by [`Tree::inorder`](super::Tree::inorder).
pub struct InOrder<'a, K> {
    stack: Stack<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K> {
    pub(super) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self {
            stack: Stack::new(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.key)
    }
}

/// Post-order iterator (left subtree, right subtree, node).
/// Created by [`Tree::postorder`](super::Tree::postorder).
pub struct PostOrder<'a, K> {
    /// Each node is paired with whether its children have already been scheduled.
    stack: Stack<(&'a Node<K>, bool)>,
}

impl<'a, K> PostOrder<'a, K> {
    pub(super) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut stack = Stack::new();
        stack.push_some(root.map(|n| (n, false)));
        Self { stack }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                (node, true) => return Some(&node.key),
                (node, false) => {
                    self.stack.push((node, true));
                    self.stack.push_some(node.right().map(|n| (n, false)));
                    self.stack.push_some(node.left().map(|n| (n, false)));
                }
            }
        }
    }
}

/// Level-order iterator: the root, then every node one edge down from left to right, and so on.
/// Created by [`Tree::levelorder`](super::Tree::levelorder).
pub struct LevelOrder<'a, K> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> LevelOrder<'a, K> {
    pub(super) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(&node.key)
    }
}
