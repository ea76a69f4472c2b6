//! A linked, unbalanced Binary Search Tree (BST) mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of
//! this BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key. Duplicates always go right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). This tree never
//! balances itself on mutation, so inserting keys in sorted order degrades it
//! into a linked list with `O(N)` height. [`Tree::is_balanced`] diagnoses that
//! and [`Tree::rebalance`] rebuilds the tree with `O(lg N)` height on demand.
//!
//! # Examples
//!
//! ```
//! use linked_bst::Tree;
//!
//! let mut tree: Tree<i32> = (1..=7).collect();
//! assert_eq!(tree.height(), 6);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_balanced());
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
mod stack;
pub mod tree;

pub use error::{Result, TreeError};
pub use tree::{Strategy, Tree};
