//! A Binary Search Tree of unique values that is built balanced and can be
//! rebuilt balanced on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)`. This crate's [`Tree`]
//! is built by bisection: the values are sorted, the middle one becomes the
//! root and the halves on either side become its subtrees, recursively. That
//! keeps the height at `O(lg N)` where `N` is the number of values.
//!
//! [`Tree::insert`] and [`Tree::delete`] don't rotate anything, so they may
//! skew the tree. [`Tree::is_balanced`] reports whether that happened and
//! [`Tree::rebalance`] rebuilds the tree by bisection from its in-order
//! values.
//!
//! ## Heights
//!
//! An absent subtree has a height of 0, so a leaf has a height of 1.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod node;
mod render;
mod tree;

pub use node::Node;
pub use tree::Tree;
