//! The owning half of the tree. A [`Tree`] holds the root link and is the
//! only way to construct or mutate the structure.
//!
//! # Examples
//!
//! ```
//! use bisect_bst::Tree;
//!
//! let mut tree = Tree::new([1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
//!
//! // Duplicates are dropped and the values come back sorted.
//! assert_eq!(tree.len(), 11);
//! assert_eq!(tree.inorder(), [&1, &3, &4, &5, &7, &8, &9, &23, &67, &324, &6345]);
//! assert!(tree.is_balanced());
//!
//! // Growing the tree in one direction skews it...
//! for value in [7000, 8000, 9000, 10000] {
//!     tree.insert(value);
//! }
//! assert!(!tree.is_balanced());
//!
//! // ...until it is rebuilt.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.find(&9000).map(|n| *n.value()), Some(9000));
//! ```

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::node::{self, Link, Node};

/// A Binary Search Tree of unique values.
///
/// The tree is balanced right after it is built and after every call to
/// [`Tree::rebalance`]. [`Tree::insert`] and [`Tree::delete`] never restructure
/// more than the path they walk, so a run of them can leave the tree skewed.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T> Tree<T> {
    /// Builds a balanced tree out of `values`. The values are sorted and
    /// deduplicated first, so any order and any number of repeats is fine.
    /// An empty collection gives an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bisect_bst::Tree;
    ///
    /// let tree = Tree::new([3, 1, 2, 3]);
    /// assert_eq!(tree.level_order(), [&2, &1, &3]);
    ///
    /// let empty: Tree<u8> = Tree::new([]);
    /// assert!(empty.is_empty());
    /// ```
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        let given = values.len();
        values.sort_unstable();
        values.dedup();

        let tree = Self::from_sorted(values);
        debug!(given, unique = tree.len, height = tree.height(), "built tree");
        tree
    }

    /// Builds the tree from values that are already sorted and unique.
    fn from_sorted(values: Vec<T>) -> Self {
        let len = values.len();
        Self {
            root: node::build_tree(&mut values.into_iter(), len),
            len,
        }
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Adds `value` as a new leaf. Returns `false` without touching the tree
    /// if the value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bisect_bst::Tree;
    ///
    /// let mut tree = Tree::new([2]);
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    /// assert_eq!(tree.inorder(), [&1, &2]);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let inserted = match self.root.as_mut() {
            Some(root) => root.insert(value),
            None => {
                self.root = Some(Box::new(Node::new(value)));
                true
            }
        };

        if inserted {
            self.len += 1;
        } else {
            trace!("ignored duplicate insert");
        }
        inserted
    }

    /// Removes `value` from the tree and returns it. If the tree does not
    /// contain the value, nothing happens and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bisect_bst::Tree;
    ///
    /// let mut tree = Tree::new([1, 2, 3]);
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.delete(&2), None);
    /// assert_eq!(tree.inorder(), [&1, &3]);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let deleted = node::delete(&mut self.root, value);
        match deleted {
            Some(_) => self.len -= 1,
            None => trace!("delete of a value not present"),
        }
        deleted
    }

    /// Finds the node holding `value`, or `None` if no node holds it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bisect_bst::Tree;
    ///
    /// let tree = Tree::new([1, 2, 3]);
    ///
    /// let node = tree.find(&1).unwrap();
    /// assert_eq!(node.value(), &1);
    /// assert!(node.is_leaf());
    ///
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root()?.find(value)
    }

    /// Returns `true` if the tree holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root().map(Node::most_left)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        self.root().map(Node::most_right)
    }

    /// Height of the whole tree. An empty tree has height 0 and a lone root
    /// has height 1.
    pub fn height(&self) -> usize {
        node::height(self.root())
    }

    /// Height of the subtree rooted at the node holding `value`.
    pub fn height_of(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.find(value).map(Node::height)
    }

    /// Number of edges from the root down to the node holding `value`. The
    /// root itself has depth 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bisect_bst::Tree;
    ///
    /// let tree = Tree::new(1..=7);
    /// assert_eq!(tree.depth(&4), Some(0));
    /// assert_eq!(tree.depth(&1), Some(2));
    /// assert_eq!(tree.depth(&8), None);
    /// ```
    pub fn depth(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.root()?.depth_of(value)
    }

    /// How much shorter the subtree rooted at `node` is than the whole tree.
    ///
    /// This equals [`Tree::depth`] only when `node` sits on a longest path
    /// from the root.
    pub fn height_difference(&self, node: &Node<T>) -> usize {
        self.height().saturating_sub(node.height())
    }

    /// Returns `true` if the heights of the two subtrees of every node differ
    /// by at most one. An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, Node::is_balanced)
    }

    /// Throws away the current shape and rebuilds a balanced tree from the
    /// values in ascending order.
    pub fn rebalance(&mut self) {
        let Some(root) = self.root.take() else {
            return;
        };
        let height_before = root.height();

        let mut values = Vec::with_capacity(self.len);
        root.into_sorted(&mut values);
        *self = Self::from_sorted(values);

        debug!(
            len = self.len,
            height_before,
            height_after = self.height(),
            "rebalanced tree"
        );
    }

    /// Values level by level from the root down, left to right within a
    /// level.
    pub fn level_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        self.level_order_with(|n| values.push(n.value()));
        values
    }

    /// Calls `f` on every node level by level from the root down, left to
    /// right within a level.
    pub fn level_order_with<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Node<T>),
    {
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            queue.extend(node.left());
            queue.extend(node.right());
            f(node);
        }
    }

    /// Values in ascending order.
    pub fn inorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        self.inorder_with(|n| values.push(n.value()));
        values
    }

    /// Calls `f` on every node in ascending order of value.
    pub fn inorder_with<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Node<T>),
    {
        if let Some(root) = self.root() {
            root.inorder(&mut f);
        }
    }

    /// Values with each node before its left subtree, then its right.
    pub fn preorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        self.preorder_with(|n| values.push(n.value()));
        values
    }

    /// Calls `f` on each node before its left subtree, then its right.
    pub fn preorder_with<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Node<T>),
    {
        if let Some(root) = self.root() {
            root.preorder(&mut f);
        }
    }

    /// Values with each node after its left subtree and its right.
    pub fn postorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        self.postorder_with(|n| values.push(n.value()));
        values
    }

    /// Calls `f` on each node after its left subtree and its right.
    pub fn postorder_with<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Node<T>),
    {
        if let Some(root) = self.root() {
            root.postorder(&mut f);
        }
    }
}
