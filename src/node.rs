//! The recursive half of the tree. A [`Node`] owns its two children outright,
//! so every algorithm here walks down exclusively owned links and hands the
//! (possibly new) subtree root back to whoever holds the link.

use std::cmp::Ordering;
use std::mem;

/// An exclusively owned, possibly absent, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single value in a [`Tree`][crate::Tree] along with its two subtrees.
///
/// Every value in the left subtree is strictly less than this node's value
/// and every value in the right subtree is strictly greater.
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub fn height(&self) -> usize {
        height(self.left()).max(height(self.right())) + 1
    }

    /// Returns `true` if, for every node in this subtree, the heights of its
    /// two children differ by at most one.
    pub fn is_balanced(&self) -> bool {
        self.balanced_height().is_some()
    }

    /// The smallest value in this subtree, found by following left links to
    /// the end.
    pub fn most_left(&self) -> &T {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        &node.value
    }

    /// The largest value in this subtree.
    pub fn most_right(&self) -> &T {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        &node.value
    }

    /// Height of this subtree, or `None` as soon as any node in it is found
    /// to be unbalanced. Computes heights and balance in one pass.
    fn balanced_height(&self) -> Option<usize> {
        let left = match self.left() {
            Some(l) => l.balanced_height()?,
            None => 0,
        };
        let right = match self.right() {
            Some(r) => r.balanced_height()?,
            None => 0,
        };

        (left.abs_diff(right) <= 1).then(|| left.max(right) + 1)
    }

    pub(crate) fn find(&self, value: &T) -> Option<&Self>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left()?.find(value),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right()?.find(value),
        }
    }

    /// Number of edges between this node and the node holding `value`.
    pub(crate) fn depth_of(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        let child = match value.cmp(&self.value) {
            Ordering::Less => self.left()?,
            Ordering::Equal => return Some(0),
            Ordering::Greater => self.right()?,
        };

        child.depth_of(value).map(|depth| depth + 1)
    }

    /// Adds `value` as a new leaf below this node. Returns `false`, leaving
    /// the subtree untouched, if the value is already present.
    pub(crate) fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let child = match value.cmp(&self.value) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return false,
            Ordering::Greater => &mut self.right,
        };

        match child {
            Some(n) => n.insert(value),
            None => {
                *child = Some(Box::new(Self::new(value)));
                true
            }
        }
    }

    /// Detaches the smallest node of the subtree rooted at `node`. Returns its
    /// value and whatever remains of the subtree.
    fn take_most_left(mut node: Box<Self>) -> (T, Link<T>) {
        match node.left.take() {
            None => {
                let Self { value, right, .. } = *node;
                (value, right)
            }
            Some(left) => {
                let (min, rest) = Self::take_most_left(left);
                node.left = rest;
                (min, Some(node))
            }
        }
    }

    pub(crate) fn inorder<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Self),
    {
        if let Some(left) = self.left() {
            left.inorder(f);
        }
        f(self);
        if let Some(right) = self.right() {
            right.inorder(f);
        }
    }

    pub(crate) fn preorder<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Self),
    {
        f(self);
        if let Some(left) = self.left() {
            left.preorder(f);
        }
        if let Some(right) = self.right() {
            right.preorder(f);
        }
    }

    pub(crate) fn postorder<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Self),
    {
        if let Some(left) = self.left() {
            left.postorder(f);
        }
        if let Some(right) = self.right() {
            right.postorder(f);
        }
        f(self);
    }

    /// Moves every value of this subtree into `out` in ascending order,
    /// consuming the nodes on the way.
    pub(crate) fn into_sorted(self: Box<Self>, out: &mut Vec<T>) {
        let Self { value, left, right } = *self;
        if let Some(left) = left {
            left.into_sorted(out);
        }
        out.push(value);
        if let Some(right) = right {
            right.into_sorted(out);
        }
    }
}

/// Height of a possibly absent subtree. An absent subtree has a height of 0.
pub(crate) fn height<T>(node: Option<&Node<T>>) -> usize {
    node.map_or(0, Node::height)
}

/// Builds a subtree out of the first `len` values of `values`, which must be
/// sorted and free of duplicates.
///
/// The value at the midpoint `(len - 1) / 2` becomes the root, everything
/// before it forms the left subtree and everything after it the right. When
/// `len` is even the extra value lands on the right. Values are consumed in
/// ascending order, so the left subtree is built before its root is taken.
pub(crate) fn build_tree<T, I>(values: &mut I, len: usize) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }

    let mid = (len - 1) / 2;
    let left = build_tree(values, mid);
    let value = values.next()?;
    let right = build_tree(values, len - mid - 1);

    Some(Box::new(Node { value, left, right }))
}

/// Removes the node holding `value` from the subtree behind `link`, relinking
/// `link` to the new subtree root. Returns the removed value, or `None` if it
/// wasn't present.
///
/// A node with a single child is replaced by that child. A node with two
/// children takes over its in-order successor's value and the successor's
/// node is unlinked from the right subtree.
pub(crate) fn delete<T>(link: &mut Link<T>, value: &T) -> Option<T>
where
    T: Ord,
{
    let node = link.as_mut()?;
    match value.cmp(&node.value) {
        Ordering::Less => delete(&mut node.left, value),
        Ordering::Greater => delete(&mut node.right, value),
        Ordering::Equal => {
            let mut node = link.take()?;
            let (replacement, removed) = match (node.left.take(), node.right.take()) {
                (None, None) => (None, node.value),
                (Some(child), None) | (None, Some(child)) => (Some(child), node.value),
                (Some(left), Some(right)) => {
                    let (successor, right) = Node::take_most_left(right);
                    let removed = mem::replace(&mut node.value, successor);
                    node.left = Some(left);
                    node.right = right;
                    (Some(node), removed)
                }
            };

            *link = replacement;
            Some(removed)
        }
    }
}
