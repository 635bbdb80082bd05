//! A sideways sketch of a tree for eyeballing its shape.
//!
//! The tree is drawn lying on its left side: the right subtree is printed
//! above its parent and the left subtree below, so reading the values from
//! the bottom of the sketch to the top gives them in ascending order.
//!
//! ```
//! use bisect_bst::Tree;
//!
//! let tree = Tree::new([1, 2, 3]);
//! assert_eq!(
//!     tree.to_string(),
//!     "│   ┌── 3\n\
//!      └── 2\n    \
//!          └── 1\n"
//! );
//! ```

use std::fmt;

use crate::{Node, Tree};

const BRANCH_ABOVE: &str = "┌── ";
const BRANCH_BELOW: &str = "└── ";
const PIPE: &str = "│   ";
const BLANK: &str = "    ";

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => sketch(root, "", true, f),
            None => Ok(()),
        }
    }
}

/// Writes the subtree rooted at `node`. `below` says whether `node` hangs
/// below its parent in the sketch, i.e. is a left child (the root counts as
/// one).
fn sketch<T, W>(node: &Node<T>, prefix: &str, below: bool, f: &mut W) -> fmt::Result
where
    T: fmt::Display,
    W: fmt::Write,
{
    if let Some(right) = node.right() {
        let prefix = format!("{prefix}{}", if below { PIPE } else { BLANK });
        sketch(right, &prefix, false, f)?;
    }

    let branch = if below { BRANCH_BELOW } else { BRANCH_ABOVE };
    writeln!(f, "{prefix}{branch}{}", node.value())?;

    if let Some(left) = node.left() {
        let prefix = format!("{prefix}{}", if below { BLANK } else { PIPE });
        sketch(left, &prefix, true, f)?;
    }

    Ok(())
}
