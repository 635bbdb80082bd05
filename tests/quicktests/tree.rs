use bisect_bst::Tree;

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts,
/// deletes and rebalances we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Delete(v) => {
                bst.delete(v);
                set.remove(v);
            }
            Op::Rebalance => bst.rebalance(),
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::default();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    set.iter().all(|v| tree.contains(v)) && tree.len() == set.len()
}

#[quickcheck]
fn inorder_is_sorted_and_unique(xs: Vec<i32>) -> bool {
    let tree = Tree::new(xs.clone());
    let expected: Vec<_> = xs.iter().collect::<BTreeSet<_>>().into_iter().collect();

    tree.inorder() == expected
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = Tree::new(xs.clone());

    xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::new(xs.clone());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new(xs.clone());
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn insert_keeps_order(xs: Vec<i16>, inserts: Vec<i16>) -> bool {
    let mut tree = Tree::new(xs);
    for x in inserts {
        tree.insert(x);
    }

    tree.inorder().windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn rebalance_keeps_values_and_restores_balance(xs: Vec<i16>, ops: Vec<Op<i16>>) -> bool {
    let mut tree = Tree::new(xs);
    let mut set = BTreeSet::new();
    do_ops(&ops, &mut tree, &mut set);

    let before: Vec<i16> = tree.inorder().into_iter().copied().collect();
    tree.rebalance();
    let after: Vec<i16> = tree.inorder().into_iter().copied().collect();

    tree.is_balanced() && before == after
}

#[quickcheck]
fn every_traversal_visits_every_node(xs: Vec<u8>) -> bool {
    let tree = Tree::new(xs);

    let mut level_order = tree.level_order();
    let mut preorder = tree.preorder();
    let mut postorder = tree.postorder();
    level_order.sort();
    preorder.sort();
    postorder.sort();

    let inorder = tree.inorder();
    inorder.len() == tree.len()
        && level_order == inorder
        && preorder == inorder
        && postorder == inorder
}

#[quickcheck]
fn depth_is_below_height(xs: Vec<i8>) -> bool {
    let tree = Tree::new(xs.clone());

    xs.iter()
        .all(|x| matches!(tree.depth(x), Some(d) if d < tree.height()))
}
