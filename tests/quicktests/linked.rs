use linked_bst::{Tree, TreeError};

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a multiset of counts.
/// This way we can ensure that after a random smattering of inserts,
/// removals and rebalances we have the same keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, counts: &mut BTreeMap<K, usize>)
where
    K: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                *counts.entry(k.clone()).or_insert(0) += 1;
            }
            Op::Remove(k) => {
                let was_empty = counts.is_empty();
                let removed = bst.remove(k);
                match counts.get_mut(k) {
                    Some(count) => {
                        assert_eq!(removed, Ok(Some(k.clone())));
                        *count -= 1;
                        if *count == 0 {
                            counts.remove(k);
                        }
                    }
                    None if was_empty => assert_eq!(removed, Ok(None)),
                    None => assert_eq!(removed, Err(TreeError::NotFound)),
                }
            }
            Op::Rebalance => bst.rebalance(),
            Op::Iter => {
                let expected = counts
                    .iter()
                    .flat_map(|(k, &n)| std::iter::repeat(k).take(n));
                assert!(bst.inorder().eq(expected));
                assert_eq!(bst.size(), bst.inorder().count());
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut counts);

    let expected: Vec<i8> = counts
        .iter()
        .flat_map(|(k, &n)| std::iter::repeat(*k).take(n))
        .collect();
    tree.size() == expected.len() && tree.inorder().eq(expected.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    for delete in &deletes {
        // Remove every copy that was inserted.
        while let Ok(Some(_)) = tree.remove(delete) {}
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && tree.size() == still_present.len()
}

#[quickcheck]
fn range_find_matches_filter(xs: Vec<i8>, low: i8, high: i8) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let mut expected: Vec<i8> = xs.into_iter().filter(|x| low <= *x && *x <= high).collect();
    expected.sort_unstable();

    tree.range_find(&low, &high).into_iter().eq(expected.iter())
}

#[quickcheck]
fn rebalance_twice_is_rebalance_once(xs: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.into_iter().collect();
    tree.rebalance();
    let once: Vec<i8> = tree.iter().copied().collect();
    tree.rebalance();

    tree.iter().copied().eq(once)
}

#[quickcheck]
fn clone_and_equality(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let clone = tree.clone();
    let mut rebalanced = tree.clone();
    rebalanced.rebalance();

    clone == tree && rebalanced == tree && clone.iter().eq(tree.iter())
}
