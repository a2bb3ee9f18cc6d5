use std::collections::BTreeSet;

use bintree::Tree;

use crate::{AnyTree, UniqueTree};

/// Builds a BST by plain insertion, in the given order.
fn inserted(keys: &[i16]) -> Tree<i16> {
    let mut tree = Tree::new();
    for key in keys {
        tree.insert(*key);
    }
    tree
}

quickcheck::quickcheck! {
    fn inserted_keys_are_found(xs: Vec<i16>, nots: Vec<i16>) -> bool {
        let mut tree = inserted(&xs);
        let threaded = tree.morris_inorder();
        let mut sorted = xs.clone();
        sorted.sort();

        xs.iter().all(|x| tree.find(x).map(|id| tree.key(id)) == Some(x))
            && nots.iter().filter(|x| !xs.contains(x)).all(|x| !tree.contains(x))
            && tree.inorder() == sorted
            && threaded == sorted
    }
}

quickcheck::quickcheck! {
    fn deleted_keys_are_gone(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
        let mut tree = inserted(&xs);
        let mut removed = 0;
        for delete in &deletes {
            while tree.delete(delete).is_some() {
                removed += 1;
            }
        }
        let mut still_present = xs.clone();
        still_present.retain(|x| !deletes.contains(x));
        still_present.sort();

        removed + still_present.len() == xs.len()
            && deletes.iter().all(|x| !tree.contains(x))
            && tree.inorder() == still_present
    }
}

quickcheck::quickcheck! {
    fn deletion_keeps_parent_links(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
        let mut tree = inserted(&xs);
        for delete in &deletes {
            tree.delete(delete);
        }

        tree.links().into_iter().all(|(id, left, right)| {
            [left, right]
                .into_iter()
                .flatten()
                .all(|child| tree.node(child).parent() == Some(id))
        }) && tree.root().map_or(true, |root| tree.node(root).parent().is_none())
    }
}

quickcheck::quickcheck! {
    fn valid_exactly_when_inorder_strictly_increases(tree: AnyTree) -> bool {
        let mut tree = tree.0;
        let increasing = tree.inorder().windows(2).all(|pair| pair[0] < pair[1]);
        let before = tree.links();

        tree.is_valid_bst() == increasing && tree.links() == before
    }
}

quickcheck::quickcheck! {
    fn swapping_two_keys_is_recovered(keys: BTreeSet<i16>, i: usize, j: usize) -> bool {
        let keys: Vec<i16> = keys.into_iter().collect();
        let mut tree = Tree::from_sorted(&keys);
        if keys.len() < 2 || i % keys.len() == j % keys.len() {
            return tree.recover_bst().is_none();
        }
        let (a, b) = (keys[i % keys.len()], keys[j % keys.len()]);
        let (Some(x), Some(y)) = (tree.find(&a), tree.find(&b)) else {
            return false;
        };
        tree.swap_keys(x, y);

        tree.recover_bst().is_some() && tree.inorder() == keys && tree.is_valid_bst()
    }
}

quickcheck::quickcheck! {
    fn two_sum_matches_pairwise_scan(keys: BTreeSet<i8>, target: i16) -> bool {
        let keys: Vec<i8> = keys.into_iter().collect();
        let tree = Tree::from_sorted(&keys);
        let target = i64::from(target);
        let expected = keys.iter().enumerate().any(|(i, a)| {
            keys[i + 1..]
                .iter()
                .any(|b| i64::from(*a) + i64::from(*b) == target)
        });

        tree.two_sum(target) == expected
    }
}

quickcheck::quickcheck! {
    fn lca_variants_agree(tree: UniqueTree, p: usize, q: usize) -> bool {
        let tree = tree.0;
        let keys = tree.preorder();
        if keys.is_empty() {
            return tree.lca(&0, &1).is_none()
                && tree.lca_checked(&0, &1).is_none()
                && tree.lca_iter(&0, &1).is_none();
        }
        let (p, q) = (keys[p % keys.len()], keys[q % keys.len()]);
        let (Some(p_path), Some(q_path)) = (tree.path_ids(&p), tree.path_ids(&q)) else {
            return false;
        };
        let (p_id, q_id) = (p_path[p_path.len() - 1], q_path[q_path.len() - 1]);
        // The deepest node both root paths share.
        let shared = p_path
            .iter()
            .zip(&q_path)
            .take_while(|(a, b)| a == b)
            .last()
            .map(|(a, _)| *a);

        tree.lca(&p, &q) == shared
            && tree.lca_checked(&p, &q) == shared
            && tree.lca_iter(&p, &q) == shared
            && tree.lca_by_parent(p_id, q_id) == shared
    }
}

quickcheck::quickcheck! {
    fn lca_bst_agrees_with_plain_lca(keys: BTreeSet<i16>, p: usize, q: usize) -> bool {
        let keys: Vec<i16> = keys.into_iter().collect();
        if keys.is_empty() {
            return true;
        }
        let tree = Tree::from_sorted(&keys);
        let (p, q) = (keys[p % keys.len()], keys[q % keys.len()]);

        tree.lca_bst(&p, &q) == tree.lca(&p, &q)
    }
}
