use std::collections::BTreeSet;

use bintree::Tree;

use crate::UniqueTree;

quickcheck::quickcheck! {
    fn rebuild_from_preorder_and_inorder(tree: UniqueTree) -> bool {
        let tree = tree.0;
        let all = tree.traversals();

        Tree::from_preorder_inorder(&all.preorder, &all.inorder) == Ok(tree)
    }
}

quickcheck::quickcheck! {
    fn rebuild_from_inorder_and_postorder(tree: UniqueTree) -> bool {
        let tree = tree.0;
        let all = tree.traversals();

        Tree::from_inorder_postorder(&all.inorder, &all.postorder) == Ok(tree)
    }
}

quickcheck::quickcheck! {
    fn rebuild_never_invents_a_tree(tree: UniqueTree) -> bool {
        let tree = tree.0;
        let all = tree.traversals();

        // Any tree that does come back must really have these traversals.
        match Tree::from_preorder_inorder(&all.postorder, &all.inorder) {
            Ok(rebuilt) => rebuilt.preorder() == all.postorder && rebuilt.inorder() == all.inorder,
            Err(_) => true,
        }
    }
}

quickcheck::quickcheck! {
    fn sorted_keys_give_minimal_height(keys: BTreeSet<i16>) -> bool {
        let keys: Vec<i16> = keys.into_iter().collect();
        let mut tree = Tree::from_sorted(&keys);
        let minimal = (usize::BITS - keys.len().leading_zeros()) as usize;

        tree.inorder() == keys && tree.height() == minimal && tree.is_valid_bst()
    }
}

quickcheck::quickcheck! {
    fn bst_preorder_rebuilds_inserted_tree(keys: Vec<i16>) -> bool {
        let mut inserted = Tree::new();
        for key in &keys {
            inserted.insert(*key);
        }

        Tree::from_bst_preorder(&inserted.preorder()) == inserted
    }
}
