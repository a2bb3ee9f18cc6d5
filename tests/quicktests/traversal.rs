use crate::AnyTree;

/// Sorted copy, so traversals can be compared as multisets.
fn sorted(mut keys: Vec<i16>) -> Vec<i16> {
    keys.sort_unstable();
    keys
}

quickcheck::quickcheck! {
    fn every_order_visits_every_key_once(tree: AnyTree) -> bool {
        let tree = tree.0;
        let expected = sorted(tree.preorder());
        let level: Vec<i16> = tree.level_order().into_iter().flatten().collect();

        expected.len() == tree.len()
            && sorted(tree.inorder()) == expected
            && sorted(tree.postorder()) == expected
            && sorted(level) == expected
            && sorted(tree.iter().copied().collect()) == expected
    }
}

quickcheck::quickcheck! {
    fn tri_order_matches_single_orders(tree: AnyTree) -> bool {
        let tree = tree.0;
        let all = tree.traversals();

        all.preorder == tree.preorder()
            && all.inorder == tree.inorder()
            && all.postorder == tree.postorder()
    }
}

quickcheck::quickcheck! {
    fn threaded_walks_match_and_restore_links(tree: AnyTree) -> bool {
        let mut tree = tree.0;
        let before = tree.links();
        let (inorder, preorder) = (tree.inorder(), tree.preorder());

        tree.morris_inorder() == inorder
            && tree.morris_preorder() == preorder
            && tree.links() == before
    }
}

quickcheck::quickcheck! {
    fn cursor_matches_inorder(tree: AnyTree) -> bool {
        let tree = tree.0;
        let mut reversed = tree.inorder();
        reversed.reverse();

        tree.iter().copied().collect::<Vec<_>>() == tree.inorder()
            && tree.iter_rev().copied().collect::<Vec<_>>() == reversed
    }
}

quickcheck::quickcheck! {
    fn flatten_gives_right_chain_in_preorder(tree: AnyTree) -> bool {
        let mut tree = tree.0;
        let preorder = tree.preorder();
        tree.flatten();

        let mut chain = Vec::new();
        let mut curr = tree.root();
        let mut parent = None;
        let mut ok = true;
        while let Some(id) = curr {
            let node = tree.node(id);
            ok &= node.left().is_none() && node.parent() == parent;
            chain.push(*node.key());
            parent = Some(id);
            curr = node.right();
        }

        ok && chain == preorder && tree.len() == preorder.len()
    }
}

quickcheck::quickcheck! {
    fn zigzag_reverses_odd_levels(tree: AnyTree) -> bool {
        let tree = tree.0;
        let levels = tree.level_order();
        let zigzag = tree.zigzag_level_order();

        levels.len() == zigzag.len()
            && levels.len() == tree.height()
            && levels.iter().zip(&zigzag).enumerate().all(|(depth, (level, zig))| {
                if depth % 2 == 0 {
                    level == zig
                } else {
                    level.iter().rev().eq(zig.iter())
                }
            })
    }
}

quickcheck::quickcheck! {
    fn side_views_pick_level_ends(tree: AnyTree) -> bool {
        let tree = tree.0;
        let levels = tree.level_order();
        let firsts: Vec<i16> = levels.iter().filter_map(|level| level.first().copied()).collect();
        let lasts: Vec<i16> = levels.iter().filter_map(|level| level.last().copied()).collect();

        tree.left_side_view() == firsts && tree.right_side_view() == lasts
    }
}

quickcheck::quickcheck! {
    fn paths_end_at_every_leaf(tree: AnyTree) -> bool {
        let tree = tree.0;
        let paths = tree.root_to_leaf_paths();
        let leaves = tree.links().iter().filter(|(_, l, r)| l.is_none() && r.is_none()).count();

        paths.len() == leaves
            && paths.iter().all(|path| path.len() <= tree.height())
            && tree.diameter() + 1 <= 2 * tree.height().max(1)
    }
}
