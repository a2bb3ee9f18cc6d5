mod build;
mod bst;
mod codec;
mod traversal;

use bintree::{Side, Tree};
use quickcheck::{Arbitrary, Gen};

/// A tree of any shape, not necessarily a BST. Keys may repeat.
#[derive(Clone, Debug)]
pub struct AnyTree(pub Tree<i16>);

/// A tree of any shape whose keys are all different.
#[derive(Clone, Debug)]
pub struct UniqueTree(pub Tree<i16>);

/// Hangs each key off a random free slot, found by walking down from a random existing node.
fn grow(keys: impl IntoIterator<Item = i16>, g: &mut Gen) -> Tree<i16> {
    let mut tree = Tree::new();
    let mut ids = Vec::new();
    for key in keys {
        let Some(&start) = g.choose(&ids) else {
            tree = Tree::with_root(key);
            ids.extend(tree.root());
            continue;
        };
        let mut at = start;
        loop {
            let side = if bool::arbitrary(g) {
                Side::Left
            } else {
                Side::Right
            };
            match tree.node(at).child(side) {
                Some(child) => at = child,
                None => {
                    ids.push(tree.attach(at, side, key).unwrap());
                    break;
                }
            }
        }
    }
    tree
}

impl Arbitrary for AnyTree {
    fn arbitrary(g: &mut Gen) -> Self {
        let keys = Vec::<i16>::arbitrary(g);
        AnyTree(grow(keys, g))
    }
}

impl Arbitrary for UniqueTree {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut keys = Vec::<i16>::arbitrary(g);
        let mut seen = std::collections::HashSet::new();
        keys.retain(|key| seen.insert(*key));
        UniqueTree(grow(keys, g))
    }
}
