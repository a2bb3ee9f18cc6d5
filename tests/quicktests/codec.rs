use bintree::Tree;

use crate::AnyTree;

quickcheck::quickcheck! {
    fn encode_then_decode_gives_same_tree(tree: AnyTree) -> bool {
        let tree = tree.0;
        let decoded: Tree<i16> = tree.encode().parse().unwrap();

        decoded == tree && decoded.len() == tree.len()
    }
}

quickcheck::quickcheck! {
    fn encoding_has_one_null_per_missing_child(tree: AnyTree) -> bool {
        let tree = tree.0;
        let encoded = tree.encode();
        let tokens: Vec<&str> = if encoded.is_empty() {
            Vec::new()
        } else {
            encoded.split(bintree::codec::SEPARATOR).collect()
        };
        let nulls = tokens
            .iter()
            .filter(|token| **token == bintree::codec::NULL_TOKEN)
            .count();

        tokens.len() == 2 * tree.len() + usize::from(!tree.is_empty())
            && nulls == tree.len() + usize::from(!tree.is_empty())
    }
}
