//! Binary Search Tree maintenance.
//!
//! Everything in here assumes the tree already satisfies the BST invariant: for every node, keys
//! in its left subtree are smaller and keys in its right subtree are larger. Running these on a
//! tree that doesn't is allowed but the answers are meaningless. [`Tree::is_valid_bst`] checks
//! the invariant.
//!
//! Duplicate keys are accepted by [`Tree::insert`] and always go into the LEFT subtree of an
//! equal key, so an in-order walk of a tree built only by `insert` is non-decreasing.
//!
//! # Examples
//!
//! ```
//! use bintree::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [50, 30, 70, 20, 40, 60, 80] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.inorder(), vec![20, 30, 40, 50, 60, 70, 80]);
//! assert_eq!(tree.floor(&45), Some(&40));
//!
//! assert_eq!(tree.delete(&30), Some(30));
//! assert_eq!(tree.inorder(), vec![20, 40, 50, 60, 70, 80]);
//! assert!(tree.is_valid_bst());
//! ```

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::morris::{Emit, ThreadedWalk};
use crate::node::{NodeId, Side, Tree};

impl<K: Ord> Tree<K> {
    /// Finds a node holding `key`. O(height) time, O(1) space.
    pub fn find(&self, key: &K) -> Option<NodeId> {
        self.find_from(self.root(), key)
    }

    fn find_from(&self, mut curr: Option<NodeId>, key: &K) -> Option<NodeId> {
        while let Some(id) = curr {
            let node = self.node(id);
            curr = match key.cmp(node.key()) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether some node holds `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// The largest key less than or equal to `key`, or `None` if every key is larger.
    pub fn floor(&self, key: &K) -> Option<&K> {
        let mut best = None;
        let mut curr = self.root();
        while let Some(id) = curr {
            let node = self.node(id);
            curr = match key.cmp(node.key()) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node.key()),
                Ordering::Greater => {
                    best = Some(node.key());
                    node.right()
                }
            };
        }
        best
    }

    /// The smallest key greater than or equal to `key`, or `None` if every key is smaller.
    pub fn ceil(&self, key: &K) -> Option<&K> {
        let mut best = None;
        let mut curr = self.root();
        while let Some(id) = curr {
            let node = self.node(id);
            curr = match key.cmp(node.key()) {
                Ordering::Less => {
                    best = Some(node.key());
                    node.left()
                }
                Ordering::Equal => return Some(node.key()),
                Ordering::Greater => node.right(),
            };
        }
        best
    }

    /// Checks the BST invariant by walking in-order with the threaded walk and requiring every
    /// key to be strictly greater than the one before. Stops at the first bad pair; the threads
    /// laid so far are removed before returning.
    ///
    /// Trees holding duplicate keys are reported invalid.
    pub fn is_valid_bst(&mut self) -> bool {
        let mut walk = ThreadedWalk::new(self, Emit::Inorder);
        let mut prev = None;
        while let Some(id) = walk.next() {
            if let Some(prev) = prev {
                if walk.tree().key(prev) >= walk.tree().key(id) {
                    return false;
                }
            }
            prev = Some(id);
        }
        true
    }

    /// Inserts `key` as a new leaf and returns its node. An equal key sends the descent left.
    pub fn insert(&mut self, key: K) -> NodeId {
        let Some(mut curr) = self.root() else {
            let id = self.alloc(key);
            self.set_root(Some(id));
            return id;
        };
        loop {
            let side = if &key > self.key(curr) {
                Side::Right
            } else {
                Side::Left
            };
            match self.node(curr).child(side) {
                Some(next) => curr = next,
                None => {
                    let id = self.alloc(key);
                    self.link(curr, side, Some(id));
                    trace!(parent = curr.index(), ?side, "inserted leaf");
                    return id;
                }
            }
        }
    }

    /// Deletes one node holding `key` and returns its key. Returns `None` (and changes nothing)
    /// if no node holds it.
    ///
    /// A node with two children is replaced by its in-order successor, which is physically
    /// moved into its place. Keys never move between nodes, so ids of surviving nodes keep
    /// referring to the same keys.
    pub fn delete(&mut self, key: &K) -> Option<K> {
        let target = self.find(key)?;
        self.unlink(target);
        debug!(node = target.index(), "deleted node");
        Some(self.release(target))
    }

    /// Deletes one node holding `key` from the subtree rooted at `subtree` and returns the root
    /// of that subtree afterwards. That is `subtree` itself unless `subtree` was the node deleted,
    /// in which case it is whatever took its place (`None` if nothing did).
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::from_sorted(&[1, 2, 3]);
    /// let root = tree.root().unwrap();
    ///
    /// let new_root = tree.delete_from(root, &2).unwrap();
    /// assert_eq!(tree.key(new_root), &3);
    /// assert_eq!(tree.root(), Some(new_root));
    /// assert_eq!(tree.delete_from(new_root, &42), Some(new_root));
    /// ```
    pub fn delete_from(&mut self, subtree: NodeId, key: &K) -> Option<NodeId> {
        let Some(target) = self.find_from(Some(subtree), key) else {
            return Some(subtree);
        };
        let replacement = self.unlink(target);
        self.release(target);
        debug!(node = target.index(), "deleted node");
        if target == subtree {
            replacement
        } else {
            Some(subtree)
        }
    }

    /// Finds two keys that were swapped (the tree was a BST before that) and swaps them back.
    /// Returns the pair of nodes whose keys were exchanged, or `None` if the in-order walk was
    /// already sorted.
    ///
    /// Uses the threaded walk: the first out-of-order pair supplies the first culprit and the last
    /// out-of-order pair supplies the second.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree: Tree<i32> = "3,1,4,N,N,2".parse().unwrap();
    ///
    /// assert!(tree.recover_bst().is_some());
    /// assert_eq!(tree.to_string(), "2,1,4,N,N,3,N,N,N");
    /// ```
    pub fn recover_bst(&mut self) -> Option<(NodeId, NodeId)> {
        let mut walk = ThreadedWalk::new(self, Emit::Inorder);
        let mut prev: Option<NodeId> = None;
        let mut first = None;
        let mut second = None;
        while let Some(id) = walk.next() {
            if let Some(prev) = prev {
                if walk.tree().key(prev) > walk.tree().key(id) {
                    first.get_or_insert(prev);
                    second = Some(id);
                }
            }
            prev = Some(id);
        }
        drop(walk);

        let pair = (first?, second?);
        self.swap_keys(pair.0, pair.1);
        debug!(
            first = pair.0.index(),
            second = pair.1.index(),
            "swapped misplaced keys back"
        );
        Some(pair)
    }
}

impl<K> Tree<K> {
    /// Detaches `target` and hooks whatever replaces it into `target`'s old place. Returns the
    /// replacement.
    ///
    /// With two children the in-order successor (leftmost node of the right subtree) takes over:
    /// if it is the right child itself it just adopts `target`'s left subtree, otherwise its own
    /// right subtree goes to its old parent and it adopts both of `target`'s subtrees.
    fn unlink(&mut self, target: NodeId) -> Option<NodeId> {
        let node = self.node(target);
        let replacement = match (node.left(), node.right()) {
            (None, None) => None,
            (None, Some(right)) => Some(right),
            (Some(left), None) => Some(left),
            (Some(left), Some(right)) => {
                let mut successor_parent = target;
                let mut successor = right;
                while let Some(next) = self.node(successor).left() {
                    successor_parent = successor;
                    successor = next;
                }
                if successor_parent != target {
                    let orphan = self.node(successor).right();
                    self.link(successor_parent, Side::Left, orphan);
                    self.link(successor, Side::Right, Some(right));
                }
                self.link(successor, Side::Left, Some(left));
                Some(successor)
            }
        };
        self.replace(target, replacement);
        replacement
    }
}

/// What the subtree below a node looks like to the largest-BST search.
enum Summary<K> {
    Empty,
    Bst { min: K, max: K, sum: i128 },
    NotBst,
}

impl<K: Copy + Ord + Into<i64>> Tree<K> {
    /// The largest key sum over all subtrees that are valid BSTs. The empty subtree counts, so
    /// the answer is never below 0. Sums are taken in `i128`, so `i64` keys can't overflow them.
    ///
    /// Recurses once per level, so the call depth is the tree's height.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<i32> = "1,4,3,2,4,2,5,N,N,N,N,N,N,4,6".parse().unwrap();
    /// assert_eq!(tree.max_sum_bst(), 20);
    ///
    /// let negative: Tree<i32> = "-4,-2,-5".parse().unwrap();
    /// assert_eq!(negative.max_sum_bst(), 0);
    /// ```
    pub fn max_sum_bst(&self) -> i128 {
        let mut best = 0;
        self.summarize(self.root(), &mut best);
        best
    }

    fn summarize(&self, id: Option<NodeId>, best: &mut i128) -> Summary<K> {
        let Some(id) = id else {
            return Summary::Empty;
        };
        let node = self.node(id);
        let left = self.summarize(node.left(), best);
        let right = self.summarize(node.right(), best);
        let key = *node.key();

        let (min, left_sum) = match left {
            Summary::Empty => (key, 0),
            Summary::Bst { min, max, sum } if max < key => (min, sum),
            _ => return Summary::NotBst,
        };
        let (max, right_sum) = match right {
            Summary::Empty => (key, 0),
            Summary::Bst { min, max, sum } if min > key => (max, sum),
            _ => return Summary::NotBst,
        };

        let key_value: i64 = key.into();
        let sum = i128::from(key_value) + left_sum + right_sum;
        *best = (*best).max(sum);
        Summary::Bst { min, max, sum }
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a set.
    /// This way we can ensure that after a random smattering of inserts
    /// and deletes we have the same keys in both.
    fn do_ops(ops: &[Op<i8>], bst: &mut Tree<i8>, set: &mut BTreeSet<i8>) {
        for op in ops {
            match op {
                Op::Insert(k) => {
                    if set.insert(*k) {
                        bst.insert(*k);
                    }
                }
                Op::Remove(k) => {
                    assert_eq!(bst.delete(k), set.take(k));
                }
                Op::Iter => {
                    assert!(bst.iter().eq(set.iter()));
                    assert!(bst.is_valid_bst());
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            tree.len() == set.len() && set.iter().all(|key| tree.contains(key))
        }
    }

    quickcheck::quickcheck! {
        fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(*x);
            }
            for delete in &deletes {
                // We may have inserted the same key multiple times - delete each one.
                while tree.delete(delete).is_some() {}
            }

            let mut still_present = xs;
            still_present.retain(|x| !deletes.contains(x));
            still_present.sort();

            deletes.iter().all(|x| !tree.contains(x))
                && tree.inorder() == still_present
        }
    }

    quickcheck::quickcheck! {
        fn floor_matches_scan(xs: BTreeSet<i8>, target: i8) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(*x);
            }

            tree.floor(&target) == xs.range(..=target).next_back()
                && tree.ceil(&target) == xs.range(target..).next()
        }
    }
}
