//! A resumable in-order cursor over a BST.
//!
//! The cursor keeps only the path to the next node, so a full walk pushes and pops every node
//! exactly once (amortized O(1) per step) while holding O(height) ids at a time. Two cursors
//! running toward each other give the classic two-pointer search without ever collecting the
//! keys.
//!
//! # Examples
//!
//! ```
//! use bintree::{BstIter, Direction, Tree};
//!
//! let tree = Tree::from_sorted(&[1, 2, 3, 4, 5]);
//! let mut cursor = BstIter::new(&tree, Direction::Descending);
//!
//! assert!(cursor.has_next());
//! assert_eq!(cursor.next(), Some(&5));
//! assert_eq!(cursor.next(), Some(&4));
//!
//! // Picks up where it left off.
//! assert_eq!(cursor.collect::<Vec<_>>(), vec![&3, &2, &1]);
//! ```

use crate::node::{NodeId, Tree};

/// Which way a [`BstIter`] walks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Smallest key first (in-order).
    #[default]
    Ascending,
    /// Largest key first (reverse in-order).
    Descending,
}

/// Suspendable in-order (or reverse in-order) cursor. Every call to [`Iterator::next`] moves it
/// exactly one position.
#[derive(Clone, Debug)]
pub struct BstIter<'t, K> {
    tree: &'t Tree<K>,
    /// The path of nodes still waiting to be yielded; the top is next.
    stack: Vec<NodeId>,
    direction: Direction,
}

impl<'t, K> BstIter<'t, K> {
    /// Creates a cursor positioned before the first key in `direction`.
    pub fn new(tree: &'t Tree<K>, direction: Direction) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
            direction,
        };
        iter.push_frontier(tree.root());
        iter
    }

    /// Whether another key is available.
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /// The direction this cursor walks in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Like [`Iterator::next`] but yields the node instead of its key.
    pub fn next_id(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        let after = match self.direction {
            Direction::Ascending => node.right(),
            Direction::Descending => node.left(),
        };
        self.push_frontier(after);
        Some(id)
    }

    /// Pushes the path from `curr` down to its first node in walking order.
    fn push_frontier(&mut self, mut curr: Option<NodeId>) {
        while let Some(id) = curr {
            self.stack.push(id);
            let node = self.tree.node(id);
            curr = match self.direction {
                Direction::Ascending => node.left(),
                Direction::Descending => node.right(),
            };
        }
    }
}

impl<'t, K> Iterator for BstIter<'t, K> {
    type Item = &'t K;

    fn next(&mut self) -> Option<&'t K> {
        let tree = self.tree;
        self.next_id().map(|id| tree.key(id))
    }
}

impl<K> Tree<K> {
    /// An ascending cursor. See [`BstIter`].
    pub fn iter(&self) -> BstIter<'_, K> {
        BstIter::new(self, Direction::Ascending)
    }

    /// A descending cursor. See [`BstIter`].
    pub fn iter_rev(&self) -> BstIter<'_, K> {
        BstIter::new(self, Direction::Descending)
    }
}

impl<'t, K> IntoIterator for &'t Tree<K> {
    type Item = &'t K;
    type IntoIter = BstIter<'t, K>;

    fn into_iter(self) -> BstIter<'t, K> {
        self.iter()
    }
}

impl<K: Copy + Into<i64>> Tree<K> {
    /// Whether two different nodes of this BST have keys adding up to `target`.
    ///
    /// One ascending and one descending cursor close in on each other: a sum that is too small
    /// advances the low cursor, one that is too big advances the high cursor. O(n) time and
    /// O(height) space.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree = Tree::from_bst_preorder(&[5, 3, 2, 4, 6, 7]);
    ///
    /// assert!(tree.two_sum(9));
    /// assert!(!tree.two_sum(28));
    /// // A single node can't pair with itself.
    /// assert!(!tree.two_sum(14));
    /// ```
    pub fn two_sum(&self, target: i64) -> bool {
        let mut low = self.iter();
        let mut high = self.iter_rev();
        let (Some(mut a), Some(mut b)) = (low.next(), high.next()) else {
            return false;
        };
        // Ascending positions of the two cursors. Keeping them apart keeps the nodes distinct,
        // even when duplicate keys are present.
        let (mut i, mut j) = (0, self.len() - 1);
        let target = i128::from(target);

        while i < j {
            let (x, y): (i64, i64) = ((*a).into(), (*b).into());
            let sum = i128::from(x) + i128::from(y);
            if sum == target {
                return true;
            }
            if sum < target {
                let Some(next) = low.next() else {
                    break;
                };
                a = next;
                i += 1;
            } else {
                let Some(next) = high.next() else {
                    break;
                };
                b = next;
                j -= 1;
            }
        }
        false
    }
}
