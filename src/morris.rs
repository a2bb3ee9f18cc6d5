//! Threaded (Morris) traversal.
//!
//! The walk needs no stack: before descending into a left subtree it points the subtree's
//! rightmost node (the in-order predecessor) back at the current node, and it follows that
//! thread later to climb back up, removing it on the way. While the walk is in progress the tree
//! has extra `right` links that break the usual invariants, so the walk mutably borrows the tree
//! and only crate-internal code ever sees it mid-flight.
//!
//! [`ThreadedWalk`] finishes itself when dropped. Stopping early, by returning or by panicking,
//! runs the rest of the walk without emitting, which removes every outstanding thread. A
//! threaded tree never reaches a caller.

use tracing::trace;

use crate::node::{NodeId, Tree};

/// When the walk emits a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Emit {
    /// When the thread into the node is removed (or right away, with no left child).
    Inorder,
    /// When the thread into the node is created (or right away, with no left child).
    Preorder,
}

/// An in-progress threaded walk. Yields node ids in in-order or pre-order.
pub(crate) struct ThreadedWalk<'t, K> {
    tree: &'t mut Tree<K>,
    curr: Option<NodeId>,
    emit: Emit,
}

impl<'t, K> ThreadedWalk<'t, K> {
    pub(crate) fn new(tree: &'t mut Tree<K>, emit: Emit) -> Self {
        let curr = tree.root();
        Self { tree, curr, emit }
    }

    /// Read access to the tree between steps. Reading keys is fine; structure is mid-thread.
    pub(crate) fn tree(&self) -> &Tree<K> {
        self.tree
    }
}

impl<K> Iterator for ThreadedWalk<'_, K> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        while let Some(curr) = self.curr {
            let Some(left) = self.tree.node(curr).left() else {
                self.curr = self.tree.node(curr).right();
                return Some(curr);
            };

            let mut pred = left;
            while let Some(next) = self.tree.node(pred).right() {
                if next == curr {
                    break;
                }
                pred = next;
            }

            if self.tree.node(pred).right() == Some(curr) {
                // Came back up the thread: the left subtree is done.
                self.tree.node_mut(pred).right = None;
                self.curr = self.tree.node(curr).right();
                if self.emit == Emit::Inorder {
                    return Some(curr);
                }
            } else {
                // First arrival: leave a way back and go left.
                self.tree.node_mut(pred).right = Some(curr);
                self.curr = Some(left);
                if self.emit == Emit::Preorder {
                    return Some(curr);
                }
            }
        }
        None
    }
}

impl<K> Drop for ThreadedWalk<'_, K> {
    fn drop(&mut self) {
        if self.curr.is_some() {
            trace!("unwinding threads of an unfinished walk");
            while self.next().is_some() {}
        }
    }
}

impl<K: Clone> Tree<K> {
    /// In-order keys using the threaded walk: O(1) extra space beyond the output. Needs `&mut`
    /// because the walk temporarily rewires `right` links; the topology is exactly restored
    /// before this returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree: Tree<i32> = "4,2,6,1,3,5,7".parse().unwrap();
    /// let before = tree.links();
    ///
    /// assert_eq!(tree.morris_inorder(), vec![1, 2, 3, 4, 5, 6, 7]);
    /// assert_eq!(tree.links(), before);
    /// ```
    pub fn morris_inorder(&mut self) -> Vec<K> {
        let mut walk = ThreadedWalk::new(self, Emit::Inorder);
        let mut keys = Vec::new();
        while let Some(id) = walk.next() {
            keys.push(walk.tree().key(id).clone());
        }
        keys
    }

    /// Pre-order keys using the threaded walk. Same guarantees as [`Tree::morris_inorder`].
    pub fn morris_preorder(&mut self) -> Vec<K> {
        let mut walk = ThreadedWalk::new(self, Emit::Preorder);
        let mut keys = Vec::new();
        while let Some(id) = walk.next() {
            keys.push(walk.tree().key(id).clone());
        }
        keys
    }
}
