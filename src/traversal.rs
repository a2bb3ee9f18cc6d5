//! Depth-first traversals. Everything here walks with an explicit stack, so a degenerate
//! (list-shaped) tree costs heap memory rather than call stack.
//!
//! # Examples
//!
//! ```
//! use bintree::Tree;
//!
//! let tree: Tree<i32> = "1,2,3,4,5".parse().unwrap();
//!
//! assert_eq!(tree.preorder(), vec![1, 2, 4, 5, 3]);
//! assert_eq!(tree.inorder(), vec![4, 2, 5, 1, 3]);
//! assert_eq!(tree.postorder(), vec![4, 5, 2, 3, 1]);
//! ```

use tracing::debug;

use crate::node::{NodeId, Side, Tree};

/// Pre-, in-, and post-order produced by a single walk. See [`Tree::traversals`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Traversals<K> {
    /// Root, left, right.
    pub preorder: Vec<K>,
    /// Left, root, right.
    pub inorder: Vec<K>,
    /// Left, right, root.
    pub postorder: Vec<K>,
}

/// How many times the tri-order walk has come back to a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Visit {
    /// On the way down. Emits preorder.
    First,
    /// Back from the left subtree. Emits inorder.
    Second,
    /// Back from the right subtree. Emits postorder.
    Third,
}

impl<K: Clone> Tree<K> {
    /// Keys in root, left, right order.
    pub fn preorder(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len());
        let mut stack: Vec<NodeId> = self.root().into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            keys.push(node.key().clone());
            // Right goes on first so that left comes off first.
            stack.extend(node.right());
            stack.extend(node.left());
        }
        keys
    }

    /// Keys in left, root, right order. For a BST this is ascending.
    pub fn inorder(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut curr = self.root();
        loop {
            while let Some(id) = curr {
                stack.push(id);
                curr = self.node(id).left();
            }
            let Some(id) = stack.pop() else {
                break;
            };
            keys.push(self.key(id).clone());
            curr = self.node(id).right();
        }
        keys
    }

    /// Keys in left, right, root order.
    pub fn postorder(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len());
        let mut stack: Vec<NodeId> = Vec::new();
        let mut curr = self.root();
        let mut last_emitted = None;
        loop {
            if let Some(id) = curr {
                stack.push(id);
                curr = self.node(id).left();
                continue;
            }
            let Some(&top) = stack.last() else {
                break;
            };
            match self.node(top).right() {
                // The right subtree hasn't been walked yet.
                Some(right) if last_emitted != Some(right) => curr = Some(right),
                _ => {
                    keys.push(self.key(top).clone());
                    last_emitted = stack.pop();
                }
            }
        }
        keys
    }

    /// All three depth-first orders from one walk. Each stack entry remembers how many times its
    /// node has been reached; a node is emitted to preorder on the first visit, inorder on the
    /// second, and postorder on the third.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<i32> = "1,2,3,4,5".parse().unwrap();
    /// let all = tree.traversals();
    ///
    /// assert_eq!(all.preorder, tree.preorder());
    /// assert_eq!(all.inorder, tree.inorder());
    /// assert_eq!(all.postorder, tree.postorder());
    /// ```
    pub fn traversals(&self) -> Traversals<K> {
        let mut out = Traversals {
            preorder: Vec::with_capacity(self.len()),
            inorder: Vec::with_capacity(self.len()),
            postorder: Vec::with_capacity(self.len()),
        };
        let mut stack: Vec<(NodeId, Visit)> =
            self.root().map(|root| (root, Visit::First)).into_iter().collect();

        while let Some((id, visit)) = stack.pop() {
            let node = self.node(id);
            match visit {
                Visit::First => {
                    out.preorder.push(node.key().clone());
                    stack.push((id, Visit::Second));
                    if let Some(left) = node.left() {
                        stack.push((left, Visit::First));
                    }
                }
                Visit::Second => {
                    out.inorder.push(node.key().clone());
                    stack.push((id, Visit::Third));
                    if let Some(right) = node.right() {
                        stack.push((right, Visit::First));
                    }
                }
                Visit::Third => out.postorder.push(node.key().clone()),
            }
        }
        out
    }
}

impl<K> Tree<K> {
    /// Rewrites the tree in place into a chain hanging off `right` links, in the order the
    /// original preorder visited the nodes. Every `left` link is cleared and no key moves.
    ///
    /// Each node with a left subtree has its right subtree moved under the rightmost node of the
    /// left subtree, and the left subtree slides over to the right. One pass and no extra space.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree: Tree<i32> = "1,2,5,3,4,N,6".parse().unwrap();
    /// let preorder = tree.preorder();
    /// tree.flatten();
    ///
    /// assert_eq!(tree.inorder(), preorder);
    /// assert_eq!(tree.to_string(), "1,N,2,N,3,N,4,N,5,N,6,N,N");
    /// ```
    pub fn flatten(&mut self) {
        let mut curr = self.root();
        while let Some(id) = curr {
            if let Some(left) = self.node(id).left() {
                let mut tail = left;
                while let Some(next) = self.node(tail).right() {
                    tail = next;
                }
                let right = self.node(id).right();
                self.link(tail, Side::Right, right);
                self.link(id, Side::Right, Some(left));
                self.node_mut(id).left = None;
            }
            curr = self.node(id).right();
        }
        debug!(nodes = self.len(), "flattened tree into right-leaning chain");
    }
}
