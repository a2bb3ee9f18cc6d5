//! Building trees from key sequences.
//!
//! The two-traversal reconstructions require unique keys. They index the inorder sequence once
//! and then recurse over index ranges, so nothing gets copied and each key is looked up in O(1).
//! Input that doesn't describe a tree is reported as an [`Error`] rather than producing some
//! other tree.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::error::{Error, Result};
use crate::node::{NodeId, Side, Tree};

/// Position of every key in an inorder sequence.
fn index_inorder<K: Eq + Hash>(inorder: &[K]) -> Result<HashMap<&K, usize>> {
    let mut index = HashMap::with_capacity(inorder.len());
    for (position, key) in inorder.iter().enumerate() {
        if index.insert(key, position).is_some() {
            return Err(Error::DuplicateKey { position });
        }
    }
    Ok(index)
}

/// Shared state of one reconstruction: the traversal the roots come from, in the order they are
/// consumed, and the inorder index that splits each range.
struct Rebuild<'a, K> {
    index: HashMap<&'a K, usize>,
    /// Next root-order position to consume.
    next: usize,
}

impl<'a, K: Clone + Eq + Hash> Rebuild<'a, K> {
    /// Takes the key at `position` of the root-order traversal as the root of inorder range
    /// `lo..hi`, returning the new node and the key's inorder index.
    fn split(
        &self,
        tree: &mut Tree<K>,
        key: Option<&K>,
        position: usize,
        lo: usize,
        hi: usize,
    ) -> Result<(NodeId, usize)> {
        let Some(key) = key else {
            return Err(Error::Inconsistent { position });
        };
        match self.index.get(key) {
            Some(&at) if (lo..hi).contains(&at) => Ok((tree.alloc(key.clone()), at)),
            _ => Err(Error::Inconsistent { position }),
        }
    }

    /// Preorder roots come front to back, so the left range is built first.
    fn from_preorder(
        &mut self,
        tree: &mut Tree<K>,
        preorder: &[K],
        lo: usize,
        hi: usize,
    ) -> Result<Option<NodeId>> {
        if lo == hi {
            return Ok(None);
        }
        let position = self.next;
        self.next += 1;
        let (id, at) = self.split(tree, preorder.get(position), position, lo, hi)?;
        let left = self.from_preorder(tree, preorder, lo, at)?;
        tree.link(id, Side::Left, left);
        let right = self.from_preorder(tree, preorder, at + 1, hi)?;
        tree.link(id, Side::Right, right);
        Ok(Some(id))
    }

    /// Postorder roots come back to front, so the right range is built first.
    fn from_postorder(
        &mut self,
        tree: &mut Tree<K>,
        postorder: &[K],
        lo: usize,
        hi: usize,
    ) -> Result<Option<NodeId>> {
        if lo == hi {
            return Ok(None);
        }
        let Some(position) = postorder.len().checked_sub(self.next + 1) else {
            return Err(Error::Inconsistent { position: 0 });
        };
        self.next += 1;
        let (id, at) = self.split(tree, postorder.get(position), position, lo, hi)?;
        let right = self.from_postorder(tree, postorder, at + 1, hi)?;
        tree.link(id, Side::Right, right);
        let left = self.from_postorder(tree, postorder, lo, at)?;
        tree.link(id, Side::Left, left);
        Ok(Some(id))
    }
}

impl<K: Clone + Eq + Hash> Tree<K> {
    /// Rebuilds the unique tree with the given preorder and inorder traversals. Keys must be
    /// unique.
    ///
    /// Recurses once per level of the resulting tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Error, Tree};
    ///
    /// let tree = Tree::from_preorder_inorder(&[3, 9, 20, 15, 7], &[9, 3, 15, 20, 7]).unwrap();
    /// assert_eq!(tree.level_order(), vec![vec![3], vec![9, 20], vec![15, 7]]);
    ///
    /// assert_eq!(
    ///     Tree::from_preorder_inorder(&[1, 2], &[2, 3]),
    ///     Err(Error::Inconsistent { position: 0 })
    /// );
    /// ```
    pub fn from_preorder_inorder(preorder: &[K], inorder: &[K]) -> Result<Self> {
        if preorder.len() != inorder.len() {
            return Err(Error::LengthMismatch {
                left: preorder.len(),
                right: inorder.len(),
            });
        }
        let mut rebuild = Rebuild {
            index: index_inorder(inorder)?,
            next: 0,
        };
        let mut tree = Tree::new();
        let root = rebuild.from_preorder(&mut tree, preorder, 0, inorder.len())?;
        tree.set_root(root);
        debug!(nodes = tree.len(), "rebuilt tree from preorder and inorder");
        Ok(tree)
    }

    /// Rebuilds the unique tree with the given inorder and postorder traversals. Keys must be
    /// unique.
    ///
    /// Recurses once per level of the resulting tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree = Tree::from_inorder_postorder(&[9, 3, 15, 20, 7], &[9, 15, 7, 20, 3]).unwrap();
    /// assert_eq!(tree.to_string(), "3,9,20,N,N,15,7,N,N,N,N");
    /// ```
    pub fn from_inorder_postorder(inorder: &[K], postorder: &[K]) -> Result<Self> {
        if inorder.len() != postorder.len() {
            return Err(Error::LengthMismatch {
                left: inorder.len(),
                right: postorder.len(),
            });
        }
        let mut rebuild = Rebuild {
            index: index_inorder(inorder)?,
            next: 0,
        };
        let mut tree = Tree::new();
        let root = rebuild.from_postorder(&mut tree, postorder, 0, inorder.len())?;
        tree.set_root(root);
        debug!(nodes = tree.len(), "rebuilt tree from inorder and postorder");
        Ok(tree)
    }
}

impl<K: Clone> Tree<K> {
    /// A height-balanced BST holding `keys`, which must already be sorted. Each range is rooted at
    /// its middle element; for even-length ranges that is the upper of the two middles.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree = Tree::from_sorted(&[-10, -3, 0, 5, 9]);
    ///
    /// assert_eq!(tree.to_string(), "0,-3,9,-10,N,5,N,N,N,N,N");
    /// assert_eq!(tree.inorder(), vec![-10, -3, 0, 5, 9]);
    /// ```
    pub fn from_sorted(keys: &[K]) -> Self {
        let mut tree = Tree::new();
        if keys.is_empty() {
            return tree;
        }
        let mid = keys.len() / 2;
        let root = tree.alloc(keys[mid].clone());
        tree.set_root(Some(root));

        // Ranges still waiting for a root, with the slot that root goes into.
        let mut pending = vec![(root, Side::Left, 0, mid), (root, Side::Right, mid + 1, keys.len())];
        while let Some((parent, side, lo, hi)) = pending.pop() {
            if lo == hi {
                continue;
            }
            let mid = lo + (hi - lo) / 2;
            let id = tree.alloc(keys[mid].clone());
            tree.link(parent, side, Some(id));
            pending.push((id, Side::Left, lo, mid));
            pending.push((id, Side::Right, mid + 1, hi));
        }
        tree
    }
}

impl<K: Clone + Ord> Tree<K> {
    /// Rebuilds a BST from its preorder traversal alone.
    ///
    /// A stack holds the path of nodes that could still take a right child. Each new key pops
    /// every entry smaller than itself; it becomes the right child of the last one popped, or the
    /// left child of the top if nothing was popped. O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree = Tree::from_bst_preorder(&[8, 5, 1, 7, 10, 12]);
    ///
    /// assert_eq!(tree.to_string(), "8,5,10,1,7,N,12,N,N,N,N,N,N");
    /// ```
    pub fn from_bst_preorder(preorder: &[K]) -> Self {
        let mut tree = Tree::new();
        let Some((first, rest)) = preorder.split_first() else {
            return tree;
        };
        let root = tree.alloc(first.clone());
        tree.set_root(Some(root));

        let mut stack = vec![root];
        for key in rest {
            let mut parent = None;
            while let Some(&top) = stack.last() {
                if tree.key(top) < key {
                    parent = stack.pop();
                } else {
                    break;
                }
            }
            let id = tree.alloc(key.clone());
            match (parent, stack.last()) {
                (Some(parent), _) => tree.link(parent, Side::Right, Some(id)),
                (None, Some(&top)) => tree.link(top, Side::Left, Some(id)),
                (None, None) => unreachable!("the stack only empties after a pop"),
            }
            stack.push(id);
        }
        tree
    }
}
