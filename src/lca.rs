//! Lowest common ancestor queries.
//!
//! Targets are given by key for the search-based variants and by node for the parent-link
//! variant. A target that can't be found is always reported as `None`, never as some node.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::node::{NodeId, Tree};

impl<K: PartialEq> Tree<K> {
    /// LCA of the nodes holding `p` and `q`, assuming both are present.
    ///
    /// A node holding either key is returned without looking below it, so when only one target
    /// exists this returns that node rather than `None`. Use [`Tree::lca_checked`] when targets
    /// may be missing.
    ///
    /// Recurses once per level, so the call depth is the tree's height.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<i32> = "3,5,1,6,2,0,8,N,N,7,4".parse().unwrap();
    ///
    /// let lca = tree.lca(&5, &1).unwrap();
    /// assert_eq!(tree.key(lca), &3);
    ///
    /// let lca = tree.lca(&5, &4).unwrap();
    /// assert_eq!(tree.key(lca), &5);
    /// ```
    pub fn lca(&self, p: &K, q: &K) -> Option<NodeId> {
        self.lca_below(self.root(), p, q)
    }

    fn lca_below(&self, id: Option<NodeId>, p: &K, q: &K) -> Option<NodeId> {
        let id = id?;
        let node = self.node(id);
        if node.key() == p || node.key() == q {
            return Some(id);
        }
        match (
            self.lca_below(node.left(), p, q),
            self.lca_below(node.right(), p, q),
        ) {
            (Some(_), Some(_)) => Some(id),
            (found, None) | (None, found) => found,
        }
    }

    /// LCA of the nodes holding `p` and `q`, or `None` unless both are present.
    ///
    /// A single post-order pass counts, at every node, how many targets were found in its left
    /// subtree, its right subtree, and the node itself. The first (deepest) node reaching two is
    /// the answer. `p == q` names a single node, which is then its own LCA.
    ///
    /// Recurses once per level, so the call depth is the tree's height.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<i32> = "3,5,1,6,2,0,8,N,N,7,4".parse().unwrap();
    ///
    /// let lca = tree.lca_checked(&7, &8).unwrap();
    /// assert_eq!(tree.key(lca), &3);
    /// assert_eq!(tree.lca_checked(&5, &10), None);
    /// ```
    pub fn lca_checked(&self, p: &K, q: &K) -> Option<NodeId> {
        let mut found = None;
        self.count_targets(self.root(), p, q, &mut found);
        found
    }

    /// Returns how many of the targets are in the subtree at `id`, recording the LCA in `found`.
    fn count_targets(
        &self,
        id: Option<NodeId>,
        p: &K,
        q: &K,
        found: &mut Option<NodeId>,
    ) -> usize {
        let Some(id) = id else {
            return 0;
        };
        let node = self.node(id);
        let below = self.count_targets(node.left(), p, q, found)
            + self.count_targets(node.right(), p, q, found);
        let itself = if p == q {
            2 * usize::from(node.key() == p)
        } else {
            usize::from(node.key() == p) + usize::from(node.key() == q)
        };
        let total = below + itself;
        if total >= 2 && found.is_none() {
            *found = Some(id);
        }
        total
    }

    /// LCA of the nodes holding `p` and `q`, or `None` unless both are present. Same answer as
    /// [`Tree::lca_checked`] for trees with unique keys, without recursion.
    ///
    /// A breadth-first walk records every node's parent until both targets have been seen. The
    /// ancestors of `p` then go into a set, and the first ancestor of `q` found in it is the
    /// answer. O(n) time and space whatever the tree's shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<i32> = "3,5,1,6,2,0,8,N,N,7,4".parse().unwrap();
    ///
    /// let lca = tree.lca_iter(&7, &4).unwrap();
    /// assert_eq!(tree.key(lca), &2);
    /// assert_eq!(tree.lca_iter(&7, &10), None);
    /// ```
    pub fn lca_iter(&self, p: &K, q: &K) -> Option<NodeId> {
        let root = self.root()?;
        let mut parents: HashMap<NodeId, Option<NodeId>> = HashMap::from([(root, None)]);
        let mut queue = VecDeque::from([root]);
        let (mut p_id, mut q_id) = (None, None);
        while let Some(id) = queue.pop_front() {
            let node = self.node(id);
            if p_id.is_none() && node.key() == p {
                p_id = Some(id);
            }
            if q_id.is_none() && node.key() == q {
                q_id = Some(id);
            }
            if p_id.is_some() && q_id.is_some() {
                break;
            }
            for child in [node.left(), node.right()].into_iter().flatten() {
                parents.insert(child, Some(id));
                queue.push_back(child);
            }
        }
        let (p_id, q_id) = (p_id?, q_id?);

        let mut ancestors = HashSet::new();
        let mut curr = Some(p_id);
        while let Some(id) = curr {
            ancestors.insert(id);
            curr = parents.get(&id).copied().flatten();
        }
        let mut curr = Some(q_id);
        while let Some(id) = curr {
            if ancestors.contains(&id) {
                return Some(id);
            }
            curr = parents.get(&id).copied().flatten();
        }
        None
    }
}

impl<K: Ord> Tree<K> {
    /// LCA in a BST, using only key comparisons: walk right while both targets are larger, left
    /// while both are smaller, and stop at the first node that splits them (or holds one of
    /// them). O(height), no extra space.
    ///
    /// Doesn't check that the targets are present: it returns the node where they would split.
    /// `None` only for the empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree = Tree::from_bst_preorder(&[6, 2, 0, 4, 3, 5, 8, 7, 9]);
    ///
    /// assert_eq!(tree.key(tree.lca_bst(&2, &8).unwrap()), &6);
    /// assert_eq!(tree.key(tree.lca_bst(&3, &5).unwrap()), &4);
    /// ```
    pub fn lca_bst(&self, p: &K, q: &K) -> Option<NodeId> {
        let mut curr = self.root()?;
        loop {
            let node = self.node(curr);
            let next = match (p.cmp(node.key()), q.cmp(node.key())) {
                (Ordering::Greater, Ordering::Greater) => node.right(),
                (Ordering::Less, Ordering::Less) => node.left(),
                _ => return Some(curr),
            };
            match next {
                Some(next) => curr = next,
                // Both targets fall off the tree on the same side.
                None => return Some(curr),
            }
        }
    }
}

impl<K> Tree<K> {
    /// LCA of two nodes using only parent links: the two ancestor chains are walked like two
    /// linked lists, each pointer restarting from the other node when it runs off the root. After
    /// at most two passes they meet at the first shared ancestor. O(height) time, O(1) space.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<i32> = "3,5,1,6,2,0,8,N,N,7,4".parse().unwrap();
    /// let seven = tree.path_ids(&7).unwrap();
    /// let six = tree.path_ids(&6).unwrap();
    ///
    /// let lca = tree.lca_by_parent(*seven.last().unwrap(), *six.last().unwrap()).unwrap();
    /// assert_eq!(tree.key(lca), &5);
    /// ```
    pub fn lca_by_parent(&self, p: NodeId, q: NodeId) -> Option<NodeId> {
        let mut a = Some(p);
        let mut b = Some(q);
        while a != b {
            a = match a {
                Some(id) => self.node(id).parent(),
                None => Some(q),
            };
            b = match b {
                Some(id) => self.node(id).parent(),
                None => Some(p),
            };
        }
        a
    }
}
