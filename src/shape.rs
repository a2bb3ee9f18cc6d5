//! Whole-tree measurements: height, diameter, symmetry, root-to-leaf paths, and a few sums.

use crate::node::{NodeId, Tree};

impl<K> Tree<K> {
    /// Number of nodes on the longest root-to-leaf path. 0 for the empty tree.
    pub fn height(&self) -> usize {
        self.levels().len()
    }

    /// Number of edges on the longest path between any two nodes. 0 for empty and single-node
    /// trees.
    ///
    /// Recurses once per level, so the call depth is the tree's height.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<i32> = "1,2,3,4,5".parse().unwrap();
    /// assert_eq!(tree.diameter(), 3);
    /// ```
    pub fn diameter(&self) -> usize {
        let mut widest = 0;
        self.height_tracking_diameter(self.root(), &mut widest);
        widest
    }

    fn height_tracking_diameter(&self, id: Option<NodeId>, widest: &mut usize) -> usize {
        let Some(id) = id else {
            return 0;
        };
        let node = self.node(id);
        let left = self.height_tracking_diameter(node.left(), widest);
        let right = self.height_tracking_diameter(node.right(), widest);
        *widest = (*widest).max(left + right);
        1 + left.max(right)
    }
}

impl<K: PartialEq> Tree<K> {
    /// Whether the tree is its own mirror image. The empty tree is.
    pub fn is_symmetric(&self) -> bool {
        let Some(root) = self.root() else {
            return true;
        };
        let root = self.node(root);
        let mut pairs = vec![(root.left(), root.right())];
        while let Some(pair) = pairs.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    let (a, b) = (self.node(a), self.node(b));
                    if a.key() != b.key() {
                        return false;
                    }
                    pairs.push((a.left(), b.right()));
                    pairs.push((a.right(), b.left()));
                }
                _ => return false,
            }
        }
        true
    }

    /// Ids on the path from the root down to the first node holding `key` in pre-order, or
    /// `None` if no node holds it.
    pub fn path_ids(&self, key: &K) -> Option<Vec<NodeId>> {
        let mut path = Vec::new();
        let mut stack: Vec<(NodeId, usize)> =
            self.root().map(|root| (root, 0)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            path.truncate(depth);
            path.push(id);
            let node = self.node(id);
            if node.key() == key {
                return Some(path);
            }
            if let Some(right) = node.right() {
                stack.push((right, depth + 1));
            }
            if let Some(left) = node.left() {
                stack.push((left, depth + 1));
            }
        }
        None
    }
}

impl<K: Clone + PartialEq> Tree<K> {
    /// Keys on the path from the root down to the first node holding `key` in pre-order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<i32> = "1,2,3,4,5,6,7".parse().unwrap();
    /// assert_eq!(tree.path_to(&5), Some(vec![1, 2, 5]));
    /// assert_eq!(tree.path_to(&8), None);
    /// ```
    pub fn path_to(&self, key: &K) -> Option<Vec<K>> {
        let ids = self.path_ids(key)?;
        Some(ids.into_iter().map(|id| self.key(id).clone()).collect())
    }
}

impl<K: Clone> Tree<K> {
    /// Every root-to-leaf path, leaves left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<i32> = "1,2,3,N,5".parse().unwrap();
    /// assert_eq!(tree.root_to_leaf_paths(), vec![vec![1, 2, 5], vec![1, 3]]);
    /// ```
    pub fn root_to_leaf_paths(&self) -> Vec<Vec<K>> {
        let mut paths = Vec::new();
        let mut path = Vec::new();
        let mut stack: Vec<(NodeId, usize)> =
            self.root().map(|root| (root, 0)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            path.truncate(depth);
            let node = self.node(id);
            path.push(node.key().clone());
            if node.is_leaf() {
                paths.push(path.clone());
                continue;
            }
            if let Some(right) = node.right() {
                stack.push((right, depth + 1));
            }
            if let Some(left) = node.left() {
                stack.push((left, depth + 1));
            }
        }
        paths
    }
}

impl<K: Copy + Into<i64>> Tree<K> {
    /// Whether every node with children holds exactly the sum of its children's keys. Leaves and
    /// the empty tree qualify trivially. Children are summed in `i128`, so `i64` keys can't
    /// overflow.
    pub fn has_children_sum_property(&self) -> bool {
        let mut stack: Vec<NodeId> = self.root().into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.is_leaf() {
                continue;
            }
            let mut children: i128 = 0;
            for child in [node.left(), node.right()].into_iter().flatten() {
                let key: i64 = (*self.key(child)).into();
                children += i128::from(key);
                stack.push(child);
            }
            let key: i64 = (*node.key()).into();
            if i128::from(key) != children {
                return false;
            }
        }
        true
    }

    /// The largest key sum over any path (at least one node, following edges in either
    /// direction). `None` for the empty tree. Sums are taken in `i128`, so `i64` keys can't
    /// overflow them.
    ///
    /// Recurses once per level, so the call depth is the tree's height.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<i32> = "-10,9,20,N,N,15,7".parse().unwrap();
    /// assert_eq!(tree.max_path_sum(), Some(42));
    ///
    /// let tree: Tree<i32> = "-3".parse().unwrap();
    /// assert_eq!(tree.max_path_sum(), Some(-3));
    /// ```
    pub fn max_path_sum(&self) -> Option<i128> {
        let root = self.root()?;
        let mut best = i128::MIN;
        self.best_downward_gain(Some(root), &mut best);
        Some(best)
    }

    /// The best sum of a path starting at `id` and going down, floored at 0 so a parent can
    /// choose to ignore it. Updates `best` with the best path bending at `id`.
    fn best_downward_gain(&self, id: Option<NodeId>, best: &mut i128) -> i128 {
        let Some(id) = id else {
            return 0;
        };
        let node = self.node(id);
        let left = self.best_downward_gain(node.left(), best);
        let right = self.best_downward_gain(node.right(), best);
        let key: i64 = (*node.key()).into();
        let key = i128::from(key);
        *best = (*best).max(key + left + right);
        (key + left.max(right)).max(0)
    }
}
