//! Breadth-first views of a tree: level grouping, zig-zag, side/top/bottom views, vertical
//! columns, width, and the boundary walk.

use std::collections::{BTreeMap, VecDeque};

use crate::node::{NodeId, Tree};

impl<K> Tree<K> {
    /// Node ids grouped by depth, left to right within each level.
    pub(crate) fn levels(&self) -> Vec<Vec<NodeId>> {
        let mut levels = Vec::new();
        let mut queue: VecDeque<NodeId> = self.root().into_iter().collect();
        while !queue.is_empty() {
            let level: Vec<NodeId> = queue.drain(..).collect();
            for &id in &level {
                let node = self.node(id);
                queue.extend(node.left());
                queue.extend(node.right());
            }
            levels.push(level);
        }
        levels
    }

    /// Breadth-first walk tagging every node with its `(column, row)`. The root sits at column 0
    /// and a left (right) step moves one column down (up).
    fn columns(&self) -> Vec<(NodeId, i64, usize)> {
        let mut out = Vec::with_capacity(self.len());
        let mut queue: VecDeque<(NodeId, i64, usize)> =
            self.root().map(|root| (root, 0, 0)).into_iter().collect();
        while let Some((id, column, row)) = queue.pop_front() {
            out.push((id, column, row));
            let node = self.node(id);
            if let Some(left) = node.left() {
                queue.push_back((left, column - 1, row + 1));
            }
            if let Some(right) = node.right() {
                queue.push_back((right, column + 1, row + 1));
            }
        }
        out
    }

    /// The widest level, counting the absent positions between its leftmost and rightmost
    /// nodes as if the level were complete.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<i32> = "1,3,2,5,N,N,9,6,N,7".parse().unwrap();
    /// assert_eq!(tree.max_width(), 7);
    /// ```
    pub fn max_width(&self) -> usize {
        let mut width = 0;
        // Positions are renumbered from zero on every level so they stay below twice the
        // level's width.
        let mut queue: VecDeque<(NodeId, usize)> =
            self.root().map(|root| (root, 0)).into_iter().collect();
        loop {
            let (Some(&(_, first)), Some(&(_, last))) = (queue.front(), queue.back()) else {
                break;
            };
            width = width.max(last - first + 1);
            for _ in 0..queue.len() {
                let Some((id, position)) = queue.pop_front() else {
                    break;
                };
                let position = position - first;
                let node = self.node(id);
                if let Some(left) = node.left() {
                    queue.push_back((left, 2 * position));
                }
                if let Some(right) = node.right() {
                    queue.push_back((right, 2 * position + 1));
                }
            }
        }
        width
    }
}

impl<K: Clone> Tree<K> {
    fn keys_of(&self, ids: &[NodeId]) -> Vec<K> {
        ids.iter().map(|&id| self.key(id).clone()).collect()
    }

    /// Keys grouped by depth, left to right within each level.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<i32> = "3,9,20,N,N,15,7".parse().unwrap();
    /// assert_eq!(tree.level_order(), vec![vec![3], vec![9, 20], vec![15, 7]]);
    /// ```
    pub fn level_order(&self) -> Vec<Vec<K>> {
        self.levels().iter().map(|level| self.keys_of(level)).collect()
    }

    /// Like [`Tree::level_order`] but every odd level (the root is level 0) reads right to left.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<i32> = "1,2,3,4,5,6,7".parse().unwrap();
    /// assert_eq!(
    ///     tree.zigzag_level_order(),
    ///     vec![vec![1], vec![3, 2], vec![4, 5, 6, 7]]
    /// );
    /// ```
    pub fn zigzag_level_order(&self) -> Vec<Vec<K>> {
        self.levels()
            .iter()
            .enumerate()
            .map(|(depth, level)| {
                let mut keys = self.keys_of(level);
                if depth % 2 == 1 {
                    keys.reverse();
                }
                keys
            })
            .collect()
    }

    /// The last node of every level, i.e. what is visible looking at the tree from the right.
    pub fn right_side_view(&self) -> Vec<K> {
        self.levels()
            .iter()
            .filter_map(|level| level.last())
            .map(|&id| self.key(id).clone())
            .collect()
    }

    /// The first node of every level.
    pub fn left_side_view(&self) -> Vec<K> {
        self.levels()
            .iter()
            .filter_map(|level| level.first())
            .map(|&id| self.key(id).clone())
            .collect()
    }

    /// The first node reached in each column by a breadth-first walk, columns left to right.
    pub fn top_view(&self) -> Vec<K> {
        let mut seen = BTreeMap::new();
        for (id, column, _) in self.columns() {
            seen.entry(column).or_insert(id);
        }
        seen.values().map(|&id| self.key(id).clone()).collect()
    }

    /// The last node reached in each column by a breadth-first walk, columns left to right.
    pub fn bottom_view(&self) -> Vec<K> {
        let mut seen = BTreeMap::new();
        for (id, column, _) in self.columns() {
            seen.insert(column, id);
        }
        seen.values().map(|&id| self.key(id).clone()).collect()
    }

    /// The root, then the left boundary top-down, then every leaf left to right, then the right
    /// boundary bottom-up. Boundaries never include leaves, so no key shows up twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<i32> = "1,2,3,4,5,6,7,N,N,8,9".parse().unwrap();
    /// assert_eq!(tree.boundary(), vec![1, 2, 4, 8, 9, 6, 7, 3]);
    /// ```
    pub fn boundary(&self) -> Vec<K> {
        let Some(root) = self.root() else {
            return Vec::new();
        };
        let mut keys = vec![self.key(root).clone()];
        if self.node(root).is_leaf() {
            return keys;
        }

        let mut curr = self.node(root).left();
        while let Some(id) = curr {
            let node = self.node(id);
            if !node.is_leaf() {
                keys.push(node.key().clone());
            }
            curr = node.left().or(node.right());
        }

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.is_leaf() {
                keys.push(node.key().clone());
            }
            stack.extend(node.right());
            stack.extend(node.left());
        }

        let mut right_boundary = Vec::new();
        let mut curr = self.node(root).right();
        while let Some(id) = curr {
            let node = self.node(id);
            if !node.is_leaf() {
                right_boundary.push(node.key().clone());
            }
            curr = node.right().or(node.left());
        }
        keys.extend(right_boundary.into_iter().rev());
        keys
    }
}

impl<K: Clone + Ord> Tree<K> {
    /// Keys grouped by column, columns left to right. Inside a column, shallower nodes come
    /// first and nodes sharing a row are ordered by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<i32> = "1,2,3,4,6,5,7".parse().unwrap();
    /// assert_eq!(
    ///     tree.vertical_order(),
    ///     vec![vec![4], vec![2], vec![1, 5, 6], vec![3], vec![7]]
    /// );
    /// ```
    pub fn vertical_order(&self) -> Vec<Vec<K>> {
        let mut grid: BTreeMap<i64, BTreeMap<usize, Vec<K>>> = BTreeMap::new();
        for (id, column, row) in self.columns() {
            grid.entry(column)
                .or_default()
                .entry(row)
                .or_default()
                .push(self.key(id).clone());
        }
        grid.into_values()
            .map(|rows| {
                rows.into_values()
                    .flat_map(|mut keys| {
                        keys.sort();
                        keys
                    })
                    .collect()
            })
            .collect()
    }
}
