//! The node arena every other module works on.
//!
//! A [`Tree`] stores its nodes in a contiguous `Vec` and hands out [`NodeId`]s instead of
//! pointers. Children are owned by the arena through their parent's `left`/`right` links; the
//! `parent` link is only a lookup aid and never decides when a node goes away. Nodes are freed
//! only when they are deleted from the tree or when the whole `Tree` is dropped.
//!
//! # Examples
//!
//! ```
//! use bintree::{Side, Tree};
//!
//! let mut tree = Tree::with_root(1);
//! let root = tree.root().unwrap();
//! let two = tree.attach(root, Side::Left, 2).unwrap();
//! tree.attach(root, Side::Right, 3).unwrap();
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.node(two).parent(), Some(root));
//! assert_eq!(tree.preorder(), vec![1, 2, 3]);
//! ```

use std::fmt;

use crate::error::{Error, Result};

/// Index of a node in a [`Tree`]'s arena. Only meaningful for the tree that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Which child slot of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The `left` link.
    Left,
    /// The `right` link.
    Right,
}

/// A single vertex: a key plus its structural links.
#[derive(Clone, Debug)]
pub struct Node<K> {
    key: K,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            parent: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// The node this one hangs from. `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The child on the given side.
    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[derive(Clone, Debug)]
enum Slot<K> {
    Occupied(Node<K>),
    /// A freed slot, linking to the next free one.
    Vacant(Option<NodeId>),
}

/// A binary tree of `K`s.
///
/// The tree may or may not satisfy the Binary Search Tree invariant. Search operations such as
/// [`Tree::find`] document that they assume it does.
#[derive(Clone)]
pub struct Tree<K> {
    slots: Vec<Slot<K>>,
    /// Head of the free list threaded through `Slot::Vacant`.
    free: Option<NodeId>,
    root: Option<NodeId>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            root: None,
            len: 0,
        }
    }

    /// Generate a `Tree` holding a single node.
    pub fn with_root(key: K) -> Self {
        let mut tree = Self::new();
        let root = tree.alloc(key);
        tree.root = Some(root);
        tree
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Looks up a node, returning `None` if the id doesn't refer to a live node.
    pub fn get(&self, id: NodeId) -> Option<&Node<K>> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Looks up a node.
    ///
    /// ## Panics
    ///
    /// When `id` doesn't refer to a live node of this tree. Every id reachable through the tree's
    /// own links is live, so this only happens with ids kept around after a deletion.
    pub fn node(&self, id: NodeId) -> &Node<K> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => node,
            _ => panic!("{:?} does not refer to a live node", id),
        }
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(node)) => node,
            _ => panic!("{:?} does not refer to a live node", id),
        }
    }

    /// The key of the given node. Panics like [`Tree::node`].
    pub fn key(&self, id: NodeId) -> &K {
        &self.node(id).key
    }

    /// Mutable access to a node's key. Changing a key can break the BST invariant; that is the
    /// caller's business.
    pub fn key_mut(&mut self, id: NodeId) -> &mut K {
        &mut self.node_mut(id).key
    }

    /// Exchanges the keys of two nodes, leaving the structure alone.
    pub fn swap_keys(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let (low, high) = (a.0.min(b.0), a.0.max(b.0));
        let (head, tail) = self.slots.split_at_mut(high);
        match (&mut head[low], &mut tail[0]) {
            (Slot::Occupied(x), Slot::Occupied(y)) => std::mem::swap(&mut x.key, &mut y.key),
            _ => panic!("{:?} or {:?} does not refer to a live node", a, b),
        }
    }

    /// Creates a new node with `key` as the `side` child of `parent`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Error, Side, Tree};
    ///
    /// let mut tree = Tree::with_root(1);
    /// let root = tree.root().unwrap();
    /// tree.attach(root, Side::Right, 2).unwrap();
    ///
    /// assert_eq!(
    ///     tree.attach(root, Side::Right, 3),
    ///     Err(Error::Occupied { parent: root, side: Side::Right })
    /// );
    /// ```
    pub fn attach(&mut self, parent: NodeId, side: Side, key: K) -> Result<NodeId> {
        if self.node(parent).child(side).is_some() {
            return Err(Error::Occupied { parent, side });
        }
        let child = self.alloc(key);
        self.link(parent, side, Some(child));
        Ok(child)
    }

    /// Snapshot of every live node's `(id, left, right)` links, ordered by id. Two snapshots are
    /// equal exactly when no link was changed in between.
    pub fn links(&self) -> Vec<(NodeId, Option<NodeId>, Option<NodeId>)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| match slot {
                Slot::Occupied(node) => Some((NodeId(i), node.left, node.right)),
                Slot::Vacant(_) => None,
            })
            .collect()
    }

    /// Allocates a detached node, reusing a freed slot when there is one.
    pub(crate) fn alloc(&mut self, key: K) -> NodeId {
        self.len += 1;
        match self.free {
            Some(id) => {
                let next = match self.slots[id.0] {
                    Slot::Vacant(next) => next,
                    Slot::Occupied(_) => unreachable!("free list points at a live node"),
                };
                self.free = next;
                self.slots[id.0] = Slot::Occupied(Node::new(key));
                id
            }
            None => {
                self.slots.push(Slot::Occupied(Node::new(key)));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Frees a node's slot and hands back its key. The caller must already have unlinked it.
    pub(crate) fn release(&mut self, id: NodeId) -> K {
        let slot = std::mem::replace(&mut self.slots[id.0], Slot::Vacant(self.free));
        self.free = Some(id);
        self.len -= 1;
        match slot {
            Slot::Occupied(node) => node.key,
            Slot::Vacant(_) => panic!("{:?} released twice", id),
        }
    }

    /// Points `parent`'s `side` link at `child`, fixing `child`'s parent link.
    pub(crate) fn link(&mut self, parent: NodeId, side: Side, child: Option<NodeId>) {
        let node = self.node_mut(parent);
        match side {
            Side::Left => node.left = child,
            Side::Right => node.right = child,
        }
        if let Some(child) = child {
            self.node_mut(child).parent = Some(parent);
        }
    }

    /// Makes `new` take `old`'s place under `old`'s parent (or as the root). `old` keeps its own
    /// links and is left detached.
    pub(crate) fn replace(&mut self, old: NodeId, new: Option<NodeId>) {
        match self.node(old).parent {
            Some(parent) => {
                let side = if self.node(parent).left == Some(old) {
                    Side::Left
                } else {
                    Side::Right
                };
                self.link(parent, side, new);
            }
            None => self.set_root(new),
        }
    }

    pub(crate) fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
        if let Some(root) = root {
            self.node_mut(root).parent = None;
        }
    }
}

/// Two trees are equal when they have the same shape with equal keys at every position. Where
/// the nodes happen to live in the arena doesn't matter.
impl<K: PartialEq> PartialEq for Tree<K> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let mut stack = vec![(self.root, other.root)];
        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    let (a, b) = (self.node(a), other.node(b));
                    if a.key != b.key {
                        return false;
                    }
                    stack.push((a.right, b.right));
                    stack.push((a.left, b.left));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<K: Eq> Eq for Tree<K> {}

/// Live nodes in pre-order, each next to its slot index. Flat, so deep trees print without deep
/// recursion.
struct DebugNodes<'t, K>(&'t Tree<K>);

impl<K: fmt::Debug> fmt::Debug for DebugNodes<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut stack: Vec<NodeId> = self.0.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = self.0.node(id);
            list.entry(&(id.index(), node));
            stack.extend(node.right);
            stack.extend(node.left);
        }
        list.finish()
    }
}

impl<K: fmt::Debug> fmt::Debug for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root.map(NodeId::index))
            .field("nodes", &DebugNodes(self))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_fixes_parent_links() {
        let mut tree = Tree::with_root(5);
        let root = tree.root().unwrap();
        let left = tree.attach(root, Side::Left, 3).unwrap();
        let right = tree.attach(root, Side::Right, 7).unwrap();
        let grandchild = tree.attach(left, Side::Right, 4).unwrap();

        assert_eq!(tree.node(root).parent(), None);
        assert_eq!(tree.node(left).parent(), Some(root));
        assert_eq!(tree.node(right).parent(), Some(root));
        assert_eq!(tree.node(grandchild).parent(), Some(left));
        assert!(tree.node(grandchild).is_leaf());
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn attach_refuses_occupied_slot() {
        let mut tree = Tree::with_root(1);
        let root = tree.root().unwrap();
        tree.attach(root, Side::Left, 2).unwrap();

        assert_eq!(
            tree.attach(root, Side::Left, 3),
            Err(Error::Occupied {
                parent: root,
                side: Side::Left
            })
        );
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn released_slots_are_reused() {
        let mut tree = Tree::with_root(1);
        let root = tree.root().unwrap();
        let child = tree.attach(root, Side::Left, 2).unwrap();

        tree.link(root, Side::Left, None);
        assert_eq!(tree.release(child), 2);
        assert!(tree.get(child).is_none());
        assert_eq!(tree.len(), 1);

        let again = tree.attach(root, Side::Right, 3).unwrap();
        assert_eq!(again, child);
        assert_eq!(tree.key(again), &3);
    }

    #[test]
    #[should_panic(expected = "does not refer to a live node")]
    fn stale_id_panics() {
        let mut tree = Tree::with_root(1);
        let root = tree.root().unwrap();
        let child = tree.attach(root, Side::Left, 2).unwrap();
        tree.link(root, Side::Left, None);
        tree.release(child);

        tree.node(child);
    }

    #[test]
    fn equality_ignores_arena_layout() {
        let mut a = Tree::with_root(1);
        let root = a.root().unwrap();
        a.attach(root, Side::Left, 2).unwrap();
        a.attach(root, Side::Right, 3).unwrap();

        let mut b = Tree::with_root(1);
        let root = b.root().unwrap();
        b.attach(root, Side::Right, 3).unwrap();
        b.attach(root, Side::Left, 2).unwrap();

        assert_eq!(a, b);

        let mut c = Tree::with_root(1);
        let root = c.root().unwrap();
        let two = c.attach(root, Side::Left, 2).unwrap();
        c.attach(two, Side::Left, 3).unwrap();

        assert_ne!(a, c);
        assert_eq!(Tree::<i32>::new(), Tree::new());
    }

    #[test]
    fn key_mut_writes_through() {
        let mut tree = Tree::with_root(1);
        let root = tree.root().unwrap();
        *tree.key_mut(root) = 10;

        assert_eq!(tree.key(root), &10);
    }

    #[test]
    fn clear_empties() {
        let mut tree = Tree::with_root(1);
        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
    }

    #[test]
    fn debug_lists_nodes_in_preorder() {
        let mut tree = Tree::with_root(5);
        let root = tree.root().unwrap();
        tree.attach(root, Side::Right, 7).unwrap();
        tree.attach(root, Side::Left, 3).unwrap();

        let debug = format!("{:?}", tree);
        assert!(debug.starts_with("Tree { len: 3, root: Some(0), nodes: ["));
        let (five, three, seven) = (
            debug.find("key: 5").unwrap(),
            debug.find("key: 3").unwrap(),
            debug.find("key: 7").unwrap(),
        );
        assert!(five < three && three < seven);

        assert_eq!(
            format!("{:?}", Tree::<i32>::new()),
            "Tree { len: 0, root: None, nodes: [] }"
        );
    }

    #[test]
    fn debug_handles_deep_trees() {
        let keys: Vec<i32> = (0..100_000).collect();
        let tree = Tree::from_bst_preorder(&keys);

        let debug = format!("{:?}", tree);
        assert!(debug.contains("key: 99999"));
    }
}
