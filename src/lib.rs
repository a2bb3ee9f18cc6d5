//! This crate is a binary tree engine: one arena-backed [`Tree`] type plus the classic
//! algorithms over it, mostly for educational purposes.
//!
//! ## Binary Tree
//!
//! A binary tree is built from `Node`s. Every `Node` stores a key and has at most two children,
//! `left` and `right`. A `Node` with no children is called a "leaf node". Here every `Node` also
//! remembers its parent, so the tree can be walked upwards as well as downwards.
//!
//! A [`Tree`] may have any shape. Trees built through [`Tree::insert`], [`Tree::from_sorted`]
//! or [`Tree::from_bst_preorder`] additionally satisfy the Binary Search Tree (BST) invariant:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key strictly less than its own
//!    key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key strictly greater than its
//!    own key.
//!
//! The search operations ([`Tree::find`], [`Tree::floor`], [`Tree::lca_bst`], ...) assume that
//! invariant and take `O(height)`. [`Tree::is_valid_bst`] checks it.
//!
//! [`Tree::insert`] still accepts a key that is already present and sends it to the left
//! subtree, so in-order output stays sorted. A tree holding such a duplicate breaks the strict
//! invariant, and [`Tree::is_valid_bst`] reports it as invalid.
//!
//! ## What's here
//!
//! - Depth-first traversals with explicit stacks, including all three orders from one walk
//!   ([`Tree::traversals`]), and in-place flattening.
//! - Breadth-first views: level order, zig-zag, side/top/bottom views, vertical order,
//!   boundary, and maximum width.
//! - Morris (threaded) traversals that use O(1) extra space and always put the tree back the
//!   way they found it, even when interrupted.
//! - A resumable in-order cursor, [`BstIter`], and the two-pointer sum search built on it.
//! - BST insert, delete, floor/ceil, validation, recovery of two swapped keys, and the largest
//!   BST subtree sum.
//! - Four flavours of lowest common ancestor.
//! - Reconstruction from traversals or sorted keys.
//! - A level-order text [`codec`].
//!
//! ## Examples
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
//! assert_eq!(tree.floor(&65), Some(&60));
//! assert!(tree.two_sum(130));
//!
//! let copy: Tree<i32> = tree.to_string().parse().unwrap();
//! assert_eq!(copy, tree);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod bst;
mod build;
pub mod codec;
mod error;
mod iter;
mod lca;
mod level;
mod morris;
mod node;
mod shape;
mod traversal;


pub use error::{Error, Result};
pub use iter::{BstIter, Direction};
pub use node::{Node, NodeId, Side, Tree};
pub use traversal::Traversals;
