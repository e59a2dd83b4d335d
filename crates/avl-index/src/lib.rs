//! Arena-backed AVL tree for ordered in-memory indexes.
//!
//! [`AvlTree`] is an ordered set (or, through [`AvlTree::insert`], a
//! multiset) over any key type with a three-way comparator. It supports
//! balanced insertion and deletion, search, floor/ceiling of a stored key
//! and ascending iteration.
//!
//! Nodes live in an [`arena::Arena`] and point at their children by slot
//! index. There are no parent links: the iterator keeps an explicit
//! ancestor stack and floor/ceiling rebuild the root-to-key path.
//!
//! ```
//! use avl_index::{AvlError, AvlTree};
//!
//! let mut tree = AvlTree::new();
//! for k in 0..100 {
//!     tree.probe(k);
//! }
//! assert_eq!(tree.floor(&30), Ok(&29));
//! assert_eq!(tree.ceiling(&99), Err(AvlError::NoCeiling));
//! assert!(tree.iter().copied().eq(0..100));
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and [`KvNode`] link traits |
//! [`arena`] | slot arena with free list |
//! [`util`] | parent-free `first`, `last`, `find`, `path_to`, `size` |
//! [`avl`] | rotations, insert/remove, floor/ceiling, iterator, [`AvlTree`] |

pub mod arena;
pub mod avl;
pub mod error;
pub mod types;
pub mod util;

pub use avl::{node_height, AvlTree, Iter, NodeRef};
pub use error::{AvlError, Result};
pub use types::{default_comparator, KvNode, Node};
