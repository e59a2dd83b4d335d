//! AVL tree: balanced insert/delete, floor/ceiling and in-order iteration
//! over a parent-free node arena.

pub mod iter;
pub mod node_ref;
pub mod order;
pub mod tree;
pub mod types;
pub mod util;

pub use iter::Iter;
pub use node_ref::{node_height, NodeRef};
pub use tree::AvlTree;
pub use types::{AvlNode, AvlNodeLike};
