mod delete;
mod insert;
mod node;
mod search;
mod tree;
mod tree_iter;
pub mod validate;

pub use delete::delete;
pub use insert::insert;
pub use node::Node;
pub use search::search;
pub use tree::BTree;
pub use tree_iter::TreeIter;
pub use validate::{validate, InvariantViolation};

use crate::order::{Order, MAX_ORDER};
use arrayvec::ArrayVec;

// A full node of the largest accepted order
const MAX_KEYS: usize = MAX_ORDER - 1;

/// How close a node is to its size bounds. Insertion splits `Full` children
/// before entering them, deletion fixes `Minimal` children before entering them
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodeState {
    Full,
    Normal,
    Minimal,
}
