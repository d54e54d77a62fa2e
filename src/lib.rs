#[cfg(test)]
mod tests;

pub mod btree;

pub mod error;

pub mod key;

#[cfg(any(test, feature = "key-generator"))]
pub mod key_generator;

pub mod order;

pub use btree::{BTree, InvariantViolation, Node, NodeState};
pub use error::Error;
pub use key::{parse_key, NumericKey};
pub use order::Order;
