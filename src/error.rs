use crate::order::{MAX_ORDER, MIN_ORDER};
use thiserror::Error;

/// Errors raised while configuring a tree or validating caller input.
/// The tree operations themselves never fail once an `Order` exists
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("order {0} is too small, the minimum is {}", MIN_ORDER)]
    OrderTooSmall(usize),
    #[error("order {0} exceeds the maximum of {}", MAX_ORDER)]
    OrderTooLarge(usize),
    #[error("order {0} is odd, a full node must split into two equal halves")]
    OddOrder(usize),
    #[error("invalid order {0:?}: not an unsigned integer")]
    UnparsableOrder(String),
    #[error("invalid key {0:?}: not a finite number")]
    InvalidKey(String),
}
