//! Structural checks for a tree. The engine never produces a tree that fails
//! them; they exist for tests and for adopting trees built elsewhere

use super::node::Node;
use super::*;
use thiserror::Error;

/// The first broken B-tree invariant found by `validate`.
/// `depth` counts edges from the root, so the root itself is at depth 0
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("root node holds no keys; an empty tree has no root")]
    EmptyRoot,
    #[error("node at depth {depth} holds {len} keys, more than the maximum of {max}")]
    TooManyKeys { depth: usize, len: usize, max: usize },
    #[error("node at depth {depth} holds {len} keys, fewer than the minimum of {min}")]
    TooFewKeys { depth: usize, len: usize, min: usize },
    #[error("keys of a node at depth {depth} are not strictly ascending")]
    KeysNotAscending { depth: usize },
    #[error("a key at depth {depth} falls outside the range set by its ancestors")]
    KeyOutOfRange { depth: usize },
    #[error("node at depth {depth} has {keys} keys but {children} children")]
    ChildCountMismatch {
        depth: usize,
        keys: usize,
        children: usize,
    },
    #[error("leaves found at depths {expected} and {found}")]
    UnevenLeafDepth { expected: usize, found: usize },
    #[error("tree records {recorded} keys but holds {counted}")]
    LenMismatch { recorded: usize, counted: usize },
}

/// Check every B-tree invariant on the tree rooted at `root` and return the
/// number of keys it holds
pub fn validate<T: Ord>(root: Option<&Node<T>>, order: Order) -> Result<usize, InvariantViolation> {
    let root = match root {
        Some(root) => root,
        None => return Ok(0),
    };
    if root.is_empty() {
        return Err(InvariantViolation::EmptyRoot);
    }
    let mut checker = Checker {
        order,
        leaf_depth: None,
    };
    checker.check(root, 0, None, None)
}

struct Checker {
    order: Order,
    leaf_depth: Option<usize>,
}

impl Checker {
    /// Check `node` and its subtree. Every key must lie strictly between `lower` and `upper`
    fn check<T: Ord>(
        &mut self,
        node: &Node<T>,
        depth: usize,
        lower: Option<&T>,
        upper: Option<&T>,
    ) -> Result<usize, InvariantViolation> {
        let len = node.len();
        if len > self.order.max_keys() {
            return Err(InvariantViolation::TooManyKeys {
                depth,
                len,
                max: self.order.max_keys(),
            });
        }
        if depth > 0 && len < self.order.min_keys() {
            return Err(InvariantViolation::TooFewKeys {
                depth,
                len,
                min: self.order.min_keys(),
            });
        }

        let keys = node.keys();
        if keys.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(InvariantViolation::KeysNotAscending { depth });
        }
        let below_lower = matches!((lower, keys.first()), (Some(lower), Some(first)) if first <= lower);
        let above_upper = matches!((upper, keys.last()), (Some(upper), Some(last)) if last >= upper);
        if below_lower || above_upper {
            return Err(InvariantViolation::KeyOutOfRange { depth });
        }

        if node.is_leaf() {
            match self.leaf_depth {
                Some(expected) if expected != depth => {
                    return Err(InvariantViolation::UnevenLeafDepth {
                        expected,
                        found: depth,
                    })
                }
                _ => self.leaf_depth = Some(depth),
            }
            return Ok(len);
        }

        if node.children.len() != len + 1 {
            return Err(InvariantViolation::ChildCountMismatch {
                depth,
                keys: len,
                children: node.children.len(),
            });
        }
        let mut count = len;
        for (i, child) in node.children().enumerate() {
            let child_lower = if i == 0 { lower } else { Some(&keys[i - 1]) };
            let child_upper = if i == len { upper } else { Some(&keys[i]) };
            count += self.check(child, depth + 1, child_lower, child_upper)?;
        }
        Ok(count)
    }
}
