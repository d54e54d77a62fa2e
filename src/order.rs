use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Smallest accepted order (a 2-3-4 tree)
pub const MIN_ORDER: usize = 4;

/// Largest accepted order. Nodes store their keys and children inline, so this
/// bounds the size of every node
pub const MAX_ORDER: usize = 32;

/// The order `m` of a B-tree: the maximum number of children of any node.
///
/// Only even orders are accepted. A full node then holds an odd number of keys
/// and splitting it around the median leaves both halves with exactly
/// `ceil(m/2) - 1` keys, which is what split-before-descend insertion relies on
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Order(usize);

impl Order {
    pub fn new(order: usize) -> Result<Self, Error> {
        if order < MIN_ORDER {
            return Err(Error::OrderTooSmall(order));
        }
        if order > MAX_ORDER {
            return Err(Error::OrderTooLarge(order));
        }
        if order % 2 != 0 {
            return Err(Error::OddOrder(order));
        }
        Ok(Order(order))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Number of keys in a full node
    pub fn max_keys(self) -> usize {
        self.0 - 1
    }

    /// Fewest keys a non-root node may hold: ceil(m/2) - 1
    pub fn min_keys(self) -> usize {
        (self.0 + 1) / 2 - 1
    }

    /// 0-based index of the median key of a full node
    pub(crate) fn split_at(self) -> usize {
        self.0 / 2 - 1
    }
}

impl Default for Order {
    /// The order used by the visualizer pages
    fn default() -> Self {
        Order(4)
    }
}

impl TryFrom<usize> for Order {
    type Error = Error;

    fn try_from(order: usize) -> Result<Self, Self::Error> {
        Order::new(order)
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let order = s
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::UnparsableOrder(s.to_owned()))?;
        Order::new(order)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
