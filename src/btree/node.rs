use super::*;
use std::mem;

/// A single B-tree node. Keys and children live inline; children are owned
/// exclusively by their parent
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub(super) keys: ArrayVec<T, MAX_KEYS>,
    pub(super) children: ArrayVec<Box<Node<T>>, MAX_ORDER>,
}

impl<T> Node<T> {
    pub(super) fn new() -> Self {
        Node {
            keys: ArrayVec::new(),
            children: ArrayVec::new(),
        }
    }

    /// Build a leaf holding a single key
    pub(super) fn leaf_with(key: T) -> Self {
        let mut node = Node::new();
        node.keys.push(key);
        node
    }

    /// Keys of this node, in ascending order
    pub fn keys(&self) -> &[T] {
        &self.keys
    }

    /// Children of this node, left to right. Empty for leaves
    pub fn children(&self) -> impl ExactSizeIterator<Item = &Node<T>> + '_ {
        self.children.iter().map(|child| &**child)
    }

    /// Return whether the node is a leaf
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Return the total number of keys in this node
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Classify this node by how many keys it holds
    pub fn state(&self, order: Order) -> NodeState {
        if self.len() >= order.max_keys() {
            NodeState::Full
        } else if self.len() <= order.min_keys() {
            NodeState::Minimal
        } else {
            NodeState::Normal
        }
    }

    /// Number of levels from this node down to its leaves (a leaf is 1)
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = self;
        while let Some(child) = node.children.first() {
            node = &**child;
            height += 1;
        }
        height
    }

    /// Split the full child at `index` around its median. The median moves up
    /// into this node at `index` and the upper half becomes a new sibling at
    /// `index + 1`.
    /// This node must not be full itself
    pub(super) fn split_child(&mut self, index: usize, order: Order) {
        // Sanity checks
        assert!(self.keys.len() < order.max_keys());
        assert_eq!(self.children[index].len(), order.max_keys());

        let at = order.split_at();
        let child = &mut self.children[index];
        let mut sibling = Node::new();
        sibling.keys.extend(child.keys.drain(at + 1..));
        if !child.is_leaf() {
            sibling.children.extend(child.children.drain(at + 1..));
        }
        let median = child.keys.remove(at);

        self.keys.insert(index, median);
        self.children.insert(index + 1, Box::new(sibling));
        tracing::debug!(index, half = at, "split full child");
    }

    /// Make sure the child at `index` can lose a key: borrow one from a sibling
    /// if possible, otherwise merge it with a sibling.
    /// Return the index of the child that now covers the old child's range
    pub(super) fn fix_child(&mut self, index: usize, order: Order) -> usize {
        let min = order.min_keys();
        if index > 0 && self.children[index - 1].len() > min {
            self.borrow_from_left(index);
            index
        } else if index + 1 < self.children.len() && self.children[index + 1].len() > min {
            self.borrow_from_right(index);
            index
        } else if index > 0 {
            self.merge_children(index - 1);
            index - 1
        } else {
            self.merge_children(index);
            index
        }
    }

    /// Rotate the last key of `children[index - 1]` up through `keys[index - 1]`
    /// and the separator down into the front of `children[index]`
    fn borrow_from_left(&mut self, index: usize) {
        let (head, tail) = self.children.split_at_mut(index);
        let sibling = &mut head[index - 1];
        let child = &mut tail[0];

        let last = sibling.keys.len() - 1;
        let lifted = sibling.keys.remove(last);
        let lowered = mem::replace(&mut self.keys[index - 1], lifted);
        child.keys.insert(0, lowered);
        if let Some(edge) = sibling.children.pop() {
            child.children.insert(0, edge);
        }
        tracing::debug!(index, "borrowed key from left sibling");
    }

    /// Mirror of `borrow_from_left`: rotate the first key of `children[index + 1]`
    /// up through `keys[index]` and the separator down into `children[index]`
    fn borrow_from_right(&mut self, index: usize) {
        let (head, tail) = self.children.split_at_mut(index + 1);
        let child = &mut head[index];
        let sibling = &mut tail[0];

        let lifted = sibling.keys.remove(0);
        let lowered = mem::replace(&mut self.keys[index], lifted);
        child.keys.push(lowered);
        if !sibling.is_leaf() {
            child.children.push(sibling.children.remove(0));
        }
        tracing::debug!(index, "borrowed key from right sibling");
    }

    /// Pull `keys[index]` down and append it, followed by everything in
    /// `children[index + 1]`, to `children[index]`. The emptied sibling slot is removed
    fn merge_children(&mut self, index: usize) {
        let separator = self.keys.remove(index);
        let right = self.children.remove(index + 1);
        let left = &mut self.children[index];

        let Node { keys, children } = *right;
        left.keys.push(separator);
        left.keys.extend(keys);
        left.children.extend(children);
        tracing::debug!(index, len = left.keys.len(), "merged siblings");
    }

    /// Remove and return the largest key of this subtree, fixing minimal
    /// children on the way down. This node must be able to lose a key
    pub(super) fn pop_last(&mut self, order: Order) -> T {
        let mut node = self;
        loop {
            if node.is_leaf() {
                let last = node.keys.len() - 1;
                return node.keys.remove(last);
            }
            let mut index = node.children.len() - 1;
            if node.children[index].len() <= order.min_keys() {
                index = node.fix_child(index, order);
            }
            node = node.children[index].as_mut();
        }
    }
}

impl<T: Ord> Node<T> {
    /// Locate `key` in this node: `Ok` with its position if present, otherwise
    /// `Err` with the index of the child whose range covers it
    pub(super) fn find(&self, key: &T) -> Result<usize, usize> {
        self.keys.binary_search(key)
    }
}
