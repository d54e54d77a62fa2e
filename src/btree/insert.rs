use super::node::Node;
use super::search::search;
use super::*;
use std::mem;

/// Insert `key` into the tree rooted at `root` and return the new root.
/// A key that is already present leaves the tree untouched
pub fn insert<T: Ord>(root: Option<Box<Node<T>>>, key: T, order: Order) -> Box<Node<T>> {
    match root {
        None => Box::new(Node::leaf_with(key)),
        Some(mut root) => {
            insert_into_root(&mut root, key, order);
            root
        }
    }
}

/// Insert into a non-empty tree, growing it by one level when the root is full.
/// Return whether the key was actually inserted
pub(super) fn insert_into_root<T: Ord>(root: &mut Box<Node<T>>, key: T, order: Order) -> bool {
    if search(Some(&**root), &key) {
        tracing::trace!("duplicate key ignored");
        return false;
    }

    if root.len() == order.max_keys() {
        // Splitting reached the root: build a new root above it
        let old_root = mem::replace(root, Box::new(Node::new()));
        root.children.push(old_root);
        root.split_child(0, order);
        tracing::debug!(height = root.height(), "root split, tree grew");
    }

    root.insert_non_full(key, order);
    true
}

impl<T: Ord> Node<T> {
    /// Descend to the leaf that should hold `key`, splitting every full child
    /// before entering it, so the leaf always has room when it is reached.
    /// This node must not be full and must not already hold `key`
    fn insert_non_full(&mut self, key: T, order: Order) {
        let mut node = self;
        loop {
            let mut index = match node.find(&key) {
                Ok(_) => unreachable!("duplicates are filtered before descending"),
                Err(index) => index,
            };

            if node.is_leaf() {
                node.keys.insert(index, key);
                return;
            }

            if node.children[index].len() == order.max_keys() {
                node.split_child(index, order);
                // The promoted median now separates the two halves
                if node.keys[index] < key {
                    index += 1;
                }
            }
            node = node.children[index].as_mut();
        }
    }
}
