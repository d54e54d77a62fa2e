use super::node::Node;
use super::search::search;
use super::*;
use std::mem;

/// Delete `key` from the tree rooted at `root` and return the new root, which
/// is `None` once the last key is gone. Deleting an absent key is a no-op
pub fn delete<T: Ord>(root: Option<Box<Node<T>>>, key: &T, order: Order) -> Option<Box<Node<T>>> {
    let mut root = root;
    take_from_root(&mut root, key, order);
    root
}

/// Remove `key` from the tree held in `slot` and return it, shrinking the tree
/// by one level when the root runs out of keys.
/// An absent key leaves the tree untouched: no node is borrowed from or merged
pub(super) fn take_from_root<T: Ord>(
    slot: &mut Option<Box<Node<T>>>,
    key: &T,
    order: Order,
) -> Option<T> {
    if !search(slot.as_deref(), key) {
        tracing::trace!("absent key ignored");
        return None;
    }
    let root = slot.as_mut()?;
    let removed = root.take(key, order);

    if root.is_empty() {
        // Either the tree is now empty, or a merge pulled the last root key down
        *slot = root.children.pop();
        let height = slot.as_ref().map_or(0, |root| root.height());
        tracing::debug!(height, "root emptied, tree shrank");
    }
    removed
}

impl<T: Ord> Node<T> {
    /// Remove `key` from this subtree. Every child is fixed before being entered
    /// if it holds the minimum number of keys, so the node a key finally leaves
    /// never drops below the minimum itself
    fn take(&mut self, key: &T, order: Order) -> Option<T> {
        let mut node = self;
        loop {
            match node.find(key) {
                Ok(index) if node.is_leaf() => return Some(node.keys.remove(index)),
                Err(_) if node.is_leaf() => {
                    tracing::trace!("key not found");
                    return None;
                }
                Ok(index) => {
                    if node.children[index].len() <= order.min_keys() {
                        // Fixing may move `key` down into the child, so look again
                        node.fix_child(index, order);
                        continue;
                    }
                    // Replace with the in-order predecessor
                    let predecessor = node.children[index].pop_last(order);
                    return Some(mem::replace(&mut node.keys[index], predecessor));
                }
                Err(mut index) => {
                    if node.children[index].len() <= order.min_keys() {
                        index = node.fix_child(index, order);
                    }
                    node = node.children[index].as_mut();
                }
            }
        }
    }
}
