use super::delete::take_from_root;
use super::insert::insert_into_root;
use super::node::Node;
use super::search::search;
use super::validate::{validate, InvariantViolation};
use super::*;
use std::collections::VecDeque;
use std::fmt;

/// A B-tree of fixed order owning its root.
/// Every mutation is applied in place; `clone` gives an independent snapshot
#[derive(Clone, PartialEq, Eq)]
pub struct BTree<T> {
    root: Option<Box<Node<T>>>,
    order: Order,
    len: usize,
}

impl<T> BTree<T> {
    /// Create an empty tree of the default order
    pub fn new() -> Self {
        BTree::with_order(Order::default())
    }

    pub fn with_order(order: Order) -> Self {
        BTree {
            root: None,
            order,
            len: 0,
        }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    /// Return the total number of keys present in the tree
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Root node, or `None` for an empty tree
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Number of levels (0 for an empty tree, 1 for a lone leaf)
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Return a sorted iterator over references to keys in the tree
    pub fn iter(&self) -> TreeIter<'_, T> {
        TreeIter::new(self)
    }

    /// Keys of every node, level by level from the root and left to right
    /// within a level. This is the layout a drawing of the tree follows
    pub fn levels(&self) -> Vec<Vec<&[T]>> {
        let mut levels = vec![];
        let mut queue: VecDeque<(&Node<T>, usize)> = VecDeque::new();
        if let Some(root) = self.root() {
            queue.push_back((root, 0));
        }
        while let Some((node, depth)) = queue.pop_front() {
            if levels.len() == depth {
                levels.push(vec![]);
            }
            levels[depth].push(node.keys());
            queue.extend(node.children().map(|child| (child, depth + 1)));
        }
        levels
    }

    /// Drop every key
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Give up the tree, keeping its root
    pub fn into_root(self) -> Option<Box<Node<T>>> {
        self.root
    }
}

impl<T: Ord> BTree<T> {
    /// Adopt a root built elsewhere, after checking it is a valid tree of `order`
    pub fn from_root(root: Option<Box<Node<T>>>, order: Order) -> Result<Self, InvariantViolation> {
        let len = validate(root.as_deref(), order)?;
        Ok(BTree { root, order, len })
    }

    /// Return whether `key` is in the tree
    pub fn contains(&self, key: &T) -> bool {
        let found = search(self.root(), key);
        tracing::trace!(found, "search");
        found
    }

    /// Insert a new key. Return `false`, leaving the tree as it was, if the
    /// key is already present
    pub fn insert(&mut self, key: T) -> bool {
        let inserted = match &mut self.root {
            None => {
                self.root = Some(Box::new(Node::leaf_with(key)));
                true
            }
            Some(root) => insert_into_root(root, key, self.order),
        };
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Remove `key` from the tree. Return `false` if it was not there
    pub fn delete(&mut self, key: &T) -> bool {
        self.take(key).is_some()
    }

    /// Remove `key` from the tree and return the stored key
    pub fn take(&mut self, key: &T) -> Option<T> {
        let removed = take_from_root(&mut self.root, key, self.order);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Check every B-tree invariant, as well as the recorded number of keys
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let counted = validate(self.root(), self.order)?;
        if counted != self.len {
            return Err(InvariantViolation::LenMismatch {
                recorded: self.len,
                counted,
            });
        }
        Ok(())
    }
}

impl<T> Default for BTree<T> {
    fn default() -> Self {
        BTree::new()
    }
}

impl<T: Ord> std::iter::FromIterator<T> for BTree<T> {
    /// Create a tree of the default order from an iterator. Repeated keys are kept once
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BTree (order = {}, len = {})", self.order, self.len)?;
        for (depth, level) in self.levels().iter().enumerate() {
            write!(f, "  {:>3}:", depth)?;
            for keys in level {
                write!(f, " {:?}", keys)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_tree() {
        let tree: BTree<i32> = BTree::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert!(tree.root().is_none());
        assert!(tree.levels().is_empty());
        assert_eq!(tree.order(), Order::default());
        assert!(!tree.contains(&1));
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn insert_and_delete() {
        let mut tree = BTree::new();
        assert!(tree.insert(3));
        assert!(tree.insert(1));
        assert!(!tree.insert(3));
        assert_eq!(tree.len(), 2);
        assert!(tree.contains(&1));

        assert!(tree.delete(&3));
        assert!(!tree.delete(&3));
        assert_eq!(tree.take(&1), Some(1));
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn levels() {
        let tree: BTree<i32> = vec![10, 20, 5, 6, 12, 30, 7, 17].into_iter().collect();
        let levels = tree.levels();
        assert_eq!(levels.len(), tree.height());
        assert_eq!(levels[0], vec![&[10, 20][..]]);
        assert_eq!(levels[1], vec![&[5, 6, 7][..], &[12, 17][..], &[30][..]]);
    }

    #[test]
    fn larger_order() {
        let order = Order::new(8).unwrap();
        let mut tree = BTree::with_order(order);
        tree.extend(0..1000);
        assert_eq!(tree.validate(), Ok(()));
        for key in (0..1000).step_by(3) {
            assert!(tree.delete(&key));
        }
        assert_eq!(tree.validate(), Ok(()));
        assert_eq!(tree.len(), 666);
        assert!(tree.iter().all(|key| key % 3 != 0));
    }

    #[test]
    fn clone_is_a_snapshot() {
        let mut tree: BTree<i32> = (0..20).collect();
        let snapshot = tree.clone();
        tree.delete(&5);
        tree.insert(100);
        assert!(snapshot.contains(&5));
        assert!(!snapshot.contains(&100));
        assert_eq!(snapshot.len(), 20);
        assert_ne!(tree, snapshot);
    }

    #[test]
    fn from_root() {
        let tree: BTree<i32> = (0..50).collect();
        let order = tree.order();
        let adopted = BTree::from_root(tree.clone().into_root(), order).unwrap();
        assert_eq!(adopted, tree);

        // Nodes of an order 4 tree are far below the order 32 minimum
        let wide = Order::new(32).unwrap();
        assert!(matches!(
            BTree::from_root(tree.into_root(), wide),
            Err(InvariantViolation::TooFewKeys { .. })
        ));
    }

    #[test]
    fn clear() {
        let mut tree: BTree<i32> = (0..10).collect();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.iter().next(), None);
        tree.insert(4);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn debug() {
        let tree: BTree<i32> = vec![10, 20, 5, 6].into_iter().collect();
        let out = format!("{:?}", tree);
        assert_eq!(out, "BTree (order = 4, len = 4)\n    0: [10]\n    1: [5, 6] [20]\n");
    }
}
