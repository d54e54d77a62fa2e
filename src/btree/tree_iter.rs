use super::node::Node;
use super::BTree;

struct TreeIterState<'a, T> {
    node: &'a Node<T>,
    pos: usize,
}

// Derived impls would require `T: Copy`
impl<'a, T> Clone for TreeIterState<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for TreeIterState<'a, T> {}

/// Sorted iterator over references to the keys of a `BTree`
pub struct TreeIter<'a, T> {
    /// List of parent nodes and current child position in them
    tail_states: Vec<TreeIterState<'a, T>>,
    /// The current node and the next key position to return
    head_state: Option<TreeIterState<'a, T>>,
    len: usize,
}

impl<'a, T> TreeIter<'a, T> {
    pub(super) fn new(tree: &'a BTree<T>) -> Self {
        let mut iter = TreeIter {
            tail_states: vec![],
            head_state: None,
            len: tree.len(),
        };
        if let Some(root) = tree.root() {
            iter.prepare_state_from(root);
        }
        iter
    }

    /// Make the leftmost leaf below `node` the head, stacking every node on the way
    fn prepare_state_from(&mut self, mut node: &'a Node<T>) {
        if let Some(state) = self.head_state.take() {
            self.tail_states.push(state);
        }
        while let Some(child) = node.children.first() {
            self.tail_states.push(TreeIterState { node, pos: 0 });
            node = &**child;
        }
        self.head_state = Some(TreeIterState { node, pos: 0 });
    }
}

impl<'a, T> Iterator for TreeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let TreeIterState { node, pos } = self.head_state?;
            if pos < node.len() {
                // Iterate in node
                let key = &node.keys()[pos];
                self.head_state = Some(TreeIterState { node, pos: pos + 1 });
                if let Some(child) = node.children.get(pos + 1) {
                    self.prepare_state_from(&**child);
                }
                self.len -= 1;
                return Some(key);
            }
            // Walk back up the chain
            self.head_state = self.tail_states.pop();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> ExactSizeIterator for TreeIter<'a, T> {}
impl<'a, T> std::iter::FusedIterator for TreeIter<'a, T> {}

impl<'a, T> IntoIterator for &'a BTree<T> {
    type Item = &'a T;
    type IntoIter = TreeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
