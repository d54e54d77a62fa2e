use super::node::Node;

/// Return whether `key` is stored in the tree rooted at `root`
pub fn search<T: Ord>(root: Option<&Node<T>>, key: &T) -> bool {
    let mut node = match root {
        Some(root) => root,
        None => return false,
    };
    loop {
        match node.find(key) {
            Ok(_) => return true,
            Err(_) if node.is_leaf() => return false,
            Err(index) => node = &*node.children[index],
        }
    }
}
