//! Ordered map backed by a binary search tree
//!
//! Standalone utility with no interface to the buffer core. Keys are unique;
//! inserting an existing key replaces its value. The tree is unbalanced, so
//! operations are O(height).

use std::cmp::Ordering;

type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

/// Map over `Ord` keys with in-order traversal
#[derive(Debug)]
pub struct OrderedMap<K, V> {
    root: Link<K, V>,
    size: usize,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Insert a key/value pair, replacing the value if the key exists
    pub fn insert(&mut self, key: K, value: V) {
        if insert_node(&mut self.root, key, value) {
            self.size += 1;
        }
    }

    /// Remove a key, returning its value if present
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let removed = remove_node(&mut self.root, key);
        if removed.is_some() {
            self.size -= 1;
        }
        removed
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Get the value for a key
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut link = &self.root;
        while let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => link = &node.left,
                Ordering::Greater => link = &node.right,
            }
        }
        None
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Apply `action` to every entry in ascending key order
    pub fn for_each<F: FnMut(&K, &V)>(&self, mut action: F) {
        visit(&self.root, &mut action);
    }
}

/// Returns true when a new node was created (as opposed to a replacement)
fn insert_node<K: Ord, V>(link: &mut Link<K, V>, key: K, value: V) -> bool {
    match link {
        None => {
            *link = Some(Box::new(Node {
                key,
                value,
                left: None,
                right: None,
            }));
            true
        }
        Some(node) => match key.cmp(&node.key) {
            Ordering::Equal => {
                node.value = value;
                false
            }
            Ordering::Less => insert_node(&mut node.left, key, value),
            Ordering::Greater => insert_node(&mut node.right, key, value),
        },
    }
}

fn remove_node<K: Ord, V>(link: &mut Link<K, V>, key: &K) -> Option<V> {
    match key.cmp(&link.as_ref()?.key) {
        Ordering::Less => remove_node(&mut link.as_mut()?.left, key),
        Ordering::Greater => remove_node(&mut link.as_mut()?.right, key),
        Ordering::Equal => {
            let mut node = link.take()?;
            match (node.left.take(), node.right.take()) {
                (None, None) => {}
                (Some(child), None) | (None, Some(child)) => *link = Some(child),
                (Some(left), Some(right)) => {
                    // Splice the in-order successor into this position
                    let mut right_link = Some(right);
                    let mut successor = detach_min(&mut right_link)?;
                    successor.left = Some(left);
                    successor.right = right_link;
                    *link = Some(successor);
                }
            }
            Some(node.value)
        }
    }
}

/// Detach the minimum node of a non-empty subtree
fn detach_min<K: Ord, V>(link: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
    if link.as_ref()?.left.is_some() {
        detach_min(&mut link.as_mut()?.left)
    } else {
        let mut detached = link.take()?;
        *link = detached.right.take();
        Some(detached)
    }
}

fn visit<K, V, F: FnMut(&K, &V)>(link: &Link<K, V>, action: &mut F) {
    if let Some(node) = link {
        visit(&node.left, action);
        action(&node.key, &node.value);
        visit(&node.right, action);
    }
}
