use std::fmt;

use log::debug;

/// A singly linked list of `i32` addressed by zero-based logical index.
///
/// A sentinel node sits in front of index 0, so inserting or deleting at the head walks the
/// same path as any other position. `size` always equals the number of nodes after the
/// sentinel.
pub struct MyLinkedList {
    sentinel: Node,
    size: usize,
}

struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

impl Node {
    fn new(value: i32, next: Option<Box<Node>>) -> Node {
        Node { value, next }
    }
}

/// Converts a caller-supplied index into a position, rejecting negatives and anything at or
/// past `bound`.
fn position(index: i32, bound: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < bound)
}

impl Default for MyLinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl MyLinkedList {
    pub fn new() -> MyLinkedList {
        MyLinkedList {
            sentinel: Node::new(0, None),
            size: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value at `index`, or `None` if `index` is negative or `>= len()`.
    pub fn get(&self, index: i32) -> Option<i32> {
        let index = position(index, self.size)?;
        self.iter().nth(index)
    }

    pub fn add_at_head(&mut self, value: i32) {
        self.insert(0, value);
    }

    pub fn add_at_tail(&mut self, value: i32) {
        self.insert(self.size, value);
    }

    /// Inserts `value` so that it ends up at `index`. `index == len()` appends. Any other
    /// out-of-range index leaves the list untouched.
    pub fn add_at_index(&mut self, index: i32, value: i32) {
        match position(index, self.size + 1) {
            Some(index) => self.insert(index, value),
            None => debug!(
                "ignoring add_at_index({}, {}): list has {} elements",
                index, value, self.size
            ),
        }
    }

    /// Removes the element at `index`. Out-of-range indices leave the list untouched.
    pub fn delete_at_index(&mut self, index: i32) {
        match position(index, self.size) {
            Some(index) => self.remove(index),
            None => debug!(
                "ignoring delete_at_index({}): list has {} elements",
                index, self.size
            ),
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.sentinel.next.as_deref(),
        }
    }

    /// Walks `index` links from the sentinel. The result is the node whose `next` holds
    /// logical position `index`.
    fn node_before(&mut self, index: usize) -> Option<&mut Node> {
        let mut prev = &mut self.sentinel;
        for _ in 0..index {
            prev = prev.next.as_deref_mut()?;
        }
        Some(prev)
    }

    fn insert(&mut self, index: usize, value: i32) {
        if let Some(prev) = self.node_before(index) {
            prev.next = Some(Box::new(Node::new(value, prev.next.take())));
            self.size += 1;
        }
    }

    fn remove(&mut self, index: usize) {
        if let Some(prev) = self.node_before(index) {
            if let Some(removed) = prev.next.take() {
                prev.next = removed.next;
                self.size -= 1;
            }
        }
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value
        })
    }
}

impl<'a> IntoIterator for &'a MyLinkedList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<i32> for MyLinkedList {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        let size = self.size;
        let mut added = 0;
        if let Some(mut last) = self.node_before(size) {
            for value in iter {
                last = &mut **last.next.insert(Box::new(Node::new(value, None)));
                added += 1;
            }
        }
        self.size += added;
    }
}

impl FromIterator<i32> for MyLinkedList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = MyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl fmt::Display for MyLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for MyLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Drop for MyLinkedList {
    fn drop(&mut self) {
        let mut current = self.sentinel.next.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl Clone for MyLinkedList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for MyLinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl Eq for MyLinkedList {}
