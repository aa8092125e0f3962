//! Order List Module
//!
//! Keyed doubly linked list stored in an arena and linked by slot index.
//!
//! - Front = oldest key
//! - Back = newest key
//!
//! A `HashMap` maps each key to its slot, so push, move-to-back and remove
//! are all O(1). Freed slots are recycled through a free list.

use std::collections::HashMap;
use std::hash::Hash;

/// Null link.
const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Node<K> {
    key: K,
    prev: usize,
    next: usize,
}

// == Order List ==
/// Ordered key set with O(1) reordering.
#[derive(Debug)]
pub struct OrderList<K> {
    /// Key -> slot index
    index: HashMap<K, usize>,
    /// Node arena; `None` marks a free slot
    slots: Vec<Option<Node<K>>>,
    /// Recyclable slot indices
    free: Vec<usize>,
    head: usize,
    tail: usize,
}

impl<K> Default for OrderList<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            slots: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
        }
    }
}

impl<K: Hash + Eq + Clone> OrderList<K> {
    // == Constructor ==
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    // == Length ==
    /// Returns the number of keys in the list.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Contains ==
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    // == Push Back ==
    /// Appends a key at the newest position.
    ///
    /// Returns `false` and leaves the order untouched if the key is already present.
    pub fn push_back(&mut self, key: K) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }

        let node = Node {
            key: key.clone(),
            prev: NIL,
            next: NIL,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        self.index.insert(key, idx);
        self.attach_back(idx);
        true
    }

    // == Move To Back ==
    /// Moves a key to the newest position. Returns `false` if the key is absent.
    pub fn move_to_back(&mut self, key: &K) -> bool {
        let Some(&idx) = self.index.get(key) else {
            return false;
        };

        if self.tail != idx {
            self.detach(idx);
            self.attach_back(idx);
        }
        true
    }

    // == Remove ==
    /// Unlinks a key and frees its slot. Returns `false` if the key is absent.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(idx) = self.index.remove(key) else {
            return false;
        };

        self.detach(idx);
        self.slots[idx] = None;
        self.free.push(idx);
        true
    }

    // == Front ==
    /// Returns the oldest key without removing it.
    pub fn front(&self) -> Option<&K> {
        self.node(self.head).map(|node| &node.key)
    }

    // == Back ==
    /// Returns the newest key without removing it.
    pub fn back(&self) -> Option<&K> {
        self.node(self.tail).map(|node| &node.key)
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    // == Iter ==
    /// Iterates keys from oldest to newest.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    fn node(&self, idx: usize) -> Option<&Node<K>> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node<K>> {
        self.slots.get_mut(idx).and_then(Option::as_mut)
    }

    fn detach(&mut self, idx: usize) {
        let (prev, next) = match self.node(idx) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match self.node_mut(prev) {
            Some(node) => node.next = next,
            None => self.head = next,
        }
        match self.node_mut(next) {
            Some(node) => node.prev = prev,
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(idx) {
            node.prev = NIL;
            node.next = NIL;
        }
    }

    fn attach_back(&mut self, idx: usize) {
        let old_tail = self.tail;
        if let Some(node) = self.node_mut(idx) {
            node.prev = old_tail;
            node.next = NIL;
        }

        match self.node_mut(old_tail) {
            Some(node) => node.next = idx,
            None => self.head = idx,
        }
        self.tail = idx;
    }
}

// == Iterator ==
/// Oldest-to-newest iterator over an [`OrderList`].
pub struct Iter<'a, K> {
    list: &'a OrderList<K>,
    current: usize,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.slots.get(self.current)?.as_ref()?;
        self.current = node.next;
        Some(&node.key)
    }
}
