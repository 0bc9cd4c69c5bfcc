// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Singly linked node chain with O(1) append and prepend.
//!
//! Nodes live in a slot arena owned by the store and link to their successor
//! by slot index, so the chain is an ordinary owned value: no raw pointers, no
//! `Rc`, nothing to leak. Ownership runs head to tail through the `next`
//! links; `head` and `tail` are plain indices into the arena and never own
//! anything. Removed nodes drop their value at once and return their slot to
//! a free list. Once vacant slots outnumber live nodes the arena is rebuilt
//! in chain order, so a list that shrinks gives its memory back.
//!
//! # Invariants
//!
//! - walking `next` from `head` visits exactly `count` nodes and stops at `tail`
//! - `head.is_none() == tail.is_none() == (count == 0)`
//! - `tail.next` is always `None`
//! - occupied slots == `count`
//!
//! `verify()` checks all of these by walking the chain. Debug builds run the
//! O(1) part (`check_ends`) after every mutation and the full walk after bulk
//! builds and compaction.

use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::contracts::InvariantError;
use crate::error::{check_index, check_insertion_point, check_range, Result, SequenceError};

type NodeId = usize;

struct Node<T> {
    value: T,
    next: Option<NodeId>,
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeId> },
}

/// Singly linked list backed by a node arena.
pub struct ListStore<T> {
    slots: Vec<Slot<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    count: usize,
    free: Option<NodeId>,
    vacant: usize,
}

impl<T> ListStore<T> {
    /// Empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            count: 0,
            free: None,
            vacant: 0,
        }
    }

    /// Number of live nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        match &self.slots[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("chain links to vacant slot {}", id),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.slots[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("chain links to vacant slot {}", id),
        }
    }

    fn alloc(&mut self, value: T, next: Option<NodeId>) -> NodeId {
        let node = Slot::Occupied(Node { value, next });
        match self.free {
            Some(id) => {
                self.free = match self.slots[id] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at live slot {}", id),
                };
                self.slots[id] = node;
                self.vacant -= 1;
                id
            }
            None => {
                self.slots.push(node);
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<T> {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        self.free = Some(id);
        self.vacant += 1;
        match std::mem::replace(&mut self.slots[id], vacant) {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("released vacant slot {}", id),
        }
    }

    /// Slot of the node at `index`. Caller has bounds-checked.
    fn nth_id(&self, index: usize) -> NodeId {
        let mut cursor = self.head;
        for _ in 0..index {
            cursor = cursor.and_then(|id| self.node(id).next);
        }
        match cursor {
            Some(id) => id,
            None => unreachable!("index {} past the end of a {}-node chain", index, self.count),
        }
    }

    fn check_occupied_index(&self, index: usize) -> Result<()> {
        if self.count == 0 {
            return Err(SequenceError::EmptyContainer);
        }
        check_index(index, self.count)
    }

    /// First element. O(1).
    pub fn first(&self) -> Result<&T> {
        match self.head {
            Some(id) => Ok(&self.node(id).value),
            None => Err(SequenceError::EmptyContainer),
        }
    }

    /// Last element. O(1).
    pub fn last(&self) -> Result<&T> {
        match self.tail {
            Some(id) => Ok(&self.node(id).value),
            None => Err(SequenceError::EmptyContainer),
        }
    }

    /// Element at `index`. O(index).
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_occupied_index(index)?;
        Ok(&self.node(self.nth_id(index)).value)
    }

    /// Mutable element at `index`. O(index).
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_occupied_index(index)?;
        let id = self.nth_id(index);
        Ok(&mut self.node_mut(id).value)
    }

    /// Replace the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        Ok(std::mem::replace(self.get_mut(index)?, value))
    }

    /// Add `value` after the tail. O(1).
    pub fn append(&mut self, value: T) {
        let id = self.alloc(value, None);
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.count += 1;
        crate::contracts::check_list_ends(self);
    }

    /// Add `value` before the head. O(1).
    pub fn prepend(&mut self, value: T) {
        let id = self.alloc(value, self.head);
        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.count += 1;
        crate::contracts::check_list_ends(self);
    }

    /// Insert `value` so that it ends up at `index`. O(index).
    ///
    /// `index == len()` appends.
    pub fn insert_at(&mut self, value: T, index: usize) -> Result<()> {
        check_insertion_point(index, self.count)?;
        if index == 0 {
            self.prepend(value);
        } else if index == self.count {
            self.append(value);
        } else {
            let prev = self.nth_id(index - 1);
            let next = self.node(prev).next;
            let id = self.alloc(value, next);
            self.node_mut(prev).next = Some(id);
            self.count += 1;
            crate::contracts::check_list_ends(self);
        }
        Ok(())
    }

    /// Unlink and return the element at `index`. O(index).
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_occupied_index(index)?;
        let removed = if index == 0 {
            let id = self.nth_id(0);
            let node = self.release(id);
            self.head = node.next;
            if self.head.is_none() {
                self.tail = None;
            }
            node
        } else {
            let prev = self.nth_id(index - 1);
            let id = match self.node(prev).next {
                Some(id) => id,
                None => unreachable!("predecessor of index {} is the tail", index),
            };
            let node = self.release(id);
            self.node_mut(prev).next = node.next;
            if self.tail == Some(id) {
                self.tail = Some(prev);
            }
            node
        };
        self.count -= 1;
        if self.vacant > self.count {
            self.compact();
        } else {
            crate::contracts::check_list_ends(self);
        }
        Ok(removed.value)
    }

    /// Rebuild the arena with live nodes only, in chain order.
    ///
    /// O(count). Runs when vacant slots outnumber live nodes, which takes at
    /// least `count` removals since the last rebuild.
    fn compact(&mut self) {
        let mut old = std::mem::take(&mut self.slots);
        let mut slots = Vec::with_capacity(self.count);
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = match std::mem::replace(&mut old[id], Slot::Vacant { next_free: None }) {
                Slot::Occupied(node) => node,
                Slot::Vacant { .. } => unreachable!("chain links to vacant slot {}", id),
            };
            cursor = node.next;
            let next = cursor.map(|_| slots.len() + 1);
            slots.push(Slot::Occupied(Node {
                value: node.value,
                next,
            }));
        }
        self.head = if slots.is_empty() { None } else { Some(0) };
        self.tail = slots.len().checked_sub(1);
        self.slots = slots;
        self.free = None;
        self.vacant = 0;
        crate::contracts::check_list_store(self);
    }

    /// Arena slots in use or on the free list.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Iterate head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            store: self,
            cursor: self.head,
            remaining: self.count,
        }
    }

    /// The invariants that hold without walking the chain. O(1).
    ///
    /// Ends are present exactly when the list is non-empty, the tail has no
    /// successor, and occupied slots match the count.
    pub fn check_ends(&self) -> std::result::Result<(), InvariantError> {
        if self.head.is_none() != (self.count == 0) || self.tail.is_none() != (self.count == 0) {
            return Err(InvariantError::DanglingEnds {
                has_head: self.head.is_some(),
                has_tail: self.tail.is_some(),
                count: self.count,
            });
        }
        if let Some(tail) = self.tail {
            match self.slots.get(tail) {
                Some(Slot::Occupied(node)) if node.next.is_none() => {}
                _ => return Err(InvariantError::StaleTail),
            }
        }
        let occupied = self.slots.len().saturating_sub(self.vacant);
        if occupied != self.count {
            return Err(InvariantError::LeakedNodes {
                occupied,
                count: self.count,
            });
        }
        Ok(())
    }

    /// Walk the chain and confirm the structural invariants. O(n).
    pub fn verify(&self) -> std::result::Result<(), InvariantError> {
        self.check_ends()?;

        let mut walked = 0;
        let mut last = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = match self.slots.get(id) {
                Some(Slot::Occupied(node)) => node,
                _ => return Err(InvariantError::BrokenLink { position: walked }),
            };
            walked += 1;
            if walked > self.count {
                return Err(InvariantError::ChainLengthMismatch {
                    claimed: self.count,
                    walked,
                });
            }
            last = Some(id);
            cursor = node.next;
        }

        if walked != self.count {
            return Err(InvariantError::ChainLengthMismatch {
                claimed: self.count,
                walked,
            });
        }
        if last != self.tail {
            return Err(InvariantError::StaleTail);
        }

        let occupied = self
            .slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Occupied(_)))
            .count();
        if occupied != self.count {
            return Err(InvariantError::LeakedNodes {
                occupied,
                count: self.count,
            });
        }
        Ok(())
    }
}

impl<T: Clone> ListStore<T> {
    /// Build a list holding a copy of `items`.
    pub fn from_slice(items: &[T]) -> Self {
        items.iter().cloned().collect()
    }

    /// Copy of the half-open range `[start, end)`.
    ///
    /// Walks once to `start`, then copies `end - start` nodes. O(end).
    pub fn sub_range(&self, start: usize, end: usize) -> Result<Self> {
        check_range(start, end, self.count)?;
        Ok(self.iter().skip(start).take(end - start).cloned().collect())
    }

    /// New list: all of `self` followed by all of `other`.
    ///
    /// Never shares nodes with either input.
    pub fn concat(&self, other: &Self) -> Self {
        self.iter().chain(other.iter()).cloned().collect()
    }
}

impl<T> Default for ListStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones walk the chain so the copy comes out compact, with no free slots.
impl<T: Clone> Clone for ListStore<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for ListStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for ListStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut store = Self::new();
        for value in iter {
            store.append(value);
        }
        crate::contracts::check_list_store(&store);
        store
    }
}

impl<'a, T> IntoIterator for &'a ListStore<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Serialize> Serialize for ListStore<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.count))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

/// Head-to-tail iterator over a [`ListStore`].
pub struct Iter<'a, T> {
    store: &'a ListStore<T>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.store.node(id);
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
