// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::Millis;

#[derive(Clone, Copy, Debug)]
struct Entry<K> {
    key: K,
    deadline: Millis,
    seq: u64,
}

/// A small queue of keyed one-shot deadlines.
///
/// Each key has at most one pending deadline. Components typically use a
/// tiny `enum` as the key type, so the queue stores its entries inline.
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    entries: SmallVec<[Entry<K>; 4]>,
    next_seq: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            entries: SmallVec::new(),
            next_seq: 0,
        }
    }
}

impl<K: Copy + Eq> TimerQueue<K> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `key` to fire at `deadline`.
    ///
    /// A pending deadline for the same key is replaced and returned.
    pub fn schedule(&mut self, key: K, deadline: Millis) -> Option<Millis> {
        let seq = self.next_seq;
        self.next_seq += 1;
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            let previous = entry.deadline;
            entry.deadline = deadline;
            entry.seq = seq;
            return Some(previous);
        }
        self.entries.push(Entry { key, deadline, seq });
        None
    }

    /// Cancel the pending deadline for `key`. Returns `true` if one existed.
    pub fn cancel(&mut self, key: K) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != key);
        before != self.entries.len()
    }

    /// Returns the pending deadline for `key`, if any.
    #[must_use]
    pub fn deadline(&self, key: K) -> Option<Millis> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.deadline)
    }

    /// Returns `true` if `key` has a pending deadline.
    #[must_use]
    pub fn is_pending(&self, key: K) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Earliest pending deadline across all keys.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Remove and return every key whose deadline is `<= now`.
    ///
    /// Keys are ordered by deadline; equal deadlines keep scheduling order.
    pub fn poll(&mut self, now: Millis) -> Vec<K> {
        let mut due: Vec<Entry<K>> = self
            .entries
            .iter()
            .copied()
            .filter(|e| e.deadline <= now)
            .collect();
        if due.is_empty() {
            return Vec::new();
        }
        self.entries.retain(|e| e.deadline > now);
        due.sort_by_key(|e| (e.deadline, e.seq));
        due.into_iter().map(|e| e.key).collect()
    }

    /// Drop every pending deadline.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of pending deadlines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
