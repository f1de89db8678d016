//! Memo tables for the top-down solver.
//!
//! | Policy | Lookup | Memory | Eviction |
//! |--------|--------|--------|----------|
//! | [`CachePolicy::Unbounded`] | O(1) | every subproblem | none |
//! | [`CachePolicy::Lru`] | O(log k) | at most `k` entries | least recently used |

use super::config::CachePolicy;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// A memo table keyed by subproblem.
pub(crate) enum MemoCache<K> {
    Unbounded(HashMapMemo<K>),
    Lru(LruMemo<K>),
}

impl<K: Copy + Eq + Hash> MemoCache<K> {
    pub fn new(policy: CachePolicy) -> Self {
        match policy {
            CachePolicy::Unbounded => MemoCache::Unbounded(HashMapMemo::default()),
            CachePolicy::Lru { capacity } => MemoCache::Lru(LruMemo::new(capacity)),
        }
    }

    pub fn get(&mut self, key: &K) -> Option<f64> {
        match self {
            MemoCache::Unbounded(memo) => memo.get(key),
            MemoCache::Lru(memo) => memo.get(key),
        }
    }

    pub fn insert(&mut self, key: K, value: f64) {
        match self {
            MemoCache::Unbounded(memo) => memo.insert(key, value),
            MemoCache::Lru(memo) => memo.insert(key, value),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            MemoCache::Unbounded(memo) => memo.map.len(),
            MemoCache::Lru(memo) => memo.entries.len(),
        }
    }

    pub fn hits(&self) -> usize {
        match self {
            MemoCache::Unbounded(memo) => memo.hits,
            MemoCache::Lru(memo) => memo.hits,
        }
    }

    pub fn misses(&self) -> usize {
        match self {
            MemoCache::Unbounded(memo) => memo.misses,
            MemoCache::Lru(memo) => memo.misses,
        }
    }
}

/// Unbounded memo backed by a [`HashMap`].
pub(crate) struct HashMapMemo<K> {
    map: HashMap<K, f64>,
    hits: usize,
    misses: usize,
}

impl<K> Default for HashMapMemo<K> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }
}

impl<K: Eq + Hash> HashMapMemo<K> {
    fn get(&mut self, key: &K) -> Option<f64> {
        let found = self.map.get(key).copied();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    fn insert(&mut self, key: K, value: f64) {
        self.map.insert(key, value);
    }
}

/// Bounded memo with least-recently-used eviction.
///
/// Each entry carries the tick of its last use; `order` maps ticks back to
/// keys so the oldest entry is the first in the tree.
pub(crate) struct LruMemo<K> {
    capacity: usize,
    entries: HashMap<K, (f64, u64)>,
    order: BTreeMap<u64, K>,
    tick: u64,
    hits: usize,
    misses: usize,
}

impl<K: Copy + Eq + Hash> LruMemo<K> {
    fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::with_capacity(capacity.min(1 << 16)),
            order: BTreeMap::new(),
            tick: 0,
            hits: 0,
            misses: 0,
        }
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    fn get(&mut self, key: &K) -> Option<f64> {
        let tick = self.next_tick();
        match self.entries.get_mut(key) {
            Some((value, used)) => {
                self.order.remove(&*used);
                *used = tick;
                self.order.insert(tick, *key);
                self.hits += 1;
                Some(*value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    fn insert(&mut self, key: K, value: f64) {
        let tick = self.next_tick();
        if let Some((_, used)) = self.entries.get(&key) {
            self.order.remove(used);
        } else if self.entries.len() >= self.capacity {
            if let Some((_, oldest)) = self.order.pop_first() {
                self.entries.remove(&oldest);
            }
        }
        self.entries.insert(key, (value, tick));
        self.order.insert(tick, key);
    }
}
