//! # Robin Hood Hash Table
//!
//! This module provides a **set-like hash table** using *open addressing* with *Robin Hood*
//! displacement balancing. Values act as both key and payload: the table answers whether a
//! value is present, nothing more.
//!
//! ## Key Features
//! - **Generic** over the stored value (`T: Hash + Eq`) and the hasher builder (`S: BuildHasher`).
//! - **Robin Hood probing**: while probing, a value that has travelled farther from its ideal bucket
//!   takes the slot from one that has travelled less, which keeps probe lengths even.
//! - **Tombstones**: deletion leaves a marker so later lookups keep walking past it.
//! - **Automatic Growth**: once the live load factor exceeds the maximum, the table is rebuilt at
//!   `capacity * growth_factor`, dropping every tombstone.
//! - **Tagged slots**: every slot is `Empty`, `Tombstone` or `Occupied`, so no value is reserved as a sentinel.
//!
//! **Note**: the table is not thread-safe and offers no iteration API.
//!
//! ## Example
//! ```rust
//! use robin_hood_table::cs::hashing::robin_hood::RobinHoodTable;
//!
//! let mut table = RobinHoodTable::new();
//! assert!(table.insert("apple"));
//! assert!(!table.insert("apple"));
//! assert!(table.includes(&"apple"));
//! assert!(table.delete(&"apple"));
//! assert!(!table.includes(&"apple"));
//! ```

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash, Hasher};

use crate::error::{Error, Result};

/// Default initial capacity if unspecified.
pub const DEFAULT_CAPACITY: usize = 16;
/// Default maximum load factor. Crossing it after an insert triggers growth.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;
/// Default multiple applied to the capacity when the table grows.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// A slot is `Empty`, a `Tombstone` (held a value that was deleted) or `Occupied(value)`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot<T> {
    Empty,
    Tombstone,
    Occupied(T),
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::Empty
    }
}

/// A builder for [`RobinHoodTable`], allowing you to specify capacity, load factor, growth factor and hasher.
#[derive(Debug, Clone)]
pub struct RobinHoodBuilder<S> {
    capacity: usize,
    max_load_factor: f64,
    growth_factor: usize,
    hasher: S,
}

impl Default for RobinHoodBuilder<RandomState> {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            hasher: RandomState::new(),
        }
    }
}

impl RobinHoodBuilder<RandomState> {
    /// Create a new builder with default parameters and a `RandomState` hasher.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: BuildHasher> RobinHoodBuilder<S> {
    /// Sets the initial number of buckets. Any capacity of at least one is accepted, it is not rounded.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the maximum load factor. Must lie strictly between 0 and 1.
    pub fn with_max_load_factor(mut self, max_load_factor: f64) -> Self {
        self.max_load_factor = max_load_factor;
        self
    }

    /// Sets the multiple by which capacity grows. Must be at least 2.
    pub fn with_growth_factor(mut self, growth_factor: usize) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Replaces the hasher builder used to compute ideal buckets.
    pub fn with_hasher<H: BuildHasher>(self, hasher: H) -> RobinHoodBuilder<H> {
        RobinHoodBuilder {
            capacity: self.capacity,
            max_load_factor: self.max_load_factor,
            growth_factor: self.growth_factor,
            hasher,
        }
    }

    /// Validate the configuration and build an empty table.
    pub fn build<T: Hash + Eq>(self) -> Result<RobinHoodTable<T, S>> {
        if self.capacity == 0 {
            return Err(Error::InvalidCapacity(self.capacity));
        }
        if !(self.max_load_factor > 0.0 && self.max_load_factor < 1.0) {
            return Err(Error::InvalidLoadFactor(self.max_load_factor));
        }
        if self.growth_factor < 2 {
            return Err(Error::InvalidGrowthFactor(self.growth_factor));
        }
        if grown_capacity::<T>(self.capacity, self.growth_factor).is_none() {
            return Err(Error::CapacityOverflow {
                capacity: self.capacity,
                growth_factor: self.growth_factor,
            });
        }

        Ok(RobinHoodTable::from_config(
            self.capacity,
            self.max_load_factor,
            self.growth_factor,
            self.hasher,
        ))
    }
}

/// Open-addressed hash table storing bare values with Robin Hood displacement.
#[derive(Debug, Clone)]
pub struct RobinHoodTable<T, S = RandomState> {
    slots: Vec<Slot<T>>,
    len: usize,
    tombstones: usize,

    max_load_factor: f64,
    growth_factor: usize,
    hasher: S,
}

impl<T: Hash + Eq> RobinHoodTable<T, RandomState> {
    /// Creates an empty table with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::from_config(
            DEFAULT_CAPACITY,
            DEFAULT_MAX_LOAD_FACTOR,
            DEFAULT_GROWTH_FACTOR,
            RandomState::new(),
        )
    }

    /// Creates an empty table with `capacity` buckets and default load and growth factors.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        RobinHoodBuilder::new().with_capacity(capacity).build()
    }
}

impl<T: Hash + Eq> Default for RobinHoodTable<T, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> RobinHoodTable<T, S> {
    /// Empty table from an already validated configuration.
    fn from_config(capacity: usize, max_load_factor: f64, growth_factor: usize, hasher: S) -> Self {
        Self {
            slots: empty_slots(capacity),
            len: 0,
            tombstones: 0,
            max_load_factor,
            growth_factor,
            hasher,
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher> RobinHoodTable<T, S> {
    /// Number of values currently stored. Tombstones are not counted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no value is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets in the slot array.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots currently holding a tombstone.
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Live values divided by capacity.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Load factor above which an insert grows the table.
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Multiple applied to the capacity on each growth.
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// Insert a value, returning whether it was inserted.
    /// Returns `false` if an equal value is already stored. May grow the table.
    pub fn insert(&mut self, value: T) -> bool {
        let bucket = self.adjusted_bucket(&value);
        if matches!(&self.slots[bucket], Slot::Occupied(v) if *v == value) {
            return false;
        }

        self.place(value);
        self.maybe_rehash();
        true
    }

    /// Whether the table holds `value`.
    pub fn includes(&self, value: &T) -> bool {
        let bucket = self.adjusted_bucket(value);
        matches!(&self.slots[bucket], Slot::Occupied(v) if v == value)
    }

    /// Delete `value`, leaving a tombstone in its slot. Returns whether it was present.
    /// Never shrinks or rehashes.
    pub fn delete(&mut self, value: &T) -> bool {
        let bucket = self.adjusted_bucket(value);
        if !matches!(&self.slots[bucket], Slot::Occupied(v) if v == value) {
            return false;
        }

        self.slots[bucket] = Slot::Tombstone;
        self.len -= 1;
        self.tombstones += 1;
        true
    }

    /// Ideal bucket for `value` at the current capacity.
    fn ideal_bucket(&self, value: &T) -> usize {
        compute_bucket(&self.hasher, value, self.capacity())
    }

    /// How far `value` sits from its ideal bucket when stored at `bucket`, counting wraparound.
    fn displaced(&self, value: &T, bucket: usize) -> usize {
        let ideal = self.ideal_bucket(value);
        if bucket >= ideal {
            bucket - ideal
        } else {
            self.capacity() - ideal + bucket
        }
    }

    /// The bucket holding `value`, or the first empty bucket of its probe chain.
    /// Tombstones are walked past.
    fn adjusted_bucket(&self, value: &T) -> usize {
        let capacity = self.capacity();
        let mut bucket = self.ideal_bucket(value);

        for _ in 0..capacity {
            match &self.slots[bucket] {
                Slot::Empty => return bucket,
                Slot::Occupied(v) if v == value => return bucket,
                _ => {}
            }
            bucket = (bucket + 1) % capacity;
        }
        panic!(
            "robin hood lookup looped through all {} buckets without an empty slot",
            capacity
        );
    }

    /// Robin Hood placement of a value known not to be stored yet.
    /// Claims the first empty or tombstoned slot; displaces closer-to-home occupants on the way.
    fn place(&mut self, value: T) {
        let capacity = self.capacity();
        let mut carried = value;
        let mut bucket = self.ideal_bucket(&carried);

        for _ in 0..capacity {
            match &self.slots[bucket] {
                Slot::Empty => {
                    self.slots[bucket] = Slot::Occupied(carried);
                    self.len += 1;
                    return;
                }
                Slot::Tombstone => {
                    self.slots[bucket] = Slot::Occupied(carried);
                    self.len += 1;
                    self.tombstones -= 1;
                    return;
                }
                Slot::Occupied(other) => {
                    let carried_dist = self.displaced(&carried, bucket);
                    let other_dist = self.displaced(other, bucket);
                    if carried_dist > other_dist {
                        log::trace!(
                            "robin hood swap at bucket {} ({} > {})",
                            bucket,
                            carried_dist,
                            other_dist
                        );
                        if let Slot::Occupied(resident) = &mut self.slots[bucket] {
                            std::mem::swap(resident, &mut carried);
                        }
                    }
                }
            }
            bucket = (bucket + 1) % capacity;
        }
        panic!(
            "robin hood insert looped through all {} buckets without a free slot",
            capacity
        );
    }

    /// Grow by one growth factor when the live load factor exceeds the maximum; otherwise purge
    /// tombstones once live values plus tombstones exceed it, so an empty slot always remains.
    ///
    /// # Panics
    /// If the grown slot array would not fit in memory.
    fn maybe_rehash(&mut self) {
        let capacity = self.capacity();
        if self.load_factor() > self.max_load_factor {
            let new_capacity = match grown_capacity::<T>(capacity, self.growth_factor) {
                Some(new_capacity) => new_capacity,
                None => panic!(
                    "robin hood table cannot grow past {} buckets by a factor of {}",
                    capacity, self.growth_factor
                ),
            };
            log::debug!(
                "growing robin hood table from {} to {} buckets ({} values, {} tombstones dropped)",
                capacity,
                new_capacity,
                self.len,
                self.tombstones
            );
            self.rehash(new_capacity);
        } else if (self.len + self.tombstones) as f64 / capacity as f64 > self.max_load_factor {
            log::debug!(
                "purging {} tombstones from robin hood table ({} buckets, {} values)",
                self.tombstones,
                capacity,
                self.len
            );
            self.rehash(capacity);
        }
    }

    /// Rebuild into a fresh slot array of `new_capacity`, re-placing every live value.
    fn rehash(&mut self, new_capacity: usize) {
        let old_slots = std::mem::replace(&mut self.slots, empty_slots(new_capacity));
        self.len = 0;
        self.tombstones = 0;

        for slot in old_slots {
            if let Slot::Occupied(value) = slot {
                self.place(value);
            }
        }
    }
}

/// `hash(value) mod capacity`.
fn compute_bucket<T: Hash, S: BuildHasher>(hasher: &S, value: &T, capacity: usize) -> usize {
    let mut state = hasher.build_hasher();
    value.hash(&mut state);
    (state.finish() % capacity as u64) as usize
}

/// `capacity * growth_factor`, or `None` when that many slots could not be allocated.
fn grown_capacity<T>(capacity: usize, growth_factor: usize) -> Option<usize> {
    let max_slots = isize::MAX as usize / std::mem::size_of::<Slot<T>>().max(1);
    capacity
        .checked_mul(growth_factor)
        .filter(|&grown| grown <= max_slots)
}

fn empty_slots<T>(capacity: usize) -> Vec<Slot<T>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, Default::default);
    slots
}
