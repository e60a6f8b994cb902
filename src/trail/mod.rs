// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the search engine.
//!
//! The trail owns a small file of integer registers. Every write through
//! [`Trail::set`] records the previous value, so rewinding to a checkpoint
//! restores all registers written since then, in time proportional to the
//! number of writes undone.
//!
//! # Example
//!
//! ```
//! use kostka_search::trail::Trail;
//!
//! let mut trail = Trail::new();
//! let charge = trail.register(3);
//!
//! let checkpoint = trail.checkpoint();
//! trail.set(charge, 7);
//! trail.add(charge, -2);
//! assert_eq!(trail.get(charge), 5);
//!
//! trail.rewind_to(checkpoint);
//! assert_eq!(trail.get(charge), 3);
//! ```

/// Handle for one register on a [`Trail`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot(usize);

/// A single entry in the trail, recording one register write.
#[derive(Debug, Clone, Copy)]
struct TrailEntry {
    slot: usize,
    old_value: i64,
}

/// Register file with O(1) checkpoints.
///
/// Checkpoints are trail lengths: taking one is free, and the engine keeps
/// them in its own stack entries.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    values: Vec<i64>,
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Maximum number of unrewound writes.
    const MAX_SIZE: usize = 16384;

    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a register holding `initial`. Registration is not trailed.
    pub fn register(&mut self, initial: i64) -> Slot {
        self.values.push(initial);
        Slot(self.values.len() - 1)
    }

    pub fn get(&self, slot: Slot) -> i64 {
        self.values[slot.0]
    }

    /// Write a register, recording the old value.
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds its maximum size, which indicates a
    /// predicate that never lets the engine rewind.
    pub fn set(&mut self, slot: Slot, value: i64) {
        if self.entries.len() >= Self::MAX_SIZE {
            panic!("Trail overflow: exceeded {} entries", Self::MAX_SIZE);
        }
        self.entries.push(TrailEntry {
            slot: slot.0,
            old_value: self.values[slot.0],
        });
        self.values[slot.0] = value;
    }

    /// Write only if the value changes. Returns true if a write happened.
    pub fn maybe_set(&mut self, slot: Slot, value: i64) -> bool {
        if self.get(slot) == value {
            return false;
        }
        self.set(slot, value);
        true
    }

    /// Add `delta` to a register.
    pub fn add(&mut self, slot: Slot, delta: i64) {
        let value = self.get(slot) + delta;
        self.maybe_set(slot, value);
    }

    /// Current position, usable with [`Trail::rewind_to`].
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Undo every write made after `checkpoint`, newest first.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                self.values[entry.slot] = entry.old_value;
            }
        }
    }

    /// Number of writes currently recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
