// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Partitions into a fixed number of bounded parts.
//!
//! Riha and James (1976), "Algorithm 29: Efficient algorithms for doing
//! arithmetic with partitions". The generator works on parts measured relative
//! to a baseline, so every request reduces to the same core problem:
//!
//! > non-increasing sequences `z[0..k]` with `0 <= z[i] <= cap` and `Σ z = s`.
//!
//! For plain partitions the baseline of every part is `l1`. For distinct parts
//! position `i` gets the extra offset `k - 1 - i`, which turns strictly
//! decreasing sequences into weakly decreasing ones.
//!
//! # Algorithm
//!
//! The first sequence saturates parts left to right up to `cap`. Each step
//! backtracks to the rightmost part that still has slack (it can lose one unit
//! while the parts to its right absorb it), decrements it, and saturates all
//! parts to its right again. Sequences come out in decreasing lexicographic
//! order.

use super::Partition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Init,
    Emitted,
    Done,
}

/// Iterator over partitions of `m` into exactly `k` parts from `[l1, l2]`.
#[derive(Debug, Clone)]
pub struct RestrictedPartitions {
    /// Parts relative to their baseline.
    z: Vec<usize>,
    /// Upper bound for every entry of `z`.
    cap: usize,
    /// Sum of `z`.
    total: usize,
    /// Baseline shared by every part.
    base: usize,
    distinct: bool,
    state: State,
}

/// Partitions of `m` into exactly `k` parts, each within `[l1, l2]`.
///
/// With `distinct` the parts are strictly decreasing. Infeasible combinations
/// of bounds produce an empty iterator. A lower bound of 0 is treated as 1.
///
/// # Examples
///
/// ```
/// use kostka_search::partition::partitions_bounded;
///
/// let parts: Vec<Vec<usize>> = partitions_bounded(10, 3, 2, 5, false)
///     .map(|p| p.into_parts())
///     .collect();
/// assert_eq!(parts, vec![vec![5, 3, 2], vec![4, 4, 2], vec![4, 3, 3]]);
/// ```
pub fn partitions_bounded(
    m: usize,
    k: usize,
    l1: usize,
    l2: usize,
    distinct: bool,
) -> RestrictedPartitions {
    RestrictedPartitions::new(m, k, l1, l2, distinct)
}

/// All partitions of `m` into exactly `k` parts.
pub fn partitions_with_parts(m: usize, k: usize) -> RestrictedPartitions {
    RestrictedPartitions::new(m, k, 1, m, false)
}

impl RestrictedPartitions {
    pub fn new(m: usize, k: usize, l1: usize, l2: usize, distinct: bool) -> Self {
        let l1 = l1.max(1);
        let mut generator = Self {
            z: Vec::new(),
            cap: 0,
            total: 0,
            base: l1,
            distinct,
            state: State::Done,
        };

        if k == 0 {
            if m == 0 {
                generator.state = State::Init;
            }
            return generator;
        }
        if l1 > l2 {
            return generator;
        }

        // Any product that overflows exceeds `m`, so the request is infeasible.
        let stair = if distinct {
            match k.checked_mul(k - 1) {
                Some(twice) => twice / 2,
                None => return generator,
            }
        } else {
            0
        };
        let spread = if distinct { k - 1 } else { 0 };
        let Some(cap) = (l2 - l1).checked_sub(spread) else {
            return generator;
        };
        let Some(total) = k
            .checked_mul(l1)
            .and_then(|floor| m.checked_sub(floor))
            .and_then(|rest| rest.checked_sub(stair))
        else {
            return generator;
        };
        // An overflowing ceiling never binds.
        if k.checked_mul(cap).is_some_and(|ceiling| total > ceiling) {
            return generator;
        }

        generator.z = vec![0; k];
        generator.cap = cap;
        generator.total = total;
        generator.state = State::Init;
        generator
    }

    fn current(&self) -> Partition {
        let k = self.z.len();
        let parts = self
            .z
            .iter()
            .enumerate()
            .map(|(i, &z)| {
                let offset = if self.distinct { k - 1 - i } else { 0 };
                z + self.base + offset
            })
            .collect();
        Partition::from_parts_unchecked(parts)
    }

    /// Saturate `z[from..]` with `amount`, never exceeding `limit`.
    fn saturate(&mut self, from: usize, limit: usize, mut amount: usize) {
        for z in &mut self.z[from..] {
            *z = limit.min(amount);
            amount -= *z;
        }
        debug_assert_eq!(amount, 0);
    }

    /// Move to the next sequence. Returns false when there is none.
    fn advance(&mut self) -> bool {
        let k = self.z.len();
        let mut suffix = 0;
        for i in (0..k.saturating_sub(1)).rev() {
            suffix += self.z[i + 1];
            let value = self.z[i];
            if value > 0 && suffix < (k - 1 - i).saturating_mul(value - 1) {
                self.z[i] = value - 1;
                self.saturate(i + 1, value - 1, suffix + 1);
                return true;
            }
        }
        false
    }
}

impl Iterator for RestrictedPartitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        match self.state {
            State::Init => {
                let (cap, total) = (self.cap, self.total);
                self.saturate(0, cap, total);
                self.state = State::Emitted;
                Some(self.current())
            }
            State::Emitted => {
                if self.advance() {
                    Some(self.current())
                } else {
                    self.state = State::Done;
                    None
                }
            }
            State::Done => None,
        }
    }
}
