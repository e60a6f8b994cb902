// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Multiset partitions with Knuth's Algorithm M.
//!
//! The parts of a partition `p` form a multiset. A multiset partition of `p`
//! regroups those parts into a multiset of non-empty sub-partitions. For
//! `p = [2, 1, 1]` there are four:
//!
//! ```text
//! {[2, 1, 1]}   {[2, 1], [1]}   {[2], [1, 1]}   {[2], [1], [1]}
//! ```
//!
//! # Algorithm
//!
//! Knuth, TAOCP 7.2.1.5, Algorithm M. The distinct part values of `p` are the
//! components. A stack of frames lives in the parallel arrays `c` (component),
//! `u` (amount not yet used by earlier frames) and `v` (amount used by this
//! frame); frame `i` occupies `f[i]..f[i+1]`. Each step is one of:
//!
//! - **Subtract**: compute `u - v` into a new frame. If anything remains, push
//!   the frame, otherwise visit the current stack.
//! - **Decrease**: decrement the rightmost nonzero `v` of the top frame and
//!   reset the entries after it to their `u` values.
//! - **Backtrack**: pop the top frame when it cannot be decreased.
//!
//! Each multiset partition is visited exactly once, in decreasing
//! lexicographic order of the frame stack.

use super::{partitions, Partition};
use std::collections::BTreeMap;
use std::fmt;

/// A multiset of non-empty partitions, stored as partition → multiplicity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct MultisetPartition(BTreeMap<Partition, usize>);

impl MultisetPartition {
    /// Collect parts into a multiset. Empty partitions are ignored.
    pub fn from_parts<I: IntoIterator<Item = Partition>>(parts: I) -> Self {
        let mut map = BTreeMap::new();
        for part in parts {
            if !part.is_empty() {
                *map.entry(part).or_insert(0) += 1;
            }
        }
        Self(map)
    }

    /// Number of parts, counted with multiplicity.
    pub fn num_parts(&self) -> usize {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn multiplicity(&self, part: &Partition) -> usize {
        self.0.get(part).copied().unwrap_or(0)
    }

    /// Distinct parts with their multiplicities, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (&Partition, usize)> {
        self.0.iter().map(|(p, &m)| (p, m))
    }

    /// Sum of all parts of all members.
    pub fn total(&self) -> usize {
        self.iter().map(|(p, m)| p.sum() * m).sum()
    }

    /// Merge every member back into a single partition.
    pub fn flatten(&self) -> Partition {
        let mut parts: Vec<usize> = self
            .iter()
            .flat_map(|(p, m)| std::iter::repeat(p.parts()).take(m))
            .flatten()
            .copied()
            .collect();
        parts.sort_unstable_by(|a, b| b.cmp(a));
        Partition::from_parts_unchecked(parts)
    }
}

impl fmt::Display for MultisetPartition {
    /// Format as "{[2, 1], [1]}", members in descending order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (part, m) in self.0.iter().rev() {
            for _ in 0..*m {
                if !first {
                    write!(f, ", ")?;
                }
                first = false;
                write!(f, "{}", part)?;
            }
        }
        write!(f, "}}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Init,
    Subtract,
    Decrease,
    Done,
}

/// Iterator over the multiset partitions of a partition.
#[derive(Debug, Clone)]
pub struct MultisetPartitions {
    /// Part value of each component, descending.
    values: Vec<usize>,
    c: Vec<usize>,
    u: Vec<usize>,
    v: Vec<usize>,
    f: Vec<usize>,
    /// Start of the top frame.
    a: usize,
    /// End of the top frame.
    b: usize,
    /// Index of the top frame.
    l: usize,
    /// When set, only multiset partitions with exactly this many parts.
    groups: Option<usize>,
    state: State,
}

/// Multiset partitions of `p`, optionally restricted to exactly `groups` parts.
///
/// # Examples
///
/// ```
/// use kostka_search::partition::{multiset_partitions, Partition};
///
/// let p = Partition::new(vec![2, 1, 1]).unwrap();
/// assert_eq!(multiset_partitions(&p, None).count(), 4);
/// assert_eq!(multiset_partitions(&p, Some(2)).count(), 2);
/// ```
pub fn multiset_partitions(p: &Partition, groups: Option<usize>) -> MultisetPartitions {
    MultisetPartitions::new(p, groups)
}

/// Every multiset partition of every partition of `n`.
///
/// These are the multisets of partitions whose grand total is `n`.
pub fn multiset_partitions_of_integer(
    n: usize,
    groups: Option<usize>,
) -> impl Iterator<Item = MultisetPartition> {
    partitions(n).flat_map(move |p| MultisetPartitions::new(&p, groups))
}

impl MultisetPartitions {
    pub fn new(p: &Partition, groups: Option<usize>) -> Self {
        let counts = p.to_part_count();
        let mut values = Vec::new();
        let mut multiplicities = Vec::new();
        for (i, &count) in counts.counts().iter().enumerate().rev() {
            if count > 0 {
                values.push(i + 1);
                multiplicities.push(count);
            }
        }

        let m = values.len();
        let size = m * (p.len() + 1) + 1;
        let mut c = vec![0; size];
        let mut u = vec![0; size];
        let mut v = vec![0; size];
        for (j, &count) in multiplicities.iter().enumerate() {
            c[j] = j;
            u[j] = count;
            v[j] = count;
        }
        let mut f = vec![0; p.len() + 2];
        f[1] = m;

        Self {
            values,
            c,
            u,
            v,
            f,
            a: 0,
            b: m,
            l: 0,
            groups,
            state: State::Init,
        }
    }

    /// Subtract `v` from `u` into the area after the top frame.
    ///
    /// Returns the end of the new frame; it is non-empty iff the result is
    /// greater than `b`.
    fn subtract(&mut self) -> usize {
        let (mut j, mut k) = (self.a, self.b);
        let mut x = false;
        while j < self.b {
            self.u[k] = self.u[j] - self.v[j];
            if self.u[k] == 0 {
                x = true;
            } else if !x {
                self.c[k] = self.c[j];
                self.v[k] = self.v[j].min(self.u[k]);
                x = self.u[k] < self.v[j];
                k += 1;
            } else {
                self.c[k] = self.c[j];
                self.v[k] = self.u[k];
                k += 1;
            }
            j += 1;
        }
        k
    }

    /// Decrease the top frame. Returns false when it must be popped instead.
    fn decrease(&mut self) -> bool {
        let mut j = self.b - 1;
        while j > self.a && self.v[j] == 0 {
            j -= 1;
        }
        if j == self.a && self.v[j] <= 1 {
            return false;
        }
        self.v[j] -= 1;
        for k in j + 1..self.b {
            self.v[k] = self.u[k];
        }
        true
    }

    /// Pop the top frame. Returns false when the stack is exhausted.
    fn backtrack(&mut self) -> bool {
        if self.l == 0 {
            return false;
        }
        self.l -= 1;
        self.b = self.a;
        self.a = self.f[self.l];
        true
    }

    fn visit(&self) -> MultisetPartition {
        let parts = (0..=self.l).map(|frame| {
            let mut parts = Vec::new();
            for j in self.f[frame]..self.f[frame + 1] {
                let value = self.values[self.c[j]];
                parts.extend(std::iter::repeat(value).take(self.v[j]));
            }
            Partition::from_parts_unchecked(parts)
        });
        MultisetPartition::from_parts(parts)
    }

    fn at_group_limit(&self) -> bool {
        self.groups.is_some_and(|r| self.l + 1 >= r)
    }
}

impl Iterator for MultisetPartitions {
    type Item = MultisetPartition;

    fn next(&mut self) -> Option<MultisetPartition> {
        loop {
            match self.state {
                State::Init => {
                    if self.values.is_empty() {
                        self.state = State::Done;
                        if self.groups.unwrap_or(0) == 0 {
                            return Some(MultisetPartition::default());
                        }
                        return None;
                    }
                    if self.groups == Some(0) {
                        self.state = State::Done;
                        return None;
                    }
                    self.state = State::Subtract;
                }
                State::Subtract => {
                    let k = self.subtract();
                    if k > self.b {
                        if self.at_group_limit() {
                            // Every completion would need more than `groups` parts.
                            self.state = State::Decrease;
                            continue;
                        }
                        self.a = self.b;
                        self.b = k;
                        self.l += 1;
                        self.f[self.l + 1] = self.b;
                        continue;
                    }
                    self.state = State::Decrease;
                    if self.groups.map_or(true, |r| self.l + 1 == r) {
                        return Some(self.visit());
                    }
                }
                State::Decrease => {
                    if self.decrease() {
                        self.state = State::Subtract;
                    } else if !self.backtrack() {
                        self.state = State::Done;
                    }
                }
                State::Done => return None,
            }
        }
    }
}
