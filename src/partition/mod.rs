// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer partitions and their generators.
//!
//! A partition of `n` is a non-increasing sequence of positive integers
//! summing to `n`. The empty sequence is the unique partition of 0.
//!
//! # Organization
//!
//! - `zs1`: all partitions of `n` (Zoghbi-Stojmenovic ZS1)
//! - `parta`: partitions into exactly `k` parts with bounded, optionally distinct parts
//! - `multiset`: multiset partitions (Knuth's Algorithm M)
//!
//! All generators are lazy iterators that own their working buffers.
//!
//! # Examples
//!
//! ```
//! use kostka_search::partition::{partitions, Partition};
//!
//! let all: Vec<Partition> = partitions(3).collect();
//! assert_eq!(all, vec![
//!     Partition::new(vec![3]).unwrap(),
//!     Partition::new(vec![2, 1]).unwrap(),
//!     Partition::new(vec![1, 1, 1]).unwrap(),
//! ]);
//! ```

pub mod multiset;
pub mod parta;
pub mod zs1;

pub use multiset::{
    multiset_partitions, multiset_partitions_of_integer, MultisetPartition, MultisetPartitions,
};
pub use parta::{partitions_bounded, partitions_with_parts, RestrictedPartitions};
pub use zs1::{partitions, Partitions};

use crate::error::{CombinatoricsError, Result};
use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;
use std::ops::Index;

/// A partition: a non-increasing sequence of positive integers.
///
/// Parts are `usize`; quantities derived from partitions that can grow
/// quickly (counts, polynomial coefficients) are arbitrary precision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Partition(Vec<usize>);

impl Partition {
    /// Create a partition, checking that parts are positive and non-increasing.
    pub fn new(parts: Vec<usize>) -> Result<Self> {
        if let Some(position) = parts.iter().position(|&p| p == 0) {
            return Err(CombinatoricsError::InvalidPartition(format!(
                "{:?} has a zero part at position {}",
                parts, position
            )));
        }
        if let Some(position) = parts.windows(2).position(|w| w[0] < w[1]) {
            return Err(CombinatoricsError::InvalidPartition(format!(
                "{:?} increases at position {}",
                parts,
                position + 1
            )));
        }
        Ok(Self(parts))
    }

    /// The empty partition of 0.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Wrap parts already known to be a partition.
    pub(crate) fn from_parts_unchecked(parts: Vec<usize>) -> Self {
        debug_assert!(parts.windows(2).all(|w| w[0] >= w[1]));
        debug_assert!(parts.iter().all(|&p| p > 0));
        Self(parts)
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty partition of 0.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of the parts.
    pub fn sum(&self) -> usize {
        self.0.iter().sum()
    }

    /// Largest part, 0 for the empty partition.
    pub fn largest_part(&self) -> usize {
        self.0.first().copied().unwrap_or(0)
    }

    /// The `i`-th part (0-based), or 0 past the last part.
    pub fn part(&self, i: usize) -> usize {
        self.0.get(i).copied().unwrap_or(0)
    }

    /// The parts, largest first.
    pub fn parts(&self) -> &[usize] {
        &self.0
    }

    /// Iterate over the parts, largest first.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }

    /// Consume the partition, returning its parts.
    pub fn into_parts(self) -> Vec<usize> {
        self.0
    }

    /// The conjugate partition (transpose of the Young diagram).
    pub fn conjugate(&self) -> Self {
        let largest = self.largest_part();
        let mut conjugate = Vec::with_capacity(largest);
        for j in 0..largest {
            conjugate.push(self.0.iter().take_while(|&&p| p > j).count());
        }
        Self(conjugate)
    }

    /// Dominance order: `self >= other` iff every partial sum of `self` is at
    /// least the matching partial sum of `other`.
    ///
    /// Partitions of different integers never dominate each other.
    pub fn dominates(&self, other: &Partition) -> bool {
        if self.sum() != other.sum() {
            return false;
        }
        let mut lhs = 0;
        let mut rhs = 0;
        for i in 0..self.len().max(other.len()) {
            lhs += self.part(i);
            rhs += other.part(i);
            if lhs < rhs {
                return false;
            }
        }
        true
    }

    /// The statistic `n(λ) = Σ (i-1) λ_i`.
    pub fn n_statistic(&self) -> usize {
        self.0.iter().enumerate().map(|(i, &p)| i * p).sum()
    }

    /// Multiplicities of each part size.
    pub fn to_part_count(&self) -> PartCount {
        PartCount::from_partition(self)
    }
}

impl Index<usize> for Partition {
    type Output = usize;

    fn index(&self, i: usize) -> &usize {
        &self.0[i]
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<Vec<usize>> for Partition {
    type Error = CombinatoricsError;

    fn try_from(parts: Vec<usize>) -> Result<Self> {
        Self::new(parts)
    }
}

impl fmt::Display for Partition {
    /// Format as "[3, 2, 1]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, "]")
    }
}

/// Part multiplicities of a partition.
///
/// Entry `i` (1-based) holds the number of parts equal to `i`. There are no
/// trailing zero entries, so the representation is unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PartCount(Vec<usize>);

impl PartCount {
    pub fn from_partition(partition: &Partition) -> Self {
        let mut counts = vec![0; partition.largest_part()];
        for &p in partition {
            counts[p - 1] += 1;
        }
        Self(counts)
    }

    /// Build from raw multiplicities; trailing zeros are dropped.
    pub fn new(mut counts: Vec<usize>) -> Self {
        while counts.last() == Some(&0) {
            counts.pop();
        }
        Self(counts)
    }

    /// Number of parts equal to `i` (1-based; 0 when out of range).
    pub fn multiplicity(&self, i: usize) -> usize {
        if i == 0 {
            return 0;
        }
        self.0.get(i - 1).copied().unwrap_or(0)
    }

    /// Largest part size with a nonzero multiplicity.
    pub fn max_part(&self) -> usize {
        self.0.len()
    }

    pub fn counts(&self) -> &[usize] {
        &self.0
    }

    pub fn to_partition(&self) -> Partition {
        let mut parts = Vec::with_capacity(self.0.iter().sum());
        for (i, &count) in self.0.iter().enumerate().rev() {
            parts.extend(std::iter::repeat(i + 1).take(count));
        }
        Partition(parts)
    }
}

/// Number of partitions of `n`, via Euler's pentagonal number recurrence.
///
/// `p(n) = Σ_{k≥1} (-1)^(k+1) [p(n - k(3k-1)/2) + p(n - k(3k+1)/2)]`.
pub fn num_partitions(n: usize) -> BigInt {
    let mut table: Vec<BigInt> = Vec::with_capacity(n + 1);
    table.push(BigInt::from(1));
    for m in 1..=n {
        let mut total = BigInt::zero();
        for k in 1.. {
            let first = k * (3 * k - 1) / 2;
            if first > m {
                break;
            }
            let second = k * (3 * k + 1) / 2;
            let mut term = table[m - first].clone();
            if second <= m {
                term += &table[m - second];
            }
            if k % 2 == 1 {
                total += term;
            } else {
                total -= term;
            }
        }
        table.push(total);
    }
    table.swap_remove(n)
}
