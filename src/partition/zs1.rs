// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generation of all partitions of `n` with the ZS1 algorithm.
//!
//! Zoghbi and Stojmenovic (1998), "Fast algorithms for generating integer
//! partitions". Partitions are produced in decreasing lexicographic order,
//! starting with `[n]` and ending with `[1, 1, ..., 1]`.
//!
//! # Algorithm
//!
//! The buffer `x[1..=n]` holds the current partition in `x[1..=m]`, with every
//! entry after index `h` equal to 1. Each step either:
//! 1. turns a trailing 2 at `x[h]` into two 1s (fast path), or
//! 2. decrements `x[h]` to `r` and redistributes the freed 1s as copies of
//!    `r` followed by one remainder part.
//!
//! Generation stops once `x[1] == 1`.

use super::Partition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing emitted yet.
    Init,
    /// The buffer holds the last emitted partition.
    Emitted,
    /// All partitions have been produced.
    Done,
}

/// Iterator over all partitions of `n` in decreasing lexicographic order.
///
/// # Examples
///
/// ```
/// use kostka_search::partition::partitions;
///
/// let parts: Vec<Vec<usize>> = partitions(4).map(|p| p.into_parts()).collect();
/// assert_eq!(parts, vec![
///     vec![4], vec![3, 1], vec![2, 2], vec![2, 1, 1], vec![1, 1, 1, 1],
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Partitions {
    n: usize,
    /// 1-based working buffer; index 0 is unused.
    x: Vec<usize>,
    /// Length of the current partition.
    m: usize,
    /// Index of the last part greater than 1 (0 when there is none).
    h: usize,
    state: State,
}

/// All partitions of `n`.
///
/// `n = 0` yields the single empty partition.
pub fn partitions(n: usize) -> Partitions {
    Partitions::new(n)
}

impl Partitions {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            x: vec![1; n + 1],
            m: 0,
            h: 0,
            state: State::Init,
        }
    }

    fn current(&self) -> Partition {
        Partition::from_parts_unchecked(self.x[1..=self.m].to_vec())
    }

    /// Advance the buffer to the next partition. Requires `x[1] > 1`.
    fn advance(&mut self) {
        let x = &mut self.x;
        if x[self.h] == 2 {
            self.m += 1;
            x[self.h] = 1;
            self.h -= 1;
            return;
        }

        let r = x[self.h] - 1;
        let mut t = self.m - self.h + 1;
        x[self.h] = r;
        while t >= r {
            self.h += 1;
            x[self.h] = r;
            t -= r;
        }
        if t == 0 {
            self.m = self.h;
        } else {
            self.m = self.h + 1;
            if t > 1 {
                self.h += 1;
                x[self.h] = t;
            }
        }
    }
}

impl Iterator for Partitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        match self.state {
            State::Init => {
                if self.n == 0 {
                    self.state = State::Done;
                    return Some(Partition::empty());
                }
                self.x[1] = self.n;
                self.m = 1;
                self.h = 1;
                self.state = State::Emitted;
                Some(self.current())
            }
            State::Emitted => {
                if self.x[1] == 1 {
                    self.state = State::Done;
                    return None;
                }
                self.advance();
                Some(self.current())
            }
            State::Done => None,
        }
    }
}
