// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Semistandard tableau generators.
//!
//! Two enumerations are provided:
//!
//! - [`semistandard_tableaux`]: every semistandard tableau of a shape with
//!   entries in `1..=max_val`. The generator starts from the superstandard
//!   tableau (row `i` filled with `i + 1`) and steps to the successor by
//!   incrementing the last cell, in reverse row-major order, that can be
//!   incremented. Every cell after it is then reset to its smallest legal
//!   value.
//! - [`semistandard_tableaux_with_weight`]: every semistandard tableau of a
//!   shape whose content is exactly `weight`. Values are placed one level at a
//!   time; the cells holding value `n` form a horizontal strip, so each level
//!   is a distribution of `weight[n-1]` cells among the rows, bounded by the
//!   cells already filled in the row above. Distributions are kept on an
//!   explicit stack and revised in backtracking order.

use super::Tableau;
use crate::partition::{partitions, Partition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Init,
    Emitted,
    Done,
}

/// Iterator over semistandard tableaux of a fixed shape with bounded entries.
///
/// # Examples
///
/// ```
/// use kostka_search::partition::Partition;
/// use kostka_search::tableau::semistandard_tableaux;
///
/// let shape = Partition::new(vec![2, 1]).unwrap();
/// assert_eq!(semistandard_tableaux(&shape, 3).count(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct SemistandardTableaux {
    shape: Vec<usize>,
    column_lengths: Vec<usize>,
    max_val: usize,
    rows: Vec<Vec<usize>>,
    state: State,
}

/// All semistandard tableaux of `shape` with entries in `1..=max_val`.
///
/// Empty when the shape has more rows than `max_val`. The empty shape yields
/// the single empty tableau.
pub fn semistandard_tableaux(shape: &Partition, max_val: usize) -> SemistandardTableaux {
    SemistandardTableaux::new(shape, max_val)
}

impl SemistandardTableaux {
    pub fn new(shape: &Partition, max_val: usize) -> Self {
        let state = if shape.len() > max_val {
            State::Done
        } else {
            State::Init
        };
        Self {
            shape: shape.parts().to_vec(),
            column_lengths: shape.conjugate().into_parts(),
            max_val,
            rows: Vec::new(),
            state,
        }
    }

    fn current(&self) -> Tableau {
        Tableau::from_rows_unchecked(self.rows.clone())
    }

    /// Smallest legal value for cell `(i, j)` given its left and upper neighbours.
    fn minimum_at(&self, i: usize, j: usize) -> usize {
        let left = if j > 0 { self.rows[i][j - 1] } else { 1 };
        let above = if i > 0 { self.rows[i - 1][j] + 1 } else { 1 };
        left.max(above)
    }

    /// Reset every cell strictly after `(i, j)` in row-major order to its minimum.
    fn minimize_after(&mut self, i: usize, j: usize) {
        for col in j + 1..self.shape[i] {
            self.rows[i][col] = self.minimum_at(i, col);
        }
        for row in i + 1..self.shape.len() {
            for col in 0..self.shape[row] {
                self.rows[row][col] = self.minimum_at(row, col);
            }
        }
    }

    fn advance(&mut self) -> bool {
        for i in (0..self.shape.len()).rev() {
            for j in (0..self.shape[i]).rev() {
                let value = self.rows[i][j];
                // The column below (i, j) must still fit under max_val.
                if value + self.column_lengths[j] - i <= self.max_val {
                    self.rows[i][j] = value + 1;
                    self.minimize_after(i, j);
                    return true;
                }
            }
        }
        false
    }
}

impl Iterator for SemistandardTableaux {
    type Item = Tableau;

    fn next(&mut self) -> Option<Tableau> {
        match self.state {
            State::Init => {
                self.rows = self
                    .shape
                    .iter()
                    .enumerate()
                    .map(|(i, &len)| vec![i + 1; len])
                    .collect();
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

/// Semistandard tableaux of every shape of size `box_count` with entries in `1..=max_val`.
///
/// Shapes are visited in decreasing lexicographic order.
pub fn semistandard_tableaux_of_size(
    box_count: usize,
    max_val: usize,
) -> impl Iterator<Item = Tableau> {
    partitions(box_count).flat_map(move |shape| semistandard_tableaux(&shape, max_val))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WeightedState {
    Descend,
    Backtrack,
    Done,
}

/// Iterator over semistandard tableaux of a fixed shape and content.
///
/// # Examples
///
/// ```
/// use kostka_search::partition::Partition;
/// use kostka_search::tableau::semistandard_tableaux_with_weight;
///
/// let shape = Partition::new(vec![2, 1]).unwrap();
/// let all: Vec<String> = semistandard_tableaux_with_weight(&shape, &[1, 1, 1])
///     .map(|t| t.to_string())
///     .collect();
/// assert_eq!(all, vec!["[[1, 2], [3]]", "[[1, 3], [2]]"]);
/// ```
#[derive(Debug, Clone)]
pub struct WeightedTableaux {
    shape: Vec<usize>,
    weight: Vec<usize>,
    /// Cells filled so far in each row.
    filled: Vec<usize>,
    /// One row distribution per placed value level.
    stack: Vec<Vec<usize>>,
    state: WeightedState,
}

/// All semistandard tableaux of `shape` containing exactly `weight[i]` copies of `i + 1`.
///
/// Empty when `weight` does not sum to the size of `shape`.
pub fn semistandard_tableaux_with_weight(shape: &Partition, weight: &[usize]) -> WeightedTableaux {
    WeightedTableaux::new(shape, weight)
}

impl WeightedTableaux {
    pub fn new(shape: &Partition, weight: &[usize]) -> Self {
        let state = if weight.iter().sum::<usize>() == shape.sum() {
            WeightedState::Descend
        } else {
            WeightedState::Done
        };
        Self {
            shape: shape.parts().to_vec(),
            weight: weight.to_vec(),
            filled: vec![0; shape.len()],
            stack: Vec::with_capacity(weight.len()),
            state,
        }
    }

    /// Free cells each row can take at the current level.
    fn capacities(&self) -> Vec<usize> {
        (0..self.shape.len())
            .map(|r| {
                let limit = if r == 0 {
                    self.shape[0]
                } else {
                    self.shape[r].min(self.filled[r - 1])
                };
                limit - self.filled[r]
            })
            .collect()
    }

    fn apply(&mut self, distribution: &[usize]) {
        for (filled, &count) in self.filled.iter_mut().zip(distribution) {
            *filled += count;
        }
    }

    fn unapply(&mut self, distribution: &[usize]) {
        for (filled, &count) in self.filled.iter_mut().zip(distribution) {
            *filled -= count;
        }
    }

    fn current(&self) -> Tableau {
        let mut rows = vec![Vec::new(); self.shape.len()];
        for (level, distribution) in self.stack.iter().enumerate() {
            for (row, &count) in rows.iter_mut().zip(distribution) {
                row.extend(std::iter::repeat(level + 1).take(count));
            }
        }
        Tableau::from_rows_unchecked(rows)
    }
}

/// Fill rows top first, as far as each capacity allows.
fn fill_greedy(target: &mut [usize], capacities: &[usize], mut amount: usize) {
    for (slot, &cap) in target.iter_mut().zip(capacities) {
        *slot = cap.min(amount);
        amount -= *slot;
    }
    debug_assert_eq!(amount, 0);
}

fn first_distribution(capacities: &[usize], amount: usize) -> Option<Vec<usize>> {
    if capacities.iter().sum::<usize>() < amount {
        return None;
    }
    let mut distribution = vec![0; capacities.len()];
    fill_greedy(&mut distribution, capacities, amount);
    Some(distribution)
}

/// Move one cell from the lowest row that can spare it to the rows below, refilled greedily.
fn next_distribution(capacities: &[usize], distribution: &mut [usize]) -> bool {
    let rows = distribution.len();
    let mut suffix = 0;
    let mut suffix_capacity = 0;
    for r in (0..rows.saturating_sub(1)).rev() {
        suffix += distribution[r + 1];
        suffix_capacity += capacities[r + 1];
        if distribution[r] > 0 && suffix < suffix_capacity {
            distribution[r] -= 1;
            fill_greedy(&mut distribution[r + 1..], &capacities[r + 1..], suffix + 1);
            return true;
        }
    }
    false
}

impl Iterator for WeightedTableaux {
    type Item = Tableau;

    fn next(&mut self) -> Option<Tableau> {
        loop {
            match self.state {
                WeightedState::Descend => {
                    let level = self.stack.len();
                    if level == self.weight.len() {
                        self.state = WeightedState::Backtrack;
                        return Some(self.current());
                    }
                    let capacities = self.capacities();
                    match first_distribution(&capacities, self.weight[level]) {
                        Some(distribution) => {
                            self.apply(&distribution);
                            self.stack.push(distribution);
                        }
                        None => self.state = WeightedState::Backtrack,
                    }
                }
                WeightedState::Backtrack => {
                    let Some(mut distribution) = self.stack.pop() else {
                        self.state = WeightedState::Done;
                        continue;
                    };
                    self.unapply(&distribution);
                    let capacities = self.capacities();
                    if next_distribution(&capacities, &mut distribution) {
                        self.apply(&distribution);
                        self.stack.push(distribution);
                        self.state = WeightedState::Descend;
                    }
                }
                WeightedState::Done => return None,
            }
        }
    }
}
