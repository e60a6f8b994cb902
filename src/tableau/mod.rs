// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Young tableaux: fillings of a partition shape.
//!
//! This module contains the `Tableau` value type and shape-only computations
//! (hook lengths). Generators and the Robinson-Schensted correspondence live
//! in submodules:
//!
//! - `semistandard`: semistandard tableaux with bounded entries or fixed weight
//! - `standard`: standard tableaux and the hook-length count
//! - `schensted`: row insertion and the RS correspondence
//!
//! # Examples
//!
//! ```
//! use kostka_search::tableau::Tableau;
//!
//! let t = Tableau::new(vec![vec![1, 1, 2], vec![2, 3]]).unwrap();
//! assert!(t.is_semistandard());
//! assert!(!t.is_standard());
//! assert_eq!(t.reading_word(), vec![2, 3, 1, 1, 2]);
//! assert_eq!(t.weight(), vec![2, 2, 1]);
//! ```

pub mod schensted;
pub mod semistandard;
pub mod standard;

pub use schensted::{bump, bump_recording, schensted};
pub use semistandard::{
    semistandard_tableaux, semistandard_tableaux_of_size, semistandard_tableaux_with_weight,
    SemistandardTableaux, WeightedTableaux,
};
pub use standard::{num_standard_tableaux, standard_tableaux, standard_tableaux_of_size};

use crate::error::{CombinatoricsError, Result};
use crate::partition::Partition;
use std::fmt;

/// A filling of a Young diagram, stored row by row.
///
/// Row lengths are non-increasing and every entry is positive. No ordering of
/// the entries is implied; see [`Tableau::is_semistandard`] and
/// [`Tableau::is_standard`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Tableau(Vec<Vec<usize>>);

impl Tableau {
    /// Create a tableau, checking that the rows form a partition shape.
    pub fn new(rows: Vec<Vec<usize>>) -> Result<Self> {
        if rows.iter().any(Vec::is_empty) {
            return Err(CombinatoricsError::InvalidTableau(format!(
                "{:?} has an empty row",
                rows
            )));
        }
        if rows.windows(2).any(|w| w[0].len() < w[1].len()) {
            return Err(CombinatoricsError::InvalidTableau(format!(
                "{:?} has row lengths that increase",
                rows
            )));
        }
        if rows.iter().flatten().any(|&x| x == 0) {
            return Err(CombinatoricsError::InvalidTableau(format!(
                "{:?} has a zero entry",
                rows
            )));
        }
        Ok(Self(rows))
    }

    pub(crate) fn from_rows_unchecked(rows: Vec<Vec<usize>>) -> Self {
        debug_assert!(rows.windows(2).all(|w| w[0].len() >= w[1].len()));
        Self(rows)
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Vec<usize>> {
        &mut self.0
    }

    pub fn rows(&self) -> &[Vec<usize>] {
        &self.0
    }

    pub fn into_rows(self) -> Vec<Vec<usize>> {
        self.0
    }

    /// Entry at row `i`, column `j` (0-based).
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        self.0.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Total number of cells.
    pub fn num_cells(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    /// The shape: the partition formed by the row lengths.
    pub fn shape(&self) -> Partition {
        Partition::from_parts_unchecked(self.0.iter().map(Vec::len).collect())
    }

    /// Multiplicity of each value: entry `i` counts the cells holding `i + 1`.
    pub fn weight(&self) -> Vec<usize> {
        let largest = self.0.iter().flatten().copied().max().unwrap_or(0);
        let mut weight = vec![0; largest];
        for &x in self.0.iter().flatten() {
            weight[x - 1] += 1;
        }
        weight
    }

    /// Rows weakly increase left to right and columns strictly increase top to bottom.
    pub fn is_semistandard(&self) -> bool {
        let rows_ok = self
            .0
            .iter()
            .all(|row| row.windows(2).all(|w| w[0] <= w[1]));
        let columns_ok = self
            .0
            .windows(2)
            .all(|pair| pair[1].iter().zip(&pair[0]).all(|(below, above)| below > above));
        rows_ok && columns_ok
    }

    /// Semistandard, and the entries are exactly `1..=n`, each used once.
    pub fn is_standard(&self) -> bool {
        if !self.is_semistandard() {
            return false;
        }
        let n = self.num_cells();
        let mut seen = vec![false; n];
        for &x in self.0.iter().flatten() {
            if x == 0 || x > n || seen[x - 1] {
                return false;
            }
            seen[x - 1] = true;
        }
        true
    }

    /// Rows read bottom to top, each left to right.
    pub fn reading_word(&self) -> Vec<usize> {
        self.0.iter().rev().flatten().copied().collect()
    }
}

impl fmt::Display for Tableau {
    /// Format as "[[1, 2], [3]]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", x)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

/// Hook length of cell `(i, j)` (0-based): cells to its right, cells below it, plus one.
///
/// Returns `None` when the cell is outside the shape.
pub fn hook_length(shape: &Partition, i: usize, j: usize) -> Option<usize> {
    if j >= shape.part(i) {
        return None;
    }
    let arm = shape[i] - j - 1;
    let leg = shape.iter().skip(i + 1).take_while(|&&p| p > j).count();
    Some(arm + leg + 1)
}

/// Hook lengths of every cell of `shape`, as a filling of that shape.
pub fn hook_lengths(shape: &Partition) -> Tableau {
    let columns = shape.conjugate();
    let rows = shape
        .iter()
        .enumerate()
        .map(|(i, &len)| {
            (0..len)
                .map(|j| (len - j - 1) + (columns[j] - i - 1) + 1)
                .collect()
        })
        .collect();
    Tableau::from_rows_unchecked(rows)
}
