// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Schensted row insertion and the Robinson-Schensted correspondence.
//!
//! Inserting `x` into row 0 replaces the leftmost entry strictly greater than
//! `x`; the displaced entry is inserted into the next row. The process ends
//! when an entry is appended to the end of a row (possibly a new row at the
//! bottom). The result is semistandard whenever the input was.

use super::Tableau;
use crate::error::{CombinatoricsError, Result};

/// Row-insert `x` into `tableau`, returning the `(row, column)` of the new cell.
///
/// `x` must be positive.
///
/// # Examples
///
/// ```
/// use kostka_search::tableau::{bump, Tableau};
///
/// let mut t = Tableau::new(vec![vec![1, 3], vec![4]]).unwrap();
/// assert_eq!(bump(&mut t, 2), (2, 0));
/// assert_eq!(t.to_string(), "[[1, 2], [3], [4]]");
/// ```
pub fn bump(tableau: &mut Tableau, mut x: usize) -> (usize, usize) {
    debug_assert!(x > 0, "tableau entries are positive");
    let rows = tableau.rows_mut();
    for (i, row) in rows.iter_mut().enumerate() {
        let position = row.partition_point(|&entry| entry <= x);
        if position == row.len() {
            row.push(x);
            return (i, position);
        }
        x = std::mem::replace(&mut row[position], x);
    }
    rows.push(vec![x]);
    (rows.len() - 1, 0)
}

/// Row-insert `x` into `p` and place `y` in `q` at the cell that was created.
///
/// `p` and `q` must have the same shape.
pub fn bump_recording(p: &mut Tableau, x: usize, q: &mut Tableau, y: usize) {
    debug_assert_eq!(p.shape(), q.shape());
    let (row, column) = bump(p, x);
    let rows = q.rows_mut();
    if row == rows.len() {
        rows.push(Vec::new());
    }
    debug_assert_eq!(rows[row].len(), column);
    rows[row].push(y);
}

/// The Robinson-Schensted correspondence.
///
/// Inserts `sigma[0], sigma[1], ...` in order and records step `k + 1` in the
/// recording tableau. For a permutation both results are standard and share
/// a shape.
///
/// # Errors
///
/// `InvalidArgument` if `sigma` contains 0.
///
/// # Examples
///
/// ```
/// use kostka_search::tableau::schensted;
///
/// let (p, q) = schensted(&[2, 1]).unwrap();
/// assert_eq!(p.to_string(), "[[1], [2]]");
/// assert_eq!(q.to_string(), "[[1], [2]]");
/// ```
pub fn schensted(sigma: &[usize]) -> Result<(Tableau, Tableau)> {
    if sigma.contains(&0) {
        return Err(CombinatoricsError::InvalidArgument(format!(
            "sequence {:?} contains 0",
            sigma
        )));
    }
    let mut p = Tableau::default();
    let mut q = Tableau::default();
    for (k, &x) in sigma.iter().enumerate() {
        bump_recording(&mut p, x, &mut q, k + 1);
    }
    Ok((p, q))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn t(rows: &[&[usize]]) -> Tableau {
        Tableau::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    /// All permutations of 1..=n in lexicographic order.
    fn permutations(n: usize) -> Vec<Vec<usize>> {
        if n == 0 {
            return vec![Vec::new()];
        }
        let mut result = Vec::new();
        for smaller in permutations(n - 1) {
            for position in 0..=smaller.len() {
                let mut next = smaller.clone();
                next.insert(position, n);
                result.push(next);
            }
        }
        result.sort();
        result
    }

    #[test]
    fn test_bump_appends_to_first_row() {
        let mut tableau = t(&[&[1, 2]]);
        assert_eq!(bump(&mut tableau, 2), (0, 2));
        assert_eq!(tableau, t(&[&[1, 2, 2]]));
    }

    #[test]
    fn test_bump_cascades() {
        let mut tableau = t(&[&[1, 2, 2], &[3]]);
        // 1 bumps the first 2, which bumps 3, which starts a new row.
        assert_eq!(bump(&mut tableau, 1), (2, 0));
        assert_eq!(tableau, t(&[&[1, 1, 2], &[2], &[3]]));
    }

    #[test]
    fn test_bump_into_empty() {
        let mut tableau = Tableau::default();
        assert_eq!(bump(&mut tableau, 5), (0, 0));
        assert_eq!(tableau, t(&[&[5]]));
    }

    #[test]
    fn test_identity_and_reversal() {
        let (p, q) = schensted(&[1, 2, 3]).unwrap();
        assert_eq!(p, t(&[&[1, 2, 3]]));
        assert_eq!(q, t(&[&[1, 2, 3]]));

        let (p, q) = schensted(&[3, 2, 1]).unwrap();
        assert_eq!(p, t(&[&[1], &[2], &[3]]));
        assert_eq!(q, t(&[&[1], &[2], &[3]]));
    }

    #[test]
    fn test_known_permutation() {
        let (p, q) = schensted(&[3, 1, 2]).unwrap();
        assert_eq!(p, t(&[&[1, 2], &[3]]));
        assert_eq!(q, t(&[&[1, 3], &[2]]));
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(matches!(
            schensted(&[0, 1]),
            Err(CombinatoricsError::InvalidArgument(_))
        ));
        assert!(schensted(&[1, 0]).is_err());
        assert_eq!(schensted(&[]).unwrap(), (Tableau::default(), Tableau::default()));
    }

    #[test]
    fn test_bijection_for_small_n() {
        for n in 0..=5 {
            let mut seen = HashSet::new();
            for sigma in permutations(n) {
                let (p, q) = schensted(&sigma).unwrap();
                assert!(p.is_standard() && q.is_standard());
                assert_eq!(p.shape(), q.shape());
                assert!(seen.insert((p, q)), "pair repeated for {:?}", sigma);
            }
        }
    }

    #[test]
    fn test_inverse_swaps_tableaux() {
        for sigma in permutations(5) {
            let mut inverse = vec![0; sigma.len()];
            for (i, &x) in sigma.iter().enumerate() {
                inverse[x - 1] = i + 1;
            }
            let (p, q) = schensted(&sigma).unwrap();
            let (p_inv, q_inv) = schensted(&inverse).unwrap();
            assert_eq!(p, q_inv);
            assert_eq!(q, p_inv);
        }
    }
}
