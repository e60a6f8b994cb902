// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The charge statistic of Lascoux and Schützenberger.
//!
//! For a standard word, letter 1 gets index 0 and letter `r + 1` gets the
//! index of `r`, plus one when `r + 1` stands to the right of `r`. The charge
//! is the sum of the indices.
//!
//! A word whose content is a partition splits into standard subwords: find
//! the rightmost unused 1, then scan leftwards (wrapping around from the
//! start to the end) for an unused 2, and so on while the next letter is
//! still available. Charge is additive over these subwords. A wrap-around
//! in the scan is exactly the case where the next letter lies to the right.

use crate::error::{CombinatoricsError, Result};
use crate::partition::Partition;
use crate::ring::Polynomial;
use crate::tableau::semistandard_tableaux_with_weight;
use num_traits::Zero;

/// Letter multiplicities, checked to form a partition (no gaps, non-increasing).
fn partition_content(word: &[usize]) -> Result<Vec<usize>> {
    let largest = word.iter().copied().max().unwrap_or(0);
    let mut content = vec![0; largest];
    for &letter in word {
        if letter == 0 {
            return Err(CombinatoricsError::InvalidArgument(format!(
                "word {:?} contains 0",
                word
            )));
        }
        content[letter - 1] += 1;
    }
    if content.windows(2).any(|w| w[0] < w[1]) {
        return Err(CombinatoricsError::InvalidArgument(format!(
            "word {:?} does not have partition content {:?}",
            word, content
        )));
    }
    Ok(content)
}

/// Charge of a word whose content is a partition.
///
/// # Errors
///
/// `InvalidArgument` if the word contains 0, or some letter occurs more
/// often than a smaller one.
///
/// # Examples
///
/// ```
/// use kostka_search::kostka::charge;
///
/// assert_eq!(charge(&[3, 1, 2]).unwrap(), 2);
/// assert_eq!(charge(&[2, 3, 1, 1]).unwrap(), 1);
/// assert!(charge(&[1, 2, 2]).is_err());
/// ```
pub fn charge(word: &[usize]) -> Result<usize> {
    let mut remaining = partition_content(word)?;
    let n = word.len();
    let mut used = vec![false; n];
    let mut total = 0;

    while remaining.first().is_some_and(|&count| count > 0) {
        let mut position = n;
        let mut index = 0;
        let mut letter = 1;
        loop {
            let Some((found, wrapped)) = find_leftwards(word, &used, position, letter) else {
                break;
            };
            used[found] = true;
            remaining[letter - 1] -= 1;
            if wrapped {
                index += 1;
            }
            total += index;
            position = found;
            letter += 1;
            if remaining.get(letter - 1).map_or(true, |&count| count == 0) {
                break;
            }
        }
    }
    Ok(total)
}

/// Nearest unused `letter` strictly left of `position`, wrapping to the right end.
///
/// Returns the position found and whether the scan wrapped.
fn find_leftwards(
    word: &[usize],
    used: &[bool],
    position: usize,
    letter: usize,
) -> Option<(usize, bool)> {
    let n = word.len();
    (1..=n)
        .map(|step| (position + n - step) % n)
        .find(|&i| !used[i] && word[i] == letter)
        .map(|i| (i, i >= position))
}

/// Charge of a standard word: a permutation of `1..=n`.
///
/// # Errors
///
/// `InvalidArgument` if the word is not a permutation.
pub fn charge_standard(word: &[usize]) -> Result<usize> {
    let n = word.len();
    let mut positions = vec![usize::MAX; n];
    for (i, &letter) in word.iter().enumerate() {
        if letter == 0 || letter > n || positions[letter - 1] != usize::MAX {
            return Err(CombinatoricsError::InvalidArgument(format!(
                "word {:?} is not a permutation",
                word
            )));
        }
        positions[letter - 1] = i;
    }
    let mut index = 0;
    let mut total = 0;
    for pair in positions.windows(2) {
        if pair[1] > pair[0] {
            index += 1;
        }
        total += index;
    }
    Ok(total)
}

/// `K_{λμ}(t) = Σ t^charge(reading_word(T))` over semistandard tableaux of shape λ and weight μ.
///
/// Zero when λ is empty.
///
/// # Errors
///
/// `InvalidArgument` if λ and μ have different sums.
pub fn kostka_polynomial_by_charge(lambda: &Partition, mu: &Partition) -> Result<Polynomial> {
    if lambda.sum() != mu.sum() {
        return Err(CombinatoricsError::InvalidArgument(format!(
            "{} and {} have different sums",
            lambda, mu
        )));
    }
    let mut total = Polynomial::zero();
    if lambda.is_empty() {
        return Ok(total);
    }
    for tableau in semistandard_tableaux_with_weight(lambda, mu.parts()) {
        total += &Polynomial::monomial(charge(&tableau.reading_word())?);
    }
    Ok(total)
}
