// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Standard Young tableaux.

use super::{hook_lengths, Tableau, WeightedTableaux};
use crate::partition::{partitions, Partition};
use num_bigint::BigInt;
use num_traits::One;

/// All standard tableaux of `shape`.
///
/// A standard tableau is a semistandard tableau whose content is one copy
/// each of `1..=n`.
///
/// # Examples
///
/// ```
/// use kostka_search::partition::Partition;
/// use kostka_search::tableau::standard_tableaux;
///
/// let shape = Partition::new(vec![3, 2]).unwrap();
/// assert_eq!(standard_tableaux(&shape).count(), 5);
/// ```
pub fn standard_tableaux(shape: &Partition) -> WeightedTableaux {
    WeightedTableaux::new(shape, &vec![1; shape.sum()])
}

/// Standard tableaux of every shape of size `n`.
pub fn standard_tableaux_of_size(n: usize) -> impl Iterator<Item = Tableau> {
    partitions(n).flat_map(|shape| standard_tableaux(&shape))
}

/// Number of standard tableaux of `shape`, by the hook-length formula `n! / Π h(c)`.
pub fn num_standard_tableaux(shape: &Partition) -> BigInt {
    let factorial: BigInt = (1..=shape.sum()).map(BigInt::from).product();
    let hooks = hook_lengths(shape)
        .into_rows()
        .into_iter()
        .flatten()
        .fold(BigInt::one(), |acc, h| acc * BigInt::from(h));
    factorial / hooks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(parts: &[usize]) -> Partition {
        Partition::new(parts.to_vec()).unwrap()
    }

    #[test]
    fn test_counts_match_hook_formula() {
        for n in 0..=7 {
            for shape in partitions(n) {
                let all: Vec<Tableau> = standard_tableaux(&shape).collect();
                assert_eq!(BigInt::from(all.len()), num_standard_tableaux(&shape), "{}", shape);
                assert!(all.iter().all(Tableau::is_standard));
            }
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(num_standard_tableaux(&p(&[2, 1])), BigInt::from(2));
        assert_eq!(num_standard_tableaux(&p(&[3, 2, 1])), BigInt::from(16));
        assert_eq!(num_standard_tableaux(&p(&[4, 4, 4])), BigInt::from(462));
        assert_eq!(num_standard_tableaux(&Partition::empty()), BigInt::from(1));
    }

    #[test]
    fn test_of_size_counts_involutions() {
        // Σ_λ⊢n f_λ equals the number of involutions of n.
        let involutions = [1, 1, 2, 4, 10, 26, 76];
        for (n, &count) in involutions.iter().enumerate() {
            assert_eq!(standard_tableaux_of_size(n).count(), count, "n = {}", n);
        }
    }
}
