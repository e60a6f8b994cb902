// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generic ring arithmetic and quantum numbers.
//!
//! The generators never need arithmetic beyond counting, but the Kostka engine
//! and the quantum-number helpers work over any commutative ring with unit.
//! Instead of inspecting element types at runtime, the required capabilities
//! are expressed by the [`Ring`] trait.
//!
//! # Examples
//!
//! ```
//! use kostka_search::ring::{quantum_binomial, Polynomial};
//!
//! // [4 choose 2]_t = 1 + t + 2t^2 + t^3 + t^4
//! let b = quantum_binomial(4, 2, &Polynomial::t());
//! assert_eq!(b.to_string(), "1 + t + 2*t^2 + t^3 + t^4");
//! ```

pub mod polynomial;

pub use polynomial::Polynomial;

use crate::error::{CombinatoricsError, Result};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with unit.
///
/// `pow` has a default square-and-multiply implementation. `try_inverse`
/// returns `Some` exactly for the units of the ring.
pub trait Ring:
    Clone
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Raise `self` to a non-negative power.
    fn pow(&self, exp: usize) -> Self {
        num_traits::pow(self.clone(), exp)
    }

    /// Multiplicative inverse, if `self` is a unit.
    fn try_inverse(&self) -> Option<Self>;
}

impl Ring for i64 {
    fn try_inverse(&self) -> Option<Self> {
        match *self {
            1 | -1 => Some(*self),
            _ => None,
        }
    }
}

impl Ring for BigInt {
    fn try_inverse(&self) -> Option<Self> {
        if self.abs().is_one() {
            Some(self.clone())
        } else {
            None
        }
    }
}

/// The quantum number `[n]_q = 1 + q + ... + q^(n-1)`.
///
/// For negative `n`, `[n]_q = -q^n [-n]_q`, which needs `q` to be a unit of
/// the ring.
pub fn quantum_number<R: Ring>(n: i64, q: &R) -> Result<R> {
    let m = n.unsigned_abs() as usize;
    let mut sum = R::zero();
    let mut power = R::one();
    for _ in 0..m {
        sum = sum + power.clone();
        power = power * q.clone();
    }
    if n >= 0 {
        return Ok(sum);
    }
    let inverse = q.try_inverse().ok_or_else(|| {
        CombinatoricsError::NotInvertible(format!(
            "quantum number [{}] needs an invertible q",
            n
        ))
    })?;
    Ok(-(inverse.pow(m) * sum))
}

/// The quantum factorial `[n]_q! = [1]_q [2]_q ... [n]_q`.
pub fn quantum_factorial<R: Ring>(n: usize, q: &R) -> R {
    let mut product = R::one();
    let mut number = R::zero();
    let mut power = R::one();
    for _ in 0..n {
        number = number + power.clone();
        power = power * q.clone();
        product = product * number.clone();
    }
    product
}

/// The Gaussian binomial coefficient `[n choose k]_q`.
///
/// Computed with the q-Pascal recurrence
/// `[i choose j] = [i-1 choose j-1] + q^j [i-1 choose j]`, so no division is
/// needed and any ring works. Returns zero when `k > n`.
pub fn quantum_binomial<R: Ring>(n: usize, k: usize, q: &R) -> R {
    if k > n {
        return R::zero();
    }
    let k = k.min(n - k);
    let mut powers = Vec::with_capacity(k + 1);
    let mut power = R::one();
    for _ in 0..=k {
        powers.push(power.clone());
        power = power * q.clone();
    }

    let mut row = vec![R::zero(); k + 1];
    row[0] = R::one();
    for i in 1..=n {
        for j in (1..=k.min(i)).rev() {
            row[j] = row[j - 1].clone() + powers[j].clone() * row[j].clone();
        }
    }
    row.swap_remove(k)
}
