// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Univariate polynomials in `t` with arbitrary-precision integer coefficients.

use super::Ring;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A polynomial `c_0 + c_1 t + c_2 t^2 + ...` over the integers.
///
/// Coefficients are stored in ascending degree with no trailing zeros, so the
/// zero polynomial has an empty coefficient vector and equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Polynomial {
    coefficients: Vec<BigInt>,
}

impl Polynomial {
    /// Build a polynomial from coefficients in ascending degree.
    pub fn from_coefficients<I, C>(coefficients: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<BigInt>,
    {
        let mut p = Self {
            coefficients: coefficients.into_iter().map(Into::into).collect(),
        };
        p.trim();
        p
    }

    /// The constant polynomial `c`.
    pub fn constant(c: impl Into<BigInt>) -> Self {
        Self::from_coefficients([c.into()])
    }

    /// The indeterminate `t`.
    pub fn t() -> Self {
        Self::monomial(1)
    }

    /// The monomial `t^degree`.
    pub fn monomial(degree: usize) -> Self {
        let mut coefficients = vec![BigInt::zero(); degree + 1];
        coefficients[degree] = BigInt::one();
        Self { coefficients }
    }

    /// Coefficients in ascending degree.
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    /// Coefficient of `t^degree` (zero past the leading term).
    pub fn coefficient(&self, degree: usize) -> BigInt {
        self.coefficients
            .get(degree)
            .cloned()
            .unwrap_or_else(BigInt::zero)
    }

    /// Degree of the polynomial, `None` for zero.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// Evaluate at `t` using Horner's rule.
    pub fn evaluate(&self, t: &BigInt) -> BigInt {
        self.coefficients
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, c| acc * t + c)
    }

    /// Multiply by `t^k`.
    pub fn shift(&self, k: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let mut coefficients = vec![BigInt::zero(); k];
        coefficients.extend(self.coefficients.iter().cloned());
        Self { coefficients }
    }

    fn trim(&mut self) {
        while self.coefficients.last().is_some_and(Zero::is_zero) {
            self.coefficients.pop();
        }
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Self {
            coefficients: Vec::new(),
        }
    }

    fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Self::monomial(0)
    }
}

impl Ring for Polynomial {
    fn try_inverse(&self) -> Option<Self> {
        match self.coefficients.as_slice() {
            [c] if c.abs().is_one() => Some(self.clone()),
            _ => None,
        }
    }
}

impl AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        if self.coefficients.len() < rhs.coefficients.len() {
            self.coefficients
                .resize(rhs.coefficients.len(), BigInt::zero());
        }
        for (a, b) in self.coefficients.iter_mut().zip(&rhs.coefficients) {
            *a += b;
        }
        self.trim();
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        let mut sum = self.clone();
        sum += rhs;
        sum
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(mut self, rhs: Polynomial) -> Polynomial {
        self += &rhs;
        self
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial {
            coefficients: self.coefficients.into_iter().map(|c| -c).collect(),
        }
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        self + (-rhs)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }
        let mut coefficients =
            vec![BigInt::zero(); self.coefficients.len() + rhs.coefficients.len() - 1];
        for (i, a) in self.coefficients.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in rhs.coefficients.iter().enumerate() {
                coefficients[i + j] += a * b;
            }
        }
        let mut product = Polynomial { coefficients };
        product.trim();
        product
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

impl fmt::Display for Polynomial {
    /// Format in ascending degree, e.g. `1 + t + 2*t^2 - t^3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (degree, c) in self.coefficients.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            let magnitude = c.abs();
            if first {
                if c.is_negative() {
                    write!(f, "-")?;
                }
            } else if c.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;

            match (degree, magnitude.is_one()) {
                (0, _) => write!(f, "{}", magnitude)?,
                (1, true) => write!(f, "t")?,
                (1, false) => write!(f, "{}*t", magnitude)?,
                (_, true) => write!(f, "t^{}", degree)?,
                (_, false) => write!(f, "{}*t^{}", magnitude, degree)?,
            }
        }
        Ok(())
    }
}
