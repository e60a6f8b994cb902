// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Kostka-Foulkes polynomials.
//!
//! `K_{λμ}(t)` is computed from the Kirillov-Reshetikhin fermionic formula as
//! a sum over admissible configurations. A configuration of `(λ, μ)` with
//! `l = len(λ)` is a sequence of partitions
//!
//! ```text
//! v^0 = μ,  v^1, ..., v^(l-1),  v^l = ∅      with |v^k| = λ_(k+1) + ... + λ_l
//! ```
//!
//! and it is admissible when every vacancy number
//!
//! ```text
//! P_n^(k) = Q_n(v^(k-1)) - 2 Q_n(v^k) + Q_n(v^(k+1)),    Q_n(ρ) = Σ_j min(n, ρ_j)
//! ```
//!
//! is non-negative for `1 <= k < l`. Each admissible configuration contributes
//!
//! ```text
//! t^c(v) · Π_{k, n : m_n(v^k) > 0} [P_n^(k) + m_n(v^k) choose m_n(v^k)]_t
//! ```
//!
//! with charge `c(v) = n(μ) + Σ_{k=1}^{l-1} (M[v^k, v^k] - M[v^k, v^(k-1)])` and
//! `M[ρ, κ] = Σ_{i,j} min(ρ_i, κ_j)`.
//!
//! The configurations are enumerated by the search engine: a
//! [`ConfigurationPredicate`] chooses one level per round and prunes by
//! vacancy numbers, and a suspend predicate hands each complete
//! configuration to [`AdmissibleConfigurations`].
//!
//! An independent route, [`kostka_polynomial_by_charge`], sums `t^charge` over
//! semistandard tableaux.
//!
//! # Examples
//!
//! ```
//! use kostka_search::kostka::kostka_polynomial;
//! use kostka_search::partition::Partition;
//!
//! let lambda = Partition::new(vec![2, 1]).unwrap();
//! let mu = Partition::new(vec![1, 1, 1]).unwrap();
//! assert_eq!(kostka_polynomial(&lambda, &mu).unwrap().to_string(), "t + t^2");
//! ```

pub mod charge;

pub use charge::{charge, charge_standard, kostka_polynomial_by_charge};

use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::error::{CombinatoricsError, Result};
use crate::partition::Partition;
use crate::predicates::{ConfigurationPredicate, SuspendPredicate};
use crate::ring::{quantum_binomial, Polynomial};
use crate::state::{Counters, Statistics};
use num_bigint::BigInt;
use num_traits::{One, Zero};
use strum_macros::{Display, EnumString};
use tracing::{debug, trace};

/// How [`kostka_polynomial_with`] computes its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum KostkaMethod {
    /// Sum over admissible configurations (fermionic formula).
    #[default]
    Configurations,
    /// Sum of `t^charge` over semistandard tableaux.
    Charge,
}

/// `M[ρ, κ] = Σ_{i,j} min(ρ_i, κ_j)`.
pub fn pairwise_min_sum(rho: &Partition, kappa: &Partition) -> usize {
    rho.iter()
        .map(|&r| kappa.iter().map(|&k| r.min(k)).sum::<usize>())
        .sum()
}

/// `Q_n(ρ) = Σ_j min(n, ρ_j)`: the number of cells of ρ in its first n columns.
fn columns_up_to(n: usize, rho: &Partition) -> i64 {
    rho.iter().map(|&p| p.min(n)).sum::<usize>() as i64
}

/// Vacancy number `P_n^(k)` of a configuration given as levels `v^0..=v^l`.
///
/// # Panics
///
/// Panics unless `1 <= k` and `k + 1 < configuration.len()`.
pub fn vacancy(configuration: &[Partition], k: usize, n: usize) -> i64 {
    columns_up_to(n, &configuration[k - 1]) - 2 * columns_up_to(n, &configuration[k])
        + columns_up_to(n, &configuration[k + 1])
}

/// Whether every vacancy number at level `k` is non-negative.
///
/// Beyond the largest part of the three levels involved, `P_n^(k)` is
/// constant and equal to `λ_k - λ_(k+1) >= 0`, so only smaller `n` are checked.
pub(crate) fn is_admissible_at(configuration: &[Partition], k: usize) -> bool {
    let top = configuration[k - 1..=k + 1]
        .iter()
        .map(Partition::largest_part)
        .max()
        .unwrap_or(0);
    (1..=top).all(|n| vacancy(configuration, k, n) >= 0)
}

/// Contribution `M[v^k, v^k] - M[v^k, v^(k-1)]` of level `k` to the charge.
pub(crate) fn level_charge(configuration: &[Partition], k: usize) -> i64 {
    let level = &configuration[k];
    pairwise_min_sum(level, level) as i64 - pairwise_min_sum(level, &configuration[k - 1]) as i64
}

/// A complete admissible configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    levels: Vec<Partition>,
    charge: usize,
}

impl Configuration {
    /// All levels `v^0 = μ, ..., v^l = ∅`.
    pub fn levels(&self) -> &[Partition] {
        &self.levels
    }

    pub fn charge(&self) -> usize {
        self.charge
    }

    /// Vacancy number `P_n^(k)` for an inner level `1 <= k < l`.
    pub fn vacancy(&self, k: usize, n: usize) -> i64 {
        vacancy(&self.levels, k, n)
    }

    /// This configuration's term of the fermionic formula.
    pub fn term(&self) -> Polynomial {
        let t = Polynomial::t();
        let mut term = Polynomial::monomial(self.charge);
        for k in 1..self.levels.len().saturating_sub(1) {
            let counts = self.levels[k].to_part_count();
            for n in 1..=counts.max_part() {
                let m = counts.multiplicity(n);
                if m == 0 {
                    continue;
                }
                let vacancy = self.vacancy(k, n);
                debug_assert!(vacancy >= 0, "negative vacancy {} at ({}, {})", vacancy, k, n);
                let p = usize::try_from(vacancy).unwrap_or(0);
                term = term * quantum_binomial(p + m, m, &t);
            }
        }
        term
    }
}

/// Lazy iterator over admissible configurations.
///
/// The search engine suspends at each complete configuration; `next` resumes it.
#[derive(Debug)]
pub struct AdmissibleConfigurations {
    ctx: SearchContext,
    engine: Option<SearchEngine>,
}

impl AdmissibleConfigurations {
    fn new(lambda: &Partition, mu: &Partition) -> Self {
        let engine = lambda.dominates(mu).then(|| {
            EngineBuilder::new()
                .add(Box::new(ConfigurationPredicate::new()))
                .add(Statistics::counting_predicate(Counters::Configurations, None))
                .terminal(Box::new(SuspendPredicate))
                .build()
        });
        Self {
            ctx: SearchContext::new(lambda, mu),
            engine,
        }
    }

    /// Counters accumulated so far.
    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }
}

impl Iterator for AdmissibleConfigurations {
    type Item = Configuration;

    fn next(&mut self) -> Option<Configuration> {
        let engine = self.engine.take()?;
        self.engine = engine.search(&mut self.ctx);
        self.engine.as_ref()?;

        let charge = self.ctx.charge();
        debug_assert!(charge >= 0, "negative charge {}", charge);
        let configuration = Configuration {
            levels: self.ctx.state.configuration.clone(),
            charge: usize::try_from(charge).unwrap_or(0),
        };
        trace!(levels = ?configuration.levels, charge, "admissible configuration");
        Some(configuration)
    }
}

fn check_sizes(lambda: &Partition, mu: &Partition) -> Result<()> {
    if lambda.sum() != mu.sum() {
        return Err(CombinatoricsError::InvalidArgument(format!(
            "{} and {} have different sums",
            lambda, mu
        )));
    }
    Ok(())
}

/// Admissible configurations of `(λ, μ)`.
///
/// Empty when λ does not dominate μ.
///
/// # Errors
///
/// `InvalidArgument` if λ and μ have different sums.
pub fn admissible_configurations(
    lambda: &Partition,
    mu: &Partition,
) -> Result<AdmissibleConfigurations> {
    check_sizes(lambda, mu)?;
    Ok(AdmissibleConfigurations::new(lambda, mu))
}

/// The Kostka-Foulkes polynomial `K_{λμ}(t)`, by the fermionic formula.
///
/// Zero when λ is empty or does not dominate μ.
///
/// # Errors
///
/// `InvalidArgument` if λ and μ have different sums.
pub fn kostka_polynomial(lambda: &Partition, mu: &Partition) -> Result<Polynomial> {
    kostka_polynomial_with(lambda, mu, KostkaMethod::Configurations)
}

/// The Kostka-Foulkes polynomial, computed with the chosen method.
pub fn kostka_polynomial_with(
    lambda: &Partition,
    mu: &Partition,
    method: KostkaMethod,
) -> Result<Polynomial> {
    check_sizes(lambda, mu)?;
    if lambda.is_empty() || !lambda.dominates(mu) {
        debug!(%lambda, %mu, "no tableaux: polynomial is zero");
        return Ok(Polynomial::zero());
    }
    match method {
        KostkaMethod::Configurations => Ok(by_configurations(lambda, mu)),
        KostkaMethod::Charge => kostka_polynomial_by_charge(lambda, mu),
    }
}

fn by_configurations(lambda: &Partition, mu: &Partition) -> Polynomial {
    // K is unchanged by removing a common leading run of parts.
    let common = lambda
        .iter()
        .zip(mu.iter())
        .take_while(|(a, b)| a == b)
        .count();
    let lambda = Partition::from_parts_unchecked(lambda.parts()[common..].to_vec());
    let mu = Partition::from_parts_unchecked(mu.parts()[common..].to_vec());
    if lambda == mu {
        return Polynomial::one();
    }

    let mut configurations = AdmissibleConfigurations::new(&lambda, &mu);
    let mut total = Polynomial::zero();
    for configuration in configurations.by_ref() {
        total += &configuration.term();
    }
    debug!(
        %lambda,
        %mu,
        stripped = common,
        statistics = %configurations.statistics(),
        "summed configurations"
    );
    total
}

/// `K_{λμ}(1)`: the number of semistandard tableaux of shape λ and weight μ.
pub fn kostka_number(lambda: &Partition, mu: &Partition) -> Result<BigInt> {
    Ok(kostka_polynomial(lambda, mu)?.evaluate(&BigInt::one()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn p(parts: &[usize]) -> Partition {
        Partition::new(parts.to_vec()).unwrap()
    }

    fn poly(coefficients: &[i64]) -> Polynomial {
        Polynomial::from_coefficients(coefficients.iter().copied())
    }

    #[test]
    fn test_pairwise_min_sum() {
        assert_eq!(pairwise_min_sum(&p(&[2]), &p(&[1, 1, 1, 1])), 4);
        assert_eq!(pairwise_min_sum(&p(&[3, 1]), &p(&[2, 2])), 6);
        assert_eq!(pairwise_min_sum(&p(&[2]), &Partition::empty()), 0);
    }

    #[test]
    fn test_vacancy_numbers() {
        let configuration = vec![p(&[1, 1, 1, 1]), p(&[2]), p(&[1]), Partition::empty()];
        assert_eq!(vacancy(&configuration, 1, 1), 3);
        assert_eq!(vacancy(&configuration, 1, 2), 1);
        assert_eq!(vacancy(&configuration, 2, 1), -1);
        assert!(is_admissible_at(&configuration, 1));
        assert!(!is_admissible_at(&configuration, 2));
    }

    #[test]
    fn test_known_polynomials() {
        let cases: &[(&[usize], &[usize], &[i64])] = &[
            (&[2, 1], &[1, 1, 1], &[0, 1, 1]),
            (&[2], &[1, 1], &[0, 1]),
            (&[2, 2], &[1, 1, 1, 1], &[0, 0, 1, 0, 1]),
            (&[3, 1], &[2, 1, 1], &[0, 1, 1]),
            (&[2, 1, 1], &[1, 1, 1, 1], &[0, 1, 1, 1]),
            (&[3], &[1, 1, 1], &[0, 0, 0, 1]),
            (&[3, 1], &[1, 1, 1, 1], &[0, 0, 0, 1, 1, 1]),
        ];
        for &(lambda, mu, expected) in cases {
            let found = kostka_polynomial(&p(lambda), &p(mu)).unwrap();
            assert_eq!(found, poly(expected), "K_{:?},{:?}", lambda, mu);
        }
    }

    #[test]
    fn test_diagonal_is_one() {
        for parts in [&[1][..], &[2, 1], &[3, 3, 1], &[4, 2, 2, 1]] {
            assert_eq!(kostka_polynomial(&p(parts), &p(parts)).unwrap(), Polynomial::one());
        }
    }

    #[test]
    fn test_non_dominant_is_zero() {
        assert!(kostka_polynomial(&p(&[1, 1, 1]), &p(&[2, 1])).unwrap().is_zero());
        assert!(kostka_polynomial(&p(&[2, 2, 2]), &p(&[3, 1, 1, 1])).unwrap().is_zero());
    }

    #[test]
    fn test_empty_is_zero() {
        let empty = Partition::empty();
        assert!(kostka_polynomial(&empty, &empty).unwrap().is_zero());
    }

    #[test]
    fn test_unequal_sums_rejected() {
        assert!(matches!(
            kostka_polynomial(&p(&[2, 1]), &p(&[2])),
            Err(CombinatoricsError::InvalidArgument(_))
        ));
        assert!(admissible_configurations(&p(&[2]), &p(&[1])).is_err());
    }

    #[test]
    fn test_configuration_terms() {
        let configurations: Vec<Configuration> =
            admissible_configurations(&p(&[2, 2]), &p(&[1, 1, 1, 1]))
                .unwrap()
                .collect();
        let charges: Vec<usize> = configurations.iter().map(Configuration::charge).collect();
        assert_eq!(charges, vec![4, 2]);
        assert_eq!(configurations[0].levels()[1], p(&[2]));
        assert_eq!(configurations[0].term(), Polynomial::monomial(4));
        assert_eq!(configurations[1].term(), Polynomial::monomial(2));
    }

    #[test]
    fn test_admissible_vacancies_are_nonnegative() {
        use crate::partition::partitions;
        for lambda in partitions(5) {
            for mu in partitions(5) {
                let mut total = Polynomial::zero();
                for configuration in admissible_configurations(&lambda, &mu).unwrap() {
                    let levels = configuration.levels();
                    for k in 1..levels.len() - 1 {
                        for &n in levels[k].iter() {
                            assert!(configuration.vacancy(k, n) >= 0, "{:?}", levels);
                        }
                    }
                    total += &configuration.term();
                }
                assert_eq!(total, kostka_polynomial(&lambda, &mu).unwrap());
            }
        }
    }

    #[test]
    fn test_statistics_track_search() {
        let mut configurations =
            admissible_configurations(&p(&[2, 1, 1]), &p(&[1, 1, 1, 1])).unwrap();
        assert_eq!(configurations.by_ref().count(), 1);
        assert_eq!(configurations.statistics().get(Counters::Configurations), 1);
        assert_eq!(configurations.statistics().get(Counters::VacancyPruned), 1);
    }

    #[test]
    fn test_kostka_number() {
        assert_eq!(kostka_number(&p(&[3, 1]), &p(&[1, 1, 1, 1])).unwrap(), BigInt::from(3));
        assert_eq!(kostka_number(&p(&[2, 2]), &p(&[2, 1, 1])).unwrap(), BigInt::from(1));
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!(KostkaMethod::from_str("charge").unwrap(), KostkaMethod::Charge);
        assert_eq!(KostkaMethod::Configurations.to_string(), "configurations");
        assert!(KostkaMethod::from_str("nope").is_err());
    }
}
