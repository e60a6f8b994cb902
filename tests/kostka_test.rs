// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for Kostka-Foulkes polynomials.
//!
//! The fermionic sum over configurations is checked against tableau counts
//! and against the charge statistic, which share no code with it.

mod common;

use common::{brute_force_ssyt_count, p};
use kostka_search::kostka::{
    admissible_configurations, kostka_number, kostka_polynomial, kostka_polynomial_with,
    KostkaMethod,
};
use kostka_search::partition::{partitions, Partition};
use kostka_search::ring::Polynomial;
use kostka_search::state::Counters;
use kostka_search::tableau::num_standard_tableaux;
use num_bigint::BigInt;
use num_traits::{One, Zero};

fn poly(coefficients: &[i64]) -> Polynomial {
    Polynomial::from_coefficients(coefficients.iter().copied())
}

fn pairs(n: usize) -> impl Iterator<Item = (Partition, Partition)> {
    partitions(n).flat_map(move |lambda| partitions(n).map(move |mu| (lambda.clone(), mu)))
}

#[test]
fn test_value_at_one_counts_tableaux() {
    for n in 1..=6 {
        for (lambda, mu) in pairs(n) {
            let expected = brute_force_ssyt_count(lambda.parts(), mu.parts());
            assert_eq!(
                kostka_number(&lambda, &mu).unwrap(),
                BigInt::from(expected),
                "K({}, {})",
                lambda,
                mu
            );
        }
    }
}

#[test]
fn test_charge_method_agrees() {
    for n in 1..=7 {
        for (lambda, mu) in pairs(n) {
            let by_configurations =
                kostka_polynomial_with(&lambda, &mu, KostkaMethod::Configurations).unwrap();
            let by_charge = kostka_polynomial_with(&lambda, &mu, KostkaMethod::Charge).unwrap();
            assert_eq!(by_configurations, by_charge, "K({}, {})", lambda, mu);
        }
    }
}

#[test]
fn test_known_polynomials_of_four() {
    let cases: &[(&[usize], &[usize], &[i64])] = &[
        (&[4], &[1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 1]),
        (&[3, 1], &[1, 1, 1, 1], &[0, 0, 0, 1, 1, 1]),
        (&[2, 2], &[1, 1, 1, 1], &[0, 0, 1, 0, 1]),
        (&[2, 1, 1], &[1, 1, 1, 1], &[0, 1, 1, 1]),
        (&[1, 1, 1, 1], &[1, 1, 1, 1], &[1]),
        (&[4], &[2, 2], &[0, 0, 1]),
        (&[3, 1], &[2, 2], &[0, 1]),
        (&[4], &[2, 1, 1], &[0, 0, 0, 1]),
        (&[3, 1], &[2, 1, 1], &[0, 1, 1]),
        (&[2, 2], &[2, 1, 1], &[0, 1]),
        (&[3, 1], &[3, 1], &[1]),
    ];
    for &(lambda, mu, expected) in cases {
        assert_eq!(
            kostka_polynomial(&p(lambda), &p(mu)).unwrap(),
            poly(expected),
            "K({:?}, {:?})",
            lambda,
            mu
        );
    }
}

#[test]
fn test_diagonal_is_one_and_off_dominance_is_zero() {
    for n in 1..=7 {
        for (lambda, mu) in pairs(n) {
            let k = kostka_polynomial(&lambda, &mu).unwrap();
            if lambda == mu {
                assert!(k.is_one(), "K({}, {}) = {}", lambda, mu, k);
            } else if !lambda.dominates(&mu) {
                assert!(k.is_zero(), "K({}, {}) = {}", lambda, mu, k);
            }
        }
    }
}

#[test]
fn test_degree_and_leading_coefficient() {
    // K_{λμ} is monic of degree n(μ) - n(λ)
    for n in 1..=7 {
        for (lambda, mu) in pairs(n).filter(|(lambda, mu)| lambda.dominates(mu)) {
            let k = kostka_polynomial(&lambda, &mu).unwrap();
            let degree = mu.n_statistic() - lambda.n_statistic();
            assert_eq!(k.degree(), Some(degree), "K({}, {}) = {}", lambda, mu, k);
            assert!(k.coefficient(degree).is_one(), "K({}, {}) = {}", lambda, mu, k);
            assert!(
                k.coefficients().iter().all(|c| *c >= BigInt::zero()),
                "K({}, {}) = {}",
                lambda,
                mu,
                k
            );
        }
    }
}

#[test]
fn test_single_row_is_a_monomial() {
    for n in 1..=7 {
        let row = p(&[n]);
        for mu in partitions(n) {
            let k = kostka_polynomial(&row, &mu).unwrap();
            assert_eq!(k, Polynomial::monomial(mu.n_statistic()), "K({}, {})", row, mu);
        }
    }
}

#[test]
fn test_standard_weight_counts_standard_tableaux() {
    for n in 1..=7 {
        let ones = Partition::new(vec![1; n]).unwrap();
        for lambda in partitions(n) {
            assert_eq!(
                kostka_number(&lambda, &ones).unwrap(),
                num_standard_tableaux(&lambda),
                "K({}, {})",
                lambda,
                ones
            );
        }
    }
}

#[test]
fn test_common_leading_parts_are_ignored() {
    let stripped = kostka_polynomial(&p(&[2, 1]), &p(&[1, 1, 1])).unwrap();
    let padded = kostka_polynomial(&p(&[5, 2, 1]), &p(&[5, 1, 1, 1])).unwrap();
    assert_eq!(padded, stripped);
    assert_eq!(stripped, poly(&[0, 1, 1]));
}

#[test]
fn test_configurations_sum_to_polynomial() {
    let lambda = p(&[3, 2, 1]);
    let mu = p(&[2, 1, 1, 1, 1]);
    let mut configurations = admissible_configurations(&lambda, &mu).unwrap();
    let mut total = Polynomial::zero();
    let mut count = 0;
    for configuration in configurations.by_ref() {
        assert_eq!(configuration.levels()[0], mu);
        assert!(configuration.levels().last().is_some_and(Partition::is_empty));
        total += &configuration.term();
        count += 1;
    }
    assert_eq!(
        configurations.statistics().get(Counters::Configurations),
        count
    );
    assert_eq!(total, kostka_polynomial(&lambda, &mu).unwrap());
}

#[test]
fn test_configuration_levels_have_prescribed_sizes() {
    let lambda = p(&[3, 2, 1]);
    let mu = p(&[1, 1, 1, 1, 1, 1]);
    for configuration in admissible_configurations(&lambda, &mu).unwrap() {
        let sizes: Vec<usize> = configuration.levels().iter().map(Partition::sum).collect();
        assert_eq!(sizes, vec![6, 3, 1, 0]);
        for k in 1..configuration.levels().len() - 1 {
            for n in 1..=6 {
                assert!(configuration.vacancy(k, n) >= 0);
            }
        }
    }
}

#[test]
fn test_invalid_arguments() {
    assert!(kostka_polynomial(&p(&[2, 1]), &p(&[2])).is_err());
    assert!(kostka_polynomial_with(&p(&[3]), &p(&[2, 2]), KostkaMethod::Charge).is_err());
    assert!(admissible_configurations(&p(&[1]), &Partition::empty()).is_err());
    assert!(kostka_polynomial(&Partition::empty(), &Partition::empty())
        .unwrap()
        .is_zero());
}

#[test]
fn test_non_dominant_pair_has_no_configurations() {
    let mut configurations = admissible_configurations(&p(&[2, 2]), &p(&[3, 1])).unwrap();
    assert!(configurations.next().is_none());
}
