// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.
//!
//! The oracles here are deliberately naive: they enumerate by plain recursion
//! and check definitions directly, so they share no code with the generators
//! under test.

#![allow(dead_code)]

use kostka_search::Partition;
use proptest::prelude::*;

pub fn p(parts: &[usize]) -> Partition {
    Partition::new(parts.to_vec()).unwrap()
}

/// All partitions of `n` with parts at most `largest`, in decreasing lexicographic order.
fn partitions_below(n: usize, largest: usize) -> Vec<Vec<usize>> {
    if n == 0 {
        return vec![Vec::new()];
    }
    let mut result = Vec::new();
    for first in (1..=largest.min(n)).rev() {
        for mut rest in partitions_below(n - first, first) {
            rest.insert(0, first);
            result.push(rest);
        }
    }
    result
}

/// All partitions of `n`, in decreasing lexicographic order.
pub fn brute_force_partitions(n: usize) -> Vec<Vec<usize>> {
    partitions_below(n, n)
}

/// Number of semistandard fillings of `shape` whose content is exactly `weight`.
pub fn brute_force_ssyt_count(shape: &[usize], weight: &[usize]) -> usize {
    if shape.iter().sum::<usize>() != weight.iter().sum::<usize>() {
        return 0;
    }
    let cells: Vec<(usize, usize)> = shape
        .iter()
        .enumerate()
        .flat_map(|(i, &len)| (0..len).map(move |j| (i, j)))
        .collect();
    let mut filling: Vec<Vec<usize>> = shape.iter().map(|&len| vec![0; len]).collect();
    let mut remaining = weight.to_vec();
    fill(&cells, 0, &mut filling, &mut remaining)
}

fn fill(
    cells: &[(usize, usize)],
    index: usize,
    filling: &mut Vec<Vec<usize>>,
    remaining: &mut Vec<usize>,
) -> usize {
    let Some(&(i, j)) = cells.get(index) else {
        return 1;
    };
    let mut count = 0;
    for value in 1..=remaining.len() {
        if remaining[value - 1] == 0 {
            continue;
        }
        if j > 0 && filling[i][j - 1] > value {
            continue;
        }
        if i > 0 && filling[i - 1][j] >= value {
            continue;
        }
        filling[i][j] = value;
        remaining[value - 1] -= 1;
        count += fill(cells, index + 1, filling, remaining);
        remaining[value - 1] += 1;
    }
    filling[i][j] = 0;
    count
}

/// `n!`
pub fn factorial(n: usize) -> usize {
    (1..=n).product()
}

/// A random partition with at most `max_len` parts, each at most `max_part`.
pub fn partition_strategy(max_len: usize, max_part: usize) -> impl Strategy<Value = Partition> {
    prop::collection::vec(1..=max_part, 0..=max_len).prop_map(|mut parts| {
        parts.sort_unstable_by(|a, b| b.cmp(a));
        Partition::new(parts).unwrap()
    })
}

/// A random partition of exactly `n`, chosen uniformly from all of them.
pub fn partition_of(n: usize) -> impl Strategy<Value = Partition> {
    let all: Vec<Partition> = brute_force_partitions(n)
        .into_iter()
        .map(|parts| Partition::new(parts).unwrap())
        .collect();
    prop::sample::select(all)
}

/// All permutations of `1..=n`, in lexicographic order.
pub fn permutations(n: usize) -> Vec<Vec<usize>> {
    if n == 0 {
        return vec![Vec::new()];
    }
    let mut result = Vec::new();
    for first in 1..=n {
        for rest in permutations(n - 1) {
            let mut permutation = vec![first];
            permutation.extend(rest.into_iter().map(|x| if x >= first { x + 1 } else { x }));
            result.push(permutation);
        }
    }
    result
}
