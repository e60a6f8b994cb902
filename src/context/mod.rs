// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context for the admissible-configuration search.
//!
//! The SearchContext combines:
//! - Immutable data fixed for one search (the shapes and level sizes)
//! - Mutable search state, with scalar registers tracked on the trail
//! - Search statistics
//!
//! Each search owns its context, so independent searches can run in parallel
//! without coordination.

use crate::partition::Partition;
use crate::state::statistics::Statistics;
use crate::trail::{Slot, Trail};

/// Immutable data for one search.
#[derive(Debug, Clone)]
pub struct MemoizedData {
    /// Target shape λ.
    pub lambda: Partition,
    /// Weight μ, which is also level 0 of every configuration.
    pub mu: Partition,
    /// `sizes[k]` is the size of level `k`: the sum of the parts of λ after the k-th.
    pub sizes: Vec<usize>,
}

impl MemoizedData {
    pub fn new(lambda: &Partition, mu: &Partition) -> Self {
        let sizes = (0..=lambda.len())
            .map(|k| lambda.iter().skip(k).sum())
            .collect();
        Self {
            lambda: lambda.clone(),
            mu: mu.clone(),
            sizes,
        }
    }
}

/// Mutable search state.
///
/// Levels above the current search depth hold stale values; predicates only
/// read levels the search has already chosen.
#[derive(Debug)]
pub struct DynamicState {
    /// Configuration levels `v^0 = μ, v^1, ..., v^l = ∅`.
    pub configuration: Vec<Partition>,
    /// Trail register holding the charge of the levels chosen so far.
    pub charge: Slot,
}

/// Search context passed through the search.
///
/// ```text
/// SearchContext {
///     memo: MemoizedData,        // immutable, per search
///     trail: Trail,              // registers, rewound on backtrack
///     state: DynamicState,       // configuration levels
///     statistics: Statistics,    // counters
/// }
/// ```
#[derive(Debug)]
pub struct SearchContext {
    pub memo: MemoizedData,
    pub trail: Trail,
    pub state: DynamicState,
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a context for configurations of `lambda` with weight `mu`.
    ///
    /// The charge register starts at `n(μ)`.
    pub fn new(lambda: &Partition, mu: &Partition) -> Self {
        let memo = MemoizedData::new(lambda, mu);
        let mut trail = Trail::new();
        let charge = trail.register(mu.n_statistic() as i64);
        let mut configuration = vec![Partition::empty(); lambda.len() + 1];
        configuration[0] = mu.clone();
        Self {
            memo,
            trail,
            state: DynamicState {
                configuration,
                charge,
            },
            statistics: Statistics::new(),
        }
    }

    /// Number of parts of λ; the configuration has levels `0..=levels()`.
    pub fn levels(&self) -> usize {
        self.memo.lambda.len()
    }

    pub fn level(&self, k: usize) -> &Partition {
        &self.state.configuration[k]
    }

    pub fn set_level(&mut self, k: usize, partition: Partition) {
        self.state.configuration[k] = partition;
    }

    /// Charge of the levels chosen so far.
    pub fn charge(&self) -> i64 {
        self.trail.get(self.state.charge)
    }

    /// Add to the charge register (trail-tracked).
    pub fn add_charge(&mut self, delta: i64) {
        self.trail.add(self.state.charge, delta);
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new(&Partition::empty(), &Partition::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(parts: &[usize]) -> Partition {
        Partition::new(parts.to_vec()).unwrap()
    }

    #[test]
    fn test_level_sizes() {
        let memo = MemoizedData::new(&p(&[3, 2, 1]), &p(&[2, 2, 1, 1]));
        assert_eq!(memo.sizes, vec![6, 3, 1, 0]);
    }

    #[test]
    fn test_search_context_new() {
        let ctx = SearchContext::new(&p(&[2, 1]), &p(&[1, 1, 1]));
        assert_eq!(ctx.trail.len(), 0);
        assert_eq!(ctx.levels(), 2);
        assert_eq!(ctx.level(0), &p(&[1, 1, 1]));
        assert_eq!(ctx.level(2), &Partition::empty());
        assert_eq!(ctx.charge(), 3);
    }

    #[test]
    fn test_charge_is_trailed() {
        let mut ctx = SearchContext::new(&p(&[2, 1]), &p(&[2, 1]));
        let checkpoint = ctx.trail.checkpoint();
        ctx.add_charge(4);
        ctx.add_charge(-1);
        assert_eq!(ctx.charge(), 4);
        ctx.trail.rewind_to(checkpoint);
        assert_eq!(ctx.charge(), 1);
    }

    #[test]
    fn test_default_context() {
        let ctx = SearchContext::default();
        assert_eq!(ctx.levels(), 0);
        assert_eq!(ctx.charge(), 0);
    }
}
