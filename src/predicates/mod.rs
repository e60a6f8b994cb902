// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! # Organization
//!
//! - `configuration`: `ConfigurationPredicate`, which chooses one configuration
//!   level per round and prunes by vacancy numbers
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod configuration;

pub use configuration::ConfigurationPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Ending a program with
/// it runs the search to exhaustion, which is useful when solutions are
/// collected by side effects such as counters.
///
/// # Example
///
/// ```
/// use kostka_search::context::SearchContext;
/// use kostka_search::engine::EngineBuilder;
/// use kostka_search::partition::Partition;
/// use kostka_search::predicates::{ConfigurationPredicate, FailPredicate};
/// use kostka_search::state::{Counters, Statistics};
///
/// let lambda = Partition::new(vec![2, 2]).unwrap();
/// let mu = Partition::new(vec![1, 1, 1, 1]).unwrap();
/// let mut ctx = SearchContext::new(&lambda, &mu);
/// let engine = EngineBuilder::new()
///     .add(Box::new(ConfigurationPredicate::new()))
///     .add(Statistics::counting_predicate(Counters::Configurations, None))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// assert!(engine.search(&mut ctx).is_none());
/// assert_eq!(ctx.statistics.get(Counters::Configurations), 2);
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Predicate that suspends the search, handing the current state to the caller.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
