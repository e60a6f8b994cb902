// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail to restore registers
//! automatically on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution follows a WAM-like model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! A deterministic success is never re-entered: on backtracking the engine
//! passes straight through it to the nearest open choice point. Resuming a
//! suspended engine backtracks out of the suspending predicate, so repeated
//! calls to [`SearchEngine::search`] visit every solution once.
//!
//! # Example
//!
//! ```
//! use kostka_search::context::SearchContext;
//! use kostka_search::engine::{EngineBuilder, Predicate, PredicateResult};
//! use kostka_search::predicates::SuspendPredicate;
//!
//! #[derive(Debug)]
//! struct Three;
//!
//! impl Predicate for Three {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         PredicateResult::Choices(3)
//!     }
//!
//!     fn retry_pred(&mut self, _ctx: &mut SearchContext, _round: usize, _choice: usize) -> PredicateResult {
//!         PredicateResult::Success
//!     }
//! }
//!
//! let mut ctx = SearchContext::default();
//! let mut engine = EngineBuilder::new()
//!     .add(Box::new(Three))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! let mut solutions = 0;
//! while let Some(suspended) = engine.search(&mut ctx) {
//!     solutions += 1;
//!     engine = suspended;
//! }
//! assert_eq!(solutions, 3);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;
use tracing::{debug, trace};

/// Initial capacity of the predicate stack.
const INITIAL_STACK_SIZE: usize = 64;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Next choice to try (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint,
        }
    }

    /// A deterministic success has no alternatives left.
    fn exhaust(&mut self) {
        self.in_choice_mode = true;
        self.current_choice = 0;
        self.num_choices = 0;
    }
}

/// Search engine that coordinates predicate execution and backtracking.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Whether the top of the stack is a suspended predicate.
    suspended: bool,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which checks that the sequence ends with a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(INITIAL_STACK_SIZE),
            suspended: false,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search until the next suspension.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended; calling `search` again resumes by backtracking
    /// - `None` if exhausted (backtracked past the first predicate)
    ///
    /// Solutions are reported through `ctx`, not through the return value.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence runs off its end without a terminal
    /// predicate, or if `retry_pred` returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.suspended {
            // The suspending predicate fails on resume.
            self.suspended = false;
            self.stack.pop();
            trace!("resuming search at depth {}", self.stack.len());
        } else {
            self.stack.clear();
            self.try_count = 0;
            self.retry_count = 0;
            if self.predicates.is_empty() {
                return None;
            }
            debug!("starting search with {} predicates", self.predicates.len());
            self.stack.push(StackEntry::new(0, 0, ctx.trail.checkpoint()));
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                debug!(
                    tries = self.try_count,
                    retries = self.retry_count,
                    "search exhausted"
                );
                return None;
            };

            // Rewind trail to this entry's checkpoint
            ctx.trail.rewind_to(entry.trail_checkpoint);

            if !entry.in_choice_mode {
                let pred_idx = entry.predicate_index;
                let round = entry.round;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);
                trace!(
                    predicate = self.predicates[pred_idx].name(),
                    round,
                    ?result,
                    "try"
                );

                match result {
                    PredicateResult::Success => {
                        self.exhaust_top();
                        self.push_next_predicate(ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.exhaust_top();
                        self.push_same_predicate(ctx);
                    }
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                            entry.trail_checkpoint = ctx.trail.checkpoint();
                        }
                    }
                    PredicateResult::Suspend => {
                        self.suspended = true;
                        return Some(self);
                    }
                }
            } else {
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => {
                        self.push_next_predicate(ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.push_same_predicate(ctx);
                    }
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    fn exhaust_top(&mut self) {
        if let Some(entry) = self.stack.last_mut() {
            entry.exhaust();
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    fn push_next_predicate(&mut self, ctx: &mut SearchContext) {
        let next_index = self.stack.last().map_or(0, |e| e.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 Predicate programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack
            .push(StackEntry::new(next_index, 0, ctx.trail.checkpoint()));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &mut SearchContext) {
        let (pred_index, next_round) = self
            .stack
            .last()
            .map_or((0, 0), |e| (e.predicate_index, e.round + 1));

        self.stack
            .push(StackEntry::new(pred_index, next_round, ctx.trail.checkpoint()));
    }

    /// Returns (try_count, retry_count) since the search started.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder for a predicate program.
///
/// Predicates are added in execution order; the program is closed by a
/// [`TerminalPredicate`], after which it can be built.
#[derive(Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Close the program with a terminal predicate.
    pub fn terminal<T: TerminalPredicate + 'static>(
        mut self,
        predicate: Box<T>,
    ) -> TerminatedEngineBuilder {
        self.predicates.push(predicate);
        TerminatedEngineBuilder {
            predicates: self.predicates,
        }
    }
}

/// A predicate program that ends with a terminal predicate.
pub struct TerminatedEngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedEngineBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{FailPredicate, SuspendPredicate};
    use crate::trail::Slot;

    /// Test predicate that always succeeds.
    #[derive(Debug)]
    struct AlwaysSucceed;

    impl Predicate for AlwaysSucceed {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    /// Writes each of `values` into a register, one per choice.
    #[derive(Debug)]
    struct Assign {
        slot: Slot,
        values: Vec<i64>,
    }

    impl Predicate for Assign {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Choices(self.values.len())
        }

        fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
            ctx.trail.set(self.slot, self.values[choice]);
            PredicateResult::Success
        }
    }

    #[test]
    fn test_simple_success_with_suspend() {
        let mut ctx = SearchContext::default();
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx).unwrap();
        assert_eq!(engine.statistics(), (2, 0));

        // Resuming backtracks through the deterministic success without re-trying it
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_immediate_failure() {
        let mut ctx = SearchContext::default();
        let engine = EngineBuilder::new()
            .terminal(Box::new(FailPredicate))
            .build();
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_empty_predicates() {
        let mut ctx = SearchContext::default();
        let engine = SearchEngine::new(vec![]);
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_resume_visits_each_choice_and_rewinds() {
        let mut ctx = SearchContext::default();
        let slot = ctx.trail.register(0);
        let mut engine = EngineBuilder::new()
            .add(Box::new(Assign {
                slot,
                values: vec![5, 6, 7],
            }))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let mut seen = Vec::new();
        while let Some(suspended) = engine.search(&mut ctx) {
            seen.push(ctx.trail.get(slot));
            engine = suspended;
        }
        assert_eq!(seen, vec![5, 6, 7]);
        assert_eq!(ctx.trail.get(slot), 0);
    }

    #[test]
    #[should_panic(expected = "Invalid predicate sequence")]
    fn test_invalid_program_without_terminal() {
        let mut ctx = SearchContext::default();
        let engine = SearchEngine::new(vec![Box::new(AlwaysSucceed)]);
        let _ = engine.search(&mut ctx);
    }
}
