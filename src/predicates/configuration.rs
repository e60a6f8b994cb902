// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Choice of one configuration level per round.
//!
//! Round `r` chooses level `k = r + 1` among all partitions of the level's
//! size. Once level `k` is chosen, every vacancy number whose three
//! neighbouring levels are now known is checked:
//!
//! - level `k - 1`, when `k >= 2`
//! - level `k` itself, when `k + 1` is the last level, which is fixed to `∅`
//!
//! A surviving choice adds its contribution to the charge register and the
//! predicate moves on to the next round. Once every level `1..l` is chosen
//! the predicate succeeds and the engine moves on.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::kostka::{is_admissible_at, level_charge};
use crate::partition::{num_partitions, partitions, Partitions};
use crate::state::Counters;
use num_traits::ToPrimitive;
use tracing::warn;

#[derive(Debug, Default)]
pub struct ConfigurationPredicate {
    /// Candidate generator per level, recreated each time the level is entered.
    candidates: Vec<Option<Partitions>>,
}

impl ConfigurationPredicate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Predicate for ConfigurationPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        let k = round + 1;
        if k >= ctx.levels() {
            return PredicateResult::Success;
        }

        let size = ctx.memo.sizes[k];
        let Some(count) = num_partitions(size).to_usize() else {
            warn!(size, "too many candidate levels to enumerate");
            return PredicateResult::Failure;
        };
        if self.candidates.len() <= k {
            self.candidates.resize(k + 1, None);
        }
        self.candidates[k] = Some(partitions(size));
        PredicateResult::Choices(count)
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        _choice: usize,
    ) -> PredicateResult {
        let k = round + 1;
        let Some(candidate) = self
            .candidates
            .get_mut(k)
            .and_then(Option::as_mut)
            .and_then(Iterator::next)
        else {
            return PredicateResult::Failure;
        };
        ctx.set_level(k, candidate);

        let configuration = &ctx.state.configuration;
        let last = ctx.levels() - 1;
        let admissible = (k < 2 || is_admissible_at(configuration, k - 1))
            && (k != last || is_admissible_at(configuration, k));
        if !admissible {
            ctx.statistics.increment_counter(Counters::VacancyPruned);
            return PredicateResult::Failure;
        }

        let delta = level_charge(configuration, k);
        ctx.add_charge(delta);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "Configuration"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::Partition;

    fn p(parts: &[usize]) -> Partition {
        Partition::new(parts.to_vec()).unwrap()
    }

    #[test]
    fn test_single_level_succeeds_immediately() {
        let mut ctx = SearchContext::new(&p(&[3]), &p(&[2, 1]));
        let mut pred = ConfigurationPredicate::new();
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Success);
    }

    #[test]
    fn test_choices_cover_partitions_of_level_size() {
        let mut ctx = SearchContext::new(&p(&[2, 2]), &p(&[1, 1, 1, 1]));
        let mut pred = ConfigurationPredicate::new();
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Choices(2));

        // v1 = [2]: admissible, charge 6 + 2 - 4
        assert_eq!(pred.retry_pred(&mut ctx, 0, 0), PredicateResult::SuccessSamePredicate);
        assert_eq!(ctx.level(1), &p(&[2]));
        assert_eq!(ctx.charge(), 4);

        ctx.trail.rewind_to(0);
        // v1 = [1, 1]: admissible, charge 6 + 4 - 8
        assert_eq!(pred.retry_pred(&mut ctx, 0, 1), PredicateResult::SuccessSamePredicate);
        assert_eq!(ctx.charge(), 2);

        assert_eq!(pred.retry_pred(&mut ctx, 0, 2), PredicateResult::Failure);
        assert_eq!(pred.try_pred(&mut ctx, 1), PredicateResult::Success);
    }

    #[test]
    fn test_negative_vacancy_is_pruned() {
        // λ = [2, 1, 1], μ = [1, 1, 1, 1]: v1 = [2] forces P_1 at level 2 below zero
        let mut ctx = SearchContext::new(&p(&[2, 1, 1]), &p(&[1, 1, 1, 1]));
        let mut pred = ConfigurationPredicate::new();
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Choices(2));
        assert_eq!(pred.retry_pred(&mut ctx, 0, 0), PredicateResult::SuccessSamePredicate);
        assert_eq!(ctx.level(1), &p(&[2]));

        assert_eq!(pred.try_pred(&mut ctx, 1), PredicateResult::Choices(1));
        assert_eq!(pred.retry_pred(&mut ctx, 1, 0), PredicateResult::Failure);
        assert_eq!(ctx.statistics.get(Counters::VacancyPruned), 1);
    }
}
