//! Rule engine for multi-criteria train sequencing.
//!
//! Composes dispatching rules into a sequential chain: later rules are
//! consulted only when earlier rules tie. The produced ordering is
//! stable, so trains tied on every rule keep their request order.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::sync::Arc;

use super::{DispatchingRule, RuleScore, SequencingContext};
use crate::models::Train;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Default)]
pub enum TieBreaker {
    /// Keep the request order (default).
    #[default]
    PreserveOrder,
    /// Deterministic by train ID (lexicographic).
    ById,
}

/// A composable rule engine for train sequencing.
///
/// Rules are evaluated in insertion order; a later rule decides only
/// when every earlier rule scored the two trains within epsilon of each
/// other.
///
/// # Example
/// ```
/// use rail_dispatch::dispatching::{RuleEngine, rules};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Priority)
///     .with_tie_breaker(rules::LatestArrival);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::PreserveOrder,
            epsilon: 1e-9,
        }
    }

    /// Adds a rule to the chain.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule.
    ///
    /// Equivalent to [`with_rule`](Self::with_rule); the name records the
    /// intent that this rule only decides when earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Sorts trains into processing order.
    ///
    /// Returns indices into the original slice. The sort is stable:
    /// trains tied on every rule keep their input order under the
    /// default [`TieBreaker::PreserveOrder`].
    pub fn sort_indices(&self, trains: &[Train], context: &SequencingContext) -> Vec<usize> {
        if trains.is_empty() {
            return Vec::new();
        }

        let mut indices: Vec<usize> = (0..trains.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&trains[a], &trains[b], context));
        indices
    }

    /// Evaluates a single train and returns one score per rule.
    pub fn evaluate(&self, train: &Train, context: &SequencingContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(train, context))
            .collect()
    }

    fn compare(&self, a: &Train, b: &Train, context: &SequencingContext) -> std::cmp::Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, context);
            let score_b = rule.evaluate(b, context);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a
                    .partial_cmp(&score_b)
                    .unwrap_or(std::cmp::Ordering::Equal);
            }
        }

        // All rules tied
        match &self.tie_breaker {
            TieBreaker::PreserveOrder => std::cmp::Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
