//! Core trait and result types for schedule refinement.

use rand::rngs::StdRng;

use super::config::RefineConfig;
use crate::scheduler::{AssignmentPlan, DelayCost};

/// A strategy that reshapes an assignment plan without regressing it.
///
/// The strategy receives the plan by value and hands back the plan it
/// settled on. The contract: the returned plan's total delay never
/// exceeds the incoming plan's. Running out of budget before the
/// neighborhood is exhausted is a normal outcome, not an error.
pub trait RefinementStrategy: Send + Sync + std::fmt::Debug {
    /// Identifier used in logs.
    fn name(&self) -> &'static str;

    /// Refines the plan within the configured budget.
    fn refine(
        &self,
        plan: AssignmentPlan,
        config: &RefineConfig,
        rng: &mut StdRng,
    ) -> RefineOutcome;
}

/// Result of a refinement run.
#[derive(Debug, Clone)]
pub struct RefineOutcome {
    /// The plan the search settled on.
    pub plan: AssignmentPlan,
    /// Search counters.
    pub stats: RefineStats,
}

/// Counters describing one refinement run.
#[derive(Debug, Clone, Copy)]
pub struct RefineStats {
    /// Candidate moves evaluated.
    pub iterations: usize,

    /// Moves accepted, equal-cost moves included.
    pub accepted_moves: usize,

    /// Moves that strictly lowered the cost.
    pub improving_moves: usize,

    /// Whether the search stopped on budget rather than because the
    /// neighborhood emptied out.
    pub budget_exhausted: bool,

    /// Cost of the incoming plan.
    pub initial_cost: DelayCost,

    /// Cost of the returned plan.
    pub final_cost: DelayCost,
}
