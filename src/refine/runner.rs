//! Local-search execution loop.

use std::time::{Duration, Instant};

use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

use super::config::RefineConfig;
use super::types::{RefineOutcome, RefineStats, RefinementStrategy};
use crate::scheduler::AssignmentPlan;

/// One elementary plan edit.
#[derive(Debug, Clone, Copy)]
enum Move {
    /// Pull a train out of its queue and reinsert it elsewhere.
    Relocate {
        train: usize,
        platform: usize,
        position: usize,
    },
    /// Exchange the queue slots of two trains.
    Swap { a: usize, b: usize },
}

/// Stochastic relocate/swap search over the platform queues.
///
/// Moves are sampled uniformly: a swap of two distinct queued trains or
/// a relocation to a random platform and position, at even odds when
/// both are possible. Each candidate is applied to a copy of the plan
/// and kept only if its cost does not exceed the incumbent's.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSearchRefiner;

impl LocalSearchRefiner {
    pub fn new() -> Self {
        Self
    }
}

impl RefinementStrategy for LocalSearchRefiner {
    fn name(&self) -> &'static str {
        "LOCAL_SEARCH"
    }

    fn refine(
        &self,
        plan: AssignmentPlan,
        config: &RefineConfig,
        rng: &mut StdRng,
    ) -> RefineOutcome {
        let initial_cost = plan.total_delay();
        let mut stats = RefineStats {
            iterations: 0,
            accepted_moves: 0,
            improving_moves: 0,
            budget_exhausted: false,
            initial_cost,
            final_cost: initial_cost,
        };

        if config.max_iterations == 0 {
            debug!("refinement disabled (zero iteration budget)");
            return RefineOutcome { plan, stats };
        }

        let deadline = config
            .time_limit_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));

        let mut current = plan;
        let mut current_cost = initial_cost;
        let mut exhausted = true;

        for _ in 0..config.max_iterations {
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    break;
                }
            }
            let Some(proposed) = propose_move(&current, rng) else {
                // Nothing left to perturb.
                exhausted = false;
                break;
            };
            stats.iterations += 1;

            let mut candidate = current.clone();
            if !apply_move(&mut candidate, proposed) {
                continue;
            }
            let cost = candidate.total_delay();
            if cost <= current_cost {
                if cost < current_cost {
                    stats.improving_moves += 1;
                }
                stats.accepted_moves += 1;
                current = candidate;
                current_cost = cost;
            }
        }

        if exhausted {
            debug!(
                "refinement budget exhausted after {} iteration(s), delay {} -> {} min",
                stats.iterations, initial_cost.minutes, current_cost.minutes
            );
        }
        stats.budget_exhausted = exhausted;
        stats.final_cost = current_cost;

        RefineOutcome {
            plan: current,
            stats,
        }
    }
}

/// Samples one move, or `None` when the plan has nothing to perturb.
fn propose_move(plan: &AssignmentPlan, rng: &mut StdRng) -> Option<Move> {
    if plan.platform_count() == 0 {
        return None;
    }
    let queued: Vec<usize> = plan.queues.iter().flatten().copied().collect();
    if queued.is_empty() {
        return None;
    }

    if queued.len() >= 2 && rng.random_bool(0.5) {
        let i = rng.random_range(0..queued.len());
        // Sample the second index from the remaining slots so the pair
        // is always distinct.
        let mut j = rng.random_range(0..queued.len() - 1);
        if j >= i {
            j += 1;
        }
        Some(Move::Swap {
            a: queued[i],
            b: queued[j],
        })
    } else {
        let train = queued[rng.random_range(0..queued.len())];
        let platform = rng.random_range(0..plan.platform_count());
        let position = rng.random_range(0..=plan.queues[platform].len());
        Some(Move::Relocate {
            train,
            platform,
            position,
        })
    }
}

fn apply_move(plan: &mut AssignmentPlan, proposed: Move) -> bool {
    match proposed {
        Move::Relocate {
            train,
            platform,
            position,
        } => plan.relocate(train, platform, position),
        Move::Swap { a, b } => plan.swap(a, b),
    }
}
