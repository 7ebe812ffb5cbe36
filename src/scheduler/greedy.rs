//! Greedy earliest-finish platform assignment.
//!
//! Trains are assigned one at a time in the sequenced order. Each train
//! goes to the platform where it would finish dwelling soonest, which
//! absorbs contention by spilling late trains onto free platforms. The
//! result seeds the refinement stage.

use chrono::{Duration, NaiveDateTime};
use log::debug;

use crate::models::{Resource, UnscheduledTrain};
use crate::scheduler::plan::{AssignmentPlan, PlannedTrain};

/// Outcome of one greedy pass.
#[derive(Debug)]
pub struct GreedyResult {
    /// The constructed plan. Queues hold every scheduled train.
    pub plan: AssignmentPlan,
    /// Trains that found their best platform still occupied.
    pub conflicts: u32,
    /// Trains no platform could take, in sequenced order.
    pub unscheduled: Vec<UnscheduledTrain>,
}

/// Earliest-finish-first assigner over the platform pool.
#[derive(Debug, Clone)]
pub struct GreedyAssigner {
    dwell: Duration,
}

impl GreedyAssigner {
    /// Creates an assigner with the given per-train dwell duration.
    pub fn new(dwell: Duration) -> Self {
        Self { dwell }
    }

    /// Assigns trains to platforms in the given order.
    ///
    /// Only resources of the platform type are eligible; everything else
    /// in `resources` is ignored. `order` holds indices into `trains`
    /// from the sequencing stage. Platform free times start at `now`.
    pub fn assign(
        &self,
        trains: Vec<PlannedTrain>,
        order: &[usize],
        resources: &[Resource],
        now: NaiveDateTime,
    ) -> GreedyResult {
        let mut platforms: Vec<String> = resources
            .iter()
            .filter(|r| r.is_platform())
            .map(|r| r.id.clone())
            .collect();
        platforms.sort();

        let mut plan = AssignmentPlan::new(trains, platforms, self.dwell);
        let mut free = vec![now; plan.platform_count()];
        let mut conflicts = 0u32;
        let mut unscheduled = Vec::new();

        for &index in order {
            let arrival = plan.trains[index].arrival_time;

            // Scan ascending platform IDs; strict < keeps the lowest ID
            // among equal finish times.
            let mut best: Option<usize> = None;
            let mut best_finish = NaiveDateTime::MAX;
            for (platform, &free_at) in free.iter().enumerate() {
                let finish = free_at.max(arrival) + self.dwell;
                if finish < best_finish {
                    best = Some(platform);
                    best_finish = finish;
                }
            }

            match best {
                Some(platform) => {
                    if free[platform] > arrival {
                        conflicts += 1;
                    }
                    free[platform] = free[platform].max(arrival) + self.dwell;
                    plan.queues[platform].push(index);
                }
                None => {
                    unscheduled.push(UnscheduledTrain::no_platform(plan.trains[index].id.clone()))
                }
            }
        }

        debug!(
            "greedy assignment: {} train(s) on {} platform(s), {} conflict(s), {} unscheduled",
            order.len() - unscheduled.len(),
            plan.platform_count(),
            conflicts,
            unscheduled.len()
        );

        GreedyResult {
            plan,
            conflicts,
            unscheduled,
        }
    }
}
