//! Assignment plan: per-platform train queues.
//!
//! The plan is the working representation shared by the greedy assigner
//! and the refinement stage. It stores which trains visit which platform
//! in which order; concrete times are always recomputed from the queues,
//! so platform mutual exclusion holds by construction and any queue edit
//! reshapes the downstream start times.

use chrono::{Duration, NaiveDateTime};

use crate::time;

/// A train with its arrival normalized against the run's reference time.
#[derive(Debug, Clone)]
pub struct PlannedTrain {
    /// Train identifier.
    pub id: String,
    /// Parsed scheduled arrival.
    pub earliest_arrival: NaiveDateTime,
    /// When the train can actually be platformed. Never before the run's
    /// reference time.
    pub arrival_time: NaiveDateTime,
}

impl PlannedTrain {
    /// Creates a planned train, clamping the arrival to the reference time.
    pub fn new(id: impl Into<String>, earliest_arrival: NaiveDateTime, now: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            earliest_arrival,
            arrival_time: now.max(earliest_arrival),
        }
    }
}

/// Total delay of a plan, ordered minutes-first.
///
/// Comparison is lexicographic: whole minutes decide, and millisecond
/// totals only order plans whose floored minute totals tie. Accepting a
/// plan whose cost does not exceed the incumbent's therefore never
/// increases the minute total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DelayCost {
    /// Sum of per-train whole-minute delays.
    pub minutes: i64,
    /// Sum of per-train delays in milliseconds.
    pub ms: i64,
}

/// One train's computed platform visit.
#[derive(Debug, Clone)]
pub struct TimedStop {
    /// Index into [`AssignmentPlan::trains`].
    pub train: usize,
    /// Index into [`AssignmentPlan::platforms`].
    pub platform: usize,
    /// When the train reaches the platform.
    pub start: NaiveDateTime,
    /// Whole minutes between the scheduled and the computed arrival.
    pub delay_minutes: i64,
}

/// Per-platform service queues over a fixed train set.
#[derive(Debug, Clone)]
pub struct AssignmentPlan {
    /// All trains under consideration, indexed by the queues.
    pub trains: Vec<PlannedTrain>,
    /// Platform IDs, sorted ascending.
    pub platforms: Vec<String>,
    /// `queues[p]` lists train indices in service order on platform `p`.
    pub queues: Vec<Vec<usize>>,
    /// How long each train occupies its platform.
    pub dwell: Duration,
}

impl AssignmentPlan {
    /// Creates a plan with empty queues.
    pub fn new(trains: Vec<PlannedTrain>, platforms: Vec<String>, dwell: Duration) -> Self {
        let queues = vec![Vec::new(); platforms.len()];
        Self {
            trains,
            platforms,
            queues,
            dwell,
        }
    }

    /// Number of trains under consideration.
    pub fn train_count(&self) -> usize {
        self.trains.len()
    }

    /// Number of platforms.
    pub fn platform_count(&self) -> usize {
        self.platforms.len()
    }

    /// Computes concrete visit times by walking each queue.
    ///
    /// A train starts at its arrival time or when its platform frees up,
    /// whichever is later; the platform is then busy for the dwell
    /// duration. Stops are listed platform by platform in queue order.
    pub fn timings(&self) -> Vec<TimedStop> {
        let mut stops = Vec::with_capacity(self.trains.len());
        for (platform, queue) in self.queues.iter().enumerate() {
            let mut free: Option<NaiveDateTime> = None;
            for &train in queue {
                let planned = &self.trains[train];
                let start = free.map_or(planned.arrival_time, |f: NaiveDateTime| {
                    f.max(planned.arrival_time)
                });
                free = Some(start + self.dwell);
                stops.push(TimedStop {
                    train,
                    platform,
                    start,
                    delay_minutes: time::minutes_between(start, planned.earliest_arrival),
                });
            }
        }
        stops
    }

    /// Total delay across all queued trains.
    pub fn total_delay(&self) -> DelayCost {
        let mut minutes = 0i64;
        let mut ms = 0i64;
        for stop in self.timings() {
            minutes += stop.delay_minutes;
            ms += (stop.start - self.trains[stop.train].earliest_arrival).num_milliseconds();
        }
        DelayCost { minutes, ms }
    }

    /// Finds the queue holding a train. Returns `(platform, position)`.
    pub fn locate(&self, train: usize) -> Option<(usize, usize)> {
        for (platform, queue) in self.queues.iter().enumerate() {
            if let Some(position) = queue.iter().position(|&t| t == train) {
                return Some((platform, position));
            }
        }
        None
    }

    /// Moves a train to another platform and queue position.
    ///
    /// The position is clamped to the target queue length after removal.
    /// Returns `false` if the train is not queued or the platform does
    /// not exist, leaving the plan unchanged.
    pub fn relocate(&mut self, train: usize, platform: usize, position: usize) -> bool {
        if platform >= self.queues.len() {
            return false;
        }
        let Some((from, index)) = self.locate(train) else {
            return false;
        };
        self.queues[from].remove(index);
        let position = position.min(self.queues[platform].len());
        self.queues[platform].insert(position, train);
        true
    }

    /// Exchanges the queue slots of two trains.
    ///
    /// Works within a single queue and across platforms. Returns `false`
    /// if the trains are identical or either is not queued.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a == b {
            return false;
        }
        let Some((pa, ia)) = self.locate(a) else {
            return false;
        };
        let Some((pb, ib)) = self.locate(b) else {
            return false;
        };
        self.queues[pa][ia] = b;
        self.queues[pb][ib] = a;
        true
    }
}
