//! Schedule (solution) model.
//!
//! A schedule is a time-ordered list of arrival events plus explicit
//! diagnostics for trains that could not be placed. Delay is carried as
//! a first-class numeric field on each event, never encoded in free text.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// What a scheduled train does at its assigned location.
///
/// Arrivals are the only modeled action today; departures would become a
/// second variant if turnaround planning is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainAction {
    /// Train arrives and occupies the platform for the dwell duration.
    Arrive,
}

/// A single scheduled arrival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    /// Position in the final time-ordered schedule (1-based, dense).
    pub sequence: u32,
    /// Scheduled train ID.
    pub train_id: String,
    /// Action performed at the location.
    pub action: TrainAction,
    /// Assigned platform ID.
    pub location: String,
    /// When the train actually reaches the platform.
    pub estimated_time: NaiveDateTime,
    /// Whole minutes of lateness versus the scheduled arrival, never negative.
    pub delay_minutes: i64,
    /// Whether the raw delay was negative (train placed ahead of schedule).
    #[serde(default)]
    pub early: bool,
}

/// Why a train could not be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnscheduledReason {
    /// The request contained no platform-category resource.
    NoPlatformAvailable,
}

/// Diagnostic for a train left out of the schedule.
///
/// Unscheduled trains still count toward the processed-train total; they
/// are reported, never silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnscheduledTrain {
    /// The affected train.
    pub train_id: String,
    /// Why no event was produced for it.
    pub reason: UnscheduledReason,
}

/// A complete dispatching solution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Arrival events, one per scheduled train.
    pub events: Vec<ScheduleEvent>,
    /// Trains that could not be placed.
    pub unscheduled: Vec<UnscheduledTrain>,
}

impl ScheduleEvent {
    /// Creates an arrival event.
    ///
    /// `raw_delay_minutes` may be negative; it is clamped to zero with the
    /// `early` flag set, so delay totals never hide lateness behind
    /// earliness. The sequence starts at zero and is assigned by
    /// [`Schedule::sort_and_renumber`].
    pub fn arrive(
        train_id: impl Into<String>,
        location: impl Into<String>,
        estimated_time: NaiveDateTime,
        raw_delay_minutes: i64,
    ) -> Self {
        Self {
            sequence: 0,
            train_id: train_id.into(),
            action: TrainAction::Arrive,
            location: location.into(),
            estimated_time,
            delay_minutes: raw_delay_minutes.max(0),
            early: raw_delay_minutes < 0,
        }
    }
}

impl UnscheduledTrain {
    /// Creates a no-platform-available diagnostic.
    pub fn no_platform(train_id: impl Into<String>) -> Self {
        Self {
            train_id: train_id.into(),
            reason: UnscheduledReason::NoPlatformAvailable,
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an event.
    pub fn add_event(&mut self, event: ScheduleEvent) {
        self.events.push(event);
    }

    /// Adds an unscheduled-train diagnostic.
    pub fn add_unscheduled(&mut self, unscheduled: UnscheduledTrain) {
        self.unscheduled.push(unscheduled);
    }

    /// Re-sorts events by estimated time and assigns dense 1-based
    /// sequence numbers.
    ///
    /// The sort is stable: events sharing an estimated time keep their
    /// relative order.
    pub fn sort_and_renumber(&mut self) {
        self.events.sort_by_key(|e| e.estimated_time);
        for (i, event) in self.events.iter_mut().enumerate() {
            event.sequence = (i + 1) as u32;
        }
    }

    /// Sum of per-event delays (minutes).
    pub fn total_delay_minutes(&self) -> i64 {
        self.events.iter().map(|e| e.delay_minutes).sum()
    }

    /// Largest single-event delay (minutes). Zero for an empty schedule.
    pub fn max_delay_minutes(&self) -> i64 {
        self.events.iter().map(|e| e.delay_minutes).max().unwrap_or(0)
    }

    /// Finds the event for a given train.
    pub fn event_for_train(&self, train_id: &str) -> Option<&ScheduleEvent> {
        self.events.iter().find(|e| e.train_id == train_id)
    }

    /// Returns all events assigned to a given platform.
    pub fn events_for_platform(&self, platform_id: &str) -> Vec<&ScheduleEvent> {
        self.events
            .iter()
            .filter(|e| e.location == platform_id)
            .collect()
    }

    /// Number of scheduled events.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Whether every train in the request received an event.
    pub fn is_fully_scheduled(&self) -> bool {
        self.unscheduled.is_empty()
    }
}
