//! Sequencing context for dispatching rule evaluation.

use std::collections::HashMap;

/// Normalized timing state passed to dispatching rules.
///
/// Holds the reference "now" of the optimization run and the parsed
/// scheduled arrival per train. All times are in milliseconds since the
/// Unix epoch, read from the naive local clock.
#[derive(Debug, Clone, Default)]
pub struct SequencingContext {
    /// Reference time of the run (ms).
    pub current_time_ms: i64,
    /// Scheduled arrival per train (train_id → ms).
    pub arrival_times: HashMap<String, i64>,
}

impl SequencingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time_ms: i64) -> Self {
        Self {
            current_time_ms,
            ..Default::default()
        }
    }

    /// Sets the scheduled arrival for a train.
    pub fn with_arrival(mut self, train_id: impl Into<String>, time_ms: i64) -> Self {
        self.arrival_times.insert(train_id.into(), time_ms);
        self
    }

    /// Scheduled arrival for a train (ms). Zero if unknown.
    pub fn arrival_ms(&self, train_id: &str) -> i64 {
        self.arrival_times.get(train_id).copied().unwrap_or(0)
    }
}
