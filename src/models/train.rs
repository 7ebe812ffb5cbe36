//! Train model.
//!
//! A train is a unit of dispatching work: it arrives once, occupies one
//! platform for the dwell duration, and departs. Priority and scheduled
//! arrival drive the processing order.

use chrono::format::ParseError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::time;

/// A train requesting a platform slot.
///
/// The scheduled arrival is kept as the raw wire string; parsing and
/// normalization happen in the optimization pipeline so malformed inputs
/// surface as validation errors rather than deserialization failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Train {
    /// Unique train identifier.
    pub id: String,
    /// Service category (e.g., "express", "freight"). Informational.
    #[serde(rename = "type")]
    pub train_type: String,
    /// Dispatching priority (higher = more urgent).
    pub priority: i32,
    /// Scheduled arrival, ISO-8601 with optional `Z`/offset suffix.
    #[serde(rename = "scheduleArrival")]
    pub schedule_arrival: String,
}

impl Train {
    /// Creates a new train with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            train_type: String::new(),
            priority: 0,
            schedule_arrival: String::new(),
        }
    }

    /// Sets the service category.
    pub fn with_train_type(mut self, train_type: impl Into<String>) -> Self {
        self.train_type = train_type.into();
        self
    }

    /// Sets the dispatching priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the scheduled arrival string.
    pub fn with_arrival(mut self, arrival: impl Into<String>) -> Self {
        self.schedule_arrival = arrival.into();
        self
    }

    /// Parses the scheduled arrival into a naive local datetime.
    pub fn arrival(&self) -> Result<NaiveDateTime, ParseError> {
        time::parse_arrival(&self.schedule_arrival)
    }
}
