//! Dispatching domain models.
//!
//! Core data types for the train-to-platform assignment problem:
//! trains with priorities and scheduled arrivals, station resources,
//! and the resulting schedule of arrival events.
//!
//! All wire-facing types round-trip through serde with the external
//! field names (`type`, `scheduleArrival`) preserved.

mod resource;
mod schedule;
mod train;

pub use resource::{Resource, PLATFORM};
pub use schedule::{Schedule, ScheduleEvent, TrainAction, UnscheduledReason, UnscheduledTrain};
pub use train::Train;
