//! Schedule quality metrics (KPIs).
//!
//! Computes the run summary from a completed schedule and the pipeline
//! counters gathered along the way.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Initial total delay | Minutes the trains were already late at run start |
//! | Optimized total delay | Sum of event delays in the final schedule |
//! | Delay reduction | Initial minus optimized (negative when delay grew) |
//! | Conflicts resolved | Trains whose best platform was still occupied |
//! | Maximum delay | Largest single event delay |
//! | On-Time Rate | Fraction of scheduled events with zero delay |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// Run summary attached to every optimization response.
///
/// Delays are in whole minutes; the calculation time is in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryKpis {
    /// Number of trains in the request, scheduled or not.
    pub total_trains_processed: usize,
    /// Delay already accrued at run start (min).
    pub initial_total_delay_minutes: i64,
    /// Total delay in the final schedule (min).
    pub optimized_total_delay_minutes: i64,
    /// Initial minus optimized delay (min). Negative when queueing added
    /// more delay than the inputs carried in.
    pub delay_reduction_minutes: i64,
    /// Contention events absorbed during assignment.
    pub conflicts_resolved: u32,
    /// Largest single event delay (min).
    pub max_delay_minutes: i64,
    /// Fraction of scheduled events with zero delay (0.0..1.0).
    pub on_time_rate: f64,
    /// Wall-clock time of the whole pipeline (ms).
    pub calculation_time_ms: f64,
}

impl SummaryKpis {
    /// Computes the summary for a finished run.
    ///
    /// # Arguments
    /// * `schedule` - The final schedule with renumbered events.
    /// * `total_trains` - Trains in the request, including unscheduled ones.
    /// * `initial_delay_minutes` - Delay accrued before the run started.
    /// * `conflicts_resolved` - Contention counter from the assignment stage.
    /// * `calculation_time_ms` - Wall-clock time of the pipeline.
    pub fn calculate(
        schedule: &Schedule,
        total_trains: usize,
        initial_delay_minutes: i64,
        conflicts_resolved: u32,
        calculation_time_ms: f64,
    ) -> Self {
        let optimized = schedule.total_delay_minutes();
        let on_time_count = schedule
            .events
            .iter()
            .filter(|e| e.delay_minutes == 0)
            .count();
        let on_time_rate = if schedule.events.is_empty() {
            1.0
        } else {
            on_time_count as f64 / schedule.events.len() as f64
        };

        Self {
            total_trains_processed: total_trains,
            initial_total_delay_minutes: initial_delay_minutes,
            optimized_total_delay_minutes: optimized,
            delay_reduction_minutes: initial_delay_minutes - optimized,
            conflicts_resolved,
            max_delay_minutes: schedule.max_delay_minutes(),
            on_time_rate,
            calculation_time_ms,
        }
    }
}
