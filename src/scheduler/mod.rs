//! Assignment pipeline and KPI evaluation.
//!
//! Provides the optimization engine, its greedy assignment stage, the
//! shared plan representation, and schedule quality metrics.
//!
//! # Algorithm
//!
//! `OptimizationEngine` sequences trains with dispatching rules, places
//! them with a greedy earliest-finish heuristic, and hands the plan to
//! the refinement stage. Greedy alone is fast but not optimal; the
//! refinement budget buys solution quality.
//!
//! # KPI
//!
//! `SummaryKpis` reports delay totals, delay reduction, conflict and
//! on-time figures for the finished run.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod engine;
mod greedy;
mod kpi;
mod plan;

pub use engine::{EngineConfig, OptimizationEngine, OptimizeRequest, OptimizeResponse};
pub use greedy::{GreedyAssigner, GreedyResult};
pub use kpi::SummaryKpis;
pub use plan::{AssignmentPlan, DelayCost, PlannedTrain, TimedStop};
