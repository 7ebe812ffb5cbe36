//! Train-to-platform dispatching engine.
//!
//! Takes a set of trains with priorities and scheduled arrivals plus the
//! station's resources, and produces a conflict-free platform schedule:
//! trains are sequenced by dispatching rules, placed greedily by earliest
//! finish, then improved by budgeted local search. The response carries
//! per-train arrival events, explicit diagnostics for trains no platform
//! could take, and run KPIs.
//!
//! # Modules
//!
//! - **`models`**: Wire-facing domain types: `Train`, `Resource`,
//!   `Schedule`, `ScheduleEvent`, `UnscheduledTrain`
//! - **`validation`**: Input integrity checks (duplicate IDs, malformed
//!   arrival timestamps)
//! - **`dispatching`**: Composable sequencing rules and the rule engine
//! - **`scheduler`**: The optimization engine, greedy assignment, the
//!   plan representation, and KPIs
//! - **`refine`**: Budgeted local-search refinement behind a pluggable
//!   strategy trait
//! - **`time`**: Arrival parsing and minute arithmetic
//! - **`error`**: The crate's error type
//!
//! # Example
//!
//! ```
//! use rail_dispatch::models::{Resource, Train};
//! use rail_dispatch::scheduler::{OptimizationEngine, OptimizeRequest};
//!
//! let trains = vec![
//!     Train::new("ICE-1").with_priority(5).with_arrival("2024-03-01T08:00:00"),
//!     Train::new("RE-7").with_priority(2).with_arrival("2024-03-01T08:00:00"),
//! ];
//! let resources = vec![Resource::platform("P1")];
//!
//! let engine = OptimizationEngine::new();
//! let response = engine.optimize(&OptimizeRequest::new(trains, resources)).unwrap();
//! assert_eq!(response.optimized_schedule.len(), 2);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Brucker (2007), "Scheduling Algorithms"
//! - Aarts & Lenstra (1997), "Local Search in Combinatorial Optimization"

pub mod dispatching;
pub mod error;
pub mod models;
pub mod refine;
pub mod scheduler;
pub mod time;
pub mod validation;
