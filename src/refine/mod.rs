//! Local-search schedule refinement.
//!
//! A budgeted stochastic search over the greedy plan. Random relocate
//! and swap moves reshape the platform queues; a candidate is kept only
//! when its total delay does not exceed the incumbent's, so the greedy
//! result is a floor the search cannot fall through. Equal-cost moves
//! are accepted to let the search drift across plateaus.
//!
//! # References
//!
//! - Aarts & Lenstra (1997), "Local Search in Combinatorial Optimization"
//! - Pinedo (2016), "Scheduling", Ch. 14: General Purpose Procedures

mod config;
mod runner;
mod types;

pub use config::RefineConfig;
pub use runner::LocalSearchRefiner;
pub use types::{RefineOutcome, RefineStats, RefinementStrategy};
