//! Dispatching rules and rule engine for train sequencing.
//!
//! Determines the order in which trains are considered for platform
//! assignment. Rules score individual trains; the engine composes rules
//! into a multi-criteria ordering with stable tie handling.
//!
//! # Usage
//!
//! ```
//! use rail_dispatch::dispatching::{RuleEngine, SequencingContext};
//! use rail_dispatch::dispatching::rules;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Priority)
//!     .with_tie_breaker(rules::LatestArrival);
//!
//! let context = SequencingContext::at_time(0);
//! // let order = engine.sort_indices(&trains, &context);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
pub mod rules;

pub use context::SequencingContext;
pub use engine::{RuleEngine, TieBreaker};

use crate::models::Train;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (processed first).
pub type RuleScore = f64;

/// A dispatching rule that scores a train for sequencing.
///
/// # Score Convention
/// **Lower score = processed earlier.** Rules return smaller values for
/// trains that should be considered first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "PRIORITY", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates a train against the current sequencing context.
    ///
    /// Returns a score where lower = processed earlier.
    fn evaluate(&self, train: &Train, context: &SequencingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
