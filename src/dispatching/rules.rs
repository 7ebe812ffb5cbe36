//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for trains that should be processed first.
//!
//! The default dispatching policy is `Priority` tie-broken by
//! `LatestArrival`: urgent trains first, and among equals the train
//! scheduled later is considered first so it can claim a platform close
//! to its own arrival.

use super::{DispatchingRule, RuleScore, SequencingContext};
use crate::models::Train;

/// Train priority.
///
/// Processes trains with higher `priority` values first.
/// (Negated because lower score = processed earlier.)
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, train: &Train, _context: &SequencingContext) -> RuleScore {
        -(train.priority as f64)
    }

    fn description(&self) -> &'static str {
        "Train Priority"
    }
}

/// Latest scheduled arrival first.
///
/// Among otherwise equal trains, the one scheduled to arrive last is
/// processed first. Uses `context.arrival_times`; unknown trains score
/// as arrival zero.
#[derive(Debug, Clone, Copy)]
pub struct LatestArrival;

impl DispatchingRule for LatestArrival {
    fn name(&self) -> &'static str {
        "LATEST_ARRIVAL"
    }

    fn evaluate(&self, train: &Train, context: &SequencingContext) -> RuleScore {
        -(context.arrival_ms(&train.id) as f64)
    }

    fn description(&self) -> &'static str {
        "Latest Scheduled Arrival"
    }
}

/// First In First Out.
///
/// Processes trains in scheduled-arrival order, earliest first. The
/// alternative policy to `LatestArrival` for operators that prefer
/// strict arrival order within a priority class.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, train: &Train, context: &SequencingContext) -> RuleScore {
        context.arrival_ms(&train.id) as f64
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}
