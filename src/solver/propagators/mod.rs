//! Interchangeable consistency-propagation algorithms.
//!
//! The search driver calls the active propagator once with
//! `newly_assigned = None` before the first assignment and once per
//! assignment afterwards. The propagator prunes values from current domains
//! and reports exactly what it pruned; restoring those values on backtrack is
//! the driver's job, never the propagator's.

pub mod backtracking;
pub mod forward_checking;
pub mod gac;

pub use backtracking::PlainBacktracking;
pub use forward_checking::ForwardChecking;
pub use gac::Gac;

use crate::solver::{csp::Csp, value::Value, variable::VariableId};

/// The outcome of one propagator invocation.
#[derive(Debug, Clone)]
pub struct Propagation {
    /// `false` means a dead end: some variable's current domain was wiped
    /// out. The driver must backtrack. This is a normal outcome, not an
    /// error.
    pub consistent: bool,
    /// Every `(variable, value)` pruned during this invocation, each at most
    /// once. The driver restores this exact list before trying another value
    /// or returning to its caller.
    pub pruned: Vec<(VariableId, Value)>,
}

impl Propagation {
    pub fn consistent(pruned: Vec<(VariableId, Value)>) -> Self {
        Self {
            consistent: true,
            pruned,
        }
    }

    pub fn dead_end(pruned: Vec<(VariableId, Value)>) -> Self {
        Self {
            consistent: false,
            pruned,
        }
    }
}

/// A consistency-propagation algorithm.
pub trait Propagator {
    fn name(&self) -> &'static str;

    /// Propagates after `newly_assigned` was instantiated, or performs the
    /// algorithm's initial processing when called with `None` before search
    /// begins.
    fn propagate(&self, csp: &mut Csp, newly_assigned: Option<VariableId>) -> Propagation;
}
