use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::{
    error::Result,
    solver::{csp::Csp, heuristics::VariableOrdering, propagators::Propagator},
};

/// Counters collected over one call to [`BacktrackingSolver::solve`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Variable assignments tried.
    pub decisions: u64,
    /// Assignments undone after their subtree failed.
    pub backtracks: u64,
    /// Total values pruned by the propagator, over all invocations.
    pub values_pruned: u64,
    /// Propagator invocations, including the initial call.
    pub propagator_calls: u64,
    pub elapsed: Duration,
}

/// The final outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every variable is assigned and all constraints are satisfied. The
    /// assignments are left on the CSP's variables for the caller to read.
    Solved,
    /// The search space is exhausted; the CSP has no solution.
    Unsatisfiable,
}

/// The backtracking search driver.
///
/// Explores the search tree depth first: pick an unassigned variable with the
/// configured ordering heuristic, try each of its current-domain values in
/// order, and after each assignment invoke the configured propagator. The
/// driver owns undo: every pruned-value list a propagator returns is restored
/// exactly once, before the next value is tried or control returns upward.
pub struct BacktrackingSolver {
    propagator: Box<dyn Propagator>,
    ordering: Box<dyn VariableOrdering>,
}

impl BacktrackingSolver {
    pub fn new(propagator: Box<dyn Propagator>, ordering: Box<dyn VariableOrdering>) -> Self {
        Self {
            propagator,
            ordering,
        }
    }

    /// Runs the search to completion.
    ///
    /// On [`SearchOutcome::Solved`] the variables keep their assignments; on
    /// [`SearchOutcome::Unsatisfiable`] every assignment and pruning made by
    /// the search has been undone.
    pub fn solve(&self, csp: &mut Csp) -> Result<(SearchOutcome, SearchStats)> {
        let mut stats = SearchStats::default();
        let start = Instant::now();
        debug!(
            csp = csp.name(),
            propagator = self.propagator.name(),
            "search started"
        );

        let initial = self.propagator.propagate(csp, None);
        stats.propagator_calls += 1;
        stats.values_pruned += initial.pruned.len() as u64;

        let solved = if initial.consistent {
            self.recurse(csp, &mut stats, 1)?
        } else {
            debug!("contradiction detected before search");
            false
        };

        // Root-level prunings are not covered by any backtrack; undo them
        // here so the caller gets its initial domains back.
        csp.restore(&initial.pruned);

        stats.elapsed = start.elapsed();
        debug!(
            solved,
            decisions = stats.decisions,
            backtracks = stats.backtracks,
            values_pruned = stats.values_pruned,
            "search finished"
        );
        let outcome = if solved {
            SearchOutcome::Solved
        } else {
            SearchOutcome::Unsatisfiable
        };
        Ok((outcome, stats))
    }

    fn recurse(&self, csp: &mut Csp, stats: &mut SearchStats, depth: usize) -> Result<bool> {
        let Some(var) = self.ordering.select_variable(csp) else {
            return Ok(true);
        };

        for value in csp.variable(var).cur_domain() {
            trace!(depth, variable = csp.variable(var).name(), %value, "assign");
            csp.variable_mut(var).assign(value)?;
            stats.decisions += 1;

            let propagation = self.propagator.propagate(csp, Some(var));
            stats.propagator_calls += 1;
            stats.values_pruned += propagation.pruned.len() as u64;

            if propagation.consistent && self.recurse(csp, stats, depth + 1)? {
                return Ok(true);
            }

            csp.restore(&propagation.pruned);
            csp.variable_mut(var).unassign();
            stats.backtracks += 1;
        }
        Ok(false)
    }
}
