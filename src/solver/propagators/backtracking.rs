use tracing::trace;

use crate::solver::{
    csp::Csp,
    propagators::{Propagation, Propagator},
    variable::VariableId,
};

/// The no-op propagator: plain backtracking.
///
/// Performs no pruning at all. It only rejects the current assignment when a
/// constraint whose scope is now fully instantiated is violated.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainBacktracking;

impl Propagator for PlainBacktracking {
    fn name(&self) -> &'static str {
        "backtracking"
    }

    fn propagate(&self, csp: &mut Csp, newly_assigned: Option<VariableId>) -> Propagation {
        let Some(var) = newly_assigned else {
            // Nothing to do before the first assignment.
            return Propagation::consistent(vec![]);
        };

        for &cid in csp.constraints_with(var) {
            if !csp.unassigned_in_scope(cid).is_empty() {
                continue;
            }
            let values: Vec<_> = csp
                .constraint(cid)
                .scope()
                .iter()
                .filter_map(|&v| csp.variable(v).assigned_value())
                .collect();
            if !csp.check(cid, &values) {
                trace!(constraint = csp.constraint(cid).name(), "violated");
                return Propagation::dead_end(vec![]);
            }
        }
        Propagation::consistent(vec![])
    }
}
