use tracing::debug;

use crate::solver::{
    csp::Csp,
    propagators::{Propagation, Propagator},
    value::Value,
    variable::VariableId,
    work_list::WorkList,
};

/// Generalised arc consistency (GAC-3).
///
/// Runs a FIFO worklist of constraints to a fixpoint. For every variable in a
/// popped constraint's scope, every current-domain value without a supporting
/// tuple is pruned, and each pruning re-enqueues the other constraints on
/// that variable, since the lost value may have been their only support.
///
/// On success every remaining value of every variable has, in every
/// constraint containing that variable, at least one supporting tuple
/// consistent with the other variables' current domains.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gac;

impl Propagator for Gac {
    fn name(&self) -> &'static str {
        "gac"
    }

    fn propagate(&self, csp: &mut Csp, newly_assigned: Option<VariableId>) -> Propagation {
        let mut worklist = WorkList::new();
        match newly_assigned {
            None => {
                for cid in csp.constraint_ids() {
                    worklist.push_back(cid);
                }
            }
            Some(var) => {
                for &cid in csp.constraints_with(var) {
                    worklist.push_back(cid);
                }
            }
        }

        let mut pruned: Vec<(VariableId, Value)> = Vec::new();
        while let Some(cid) = worklist.pop_front() {
            let scope = csp.constraint(cid).scope().to_vec();
            for var in scope {
                for value in csp.variable(var).cur_domain() {
                    if csp.has_support(cid, var, value) {
                        continue;
                    }
                    let removed = csp.variable_mut(var).prune_value(value);
                    debug_assert!(removed, "gac pruned an absent value");
                    pruned.push((var, value));

                    if csp.variable(var).cur_domain_size() == 0 {
                        debug!(
                            variable = csp.variable(var).name(),
                            constraint = csp.constraint(cid).name(),
                            "domain wiped out"
                        );
                        return Propagation::dead_end(pruned);
                    }
                    for &dependent in csp.constraints_with(var) {
                        worklist.push_back(dependent);
                    }
                }
            }
        }
        Propagation::consistent(pruned)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        puzzles::queens::n_queens,
        solver::propagators::ForwardChecking,
    };

    fn current_domains(csp: &Csp, vars: &[VariableId]) -> Vec<Vec<i64>> {
        vars.iter()
            .map(|&v| {
                csp.variable(v)
                    .cur_domain()
                    .into_iter()
                    .filter_map(Value::as_int)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn eight_queens_after_first_queen_placed() {
        let (mut csp, vars) = n_queens(8).unwrap();
        csp.variable_mut(vars[0]).assign(Value::Int(1)).unwrap();

        let result = Gac.propagate(&mut csp, Some(vars[0]));
        assert!(result.consistent);
        assert_eq!(
            current_domains(&csp, &vars),
            vec![
                vec![1],
                vec![3, 4, 5, 6, 7, 8],
                vec![2, 4, 5, 6, 7, 8],
                vec![2, 3, 5, 6, 7, 8],
                vec![2, 3, 4, 6, 7, 8],
                vec![2, 3, 4, 5, 7, 8],
                vec![2, 3, 4, 5, 6, 8],
                vec![2, 3, 4, 5, 6, 7],
            ]
        );
    }

    // The same scenario under forward checking leaves 6 in the domains of
    // queens 4 and 6; GAC's fixpoint removes it.
    #[test]
    fn eight_queens_with_three_queens_placed_dominates_forward_checking() {
        let (mut csp, vars) = n_queens(8).unwrap();
        csp.variable_mut(vars[0]).assign(Value::Int(4)).unwrap();
        csp.variable_mut(vars[2]).assign(Value::Int(1)).unwrap();
        csp.variable_mut(vars[7]).assign(Value::Int(5)).unwrap();

        let gac_result = Gac.propagate(&mut csp, None);
        assert!(gac_result.consistent);
        let gac_domains = current_domains(&csp, &vars);
        assert_eq!(
            gac_domains,
            vec![
                vec![4],
                vec![6, 7, 8],
                vec![1],
                vec![3, 8],
                vec![6, 7],
                vec![2, 8],
                vec![2, 3, 7, 8],
                vec![5],
            ]
        );

        // Restore and rerun with forward checking: strictly weaker pruning.
        csp.restore(&gac_result.pruned);
        let fc_result = ForwardChecking.propagate(&mut csp, None);
        assert!(fc_result.consistent);
        let fc_domains = current_domains(&csp, &vars);
        assert_eq!(
            fc_domains,
            vec![
                vec![4],
                vec![6, 7, 8],
                vec![1],
                vec![3, 6, 8],
                vec![6, 7],
                vec![2, 6, 8],
                vec![2, 3, 7, 8],
                vec![5],
            ]
        );
        assert!(fc_result.pruned.len() < gac_result.pruned.len());
    }

    #[test]
    fn fixpoint_leaves_every_value_supported() {
        let (mut csp, vars) = n_queens(8).unwrap();
        csp.variable_mut(vars[0]).assign(Value::Int(1)).unwrap();
        assert!(Gac.propagate(&mut csp, Some(vars[0])).consistent);

        for cid in csp.constraint_ids() {
            for &var in csp.constraint(cid).scope() {
                for value in csp.variable(var).cur_domain() {
                    assert!(
                        csp.has_support(cid, var, value),
                        "{} has unsupported value {value} under {}",
                        csp.variable(var).name(),
                        csp.constraint(cid).name()
                    );
                }
            }
        }
    }

    #[test]
    fn prunings_are_unique_and_reversible() {
        let (mut csp, vars) = n_queens(8).unwrap();
        let before = current_domains(&csp, &vars);
        csp.variable_mut(vars[0]).assign(Value::Int(4)).unwrap();

        let result = Gac.propagate(&mut csp, Some(vars[0]));
        assert!(result.consistent);

        let mut seen = result.pruned.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), result.pruned.len(), "duplicate pruning");

        csp.restore(&result.pruned);
        csp.variable_mut(vars[0]).unassign();
        assert_eq!(current_domains(&csp, &vars), before);
    }
}
