use tracing::debug;

use crate::solver::{
    csp::Csp,
    propagators::{Propagation, Propagator},
    value::Value,
    variable::VariableId,
};

/// Forward checking: propagation restricted to constraints with exactly one
/// unassigned variable in scope.
///
/// For each such constraint, every value of the lone unassigned variable that
/// cannot be extended to a satisfying tuple (given the fixed assignments of
/// the rest of the scope) is pruned. Constraints with zero or two-or-more
/// unassigned variables are left untouched; this propagator only looks one
/// variable ahead.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardChecking;

impl Propagator for ForwardChecking {
    fn name(&self) -> &'static str {
        "forward-checking"
    }

    fn propagate(&self, csp: &mut Csp, newly_assigned: Option<VariableId>) -> Propagation {
        let candidates: Vec<_> = match newly_assigned {
            None => csp.constraint_ids().collect(),
            Some(var) => csp.constraints_with(var).to_vec(),
        };

        let mut pruned: Vec<(VariableId, Value)> = Vec::new();
        for cid in candidates {
            let unassigned = csp.unassigned_in_scope(cid);
            let &[var] = unassigned.as_slice() else {
                continue;
            };
            for value in csp.variable(var).cur_domain() {
                if csp.has_support(cid, var, value) {
                    continue;
                }
                let removed = csp.variable_mut(var).prune_value(value);
                debug_assert!(removed, "forward checking pruned an absent value");
                pruned.push((var, value));
            }
            if csp.variable(var).cur_domain_size() == 0 {
                debug!(
                    variable = csp.variable(var).name(),
                    constraint = csp.constraint(cid).name(),
                    "domain wiped out"
                );
                return Propagation::dead_end(pruned);
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
        solver::{constraint::Constraint, variable::Variable},
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

        let result = ForwardChecking.propagate(&mut csp, Some(vars[0]));
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

    // Forward checking prunes strictly less than GAC here; compare with the
    // same scenario in the GAC tests.
    #[test]
    fn eight_queens_with_three_queens_placed() {
        let (mut csp, vars) = n_queens(8).unwrap();
        csp.variable_mut(vars[0]).assign(Value::Int(4)).unwrap();
        csp.variable_mut(vars[2]).assign(Value::Int(1)).unwrap();
        csp.variable_mut(vars[7]).assign(Value::Int(5)).unwrap();

        let result = ForwardChecking.propagate(&mut csp, None);
        assert!(result.consistent);
        assert_eq!(
            current_domains(&csp, &vars),
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
    }

    #[test]
    fn constraints_with_two_unassigned_variables_are_untouched() {
        let (mut csp, vars) = n_queens(8).unwrap();
        // Nothing assigned: every constraint has two unassigned variables.
        let result = ForwardChecking.propagate(&mut csp, None);
        assert!(result.consistent);
        assert!(result.pruned.is_empty());
        for &v in &vars {
            assert_eq!(csp.variable(v).cur_domain_size(), 8);
        }
    }

    #[test]
    fn initial_call_checks_unary_constraints() {
        let mut csp = Csp::new("unary");
        let domain: Vec<Value> = (1..=3).map(Value::Int).collect();
        let x = csp.add_variable(Variable::new("X", domain));
        let mut con = Constraint::new("X=2", vec![x]);
        con.add_satisfying_tuples([vec![Value::Int(2)]]).unwrap();
        csp.add_constraint(con).unwrap();

        let result = ForwardChecking.propagate(&mut csp, None);
        assert!(result.consistent);
        assert_eq!(result.pruned, vec![(x, Value::Int(1)), (x, Value::Int(3))]);
        assert_eq!(csp.variable(x).cur_domain(), vec![Value::Int(2)]);
    }

    #[test]
    fn wipeout_reports_dead_end_with_prunings() {
        let mut csp = Csp::new("wipe");
        let domain: Vec<Value> = (1..=2).map(Value::Int).collect();
        let a = csp.add_variable(Variable::new("A", domain.clone()));
        let b = csp.add_variable(Variable::new("B", domain));
        let mut con = Constraint::new("A=B=1", vec![a, b]);
        con.add_satisfying_tuples([vec![Value::Int(1), Value::Int(1)]])
            .unwrap();
        csp.add_constraint(con).unwrap();

        csp.variable_mut(a).assign(Value::Int(2)).unwrap();
        let result = ForwardChecking.propagate(&mut csp, Some(a));
        assert!(!result.consistent);
        // Both of B's values were pruned before the wipeout was detected.
        assert_eq!(result.pruned, vec![(b, Value::Int(1)), (b, Value::Int(2))]);
    }
}
