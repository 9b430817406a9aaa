//! Defines a collection of standard heuristics for selecting which variable
//! to branch on next during the search process.

use std::cmp::Reverse;

use crate::solver::{csp::Csp, variable::VariableId};

/// A trait for variable-selection heuristics.
///
/// Implementors define a strategy for choosing which unassigned variable the
/// solver should branch on next. Only unassigned variables are ever
/// considered; branching on an instantiated variable is meaningless.
pub trait VariableOrdering {
    /// Selects the next variable to be assigned, or `None` if every variable
    /// is already assigned.
    fn select_variable(&self, csp: &Csp) -> Option<VariableId>;
}

/// Selects the first unassigned variable in CSP iteration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectFirstHeuristic;

impl VariableOrdering for SelectFirstHeuristic {
    fn select_variable(&self, csp: &Csp) -> Option<VariableId> {
        csp.variable_ids().find(|&v| !csp.variable(v).is_assigned())
    }
}

/// Minimum remaining values: selects the unassigned variable with the
/// smallest current domain.
///
/// A "fail-first" strategy that tackles the most constrained variable early.
/// Ties break towards the first such variable in CSP iteration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumRemainingValuesHeuristic;

impl VariableOrdering for MinimumRemainingValuesHeuristic {
    fn select_variable(&self, csp: &Csp) -> Option<VariableId> {
        csp.variable_ids()
            .filter(|&v| !csp.variable(v).is_assigned())
            .min_by_key(|&v| csp.variable(v).cur_domain_size())
    }
}

/// Degree heuristic: selects the unassigned variable appearing in the
/// greatest number of constraints. Ties break towards the first such
/// variable in CSP iteration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DegreeHeuristic;

impl VariableOrdering for DegreeHeuristic {
    fn select_variable(&self, csp: &Csp) -> Option<VariableId> {
        csp.variable_ids()
            .filter(|&v| !csp.variable(v).is_assigned())
            // min_by_key keeps the first of equal keys, so Reverse gives the
            // first maximum.
            .min_by_key(|&v| Reverse(csp.constraints_with(v).len()))
    }
}

/// Selects an unassigned variable at random.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomVariableHeuristic;

impl VariableOrdering for RandomVariableHeuristic {
    fn select_variable(&self, csp: &Csp) -> Option<VariableId> {
        use rand::seq::IteratorRandom;

        csp.variable_ids()
            .filter(|&v| !csp.variable(v).is_assigned())
            .choose(&mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{constraint::Constraint, value::Value, variable::Variable};

    fn int_domain(n: i64) -> Vec<Value> {
        (1..=n).map(Value::Int).collect()
    }

    fn sample_csp() -> Csp {
        let mut csp = Csp::new("heuristics");
        let a = csp.add_variable(Variable::new("A", int_domain(4)));
        let b = csp.add_variable(Variable::new("B", int_domain(2)));
        let c = csp.add_variable(Variable::new("C", int_domain(3)));

        // A participates in two constraints, B and C in one each.
        for (name, scope) in [("AB", vec![a, b]), ("AC", vec![a, c])] {
            let mut con = Constraint::new(name, scope);
            con.add_satisfying_tuples([vec![Value::Int(1), Value::Int(1)]])
                .unwrap();
            csp.add_constraint(con).unwrap();
        }
        csp
    }

    #[test]
    fn mrv_picks_smallest_current_domain() {
        let mut csp = sample_csp();
        assert_eq!(MinimumRemainingValuesHeuristic.select_variable(&csp), Some(1));

        // Shrink C below B: the selection follows.
        csp.variable_mut(2).prune_value(Value::Int(1));
        csp.variable_mut(2).prune_value(Value::Int(2));
        assert_eq!(MinimumRemainingValuesHeuristic.select_variable(&csp), Some(2));
    }

    #[test]
    fn mrv_ties_break_towards_iteration_order() {
        let mut csp = Csp::new("tie");
        let a = csp.add_variable(Variable::new("A", int_domain(2)));
        let _b = csp.add_variable(Variable::new("B", int_domain(2)));
        assert_eq!(MinimumRemainingValuesHeuristic.select_variable(&csp), Some(a));
    }

    #[test]
    fn degree_picks_most_constrained_variable() {
        let csp = sample_csp();
        assert_eq!(DegreeHeuristic.select_variable(&csp), Some(0));
    }

    #[test]
    fn assigned_variables_are_never_selected() {
        let mut csp = sample_csp();
        csp.variable_mut(0).assign(Value::Int(1)).unwrap();
        csp.variable_mut(1).assign(Value::Int(1)).unwrap();

        assert_eq!(DegreeHeuristic.select_variable(&csp), Some(2));
        assert_eq!(MinimumRemainingValuesHeuristic.select_variable(&csp), Some(2));
        assert_eq!(SelectFirstHeuristic.select_variable(&csp), Some(2));
        assert_eq!(RandomVariableHeuristic.select_variable(&csp), Some(2));

        csp.variable_mut(2).assign(Value::Int(1)).unwrap();
        assert_eq!(DegreeHeuristic.select_variable(&csp), None);
        assert_eq!(MinimumRemainingValuesHeuristic.select_variable(&csp), None);
        assert_eq!(SelectFirstHeuristic.select_variable(&csp), None);
        assert_eq!(RandomVariableHeuristic.select_variable(&csp), None);
    }
}
