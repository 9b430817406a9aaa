use crate::{
    error::{Error, Result},
    solver::{
        constraint::{Constraint, ConstraintId},
        value::Value,
        variable::{Variable, VariableId},
    },
};

/// A constraint satisfaction problem: an arena of variables, a list of
/// extensional constraints over them, and an adjacency index from each
/// variable to the constraints referencing it.
///
/// Variables and constraints are addressed by index, so the adjacency index
/// is a plain `Vec<Vec<ConstraintId>>` rather than a graph of back-pointers.
/// Variables may be added after construction; the cage compiler uses this for
/// its auxiliary operator variables.
#[derive(Debug, Clone)]
pub struct Csp {
    name: String,
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
    constraints_of: Vec<Vec<ConstraintId>>,
}

impl Csp {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Vec::new(),
            constraints: Vec::new(),
            constraints_of: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_variable(&mut self, variable: Variable) -> VariableId {
        let id = self.variables.len();
        self.variables.push(variable);
        self.constraints_of.push(Vec::new());
        id
    }

    /// Registers a constraint, checking that its scope names known variables
    /// exactly once each, and indexes it under every scope variable.
    pub fn add_constraint(&mut self, constraint: Constraint) -> Result<ConstraintId> {
        for (i, &var) in constraint.scope().iter().enumerate() {
            if var >= self.variables.len() {
                return Err(Error::UnknownVariable {
                    name: constraint.name().to_owned(),
                    id: var,
                });
            }
            if constraint.scope()[..i].contains(&var) {
                return Err(Error::DuplicateScopeVariable {
                    name: constraint.name().to_owned(),
                    id: var,
                });
            }
        }
        let id = self.constraints.len();
        for &var in constraint.scope() {
            self.constraints_of[var].push(id);
        }
        self.constraints.push(constraint);
        Ok(id)
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id]
    }

    pub fn variable_mut(&mut self, id: VariableId) -> &mut Variable {
        &mut self.variables[id]
    }

    pub fn constraint(&self, id: ConstraintId) -> &Constraint {
        &self.constraints[id]
    }

    pub fn variable_ids(&self) -> impl Iterator<Item = VariableId> {
        0..self.variables.len()
    }

    pub fn constraint_ids(&self) -> impl Iterator<Item = ConstraintId> {
        0..self.constraints.len()
    }

    /// The constraints whose scope contains `var`, in registration order.
    pub fn constraints_with(&self, var: VariableId) -> &[ConstraintId] {
        &self.constraints_of[var]
    }

    /// Unassigned variables in the scope of a constraint, in scope order.
    pub fn unassigned_in_scope(&self, id: ConstraintId) -> Vec<VariableId> {
        self.constraints[id]
            .scope()
            .iter()
            .copied()
            .filter(|&v| !self.variables[v].is_assigned())
            .collect()
    }

    pub fn unassigned_variables(&self) -> Vec<VariableId> {
        self.variable_ids()
            .filter(|&v| !self.variables[v].is_assigned())
            .collect()
    }

    /// Whether `value` for `var` has support under the given constraint: some
    /// satisfying tuple assigns `var` the value while every other scope
    /// position holds a value still in its variable's current domain.
    pub fn has_support(&self, id: ConstraintId, var: VariableId, value: Value) -> bool {
        let constraint = &self.constraints[id];
        let Some(position) = constraint.position_of(var) else {
            return false;
        };
        constraint
            .support_candidates(position, value)
            .iter()
            .any(|&t| self.tuple_is_live(constraint, t, position))
    }

    fn tuple_is_live(&self, constraint: &Constraint, tuple: usize, skip: usize) -> bool {
        constraint
            .tuple_at(tuple)
            .iter()
            .zip(constraint.scope())
            .enumerate()
            .all(|(i, (&value, &var))| i == skip || self.variables[var].in_cur_domain(value))
    }

    /// Whether a full assignment of the constraint's scope satisfies it.
    pub fn check(&self, id: ConstraintId, values: &[Value]) -> bool {
        self.constraints[id].accepts(values)
    }

    /// Puts every `(variable, value)` pair from a propagator's pruned-value
    /// list back into its current domain.
    pub fn restore(&mut self, pruned: &[(VariableId, Value)]) {
        for &(var, value) in pruned {
            self.variables[var].restore_value(value);
        }
    }
}
