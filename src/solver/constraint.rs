use std::collections::HashMap;

use crate::{
    error::{Error, Result},
    solver::{value::Value, variable::VariableId},
};

/// Index of a constraint in its [`Csp`](crate::solver::csp::Csp).
pub type ConstraintId = usize;

/// An extensional constraint: an ordered scope of variables plus an explicit
/// relation of satisfying tuples.
///
/// The relation is frozen once added. Alongside the plain tuple list the
/// constraint keeps a membership set for O(1) full-tuple checks and a support
/// index from `(scope position, value)` to the tuples using that value, which
/// is what makes the `has_support` test cheap during propagation.
#[derive(Debug, Clone)]
pub struct Constraint {
    name: String,
    scope: Vec<VariableId>,
    tuples: Vec<Vec<Value>>,
    members: im::HashSet<Vec<Value>>,
    supports: HashMap<(usize, Value), Vec<usize>>,
}

impl Constraint {
    /// Creates a constraint with an empty relation over the given scope.
    pub fn new(name: impl Into<String>, scope: Vec<VariableId>) -> Self {
        Self {
            name: name.into(),
            scope,
            tuples: Vec::new(),
            members: im::HashSet::new(),
            supports: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    pub fn arity(&self) -> usize {
        self.scope.len()
    }

    /// The satisfying tuples, in insertion order.
    pub fn tuples(&self) -> &[Vec<Value>] {
        &self.tuples
    }

    pub fn num_tuples(&self) -> usize {
        self.tuples.len()
    }

    /// Adds satisfying tuples to the relation. Tuples already present are
    /// ignored. A tuple whose arity does not match the scope is a
    /// construction-time error.
    pub fn add_satisfying_tuples<I>(&mut self, tuples: I) -> Result<()>
    where
        I: IntoIterator<Item = Vec<Value>>,
    {
        for tuple in tuples {
            if tuple.len() != self.scope.len() {
                return Err(Error::ArityMismatch {
                    name: self.name.clone(),
                    expected: self.scope.len(),
                    found: tuple.len(),
                });
            }
            if self.members.contains(&tuple) {
                continue;
            }
            let index = self.tuples.len();
            for (position, &value) in tuple.iter().enumerate() {
                self.supports
                    .entry((position, value))
                    .or_default()
                    .push(index);
            }
            self.members.insert(tuple.clone());
            self.tuples.push(tuple);
        }
        Ok(())
    }

    /// Whether the given full assignment of the scope satisfies the
    /// constraint.
    pub fn accepts(&self, values: &[Value]) -> bool {
        self.members.contains(values)
    }

    pub(crate) fn position_of(&self, var: VariableId) -> Option<usize> {
        self.scope.iter().position(|&v| v == var)
    }

    /// Indices of the tuples assigning `value` at scope `position`.
    pub(crate) fn support_candidates(&self, position: usize, value: Value) -> &[usize] {
        self.supports
            .get(&(position, value))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(crate) fn tuple_at(&self, index: usize) -> &[Value] {
        &self.tuples[index]
    }
}
