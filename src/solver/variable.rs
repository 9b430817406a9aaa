use crate::{
    error::{Error, Result},
    solver::value::Value,
};

/// Index of a variable in its [`Csp`](crate::solver::csp::Csp) arena.
pub type VariableId = usize;

/// A finite-domain variable.
///
/// The *initial domain* is fixed at construction and ordered. The *current
/// domain* is tracked as a membership mask over the initial domain, so it is
/// always an ordered subset of the initial domain and prune/restore are O(1).
/// An assigned variable reports a singleton current domain containing its
/// assignment.
#[derive(Debug, Clone)]
pub struct Variable {
    name: String,
    domain: Vec<Value>,
    current: Vec<bool>,
    assignment: Option<Value>,
}

impl Variable {
    /// Creates a variable with the given ordered domain of distinct values.
    pub fn new(name: impl Into<String>, domain: Vec<Value>) -> Self {
        let current = vec![true; domain.len()];
        Self {
            name: name.into(),
            domain,
            current,
            assignment: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The initial domain, in construction order.
    pub fn domain(&self) -> &[Value] {
        &self.domain
    }

    pub fn domain_size(&self) -> usize {
        self.domain.len()
    }

    fn index_of(&self, value: Value) -> Option<usize> {
        self.domain.iter().position(|&v| v == value)
    }

    /// The current domain, in initial-domain order. For an assigned variable
    /// this is the singleton assignment (or empty if a propagator has pruned
    /// the assigned value, which signals a dead end).
    pub fn cur_domain(&self) -> Vec<Value> {
        match self.assignment {
            Some(value) if self.mask_contains(value) => vec![value],
            Some(_) => vec![],
            None => self
                .domain
                .iter()
                .zip(&self.current)
                .filter(|(_, &live)| live)
                .map(|(&v, _)| v)
                .collect(),
        }
    }

    pub fn cur_domain_size(&self) -> usize {
        match self.assignment {
            Some(value) => usize::from(self.mask_contains(value)),
            None => self.current.iter().filter(|&&live| live).count(),
        }
    }

    fn mask_contains(&self, value: Value) -> bool {
        self.index_of(value).is_some_and(|i| self.current[i])
    }

    pub fn in_cur_domain(&self, value: Value) -> bool {
        match self.assignment {
            Some(assigned) => assigned == value && self.mask_contains(value),
            None => self.mask_contains(value),
        }
    }

    /// Removes `value` from the current domain. Returns `false` if the value
    /// was already absent, in which case nothing changes; propagators rely on
    /// this to keep their pruned-value lists free of duplicates.
    pub fn prune_value(&mut self, value: Value) -> bool {
        match self.index_of(value) {
            Some(i) if self.current[i] => {
                self.current[i] = false;
                true
            }
            _ => false,
        }
    }

    /// Puts a previously pruned value back into the current domain. Only the
    /// search driver calls this, with values taken from a propagator's
    /// pruned-value list.
    pub fn restore_value(&mut self, value: Value) {
        if let Some(i) = self.index_of(value) {
            self.current[i] = true;
        }
    }

    /// Instantiates the variable. Fails if `value` is not in the current
    /// domain, preserving the invariant that an assignment is always a member
    /// of the current domain.
    pub fn assign(&mut self, value: Value) -> Result<()> {
        if self.assignment.is_some() || !self.mask_contains(value) {
            return Err(Error::ValueNotInDomain {
                name: self.name.clone(),
                value,
            });
        }
        self.assignment = Some(value);
        Ok(())
    }

    pub fn unassign(&mut self) {
        self.assignment = None;
    }

    pub fn is_assigned(&self) -> bool {
        self.assignment.is_some()
    }

    pub fn assigned_value(&self) -> Option<Value> {
        self.assignment
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ints(values: &[i64]) -> Vec<Value> {
        values.iter().copied().map(Value::Int).collect()
    }

    #[test]
    fn pruning_preserves_domain_order() {
        let mut var = Variable::new("X", ints(&[1, 2, 3, 4]));
        assert!(var.prune_value(Value::Int(3)));
        assert_eq!(var.cur_domain(), ints(&[1, 2, 4]));
        assert_eq!(var.cur_domain_size(), 3);
    }

    #[test]
    fn double_prune_is_rejected() {
        let mut var = Variable::new("X", ints(&[1, 2]));
        assert!(var.prune_value(Value::Int(1)));
        assert!(!var.prune_value(Value::Int(1)));
        assert!(!var.prune_value(Value::Int(9)));
    }

    #[test]
    fn restore_undoes_prune() {
        let mut var = Variable::new("X", ints(&[1, 2, 3]));
        let before = var.cur_domain();
        assert!(var.prune_value(Value::Int(2)));
        var.restore_value(Value::Int(2));
        assert_eq!(var.cur_domain(), before);
    }

    #[test]
    fn assigned_variable_reports_singleton_domain() {
        let mut var = Variable::new("X", ints(&[1, 2, 3]));
        var.assign(Value::Int(2)).unwrap();
        assert_eq!(var.cur_domain(), ints(&[2]));
        assert_eq!(var.cur_domain_size(), 1);
        assert!(var.in_cur_domain(Value::Int(2)));
        assert!(!var.in_cur_domain(Value::Int(1)));
        var.unassign();
        assert_eq!(var.cur_domain(), ints(&[1, 2, 3]));
    }

    #[test]
    fn assigning_a_pruned_value_fails() {
        let mut var = Variable::new("X", ints(&[1, 2]));
        var.prune_value(Value::Int(1));
        assert!(var.assign(Value::Int(1)).is_err());
        assert!(var.assign(Value::Int(2)).is_ok());
    }

    #[test]
    fn pruning_the_assigned_value_empties_the_domain() {
        let mut var = Variable::new("X", ints(&[1, 2]));
        var.assign(Value::Int(1)).unwrap();
        assert!(var.prune_value(Value::Int(1)));
        assert_eq!(var.cur_domain_size(), 0);
        assert!(var.cur_domain().is_empty());
    }
}
