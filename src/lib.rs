//! A finite-domain constraint satisfaction solver with pluggable propagators
//! and variable-ordering heuristics, plus encoders for n-queens, graph
//! colouring, and Cagey arithmetic-cage puzzles.
//!
//! Models are built from [`solver::variable::Variable`]s with explicit finite
//! domains and extensional [`solver::constraint::Constraint`]s whose
//! relations list every satisfying tuple. The
//! [`solver::engine::BacktrackingSolver`] explores assignments depth first,
//! invoking a [`solver::propagators::Propagator`] after each one to prune
//! inconsistent values early.
//!
//! ```
//! use cagey::solver::{
//!     constraint::Constraint,
//!     csp::Csp,
//!     engine::{BacktrackingSolver, SearchOutcome},
//!     heuristics::MinimumRemainingValuesHeuristic,
//!     propagators::ForwardChecking,
//!     value::Value,
//!     variable::Variable,
//! };
//!
//! # fn main() -> cagey::error::Result<()> {
//! let mut csp = Csp::new("demo");
//! let domain: Vec<Value> = (1..=2).map(Value::Int).collect();
//! let a = csp.add_variable(Variable::new("A", domain.clone()));
//! let b = csp.add_variable(Variable::new("B", domain));
//!
//! let mut ne = Constraint::new("A!=B", vec![a, b]);
//! ne.add_satisfying_tuples([
//!     vec![Value::Int(1), Value::Int(2)],
//!     vec![Value::Int(2), Value::Int(1)],
//! ])?;
//! csp.add_constraint(ne)?;
//!
//! let solver = BacktrackingSolver::new(
//!     Box::new(ForwardChecking),
//!     Box::new(MinimumRemainingValuesHeuristic),
//! );
//! let (outcome, _stats) = solver.solve(&mut csp)?;
//! assert_eq!(outcome, SearchOutcome::Solved);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod puzzles;
pub mod solver;
