//! The problem-agnostic solver backend: the variable/constraint data model,
//! the propagation algorithms, ordering heuristics, and the backtracking
//! search engine.

pub mod constraint;
pub mod csp;
pub mod engine;
pub mod heuristics;
pub mod propagators;
pub mod stats;
pub mod value;
pub mod variable;
pub mod work_list;
