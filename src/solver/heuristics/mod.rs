//! Heuristics consumed by the search engine.

pub mod variable;

pub use variable::{
    DegreeHeuristic, MinimumRemainingValuesHeuristic, RandomVariableHeuristic,
    SelectFirstHeuristic, VariableOrdering,
};
