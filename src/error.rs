use crate::solver::value::Value;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while constructing a CSP or a puzzle model.
///
/// These are all construction-time failures: once a model has been built
/// successfully, search and propagation never produce an `Error`. A dead end
/// found during propagation is signalled through
/// [`Propagation::consistent`](crate::solver::propagators::Propagation), not
/// through this type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cage has no cells")]
    EmptyCage,

    #[error("cell ({row},{col}) lies outside the {size}x{size} grid")]
    CellOutOfRange { row: usize, col: usize, size: usize },

    #[error("grid size must be at least 1")]
    EmptyGrid,

    #[error("edge endpoint {vertex} lies outside 0..{num_vertices}")]
    VertexOutOfRange { vertex: usize, num_vertices: usize },

    #[error("constraint {name}: tuple of arity {found} does not match scope of arity {expected}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("constraint {name} references unknown variable {id}")]
    UnknownVariable { name: String, id: usize },

    #[error("constraint {name} repeats variable {id} in its scope")]
    DuplicateScopeVariable { name: String, id: usize },

    #[error("cannot assign {value} to {name}: value is not in its current domain")]
    ValueNotInDomain { name: String, value: Value },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
