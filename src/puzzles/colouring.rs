//! Graph colouring: assign each vertex one of k colours so that adjacent
//! vertices differ.

use crate::{
    error::{Error, Result},
    solver::{
        constraint::Constraint,
        csp::Csp,
        value::Value,
        variable::{Variable, VariableId},
    },
};

/// Builds a graph-colouring model with one variable per vertex (domain
/// `1..=colours`) and one binary not-equal constraint per edge.
///
/// Vertices are 0-indexed; an edge endpoint outside `0..num_vertices` is a
/// construction error.
pub fn graph_colouring(
    num_vertices: usize,
    edges: &[(usize, usize)],
    colours: usize,
) -> Result<(Csp, Vec<VariableId>)> {
    if num_vertices == 0 {
        return Err(Error::EmptyGrid);
    }
    let mut csp = Csp::new(format!("{num_vertices}-vertex-{colours}-colouring"));
    let domain: Vec<Value> = (1..=colours as i64).map(Value::Int).collect();

    let vars: Vec<VariableId> = (0..num_vertices)
        .map(|v| csp.add_variable(Variable::new(format!("V{v}"), domain.clone())))
        .collect();

    let mut ne_tuples = Vec::new();
    for &a in &domain {
        for &b in &domain {
            if a != b {
                ne_tuples.push(vec![a, b]);
            }
        }
    }

    for &(u, v) in edges {
        if let Some(&vertex) = [u, v].iter().find(|&&e| e >= num_vertices) {
            return Err(Error::VertexOutOfRange {
                vertex,
                num_vertices,
            });
        }
        let mut con = Constraint::new(format!("E({u},{v})"), vec![vars[u], vars[v]]);
        con.add_satisfying_tuples(ne_tuples.iter().cloned())?;
        csp.add_constraint(con)?;
    }
    Ok((csp, vars))
}

/// The classic map of mainland Australia: WA, NT, SA, Q, NSW, V, T.
pub fn australia(colours: usize) -> Result<(Csp, Vec<VariableId>)> {
    // 0=WA 1=NT 2=SA 3=Q 4=NSW 5=V 6=T
    let edges = [
        (0, 1),
        (0, 2),
        (1, 2),
        (1, 3),
        (2, 3),
        (2, 4),
        (2, 5),
        (3, 4),
        (4, 5),
    ];
    graph_colouring(7, &edges, colours)
}
