//! The n-queens problem: place n queens on an n×n board so that no two
//! attack each other.
//!
//! One variable per column, named `Q1..Qn`, whose value is the queen's row
//! in `1..=n`. Each pair of columns gets one binary constraint whose relation
//! holds the row pairs that neither share a row nor a diagonal.

use crate::{
    error::{Error, Result},
    solver::{
        constraint::Constraint,
        csp::Csp,
        value::Value,
        variable::{Variable, VariableId},
    },
};

/// Whether queens in columns `i` and `j` (0-indexed) at rows `qi` and `qj`
/// leave each other unattacked.
fn queens_check(qi: i64, qj: i64, i: i64, j: i64) -> bool {
    qi != qj && (qi - qj).abs() != (i - j).abs()
}

/// Builds the n-queens model. Returns the CSP and the column variables in
/// column order.
pub fn n_queens(n: usize) -> Result<(Csp, Vec<VariableId>)> {
    if n == 0 {
        return Err(Error::EmptyGrid);
    }
    let mut csp = Csp::new(format!("{n}-queens"));
    let domain: Vec<Value> = (1..=n as i64).map(Value::Int).collect();

    let vars: Vec<VariableId> = (1..=n)
        .map(|col| csp.add_variable(Variable::new(format!("Q{col}"), domain.clone())))
        .collect();

    for i in 0..n {
        for j in (i + 1)..n {
            let mut con = Constraint::new(format!("C(Q{},Q{})", i + 1, j + 1), vec![vars[i], vars[j]]);
            let mut tuples = Vec::new();
            for &qi in &domain {
                for &qj in &domain {
                    let (Some(ri), Some(rj)) = (qi.as_int(), qj.as_int()) else {
                        continue;
                    };
                    if queens_check(ri, rj, i as i64, j as i64) {
                        tuples.push(vec![qi, qj]);
                    }
                }
            }
            con.add_satisfying_tuples(tuples)?;
            csp.add_constraint(con)?;
        }
    }
    Ok((csp, vars))
}
