//! Models for Cagey grids: an n×n Latin square whose cells are additionally
//! grouped into arithmetic cages.
//!
//! A cage is a target value, a set of cells, and an operator that may be
//! unknown. Each cage compiles into one auxiliary operator variable plus one
//! extensional constraint whose relation holds every value combination that
//! reaches the target. When the operator is unknown the relation is the
//! union over the four concrete operators, so the operator is effectively an
//! existentially quantified search variable.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    solver::{
        constraint::Constraint,
        csp::Csp,
        value::{Operator, Value},
        variable::{Variable, VariableId},
    },
};

/// One cage of a Cagey puzzle. Cell coordinates are 1-indexed `(row, col)`
/// pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cage {
    pub target: i64,
    pub cells: Vec<(usize, usize)>,
    pub op: Operator,
}

/// A Cagey puzzle: grid size plus cages.
///
/// The JSON form uses the conventional operator symbols, e.g.
/// `{"size":3,"cages":[{"target":3,"cells":[[1,1],[2,1]],"op":"+"}]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    pub size: usize,
    pub cages: Vec<Cage>,
}

/// The 3×3 puzzle used throughout the tests and as the CLI sample.
pub fn sample_3x3() -> Puzzle {
    Puzzle {
        size: 3,
        cages: vec![
            Cage {
                target: 3,
                cells: vec![(1, 1), (2, 1)],
                op: Operator::Add,
            },
            Cage {
                target: 1,
                cells: vec![(1, 2)],
                op: Operator::Unknown,
            },
            Cage {
                target: 8,
                cells: vec![(1, 3), (2, 3), (2, 2)],
                op: Operator::Add,
            },
            Cage {
                target: 3,
                cells: vec![(3, 1)],
                op: Operator::Unknown,
            },
            Cage {
                target: 3,
                cells: vec![(3, 2), (3, 3)],
                op: Operator::Add,
            },
        ],
    }
}

/// Maps a 1-indexed `(row, col)` coordinate to its position in the row-major
/// grid variable array: `(row-1)*n + (col-1)`.
pub fn cell_index(row: usize, col: usize, n: usize) -> Result<usize> {
    if row == 0 || col == 0 || row > n || col > n {
        return Err(Error::CellOutOfRange { row, col, size: n });
    }
    Ok((row - 1) * n + (col - 1))
}

/// Whether folding `op` over `operands` (in order) reaches `target`.
///
/// A single operand matches iff it equals the target; the operator is
/// ignored. With two or more operands the operator is folded left to right
/// and the *magnitude* of the result is compared against the target, so
/// `[6,5]` and `[5,6]` both satisfy a subtraction cage with target 1 — cage
/// definitions do not record cell order for two-cell subtract or divide
/// cages. Division folds with real-number semantics; division by zero makes
/// the candidate fail, it is never an error.
pub fn cagey_check(target: i64, operands: &[i64], op: Operator) -> bool {
    match operands.split_first() {
        None => false,
        Some((&single, [])) => single == target,
        Some((&first, rest)) => {
            let mut value = first as f64;
            for &operand in rest {
                let Some(next) = op.apply(value, operand as f64) else {
                    return false;
                };
                value = next;
            }
            value.abs() == target as f64
        }
    }
}

/// [`cagey_check`] over a scope-ordered candidate tuple whose final position
/// is the operator.
fn cage_tuple_check(target: i64, tuple: &[Value]) -> bool {
    let Some((&last, cells)) = tuple.split_last() else {
        return false;
    };
    let Some(op) = last.as_op() else {
        return false;
    };
    let Some(operands) = cells.iter().map(|v| v.as_int()).collect::<Option<Vec<_>>>() else {
        return false;
    };
    cagey_check(target, &operands, op)
}

/// Visits every tuple in the Cartesian product of the given domains.
fn for_each_product<F: FnMut(&[Value])>(domains: &[Vec<Value>], visit: &mut F) {
    fn go<F: FnMut(&[Value])>(domains: &[Vec<Value>], prefix: &mut Vec<Value>, visit: &mut F) {
        let Some((first, rest)) = domains.split_first() else {
            visit(prefix);
            return;
        };
        for &value in first {
            prefix.push(value);
            go(rest, prefix, visit);
            prefix.pop();
        }
    }
    go(domains, &mut Vec::with_capacity(domains.len()), visit);
}

fn permutations(values: &[Value]) -> Vec<Vec<Value>> {
    if values.is_empty() {
        return vec![vec![]];
    }
    let mut out = Vec::new();
    for (i, &value) in values.iter().enumerate() {
        let mut rest = values.to_vec();
        rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, value);
            out.push(tail);
        }
    }
    out
}

/// Compiles one cage into an auxiliary operator variable and an extensional
/// constraint, registers both with the CSP, and returns the operator
/// variable's id.
///
/// The constraint's scope is the cage's cells in cage-definition order
/// followed by the operator variable. A known operator is assigned on the
/// auxiliary variable, not merely domain-restricted, so the relation is
/// enumerated over its singleton current domain.
fn add_cage(csp: &mut Csp, grid: &[VariableId], cage: &Cage, n: usize) -> Result<VariableId> {
    if cage.cells.is_empty() {
        return Err(Error::EmptyCage);
    }

    let mut scope = Vec::with_capacity(cage.cells.len() + 1);
    for &(row, col) in &cage.cells {
        scope.push(grid[cell_index(row, col, n)?]);
    }

    let name = format!("Cage({}:{})", cage.target, cage.op);
    let op_domain: Vec<Value> = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Unknown,
    ]
    .map(Value::Op)
    .to_vec();
    let op_var = csp.add_variable(Variable::new(name.clone(), op_domain));
    if cage.op.is_concrete() {
        csp.variable_mut(op_var).assign(Value::Op(cage.op))?;
    }
    scope.push(op_var);

    let mut domains: Vec<Vec<Value>> = scope
        .iter()
        .map(|&v| csp.variable(v).cur_domain())
        .collect();

    let mut tuples = Vec::new();
    let collect = |domains: &[Vec<Value>], tuples: &mut Vec<Vec<Value>>| {
        for_each_product(domains, &mut |tuple| {
            if cage_tuple_check(cage.target, tuple) {
                tuples.push(tuple.to_vec());
            }
        });
    };
    if cage.op.is_concrete() || cage.cells.len() == 1 {
        collect(&domains, &mut tuples);
    } else {
        // Unknown operator over several cells: the relation is the union
        // over the four concrete operators, each substituted into the final
        // tuple position.
        let last = domains.len() - 1;
        for op in Operator::CONCRETE {
            domains[last] = vec![Value::Op(op)];
            collect(&domains, &mut tuples);
        }
    }

    let mut constraint = Constraint::new(name, scope);
    constraint.add_satisfying_tuples(tuples)?;
    csp.add_constraint(constraint)?;
    Ok(op_var)
}

/// A model of a Cagey grid (without cage constraints) built using only
/// binary not-equal constraints for both the row and column constraints.
///
/// Cells are named `Cell(row,col)` and returned in row-major order.
pub fn binary_not_equal_grid(n: usize) -> Result<(Csp, Vec<VariableId>)> {
    if n == 0 {
        return Err(Error::EmptyGrid);
    }
    let mut csp = Csp::new(format!("{n}x{n}-binary-ne-grid"));
    let domain: Vec<Value> = (1..=n as i64).map(Value::Int).collect();

    let mut grid = Vec::with_capacity(n * n);
    for row in 1..=n {
        for col in 1..=n {
            grid.push(csp.add_variable(Variable::new(
                format!("Cell({row},{col})"),
                domain.clone(),
            )));
        }
    }

    let mut ne_tuples = Vec::new();
    for &a in &domain {
        for &b in &domain {
            if a != b {
                ne_tuples.push(vec![a, b]);
            }
        }
    }

    for row in 0..n {
        for i in 0..n {
            for j in (i + 1)..n {
                let mut con = Constraint::new(
                    format!("Row{}({},{})", row + 1, i + 1, j + 1),
                    vec![grid[row * n + i], grid[row * n + j]],
                );
                con.add_satisfying_tuples(ne_tuples.iter().cloned())?;
                csp.add_constraint(con)?;
            }
        }
    }
    for col in 0..n {
        for i in 0..n {
            for j in (i + 1)..n {
                let mut con = Constraint::new(
                    format!("Col{}({},{})", col + 1, i + 1, j + 1),
                    vec![grid[col + i * n], grid[col + j * n]],
                );
                con.add_satisfying_tuples(ne_tuples.iter().cloned())?;
                csp.add_constraint(con)?;
            }
        }
    }
    Ok((csp, grid))
}

/// A model of a Cagey grid (without cage constraints) built using one n-ary
/// all-different constraint per row and per column, each with the full
/// permutation relation.
pub fn nary_all_different_grid(n: usize) -> Result<(Csp, Vec<VariableId>)> {
    if n == 0 {
        return Err(Error::EmptyGrid);
    }
    let mut csp = Csp::new(format!("{n}x{n}-nary-ad-grid"));
    let domain: Vec<Value> = (1..=n as i64).map(Value::Int).collect();

    let mut grid = Vec::with_capacity(n * n);
    for row in 1..=n {
        for col in 1..=n {
            grid.push(csp.add_variable(Variable::new(
                format!("Cell({row},{col})"),
                domain.clone(),
            )));
        }
    }

    let ad_tuples = permutations(&domain);
    for row in 0..n {
        let scope: Vec<_> = (0..n).map(|col| grid[row * n + col]).collect();
        let mut con = Constraint::new(format!("Row{}", row + 1), scope);
        con.add_satisfying_tuples(ad_tuples.iter().cloned())?;
        csp.add_constraint(con)?;
    }
    for col in 0..n {
        let scope: Vec<_> = (0..n).map(|row| grid[row * n + col]).collect();
        let mut con = Constraint::new(format!("Col{}", col + 1), scope);
        con.add_satisfying_tuples(ad_tuples.iter().cloned())?;
        csp.add_constraint(con)?;
    }
    Ok((csp, grid))
}

/// A full Cagey model: binary not-equal grid constraints plus one cage
/// constraint per cage.
///
/// The returned variable list holds the n² grid cells in row-major order
/// followed by one operator variable per cage, in cage list order.
pub fn cagey_model(puzzle: &Puzzle) -> Result<(Csp, Vec<VariableId>)> {
    let n = puzzle.size;
    let (mut csp, mut vars) = binary_not_equal_grid(n)?;
    for cage in &puzzle.cages {
        let op_var = add_cage(&mut csp, &vars[..n * n], cage, n)?;
        vars.push(op_var);
    }
    Ok((csp, vars))
}

/// Reads the assigned grid values back out of a solved model, row by row.
pub fn solution_grid(csp: &Csp, vars: &[VariableId], n: usize) -> Vec<Vec<Option<i64>>> {
    (0..n)
        .map(|row| {
            (0..n)
                .map(|col| {
                    csp.variable(vars[row * n + col])
                        .assigned_value()
                        .and_then(Value::as_int)
                })
                .collect()
        })
        .collect()
}
