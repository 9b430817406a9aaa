use prettytable::{Cell, Row, Table};

use crate::solver::{csp::Csp, engine::SearchStats};

/// Renders the search counters as a table for the CLI.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));
    table.add_row(Row::new(vec![
        Cell::new("Decisions"),
        Cell::new(&stats.decisions.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Backtracks"),
        Cell::new(&stats.backtracks.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Values pruned"),
        Cell::new(&stats.values_pruned.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Propagator calls"),
        Cell::new(&stats.propagator_calls.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Time (ms)"),
        Cell::new(&format!("{:.2}", stats.elapsed.as_secs_f64() * 1000.0)),
    ]));
    table.to_string()
}

/// Renders a summary of a model's constraints: name, arity, and relation
/// size.
pub fn render_model_table(csp: &Csp) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Constraint"),
        Cell::new("Arity"),
        Cell::new("Tuples"),
    ]));
    for cid in csp.constraint_ids() {
        let constraint = csp.constraint(cid);
        table.add_row(Row::new(vec![
            Cell::new(constraint.name()),
            Cell::new(&constraint.arity().to_string()),
            Cell::new(&constraint.num_tuples().to_string()),
        ]));
    }
    table.to_string()
}
