use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use cagey::{
    error::Result,
    puzzles::{cagey as cagey_puzzle, colouring, queens},
    solver::{
        csp::Csp,
        engine::{BacktrackingSolver, SearchOutcome, SearchStats},
        heuristics::{
            DegreeHeuristic, MinimumRemainingValuesHeuristic, RandomVariableHeuristic,
            SelectFirstHeuristic, VariableOrdering,
        },
        propagators::{ForwardChecking, Gac, PlainBacktracking, Propagator},
        stats::{render_model_table, render_stats_table},
        value::Value,
        variable::VariableId,
    },
};

#[derive(Parser)]
#[command(name = "cagey", version, about = "Finite-domain CSP solver for Cagey, n-queens, and graph colouring")]
struct Cli {
    /// Propagation algorithm to run after each assignment.
    #[arg(long, value_enum, default_value = "gac", global = true)]
    propagator: PropagatorChoice,

    /// Variable-ordering heuristic.
    #[arg(long, value_enum, default_value = "mrv", global = true)]
    ordering: OrderingChoice,

    /// Also print a summary table of the model's constraints.
    #[arg(long, global = true)]
    show_model: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum PropagatorChoice {
    /// Plain backtracking: check only fully-assigned constraints.
    Bt,
    /// Forward checking.
    Fc,
    /// Generalised arc consistency (GAC-3).
    Gac,
}

impl PropagatorChoice {
    fn build(self) -> Box<dyn Propagator> {
        match self {
            PropagatorChoice::Bt => Box::new(PlainBacktracking),
            PropagatorChoice::Fc => Box::new(ForwardChecking),
            PropagatorChoice::Gac => Box::new(Gac),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderingChoice {
    /// First unassigned variable in declaration order.
    First,
    /// Minimum remaining values.
    Mrv,
    /// Most-constrained variable.
    Degree,
    /// Uniformly random unassigned variable.
    Random,
}

impl OrderingChoice {
    fn build(self) -> Box<dyn VariableOrdering> {
        match self {
            OrderingChoice::First => Box::new(SelectFirstHeuristic),
            OrderingChoice::Mrv => Box::new(MinimumRemainingValuesHeuristic),
            OrderingChoice::Degree => Box::new(DegreeHeuristic),
            OrderingChoice::Random => Box::new(RandomVariableHeuristic),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Solve the n-queens problem.
    Queens {
        /// Board size.
        #[arg(default_value_t = 8)]
        n: usize,
    },
    /// Colour the map of Australia.
    Colour {
        /// Number of colours available.
        #[arg(default_value_t = 3)]
        colours: usize,
    },
    /// Solve a Cagey puzzle.
    Cagey {
        /// Path to a puzzle in JSON form; the built-in 3x3 sample if omitted.
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let solver = BacktrackingSolver::new(cli.propagator.build(), cli.ordering.build());

    match cli.command {
        Command::Queens { n } => {
            let (mut csp, vars) = queens::n_queens(n)?;
            let (outcome, stats) = solve_and_report(&solver, &mut csp, cli.show_model)?;
            if outcome == SearchOutcome::Solved {
                for (col, &var) in vars.iter().enumerate() {
                    if let Some(row) = assigned_int(&csp, var) {
                        println!("Q{}: row {row}", col + 1);
                    }
                }
            }
            report_stats(&stats);
        }
        Command::Colour { colours } => {
            let (mut csp, vars) = colouring::australia(colours)?;
            let (outcome, stats) = solve_and_report(&solver, &mut csp, cli.show_model)?;
            if outcome == SearchOutcome::Solved {
                for &var in &vars {
                    if let Some(colour) = assigned_int(&csp, var) {
                        println!("{}: colour {colour}", csp.variable(var).name());
                    }
                }
            }
            report_stats(&stats);
        }
        Command::Cagey { file } => {
            let puzzle = match file {
                Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
                None => cagey_puzzle::sample_3x3(),
            };
            let (mut csp, vars) = cagey_puzzle::cagey_model(&puzzle)?;
            let (outcome, stats) = solve_and_report(&solver, &mut csp, cli.show_model)?;
            if outcome == SearchOutcome::Solved {
                for row in cagey_puzzle::solution_grid(&csp, &vars, puzzle.size) {
                    let cells: Vec<String> = row
                        .iter()
                        .map(|cell| match cell {
                            Some(v) => v.to_string(),
                            None => "?".to_string(),
                        })
                        .collect();
                    println!("{}", cells.join(" "));
                }
                for &var in &vars[puzzle.size * puzzle.size..] {
                    if let Some(Value::Op(op)) = csp.variable(var).assigned_value() {
                        println!("{}: {op}", csp.variable(var).name());
                    }
                }
            }
            report_stats(&stats);
        }
    }
    Ok(())
}

fn solve_and_report(
    solver: &BacktrackingSolver,
    csp: &mut Csp,
    show_model: bool,
) -> Result<(SearchOutcome, SearchStats)> {
    if show_model {
        println!("{}", render_model_table(csp));
    }
    let (outcome, stats) = solver.solve(csp)?;
    match outcome {
        SearchOutcome::Solved => println!("Solved {}:", csp.name()),
        SearchOutcome::Unsatisfiable => println!("{} has no solution", csp.name()),
    }
    Ok((outcome, stats))
}

fn report_stats(stats: &SearchStats) {
    println!("{}", render_stats_table(stats));
}

fn assigned_int(csp: &Csp, var: VariableId) -> Option<i64> {
    csp.variable(var).assigned_value().and_then(Value::as_int)
}
