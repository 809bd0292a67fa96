use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use log::info;
use log::LevelFilter;

use crate::branching::VariableOrdering;
use crate::constraints::cagey_csp_model;
use crate::constraints::GridEncoding;
use crate::engine::termination::Indefinite;
use crate::engine::termination::TerminationCondition;
use crate::engine::termination::TimeBudget;
use crate::engine::variables::VariableId;
use crate::engine::Problem;
use crate::engine::Solver;
use crate::engine::SolverOptions;
use crate::print_cagey_assert_warning_message;
use crate::propagators::Propagator;
use crate::puzzle::render_grid;
use crate::puzzle::Board;
use crate::results::EnumerationResult;
use crate::results::SatisfactionResult;
use crate::results::Solution;
use crate::statistics::configure;

#[derive(Debug, clap::Parser)]
#[command(about = "Solve Cagey puzzles by constraint propagation and backtracking search.")]
pub struct Cli {
    /// The file containing the board, e.g. `(3, [(3, [(1, 1), (2, 1)], "+"), ...])`.
    pub instance: PathBuf,

    /// How the rows and columns of the grid are constrained.
    #[arg(short = 'g', long = "grid", value_enum, default_value_t)]
    pub grid_encoding: GridEncoding,

    /// The propagation to run after every decision.
    #[arg(short = 'p', long = "propagator", value_enum, default_value_t)]
    pub propagator: Propagator,

    /// The heuristic which selects the next variable to branch on.
    #[arg(short = 'o', long = "ordering", value_enum, default_value_t)]
    pub variable_ordering: VariableOrdering,

    /// Find all solutions instead of the first one.
    #[arg(short = 'a', long = "all-solutions")]
    pub all_solutions: bool,

    /// Stop after this many solutions. Implies searching for more than one solution.
    #[arg(short = 'n', long = "num-solutions")]
    pub solution_limit: Option<usize>,

    /// The number of seconds the search is allowed to run.
    #[arg(short = 't', long = "time-out")]
    pub time_out: Option<u64>,

    /// Log statistics of the search after it finishes.
    #[arg(short = 's', long = "statistics")]
    pub log_statistics: bool,

    /// Log the progress of building the model and searching.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

pub fn run() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;

    let args = Cli::parse();

    configure_logging(args.verbose, args.log_statistics);
    print_cagey_assert_warning_message!();

    let source = std::fs::read_to_string(&args.instance)
        .with_context(|| format!("Error reading {}", args.instance.display()))?;

    let board = source
        .parse::<Board>()
        .with_context(|| format!("Failed to parse a board from {}", args.instance.display()))?;

    let (mut problem, variables) = cagey_csp_model(&board, args.grid_encoding)
        .with_context(|| format!("Invalid board in {}", args.instance.display()))?;

    let grid = &variables[..board.size * board.size];
    let mut solver = Solver::new(SolverOptions {
        propagator: args.propagator,
        variable_ordering: args.variable_ordering,
    });

    let limit = if args.all_solutions {
        args.solution_limit
    } else {
        args.solution_limit.or(Some(1))
    };

    match args.time_out {
        Some(seconds) => solve(
            &mut solver,
            &mut problem,
            grid,
            board.size,
            limit,
            &mut TimeBudget::starting_now(Duration::from_secs(seconds)),
        ),
        None => solve(
            &mut solver,
            &mut problem,
            grid,
            board.size,
            limit,
            &mut Indefinite,
        ),
    }

    solver.log_statistics();

    Ok(())
}

fn solve(
    solver: &mut Solver,
    problem: &mut Problem,
    grid: &[VariableId],
    size: usize,
    limit: Option<usize>,
    termination: &mut impl TerminationCondition,
) {
    if limit == Some(1) {
        match solver.satisfy(problem, termination) {
            SatisfactionResult::Satisfiable(solution) => print_solution(&solution, grid, size),
            SatisfactionResult::Unsatisfiable => println!("UNSATISFIABLE"),
            SatisfactionResult::Unknown => println!("UNKNOWN"),
        }
        return;
    }

    let result = solver.enumerate(problem, termination, limit, |solution| {
        print_solution(solution, grid, size)
    });

    match result {
        EnumerationResult::Complete { num_solutions: 0 } => println!("UNSATISFIABLE"),
        EnumerationResult::Complete { .. } => println!("=========="),
        EnumerationResult::Unknown { num_solutions: 0 } => println!("UNKNOWN"),
        EnumerationResult::LimitReached { .. } | EnumerationResult::Unknown { .. } => {}
    }
}

fn print_solution(solution: &Solution, grid: &[VariableId], size: usize) {
    let values = grid
        .iter()
        .filter_map(|&cell| solution.get_integer_value(cell))
        .collect::<Vec<_>>();

    println!("{}", render_grid(&values, size));
    println!("----------");
}

fn configure_logging(verbose: bool, log_statistics: bool) {
    configure(log_statistics, "%%");

    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
}
