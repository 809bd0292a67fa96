#![cfg(test)]

use proptest::prelude::*;

use super::grid_values;
use super::SAMPLE_BOARD;
use super::SAMPLE_SOLUTION;
use crate::constraints::cagey_csp_model;
use crate::constraints::nary_ad_grid;
use crate::constraints::operation_satisfies;
use crate::constraints::Cage;
use crate::constraints::CageOperation;
use crate::constraints::Cell;
use crate::constraints::GridEncoding;
use crate::constraints::Operation;
use crate::engine::termination::Indefinite;
use crate::engine::variables::Value;
use crate::engine::variables::VariableId;
use crate::engine::Problem;
use crate::engine::Solver;
use crate::engine::SolverOptions;
use crate::propagators::propagate_gac;
use crate::propagators::Propagator;
use crate::puzzle::Board;

fn domain(problem: &Problem, variable: VariableId) -> Vec<Value> {
    problem.variable(variable).current_domain().collect()
}

fn assert_initial_domains(problem: &Problem) {
    for variable in problem.variables() {
        assert_eq!(
            domain(problem, variable),
            problem.variable(variable).initial_domain(),
            "{} was not restored",
            problem.variable(variable)
        );
        assert!(!problem.variable(variable).is_assigned());
    }
}

fn assert_arc_consistent(problem: &Problem) {
    for constraint in problem.constraints() {
        for &variable in problem.constraint(constraint).scope() {
            for value in problem.variable(variable).current_domain() {
                assert!(
                    problem.has_support(constraint, variable, value),
                    "{value} of {} has no support in {}",
                    problem.variable(variable),
                    problem.constraint(constraint).name()
                );
            }
        }
    }
}

fn sample_model(encoding: GridEncoding) -> (Problem, Vec<VariableId>) {
    let board = SAMPLE_BOARD.parse::<Board>().expect("valid board");
    cagey_csp_model(&board, encoding).expect("valid model")
}

#[test]
fn gac_keeps_the_solution_of_the_sample_board() {
    for encoding in [GridEncoding::Nary, GridEncoding::Binary] {
        let (mut problem, variables) = sample_model(encoding);

        let result = propagate_gac(&mut problem, None);

        assert!(result.is_consistent());
        for (&cell, &value) in variables.iter().zip(SAMPLE_SOLUTION.iter()) {
            assert!(problem.variable(cell).contains(Value::from(value)));
        }
        assert_arc_consistent(&problem);

        problem.restore_all(&result.prunings);
        assert_initial_domains(&problem);
    }
}

#[test]
fn gac_restricts_a_two_cell_sum_cage() {
    let board = Board::new(
        3,
        [Cage::new(
            3,
            [Cell::new(1, 1), Cell::new(2, 1)],
            Operation::Add,
        )],
    );
    let (mut problem, variables) =
        cagey_csp_model(&board, GridEncoding::Nary).expect("valid model");

    let result = propagate_gac(&mut problem, None);

    assert!(result.is_consistent());
    let ints = |values: &[i32]| values.iter().copied().map(Value::from).collect::<Vec<_>>();
    assert_eq!(domain(&problem, variables[0]), ints(&[1, 2]));
    assert_eq!(domain(&problem, variables[3]), ints(&[1, 2]));
    assert_eq!(domain(&problem, variables[6]), ints(&[3]));
    assert_eq!(
        domain(&problem, variables[9]),
        vec![Value::from(Operation::Add)]
    );
}

#[test]
fn single_cell_cage_with_unknown_operation_allows_every_operation() {
    let board = Board::new(3, [Cage::new(2, [Cell::new(1, 1)], CageOperation::Unknown)]);
    let (problem, variables) = cagey_csp_model(&board, GridEncoding::Nary).expect("valid model");

    let cage = problem.constraints_with(variables[9])[0];
    let tuples = problem.constraint(cage).tuples();

    assert_eq!(tuples.len(), 5);
    for (tuple, operation) in tuples.iter().zip(Operation::all()) {
        assert_eq!(tuple, &[Value::from(2), Value::from(operation)][..]);
    }
}

#[test]
fn every_propagator_leaves_restorable_prunings() {
    for propagator in [
        Propagator::Backtracking,
        Propagator::ForwardChecking,
        Propagator::Gac,
    ] {
        let (mut problem, variables) = sample_model(GridEncoding::Binary);

        let mut prunings = problem.assign(variables[0], Value::from(1));
        let result = propagator.propagate(&mut problem, Some(variables[0]));
        prunings.extend(result.prunings);

        problem.restore_all(&prunings);
        problem.unassign(variables[0]);

        assert_initial_domains(&problem);
    }
}

/// The Latin squares of size three which satisfy `cage`, together with the number of operations
/// under which they do.
fn reference_solutions(cage: &Cage) -> Vec<(Vec<i32>, usize)> {
    let (mut grid, cells) = nary_ad_grid(3).expect("valid size");
    let mut squares = Vec::new();
    let _ = Solver::new(SolverOptions::default()).enumerate(
        &mut grid,
        &mut Indefinite,
        None,
        |solution| squares.push(grid_values(solution, &cells)),
    );

    squares
        .into_iter()
        .filter_map(|square| {
            let values = cage
                .cells
                .iter()
                .map(|cell| square[cell.index(3).expect("cell in the grid")])
                .collect::<Vec<_>>();
            let operations = cage
                .operation
                .candidates()
                .iter()
                .filter(|&operation| operation_satisfies(&values, operation, cage.target))
                .count();
            (operations > 0).then_some((square, operations))
        })
        .collect()
}

fn cage_strategy() -> impl Strategy<Value = Cage> {
    let cells = prop::sample::subsequence(
        (1..=3)
            .flat_map(|row| (1..=3).map(move |col| Cell::new(row, col)))
            .collect::<Vec<_>>(),
        1..=4,
    );
    let operation = prop::sample::select(vec![
        CageOperation::Known(Operation::Add),
        CageOperation::Known(Operation::Subtract),
        CageOperation::Known(Operation::Multiply),
        CageOperation::Known(Operation::Divide),
        CageOperation::Known(Operation::Modulo),
        CageOperation::Unknown,
    ]);

    (-2..=12_i32, cells, operation)
        .prop_map(|(target, cells, operation)| Cage::new(target, cells, operation))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn gac_never_prunes_a_solution(cage in cage_strategy()) {
        let expected = reference_solutions(&cage);
        let board = Board::new(3, [cage]);
        let (mut problem, variables) =
            cagey_csp_model(&board, GridEncoding::Nary).expect("valid model");

        let result = propagate_gac(&mut problem, None);

        if !expected.is_empty() {
            prop_assert!(result.is_consistent());
        }
        for (square, _) in &expected {
            for (&cell, &value) in variables.iter().zip(square) {
                prop_assert!(problem.variable(cell).contains(Value::from(value)));
            }
        }

        problem.restore_all(&result.prunings);
        assert_initial_domains(&problem);
    }

    #[test]
    fn search_finds_exactly_the_reference_solutions(
        cage in cage_strategy(),
        propagator in prop::sample::select(vec![
            Propagator::Backtracking,
            Propagator::ForwardChecking,
            Propagator::Gac,
        ]),
    ) {
        let expected = reference_solutions(&cage);
        let board = Board::new(3, [cage]);
        let (mut problem, variables) =
            cagey_csp_model(&board, GridEncoding::Nary).expect("valid model");

        let mut found = Vec::new();
        let result = Solver::new(SolverOptions {
            propagator,
            ..SolverOptions::default()
        })
        .enumerate(&mut problem, &mut Indefinite, None, |solution| {
            found.push(grid_values(solution, &variables[..9]))
        });

        let expected_count = expected.iter().map(|(_, operations)| operations).sum::<usize>();
        prop_assert_eq!(result.num_solutions(), expected_count);

        let mut expected = expected.into_iter().map(|(square, _)| square).collect::<Vec<_>>();
        expected.sort();
        found.sort();
        found.dedup();
        prop_assert_eq!(found, expected);
    }
}
