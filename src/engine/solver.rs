use std::time::Instant;

use log::debug;
use log::warn;

use super::termination::TerminationCondition;
use super::Problem;
use super::Pruning;
use crate::basic_types::Trail;
use crate::branching::VariableOrdering;
use crate::cagey_assert_simple;
use crate::engine::variables::VariableId;
use crate::propagators::Propagator;
use crate::results::EnumerationResult;
use crate::results::SatisfactionResult;
use crate::results::Solution;
use crate::statistics::log_statistic;
use crate::statistics::should_log_statistics;

/// Options which determine how the [`Solver`] searches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverOptions {
    /// The propagation run after every decision.
    pub propagator: Propagator,
    /// The heuristic which selects the variable to branch on.
    pub variable_ordering: VariableOrdering,
}

/// A depth-first backtracking search over the values of the variables of a [`Problem`].
///
/// Every decision opens a new level on the trail of prunings; the prunings caused by assigning
/// the variable and by the subsequent propagation are recorded on that level. Leaving a decision
/// restores them most recent first. Once the search returns, every domain is back in the state
/// it was in before the search.
#[derive(Debug)]
pub struct Solver {
    options: SolverOptions,
    trail: Trail<Pruning>,
    counters: Counters,
}

/// Whether the search should continue after exploring a subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SearchFlow {
    Continue,
    SolutionLimitReached,
    Timeout,
}

impl Solver {
    pub fn new(options: SolverOptions) -> Solver {
        Solver {
            options,
            trail: Trail::default(),
            counters: Counters::default(),
        }
    }

    pub fn options(&self) -> SolverOptions {
        self.options
    }

    /// Search for a single solution.
    pub fn satisfy(
        &mut self,
        problem: &mut Problem,
        termination: &mut impl TerminationCondition,
    ) -> SatisfactionResult {
        let mut solution = None;
        let flow = self.run(problem, termination, &mut |found: &Solution| {
            solution = Some(found.clone());
            false
        });

        match (solution, flow) {
            (Some(solution), _) => SatisfactionResult::Satisfiable(solution),
            (None, SearchFlow::Timeout) => SatisfactionResult::Unknown,
            (None, _) => SatisfactionResult::Unsatisfiable,
        }
    }

    /// Search for every solution, or for at most `limit` solutions. `on_solution` is called for
    /// every solution in the order in which they are found.
    pub fn enumerate(
        &mut self,
        problem: &mut Problem,
        termination: &mut impl TerminationCondition,
        limit: Option<usize>,
        mut on_solution: impl FnMut(&Solution),
    ) -> EnumerationResult {
        let mut num_solutions = 0;
        if limit == Some(0) {
            return EnumerationResult::LimitReached { num_solutions };
        }

        let flow = self.run(problem, termination, &mut |solution: &Solution| {
            num_solutions += 1;
            on_solution(solution);
            limit.map_or(true, |limit| num_solutions < limit)
        });

        match flow {
            SearchFlow::Continue => EnumerationResult::Complete { num_solutions },
            SearchFlow::SolutionLimitReached => EnumerationResult::LimitReached { num_solutions },
            SearchFlow::Timeout => EnumerationResult::Unknown { num_solutions },
        }
    }

    pub fn log_statistics(&self) {
        if should_log_statistics() {
            self.counters.log_statistics()
        }
    }

    /// Propagate at the root, search, and restore the problem afterwards. `on_solution` returns
    /// whether the search should continue.
    fn run(
        &mut self,
        problem: &mut Problem,
        termination: &mut impl TerminationCondition,
        on_solution: &mut dyn FnMut(&Solution) -> bool,
    ) -> SearchFlow {
        if problem.num_variables() == 0 {
            warn!("The problem '{}' does not contain any variables", problem.name());
        }
        cagey_assert_simple!(
            problem.unassigned_variables().count() == problem.num_variables(),
            "the search has to start without assigned variables"
        );

        let started_at = Instant::now();
        debug!(
            "searching {} with {} and {}",
            problem.name(),
            self.options.propagator,
            self.options.variable_ordering
        );

        self.trail.increase_decision_level();
        let flow = if self.propagate(problem, None) {
            self.search(problem, termination, on_solution)
        } else {
            self.counters.num_dead_ends += 1;
            SearchFlow::Continue
        };
        self.backtrack(problem);

        self.counters.time_spent_in_solver += started_at.elapsed().as_millis() as u64;

        flow
    }

    fn search(
        &mut self,
        problem: &mut Problem,
        termination: &mut impl TerminationCondition,
        on_solution: &mut dyn FnMut(&Solution) -> bool,
    ) -> SearchFlow {
        if termination.should_stop() {
            return SearchFlow::Timeout;
        }

        let Some(variable) = self.options.variable_ordering.select(problem) else {
            return self.report_solution(problem, on_solution);
        };

        let values = problem.variable(variable).current_domain().collect::<Vec<_>>();
        for value in values {
            self.counters.num_decisions += 1;
            self.trail.increase_decision_level();

            let prunings = problem.assign(variable, value);
            self.trail.extend(prunings);

            let flow = if self.propagate(problem, Some(variable)) {
                self.search(problem, termination, on_solution)
            } else {
                self.counters.num_dead_ends += 1;
                SearchFlow::Continue
            };

            self.backtrack(problem);
            problem.unassign(variable);

            if flow != SearchFlow::Continue {
                return flow;
            }
        }

        SearchFlow::Continue
    }

    /// Run the propagator and record its prunings on the current decision level. Returns whether
    /// the branch is still consistent.
    fn propagate(&mut self, problem: &mut Problem, assigned: Option<VariableId>) -> bool {
        self.counters.num_propagator_calls += 1;

        let result = self.options.propagator.propagate(problem, assigned);
        self.counters.num_prunings += result.prunings.len() as u64;
        let is_consistent = result.is_consistent();
        self.trail.extend(result.prunings);

        is_consistent
    }

    /// Undo every pruning of the current decision level.
    fn backtrack(&mut self, problem: &mut Problem) {
        let level = self.trail.get_decision_level() - 1;
        for pruning in self.trail.synchronise(level) {
            problem.restore(pruning);
        }
    }

    fn report_solution(
        &mut self,
        problem: &Problem,
        on_solution: &mut dyn FnMut(&Solution) -> bool,
    ) -> SearchFlow {
        // Forward checking skips constraints without unassigned variables, so a full assignment
        // is verified before it is reported.
        let solution = match Solution::from_assignment(problem) {
            Some(solution) if problem.is_solved() => solution,
            _ => {
                self.counters.num_dead_ends += 1;
                return SearchFlow::Continue;
            }
        };

        self.counters.num_solutions += 1;
        if on_solution(&solution) {
            SearchFlow::Continue
        } else {
            SearchFlow::SolutionLimitReached
        }
    }
}

/// Structure responsible for storing several statistics of the search.
#[derive(Default, Debug, Copy, Clone)]
pub(crate) struct Counters {
    pub(crate) num_decisions: u64,
    pub(crate) num_dead_ends: u64,
    pub(crate) num_propagator_calls: u64,
    pub(crate) num_prunings: u64,
    pub(crate) num_solutions: u64,
    time_spent_in_solver: u64,
}

impl Counters {
    fn log_statistics(&self) {
        log_statistic("numberOfDecisions", self.num_decisions);
        log_statistic("numberOfDeadEnds", self.num_dead_ends);
        log_statistic("numberOfPropagatorCalls", self.num_propagator_calls);
        log_statistic("numberOfPrunings", self.num_prunings);
        log_statistic("numberOfSolutions", self.num_solutions);
        log_statistic("timeSpentInSolverInMilliseconds", self.time_spent_in_solver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::termination::Indefinite;
    use crate::engine::termination::TimeBudget;
    use crate::engine::test_helper::TestProblem;
    use crate::engine::variables::Value;

    fn all_options() -> Vec<SolverOptions> {
        let mut options = Vec::new();
        for propagator in [
            Propagator::Backtracking,
            Propagator::ForwardChecking,
            Propagator::Gac,
        ] {
            for variable_ordering in [
                VariableOrdering::MinimumRemainingValues,
                VariableOrdering::Degree,
                VariableOrdering::InputOrder,
            ] {
                options.push(SolverOptions {
                    propagator,
                    variable_ordering,
                });
            }
        }
        options
    }

    /// x < y < z over 1..=3 has the single solution (1, 2, 3).
    fn chain() -> (TestProblem, [VariableId; 3]) {
        let mut test = TestProblem::default();
        let x = test.new_variable(1, 3);
        let y = test.new_variable(1, 3);
        let z = test.new_variable(1, 3);
        let _ = test.new_constraint(&[x, y], &[&[1, 2], &[1, 3], &[2, 3]]);
        let _ = test.new_constraint(&[y, z], &[&[1, 2], &[1, 3], &[2, 3]]);
        (test, [x, y, z])
    }

    #[test]
    fn unique_solution_is_found_with_every_option() {
        for options in all_options() {
            let (mut test, [x, y, z]) = chain();

            let result = Solver::new(options).satisfy(&mut test.problem, &mut Indefinite);

            let solution = match result {
                SatisfactionResult::Satisfiable(solution) => solution,
                result => panic!("expected a solution with {options:?}, got {result:?}"),
            };
            assert_eq!(solution.get_integer_value(x), Some(1));
            assert_eq!(solution.get_integer_value(y), Some(2));
            assert_eq!(solution.get_integer_value(z), Some(3));
        }
    }

    #[test]
    fn domains_are_restored_after_search() {
        for options in all_options() {
            let (mut test, variables) = chain();

            let _ = Solver::new(options).satisfy(&mut test.problem, &mut Indefinite);

            for variable in variables {
                test.assert_domain(variable, &[1, 2, 3]);
                assert!(!test.problem.variable(variable).is_assigned());
            }
        }
    }

    #[test]
    fn unsatisfiable_problem_is_detected() {
        for options in all_options() {
            let mut test = TestProblem::default();
            let x = test.new_variable(1, 2);
            let y = test.new_variable(1, 2);
            let z = test.new_variable(1, 2);
            let not_equal: &[&[i32]] = &[&[1, 2], &[2, 1]];
            let _ = test.new_constraint(&[x, y], not_equal);
            let _ = test.new_constraint(&[y, z], not_equal);
            let _ = test.new_constraint(&[x, z], not_equal);

            let result = Solver::new(options).satisfy(&mut test.problem, &mut Indefinite);

            assert_eq!(result, SatisfactionResult::Unsatisfiable, "{options:?}");
        }
    }

    #[test]
    fn all_solutions_are_enumerated() {
        for options in all_options() {
            let mut test = TestProblem::default();
            let x = test.new_variable(1, 3);
            let y = test.new_variable(1, 3);
            let _ = test.new_constraint(&[x, y], &[&[1, 2], &[2, 1], &[2, 3], &[3, 2]]);

            let mut solutions = Vec::new();
            let result = Solver::new(options).enumerate(
                &mut test.problem,
                &mut Indefinite,
                None,
                |solution| {
                    solutions.push((
                        solution.get_integer_value(x).expect("integer variable"),
                        solution.get_integer_value(y).expect("integer variable"),
                    ))
                },
            );

            assert_eq!(result, EnumerationResult::Complete { num_solutions: 4 });
            solutions.sort();
            assert_eq!(solutions, vec![(1, 2), (2, 1), (2, 3), (3, 2)]);
        }
    }

    #[test]
    fn enumeration_stops_at_the_limit() {
        let mut test = TestProblem::default();
        let _ = test.new_variable(1, 3);
        let _ = test.new_variable(1, 3);

        let mut count = 0;
        let result = Solver::new(SolverOptions::default()).enumerate(
            &mut test.problem,
            &mut Indefinite,
            Some(4),
            |_| count += 1,
        );

        assert_eq!(result, EnumerationResult::LimitReached { num_solutions: 4 });
        assert_eq!(count, 4);
    }

    #[test]
    fn exhausted_time_budget_is_unknown() {
        let (mut test, _) = chain();

        let result = Solver::new(SolverOptions::default()).satisfy(
            &mut test.problem,
            &mut TimeBudget::starting_now(std::time::Duration::ZERO),
        );

        assert_eq!(result, SatisfactionResult::Unknown);
    }

    #[test]
    fn operation_values_are_reported() {
        let mut test = TestProblem::default();
        let x = test.new_variable(2, 2);
        let operation = test
            .problem
            .add_variable("op", crate::constraints::Operation::all())
            .expect("unique name");

        let result =
            Solver::new(SolverOptions::default()).satisfy(&mut test.problem, &mut Indefinite);

        let solution = match result {
            SatisfactionResult::Satisfiable(solution) => solution,
            result => panic!("expected a solution, got {result:?}"),
        };
        assert_eq!(solution.get_value(x), Value::Int(2));
        assert_eq!(
            solution.get_value(operation),
            Value::Operation(crate::constraints::Operation::Add)
        );
        assert_eq!(solution.get_integer_value(operation), None);
    }
}
