use crate::engine::variables::VariableId;
use crate::engine::Problem;

/// Selects the unassigned variable with the smallest current domain. Ties are broken in favour of
/// the variable which was created first.
pub fn minimum_remaining_values(problem: &Problem) -> Option<VariableId> {
    problem
        .unassigned_variables()
        .min_by_key(|&variable| problem.variable(variable).domain_size())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_helper::TestProblem;
    use crate::engine::variables::Value;

    #[test]
    fn smallest_domain_is_selected() {
        let mut test = TestProblem::default();
        let x = test.new_variable(0, 10);
        let y = test.new_variable(5, 7);
        let z = test.new_sparse_variable(&[1, 4, 9]);

        assert_eq!(minimum_remaining_values(&test.problem), Some(y));

        for value in 0..=8 {
            let _ = test.problem.prune(x, Value::Int(value));
        }

        assert_eq!(minimum_remaining_values(&test.problem), Some(x));
        assert!(test.contains(z, 4));
    }

    #[test]
    fn assigned_variables_are_not_selected() {
        let mut test = TestProblem::default();
        let x = test.new_variable(1, 1);
        let y = test.new_variable(1, 2);

        test.assign(x, 1);
        assert_eq!(minimum_remaining_values(&test.problem), Some(y));

        test.assign(y, 2);
        assert_eq!(minimum_remaining_values(&test.problem), None);
    }
}
