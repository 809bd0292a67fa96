use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::engine::propagation::PropagationContext;
use crate::engine::variables::VariableId;

pub(super) fn propagate(
    context: &PropagationContext<'_>,
    assigned: Option<VariableId>,
) -> PropagationStatus {
    let Some(assigned) = assigned else {
        return Ok(());
    };

    for &constraint_id in context.constraints_with(assigned) {
        let constraint = context.constraint(constraint_id);

        if let Some(tuple) = constraint.assigned_tuple(context.variables()) {
            if !constraint.check_tuple(&tuple) {
                return Err(Inconsistency::Violated(constraint_id));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::basic_types::Inconsistency;
    use crate::engine::test_helper::TestProblem;
    use crate::propagators::propagate_bt;

    #[test]
    fn nothing_happens_before_the_first_decision() {
        let mut test = TestProblem::default();
        let x = test.new_variable(1, 2);
        let y = test.new_variable(1, 2);
        let _ = test.new_constraint(&[x, y], &[&[1, 2], &[2, 1]]);

        let result = propagate_bt(&mut test.problem, None);

        assert!(result.is_consistent());
        assert!(result.prunings.is_empty());
    }

    #[test]
    fn violated_constraint_is_detected() {
        let mut test = TestProblem::default();
        let x = test.new_variable(1, 2);
        let y = test.new_variable(1, 2);
        let not_equal = test.new_constraint(&[x, y], &[&[1, 2], &[2, 1]]);

        test.assign(x, 1);
        let result = propagate_bt(&mut test.problem, Some(x));
        assert!(result.is_consistent());

        test.assign(y, 1);
        let result = propagate_bt(&mut test.problem, Some(y));
        assert_eq!(result.status, Err(Inconsistency::Violated(not_equal)));
        assert!(result.prunings.is_empty());
    }
}
