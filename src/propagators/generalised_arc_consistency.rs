use std::collections::VecDeque;

use log::trace;

use crate::basic_types::HashSet;
use crate::basic_types::PropagationStatus;
use crate::cagey_assert_extreme;
use crate::engine::propagation::PropagationContext;
use crate::engine::variables::VariableId;
use crate::engine::ConstraintId;

/// A FIFO queue of constraints in which every constraint is present at most once.
#[derive(Debug, Default)]
struct ConstraintQueue {
    queue: VecDeque<ConstraintId>,
    present_constraints: HashSet<ConstraintId>,
}

impl ConstraintQueue {
    fn enqueue(&mut self, constraint: ConstraintId) {
        if self.present_constraints.insert(constraint) {
            self.queue.push_back(constraint);
        }
    }

    fn pop(&mut self) -> Option<ConstraintId> {
        let constraint = self.queue.pop_front()?;
        let _ = self.present_constraints.remove(&constraint);
        Some(constraint)
    }
}

pub(super) fn propagate(
    context: &mut PropagationContext<'_>,
    assigned: Option<VariableId>,
) -> PropagationStatus {
    let mut queue = ConstraintQueue::default();
    match assigned {
        Some(variable) => context
            .constraints_with(variable)
            .iter()
            .for_each(|&constraint| queue.enqueue(constraint)),
        None => context
            .constraint_ids()
            .for_each(|constraint| queue.enqueue(constraint)),
    }

    let mut revised = HashSet::<ConstraintId>::default();
    while let Some(constraint_id) = queue.pop() {
        let _ = revised.insert(constraint_id);
        let constraint = context.constraint(constraint_id);

        for (position, &variable) in constraint.scope().iter().enumerate() {
            let values = context.variable(variable).current_domain().collect::<Vec<_>>();

            let mut is_pruned = false;
            for value in values {
                if !context.has_support(constraint_id, position, value) {
                    context.remove(variable, value)?;
                    is_pruned = true;
                }
            }

            if is_pruned {
                trace!(
                    "revising {} pruned {}",
                    constraint.name(),
                    context.variable(variable).name()
                );

                context
                    .constraints_with(variable)
                    .iter()
                    .filter(|&&other| other != constraint_id)
                    .for_each(|&other| queue.enqueue(other));
            }
        }
    }

    cagey_assert_extreme!(
        is_arc_consistent(context, &revised),
        "the fixed point of generalised arc consistency has an unsupported value"
    );

    Ok(())
}

/// Whether every value in the scope of the `revised` constraints is supported.
fn is_arc_consistent(context: &PropagationContext<'_>, revised: &HashSet<ConstraintId>) -> bool {
    revised.iter().all(|&constraint_id| {
        let constraint = context.constraint(constraint_id);
        constraint
            .scope()
            .iter()
            .enumerate()
            .all(|(position, &variable)| {
                context
                    .variable(variable)
                    .current_domain()
                    .all(|value| context.has_support(constraint_id, position, value))
            })
    })
}

#[cfg(test)]
mod tests {
    use crate::basic_types::Inconsistency;
    use crate::engine::test_helper::TestProblem;
    use crate::engine::Pruning;
    use crate::propagators::propagate_gac;

    #[test]
    fn initial_propagation_revises_every_constraint() {
        let mut test = TestProblem::default();
        let x = test.new_variable(1, 3);
        let y = test.new_variable(1, 3);
        // x < y
        let _ = test.new_constraint(&[x, y], &[&[1, 2], &[1, 3], &[2, 3]]);

        let result = propagate_gac(&mut test.problem, None);

        assert!(result.is_consistent());
        assert_eq!(result.prunings, vec![Pruning::new(x, 3), Pruning::new(y, 1)]);
        test.assert_domain(x, &[1, 2]);
        test.assert_domain(y, &[2, 3]);
    }

    #[test]
    fn prunings_are_propagated_through_other_constraints() {
        let mut test = TestProblem::default();
        let x = test.new_variable(1, 3);
        let y = test.new_variable(1, 3);
        let z = test.new_variable(1, 3);
        // x < y and y < z
        let _ = test.new_constraint(&[x, y], &[&[1, 2], &[1, 3], &[2, 3]]);
        let _ = test.new_constraint(&[y, z], &[&[1, 2], &[1, 3], &[2, 3]]);

        let result = propagate_gac(&mut test.problem, None);

        assert!(result.is_consistent());
        test.assert_domain(x, &[1]);
        test.assert_domain(y, &[2]);
        test.assert_domain(z, &[3]);
    }

    #[test]
    fn only_constraints_on_the_assigned_variable_are_queued_first() {
        let mut test = TestProblem::default();
        let x = test.new_variable(1, 2);
        let y = test.new_variable(1, 2);
        let z = test.new_variable(1, 2);
        let w = test.new_variable(1, 2);
        let _ = test.new_constraint(&[x, y], &[&[1, 2], &[2, 1]]);
        // Not arc consistent, but unrelated to x.
        let _ = test.new_constraint(&[z, w], &[&[1, 1]]);

        test.assign(x, 1);
        let result = propagate_gac(&mut test.problem, Some(x));

        assert!(result.is_consistent());
        assert_eq!(result.prunings, vec![Pruning::new(y, 1)]);
        test.assert_domain(z, &[1, 2]);
    }

    #[test]
    fn wiped_out_domain_fails() {
        let mut test = TestProblem::default();
        let x = test.new_variable(1, 2);
        let y = test.new_variable(1, 2);
        let _ = test.new_constraint(&[x, y], &[&[1, 3]]);

        let result = propagate_gac(&mut test.problem, None);

        assert_eq!(result.status, Err(Inconsistency::EmptyDomain(x)));
        assert_eq!(
            result.prunings,
            vec![Pruning::new(x, 1), Pruning::new(x, 2)]
        );
    }
}
