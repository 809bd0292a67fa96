use crate::basic_types::PropagationStatus;
use crate::engine::propagation::PropagationContext;
use crate::engine::variables::Value;
use crate::engine::variables::VariableId;

pub(super) fn propagate(
    context: &mut PropagationContext<'_>,
    assigned: Option<VariableId>,
) -> PropagationStatus {
    let Some(assigned) = assigned else {
        return Ok(());
    };

    for &constraint_id in context.constraints_with(assigned) {
        let constraint = context.constraint(constraint_id);

        let unassigned = constraint
            .unassigned_variables(context.variables())
            .collect::<Vec<_>>();
        let [target] = unassigned[..] else {
            continue;
        };
        let Some(position) = constraint.position_of(target) else {
            continue;
        };

        // The position of the target is seeded with any value; it is overwritten below.
        let Some(mut tuple) = constraint
            .scope()
            .iter()
            .map(|&variable| {
                if variable == target {
                    context.variable(variable).current_domain().next()
                } else {
                    context.variable(variable).assigned_value()
                }
            })
            .collect::<Option<Vec<Value>>>()
        else {
            continue;
        };

        let values = context.variable(target).current_domain().collect::<Vec<_>>();
        for value in values {
            tuple[position] = value;
            if !constraint.check_tuple(&tuple) {
                context.remove(target, value)?;
            }
        }
    }

    Ok(())
}
