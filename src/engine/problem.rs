use std::rc::Rc;

use crate::basic_types::KeyedVec;
use crate::basic_types::ModelError;
use crate::cagey_assert_moderate;
use crate::cagey_assert_simple;
use crate::engine::constraint::Constraint;
use crate::engine::constraint::ConstraintId;
use crate::engine::propagation::PropagationContext;
use crate::engine::propagation::Pruning;
use crate::engine::tuple_table::TupleTable;
use crate::engine::variables::Value;
use crate::engine::variables::Variable;
use crate::engine::variables::VariableId;
use crate::engine::VariableNames;

/// A constraint satisfaction problem: the variables, the constraints over them and, for every
/// variable, the constraints in whose scope it occurs.
///
/// The problem is populated before search starts. During search, domains shrink through
/// [`Problem::prune`] (usually on behalf of a propagator) and grow back through
/// [`Problem::restore`]; the caller owns the record of what has to be restored.
#[derive(Clone, Debug, Default)]
pub struct Problem {
    name: String,
    variables: KeyedVec<VariableId, Variable>,
    constraints: KeyedVec<ConstraintId, Constraint>,
    constraints_by_variable: KeyedVec<VariableId, Vec<ConstraintId>>,
    variable_names: VariableNames,
}

impl Problem {
    pub fn new(name: impl Into<String>) -> Problem {
        Problem {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create a new variable with the given initial domain. The name has to be unique within the
    /// problem.
    pub fn add_variable(
        &mut self,
        name: impl Into<String>,
        domain: impl IntoIterator<Item = impl Into<Value>>,
    ) -> Result<VariableId, ModelError> {
        let name = name.into();
        if self.variable_names.contains(&name) {
            return Err(ModelError::DuplicateVariableName(name));
        }

        Ok(self.add_auxiliary_variable(name, domain))
    }

    /// Create a new variable whose name does not have to be unique. Looking up a shared name
    /// gives the variable which was created first.
    pub(crate) fn add_auxiliary_variable(
        &mut self,
        name: impl Into<String>,
        domain: impl IntoIterator<Item = impl Into<Value>>,
    ) -> VariableId {
        let name = name.into();
        let variable = Variable::new(name.clone(), domain.into_iter().map(Into::into));
        let id = self.variables.push(variable);
        let _ = self.constraints_by_variable.push(Vec::new());
        self.variable_names.add_variable(id, name);

        id
    }

    /// Add a constraint over `scope` which is satisfied by exactly the tuples in `tuples`.
    pub fn add_constraint(
        &mut self,
        name: impl Into<String>,
        scope: impl Into<Box<[VariableId]>>,
        tuples: Rc<TupleTable>,
    ) -> ConstraintId {
        let scope = scope.into();
        cagey_assert_simple!(
            scope
                .iter()
                .all(|&variable| variable.id < self.variables.len() as u32),
            "a constraint can only be posted over variables of the same problem"
        );

        let id = self
            .constraints
            .push(Constraint::new(name.into(), scope, tuples));

        for &variable in self.constraints[id].scope() {
            let incident = &mut self.constraints_by_variable[variable];
            if !incident.contains(&id) {
                incident.push(id);
            }
        }
        cagey_assert_moderate!(self.constraints_by_variable.len() == self.variables.len());

        id
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn variable(&self, variable: VariableId) -> &Variable {
        &self.variables[variable]
    }

    /// All variables in the order in which they were created.
    pub fn variables(&self) -> impl Iterator<Item = VariableId> {
        self.variables.keys()
    }

    pub fn variable_by_name(&self, name: &str) -> Option<VariableId> {
        self.variable_names.get_variable_by_name(name)
    }

    pub fn unassigned_variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.variables
            .keys()
            .filter(|&variable| !self.variables[variable].is_assigned())
    }

    pub fn constraint(&self, constraint: ConstraintId) -> &Constraint {
        &self.constraints[constraint]
    }

    /// All constraints in the order in which they were added.
    pub fn constraints(&self) -> impl Iterator<Item = ConstraintId> {
        self.constraints.keys()
    }

    /// The constraints whose scope contains `variable`, in the order in which they were added.
    pub fn constraints_with(&self, variable: VariableId) -> &[ConstraintId] {
        &self.constraints_by_variable[variable]
    }

    /// Whether `value` for `variable` is supported in `constraint` given the current domains.
    pub fn has_support(&self, constraint: ConstraintId, variable: VariableId, value: Value) -> bool {
        let constraint = &self.constraints[constraint];
        match constraint.position_of(variable) {
            Some(position) => constraint.has_support(&self.variables, position, value),
            None => false,
        }
    }

    /// The number of constraints incident to `variable` which have at least one unassigned
    /// variable in their scope apart from `variable` itself.
    pub fn num_constraints_with_other_unassigned(&self, variable: VariableId) -> usize {
        self.constraints_by_variable[variable]
            .iter()
            .filter(|&&constraint| {
                self.constraints[constraint]
                    .unassigned_variables(&self.variables)
                    .any(|other| other != variable)
            })
            .count()
    }

    /// Remove `value` from the current domain of `variable`.
    ///
    /// The value has to be in the current domain; pruning an absent value is a programming error.
    pub fn prune(&mut self, variable: VariableId, value: Value) -> Pruning {
        self.variables[variable].prune(value);
        Pruning { variable, value }
    }

    /// Undo a single pruning.
    ///
    /// The pruned value has to be absent from the current domain; restoring a value twice is a
    /// programming error.
    pub fn restore(&mut self, pruning: Pruning) {
        self.variables[pruning.variable].restore(pruning.value);
    }

    /// Undo `prunings`, which are given in the order in which they were made. They are restored in
    /// reverse order.
    pub fn restore_all(&mut self, prunings: &[Pruning]) {
        for &pruning in prunings.iter().rev() {
            self.restore(pruning);
        }
    }

    /// Assign `value` to `variable` by pruning every other value of its current domain and marking
    /// it assigned. The returned prunings undo the domain reduction when restored; the variable
    /// still has to be unassigned through [`Problem::unassign`].
    pub fn assign(&mut self, variable: VariableId, value: Value) -> Vec<Pruning> {
        cagey_assert_simple!(
            !self.variables[variable].is_assigned(),
            "{} is already assigned",
            self.variables[variable].name()
        );
        cagey_assert_simple!(
            self.variables[variable].contains(value),
            "{value} is not in the domain of {}",
            self.variables[variable].name()
        );

        let others = self.variables[variable]
            .current_domain()
            .filter(|&other| other != value)
            .collect::<Vec<_>>();
        let prunings = others
            .into_iter()
            .map(|other| self.prune(variable, other))
            .collect();

        self.variables[variable].set_assigned(true);

        prunings
    }

    pub fn unassign(&mut self, variable: VariableId) {
        self.variables[variable].set_assigned(false);
    }

    /// Whether every variable is assigned and every constraint is satisfied by the assignment.
    pub fn is_solved(&self) -> bool {
        self.constraints.iter().all(|constraint| {
            constraint
                .assigned_tuple(&self.variables)
                .is_some_and(|tuple| constraint.check_tuple(&tuple))
        })
    }

    pub(crate) fn propagation_context(&mut self) -> PropagationContext<'_> {
        PropagationContext::new(
            &mut self.variables,
            &self.constraints,
            &self.constraints_by_variable,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_helper::TestProblem;

    #[test]
    fn duplicate_names_are_rejected() {
        let mut problem = Problem::new("names");
        let x = problem.add_variable("x", [1, 2]).expect("first x");

        assert_eq!(
            problem.add_variable("x", [3]),
            Err(ModelError::DuplicateVariableName("x".to_owned()))
        );
        assert_eq!(problem.num_variables(), 1);
        assert_eq!(problem.variable_by_name("x"), Some(x));
    }

    #[test]
    fn auxiliary_variables_may_share_a_name() {
        let mut problem = Problem::new("names");
        let first = problem.add_auxiliary_variable("aux", [1, 2]);
        let second = problem.add_auxiliary_variable("aux", [1, 2]);

        assert_ne!(first, second);
        assert_eq!(problem.num_variables(), 2);
        assert_eq!(problem.variable_by_name("aux"), Some(first));
    }

    #[test]
    fn restoring_prunings_gives_back_the_domain() {
        let mut test = TestProblem::default();
        let x = test.new_variable(1, 4);

        let prunings = test.problem.assign(x, Value::from(3));
        test.assert_domain(x, &[3]);

        test.problem.restore_all(&prunings);
        test.problem.unassign(x);
        test.assert_domain(x, &[1, 2, 3, 4]);
        assert!(!test.problem.variable(x).is_assigned());
    }
}
