use crate::basic_types::HashMap;
use crate::engine::variables::VariableId;

/// Looks up variables by their name. Names are unique within a problem.
#[derive(Debug, Default, Clone)]
pub(crate) struct VariableNames {
    variables_by_name: HashMap<String, VariableId>,
}

impl VariableNames {
    /// Get a variable by its name.
    pub(crate) fn get_variable_by_name(&self, name: &str) -> Option<VariableId> {
        self.variables_by_name.get(name).copied()
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.variables_by_name.contains_key(name)
    }

    /// Associate `name` with `variable`, unless another variable already goes by that name.
    pub(crate) fn add_variable(&mut self, variable: VariableId, name: String) {
        let _ = self.variables_by_name.entry(name).or_insert(variable);
    }
}
