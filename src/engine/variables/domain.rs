use crate::basic_types::HashMap;
use crate::cagey_assert_moderate;
use crate::engine::variables::Value;

/// A finite domain which remembers the values it was created with. Values can be removed from and
/// re-inserted into the current domain, but never added beyond the initial ones.
///
/// Iteration over the current domain follows the order of the initial domain.
#[derive(Clone, Debug)]
pub(crate) struct Domain {
    initial: Box<[Value]>,
    /// Maps every initial value to its index in `initial`.
    positions: HashMap<Value, usize>,
    /// Indicates whether the value at index `i` of `initial` is in the current domain.
    is_present: Vec<bool>,
    size: usize,
}

impl Domain {
    /// Create a domain containing `values`. Repeated values are only kept once.
    pub(crate) fn new(values: impl IntoIterator<Item = Value>) -> Domain {
        let mut initial = Vec::new();
        let mut positions = HashMap::<Value, usize>::default();

        for value in values {
            if !positions.contains_key(&value) {
                let _ = positions.insert(value, initial.len());
                initial.push(value);
            }
        }

        let size = initial.len();

        Domain {
            initial: initial.into_boxed_slice(),
            positions,
            is_present: vec![true; size],
            size,
        }
    }

    pub(crate) fn initial_values(&self) -> &[Value] {
        &self.initial
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn contains(&self, value: Value) -> bool {
        self.positions
            .get(&value)
            .is_some_and(|&position| self.is_present[position])
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        self.initial
            .iter()
            .zip(self.is_present.iter())
            .filter(|&(_, &is_present)| is_present)
            .map(|(&value, _)| value)
    }

    /// Remove `value` from the current domain. Returns whether the value was present.
    pub(crate) fn remove(&mut self, value: Value) -> bool {
        match self.positions.get(&value) {
            Some(&position) if self.is_present[position] => {
                self.is_present[position] = false;
                self.size -= 1;
                true
            }
            _ => false,
        }
    }

    /// Put `value` back into the current domain. Returns whether the value was absent and part of
    /// the initial domain.
    pub(crate) fn insert(&mut self, value: Value) -> bool {
        match self.positions.get(&value) {
            Some(&position) if !self.is_present[position] => {
                self.is_present[position] = true;
                self.size += 1;
                cagey_assert_moderate!(self.size <= self.initial.len());
                true
            }
            _ => false,
        }
    }
}
