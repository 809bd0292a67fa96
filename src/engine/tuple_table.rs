use crate::basic_types::HashMap;
use crate::basic_types::HashSet;
use crate::cagey_assert_eq_simple;
use crate::cagey_assert_simple;
use crate::engine::variables::Value;

/// The satisfying tuples of an extensional constraint.
///
/// Tuples are stored contiguously. For every position in the tuple, an index maps each value to
/// the tuples which have that value at that position; support checks only visit those candidates.
///
/// A table is immutable once built and can be shared between constraints over different scopes
/// with the same relation (e.g. every row of a grid).
#[derive(Clone, Debug)]
pub struct TupleTable {
    arity: usize,
    values: Vec<Value>,
    supports: Box<[HashMap<Value, Vec<u32>>]>,
}

impl TupleTable {
    /// Build a table from `tuples`. Every tuple should contain exactly `arity` values; repeated
    /// tuples are stored once.
    pub fn new<Tuple: AsRef<[Value]>>(
        arity: usize,
        tuples: impl IntoIterator<Item = Tuple>,
    ) -> TupleTable {
        cagey_assert_simple!(arity > 0, "a tuple table needs at least one position");

        let mut values = Vec::new();
        let mut supports = vec![HashMap::<Value, Vec<u32>>::default(); arity].into_boxed_slice();
        let mut seen = HashSet::<Box<[Value]>>::default();

        for tuple in tuples {
            let tuple = tuple.as_ref();
            cagey_assert_eq_simple!(
                tuple.len(),
                arity,
                "the tuple {tuple:?} does not match the arity of the table"
            );

            if !seen.insert(tuple.into()) {
                continue;
            }

            let tuple_index = u32::try_from(values.len() / arity)
                .expect("the number of tuples should fit in a u32");

            for (position, &value) in tuple.iter().enumerate() {
                supports[position].entry(value).or_default().push(tuple_index);
            }
            values.extend_from_slice(tuple);
        }

        TupleTable {
            arity,
            values,
            supports,
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn len(&self) -> usize {
        self.values.len() / self.arity
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Value]> + '_ {
        self.values.chunks_exact(self.arity)
    }

    /// The tuples which have `value` at `position`.
    pub fn tuples_with(&self, position: usize, value: Value) -> impl Iterator<Item = &[Value]> + '_ {
        self.supports[position]
            .get(&value)
            .into_iter()
            .flatten()
            .map(|&index| self.tuple(index as usize))
    }

    pub fn contains(&self, tuple: &[Value]) -> bool {
        if tuple.len() != self.arity {
            return false;
        }

        self.tuples_with(0, tuple[0])
            .any(|candidate| candidate == tuple)
    }

    fn tuple(&self, index: usize) -> &[Value] {
        &self.values[index * self.arity..(index + 1) * self.arity]
    }
}
