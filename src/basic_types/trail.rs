use std::iter::Rev;
use std::ops::Deref;
use std::vec::Drain;

use crate::cagey_assert_simple;

/// A stack of entries which is delimited into decision levels. Backtracking to a decision level
/// hands back every entry pushed after that level was opened, most recent first.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    decision_level: usize,
    /// At index i is the position where the i-th decision level ends (exclusive) on the trail.
    trail_delimiter: Vec<usize>,
    trail: Vec<T>,
}

impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            decision_level: 0,
            trail_delimiter: Vec::default(),
            trail: Vec::default(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn increase_decision_level(&mut self) {
        self.decision_level += 1;
        self.trail_delimiter.push(self.trail.len());
    }

    pub(crate) fn get_decision_level(&self) -> usize {
        self.decision_level
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, entry: T) {
        self.trail.push(entry)
    }

    pub(crate) fn extend(&mut self, entries: impl IntoIterator<Item = T>) {
        self.trail.extend(entries)
    }

    /// Remove all entries above `new_decision_level`, yielding them in reverse chronological
    /// order.
    pub(crate) fn synchronise(&mut self, new_decision_level: usize) -> Rev<Drain<'_, T>> {
        cagey_assert_simple!(new_decision_level < self.decision_level);

        let new_trail_len = self.trail_delimiter[new_decision_level];

        self.decision_level = new_decision_level;
        self.trail_delimiter.truncate(new_decision_level);
        self.trail.drain(new_trail_len..).rev()
    }
}

impl<T> Deref for Trail<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.trail
    }
}
