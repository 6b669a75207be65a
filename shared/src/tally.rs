use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};
use crate::models::VoteOption;

/// Per-option vote counts derived from a full scan.
///
/// Options nobody picked are absent rather than zero, so an empty table
/// serialises to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tally {
    counts: BTreeMap<VoteOption, u64>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, option: VoteOption) {
        *self.counts.entry(option).or_insert(0) += 1;
    }

    pub fn count(&self, option: VoteOption) -> u64 {
        self.counts.get(&option).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VoteOption, u64)> + '_ {
        self.counts.iter().map(|(&option, &count)| (option, count))
    }
}

impl Extend<VoteOption> for Tally {
    fn extend<I: IntoIterator<Item = VoteOption>>(&mut self, iter: I) {
        iter.into_iter().for_each(|option| self.record(option));
    }
}

impl FromIterator<VoteOption> for Tally {
    fn from_iter<I: IntoIterator<Item = VoteOption>>(iter: I) -> Self {
        let mut tally = Tally::new();
        tally.extend(iter);
        tally
    }
}
