/// Zero-sum verification of per-entity amounts across union-find groups
///
/// Every group's amounts are summed into a `Total`. The verdict is
/// `Possible` only if every group nets out to exactly zero.
use crate::union_find::{ForestError, UnionFind};
use indexmap::IndexMap;
use log::{debug, info};
use std::fmt;
use thiserror::Error;

/// Amount carried by a single entity
pub type Value = i64;

/// Accumulator for group sums, twice the width of `Value`
///
/// A group holds at most `u64::MAX` entities, so its total is bounded by
/// `MIN_GROUP_TOTAL..=MAX_GROUP_TOTAL`, which always fits in an `i128`.
pub type Total = i128;

/// Largest total any group can reach: `Value::MAX * u64::MAX`
pub const MAX_GROUP_TOTAL: Total = Value::MAX as Total * u64::MAX as Total;

/// Smallest total any group can reach: `Value::MIN * u64::MAX`
pub const MIN_GROUP_TOTAL: Total = Value::MIN as Total * u64::MAX as Total;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error(transparent)]
    Forest(#[from] ForestError),

    #[error("forest has {entities} entities but {values} values were supplied")]
    LengthMismatch { entities: usize, values: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Possible,
    Impossible,
}

impl Verdict {
    pub fn is_possible(self) -> bool {
        self == Verdict::Possible
    }
}

impl From<bool> for Verdict {
    fn from(possible: bool) -> Self {
        if possible {
            Verdict::Possible
        } else {
            Verdict::Impossible
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Possible => f.write_str("POSSIBLE"),
            Verdict::Impossible => f.write_str("IMPOSSIBLE"),
        }
    }
}

/// A group whose amounts do not cancel out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Imbalance {
    pub representative: usize,
    pub members: Vec<usize>,
    pub total: Total,
}

fn check_lengths(forest: &UnionFind, values: &[Value]) -> Result<(), VerifyError> {
    if forest.len() != values.len() {
        return Err(VerifyError::LengthMismatch {
            entities: forest.len(),
            values: values.len(),
        });
    }
    Ok(())
}

/// Sum `values` per group, keyed by representative in first-seen order
pub fn group_totals(
    forest: &mut UnionFind,
    values: &[Value],
) -> Result<IndexMap<usize, Total>, VerifyError> {
    check_lengths(forest, values)?;

    let mut totals: IndexMap<usize, Total> = IndexMap::with_capacity(forest.group_count());
    for (i, &value) in values.iter().enumerate() {
        let root = forest.find(i)?;
        *totals.entry(root).or_insert(0) += Total::from(value);
    }
    Ok(totals)
}

/// Decide whether every group's amounts sum to zero
pub fn verify(forest: &mut UnionFind, values: &[Value]) -> Result<Verdict, VerifyError> {
    let totals = group_totals(forest, values)?;
    let verdict = Verdict::from(totals.values().all(|&total| total == 0));
    info!(
        "checked {} entities in {} groups: {verdict}",
        values.len(),
        totals.len()
    );
    Ok(verdict)
}

/// Collect every group with a nonzero total, ordered by representative's first appearance
pub fn imbalances(forest: &mut UnionFind, values: &[Value]) -> Result<Vec<Imbalance>, VerifyError> {
    let totals = group_totals(forest, values)?;

    let mut members: IndexMap<usize, Vec<usize>> = IndexMap::new();
    for i in 0..values.len() {
        let root = forest.find(i)?;
        if totals.get(&root).is_some_and(|&t| t != 0) {
            members.entry(root).or_default().push(i);
        }
    }

    let found: Vec<Imbalance> = members
        .into_iter()
        .map(|(representative, members)| Imbalance {
            representative,
            members,
            total: totals[&representative],
        })
        .collect();
    for group in &found {
        debug!(
            "group {} ({} members) is off by {}",
            group.representative,
            group.members.len(),
            group.total
        );
    }
    Ok(found)
}
