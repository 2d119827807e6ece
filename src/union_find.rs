/// Union-Find (Disjoint Sets) forest over a fixed number of entities
///
/// Entities are plain indices into two flat vectors, so a group is just the
/// set of indices whose parent chain ends at the same root.
use log::{debug, trace};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForestError {
    #[error("invalid forest size {requested}: entity count must be non-negative")]
    InvalidSize { requested: i64 },

    #[error("entity index {index} out of range for forest of {len} entities")]
    IndexOutOfRange { index: i128, len: usize },
}

#[derive(Clone, PartialEq, Eq)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
    groups: usize,
}

impl UnionFind {
    /// Create a new UnionFind with n singleton groups
    pub fn new(n: usize) -> Self {
        let parent = (0..n).collect();
        let rank = vec![0; n];
        debug!("created forest with {n} entities");
        UnionFind {
            parent,
            rank,
            groups: n,
        }
    }

    /// Create a forest from a signed entity count, rejecting negative sizes
    pub fn make(n: i64) -> Result<Self, ForestError> {
        let size = usize::try_from(n).map_err(|_| ForestError::InvalidSize { requested: n })?;
        Ok(Self::new(size))
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint groups currently in the forest
    pub fn group_count(&self) -> usize {
        self.groups
    }

    fn check(&self, index: usize) -> Result<(), ForestError> {
        if index < self.parent.len() {
            Ok(())
        } else {
            Err(ForestError::IndexOutOfRange {
                index: index as i128,
                len: self.parent.len(),
            })
        }
    }

    /// Validate a signed entity index, as read from untrusted input
    pub fn index(&self, index: i64) -> Result<usize, ForestError> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.parent.len())
            .ok_or(ForestError::IndexOutOfRange {
                index: i128::from(index),
                len: self.parent.len(),
            })
    }

    /// Checks if an entity is itself the representative of its group
    pub fn is_root(&self, x: usize) -> Result<bool, ForestError> {
        self.check(x)?;
        Ok(self.parent[x] == x)
    }

    /// Find the representative of x, pointing every visited entity at it
    pub fn find(&mut self, x: usize) -> Result<usize, ForestError> {
        self.check(x)?;
        Ok(self.find_root(x))
    }

    // Callers must have validated x.
    fn find_root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Union the groups containing x and y
    ///
    /// Returns `true` when two distinct groups were merged, `false` when x and
    /// y already shared a representative. Both indices are validated before
    /// anything is touched, so a failing call leaves the forest as it was.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool, ForestError> {
        self.check(x)?;
        self.check(y)?;

        let root_x = self.find_root(x);
        let root_y = self.find_root(y);
        if root_x == root_y {
            trace!("union({x}, {y}) is a no-op, both in group {root_x}");
            return Ok(false);
        }

        // Union by rank; ties hang y's root under x's root
        let (parent, child) = if self.rank[root_x] < self.rank[root_y] {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };
        self.parent[child] = parent;
        if self.rank[parent] == self.rank[child] {
            self.rank[parent] += 1;
        }
        self.groups -= 1;

        debug!(
            "merged group {child} into {parent} (rank {}), {} groups left",
            self.rank[parent], self.groups
        );
        Ok(true)
    }

    /// Check if two entities are in the same group
    pub fn same_group(&mut self, x: usize, y: usize) -> Result<bool, ForestError> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.find_root(x) == self.find_root(y))
    }

    /// Rank of the representative of x's group
    pub fn rank_of(&mut self, x: usize) -> Result<u32, ForestError> {
        let root = self.find(x)?;
        Ok(self.rank[root])
    }

    /// Get all groups as sorted index lists, ordered by smallest member
    pub fn groups(&mut self) -> Vec<Vec<usize>> {
        let n = self.parent.len();
        let mut by_root: Vec<Vec<usize>> = vec![Vec::new(); n];
        for i in 0..n {
            let root = self.find_root(i);
            by_root[root].push(i);
        }

        let mut sets: Vec<Vec<usize>> = by_root.into_iter().filter(|g| !g.is_empty()).collect();
        sets.sort_unstable_by_key(|g| g[0]);
        sets
    }

    // Read-only root lookup for formatting, which only gets `&self`.
    fn root_of(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    fn partition(&self) -> Vec<(usize, Vec<usize>)> {
        let n = self.parent.len();
        let mut by_root: Vec<Vec<usize>> = vec![Vec::new(); n];
        for i in 0..n {
            by_root[self.root_of(i)].push(i);
        }
        let mut sets: Vec<(usize, Vec<usize>)> = by_root
            .into_iter()
            .enumerate()
            .filter(|(_, g)| !g.is_empty())
            .collect();
        sets.sort_unstable_by_key(|(_, g)| g[0]);
        sets
    }
}

struct AsSet<'a>(&'a [usize]);

impl fmt::Debug for AsSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl fmt::Debug for UnionFind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sets = self.partition();
        f.debug_map()
            .entries(sets.iter().map(|(root, g)| (root, AsSet(g))))
            .finish()
    }
}

impl fmt::Display for UnionFind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sets = self.partition();
        f.debug_set()
            .entries(sets.iter().map(|(_, g)| AsSet(g)))
            .finish()
    }
}
