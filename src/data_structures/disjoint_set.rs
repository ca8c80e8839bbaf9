//! Disjoint-set (union-find) with path compression and union by rank.
//!
//! Variables:
//!   parent[x] = parent pointer;  parent[x] == x  iff  x is a representative
//!   rank[x]   = upper bound on the depth of x's subtree
//!
//! Equations:
//!   find(x):     root r with parent[r] == r; every node on the walk is
//!                repointed at r (path compression)
//!   union(x, y): attach the lower-rank root under the higher; equal ranks
//!                attach y's root under x's and increment rank of x's root
//!
//!   Amortised tree depth stays O(log n); find is idempotent.

#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// n singleton sets {0}, {1}, ..., {n-1}.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of x's set. Two-pass: walk to the root, then repoint
    /// the traversed path directly at it.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut curr = x;
        while curr != root {
            let next = self.parent[curr];
            self.parent[curr] = root;
            curr = next;
        }

        root
    }

    /// Merge the sets holding x and y. False if they were already one set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        if self.rank[root_x] < self.rank[root_y] {
            self.parent[root_x] = root_y;
        } else if self.rank[root_x] > self.rank[root_y] {
            self.parent[root_y] = root_x;
        } else {
            self.parent[root_y] = root_x;
            self.rank[root_x] += 1;
        }

        true
    }
}
