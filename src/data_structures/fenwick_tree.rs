//! Fenwick tree (binary indexed tree) for prefix sums.
//!
//! Variables:
//!   tree : Vec<i64>  — 1-indexed; tree[i] covers [i - lowbit(i) + 1, i]
//!   n    : usize     — number of elements
//!
//! Equations:
//!   lowbit(i)         = i & (-i)
//!   update(i, delta):   tree[j] += delta  for j = i, i+lowbit(i), ... <= n
//!   query(i)          = sum tree[j]       for j = i, i-lowbit(i), ... > 0
//!   range_query(l, r) = query(r) - query(l-1)
//!
//!   update and queries are O(log n); from_slice builds in O(n).
//!
//! The public API is 0-indexed; the walk above is 1-indexed internally.

pub struct FenwickTree {
    tree: Vec<i64>,
}

impl FenwickTree {
    /// All-zero tree over `len` elements.
    pub fn with_len(len: usize) -> Self {
        Self {
            tree: vec![0; len + 1],
        }
    }

    /// O(n) build: each node pushes its partial sum up to its parent.
    pub fn from_slice(values: &[i64]) -> Self {
        let n = values.len();
        let mut tree = vec![0i64; n + 1];

        for i in 1..=n {
            tree[i] += values[i - 1];
            let parent = i + lowbit(i);
            if parent <= n {
                let partial = tree[i];
                tree[parent] += partial;
            }
        }

        Self { tree }
    }

    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add `delta` to the element at `index`.
    pub fn update(&mut self, index: usize, delta: i64) {
        let n = self.len();
        assert!(index < n, "fenwick index out of bounds");

        let mut i = index + 1;
        while i <= n {
            self.tree[i] += delta;
            i += lowbit(i);
        }
    }

    /// Overwrite the element at `index` with `value`.
    pub fn set(&mut self, index: usize, value: i64) {
        let current = self.range_query(index, index);
        self.update(index, value - current);
    }

    /// Inclusive prefix sum of the elements [0, index].
    pub fn query(&self, index: usize) -> i64 {
        assert!(index < self.len(), "fenwick index out of bounds");

        let mut i = index + 1;
        let mut sum = 0;
        while i > 0 {
            sum += self.tree[i];
            i -= lowbit(i);
        }
        sum
    }

    /// Inclusive range sum of the elements [lo, hi].
    pub fn range_query(&self, lo: usize, hi: usize) -> i64 {
        if lo > hi {
            return 0;
        }
        let high = self.query(hi);
        if lo == 0 {
            high
        } else {
            high - self.query(lo - 1)
        }
    }

    /// Smallest index whose prefix sum reaches `k` (k >= 1). Requires
    /// non-negative element values. None if the total falls short of k.
    pub fn find_kth(&self, k: i64) -> Option<usize> {
        let n = self.len();
        let mut pos = 0usize;
        let mut remaining = k;
        let mut mask = n.next_power_of_two();

        while mask > 0 {
            let next = pos + mask;
            if next <= n && self.tree[next] < remaining {
                remaining -= self.tree[next];
                pos = next;
            }
            mask >>= 1;
        }

        if pos == n {
            None
        } else {
            Some(pos)
        }
    }
}

fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}
