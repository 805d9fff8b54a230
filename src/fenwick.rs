//! Fenwick tree over a dynamic 0/1 set with rank/select support.
//!
//! The permutation ranker needs, for each position, the number of values
//! already consumed that are smaller than the current one; the unranker needs
//! the $k$-th value not yet consumed. Both are rank/select queries on a set
//! that changes one element at a time, which a Fenwick (binary indexed) tree
//! answers in $O(\log n)$.
//!
//! # Layout
//!
//! `tree[j]` (1-based) holds the number of members in the half-open range
//! `(j - lowbit(j), j]`, where `lowbit(j) = j & -j`.

/// A dynamic subset of `0..len` with logarithmic rank and select.
#[derive(Debug, Clone)]
pub(crate) struct Fenwick {
    tree: Vec<usize>,
    ones: usize,
}

#[inline]
fn lowbit(j: usize) -> usize {
    j & j.wrapping_neg()
}

impl Fenwick {
    /// An empty subset of `0..len`.
    pub fn new(len: usize) -> Self {
        Self {
            tree: vec![0; len + 1],
            ones: 0,
        }
    }

    /// The full set `0..len`, built in $O(n)$.
    pub fn full(len: usize) -> Self {
        let tree = (0..=len).map(lowbit).collect();
        Self { tree, ones: len }
    }

    /// Size of the universe.
    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    /// Return true if `i` is a member.
    pub fn get(&self, i: usize) -> bool {
        i < self.len() && self.rank1(i + 1) > self.rank1(i)
    }

    /// Add `i` to the set. `i` must be in range and not yet a member.
    pub fn insert(&mut self, i: usize) {
        debug_assert!(!self.get(i));
        let mut j = i + 1;
        while j < self.tree.len() {
            self.tree[j] += 1;
            j += lowbit(j);
        }
        self.ones += 1;
    }

    /// Remove `i` from the set. `i` must be a member.
    pub fn remove(&mut self, i: usize) {
        debug_assert!(self.get(i));
        let mut j = i + 1;
        while j < self.tree.len() {
            self.tree[j] -= 1;
            j += lowbit(j);
        }
        self.ones -= 1;
    }

    /// Return the number of members in the range [0, i).
    pub fn rank1(&self, i: usize) -> usize {
        let mut j = i.min(self.len());
        let mut rank = 0;
        while j > 0 {
            rank += self.tree[j];
            j &= j - 1;
        }
        rank
    }

    /// Return the $k$-th smallest member (0-indexed).
    pub fn select1(&self, k: usize) -> Option<usize> {
        if k >= self.ones {
            return None;
        }
        let n = self.len();
        let mut pos = 0;
        let mut remaining = k;
        let mut step = if n == 0 { 0 } else { 1 << n.ilog2() };
        while step > 0 {
            let next = pos + step;
            if next <= n && self.tree[next] <= remaining {
                pos = next;
                remaining -= self.tree[next];
            }
            step >>= 1;
        }
        Some(pos)
    }
}
