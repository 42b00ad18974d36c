use alloc::vec::Vec;
use core::cmp;

/// Prefix sums over per-group position spans.
#[derive(Clone, Debug, Default)]
pub(crate) struct Fenwick {
    tree: Vec<usize>, // 1-indexed
    total: usize,
    max_bit: usize,
}

impl Fenwick {
    pub(crate) fn from_spans(spans: impl ExactSizeIterator<Item = usize>) -> Self {
        let n = spans.len();
        let mut tree = alloc::vec![0usize; n + 1];
        let mut total = 0usize;
        let max_bit = if n == 0 {
            0
        } else {
            highest_power_of_two_leq(n)
        };
        for (i, v) in (1..=n).zip(spans) {
            total = total.saturating_add(v);
            tree[i] = tree[i].saturating_add(v);
            let j = i + lsb(i);
            if j <= n {
                tree[j] = tree[j].saturating_add(tree[i]);
            }
        }
        Self {
            tree,
            total,
            max_bit,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.tree.len().saturating_sub(1)
    }

    /// Sum of the first `count` spans, i.e. the first flat position of group `count`.
    pub(crate) fn prefix_sum(&self, count: usize) -> usize {
        let n = self.len();
        let mut i = cmp::min(count, n);
        let mut sum = 0usize;
        while i > 0 {
            sum = sum.saturating_add(self.tree[i]);
            i &= i - 1;
        }
        sum
    }

    pub(crate) fn total(&self) -> usize {
        self.total
    }

    /// Returns the number of groups whose prefix sum is <= `target`.
    ///
    /// Every span is at least 1 (the header), so for `target < total()` this is the index of
    /// the group containing flat position `target`.
    pub(crate) fn lower_bound(&self, mut target: usize) -> usize {
        let n = self.len();
        if n == 0 {
            return 0;
        }

        let mut idx = 0usize;
        let mut bit = self.max_bit;
        while bit != 0 {
            let next = idx + bit;
            if next <= n && self.tree[next] <= target {
                target -= self.tree[next];
                idx = next;
            }
            bit >>= 1;
        }
        idx
    }
}

fn lsb(i: usize) -> usize {
    i & i.wrapping_neg()
}

fn highest_power_of_two_leq(n: usize) -> usize {
    let mut p = 1usize;
    while p <= n / 2 {
        p <<= 1;
    }
    p
}
