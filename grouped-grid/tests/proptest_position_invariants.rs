//! Property-based invariant tests for flat position mapping.
//!
//! 1. Total positions is the sum of `item_count + 1` over groups.
//! 2. Every valid position is exactly one of header / item.
//! 3. Every (group, item) pair is addressed by exactly one position.
//! 4. Span width is the column count iff the position is a header, else 1.
//! 5. The indexed grid and the linear mapper agree everywhere.
//! 6. Replacing contents with nothing leaves no addressable positions.

use grouped_grid::{
    Group, GroupedCollection, GroupedGrid, GroupedGridOptions, Item, Position, PositionMapper,
    ResourceId,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn counts_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..=9, 0..=16)
}

fn collection(counts: &[usize]) -> GroupedCollection {
    counts
        .iter()
        .enumerate()
        .map(|(g, &n)| {
            Group::with_items(
                format!("Group {g}"),
                (0..n).map(|i| Item::new(format!("Item {i}"), ResourceId(i as u32))),
            )
        })
        .collect()
}

fn grid(counts: &[usize], columns: usize) -> GroupedGrid {
    GroupedGrid::with_collection(GroupedGridOptions::new(columns), collection(counts))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Total positions
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn total_is_sum_of_group_spans(counts in counts_strategy()) {
        let g = grid(&counts, 4);
        let expected: usize = counts.iter().map(|n| n + 1).sum();
        prop_assert_eq!(g.total_positions(), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Header xor item
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn each_position_is_header_xor_item(counts in counts_strategy()) {
        let g = grid(&counts, 4);
        for p in 0..g.total_positions() {
            let is_item = matches!(g.locate(p), Ok(Position::Item { .. }));
            prop_assert!(g.is_header(p) != is_item, "p={} counts={:?}", p, counts);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn every_item_has_exactly_one_position(counts in counts_strategy()) {
        let g = grid(&counts, 4);
        for (group, &n) in counts.iter().enumerate() {
            for item in 0..n {
                let want = Position::Item { group, item };
                let hits = (0..g.total_positions())
                    .filter(|&p| g.locate(p) == Ok(want))
                    .count();
                prop_assert_eq!(hits, 1);
                let p = g.item_position(group, item).unwrap();
                prop_assert_eq!(g.locate(p), Ok(want));
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Span width
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn span_is_full_row_iff_header(counts in counts_strategy(), columns in 1usize..=8) {
        let g = grid(&counts, columns);
        for p in 0..g.total_positions() {
            let span = g.span_width(p, columns).unwrap();
            if g.is_header(p) {
                prop_assert_eq!(span, columns);
            } else {
                prop_assert_eq!(span, 1);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Indexed vs linear
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn indexed_lookup_matches_linear_scan(counts in counts_strategy(), probe in 0usize..200) {
        let g = grid(&counts, 3);
        let groups = collection(&counts);
        let m = PositionMapper::new(&groups);
        prop_assert_eq!(g.total_positions(), m.total_positions());
        prop_assert_eq!(g.locate(probe), m.locate(probe));
        prop_assert_eq!(g.is_header(probe), m.is_header(probe));
        prop_assert_eq!(g.row_count(), m.row_count(3));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Refresh to empty
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn replace_with_empty_clears_positions(counts in counts_strategy()) {
        let mut g = grid(&counts, 4);
        g.replace_all(GroupedCollection::<Item>::new());
        prop_assert_eq!(g.total_positions(), 0);
        prop_assert!(g.locate(0).is_err());
    }
}
