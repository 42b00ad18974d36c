use alloc::format;

use grouped_grid::{Group, GroupedCollection, Item, ResourceId};

/// Image used by every sample item.
pub const SAMPLE_ICON: ResourceId = ResourceId(0);

/// Six groups, where group `g` is titled `Group g` and holds `10 - g` items titled `Item i`.
pub fn sample_groups() -> GroupedCollection {
    (0..6usize)
        .map(|g| {
            Group::with_items(
                format!("Group {g}"),
                (0..10 - g).map(|i| Item::new(format!("Item {i}"), SAMPLE_ICON)),
            )
        })
        .collect()
}
