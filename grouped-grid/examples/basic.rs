// Example: minimal usage, classification and span widths.
use grouped_grid::{Group, GroupedCollection, GroupedGrid, GroupedGridOptions, Item, ResourceId};

fn main() {
    let icon = ResourceId(1);
    let groups = GroupedCollection::from(vec![
        Group::with_items("A", [Item::new("a0", icon), Item::new("a1", icon)]),
        Group::new("B"),
        Group::with_items("C", [Item::new("c0", icon)]),
    ]);

    let grid = GroupedGrid::with_collection(GroupedGridOptions::new(4), groups);
    println!("total_positions={}", grid.total_positions());
    for p in 0..grid.total_positions() {
        println!(
            "position={p} locate={:?} span={:?}",
            grid.locate(p),
            grid.span_size(p)
        );
    }

    // Scroll-to-group helper.
    println!("header_of_C={:?}", grid.header_position(2));
    println!("out_of_range={:?}", grid.locate(grid.total_positions()));
}
