// Example: bind only the grid rows a viewport shows, with footers enabled.
use grouped_grid::{
    Binder, Group, GroupedCollection, GroupedGrid, GroupedGridOptions, Item, ResourceId,
};

struct Printer;

impl Binder for Printer {
    fn bind_header(&mut self, group_index: usize, group: &Group) {
        println!("[header {group_index}] {}", group.title());
    }

    fn bind_item(&mut self, group_index: usize, item_index: usize, item: &Item) {
        println!("  ({group_index}, {item_index}) {}", item.title);
    }

    fn bind_footer(&mut self, group_index: usize, group: &Group) {
        println!("[footer {group_index}] {} items", group.len());
    }
}

fn main() {
    let groups: GroupedCollection = (0..20usize)
        .map(|g| {
            Group::with_items(
                format!("Group {g}"),
                (0..g % 7).map(|i| Item::new(format!("Item {i}"), ResourceId(0))),
            )
        })
        .collect();

    let opts =
        GroupedGridOptions::new(3).with_has_footer(Some(|_: usize, g: &Group| !g.is_empty()));
    let grid = GroupedGrid::with_collection(opts, groups);
    println!(
        "positions={} rows={}",
        grid.total_positions(),
        grid.row_count()
    );

    // A viewport showing rows 10..16.
    let (Ok(first), Ok(last)) = (grid.row_span(10), grid.row_span(15)) else {
        return;
    };
    let bound = grid.bind_range(first.start_position, last.end_position, &mut Printer);
    println!("bound={bound}");
}
