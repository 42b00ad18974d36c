// Example: a text "surface" hosting the stock selection grid screen.
use grouped_grid::{Binder, Group, GroupedCollection, GroupedGrid, Item};
use grouped_grid_adapter::{Screen, Surface, sample_groups};

struct TextSurface {
    columns: usize,
}

impl Surface for TextSurface {
    fn columns_per_row(&self) -> usize {
        self.columns
    }

    fn data_changed(&mut self, grid: &GroupedGrid) {
        println!(
            "data_changed: positions={} rows={}",
            grid.total_positions(),
            grid.row_count()
        );
    }
}

#[derive(Default)]
struct RowPrinter {
    line: String,
}

impl RowPrinter {
    fn flush(&mut self) {
        if !self.line.is_empty() {
            println!("{}", self.line);
            self.line.clear();
        }
    }
}

impl Binder for RowPrinter {
    fn bind_header(&mut self, _group_index: usize, group: &Group) {
        self.flush();
        println!("== {} ==", group.title());
    }

    fn bind_item(&mut self, _group_index: usize, item_index: usize, item: &Item) {
        if item_index % 4 == 0 {
            self.flush();
        }
        self.line.push_str(&format!("{:<10}", item.title));
    }
}

fn main() {
    let mut screen: Screen<_> = Screen::new(TextSurface { columns: 4 });
    screen.init(sample_groups());

    let mut printer = RowPrinter::default();
    screen.layout_pass(&mut printer);
    printer.flush();

    println!("state={:?}", screen.state());

    // Pull-to-refresh with nothing to show.
    screen.refresh(GroupedCollection::<Item>::new());
    println!("state={:?}", screen.state());
}
