use grouped_grid::{GroupedGrid, Item};

/// The rendering surface a [`crate::Screen`] drives: a scrolling grid owned by the host UI.
///
/// The surface never reaches into the screen. It reports its column count when asked and is
/// told, synchronously, when the data it lays out has been replaced.
pub trait Surface<T = Item> {
    /// Columns per grid row. Values below 1 are treated as 1.
    fn columns_per_row(&self) -> usize;

    /// "Data changed, re-layout everything." Fired at the end of every refresh, after the grid
    /// already reflects the new contents.
    fn data_changed(&mut self, grid: &GroupedGrid<T>);
}

impl<T, S: Surface<T> + ?Sized> Surface<T> for &mut S {
    fn columns_per_row(&self) -> usize {
        (**self).columns_per_row()
    }

    fn data_changed(&mut self, grid: &GroupedGrid<T>) {
        (**self).data_changed(grid);
    }
}
