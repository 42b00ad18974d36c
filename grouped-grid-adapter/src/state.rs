use grouped_grid::GroupedGrid;

/// A lightweight, serializable snapshot of a screen's layout.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenState {
    pub columns_per_row: usize,
    pub group_count: usize,
    pub total_positions: usize,
    pub row_count: usize,
}

impl ScreenState {
    pub fn of<T>(grid: &GroupedGrid<T>) -> Self {
        Self {
            columns_per_row: grid.options().columns(),
            group_count: grid.group_count(),
            total_positions: grid.total_positions(),
            row_count: grid.row_count(),
        }
    }
}
