use grouped_grid::{
    Binder, GridError, GroupedCollection, GroupedGrid, GroupedGridOptions, IndexKind, Item,
};

use crate::{ScreenState, Surface};

/// A framework-neutral screen that owns a [`GroupedGrid`] and drives a [`Surface`].
///
/// The host calls [`Screen::init`] once when the screen loads and [`Screen::refresh`] whenever
/// new data arrives. Both replace the grid contents wholesale and notify the surface before
/// returning, so the next layout pass always sees the new data.
///
/// Layout passes call [`Screen::span_width`] per position and then one of the binding helpers
/// with a caller-supplied [`Binder`].
#[derive(Debug)]
pub struct Screen<S, T = Item> {
    grid: GroupedGrid<T>,
    surface: S,
    initialized: bool,
}

impl<S: Surface<T>, T> Screen<S, T> {
    pub fn new(surface: S) -> Self {
        Self::with_options(surface, GroupedGridOptions::default())
    }

    /// Uses `options` for footers and `on_change`; the column count always follows the surface.
    pub fn with_options(surface: S, options: GroupedGridOptions<T>) -> Self {
        let options = options.with_columns_per_row(surface.columns_per_row());
        Self {
            grid: GroupedGrid::new(options),
            surface,
            initialized: false,
        }
    }

    pub fn grid(&self) -> &GroupedGrid<T> {
        &self.grid
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_parts(self) -> (GroupedGrid<T>, S) {
        (self.grid, self.surface)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// First load of the screen's data.
    ///
    /// Calling it again behaves like [`Screen::refresh`].
    pub fn init(&mut self, groups: impl Into<GroupedCollection<T>>) {
        if self.initialized {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                target: "grouped_grid_adapter",
                "Screen::init called on an initialized screen"
            );
        }
        self.initialized = true;
        self.refresh(groups);
    }

    /// Replaces everything the screen shows and tells the surface to re-layout.
    ///
    /// Pass an empty collection to clear the screen.
    pub fn refresh(&mut self, groups: impl Into<GroupedCollection<T>>) {
        let columns = self.surface.columns_per_row();
        if columns != self.grid.options().columns_per_row {
            // The surface may have changed shape since the last load (e.g. rotation).
            let options = self.grid.options().clone().with_columns_per_row(columns);
            self.grid = GroupedGrid::new(options);
        }
        self.grid.replace_all(groups);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "grouped_grid_adapter",
            groups = self.grid.group_count(),
            positions = self.grid.total_positions(),
            columns,
            "Screen::refresh"
        );
        self.surface.data_changed(&self.grid);
    }

    /// Span for `position` at the column count installed by the last refresh.
    ///
    /// Column changes on the surface take effect on the next [`Screen::refresh`], so spans
    /// always agree with [`Screen::bind_rows`] and [`Screen::state`].
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `position >= total_positions()`.
    pub fn span_width(&self, position: usize) -> Result<usize, GridError> {
        self.grid.span_size(position)
    }

    /// Binds every position on the screen, in order. Returns the number bound.
    pub fn layout_pass<B: Binder<T> + ?Sized>(&self, binder: &mut B) -> usize {
        self.grid.bind_range(0, self.grid.total_positions(), binder)
    }

    /// Binds the positions laid out on grid rows `start_row..end_row`.
    ///
    /// Rows hold contiguous position ranges, so this binds one contiguous range. Returns the
    /// number of positions bound.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] with [`IndexKind::Row`] if `start_row` is past the
    /// last row. `end_row` is clamped.
    pub fn bind_rows<B: Binder<T> + ?Sized>(
        &self,
        start_row: usize,
        end_row: usize,
        binder: &mut B,
    ) -> Result<usize, GridError> {
        let rows = self.grid.row_count();
        if start_row >= rows {
            return Err(GridError::IndexOutOfRange {
                kind: IndexKind::Row,
                index: start_row,
                len: rows,
            });
        }
        let end_row = end_row.min(rows);
        if end_row <= start_row {
            return Ok(0);
        }
        let first = self.grid.row_span(start_row)?;
        let last = self.grid.row_span(end_row - 1)?;
        Ok(self
            .grid
            .bind_range(first.start_position, last.end_position, binder))
    }

    pub fn state(&self) -> ScreenState {
        ScreenState::of(&self.grid)
    }
}
