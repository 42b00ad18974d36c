use alloc::sync::Arc;

use crate::collection::Group;
use crate::grid::GroupedGrid;
use crate::types::{Item, Position};

/// A callback fired synchronously after the grid's contents or layout options change.
///
/// This is the "data changed, re-layout everything" notification for the rendering surface.
pub type OnChangeCallback<T> = Arc<dyn Fn(&GroupedGrid<T>) + Send + Sync>;

/// Decides whether a group gets a trailing footer position.
///
/// Receives the group index and the group.
pub type FooterPredicate<T> = dyn Fn(usize, &Group<T>) -> bool + Send + Sync;

/// Picks a caller-defined sub-type for a position, so a surface can keep several header or
/// item layouts apart within one [`crate::ViewType`].
///
/// Receives the classified position and its group.
pub type ViewVariant<T> = dyn Fn(Position, &Group<T>) -> u32 + Send + Sync;

/// The column count used by the stock selection grid screen.
pub const DEFAULT_COLUMNS_PER_ROW: usize = 4;

/// Configuration for [`crate::GroupedGrid`].
///
/// Closures are stored in `Arc`s so adapters can tweak one field and call
/// `GroupedGrid::set_options` without reallocating them.
pub struct GroupedGridOptions<T = Item> {
    /// Columns per grid row. Headers and footers span all of them; items take one.
    ///
    /// A value of `0` is treated as `1` wherever rows are computed.
    pub columns_per_row: usize,

    /// Optional footer hook. When unset, no group has a footer and each group spans exactly
    /// `item_count + 1` positions.
    pub has_footer: Option<Arc<FooterPredicate<T>>>,

    /// Optional view sub-type hook. When unset, every position reports variant `0`.
    pub view_variant: Option<Arc<ViewVariant<T>>>,

    /// Optional callback fired after `replace_all` and option updates.
    pub on_change: Option<OnChangeCallback<T>>,
}

impl<T> Clone for GroupedGridOptions<T> {
    fn clone(&self) -> Self {
        Self {
            columns_per_row: self.columns_per_row,
            has_footer: self.has_footer.clone(),
            view_variant: self.view_variant.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl<T> Default for GroupedGridOptions<T> {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS_PER_ROW)
    }
}

impl<T> GroupedGridOptions<T> {
    pub fn new(columns_per_row: usize) -> Self {
        Self {
            columns_per_row,
            has_footer: None,
            view_variant: None,
            on_change: None,
        }
    }

    /// `columns_per_row`, clamped to at least one column.
    pub fn columns(&self) -> usize {
        self.columns_per_row.max(1)
    }

    pub fn with_columns_per_row(mut self, columns_per_row: usize) -> Self {
        self.columns_per_row = columns_per_row;
        self
    }

    pub fn with_has_footer(
        mut self,
        has_footer: Option<impl Fn(usize, &Group<T>) -> bool + Send + Sync + 'static>,
    ) -> Self {
        self.has_footer = has_footer.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_view_variant(
        mut self,
        view_variant: Option<impl Fn(Position, &Group<T>) -> u32 + Send + Sync + 'static>,
    ) -> Self {
        self.view_variant = view_variant.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&GroupedGrid<T>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub(crate) fn footer_for(&self, index: usize, group: &Group<T>) -> bool {
        self.has_footer.as_ref().is_some_and(|f| f(index, group))
    }
}

impl<T> core::fmt::Debug for GroupedGridOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GroupedGridOptions")
            .field("columns_per_row", &self.columns_per_row)
            .field("has_footer", &self.has_footer.is_some())
            .field("view_variant", &self.view_variant.is_some())
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
