use alloc::sync::Arc;
use core::mem;

use crate::bind::Binder;
use crate::collection::GroupedCollection;
use crate::error::{GridError, IndexKind};
use crate::fenwick::Fenwick;
use crate::mapper::{PositionMapper, classify, span_for};
use crate::types::{CellPlacement, Item, Position, RowSpan, ViewType};
use crate::{GroupedGridOptions, OnChangeCallback};

/// A headless grouped grid engine.
///
/// Owns a [`GroupedCollection`] and answers the queries a scrolling grid surface needs: total
/// flat position count, per-position span width, and classification of each position into a
/// header, item, or footer. It holds no UI objects.
///
/// Lookups go through a prefix-sum index over group spans. The index is rebuilt inside
/// [`GroupedGrid::replace_all`] and [`GroupedGrid::set_options`], before `on_change` fires, so
/// no query can observe a stale layout.
#[derive(Clone, Debug)]
pub struct GroupedGrid<T = Item> {
    options: GroupedGridOptions<T>,
    collection: GroupedCollection<T>,
    spans: Fenwick,
}

impl<T> Default for GroupedGrid<T> {
    fn default() -> Self {
        Self::new(GroupedGridOptions::default())
    }
}

impl<T> GroupedGrid<T> {
    /// Creates an empty grid. No notification is fired.
    pub fn new(options: GroupedGridOptions<T>) -> Self {
        Self::with_collection(options, GroupedCollection::new())
    }

    /// Creates a grid over an initial collection. No notification is fired.
    pub fn with_collection(
        options: GroupedGridOptions<T>,
        collection: GroupedCollection<T>,
    ) -> Self {
        let mut grid = Self {
            options,
            collection,
            spans: Fenwick::default(),
        };
        grid.rebuild_index();
        gdebug!(
            groups = grid.collection.group_count(),
            positions = grid.spans.total(),
            columns = grid.options.columns_per_row,
            "GroupedGrid::new"
        );
        grid
    }

    pub fn options(&self) -> &GroupedGridOptions<T> {
        &self.options
    }

    pub fn set_options(&mut self, options: GroupedGridOptions<T>) {
        self.options = options;
        self.rebuild_index();
        gtrace!(
            columns = self.options.columns_per_row,
            positions = self.spans.total(),
            "GroupedGrid::set_options"
        );
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut GroupedGridOptions<T>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&GroupedGrid<T>) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as OnChangeCallback<T>);
    }

    pub fn collection(&self) -> &GroupedCollection<T> {
        &self.collection
    }

    /// Discards the current contents and installs `groups` as one step, then fires `on_change`.
    ///
    /// Returns the previous collection.
    pub fn replace_all(
        &mut self,
        groups: impl Into<GroupedCollection<T>>,
    ) -> GroupedCollection<T> {
        let prev = mem::replace(&mut self.collection, groups.into());
        self.rebuild_index();
        gdebug!(
            groups = self.collection.group_count(),
            positions = self.spans.total(),
            "GroupedGrid::replace_all"
        );
        self.notify();
        prev
    }

    /// Empties the grid and fires `on_change`.
    pub fn clear(&mut self) -> GroupedCollection<T> {
        self.replace_all(GroupedCollection::<T>::new())
    }

    fn rebuild_index(&mut self) {
        let mapper = self.mapper();
        let spans = Fenwick::from_spans(
            self.collection
                .iter()
                .enumerate()
                .map(|(i, g)| mapper.group_span(i, g)),
        );
        debug_assert_eq!(
            spans.total(),
            mapper.total_positions(),
            "span index out of sync with collection"
        );
        self.spans = spans;
    }

    fn notify(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    /// A linear-scan view over the current contents, honouring the configured footers.
    pub fn mapper(&self) -> PositionMapper<'_, T> {
        PositionMapper::from_parts(&self.collection, self.options.has_footer.as_deref())
    }

    pub fn group_count(&self) -> usize {
        self.collection.group_count()
    }

    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `group >= group_count()`.
    pub fn item_count(&self, group: usize) -> Result<usize, GridError> {
        self.collection.item_count(group)
    }

    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if either index is out of bounds.
    pub fn item_at(&self, group: usize, item: usize) -> Result<&T, GridError> {
        self.collection.item_at(group, item)
    }

    pub fn total_positions(&self) -> usize {
        self.spans.total()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.total() == 0
    }

    /// Resolves a flat position in `O(log groups)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `position >= total_positions()`.
    pub fn locate(&self, position: usize) -> Result<Position, GridError> {
        let total = self.spans.total();
        if position >= total {
            return Err(GridError::out_of_range(IndexKind::Position, position, total));
        }
        let group = self.spans.lower_bound(position);
        let start = self.spans.prefix_sum(group);
        let items = self.collection.item_count(group)?;
        Ok(classify(group, position - start, items))
    }

    pub fn is_header(&self, position: usize) -> bool {
        self.locate(position).is_ok_and(|p| p.is_header())
    }

    pub fn is_footer(&self, position: usize) -> bool {
        self.locate(position).is_ok_and(|p| p.is_footer())
    }

    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `position >= total_positions()`.
    pub fn view_type(&self, position: usize) -> Result<ViewType, GridError> {
        self.locate(position).map(|p| p.view_type())
    }

    /// The caller-defined sub-type of `position`, from `options.view_variant`, or `0` when no
    /// hook is set.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `position >= total_positions()`.
    pub fn view_variant(&self, position: usize) -> Result<u32, GridError> {
        let pos = self.locate(position)?;
        let Some(hook) = &self.options.view_variant else {
            return Ok(0);
        };
        Ok(hook(pos, self.collection.group_at(pos.group())?))
    }

    /// Returns `columns` for headers and footers, `1` for items.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `position >= total_positions()`.
    pub fn span_width(&self, position: usize, columns: usize) -> Result<usize, GridError> {
        self.locate(position).map(|p| span_for(p, columns))
    }

    /// [`Self::span_width`] using the configured `columns_per_row`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `position >= total_positions()`.
    pub fn span_size(&self, position: usize) -> Result<usize, GridError> {
        self.span_width(position, self.options.columns())
    }

    /// First flat position of `group` (its header).
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `group >= group_count()`.
    pub fn header_position(&self, group: usize) -> Result<usize, GridError> {
        let count = self.collection.group_count();
        if group >= count {
            return Err(GridError::out_of_range(IndexKind::Group, group, count));
        }
        Ok(self.spans.prefix_sum(group))
    }

    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if either index is out of bounds.
    pub fn item_position(&self, group: usize, item: usize) -> Result<usize, GridError> {
        let header = self.header_position(group)?;
        let items = self.collection.item_count(group)?;
        if item >= items {
            return Err(GridError::out_of_range(IndexKind::Item, item, items));
        }
        Ok(header + 1 + item)
    }

    /// Returns `None` when the group exists but has no footer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `group >= group_count()`.
    pub fn footer_position(&self, group: usize) -> Result<Option<usize>, GridError> {
        let header = self.header_position(group)?;
        let g = self.collection.group_at(group)?;
        let footer = self.options.footer_for(group, g);
        Ok(footer.then(|| header + 1 + g.len()))
    }

    /// Grid rows needed at the configured column count.
    pub fn row_count(&self) -> usize {
        self.mapper().row_count(self.options.columns())
    }

    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `position >= total_positions()`.
    pub fn placement(&self, position: usize) -> Result<CellPlacement, GridError> {
        self.mapper().placement(position, self.options.columns())
    }

    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `row >= row_count()`.
    pub fn row_span(&self, row: usize) -> Result<RowSpan, GridError> {
        self.mapper().row_span(row, self.options.columns())
    }

    /// Classifies `position` and dispatches it to the matching `binder` callback.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `position >= total_positions()`. The binder
    /// is not called in that case.
    pub fn bind<B: Binder<T> + ?Sized>(
        &self,
        position: usize,
        binder: &mut B,
    ) -> Result<Position, GridError> {
        let pos = self.locate(position)?;
        match pos {
            Position::Header { group } => {
                binder.bind_header(group, self.collection.group_at(group)?);
            }
            Position::Item { group, item } => {
                binder.bind_item(group, item, self.collection.item_at(group, item)?);
            }
            Position::Footer { group } => {
                binder.bind_footer(group, self.collection.group_at(group)?);
            }
        }
        Ok(pos)
    }

    /// Binds every position in `start..end`, clamped to `total_positions()`, in order.
    ///
    /// Returns the number of positions bound.
    pub fn bind_range<B: Binder<T> + ?Sized>(
        &self,
        start: usize,
        end: usize,
        binder: &mut B,
    ) -> usize {
        let total = self.spans.total();
        if end > total {
            gwarn!(end, total, "GroupedGrid::bind_range: end clamped to total positions");
        }
        let end = end.min(total);
        gtrace!(start, end, "GroupedGrid::bind_range");
        let mut bound = 0usize;
        for position in start..end {
            if self.bind(position, binder).is_ok() {
                bound += 1;
            }
        }
        bound
    }

    /// Visits every flat position with its classification, in order.
    pub fn for_each_position(&self, mut f: impl FnMut(usize, Position)) {
        let mut position = 0usize;
        for (group, g) in self.collection.iter().enumerate() {
            f(position, Position::Header { group });
            position += 1;
            for item in 0..g.len() {
                f(position, Position::Item { group, item });
                position += 1;
            }
            if self.options.footer_for(group, g) {
                f(position, Position::Footer { group });
                position += 1;
            }
        }
    }
}
