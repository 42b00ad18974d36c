use crate::collection::{Group, GroupedCollection};
use crate::error::{GridError, IndexKind};
use crate::options::FooterPredicate;
use crate::types::{CellPlacement, Item, Position, RowSpan, ViewType};

/// A stateless view that maps flat positions onto a [`GroupedCollection`].
///
/// Group `g` with `n` items occupies `n + 1` consecutive flat positions: its header, then its
/// items in order (plus one footer position when a footer predicate says so). The first group
/// starts at position 0 and each group starts right after the previous one ends.
///
/// Every query walks the groups from the start, so there is no cached state that could go
/// stale. For `O(log groups)` lookups over an owned collection, use [`crate::GroupedGrid`].
pub struct PositionMapper<'a, T = Item> {
    groups: &'a GroupedCollection<T>,
    has_footer: Option<&'a FooterPredicate<T>>,
}

impl<T> Clone for PositionMapper<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PositionMapper<'_, T> {}

impl<T> core::fmt::Debug for PositionMapper<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PositionMapper")
            .field("group_count", &self.groups.group_count())
            .field("has_footer", &self.has_footer.is_some())
            .finish()
    }
}

/// A group's slot in the flat position space.
struct Slot {
    index: usize,
    start: usize,
    items: usize,
    footer: bool,
}

impl Slot {
    fn span(&self) -> usize {
        1 + self.items + usize::from(self.footer)
    }

    fn rows(&self, columns: usize) -> usize {
        1 + self.items.div_ceil(columns) + usize::from(self.footer)
    }
}

impl<'a, T> PositionMapper<'a, T> {
    pub fn new(groups: &'a GroupedCollection<T>) -> Self {
        Self {
            groups,
            has_footer: None,
        }
    }

    pub fn with_footers(
        groups: &'a GroupedCollection<T>,
        has_footer: &'a FooterPredicate<T>,
    ) -> Self {
        Self {
            groups,
            has_footer: Some(has_footer),
        }
    }

    pub(crate) fn from_parts(
        groups: &'a GroupedCollection<T>,
        has_footer: Option<&'a FooterPredicate<T>>,
    ) -> Self {
        Self { groups, has_footer }
    }

    pub fn collection(&self) -> &'a GroupedCollection<T> {
        self.groups
    }

    pub(crate) fn has_footer(&self, index: usize, group: &Group<T>) -> bool {
        self.has_footer.is_some_and(|f| f(index, group))
    }

    /// Number of flat positions group `index` occupies (header + items + optional footer).
    pub(crate) fn group_span(&self, index: usize, group: &Group<T>) -> usize {
        1 + group.len() + usize::from(self.has_footer(index, group))
    }

    fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        let mut start = 0usize;
        self.groups.iter().enumerate().map(move |(index, group)| {
            let slot = Slot {
                index,
                start,
                items: group.len(),
                footer: self.has_footer(index, group),
            };
            start += slot.span();
            slot
        })
    }

    fn slot(&self, group: usize) -> Result<Slot, GridError> {
        let count = self.groups.group_count();
        self.slots()
            .nth(group)
            .ok_or_else(|| GridError::out_of_range(IndexKind::Group, group, count))
    }

    pub fn total_positions(&self) -> usize {
        self.slots().map(|s| s.span()).sum()
    }

    /// Resolves a flat position to a header, item, or footer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `position >= total_positions()`.
    pub fn locate(&self, position: usize) -> Result<Position, GridError> {
        let mut total = 0usize;
        for slot in self.slots() {
            let span = slot.span();
            if position < slot.start + span {
                return Ok(classify(slot.index, position - slot.start, slot.items));
            }
            total = slot.start + span;
        }
        Err(GridError::out_of_range(IndexKind::Position, position, total))
    }

    /// `true` iff `position` is the first position of some group. Out-of-range positions are
    /// not headers.
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

    /// Returns `columns` for full-row positions (headers and footers) and `1` for items.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `position >= total_positions()`.
    pub fn span_width(&self, position: usize, columns: usize) -> Result<usize, GridError> {
        self.locate(position).map(|p| span_for(p, columns))
    }

    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `group >= group_count()`.
    pub fn header_position(&self, group: usize) -> Result<usize, GridError> {
        self.slot(group).map(|s| s.start)
    }

    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if either index is out of bounds.
    pub fn item_position(&self, group: usize, item: usize) -> Result<usize, GridError> {
        let slot = self.slot(group)?;
        if item >= slot.items {
            return Err(GridError::out_of_range(IndexKind::Item, item, slot.items));
        }
        Ok(slot.start + 1 + item)
    }

    /// Returns `None` when the group exists but has no footer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `group >= group_count()`.
    pub fn footer_position(&self, group: usize) -> Result<Option<usize>, GridError> {
        let slot = self.slot(group)?;
        Ok(slot.footer.then(|| slot.start + 1 + slot.items))
    }

    /// Number of rows a fixed-column grid needs to lay out every position.
    pub fn row_count(&self, columns: usize) -> usize {
        let columns = columns.max(1);
        self.slots().map(|s| s.rows(columns)).sum()
    }

    /// Places `position` in a grid of `columns` columns.
    ///
    /// Full-row cells always start a fresh row, so each group begins on its own row and its
    /// items fill rows left to right.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `position >= total_positions()`.
    pub fn placement(&self, position: usize, columns: usize) -> Result<CellPlacement, GridError> {
        let columns = columns.max(1);
        let mut row = 0usize;
        let mut total = 0usize;
        for slot in self.slots() {
            let span = slot.span();
            if position < slot.start + span {
                let placement = match classify(slot.index, position - slot.start, slot.items) {
                    Position::Header { .. } => CellPlacement {
                        row,
                        column: 0,
                        span: columns,
                    },
                    Position::Item { item, .. } => CellPlacement {
                        row: row + 1 + item / columns,
                        column: item % columns,
                        span: 1,
                    },
                    Position::Footer { .. } => CellPlacement {
                        row: row + 1 + slot.items.div_ceil(columns),
                        column: 0,
                        span: columns,
                    },
                };
                return Ok(placement);
            }
            row += slot.rows(columns);
            total = slot.start + span;
        }
        Err(GridError::out_of_range(IndexKind::Position, position, total))
    }

    /// Returns the flat positions laid out on grid row `row`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `row >= row_count(columns)`.
    pub fn row_span(&self, row: usize, columns: usize) -> Result<RowSpan, GridError> {
        let columns = columns.max(1);
        let mut base = 0usize;
        for slot in self.slots() {
            let rows = slot.rows(columns);
            if row < base + rows {
                let local = row - base;
                let item_rows = slot.items.div_ceil(columns);
                let (start, end) = if local == 0 {
                    (slot.start, slot.start + 1)
                } else if local <= item_rows {
                    let first = (local - 1) * columns;
                    let last = (first + columns).min(slot.items);
                    (slot.start + 1 + first, slot.start + 1 + last)
                } else {
                    let footer = slot.start + 1 + slot.items;
                    (footer, footer + 1)
                };
                return Ok(RowSpan {
                    row,
                    start_position: start,
                    end_position: end,
                });
            }
            base += rows;
        }
        Err(GridError::out_of_range(IndexKind::Row, row, base))
    }
}

/// Classifies `offset` within a group of `items` items.
pub(crate) fn classify(group: usize, offset: usize, items: usize) -> Position {
    match offset {
        0 => Position::Header { group },
        k if k <= items => Position::Item {
            group,
            item: k - 1,
        },
        _ => Position::Footer { group },
    }
}

pub(crate) fn span_for(position: Position, columns: usize) -> usize {
    if position.is_full_row() { columns } else { 1 }
}
