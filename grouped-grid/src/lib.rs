//! A headless grouped grid engine.
//!
//! For screen-level wiring (init/refresh entry points, rendering surfaces), see the
//! `grouped-grid-adapter` crate.
//!
//! This crate maps a single flat scroll position space onto titled groups of items. Each
//! group is laid out as one full-row header followed by its items in a fixed-column grid:
//! - total flat position count (one header + `n` items per group)
//! - position → header / (group, item) classification, and the inverse
//! - span widths so a grid layout gives headers a whole row
//! - row placement for fixed-column grids
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the column count of its grid
//! - renderers for headers and items (see [`Binder`])
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod bind;
mod collection;
mod error;
mod fenwick;
mod grid;
mod mapper;
mod options;
mod types;


pub use bind::Binder;
pub use collection::{Group, GroupedCollection};
pub use error::{GridError, IndexKind};
pub use grid::GroupedGrid;
pub use mapper::PositionMapper;
pub use options::{
    DEFAULT_COLUMNS_PER_ROW, FooterPredicate, GroupedGridOptions, OnChangeCallback, ViewVariant,
};
pub use types::{CellPlacement, Item, Position, ResourceId, RowSpan, ViewType};
