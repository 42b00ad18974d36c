//! Adapter utilities for the `grouped-grid` crate.
//!
//! The `grouped-grid` crate is UI-agnostic and focuses on position mapping. This crate provides
//! a small, framework-neutral screen controller that hosts typically need:
//!
//! - Explicit `init`/`refresh` entry points instead of lifecycle hooks
//! - A [`Surface`] trait for the "data changed" notification and column count
//! - Row-based binding so a surface can bind only what is on screen
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod fixtures;
mod screen;
mod state;
mod surface;


pub use fixtures::{SAMPLE_ICON, sample_groups};
pub use screen::Screen;
pub use state::ScreenState;
pub use surface::Surface;
