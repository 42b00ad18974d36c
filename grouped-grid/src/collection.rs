use alloc::string::String;
use alloc::vec::Vec;
use core::slice;

use crate::error::{GridError, IndexKind};
use crate::types::Item;

/// A titled, append-only run of items rendered as one header followed by its items.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group<T = Item> {
    title: String,
    items: Vec<T>,
}

impl<T> Group<T> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn with_items(title: impl Into<String>, items: impl IntoIterator<Item = T>) -> Self {
        Self {
            title: title.into(),
            items: items.into_iter().collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }
}

impl<T> Extend<T> for Group<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

/// An ordered sequence of groups. Group order defines flat-position order.
///
/// Construction is append-only; a loaded collection is replaced wholesale through
/// [`crate::GroupedGrid::replace_all`] rather than mutated in place.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GroupedCollection<T = Item> {
    groups: Vec<Group<T>>,
}

impl<T> Default for GroupedCollection<T> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<T> GroupedCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the number of items in `group`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `group >= group_count()`.
    pub fn item_count(&self, group: usize) -> Result<usize, GridError> {
        self.group_at(group).map(Group::len)
    }

    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `group >= group_count()`.
    pub fn group_at(&self, group: usize) -> Result<&Group<T>, GridError> {
        self.groups
            .get(group)
            .ok_or_else(|| GridError::out_of_range(IndexKind::Group, group, self.groups.len()))
    }

    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if either index is out of bounds. The group index
    /// is checked first.
    pub fn item_at(&self, group: usize, item: usize) -> Result<&T, GridError> {
        let g = self.group_at(group)?;
        g.get(item)
            .ok_or_else(|| GridError::out_of_range(IndexKind::Item, item, g.len()))
    }

    pub fn push(&mut self, group: Group<T>) {
        self.groups.push(group);
    }

    pub fn iter(&self) -> slice::Iter<'_, Group<T>> {
        self.groups.iter()
    }

    pub fn groups(&self) -> &[Group<T>] {
        &self.groups
    }

    /// Total number of items across all groups (headers excluded).
    pub fn total_items(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    pub fn into_groups(self) -> Vec<Group<T>> {
        self.groups
    }
}

impl<T> From<Vec<Group<T>>> for GroupedCollection<T> {
    fn from(groups: Vec<Group<T>>) -> Self {
        Self { groups }
    }
}

impl<T> FromIterator<Group<T>> for GroupedCollection<T> {
    fn from_iter<I: IntoIterator<Item = Group<T>>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a GroupedCollection<T> {
    type Item = &'a Group<T>;
    type IntoIter = slice::Iter<'a, Group<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
