use crate::collection::Group;
use crate::types::Item;

/// Caller-supplied renderer invoked once per bound position.
///
/// The grid only hands out read-only data; producing a visual representation is up to the
/// implementor.
pub trait Binder<T = Item> {
    fn bind_header(&mut self, group_index: usize, group: &Group<T>);

    fn bind_item(&mut self, group_index: usize, item_index: usize, item: &T);

    /// Called for footer positions. Only reachable when a footer predicate is configured.
    fn bind_footer(&mut self, group_index: usize, group: &Group<T>) {
        let _ = (group_index, group);
    }
}

impl<T, B: Binder<T> + ?Sized> Binder<T> for &mut B {
    fn bind_header(&mut self, group_index: usize, group: &Group<T>) {
        (**self).bind_header(group_index, group);
    }

    fn bind_item(&mut self, group_index: usize, item_index: usize, item: &T) {
        (**self).bind_item(group_index, item_index, item);
    }

    fn bind_footer(&mut self, group_index: usize, group: &Group<T>) {
        (**self).bind_footer(group_index, group);
    }
}
