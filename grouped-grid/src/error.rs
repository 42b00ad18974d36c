use core::fmt;

/// Which index space an out-of-range argument belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndexKind {
    Group,
    Item,
    Position,
    Row,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Group => "group",
            Self::Item => "item",
            Self::Position => "position",
            Self::Row => "row",
        })
    }
}

/// Errors returned by index-taking accessors.
///
/// Every out-of-range argument is a caller bug, so there is exactly one kind. Accessors never
/// substitute a default value for an invalid index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("{kind} index {index} out of range (len {len})")]
    IndexOutOfRange {
        kind: IndexKind,
        index: usize,
        len: usize,
    },
}

impl GridError {
    pub(crate) fn out_of_range(kind: IndexKind, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { kind, index, len }
    }

    pub fn kind(&self) -> IndexKind {
        match self {
            Self::IndexOutOfRange { kind, .. } => *kind,
        }
    }
}
