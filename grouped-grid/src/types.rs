use alloc::string::String;

/// Opaque handle to an image resource owned by the host UI (e.g. a drawable or texture id).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceId(pub u32);

/// A selectable grid cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub title: String,
    pub image: ResourceId,
}

impl Item {
    pub fn new(title: impl Into<String>, image: ResourceId) -> Self {
        Self {
            title: title.into(),
            image,
        }
    }
}

/// A classified flat position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    Header { group: usize },
    Item { group: usize, item: usize },
    Footer { group: usize },
}

impl Position {
    pub fn group(&self) -> usize {
        match *self {
            Self::Header { group } | Self::Item { group, .. } | Self::Footer { group } => group,
        }
    }

    pub fn item(&self) -> Option<usize> {
        match *self {
            Self::Item { item, .. } => Some(item),
            _ => None,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Self::Header { .. })
    }

    pub fn is_footer(&self) -> bool {
        matches!(self, Self::Footer { .. })
    }

    pub fn view_type(&self) -> ViewType {
        match self {
            Self::Header { .. } => ViewType::Header,
            Self::Item { .. } => ViewType::Item,
            Self::Footer { .. } => ViewType::Footer,
        }
    }

    /// Whether this position occupies a whole grid row.
    pub fn is_full_row(&self) -> bool {
        !matches!(self, Self::Item { .. })
    }
}

/// The kind of view a surface should create for a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewType {
    Header,
    Item,
    Footer,
}

/// The flat positions laid out on one grid row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowSpan {
    pub row: usize,
    pub start_position: usize,
    pub end_position: usize, // exclusive
}

impl RowSpan {
    pub fn len(&self) -> usize {
        self.end_position.saturating_sub(self.start_position)
    }

    pub fn is_empty(&self) -> bool {
        self.start_position >= self.end_position
    }

    pub fn contains(&self, position: usize) -> bool {
        (self.start_position..self.end_position).contains(&position)
    }
}

/// Where a flat position lands in a fixed-column grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPlacement {
    pub row: usize,
    pub column: usize,
    /// Number of columns the cell occupies.
    pub span: usize,
}
