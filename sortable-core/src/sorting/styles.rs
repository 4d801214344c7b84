use serde::{Deserialize, Serialize};

use super::direction::SortDirection;

pub const DEFAULT_ASC_CLASS: &str = "sort-asc";
pub const DEFAULT_DESC_CLASS: &str = "sort-desc";
pub const DEFAULT_NONE_CLASS: &str = "sort-none";

/// Class every sortable `<th>` carries in addition to its sort-state class.
pub const DEFAULT_HEADER_CLASS: &str = "sortable-col";

/// CSS classes applied for each sort state.
///
/// Hosts build this once at startup (see `sortable-config`) and hand it to
/// every render through [`crate::RenderContext`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortStyles {
    /// Class for the column currently sorted ascending.
    pub asc_class: String,
    /// Class for the column currently sorted descending.
    pub desc_class: String,
    /// Class for every column that is not the active sort field.
    pub none_class: String,
}

impl Default for SortStyles {
    fn default() -> Self {
        Self {
            asc_class: DEFAULT_ASC_CLASS.to_string(),
            desc_class: DEFAULT_DESC_CLASS.to_string(),
            none_class: DEFAULT_NONE_CLASS.to_string(),
        }
    }
}

impl SortStyles {
    /// Class for a column, given the direction it is sorted by, or `None`
    /// when it is not the active sort field.
    pub fn class_for(&self, direction: Option<SortDirection>) -> &str {
        match direction {
            Some(direction) => direction.css_class(self),
            None => &self.none_class,
        }
    }
}
