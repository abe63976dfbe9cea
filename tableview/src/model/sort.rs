use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Order a grid cycles through when a sortable header is activated.
    pub const DEFAULT_ORDER: [SortDirection; 2] =
        [SortDirection::Ascending, SortDirection::Descending];
}
