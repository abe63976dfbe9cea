use serde::{Deserialize, Serialize};

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Column descriptor.
///
/// Maps a row field to a displayed column. Only `field` is required; the
/// header label falls back to the field key.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     ColumnSpec::new("id").width(6),
///     ColumnSpec::new("name").header("Name"),
///     ColumnSpec::new("status").align(Alignment::Center).sortable(false),
/// ];
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    /// Row field this column displays
    pub field: String,
    /// Header label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_name: Option<String>,
    /// Fixed width in terminal columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,
    /// Whether the column can be sorted
    #[serde(default = "default_sortable")]
    pub sortable: bool,
    /// Horizontal alignment
    #[serde(default)]
    pub align: Alignment,
}

fn default_sortable() -> bool {
    true
}

impl ColumnSpec {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            header_name: None,
            width: None,
            sortable: true,
            align: Alignment::Left,
        }
    }

    pub fn header(mut self, name: impl Into<String>) -> Self {
        self.header_name = Some(name.into());
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn header_label(&self) -> &str {
        self.header_name.as_deref().unwrap_or(&self.field)
    }
}
