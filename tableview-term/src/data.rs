use std::fs;
use std::path::Path;

use serde::Deserialize;
use tableview::{ColumnSpec, Row};

use crate::error::ViewerError;

/// Rows and columns for the viewer.
///
/// ```json
/// {
///     "columns": [{ "field": "name", "headerName": "Name" }],
///     "rows": [{ "id": 1, "name": "A" }]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataFile {
    pub columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub rows: Option<Vec<Row>>,
}

impl DataFile {
    pub fn from_json(json: &str) -> Result<Self, ViewerError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let json = fs::read_to_string(path).map_err(|source| ViewerError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
