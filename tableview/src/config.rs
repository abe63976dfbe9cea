//! User configuration file.
//!
//! A JSON document with any subset of the table defaults:
//!
//! ```json
//! {
//!     "headerBgColor": "#111111",
//!     "headerTextColor": "white",
//!     "initialPageSize": 10,
//!     "pageSizeOptions": [10, 25, 50],
//!     "checkboxSelection": true,
//!     "sortingOrder": ["desc", "asc"],
//!     "narrowBreakpoint": 480
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use gridstyle::{Color, ParseError};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::SortDirection;
use crate::props::TableViewProps;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "tableview";
const APPLICATION: &str = "tableview";
const FILE_NAME: &str = "tableview.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid color {value:?}: {source}")]
    InvalidColor {
        value: String,
        #[source]
        source: ParseError,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TableViewConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_bg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_page_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size_options: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkbox_selection: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorting_order: Option<Vec<SortDirection>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrow_breakpoint: Option<u16>,
}

impl TableViewConfig {
    /// Platform config location, e.g. `~/.config/tableview/tableview.json` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .map(|dirs| dirs.config_dir().join(FILE_NAME))
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded table config from {}", path.display());
        Self::from_json(&json)
    }

    /// Load the file at the default location, or the empty config if there is none.
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Write the configured values over `props`.
    pub fn apply_to(&self, mut props: TableViewProps) -> Result<TableViewProps, ConfigError> {
        if let Some(value) = &self.header_bg_color {
            props.theme.header_bg = parse_color(value)?;
        }
        if let Some(value) = &self.header_text_color {
            props.theme.header_text = parse_color(value)?;
        }
        if let Some(size) = self.initial_page_size {
            props.initial_page_size = size;
        }
        if let Some(options) = &self.page_size_options {
            props.page_size_options = options.clone();
        }
        if let Some(enabled) = self.checkbox_selection {
            props.checkbox_selection = enabled;
        }
        if let Some(order) = &self.sorting_order {
            props.sorting_order = order.clone();
        }
        if let Some(breakpoint) = self.narrow_breakpoint {
            props.theme.metrics.narrow_breakpoint = breakpoint;
        }
        Ok(props)
    }
}

fn parse_color(value: &str) -> Result<Color, ConfigError> {
    value.parse().map_err(|source| ConfigError::InvalidColor {
        value: value.to_string(),
        source,
    })
}
