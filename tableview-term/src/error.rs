use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid data file: {0}")]
    Data(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] tableview::ConfigError),
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
    #[error("usage: tableview <data.json> [--config <file.json>]")]
    Usage,
}
