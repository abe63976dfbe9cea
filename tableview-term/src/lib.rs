//! Terminal rendering for TableView.
//!
//! [`TerminalGrid`] implements the grid capability on top of plain styled
//! text lines, [`draw`] puts those lines on a crossterm terminal, and
//! [`DataFile`] loads rows and columns for the `tableview` viewer.

pub mod data;
pub mod draw;
pub mod error;
pub mod grid;
pub mod line;
pub mod logging;

pub use data::DataFile;
pub use error::ViewerError;
pub use grid::{GridKey, TerminalGrid, CELL_PX};
pub use line::{Span, StyledLine};
