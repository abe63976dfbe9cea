//! Data handed to the grid: rows, columns, and the pagination,
//! selection and sort models.

mod column;
mod pagination;
mod row;
mod selection;
mod sort;

pub use column::{Alignment, ColumnSpec};
pub use pagination::PaginationModel;
pub use row::{Row, RowId};
pub use selection::SelectionModel;
pub use sort::SortDirection;
