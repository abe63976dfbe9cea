//! TableView - a themed, paginated table over a pluggable grid widget.
//!
//! The component owns the pagination model, derives the full grid
//! configuration from its props and a fixed set of presentation rules,
//! and bridges pagination and selection events between the widget and
//! the caller.
//!
//! # Example
//!
//! ```ignore
//! use tableview::prelude::*;
//!
//! let props = TableViewProps::new(vec![ColumnSpec::new("name")])
//!     .rows(vec![Row::new().with("id", 1).with("name", "A")])
//!     .on_row_selection_model_change(|selection| {
//!         log::info!("{} rows selected", selection.len());
//!     });
//!
//! let mut view = TableView::new(props);
//! view.render(&mut widget);
//! ```

pub mod config;
pub mod model;
pub mod overrides;
pub mod props;
pub mod theme;
pub mod view;
pub mod widget;

pub use config::{ConfigError, TableViewConfig};
pub use model::{Alignment, ColumnSpec, PaginationModel, Row, RowId, SelectionModel, SortDirection};
pub use overrides::GridOverrides;
pub use props::{SelectionCallback, TableViewProps};
pub use theme::{ThemeMetrics, ThemeOptions};
pub use view::TableView;
pub use widget::{Density, GridConfig, GridEvent, GridWidget, InitialState};

pub mod prelude {
    pub use crate::{
        ColumnSpec, GridConfig, GridEvent, GridOverrides, GridWidget, PaginationModel, Row,
        RowId, SelectionModel, SortDirection, TableView, TableViewProps, ThemeOptions,
    };
}
