//! The grid capability a TableView drives.
//!
//! A grid widget receives a complete [`GridConfig`] through [`GridWidget::render`]
//! on first display and [`GridWidget::update`] afterwards. User interaction
//! comes back as [`GridEvent`]s which the host feeds into
//! [`TableView::handle_event`](crate::TableView::handle_event).

use std::sync::Arc;

use gridstyle::StyleSheet;

use crate::model::{ColumnSpec, PaginationModel, Row, SelectionModel, SortDirection};

/// Row spacing preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Density {
    Compact,
    #[default]
    Standard,
    Comfortable,
}

/// State the widget starts from before any controlled model applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialState {
    pub page_size: usize,
}

/// Everything a grid widget needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    pub rows: Arc<[Row]>,
    pub columns: Arc<[ColumnSpec]>,
    pub initial_state: InitialState,
    pub pagination_model: PaginationModel,
    pub page_size_options: Vec<usize>,
    pub checkbox_selection: bool,
    pub disable_row_selection_on_click: bool,
    pub sorting_order: Vec<SortDirection>,
    pub loading: bool,
    pub auto_height: bool,
    pub pagination: bool,
    pub density: Density,
    pub hide_footer: bool,
    pub row_height: Option<u16>,
    pub column_header_height: Option<u16>,
    pub style: StyleSheet,
}

impl GridConfig {
    /// Rows on the current page.
    pub fn page_rows(&self) -> &[Row] {
        if !self.pagination {
            return &self.rows;
        }
        &self.rows[self.pagination_model.row_range(self.rows.len())]
    }
}

/// User interaction reported by a grid widget.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    PaginationChanged(PaginationModel),
    SelectionChanged(SelectionModel),
}

/// A tabular rendering surface.
pub trait GridWidget {
    /// First display with the given configuration.
    fn render(&mut self, config: &GridConfig);

    /// Subsequent display after props or state changed.
    fn update(&mut self, config: &GridConfig) {
        self.render(config);
    }
}

impl<W: GridWidget + ?Sized> GridWidget for Box<W> {
    fn render(&mut self, config: &GridConfig) {
        (**self).render(config);
    }

    fn update(&mut self, config: &GridConfig) {
        (**self).update(config);
    }
}
