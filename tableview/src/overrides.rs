//! Passthrough options forwarded to the grid after all explicit props.

use std::sync::Arc;

use gridstyle::StyleSheet;

use crate::model::{ColumnSpec, PaginationModel, Row, SortDirection};
use crate::widget::{Density, GridConfig};

/// Grid options a caller can force onto the widget.
///
/// Every field left as `None` keeps the value TableView derived. A `Some`
/// value is written over the derived one, so a passthrough always wins
/// against an explicit prop or default of the same name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridOverrides {
    pub rows: Option<Arc<[Row]>>,
    pub columns: Option<Arc<[ColumnSpec]>>,
    pub pagination_model: Option<PaginationModel>,
    pub page_size_options: Option<Vec<usize>>,
    pub checkbox_selection: Option<bool>,
    pub disable_row_selection_on_click: Option<bool>,
    pub sorting_order: Option<Vec<SortDirection>>,
    pub loading: Option<bool>,
    pub auto_height: Option<bool>,
    pub pagination: Option<bool>,
    pub density: Option<Density>,
    pub hide_footer: Option<bool>,
    pub row_height: Option<u16>,
    pub column_header_height: Option<u16>,
    /// Replaces the whole style sheet.
    pub style: Option<StyleSheet>,
}

impl GridOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(mut self, rows: impl Into<Arc<[Row]>>) -> Self {
        self.rows = Some(rows.into());
        self
    }

    pub fn columns(mut self, columns: impl Into<Arc<[ColumnSpec]>>) -> Self {
        self.columns = Some(columns.into());
        self
    }

    pub fn pagination_model(mut self, model: PaginationModel) -> Self {
        self.pagination_model = Some(model);
        self
    }

    pub fn page_size_options(mut self, options: Vec<usize>) -> Self {
        self.page_size_options = Some(options);
        self
    }

    pub fn checkbox_selection(mut self, enabled: bool) -> Self {
        self.checkbox_selection = Some(enabled);
        self
    }

    pub fn disable_row_selection_on_click(mut self, disabled: bool) -> Self {
        self.disable_row_selection_on_click = Some(disabled);
        self
    }

    pub fn sorting_order(mut self, order: Vec<SortDirection>) -> Self {
        self.sorting_order = Some(order);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = Some(loading);
        self
    }

    pub fn auto_height(mut self, auto_height: bool) -> Self {
        self.auto_height = Some(auto_height);
        self
    }

    /// The only way to turn pagination off.
    pub fn pagination(mut self, enabled: bool) -> Self {
        self.pagination = Some(enabled);
        self
    }

    pub fn density(mut self, density: Density) -> Self {
        self.density = Some(density);
        self
    }

    pub fn hide_footer(mut self, hide: bool) -> Self {
        self.hide_footer = Some(hide);
        self
    }

    pub fn row_height(mut self, height: u16) -> Self {
        self.row_height = Some(height);
        self
    }

    pub fn column_header_height(mut self, height: u16) -> Self {
        self.column_header_height = Some(height);
        self
    }

    pub fn style(mut self, style: StyleSheet) -> Self {
        self.style = Some(style);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Write every set option over `config`.
    pub fn apply(&self, config: &mut GridConfig) {
        macro_rules! overwrite {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = &self.$field {
                        config.$field = value.clone();
                    }
                )*
            };
        }

        overwrite!(
            rows,
            columns,
            pagination_model,
            page_size_options,
            checkbox_selection,
            disable_row_selection_on_click,
            sorting_order,
            loading,
            auto_height,
            pagination,
            density,
            hide_footer,
            style,
        );

        if self.row_height.is_some() {
            config.row_height = self.row_height;
        }
        if self.column_header_height.is_some() {
            config.column_header_height = self.column_header_height;
        }
    }
}
