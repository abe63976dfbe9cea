//! Construction inputs of a TableView.

use std::fmt;
use std::sync::Arc;

use gridstyle::{Color, StyleBlock};

use crate::model::{ColumnSpec, Row, SelectionModel, SortDirection};
use crate::overrides::GridOverrides;
use crate::theme::ThemeOptions;

pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 20];

/// Receives the selection reported by the grid widget.
pub type SelectionCallback = Box<dyn FnMut(SelectionModel)>;

/// Props for [`TableView`](crate::TableView).
///
/// `TableViewProps::new(columns)` gives every default; builder methods
/// override individual inputs. Values are forwarded as given: a page size
/// outside `page_size_options`, an empty column list or a zero page size are
/// not rejected.
pub struct TableViewProps {
    /// Row records. `None` renders an empty grid.
    pub rows: Option<Arc<[Row]>>,
    pub columns: Arc<[ColumnSpec]>,
    pub initial_page_size: usize,
    pub page_size_options: Vec<usize>,
    pub checkbox_selection: bool,
    pub disable_row_selection_on_click: bool,
    pub sorting_order: Vec<SortDirection>,
    pub loading: bool,
    pub auto_height: bool,
    pub theme: ThemeOptions,
    /// Container style, merged over the full-width default.
    pub sx: StyleBlock,
    pub on_row_selection_model_change: Option<SelectionCallback>,
    /// Forwarded to the grid after everything else.
    pub passthrough: GridOverrides,
}

impl TableViewProps {
    pub fn new(columns: impl Into<Arc<[ColumnSpec]>>) -> Self {
        Self {
            rows: None,
            columns: columns.into(),
            initial_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            checkbox_selection: false,
            disable_row_selection_on_click: false,
            sorting_order: SortDirection::DEFAULT_ORDER.to_vec(),
            loading: false,
            auto_height: true,
            theme: ThemeOptions::default(),
            sx: StyleBlock::new(),
            on_row_selection_model_change: None,
            passthrough: GridOverrides::default(),
        }
    }

    pub fn rows(mut self, rows: impl Into<Arc<[Row]>>) -> Self {
        self.rows = Some(rows.into());
        self
    }

    pub fn initial_page_size(mut self, page_size: usize) -> Self {
        self.initial_page_size = page_size;
        self
    }

    pub fn page_size_options(mut self, options: Vec<usize>) -> Self {
        self.page_size_options = options;
        self
    }

    pub fn checkbox_selection(mut self, enabled: bool) -> Self {
        self.checkbox_selection = enabled;
        self
    }

    pub fn disable_row_selection_on_click(mut self, disabled: bool) -> Self {
        self.disable_row_selection_on_click = disabled;
        self
    }

    pub fn sorting_order(mut self, order: Vec<SortDirection>) -> Self {
        self.sorting_order = order;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn auto_height(mut self, auto_height: bool) -> Self {
        self.auto_height = auto_height;
        self
    }

    pub fn theme(mut self, theme: ThemeOptions) -> Self {
        self.theme = theme;
        self
    }

    pub fn header_bg_color(mut self, color: Color) -> Self {
        self.theme.header_bg = color;
        self
    }

    pub fn header_text_color(mut self, color: Color) -> Self {
        self.theme.header_text = color;
        self
    }

    pub fn sx(mut self, style: StyleBlock) -> Self {
        self.sx = style;
        self
    }

    pub fn on_row_selection_model_change(
        mut self,
        callback: impl FnMut(SelectionModel) + 'static,
    ) -> Self {
        self.on_row_selection_model_change = Some(Box::new(callback));
        self
    }

    pub fn passthrough(mut self, overrides: GridOverrides) -> Self {
        self.passthrough = overrides;
        self
    }
}

impl fmt::Debug for TableViewProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableViewProps")
            .field("rows", &self.rows.as_ref().map(|r| r.len()))
            .field("columns", &self.columns)
            .field("initial_page_size", &self.initial_page_size)
            .field("page_size_options", &self.page_size_options)
            .field("checkbox_selection", &self.checkbox_selection)
            .field(
                "disable_row_selection_on_click",
                &self.disable_row_selection_on_click,
            )
            .field("sorting_order", &self.sorting_order)
            .field("loading", &self.loading)
            .field("auto_height", &self.auto_height)
            .field("theme", &self.theme)
            .field("sx", &self.sx)
            .field(
                "on_row_selection_model_change",
                &self.on_row_selection_model_change.is_some(),
            )
            .field("passthrough", &self.passthrough)
            .finish()
    }
}
