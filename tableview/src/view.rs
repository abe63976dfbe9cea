use std::sync::Arc;

use gridstyle::{Length, StyleBlock};
use log::debug;

use crate::model::{PaginationModel, Row};
use crate::props::TableViewProps;
use crate::widget::{GridConfig, GridEvent, GridWidget, InitialState};

/// A themed, paginated table.
///
/// Owns the pagination model for its whole lifetime: it starts at page 0
/// with the initial page size, survives prop changes, and is only replaced
/// by pagination events coming back from the widget. Selection is owned by
/// the widget and merely forwarded to the caller.
pub struct TableView {
    props: TableViewProps,
    pagination: PaginationModel,
    mounted: bool,
}

impl TableView {
    /// Pagination cannot be switched off through props; see [`GridOverrides::pagination`](crate::GridOverrides::pagination).
    pub const PAGINATION: bool = true;

    pub fn new(props: TableViewProps) -> Self {
        let pagination = PaginationModel::new(props.initial_page_size);
        Self {
            props,
            pagination,
            mounted: false,
        }
    }

    pub fn props(&self) -> &TableViewProps {
        &self.props
    }

    /// Swap in new props. Pagination state is kept.
    pub fn set_props(&mut self, props: TableViewProps) {
        self.props = props;
    }

    pub fn pagination(&self) -> PaginationModel {
        self.pagination
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Full-width box with the caller's container style on top.
    pub fn container_style(&self) -> StyleBlock {
        let mut style = StyleBlock::new().width(Length::percent(100.0));
        style.merge(&self.props.sx);
        style
    }

    /// Configuration handed to the widget on the next render.
    pub fn grid_config(&self) -> GridConfig {
        let props = &self.props;
        let mut config = GridConfig {
            rows: props
                .rows
                .clone()
                .unwrap_or_else(|| Arc::from(Vec::<Row>::new())),
            columns: props.columns.clone(),
            initial_state: InitialState {
                page_size: props.initial_page_size,
            },
            pagination_model: self.pagination,
            page_size_options: props.page_size_options.clone(),
            checkbox_selection: props.checkbox_selection,
            disable_row_selection_on_click: props.disable_row_selection_on_click,
            sorting_order: props.sorting_order.clone(),
            loading: props.loading,
            auto_height: props.auto_height,
            pagination: Self::PAGINATION,
            density: Default::default(),
            hide_footer: false,
            row_height: None,
            column_header_height: None,
            style: props.theme.stylesheet(),
        };
        props.passthrough.apply(&mut config);
        config
    }

    /// Render into `widget`: a full render the first time, an update afterwards.
    pub fn render<W: GridWidget + ?Sized>(&mut self, widget: &mut W) {
        let config = self.grid_config();
        if self.mounted {
            widget.update(&config);
        } else {
            debug!(
                "mounting table: {} rows, {} columns, page size {}",
                config.rows.len(),
                config.columns.len(),
                config.pagination_model.page_size
            );
            widget.render(&config);
            self.mounted = true;
        }
    }

    /// React to an event reported by the widget.
    pub fn handle_event(&mut self, event: GridEvent) {
        match event {
            GridEvent::PaginationChanged(model) => {
                if model != self.pagination {
                    debug!("pagination {:?} -> {:?}", self.pagination, model);
                }
                self.pagination = model;
            }
            GridEvent::SelectionChanged(selection) => {
                if let Some(callback) = self.props.on_row_selection_model_change.as_mut() {
                    debug!("forwarding selection of {} rows", selection.len());
                    callback(selection);
                }
            }
        }
    }
}
