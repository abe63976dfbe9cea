//! A grid widget drawn as styled terminal lines.

use gridstyle::text::{clip_to_width, display_width, pad_to_width, truncate_to_width, Align};
use gridstyle::{Color, Length, Rgb, StyleBlock, Target, TextOverflow};
use log::{debug, trace};
use tableview::{
    Alignment, ColumnSpec, Density, GridConfig, GridEvent, GridWidget, PaginationModel, Row,
    RowId, SelectionModel,
};

use crate::line::{Span, StyledLine};

/// Logical width of one terminal cell, used to map pixel rules onto cells.
pub const CELL_PX: f32 = 8.0;

/// Widest a column grows when it has no fixed width.
const MAX_AUTO_WIDTH: usize = 24;

/// Fixed-height padding never grows past this many row slots.
const MAX_PADDED_ROWS: usize = 200;

const SELECTED_BG: Color = Color::hex(0x6E5494);

/// Input the grid understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKey {
    NextPage,
    PrevPage,
    CyclePageSize,
    Up,
    Down,
    /// Move header hover one column left.
    HeaderLeft,
    /// Move header hover one column right.
    HeaderRight,
    /// Checkbox toggle of the hovered row.
    Toggle,
    /// Click on the hovered row.
    Activate,
}

/// Terminal implementation of [`GridWidget`].
///
/// The widget keeps the latest configuration, the hovered row of the
/// current page, the hovered column header and its own selection. Pagination stays controlled by the
/// owner: key presses produce [`GridEvent`]s and the new model only shows
/// up with the next [`GridWidget::update`].
#[derive(Debug, Default)]
pub struct TerminalGrid {
    config: Option<GridConfig>,
    columns: u16,
    hovered: Option<usize>,
    hovered_header: Option<usize>,
    selection: SelectionModel,
}

impl TerminalGrid {
    /// A grid for a terminal `columns` cells wide.
    pub fn new(columns: u16) -> Self {
        Self {
            columns,
            ..Default::default()
        }
    }

    pub fn resize(&mut self, columns: u16) {
        self.columns = columns;
    }

    /// Viewport width in the logical units the style sheet's media rules use.
    pub fn viewport_width(&self) -> u16 {
        (f32::from(self.columns) * CELL_PX).min(f32::from(u16::MAX)) as u16
    }

    pub fn config(&self) -> Option<&GridConfig> {
        self.config.as_ref()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn hovered_header(&self) -> Option<usize> {
        self.hovered_header
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    /// Turn a key press into the events the owner should handle.
    pub fn handle_key(&mut self, key: GridKey) -> Vec<GridEvent> {
        let Some(config) = self.config.as_ref() else {
            return Vec::new();
        };
        let model = config.pagination_model;
        let total = config.rows.len();
        let page_len = config.page_rows().len();

        match key {
            GridKey::NextPage if config.pagination => {
                let next = model.page.saturating_add(1);
                if next < model.page_count(total) {
                    return vec![GridEvent::PaginationChanged(model.with_page(next))];
                }
            }
            GridKey::PrevPage if config.pagination => {
                if model.page > 0 {
                    return vec![GridEvent::PaginationChanged(model.with_page(model.page - 1))];
                }
            }
            GridKey::CyclePageSize if config.pagination => {
                if let Some(size) = next_page_size(&config.page_size_options, model.page_size) {
                    let next = PaginationModel::new(size);
                    if next != model {
                        return vec![GridEvent::PaginationChanged(next)];
                    }
                }
            }
            GridKey::Down => {
                if page_len > 0 {
                    self.hovered = Some(self.hovered.map_or(0, |h| (h + 1).min(page_len - 1)));
                }
            }
            GridKey::Up => {
                if page_len > 0 {
                    self.hovered = Some(self.hovered.map_or(0, |h| h.saturating_sub(1)));
                }
            }
            GridKey::HeaderRight => {
                let count = config.columns.len();
                if count > 0 {
                    self.hovered_header =
                        Some(self.hovered_header.map_or(0, |h| (h + 1).min(count - 1)));
                }
            }
            GridKey::HeaderLeft => {
                if !config.columns.is_empty() {
                    self.hovered_header =
                        Some(self.hovered_header.map_or(0, |h| h.saturating_sub(1)));
                }
            }
            GridKey::Toggle if config.checkbox_selection => {
                if let Some(id) = self.hovered_id() {
                    self.selection.toggle(id);
                    return vec![GridEvent::SelectionChanged(self.selection.clone())];
                }
            }
            GridKey::Activate if !config.disable_row_selection_on_click => {
                if let Some(id) = self.hovered_id() {
                    self.selection.clear();
                    self.selection.insert(id);
                    return vec![GridEvent::SelectionChanged(self.selection.clone())];
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn hovered_id(&self) -> Option<RowId> {
        let config = self.config.as_ref()?;
        let hovered = self.hovered?;
        let offset = page_offset(config);
        let row = config.page_rows().get(hovered)?;
        Some(row_id(row, offset + hovered))
    }

    /// Draw the current configuration: header, page rows, footer.
    pub fn lines(&self) -> Vec<StyledLine> {
        let Some(config) = self.config.as_ref() else {
            return Vec::new();
        };
        let viewport = self.viewport_width();
        let widths = self.column_widths(config);
        let line_width = line_width(config, &widths);

        let mut lines = self.header_lines(config, &widths, viewport);
        let header_len = lines.len();
        let row_lines = row_lines(config);

        let page = config.page_rows();
        if config.loading {
            lines.push(StyledLine::raw("Loading…"));
        } else if page.is_empty() {
            lines.push(StyledLine::raw("No rows"));
        } else {
            let offset = page_offset(config);
            let plain = config.style.resolve(Target::Cell, false, viewport);
            let hovered = config.style.resolve(Target::Cell, true, viewport);
            for (idx, row) in page.iter().enumerate() {
                let is_hovered = self.hovered == Some(idx);
                let style = if is_hovered { &hovered } else { &plain };
                let selected = self.selection.contains(&row_id(row, offset + idx));
                lines.push(self.row_line(config, row, &widths, style, selected));
                let bg = if selected { SELECTED_BG.to_rgb() } else { None };
                for _ in 1..row_lines {
                    lines.push(filler(line_width, bg));
                }
            }
        }

        if !config.auto_height && config.pagination {
            let slots = config.pagination_model.page_size.min(MAX_PADDED_ROWS);
            let body = lines.len() - header_len;
            for _ in body..slots.saturating_mul(row_lines) {
                lines.push(StyledLine::new());
            }
        }

        if config.pagination && !config.hide_footer {
            lines.push(StyledLine::raw(footer_text(config)));
        }

        lines
    }

    /// Width in cells of each column.
    ///
    /// Fixed widths are used as given. Other columns fit their header and
    /// the values on the current page, bounded below by the cell rule's
    /// min-width and above by a fixed cap. A hovered header widens its
    /// column to the header hover rule's min-width.
    pub fn column_widths(&self, config: &GridConfig) -> Vec<usize> {
        let viewport = self.viewport_width();
        let cell = config.style.resolve(Target::Cell, false, viewport);
        let min = min_width_cells(&cell, viewport).unwrap_or(1);
        let hover_min = self.hovered_header.and_then(|_| {
            let header = config.style.resolve(Target::ColumnHeader, true, viewport);
            min_width_cells(&header, viewport)
        });
        let page = config.page_rows();

        config
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let width = match column.width {
                    Some(width) => usize::from(width),
                    None => {
                        let natural = page
                            .iter()
                            .map(|row| display_width(&row.display(&column.field)))
                            .chain(std::iter::once(display_width(column.header_label())))
                            .max()
                            .unwrap_or(0);
                        natural.min(MAX_AUTO_WIDTH).max(min)
                    }
                };
                match hover_min {
                    Some(hover_min) if self.hovered_header == Some(idx) => width.max(hover_min),
                    _ => width,
                }
            })
            .collect()
    }

    fn header_lines(
        &self,
        config: &GridConfig,
        widths: &[usize],
        viewport: u16,
    ) -> Vec<StyledLine> {
        // header cells sit on the header row, so the row's rules apply under theirs
        let row_style = config.style.resolve(Target::ColumnHeaders, false, viewport);
        let cell_style = |hovered: bool| {
            let mut style = row_style.clone();
            style.merge(&config.style.resolve(Target::ColumnHeader, hovered, viewport));
            style
        };
        let plain = cell_style(false);
        let hovered = cell_style(true);
        let bg = plain.background_color().and_then(Color::to_rgb);

        let mut line = StyledLine::new();
        if config.checkbox_selection {
            line.push(Span::raw("  ").bg(bg));
        }
        for (idx, (column, width)) in config.columns.iter().zip(widths).enumerate() {
            if idx > 0 {
                line.push(Span::raw(" ").bg(bg));
            }
            let style = if self.hovered_header == Some(idx) { &hovered } else { &plain };
            let fg = style.text_color().and_then(Color::to_rgb);
            let cell_bg = style.background_color().and_then(Color::to_rgb);
            let text = fit(column.header_label(), *width, style, column);
            line.push(Span::raw(text).fg(fg).bg(cell_bg).bold(emphasized(style)));
        }

        let mut lines = vec![line];
        let height = config.column_header_height.map_or(1, |h| usize::from(h).max(1));
        let width = line_width(config, widths);
        for _ in 1..height {
            lines.push(filler(width, bg));
        }
        lines
    }

    fn row_line(
        &self,
        config: &GridConfig,
        row: &Row,
        widths: &[usize],
        style: &StyleBlock,
        selected: bool,
    ) -> StyledLine {
        let bg: Option<Rgb> = if selected { SELECTED_BG.to_rgb() } else { None };
        let bold = emphasized(style);

        let mut line = StyledLine::new();
        if config.checkbox_selection {
            line.push(Span::raw(selection_indicator(selected)).bg(bg));
        }
        for (idx, (column, width)) in config.columns.iter().zip(widths).enumerate() {
            if idx > 0 {
                line.push(Span::raw(" ").bg(bg));
            }
            let text = fit(&row.display(&column.field), *width, style, column);
            line.push(Span::raw(text).bg(bg).bold(bold));
        }
        line
    }
}

impl GridWidget for TerminalGrid {
    fn render(&mut self, config: &GridConfig) {
        debug!(
            "terminal grid mounted with {} rows at {} columns",
            config.rows.len(),
            self.columns
        );
        self.hovered = None;
        self.hovered_header = None;
        self.config = Some(config.clone());
    }

    fn update(&mut self, config: &GridConfig) {
        let page_len = config.page_rows().len();
        self.hovered = match self.hovered {
            _ if page_len == 0 => None,
            Some(h) => Some(h.min(page_len - 1)),
            None => None,
        };
        let column_count = config.columns.len();
        self.hovered_header = match self.hovered_header {
            _ if column_count == 0 => None,
            Some(h) => Some(h.min(column_count - 1)),
            None => None,
        };
        trace!("terminal grid updated, page {:?}", config.pagination_model);
        self.config = Some(config.clone());
    }
}

/// Returns `"■ "` for selected, `"□ "` for unselected.
fn selection_indicator(selected: bool) -> &'static str {
    if selected { "■ " } else { "□ " }
}

/// Fonts larger than the root size are drawn bold.
fn emphasized(style: &StyleBlock) -> bool {
    style
        .font_size_value()
        .is_some_and(|size| size.to_px(0.0) > Length::rem(1.0).to_px(0.0))
}

fn min_width_cells(style: &StyleBlock, viewport: u16) -> Option<usize> {
    style
        .min_width_value()
        .map(|w| usize::from(w.to_cells(f32::from(viewport), CELL_PX)))
}

/// Terminal lines per body row: the explicit row height, else the density preset.
fn row_lines(config: &GridConfig) -> usize {
    match config.row_height {
        Some(height) => usize::from(height).max(1),
        None => match config.density {
            Density::Compact | Density::Standard => 1,
            Density::Comfortable => 2,
        },
    }
}

/// Cells a full header or body line covers.
fn line_width(config: &GridConfig, widths: &[usize]) -> usize {
    let gaps = widths.len().saturating_sub(1);
    let checkbox = if config.checkbox_selection { 2 } else { 0 };
    widths.iter().sum::<usize>() + gaps + checkbox
}

/// Blank continuation line of a taller header or row.
fn filler(width: usize, bg: Option<Rgb>) -> StyledLine {
    match bg {
        Some(_) => StyledLine {
            spans: vec![Span::raw(" ".repeat(width)).bg(bg)],
        },
        None => StyledLine::new(),
    }
}

fn fit(text: &str, width: usize, style: &StyleBlock, column: &ColumnSpec) -> String {
    let cut = match style.text_overflow_value() {
        TextOverflow::Ellipsis => truncate_to_width(text, width),
        TextOverflow::Clip => clip_to_width(text, width),
    };
    let align = match column.align {
        Alignment::Left => Align::Left,
        Alignment::Center => Align::Center,
        Alignment::Right => Align::Right,
    };
    pad_to_width(&cut, width, align)
}

fn page_offset(config: &GridConfig) -> usize {
    if config.pagination {
        config.pagination_model.row_range(config.rows.len()).start
    } else {
        0
    }
}

/// Rows without a usable `id` field are identified by their position.
fn row_id(row: &Row, index: usize) -> RowId {
    row.id()
        .unwrap_or_else(|| RowId::Number(i64::try_from(index).unwrap_or(i64::MAX)))
}

fn next_page_size(options: &[usize], current: usize) -> Option<usize> {
    let next = match options.iter().position(|&size| size == current) {
        Some(idx) => options.get(idx + 1).or(options.first()),
        None => options.first(),
    };
    next.copied()
}

fn footer_text(config: &GridConfig) -> String {
    let model = config.pagination_model;
    let total = config.rows.len();
    let range = model.row_range(total);
    let (first, last) = if range.is_empty() {
        (0, 0)
    } else {
        (range.start + 1, range.end)
    };
    format!(
        "{first}–{last} of {total}   rows per page: {}   page {}/{}",
        model.page_size,
        model.page.saturating_add(1),
        model.page_count(total)
    )
}
