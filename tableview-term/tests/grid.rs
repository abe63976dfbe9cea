use std::cell::RefCell;
use std::rc::Rc;

use gridstyle::Rgb;
use tableview::{
    ColumnSpec, Density, GridEvent, GridOverrides, PaginationModel, Row, RowId, SelectionModel,
    TableView, TableViewProps,
};
use tableview_term::{GridKey, TerminalGrid};

fn two_rows() -> Vec<Row> {
    vec![
        Row::new().with("id", 1).with("name", "A"),
        Row::new().with("id", 2).with("name", "B"),
    ]
}

fn many_rows(count: i64) -> Vec<Row> {
    (0..count)
        .map(|i| Row::new().with("id", i).with("name", format!("row {i}")))
        .collect()
}

fn selected(ids: &[i64]) -> SelectionModel {
    ids.iter().map(|&id| RowId::Number(id)).collect()
}

fn mounted(props: TableViewProps, columns: u16) -> (TableView, TerminalGrid) {
    let mut view = TableView::new(props);
    let mut grid = TerminalGrid::new(columns);
    view.render(&mut grid);
    (view, grid)
}

fn press(view: &mut TableView, grid: &mut TerminalGrid, key: GridKey) -> Vec<GridEvent> {
    let events = grid.handle_key(key);
    for event in events.clone() {
        view.handle_event(event);
    }
    view.render(grid);
    events
}

#[test]
fn test_renders_header_rows_and_footer() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")]).rows(two_rows());
    let (_, grid) = mounted(props, 120);

    let text: Vec<String> = grid.lines().iter().map(|l| l.text()).collect();
    assert_eq!(
        text,
        vec![
            "name".to_string(),
            "A   ".to_string(),
            "B   ".to_string(),
            "1–2 of 2   rows per page: 5   page 1/1".to_string(),
        ]
    );
}

#[test]
fn test_header_uses_theme_colors() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")]).rows(two_rows());
    let (_, grid) = mounted(props, 120);

    let header = &grid.lines()[0];
    let span = &header.spans[0];
    assert_eq!(span.bg, Some(Rgb::new(0x73, 0x5D, 0xA5)));
    assert_eq!(span.fg, Some(Rgb::new(0, 0, 0)));
    assert!(!span.bold);

    let props = TableViewProps::new(vec![ColumnSpec::new("name")])
        .header_bg_color("#111111".parse().unwrap())
        .header_text_color("white".parse().unwrap());
    let (_, grid) = mounted(props, 120);
    let span = &grid.lines()[0].spans[0];
    assert_eq!(span.bg, Some(Rgb::new(0x11, 0x11, 0x11)));
    assert_eq!(span.fg, Some(Rgb::new(255, 255, 255)));
}

#[test]
fn test_fixed_width_truncates_with_ellipsis() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name").width(5)])
        .rows(vec![Row::new().with("id", 1).with("name", "Alexander")]);
    let (_, grid) = mounted(props, 120);
    assert_eq!(grid.lines()[1].text(), "Alex…");
}

#[test]
fn test_narrow_viewport_widens_to_min_width() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")]).rows(two_rows());
    let (_, grid) = mounted(props, 70);
    assert!(grid.viewport_width() <= 600);
    assert_eq!(grid.lines()[1].text(), format!("A{}", " ".repeat(9)));
}

#[test]
fn test_missing_rows_show_placeholder() {
    let (_, grid) = mounted(TableViewProps::new(vec![ColumnSpec::new("name")]), 120);
    let lines = grid.lines();
    assert_eq!(lines[1].text(), "No rows");
    assert_eq!(lines[2].text(), "0–0 of 0   rows per page: 5   page 1/1");
}

#[test]
fn test_loading_overlay() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")])
        .rows(two_rows())
        .loading(true);
    let (_, grid) = mounted(props, 120);
    assert_eq!(grid.lines()[1].text(), "Loading…");
}

#[test]
fn test_fixed_height_pads_page() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")])
        .rows(two_rows())
        .auto_height(false);
    let (_, grid) = mounted(props, 120);
    // header + 5 body lines + footer
    assert_eq!(grid.lines().len(), 7);
}

#[test]
fn test_hidden_footer() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")])
        .rows(two_rows())
        .passthrough(GridOverrides::new().hide_footer(true));
    let (_, grid) = mounted(props, 120);
    assert_eq!(grid.lines().len(), 3);
}

#[test]
fn test_paging_through_table_view() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")]).rows(many_rows(12));
    let (mut view, mut grid) = mounted(props, 120);

    let events = press(&mut view, &mut grid, GridKey::NextPage);
    assert_eq!(
        events,
        vec![GridEvent::PaginationChanged(PaginationModel { page: 1, page_size: 5 })]
    );
    assert_eq!(grid.lines()[1].text().trim_end(), "row 5");

    press(&mut view, &mut grid, GridKey::NextPage);
    assert_eq!(view.pagination().page, 2);
    assert!(press(&mut view, &mut grid, GridKey::NextPage).is_empty());

    press(&mut view, &mut grid, GridKey::PrevPage);
    assert_eq!(view.pagination().page, 1);
}

#[test]
fn test_prev_on_first_page_is_ignored() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")]).rows(many_rows(12));
    let (_, mut grid) = mounted(props, 120);
    assert!(grid.handle_key(GridKey::PrevPage).is_empty());
}

#[test]
fn test_cycle_page_size() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")]).rows(many_rows(30));
    let (mut view, mut grid) = mounted(props, 120);

    press(&mut view, &mut grid, GridKey::NextPage);
    press(&mut view, &mut grid, GridKey::CyclePageSize);
    assert_eq!(view.pagination(), PaginationModel { page: 0, page_size: 10 });

    press(&mut view, &mut grid, GridKey::CyclePageSize);
    press(&mut view, &mut grid, GridKey::CyclePageSize);
    assert_eq!(view.pagination(), PaginationModel::new(5));
}

#[test]
fn test_cycle_from_custom_size_starts_at_first_option() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")])
        .rows(many_rows(30))
        .initial_page_size(7);
    let (mut view, mut grid) = mounted(props, 120);
    press(&mut view, &mut grid, GridKey::CyclePageSize);
    assert_eq!(view.pagination(), PaginationModel::new(5));
}

#[test]
fn test_hover_moves_and_emphasizes() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")]).rows(two_rows());
    let (mut view, mut grid) = mounted(props, 120);

    assert_eq!(grid.hovered(), None);
    press(&mut view, &mut grid, GridKey::Down);
    press(&mut view, &mut grid, GridKey::Down);
    press(&mut view, &mut grid, GridKey::Down);
    assert_eq!(grid.hovered(), Some(1));

    let lines = grid.lines();
    assert!(lines[2].spans.iter().all(|s| s.bold));
    assert!(lines[1].spans.iter().all(|s| !s.bold));

    press(&mut view, &mut grid, GridKey::Up);
    assert_eq!(grid.hovered(), Some(0));
}

#[test]
fn test_checkbox_toggle_forwards_selection() {
    let seen: Rc<RefCell<Vec<SelectionModel>>> = Rc::default();
    let sink = seen.clone();
    let props = TableViewProps::new(vec![ColumnSpec::new("name")])
        .rows(two_rows())
        .checkbox_selection(true)
        .on_row_selection_model_change(move |s| sink.borrow_mut().push(s));
    let (mut view, mut grid) = mounted(props, 120);

    press(&mut view, &mut grid, GridKey::Down);
    press(&mut view, &mut grid, GridKey::Toggle);
    press(&mut view, &mut grid, GridKey::Down);
    press(&mut view, &mut grid, GridKey::Toggle);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], selected(&[1]));
    assert_eq!(seen[1], selected(&[1, 2]));

    let lines = grid.lines();
    assert!(lines[1].text().starts_with("■ "));
    assert!(lines[0].text().starts_with("  "));
}

#[test]
fn test_toggle_requires_checkbox_selection() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")]).rows(two_rows());
    let (mut view, mut grid) = mounted(props, 120);
    press(&mut view, &mut grid, GridKey::Down);
    assert!(grid.handle_key(GridKey::Toggle).is_empty());
}

#[test]
fn test_activate_selects_single_row() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")]).rows(two_rows());
    let (mut view, mut grid) = mounted(props, 120);
    press(&mut view, &mut grid, GridKey::Down);
    let events = press(&mut view, &mut grid, GridKey::Activate);
    assert_eq!(
        events,
        vec![GridEvent::SelectionChanged(selected(&[1]))]
    );

    let props = TableViewProps::new(vec![ColumnSpec::new("name")])
        .rows(two_rows())
        .disable_row_selection_on_click(true);
    let (mut view, mut grid) = mounted(props, 120);
    press(&mut view, &mut grid, GridKey::Down);
    assert!(grid.handle_key(GridKey::Activate).is_empty());
}

#[test]
fn test_rows_without_id_use_position() {
    let rows = vec![Row::new().with("name", "x"), Row::new().with("name", "y")];
    let props = TableViewProps::new(vec![ColumnSpec::new("name")])
        .rows(rows)
        .checkbox_selection(true);
    let (mut view, mut grid) = mounted(props, 120);
    press(&mut view, &mut grid, GridKey::Down);
    press(&mut view, &mut grid, GridKey::Down);
    let events = grid.handle_key(GridKey::Toggle);
    assert_eq!(
        events,
        vec![GridEvent::SelectionChanged(selected(&[1]))]
    );
}

#[test]
fn test_keys_before_render_do_nothing() {
    let mut grid = TerminalGrid::new(80);
    assert!(grid.handle_key(GridKey::NextPage).is_empty());
    assert!(grid.lines().is_empty());
}

#[test]
fn test_last_possible_page_index_renders() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")]).rows(many_rows(12));
    let (mut view, mut grid) = mounted(props, 120);
    view.handle_event(GridEvent::PaginationChanged(PaginationModel {
        page: usize::MAX,
        page_size: 5,
    }));
    view.render(&mut grid);

    let lines = grid.lines();
    assert_eq!(lines[1].text(), "No rows");
    assert!(lines[2].text().starts_with("0–0 of 12"));
    assert!(grid.handle_key(GridKey::NextPage).is_empty());
    assert_eq!(
        grid.handle_key(GridKey::PrevPage),
        vec![GridEvent::PaginationChanged(PaginationModel {
            page: usize::MAX - 1,
            page_size: 5,
        })]
    );
}

#[test]
fn test_row_height_adds_lines_per_row() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")])
        .rows(two_rows())
        .passthrough(GridOverrides::new().row_height(2));
    let (_, grid) = mounted(props, 120);

    let text: Vec<String> = grid.lines().iter().map(|l| l.text()).collect();
    assert_eq!(text.len(), 6);
    assert_eq!(text[1], "A   ");
    assert_eq!(text[2], "");
    assert_eq!(text[3], "B   ");
}

#[test]
fn test_selected_row_fills_extra_lines() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")])
        .rows(two_rows())
        .checkbox_selection(true)
        .passthrough(GridOverrides::new().row_height(2));
    let (mut view, mut grid) = mounted(props, 120);
    press(&mut view, &mut grid, GridKey::Down);
    press(&mut view, &mut grid, GridKey::Toggle);

    let filler = &grid.lines()[2];
    assert_eq!(filler.text(), " ".repeat(6));
    assert_eq!(filler.spans[0].bg, Some(Rgb::new(0x6E, 0x54, 0x94)));
}

#[test]
fn test_density_sets_row_lines() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")])
        .rows(two_rows())
        .passthrough(GridOverrides::new().density(Density::Comfortable));
    let (_, grid) = mounted(props, 120);
    assert_eq!(grid.lines().len(), 6);

    let props = TableViewProps::new(vec![ColumnSpec::new("name")])
        .rows(two_rows())
        .passthrough(GridOverrides::new().density(Density::Comfortable).row_height(1));
    let (_, grid) = mounted(props, 120);
    assert_eq!(grid.lines().len(), 4);
}

#[test]
fn test_fixed_height_pads_taller_rows() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")])
        .rows(two_rows())
        .auto_height(false)
        .passthrough(GridOverrides::new().row_height(2));
    let (_, grid) = mounted(props, 120);
    // header + 5 rows of 2 lines + footer
    assert_eq!(grid.lines().len(), 12);
}

#[test]
fn test_fixed_height_with_huge_page_size_is_bounded() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")])
        .rows(two_rows())
        .auto_height(false)
        .initial_page_size(usize::MAX);
    let (_, grid) = mounted(props, 120);
    assert!(grid.lines().len() < 300);
}

#[test]
fn test_column_header_height_extends_header() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")])
        .rows(two_rows())
        .passthrough(GridOverrides::new().column_header_height(2));
    let (_, grid) = mounted(props, 120);

    let lines = grid.lines();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1].text(), "    ");
    assert_eq!(lines[1].spans[0].bg, Some(Rgb::new(0x73, 0x5D, 0xA5)));
    assert_eq!(lines[2].text(), "A   ");
}

#[test]
fn test_header_hover_emphasizes_and_widens() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name"), ColumnSpec::new("id")])
        .rows(two_rows());
    let (mut view, mut grid) = mounted(props, 120);
    assert_eq!(grid.hovered_header(), None);

    press(&mut view, &mut grid, GridKey::HeaderRight);
    press(&mut view, &mut grid, GridKey::HeaderRight);
    press(&mut view, &mut grid, GridKey::HeaderRight);
    assert_eq!(grid.hovered_header(), Some(1));

    let config = grid.config().unwrap().clone();
    // 150px hover min-width over 8px cells
    assert_eq!(grid.column_widths(&config), vec![4, 19]);

    let header = &grid.lines()[0];
    let cells: Vec<_> = header.spans.iter().filter(|s| s.text.trim() != "").collect();
    assert!(!cells[0].bold);
    assert!(cells[1].bold);
    assert_eq!(cells[1].bg, Some(Rgb::new(0x73, 0x5D, 0xA5)));

    press(&mut view, &mut grid, GridKey::HeaderLeft);
    assert_eq!(grid.hovered_header(), Some(0));
}

#[test]
fn test_header_hover_survives_update_but_not_remount() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")]).rows(many_rows(12));
    let (mut view, mut grid) = mounted(props, 120);
    press(&mut view, &mut grid, GridKey::HeaderRight);
    press(&mut view, &mut grid, GridKey::NextPage);
    assert_eq!(grid.hovered_header(), Some(0));

    let mut fresh = TableView::new(TableViewProps::new(vec![ColumnSpec::new("name")]));
    fresh.render(&mut grid);
    assert_eq!(grid.hovered_header(), None);
}

#[test]
fn test_activate_replaces_checked_rows() {
    let props = TableViewProps::new(vec![ColumnSpec::new("name")])
        .rows(two_rows())
        .checkbox_selection(true);
    let (mut view, mut grid) = mounted(props, 120);
    press(&mut view, &mut grid, GridKey::Down);
    press(&mut view, &mut grid, GridKey::Toggle);
    press(&mut view, &mut grid, GridKey::Down);
    press(&mut view, &mut grid, GridKey::Toggle);
    assert_eq!(grid.selection(), &selected(&[1, 2]));

    press(&mut view, &mut grid, GridKey::Activate);
    assert_eq!(grid.selection(), &selected(&[2]));
}
