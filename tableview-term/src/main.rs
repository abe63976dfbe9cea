use std::path::PathBuf;
use std::process::ExitCode;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::{error, info};
use simplelog::LevelFilter;
use tableview::{TableView, TableViewConfig, TableViewProps};
use tableview_term::draw::{self, Screen};
use tableview_term::logging::{self, LogDir};
use tableview_term::{DataFile, StyledLine, TerminalGrid, ViewerError};

const HELP: &str =
    "n/p page · s rows per page · j/k rows · h/l headers · space check · enter select · q quit";

struct Args {
    data: PathBuf,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args, ViewerError> {
    let mut data = None;
    let mut config = None;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().ok_or(ViewerError::Usage)?;
                config = Some(PathBuf::from(path));
            }
            _ if data.is_none() => data = Some(PathBuf::from(arg)),
            _ => return Err(ViewerError::Usage),
        }
    }

    Ok(Args {
        data: data.ok_or(ViewerError::Usage)?,
        config,
    })
}

fn init_logging() {
    let Some(logs) = LogDir::cache() else { return };
    if let Err(e) = logging::init(&logs, LevelFilter::Debug) {
        eprintln!("logging disabled: {e}");
    }
}

fn run() -> Result<(), ViewerError> {
    let args = parse_args()?;
    let data = DataFile::load(&args.data)?;
    let config = match &args.config {
        Some(path) => TableViewConfig::load(path)?,
        None => TableViewConfig::load_default()?,
    };

    let mut props = TableViewProps::new(data.columns).on_row_selection_model_change(|selection| {
        let ids: Vec<String> = selection.iter().map(ToString::to_string).collect();
        info!("selection changed: [{}]", ids.join(", "));
    });
    if let Some(rows) = data.rows {
        props = props.rows(rows);
    }
    let props = config.apply_to(props)?;
    info!("viewing {}", args.data.display());

    let mut view = TableView::new(props);
    let mut screen = Screen::enter()?;
    let (columns, _) = screen.size()?;
    let mut grid = TerminalGrid::new(columns);

    loop {
        view.render(&mut grid);
        let mut lines = grid.lines();
        lines.push(StyledLine::new());
        lines.push(StyledLine::raw(HELP));
        screen.draw(&lines)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    break;
                }
                if let Some(grid_key) = draw::key_for(key.code) {
                    for grid_event in grid.handle_key(grid_key) {
                        view.handle_event(grid_event);
                    }
                }
            }
            Event::Resize(columns, _) => grid.resize(columns),
            _ => {}
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
