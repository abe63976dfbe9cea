#![allow(dead_code)]

use tableview::{ColumnSpec, GridConfig, GridWidget, Row};

/// Grid that remembers every configuration it was given.
#[derive(Default)]
pub struct RecordingGrid {
    pub renders: Vec<GridConfig>,
    pub updates: Vec<GridConfig>,
}

impl RecordingGrid {
    pub fn last(&self) -> &GridConfig {
        self.updates
            .last()
            .or(self.renders.last())
            .expect("grid was never rendered")
    }
}

impl GridWidget for RecordingGrid {
    fn render(&mut self, config: &GridConfig) {
        self.renders.push(config.clone());
    }

    fn update(&mut self, config: &GridConfig) {
        self.updates.push(config.clone());
    }
}

pub fn name_rows() -> Vec<Row> {
    vec![
        Row::new().with("id", 1).with("name", "A"),
        Row::new().with("id", 2).with("name", "B"),
    ]
}

pub fn name_columns() -> Vec<ColumnSpec> {
    vec![ColumnSpec::new("name")]
}
