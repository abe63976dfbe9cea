//! Header colors and the presentation constants behind the grid's style sheet.

use std::time::Duration;

use gridstyle::{
    Color, Easing, Length, MediaCondition, Position, Selector, StyleBlock, StyleSheet, Target,
    Transition,
};

/// Default header background (`#735DA5`).
pub const DEFAULT_HEADER_BG: Color = Color::hex(0x735DA5);

/// Default header text color.
pub fn default_header_text() -> Color {
    Color::named("black")
}

/// Sizes, breakpoint and timing used by the fixed grid rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeMetrics {
    pub header_font_size: Length,
    pub header_min_height: Length,
    pub hover_font_size: Length,
    pub hover_min_width: Length,
    pub hover_z_index: i32,
    pub transition: Transition,
    /// Viewports at most this wide get the narrow rules.
    pub narrow_breakpoint: u16,
    pub narrow_font_size: Length,
    pub narrow_min_width: Length,
}

impl Default for ThemeMetrics {
    fn default() -> Self {
        Self {
            header_font_size: Length::rem(1.0),
            header_min_height: Length::px(50.0),
            hover_font_size: Length::rem(1.2),
            hover_min_width: Length::px(150.0),
            hover_z_index: 10,
            transition: Transition::all(Duration::from_millis(300), Easing::EaseInOut),
            narrow_breakpoint: 600,
            narrow_font_size: Length::rem(0.75),
            narrow_min_width: Length::px(80.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeOptions {
    pub header_bg: Color,
    pub header_text: Color,
    pub metrics: ThemeMetrics,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            header_bg: DEFAULT_HEADER_BG,
            header_text: default_header_text(),
            metrics: ThemeMetrics::default(),
        }
    }
}

impl ThemeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header_bg(mut self, color: Color) -> Self {
        self.header_bg = color;
        self
    }

    pub fn header_text(mut self, color: Color) -> Self {
        self.header_text = color;
        self
    }

    pub fn metrics(mut self, metrics: ThemeMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// The rules every grid gets.
    ///
    /// Header row and cells are painted with the header colors, cells truncate
    /// with an ellipsis, hovered cells grow and rise above their neighbours, and
    /// narrow viewports shrink header and body cells.
    pub fn stylesheet(&self) -> StyleSheet {
        let m = &self.metrics;
        let headers = Selector::new(Target::ColumnHeaders);
        let header = Selector::new(Target::ColumnHeader);
        let cell = Selector::new(Target::Cell);

        let hover = StyleBlock::new()
            .z_index(m.hover_z_index)
            .font_size(m.hover_font_size)
            .min_width(m.hover_min_width);

        StyleSheet::new()
            .rule(
                headers,
                StyleBlock::new()
                    .background(self.header_bg.clone())
                    .color(self.header_text.clone())
                    .font_size(m.header_font_size)
                    .ellipsis()
                    .position(Position::Relative)
                    .min_height(m.header_min_height),
            )
            .rule(
                header,
                StyleBlock::new()
                    .transition(m.transition)
                    .background(self.header_bg.clone()),
            )
            .rule(header.hovered(), hover.clone())
            .rule(
                cell,
                StyleBlock::new()
                    .ellipsis()
                    .position(Position::Relative)
                    .transition(m.transition),
            )
            .rule(cell.hovered(), hover)
            .media_rule(
                MediaCondition::MaxWidth(m.narrow_breakpoint),
                [header, cell],
                StyleBlock::new()
                    .font_size(m.narrow_font_size)
                    .min_width(m.narrow_min_width)
                    .text_overflow(gridstyle::TextOverflow::Ellipsis),
            )
    }
}
