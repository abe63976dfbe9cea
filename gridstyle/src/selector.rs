/// The grid parts a style rule can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The box wrapping the whole grid.
    Container,
    /// The header row.
    ColumnHeaders,
    /// A single header cell inside the header row.
    ColumnHeader,
    /// A body cell.
    Cell,
}

impl Target {
    fn css(self) -> &'static str {
        match self {
            Target::Container => "&",
            Target::ColumnHeaders => "& .grid-column-headers",
            Target::ColumnHeader => "& .grid-column-headers .grid-column-header",
            Target::Cell => "& .grid-cell",
        }
    }

    /// Class count of the selector path, used as its specificity.
    fn classes(self) -> u8 {
        match self {
            Target::Container => 0,
            Target::ColumnHeaders | Target::Cell => 1,
            Target::ColumnHeader => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector {
    pub target: Target,
    pub hover: bool,
}

impl Selector {
    pub const fn new(target: Target) -> Self {
        Self {
            target,
            hover: false,
        }
    }

    /// Restrict the selector to the hovered state.
    pub const fn hovered(mut self) -> Self {
        self.hover = true;
        self
    }

    pub fn matches(&self, target: Target, hovered: bool) -> bool {
        self.target == target && (!self.hover || hovered)
    }

    /// Pseudo-classes count like classes.
    pub fn specificity(&self) -> u8 {
        self.target.classes() + u8::from(self.hover)
    }

    pub fn to_css(&self) -> String {
        if self.hover {
            format!("{}:hover", self.target.css())
        } else {
            self.target.css().to_string()
        }
    }
}

/// A viewport condition guarding a group of rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCondition {
    /// Matches viewports at most this many logical units wide.
    MaxWidth(u16),
}

impl MediaCondition {
    pub fn matches(&self, viewport_width: u16) -> bool {
        match self {
            MediaCondition::MaxWidth(bound) => viewport_width <= *bound,
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            MediaCondition::MaxWidth(bound) => format!("@media (max-width: {bound}px)"),
        }
    }
}
