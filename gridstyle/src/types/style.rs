use super::{Color, Length, Overflow, Position, TextOverflow, WhiteSpace};
use crate::transitions::Transition;

/// A style property a block can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Background,
    Color,
    FontSize,
    WhiteSpace,
    Overflow,
    TextOverflow,
    Position,
    MinHeight,
    MinWidth,
    Width,
    ZIndex,
    Transition,
}

impl Property {
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Background => "background-color",
            Self::Color => "color",
            Self::FontSize => "font-size",
            Self::WhiteSpace => "white-space",
            Self::Overflow => "overflow",
            Self::TextOverflow => "text-overflow",
            Self::Position => "position",
            Self::MinHeight => "min-height",
            Self::MinWidth => "min-width",
            Self::Width => "width",
            Self::ZIndex => "z-index",
            Self::Transition => "transition",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Color(Color),
    Length(Length),
    WhiteSpace(WhiteSpace),
    Overflow(Overflow),
    TextOverflow(TextOverflow),
    Position(Position),
    ZIndex(i32),
    Transition(Transition),
}

impl Value {
    pub fn to_css(&self) -> String {
        match self {
            Self::Color(c) => c.to_css(),
            Self::Length(l) => l.to_css(),
            Self::WhiteSpace(w) => w.to_css().to_string(),
            Self::Overflow(o) => o.to_css().to_string(),
            Self::TextOverflow(t) => t.to_css().to_string(),
            Self::Position(p) => p.to_css().to_string(),
            Self::ZIndex(z) => z.to_string(),
            Self::Transition(t) => t.to_css(),
        }
    }
}

/// An ordered set of declarations.
///
/// Setting a property that is already declared replaces its value in place,
/// so the last write wins while declaration order stays stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleBlock {
    declarations: Vec<(Property, Value)>,
}

impl StyleBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: Property, value: Value) {
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.declarations.push((property, value)),
        }
    }

    pub fn with(mut self, property: Property, value: Value) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: Property) -> Option<&Value> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v)
    }

    pub fn remove(&mut self, property: Property) -> Option<Value> {
        let idx = self.declarations.iter().position(|(p, _)| *p == property)?;
        Some(self.declarations.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, &Value)> {
        self.declarations.iter().map(|(p, v)| (*p, v))
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Apply every declaration of `other` on top of this block.
    pub fn merge(&mut self, other: &StyleBlock) {
        for (property, value) in other.iter() {
            self.set(property, value.clone());
        }
    }

    // Builders

    pub fn background(self, color: Color) -> Self {
        self.with(Property::Background, Value::Color(color))
    }

    pub fn color(self, color: Color) -> Self {
        self.with(Property::Color, Value::Color(color))
    }

    pub fn font_size(self, size: Length) -> Self {
        self.with(Property::FontSize, Value::Length(size))
    }

    pub fn white_space(self, white_space: WhiteSpace) -> Self {
        self.with(Property::WhiteSpace, Value::WhiteSpace(white_space))
    }

    pub fn overflow(self, overflow: Overflow) -> Self {
        self.with(Property::Overflow, Value::Overflow(overflow))
    }

    pub fn text_overflow(self, text_overflow: TextOverflow) -> Self {
        self.with(Property::TextOverflow, Value::TextOverflow(text_overflow))
    }

    /// Single line, clipped, with an ellipsis marking the cut.
    pub fn ellipsis(self) -> Self {
        self.white_space(WhiteSpace::NoWrap)
            .overflow(Overflow::Hidden)
            .text_overflow(TextOverflow::Ellipsis)
    }

    pub fn position(self, position: Position) -> Self {
        self.with(Property::Position, Value::Position(position))
    }

    pub fn min_height(self, height: Length) -> Self {
        self.with(Property::MinHeight, Value::Length(height))
    }

    pub fn min_width(self, width: Length) -> Self {
        self.with(Property::MinWidth, Value::Length(width))
    }

    pub fn width(self, width: Length) -> Self {
        self.with(Property::Width, Value::Length(width))
    }

    pub fn z_index(self, z: i32) -> Self {
        self.with(Property::ZIndex, Value::ZIndex(z))
    }

    pub fn transition(self, transition: Transition) -> Self {
        self.with(Property::Transition, Value::Transition(transition))
    }

    // Typed accessors

    pub fn background_color(&self) -> Option<&Color> {
        self.color_of(Property::Background)
    }

    pub fn text_color(&self) -> Option<&Color> {
        self.color_of(Property::Color)
    }

    pub fn font_size_value(&self) -> Option<Length> {
        self.length_of(Property::FontSize)
    }

    pub fn min_width_value(&self) -> Option<Length> {
        self.length_of(Property::MinWidth)
    }

    pub fn min_height_value(&self) -> Option<Length> {
        self.length_of(Property::MinHeight)
    }

    pub fn width_value(&self) -> Option<Length> {
        self.length_of(Property::Width)
    }

    pub fn z_index_value(&self) -> Option<i32> {
        match self.get(Property::ZIndex) {
            Some(Value::ZIndex(z)) => Some(*z),
            _ => None,
        }
    }

    pub fn text_overflow_value(&self) -> TextOverflow {
        match self.get(Property::TextOverflow) {
            Some(Value::TextOverflow(t)) => *t,
            _ => TextOverflow::default(),
        }
    }

    pub fn transition_value(&self) -> Option<&Transition> {
        match self.get(Property::Transition) {
            Some(Value::Transition(t)) => Some(t),
            _ => None,
        }
    }

    fn color_of(&self, property: Property) -> Option<&Color> {
        match self.get(property) {
            Some(Value::Color(c)) => Some(c),
            _ => None,
        }
    }

    fn length_of(&self, property: Property) -> Option<Length> {
        match self.get(property) {
            Some(Value::Length(l)) => Some(*l),
            _ => None,
        }
    }

    /// Render as `name: value;` declarations, one per line.
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{}: {};", p.css_name(), v.to_css()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
