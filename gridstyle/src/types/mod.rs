mod color;
mod enums;
mod length;
mod style;

pub use color::{Color, Rgb};
pub use enums::{Overflow, Position, TextOverflow, WhiteSpace};
pub use length::{Length, ROOT_FONT_PX};
pub use style::{Property, StyleBlock, Value};
