//! Presentation model for grid widgets: colors, lengths, style blocks,
//! selectors and media conditions, plus the cascade that resolves a
//! style sheet for a given element, hover state and viewport width.

pub mod error;
pub mod selector;
pub mod sheet;
pub mod text;
pub mod transitions;
pub mod types;

pub use error::ParseError;
pub use selector::{MediaCondition, Selector, Target};
pub use sheet::{Rule, StyleSheet};
pub use transitions::{Easing, Transition};
pub use types::*;
