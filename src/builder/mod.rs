mod base;
mod classes;
mod groups;
mod modifiers;
mod quantifiers;
mod state;
mod text;

pub use base::{BuiltPattern, PatternBuilder};
pub use state::SegmentKind;
