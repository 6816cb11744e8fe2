use serde::Serialize;
use thiserror::Error;

use crate::flavor::Flavor;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum BuilderError {
    #[error("negation cannot be used in a selection set, use `begin_non_selection_set()` instead")]
    NegationInSelection,
    #[error("group constructs do not work inside a selection set")]
    GroupInSelection,
    #[error("cannot end group while a selection set is open")]
    GroupEndInSelection,
    #[error("cannot nest selection sets")]
    NestedSelection,
    #[error("cannot end group, no group open")]
    NoGroupOpen,
    #[error("cannot end selection set, no set open")]
    NoSelectionOpen,
    #[error("'{modifier}' should only be used after a quantifier")]
    ModifierWithoutQuantifier { modifier: &'static str },
    #[error("no flags provided")]
    NoFlagsProvided,
    #[error("invalid flag '{flag}' for flavor {flavor}")]
    InvalidFlag { flag: char, flavor: Flavor },
    #[error("invalid octal character code {code:#o}")]
    InvalidOctalCode { code: u32 },
    #[error("invalid hex character code '{code}'")]
    InvalidHexCode { code: String },
    #[error("invalid unicode class '{name}'")]
    InvalidUnicodeClass { name: String },
    #[error("invalid control character letter '{letter}'")]
    InvalidControlLetter { letter: char },
    #[error(
        "invalid group name '{name}': must start with an alphabetic character or underscore and contain only alphanumerics or underscores"
    )]
    InvalidGroupName { name: String },
    #[error("invalid back reference number {number}")]
    InvalidBackReference { number: u32 },
    #[error("not enough options specified in 'either_or()' (got {provided})")]
    NotEnoughAlternatives { provided: usize },
    #[error("invalid repetition range {{{min},{max}}}")]
    InvalidRepetitionRange { min: u32, max: u32 },
    #[error("quantifier target is empty")]
    EmptyQuantifierTarget,
    #[error("'{operation}' is not supported by flavor {flavor}")]
    UnsupportedInFlavor {
        operation: &'static str,
        flavor: Flavor,
    },
    #[error("building without closing {depth} group(s)")]
    UnclosedGroup { depth: usize },
    #[error("building without closing selection set")]
    UnclosedSelection,
}
