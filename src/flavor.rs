use serde::{Deserialize, Serialize};
use std::fmt;

use crate::flags::RegexFlags;

/// Regex grammar the builder emits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Flavor {
    /// Go `regexp` (RE2) syntax. Flags are serialized as a leading `(?flags)` group.
    #[default]
    Go,
    /// ECMAScript syntax, serialized as `/body/flags`.
    Ecma,
    /// Perl syntax, serialized as `/body/flags`.
    Perl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    InlineFlagGroup,
    Delimited,
}

/// Operations that only some flavors sanction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    QuotedLiteral,
    AbsoluteAnchors,
    EndOfLastMatch,
    BackReferences,
    FlagGroups,
    Lookaround,
    AtomicGroups,
    BranchReset,
    Possessive,
    Grapheme,
    ControlEscape,
}

impl Flavor {
    pub fn name(self) -> &'static str {
        match self {
            Flavor::Go => "GO",
            Flavor::Ecma => "ECMA",
            Flavor::Perl => "PERL",
        }
    }

    /// Flag symbols recognized by this flavor, in serialization order.
    pub fn flag_symbols(self) -> &'static [char] {
        match self {
            Flavor::Go => &['i', 'm', 's', 'U'],
            Flavor::Ecma => &['g', 'i', 'm', 'y', 'u'],
            Flavor::Perl => &['g', 'i', 'm', 's'],
        }
    }

    /// Flag symbols allowed inside a `(?flags:...)` group.
    pub fn inline_flag_symbols(self) -> &'static [char] {
        match self {
            Flavor::Go => &['i', 'm', 's', 'U'],
            Flavor::Ecma => &[],
            Flavor::Perl => &['i', 'm', 's'],
        }
    }

    pub fn recognized_flags(self) -> RegexFlags {
        self.flag_symbols()
            .iter()
            .filter_map(|&symbol| RegexFlags::from_symbol(symbol))
            .fold(RegexFlags::empty(), |acc, flag| acc | flag)
    }

    pub fn output_style(self) -> OutputStyle {
        match self {
            Flavor::Go => OutputStyle::InlineFlagGroup,
            Flavor::Ecma | Flavor::Perl => OutputStyle::Delimited,
        }
    }

    pub fn supports(self, feature: Feature) -> bool {
        use Feature::*;

        match self {
            Flavor::Go => matches!(feature, QuotedLiteral | AbsoluteAnchors | FlagGroups),
            Flavor::Ecma => matches!(feature, BackReferences | Lookaround | ControlEscape),
            Flavor::Perl => !matches!(feature, ControlEscape),
        }
    }

    pub(crate) fn named_group_opener(self, name: &str) -> String {
        match self {
            Flavor::Go => format!("(?P<{name}>"),
            Flavor::Ecma | Flavor::Perl => format!("(?<{name}>"),
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
