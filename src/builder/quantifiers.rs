use crate::errors::BuilderError;
use crate::flavor::{Feature, Flavor};

use super::base::PatternBuilder;
use super::groups::is_valid_group_name;
use super::state::SegmentKind;

/// Suffixes `quantifier`, wrapping anything longer than a single character in
/// a non-capturing group so the quantifier binds to all of it.
fn quantify(target: &str, quantifier: &str) -> String {
    if target.chars().count() > 1 {
        format!("(?:{target}){quantifier}")
    } else {
        format!("{target}{quantifier}")
    }
}

impl PatternBuilder {
    fn append_quantified(&mut self, target: &str, quantifier: &str) {
        if target.is_empty() {
            self.record(BuilderError::EmptyQuantifierTarget);
            return;
        }
        let segment = quantify(target, quantifier);
        self.append_segment(SegmentKind::Quantifier, &segment, None);
    }

    fn append_modifier(&mut self, token: &str, modifier: &'static str) {
        if self.last_segment() == Some(SegmentKind::Quantifier) {
            self.append_segment(SegmentKind::Meta, token, None);
        } else {
            self.record(BuilderError::ModifierWithoutQuantifier { modifier });
        }
    }

    pub fn zero_or_one_of(mut self, target: &str) -> Self {
        self.append_quantified(target, "?");
        self
    }

    pub fn zero_or_more_of(mut self, target: &str) -> Self {
        self.append_quantified(target, "*");
        self
    }

    pub fn one_or_more_of(mut self, target: &str) -> Self {
        self.append_quantified(target, "+");
        self
    }

    pub fn n_of(mut self, target: &str, n: u32) -> Self {
        self.append_quantified(target, &format!("{{{n}}}"));
        self
    }

    pub fn n_or_more_of(mut self, target: &str, n: u32) -> Self {
        self.append_quantified(target, &format!("{{{n},}}"));
        self
    }

    pub fn n_to_m_of(mut self, target: &str, n: u32, m: u32) -> Self {
        if n > m {
            self.record(BuilderError::InvalidRepetitionRange { min: n, max: m });
        } else {
            self.append_quantified(target, &format!("{{{n},{m}}}"));
        }
        self
    }
}

// Meta

impl PatternBuilder {
    /// Makes the preceding quantifier lazy.
    pub fn prefer_fewer(mut self) -> Self {
        self.append_modifier("?", "prefer_fewer");
        self
    }

    /// Makes the preceding quantifier possessive.
    pub fn possessive(mut self) -> Self {
        if self.require(Feature::Possessive, "possessive") {
            self.append_modifier("+", "possessive");
        }
        self
    }

    pub fn or(mut self) -> Self {
        self.append_segment(SegmentKind::Meta, "|", None);
        self
    }

    /// Matches any one of `options`, which must hold at least two entries.
    pub fn either_or(mut self, options: &[&str]) -> Self {
        if options.len() > 1 {
            let segment = format!("(?:{})", options.join("|"));
            self.append_segment(SegmentKind::Characters, &segment, None);
        } else {
            self.record(BuilderError::NotEnoughAlternatives {
                provided: options.len(),
            });
        }
        self
    }

    /// Back reference to capture group `number` (1-based). ECMA references are
    /// wrapped so a following digit cannot extend the group number.
    pub fn captured_by_number(mut self, number: u32) -> Self {
        if !self.require(Feature::BackReferences, "captured_by_number") {
            return self;
        }
        if number == 0 {
            self.record(BuilderError::InvalidBackReference { number });
            return self;
        }
        let segment = match self.flavor() {
            Flavor::Perl => format!("\\g{{{number}}}"),
            Flavor::Ecma => format!("(?:\\{number})"),
            Flavor::Go => format!("\\{number}"),
        };
        self.append_segment(SegmentKind::Characters, &segment, None);
        self
    }

    pub fn captured_by_name(mut self, name: &str) -> Self {
        if !self.require(Feature::BackReferences, "captured_by_name") {
            return self;
        }
        if is_valid_group_name(name) {
            let segment = format!("\\k<{name}>");
            self.append_segment(SegmentKind::Characters, &segment, None);
        } else {
            self.record(BuilderError::InvalidGroupName {
                name: name.to_string(),
            });
        }
        self
    }
}
