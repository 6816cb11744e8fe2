use crate::errors::BuilderError;
use crate::flags::RegexFlags;
use crate::flavor::Feature;

use super::base::PatternBuilder;
use super::state::{SegmentKind, SelectionSet};

pub(super) fn is_valid_group_name(name: &str) -> bool {
    let bytes = name.as_bytes();

    match bytes.first() {
        Some(&first) if first.is_ascii_alphabetic() || first == b'_' => bytes[1..]
            .iter()
            .all(|&c| c.is_ascii_alphanumeric() || c == b'_'),
        _ => false,
    }
}

impl PatternBuilder {
    fn start_group(&mut self, opener: &str) {
        if self.selection.is_some() {
            self.record(BuilderError::GroupInSelection);
            return;
        }
        self.groups.push(opener);
        self.last_segment = None;
    }

    pub fn begin_capture_group(mut self) -> Self {
        self.start_group("(");
        self
    }

    /// Opens a named capture group. An invalid name is reported and the group
    /// falls back to a plain capture group.
    pub fn begin_named_capture_group(mut self, name: &str) -> Self {
        if is_valid_group_name(name) {
            let opener = self.flavor().named_group_opener(name);
            self.start_group(&opener);
        } else {
            self.record(BuilderError::InvalidGroupName {
                name: name.to_string(),
            });
            self.start_group("(");
        }
        self
    }

    pub fn begin_non_capture_group(mut self) -> Self {
        self.start_group("(?:");
        self
    }

    /// Opens a non-capturing group with `flags` enabled inside it.
    pub fn begin_group_with_flags(mut self, flags: &[char]) -> Self {
        if !self.require(Feature::FlagGroups, "begin_group_with_flags") {
            return self;
        }
        if flags.is_empty() {
            self.record(BuilderError::NoFlagsProvided);
        }

        let allowed = self.flavor().inline_flag_symbols();
        let mut enabled = RegexFlags::empty();
        for &flag in flags {
            match RegexFlags::from_symbol(flag) {
                Some(bit) if allowed.contains(&flag) => enabled |= bit,
                _ => self.record(BuilderError::InvalidFlag {
                    flag,
                    flavor: self.flavor(),
                }),
            }
        }

        let opener = format!("(?{}:", enabled.to_symbols(allowed));
        self.start_group(&opener);
        self
    }

    pub fn begin_atomic_group(mut self) -> Self {
        if self.require(Feature::AtomicGroups, "begin_atomic_group") {
            self.start_group("(?>");
        }
        self
    }

    pub fn begin_branch_reset_group(mut self) -> Self {
        if self.require(Feature::BranchReset, "begin_branch_reset_group") {
            self.start_group("(?|");
        }
        self
    }

    pub fn begin_pos_lookahead(mut self) -> Self {
        if self.require(Feature::Lookaround, "begin_pos_lookahead") {
            self.start_group("(?=");
        }
        self
    }

    pub fn begin_neg_lookahead(mut self) -> Self {
        if self.require(Feature::Lookaround, "begin_neg_lookahead") {
            self.start_group("(?!");
        }
        self
    }

    pub fn begin_pos_lookbehind(mut self) -> Self {
        if self.require(Feature::Lookaround, "begin_pos_lookbehind") {
            self.start_group("(?<=");
        }
        self
    }

    pub fn begin_neg_lookbehind(mut self) -> Self {
        if self.require(Feature::Lookaround, "begin_neg_lookbehind") {
            self.start_group("(?<!");
        }
        self
    }

    /// Closes the innermost group and folds it into the enclosing scope.
    pub fn end_group(mut self) -> Self {
        if self.selection.is_some() {
            self.record(BuilderError::GroupEndInSelection);
            return self;
        }

        match self.groups.pop_closed() {
            Some(segment) => self.append_segment(SegmentKind::Characters, &segment, None),
            None => self.record(BuilderError::NoGroupOpen),
        }
        self
    }
}

// Selection sets

impl PatternBuilder {
    fn start_selection(&mut self, negated: bool) {
        if self.selection.is_some() {
            self.record(BuilderError::NestedSelection);
            return;
        }
        if self.negate_next {
            self.record(BuilderError::NegationInSelection);
            self.negate_next = false;
        }
        self.selection = Some(SelectionSet::open(negated));
        self.last_segment = None;
    }

    pub fn begin_selection_set(mut self) -> Self {
        self.start_selection(false);
        self
    }

    pub fn begin_non_selection_set(mut self) -> Self {
        self.start_selection(true);
        self
    }

    pub fn end_selection_set(mut self) -> Self {
        match self.selection.take() {
            Some(selection) => {
                let segment = selection.close();
                self.append_segment(SegmentKind::Characters, &segment, None);
            }
            None => self.record(BuilderError::NoSelectionOpen),
        }
        self
    }
}
