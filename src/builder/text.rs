use crate::flavor::{Feature, Flavor};

use super::base::PatternBuilder;
use super::state::SegmentKind;

const ECMA_SYNTAX_CHARS: &[char] = &[
    '\\', '^', '$', '.', '*', '+', '?', '(', ')', '[', ']', '{', '}', '|', '/',
];

fn escape_ecma(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ECMA_SYNTAX_CHARS.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

// General

impl PatternBuilder {
    /// Appends `text` as-is; regex metacharacters keep their meaning.
    pub fn characters(mut self, text: &str) -> Self {
        self.append_segment(SegmentKind::Characters, text, None);
        self
    }

    /// Appends `text` with every metacharacter escaped.
    pub fn escaped_characters(mut self, text: &str) -> Self {
        let segment = match self.flavor() {
            Flavor::Ecma => escape_ecma(text),
            Flavor::Go | Flavor::Perl => regex::escape(text),
        };
        self.append_segment(SegmentKind::Characters, &segment, None);
        self
    }

    pub fn any_char(mut self) -> Self {
        self.append_segment(SegmentKind::Characters, ".", None);
        self
    }

    /// Wraps `text` in a `\Q...\E` quoted block.
    pub fn literally(mut self, text: &str) -> Self {
        if self.require(Feature::QuotedLiteral, "literally") {
            let segment = format!("\\Q{text}\\E");
            self.append_segment(SegmentKind::Characters, &segment, None);
        }
        self
    }

    pub fn line_ending(mut self) -> Self {
        self.append_segment(SegmentKind::Characters, "\\n\\r\\v\\f", None);
        self
    }
}

// Anchors

impl PatternBuilder {
    pub fn starting(mut self) -> Self {
        self.append_segment(SegmentKind::Anchor, "^", None);
        self
    }

    pub fn absolute_starting(mut self) -> Self {
        if self.require(Feature::AbsoluteAnchors, "absolute_starting") {
            self.append_segment(SegmentKind::Anchor, "\\A", None);
        }
        self
    }

    pub fn ending(mut self) -> Self {
        self.append_segment(SegmentKind::Anchor, "$", None);
        self
    }

    pub fn absolute_ending(mut self) -> Self {
        if self.require(Feature::AbsoluteAnchors, "absolute_ending") {
            self.append_segment(SegmentKind::Anchor, "\\z", None);
        }
        self
    }

    pub fn word_boundary(mut self) -> Self {
        self.append_segment(SegmentKind::Anchor, "\\b", Some("\\B"));
        self
    }

    pub fn end_of_last_match(mut self) -> Self {
        if self.require(Feature::EndOfLastMatch, "end_of_last_match") {
            self.append_segment(SegmentKind::Anchor, "\\G", None);
        }
        self
    }
}
