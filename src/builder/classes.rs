use crate::errors::BuilderError;
use crate::flavor::{Feature, Flavor};

use super::base::PatternBuilder;
use super::state::SegmentKind;

const MAX_OCTAL_CODE: u32 = 0o777;
const MAX_CODE_POINT: u32 = 0x10FFFF;

fn is_valid_unicode_class(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '=')
}

impl PatternBuilder {
    /// Emits `[fragment]` (or `[^fragment]` when negated), or just the bare
    /// fragment while a selection set is open.
    fn bracket_class(&mut self, fragment: &str) {
        if self.is_selection_open() {
            self.append_segment(SegmentKind::Characters, fragment, None);
        } else {
            let segment = format!("[{fragment}]");
            let negated = format!("[^{fragment}]");
            self.append_segment(SegmentKind::Characters, &segment, Some(negated.as_str()));
        }
    }

    fn unicode_property(&mut self, name: &str) {
        let (segment, negated) = if name.chars().count() == 1 && self.flavor() != Flavor::Ecma {
            (format!("\\p{name}"), format!("\\P{name}"))
        } else {
            (format!("\\p{{{name}}}"), format!("\\P{{{name}}}"))
        };
        self.append_segment(SegmentKind::Characters, &segment, Some(negated.as_str()));
    }

    /// Matches any single character from `chars`.
    pub fn any_from(mut self, chars: &str) -> Self {
        self.bracket_class(chars);
        self
    }

    /// Matches any single character between `from` and `to`.
    pub fn char_range(mut self, from: &str, to: &str) -> Self {
        let fragment = format!("{from}-{to}");
        self.bracket_class(&fragment);
        self
    }

    pub fn whitespace(mut self) -> Self {
        self.append_segment(SegmentKind::Characters, "\\s", Some("\\S"));
        self
    }

    pub fn word_char(mut self) -> Self {
        self.append_segment(SegmentKind::Characters, "\\w", Some("\\W"));
        self
    }

    pub fn digit(mut self) -> Self {
        self.append_segment(SegmentKind::Characters, "\\d", Some("\\D"));
        self
    }

    pub fn letter(mut self) -> Self {
        self.bracket_class("a-zA-Z");
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.bracket_class("A-Z");
        self
    }

    pub fn lowercase(mut self) -> Self {
        self.bracket_class("a-z");
        self
    }

    pub fn alnum_char(mut self) -> Self {
        self.bracket_class("0-9a-zA-Z");
        self
    }

    pub fn punctuation(mut self) -> Self {
        self.bracket_class("!-/:-@[-`{-~");
        self
    }

    /// Any visible ASCII character.
    pub fn graphic_char(mut self) -> Self {
        self.bracket_class("!-~");
        self
    }

    pub fn ascii_char(mut self) -> Self {
        self.bracket_class("\\x00-\\x7F");
        self
    }

    pub fn any_control_char(mut self) -> Self {
        self.bracket_class("\\x00-\\x1F\\x7F");
        self
    }
}

// Unicode classes

impl PatternBuilder {
    /// Matches any character of the unicode general category or property `name`.
    pub fn unicode_class(mut self, name: &str) -> Self {
        if is_valid_unicode_class(name) {
            self.unicode_property(name);
        } else {
            self.record(BuilderError::InvalidUnicodeClass {
                name: name.to_string(),
            });
        }
        self
    }

    pub fn unicode_letter(mut self) -> Self {
        self.unicode_property("L");
        self
    }

    pub fn unicode_uppercase(mut self) -> Self {
        self.unicode_property("Lu");
        self
    }

    pub fn unicode_lowercase(mut self) -> Self {
        self.unicode_property("Ll");
        self
    }

    pub fn unicode_whitespace(mut self) -> Self {
        self.unicode_property("Z");
        self
    }

    pub fn unicode_symbol(mut self) -> Self {
        self.unicode_property("S");
        self
    }

    pub fn unicode_number(mut self) -> Self {
        self.unicode_property("N");
        self
    }

    pub fn unicode_punctuation(mut self) -> Self {
        self.unicode_property("P");
        self
    }

    /// Matches one extended grapheme cluster.
    pub fn unicode_grapheme(mut self) -> Self {
        if self.require(Feature::Grapheme, "unicode_grapheme") {
            self.append_segment(SegmentKind::Characters, "\\X", None);
        }
        self
    }
}

// Code points. None of these have a negated form.

impl PatternBuilder {
    pub fn octal_char(mut self, code: u32) -> Self {
        if code <= MAX_OCTAL_CODE {
            let segment = format!("\\{code:03o}");
            self.append_segment(SegmentKind::Characters, &segment, None);
        } else {
            self.record(BuilderError::InvalidOctalCode { code });
        }
        self
    }

    /// Matches the character with hex code point `code`, e.g. `"41"` or `"1F600"`.
    /// Leading zeros are accepted as long as the value is a valid code point.
    pub fn hex_char(mut self, code: &str) -> Self {
        let parsed = if !code.is_empty() && code.chars().all(|c| c.is_ascii_hexdigit()) {
            u32::from_str_radix(code, 16).ok()
        } else {
            None
        };

        match parsed {
            Some(value) if value <= MAX_CODE_POINT => {
                let segment = match (self.flavor(), code.len()) {
                    (_, 2) => format!("\\x{code}"),
                    (Flavor::Ecma, 4) => format!("\\u{code}"),
                    (Flavor::Ecma, _) => format!("\\u{{{code}}}"),
                    (Flavor::Go | Flavor::Perl, _) => format!("\\x{{{code}}}"),
                };
                self.append_segment(SegmentKind::Characters, &segment, None);
            }
            _ => {
                self.record(BuilderError::InvalidHexCode {
                    code: code.to_string(),
                });
            }
        }
        self
    }

    /// Matches the control character `\cX` for an ASCII letter `X`.
    pub fn control_escape(mut self, letter: char) -> Self {
        if !self.require(Feature::ControlEscape, "control_escape") {
            return self;
        }
        if letter.is_ascii_alphabetic() {
            let segment = format!("\\c{letter}");
            self.append_segment(SegmentKind::Characters, &segment, None);
        } else {
            self.record(BuilderError::InvalidControlLetter { letter });
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_class_names_are_validated() {
        assert!(is_valid_unicode_class("Greek"));
        assert!(is_valid_unicode_class("Script=Greek"));
        assert!(!is_valid_unicode_class(""));
        assert!(!is_valid_unicode_class("L}"));
    }
}
