use crate::errors::{BuilderError, Diagnostic};
use crate::flags::RegexFlags;
use crate::flavor::{Feature, Flavor, OutputStyle};
use crate::options::BuilderOptions;

use super::state::{GroupStack, SegmentKind, SelectionSet};

/// Fluent regex builder.
///
/// Every method consumes the builder and hands it back, so calls chain until
/// [`PatternBuilder::build`] produces the final pattern. Misuse never aborts
/// the chain; it is recorded as a [`Diagnostic`] and returned from `build`.
#[derive(Debug, Clone)]
pub struct PatternBuilder {
    output: String,
    flavor: Flavor,
    pub(super) flags: RegexFlags,
    pub(super) negate_next: bool,
    pub(super) last_segment: Option<SegmentKind>,
    pub(super) groups: GroupStack,
    pub(super) selection: Option<SelectionSet>,
    suppress_diagnostics: bool,
    diagnostics: Vec<Diagnostic>,
}

impl Default for PatternBuilder {
    fn default() -> Self {
        Self::with_options(BuilderOptions::default())
    }
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flavor(flavor: Flavor) -> Self {
        Self::with_options(BuilderOptions {
            flavor,
            ..Default::default()
        })
    }

    pub fn with_options(options: BuilderOptions) -> Self {
        Self {
            output: String::new(),
            flavor: options.flavor,
            flags: RegexFlags::empty(),
            negate_next: false,
            last_segment: None,
            groups: GroupStack::default(),
            selection: None,
            suppress_diagnostics: options.suppress_diagnostics,
            diagnostics: Vec::new(),
        }
    }

    /// Starts from an existing pattern fragment, written verbatim.
    pub fn from_pattern(pattern: &str) -> Self {
        Self::from_pattern_with_options(pattern, BuilderOptions::default())
    }

    pub fn from_pattern_with_options(pattern: &str, options: BuilderOptions) -> Self {
        let mut builder = Self::with_options(options);
        builder.output.push_str(pattern);
        builder
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn flags(&self) -> RegexFlags {
        self.flags
    }

    pub fn group_depth(&self) -> usize {
        self.groups.depth()
    }

    pub fn is_selection_open(&self) -> bool {
        self.selection.is_some()
    }

    pub fn last_segment(&self) -> Option<SegmentKind> {
        self.last_segment
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Inverts the next appended segment, when it has a negated form.
    pub fn not(mut self) -> Self {
        if self.selection.is_some() {
            self.record(BuilderError::NegationInSelection);
        } else {
            self.negate_next = !self.negate_next;
        }
        self
    }

    pub(super) fn append_segment(
        &mut self,
        kind: SegmentKind,
        primary: &str,
        alternate: Option<&str>,
    ) {
        let segment = match alternate {
            Some(alt) if self.negate_next && self.selection.is_none() => alt,
            _ => primary,
        };

        if let Some(selection) = self.selection.as_mut() {
            selection.push_str(segment);
        } else if let Some(group) = self.groups.current_mut() {
            group.push_str(segment);
        } else {
            self.output.push_str(segment);
        }

        self.negate_next = false;
        self.last_segment = Some(kind);
    }

    pub(super) fn record(&mut self, error: BuilderError) {
        let position = self.output.len();
        tracing::debug!(position, error = %error, "regex builder diagnostic");
        self.diagnostics.push(Diagnostic::new(position, error));
    }

    /// Records a diagnostic and returns false when the flavor does not
    /// sanction `feature`.
    pub(super) fn require(&mut self, feature: Feature, operation: &'static str) -> bool {
        if self.flavor.supports(feature) {
            return true;
        }
        self.record(BuilderError::UnsupportedInFlavor {
            operation,
            flavor: self.flavor,
        });
        false
    }

    #[tracing::instrument(level = "trace", skip(self), fields(flavor = %self.flavor, len = self.output.len() as u64))]
    pub fn build(mut self) -> BuiltPattern {
        self.negate_next = false;

        if self.selection.is_some() {
            self.record(BuilderError::UnclosedSelection);
        }
        if self.groups.is_open() {
            let depth = self.groups.depth();
            self.record(BuilderError::UnclosedGroup { depth });
        }

        if !self.suppress_diagnostics {
            for diagnostic in &self.diagnostics {
                tracing::warn!(position = diagnostic.position, "{}", diagnostic);
            }
        }

        let flags = self.flags.to_symbols(self.flavor.flag_symbols());
        let pattern = match self.flavor.output_style() {
            OutputStyle::InlineFlagGroup if flags.is_empty() => self.output,
            OutputStyle::InlineFlagGroup => format!("(?{}){}", flags, self.output),
            OutputStyle::Delimited => format!("/{}/{}", self.output, flags),
        };

        BuiltPattern {
            pattern,
            diagnostics: self.diagnostics,
        }
    }
}

/// Result of [`PatternBuilder::build`]: the assembled pattern plus every
/// diagnostic recorded along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPattern {
    pattern: String,
    diagnostics: Vec<Diagnostic>,
}

impl BuiltPattern {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<Diagnostic>) {
        (self.pattern, self.diagnostics)
    }

    /// Treats any diagnostic as fatal.
    pub fn into_result(self) -> Result<String, Vec<Diagnostic>> {
        if self.diagnostics.is_empty() {
            Ok(self.pattern)
        } else {
            Err(self.diagnostics)
        }
    }
}
