use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Anchor,
    Quantifier,
    Characters,
    Meta,
}

/// Buffers of the currently open groups, innermost last.
#[derive(Debug, Default, Clone)]
pub(crate) struct GroupStack {
    levels: SmallVec<[String; 4]>,
}

impl GroupStack {
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn is_open(&self) -> bool {
        !self.levels.is_empty()
    }

    pub fn push(&mut self, opener: &str) {
        self.levels.push(opener.to_string());
    }

    pub fn current_mut(&mut self) -> Option<&mut String> {
        self.levels.last_mut()
    }

    /// Closes the innermost group and returns its complete text.
    pub fn pop_closed(&mut self) -> Option<String> {
        let mut content = self.levels.pop()?;
        content.push(')');
        Some(content)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct SelectionSet {
    content: String,
}

impl SelectionSet {
    pub fn open(negated: bool) -> Self {
        Self {
            content: String::from(if negated { "[^" } else { "[" }),
        }
    }

    pub fn push_str(&mut self, fragment: &str) {
        self.content.push_str(fragment);
    }

    pub fn close(mut self) -> String {
        self.content.push(']');
        self.content
    }
}
