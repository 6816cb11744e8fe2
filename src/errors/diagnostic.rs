use serde::Serialize;
use std::fmt;

use super::BuilderError;

/// A recorded builder misuse, tagged with the top-level output length at the
/// time it was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub position: usize,
    pub error: BuilderError,
}

impl Diagnostic {
    pub fn new(position: usize, error: BuilderError) -> Self {
        Self { position, error }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error while building regex at position {}: {}",
            self.position, self.error
        )
    }
}

impl std::error::Error for Diagnostic {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
