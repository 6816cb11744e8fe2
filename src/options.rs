use serde::{Deserialize, Serialize};

use crate::flavor::Flavor;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct BuilderOptions {
    pub flavor: Flavor,
    /// Keeps diagnostics out of the `tracing` side channel at build time.
    /// They are still collected and returned.
    pub suppress_diagnostics: bool,
}

impl BuilderOptions {
    pub fn builder() -> BuilderOptionsBuilder {
        BuilderOptionsBuilder::default()
    }
}

#[derive(Debug, Default, Clone)]
pub struct BuilderOptionsBuilder {
    options: BuilderOptions,
}

impl BuilderOptionsBuilder {
    pub fn flavor(mut self, value: Flavor) -> Self {
        self.options.flavor = value;
        self
    }

    pub fn suppress_diagnostics(mut self, value: bool) -> Self {
        self.options.suppress_diagnostics = value;
        self
    }

    pub fn build(self) -> BuilderOptions {
        self.options
    }
}
