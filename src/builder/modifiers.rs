use crate::errors::BuilderError;
use crate::flags::RegexFlags;

use super::base::PatternBuilder;

impl PatternBuilder {
    fn change_flags(&mut self, symbols: &[char], enable: bool) {
        if symbols.is_empty() {
            self.record(BuilderError::NoFlagsProvided);
            return;
        }

        let recognized = self.flavor().recognized_flags();
        for &symbol in symbols {
            match RegexFlags::from_symbol(symbol) {
                Some(flag) if recognized.contains(flag) => self.flags.set(flag, enable),
                _ => self.record(BuilderError::InvalidFlag {
                    flag: symbol,
                    flavor: self.flavor(),
                }),
            }
        }
    }

    /// Enables every recognized flag in `symbols`; each unrecognized one is
    /// reported and skipped.
    pub fn add_flags(mut self, symbols: &[char]) -> Self {
        self.change_flags(symbols, true);
        self
    }

    pub fn remove_flags(mut self, symbols: &[char]) -> Self {
        self.change_flags(symbols, false);
        self
    }
}
