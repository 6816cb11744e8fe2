use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RegexFlags: u8 {
        const CASE_INSENSITIVE = 0b0000_0001;
        const MULTILINE = 0b0000_0010;
        const SINGLE_LINE = 0b0000_0100;
        const UNGREEDY = 0b0000_1000;
        const GLOBAL = 0b0001_0000;
        const STICKY = 0b0010_0000;
        const UNICODE = 0b0100_0000;
    }
}

const FLAG_SYMBOLS: [(char, RegexFlags); 7] = [
    ('i', RegexFlags::CASE_INSENSITIVE),
    ('m', RegexFlags::MULTILINE),
    ('s', RegexFlags::SINGLE_LINE),
    ('U', RegexFlags::UNGREEDY),
    ('g', RegexFlags::GLOBAL),
    ('y', RegexFlags::STICKY),
    ('u', RegexFlags::UNICODE),
];

impl RegexFlags {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        FLAG_SYMBOLS
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, flag)| *flag)
    }

    /// Renders the set flags as symbols, following `order`.
    pub fn to_symbols(self, order: &[char]) -> String {
        order
            .iter()
            .filter(|&&symbol| Self::from_symbol(symbol).is_some_and(|flag| self.contains(flag)))
            .collect()
    }
}
