use crate::config::evolution::AlphabetSource;
use crate::error::GeorgeError;
use rand::Rng;

/// The set of characters random candidates and mutations draw from.
///
/// Symbols are distinct and keep first-appearance order, so a seeded run
/// samples the same sequence regardless of how the source was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    pub fn new<I: IntoIterator<Item = char>>(symbols: I) -> Result<Self, GeorgeError> {
        let mut distinct = Vec::new();
        for c in symbols {
            if !distinct.contains(&c) {
                distinct.push(c);
            }
        }

        if distinct.is_empty() {
            return Err(GeorgeError::Configuration(
                "Alphabet must contain at least one character".to_string(),
            ));
        }

        Ok(Self { symbols: distinct })
    }

    pub fn printable_ascii() -> Self {
        Self {
            symbols: (' '..='~').collect(),
        }
    }

    pub fn from_source(source: &AlphabetSource, target: &str) -> Result<Self, GeorgeError> {
        match source {
            AlphabetSource::Target => Self::new(target.chars()),
            AlphabetSource::PrintableAscii => Ok(Self::printable_ascii()),
            AlphabetSource::Custom { symbols } => Self::new(symbols.chars()),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Uniformly random symbol.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> char {
        self.symbols[rng.gen_range(0..self.symbols.len())]
    }
}
