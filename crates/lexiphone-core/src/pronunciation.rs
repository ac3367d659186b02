use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PronunciationError;
use crate::symbols::is_valid_symbol;

/// One way to say a word: a non-empty sequence of inventory symbols.
///
/// Kept in its space-joined form (`"K A T"`), which is also how it
/// serializes. [`Pronunciation::symbols`] gives the structured view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Pronunciation(String);

impl Pronunciation {
    /// Build from individual symbols, rejecting the whole sequence if any
    /// symbol is outside the inventory.
    pub fn from_symbols<I, S>(symbols: I) -> Result<Self, PronunciationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        for symbol in symbols {
            let symbol = symbol.as_ref();
            if !is_valid_symbol(symbol) {
                return Err(PronunciationError::InvalidSymbol(symbol.to_string()));
            }
            if !joined.is_empty() {
                joined.push(' ');
            }
            joined.push_str(symbol);
        }

        if joined.is_empty() {
            return Err(PronunciationError::Empty);
        }
        Ok(Self(joined))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Symbols in order
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ')
    }

    /// Number of symbols
    pub fn len(&self) -> usize {
        self.symbols().count()
    }

    /// A constructed pronunciation is never empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parses the joined form. Symbols are separated by exactly one space, so
/// doubled or leading spaces produce an empty token and fail.
impl FromStr for Pronunciation {
    type Err = PronunciationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PronunciationError::Empty);
        }
        Self::from_symbols(s.split(' '))
    }
}

impl fmt::Display for Pronunciation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Pronunciation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Pronunciation {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Pronunciation {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<Pronunciation> for String {
    fn from(pronunciation: Pronunciation) -> Self {
        pronunciation.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbols_joins_with_single_spaces() {
        let p = Pronunciation::from_symbols(["K", "A", "T"]).unwrap();
        assert_eq!(p.as_str(), "K A T");
        assert_eq!(p.len(), 3);
        assert_eq!(p.symbols().collect::<Vec<_>>(), vec!["K", "A", "T"]);
    }

    #[test]
    fn test_from_symbols_rejects_whole_sequence() {
        let err = Pronunciation::from_symbols(["K", "AE1", "T"]).unwrap_err();
        assert_eq!(err, PronunciationError::InvalidSymbol("AE1".to_string()));
    }

    #[test]
    fn test_empty_pronunciation_rejected() {
        let none: [&str; 0] = [];
        assert_eq!(
            Pronunciation::from_symbols(none).unwrap_err(),
            PronunciationError::Empty
        );
        assert_eq!("".parse::<Pronunciation>().unwrap_err(), PronunciationError::Empty);
    }

    #[test]
    fn test_parse_and_display_agree() {
        let p: Pronunciation = "SH O K0".parse().unwrap();
        assert_eq!(p.to_string(), "SH O K0");
        assert_eq!(p, "SH O K0");

        let rebuilt = Pronunciation::from_symbols(p.symbols()).unwrap();
        assert_eq!(rebuilt, p);
    }

    #[test]
    fn test_parse_rejects_double_space() {
        let err = "K  A".parse::<Pronunciation>().unwrap_err();
        assert_eq!(err, PronunciationError::InvalidSymbol(String::new()));
    }

    #[test]
    fn test_serializes_as_joined_string() {
        let p: Pronunciation = "J0A N0".parse().unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"J0A N0\"");
    }
}
