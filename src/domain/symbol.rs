// ============================================================================
// Symbol Value Object
// Fixed-capacity instrument token with exact equality/hash semantics
// ============================================================================

use arrayvec::ArrayString;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SymbolError {
    #[error("symbol must not be empty")]
    Empty,
    #[error("symbol too long: {len} bytes (max {max})", max = Symbol::CAPACITY)]
    TooLong { len: usize },
}

/// Trading symbol of at most [`Symbol::CAPACITY`] bytes.
///
/// Stored inline, so it is `Copy` and hashes/compares on its bytes. Symbols
/// order lexicographically, which is the order books are printed in.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Symbol(ArrayString<8>);

impl Symbol {
    pub const CAPACITY: usize = 8;

    pub fn new(symbol: &str) -> Result<Self, SymbolError> {
        if symbol.is_empty() {
            return Err(SymbolError::Empty);
        }
        ArrayString::from(symbol)
            .map(Self)
            .map_err(|_| SymbolError::TooLong { len: symbol.len() })
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = SymbolError;

    fn try_from(symbol: String) -> Result<Self, Self::Error> {
        Self::new(&symbol)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.as_str().to_string()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_capacity() {
        assert_eq!(Symbol::new("IBM").unwrap().as_str(), "IBM");
        assert_eq!(Symbol::new("ABCDEFGH").unwrap().as_str(), "ABCDEFGH");
        assert_eq!(
            Symbol::new("ABCDEFGHI"),
            Err(SymbolError::TooLong { len: 9 })
        );
        assert_eq!(Symbol::new(""), Err(SymbolError::Empty));
    }

    #[test]
    fn test_symbol_equality_and_order() {
        let apple: Symbol = "Apple".parse().unwrap();
        let google: Symbol = "Google".parse().unwrap();

        assert_eq!(apple, Symbol::new("Apple").unwrap());
        assert_ne!(apple, google);
        assert!(apple < google);
        assert_eq!(google.to_string(), "Google");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let ibm = Symbol::new("IBM").unwrap();
        assert_eq!(serde_json::to_string(&ibm).unwrap(), "\"IBM\"");
        assert_eq!(serde_json::from_str::<Symbol>("\"IBM\"").unwrap(), ibm);

        assert!(serde_json::from_str::<Symbol>("\"\"").is_err());
        assert!(serde_json::from_str::<Symbol>("\"ABCDEFGHI\"").is_err());
    }
}
