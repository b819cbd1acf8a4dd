use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::encoders::algorithms::errors::AlphabetError;

/// Number of symbols in every alphabet.
pub const BASE: usize = 62;

/// The standard alphabet: digits, then uppercase, then lowercase letters.
pub const STANDARD_SYMBOLS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const NO_VALUE: u8 = u8::MAX;

/// An ordered set of 62 unique symbols.
///
/// A symbol's position in the set is its digit value. The symbol at position 0
/// is the zero symbol used for padding.
///
/// Reverse lookup goes through a flat table for ASCII symbols and falls back to
/// a hash map for anything wider, so the standard alphabet never hashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    ascii: [u8; 128],
    extended: HashMap<char, u8>,
}

impl Alphabet {
    /// Creates an alphabet from a string of exactly 62 unique characters.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::WrongLength`] if the string does not hold 62
    /// characters and [`AlphabetError::DuplicateSymbol`] if any repeats.
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        Self::from_chars(symbols.chars().collect())
    }

    /// Creates an alphabet from a vector of characters.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Alphabet::new`].
    pub fn from_chars(symbols: Vec<char>) -> Result<Self, AlphabetError> {
        if symbols.len() != BASE {
            return Err(AlphabetError::WrongLength {
                actual: symbols.len(),
            });
        }

        let mut ascii = [NO_VALUE; 128];
        let mut extended = HashMap::new();
        let mut seen: HashMap<char, usize> = HashMap::with_capacity(BASE);

        for (i, &c) in symbols.iter().enumerate() {
            if let Some(first) = seen.insert(c, i) {
                return Err(AlphabetError::DuplicateSymbol {
                    symbol: c,
                    first,
                    second: i,
                });
            }

            // i < 62, always fits
            let value = i as u8;
            if c.is_ascii() {
                ascii[c as usize] = value;
            } else {
                extended.insert(c, value);
            }
        }

        Ok(Alphabet {
            symbols,
            ascii,
            extended,
        })
    }

    /// The standard `0-9A-Za-z` alphabet.
    pub fn standard() -> Self {
        // The constant is known-good; rebuild the tables without revalidating
        let symbols: Vec<char> = STANDARD_SYMBOLS.chars().collect();
        let mut ascii = [NO_VALUE; 128];
        for (i, &c) in symbols.iter().enumerate() {
            ascii[c as usize] = i as u8;
        }

        Alphabet {
            symbols,
            ascii,
            extended: HashMap::new(),
        }
    }

    /// Returns the symbol for a digit value.
    ///
    /// # Panics
    ///
    /// Panics if `position >= 62`. Digit values come from `n % 62`, so an
    /// out-of-range position is a bug in the caller.
    pub fn symbol_at(&self, position: usize) -> char {
        self.symbols[position]
    }

    /// Returns the digit value of a symbol, or `None` if it is not in the alphabet.
    pub fn value_of(&self, symbol: char) -> Option<usize> {
        let value = if symbol.is_ascii() {
            self.ascii[symbol as usize]
        } else {
            *self.extended.get(&symbol)?
        };

        (value != NO_VALUE).then_some(value as usize)
    }

    /// The symbol at position 0.
    pub fn zero_symbol(&self) -> char {
        self.symbols[0]
    }

    /// All 62 symbols in digit order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Whether symbols strictly ascend by code point.
    ///
    /// Equal-width padded output compares like the numbers it encodes only when
    /// this holds. The standard alphabet is ordered; the inverted `0-9a-zA-Z`
    /// ordering is not.
    pub fn is_lexically_ordered(&self) -> bool {
        self.symbols.windows(2).all(|pair| pair[0] < pair[1])
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
