use std::{
    fmt::{self, Write},
    str::FromStr,
};

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{salt::Salt, Error, Kind, Result};

/// Digits, upper case, lower case, `-` and `_`, in that order.
pub const DEFAULT_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

/// Number of symbols in a charset; one per 6-bit value.
pub const CHARSET_LEN: usize = 64;

const ABSENT: i8 = -1;

/// An ordered alphabet of 64 distinct symbols. The symbol at position `i` stands for the
/// 6-bit value `i`.
///
/// A `Charset` is validated when it is built, so encoding and decoding with it cannot fail
/// on account of the alphabet.
#[derive(Clone, PartialEq, Eq)]
pub struct Charset {
    symbols: [char; CHARSET_LEN],
    ascii: [i8; 128],
    extended: Vec<(char, u8)>,
}

impl Charset {
    pub fn new(symbols: &str) -> Result<Self> {
        let count = symbols.chars().count();
        if count != CHARSET_LEN {
            return Err(Error::new(
                Kind::CharsetLength(count),
                "Charset must contain exactly 64 symbols.",
            ));
        }

        let mut table = ['\0'; CHARSET_LEN];
        for (slot, symbol) in table.iter_mut().zip(symbols.chars()) {
            *slot = symbol;
        }

        Self::from_symbols(table)
    }

    pub fn from_symbols(symbols: [char; CHARSET_LEN]) -> Result<Self> {
        let mut ascii = [ABSENT; 128];
        let mut extended = Vec::new();

        for (value, &symbol) in symbols.iter().enumerate() {
            let seen = if symbol.is_ascii() {
                let slot = &mut ascii[symbol as usize];
                let seen = *slot != ABSENT;
                *slot = value as i8;
                seen
            } else {
                let seen = extended.iter().any(|&(c, _)| c == symbol);
                extended.push((symbol, value as u8));
                seen
            };

            if seen {
                return Err(Error::new(
                    Kind::DuplicateSymbol(value, symbol),
                    "Charset symbols must be distinct.",
                ));
            }
        }

        Ok(Charset {
            symbols,
            ascii,
            extended,
        })
    }

    /// A permutation of the default charset chosen by `salt`. The same salt always yields
    /// the same permutation; an empty salt yields the default charset.
    pub fn salted<T: AsRef<[u8]>>(salt: T) -> Self {
        let mut charset = Self::default();
        if let Some(seed) = Salt(salt).seed() {
            let mut symbols = charset.symbols;
            symbols.shuffle(&mut StdRng::from_seed(seed));
            charset = Self::from_symbols(symbols).expect("A permutation of a valid charset is valid");
        }
        charset
    }

    /// The symbol for a 6-bit value. Bits above the sixth are ignored.
    #[inline]
    pub fn symbol(&self, value: u8) -> char {
        self.symbols[usize::from(value & 0x3f)]
    }

    /// The 6-bit value of `symbol`, if it belongs to this charset.
    #[inline]
    pub fn index_of(&self, symbol: char) -> Option<u8> {
        if symbol.is_ascii() {
            match self.ascii[symbol as usize] {
                ABSENT => None,
                value => Some(value as u8),
            }
        } else {
            self.extended
                .iter()
                .find(|&&(c, _)| c == symbol)
                .map(|&(_, value)| value)
        }
    }

    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.index_of(symbol).is_some()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::new(DEFAULT_CHARSET).expect("Default charset is valid")
    }
}

impl FromStr for Charset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|&c| f.write_char(c))
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Charset").field(&self.to_string()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_charset_maps_positions() {
        let charset = Charset::default();
        assert_eq!(charset.symbols().len(), CHARSET_LEN);
        assert_eq!(charset.symbol(0), '0');
        assert_eq!(charset.symbol(10), 'A');
        assert_eq!(charset.symbol(36), 'a');
        assert_eq!(charset.symbol(62), '-');
        assert_eq!(charset.symbol(63), '_');
        assert_eq!(charset.to_string(), DEFAULT_CHARSET);
    }

    #[test]
    fn index_of_inverts_symbol() {
        let charset = Charset::default();
        for value in 0..64u8 {
            assert_eq!(charset.index_of(charset.symbol(value)), Some(value));
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let charset = Charset::default();
        assert_eq!(charset.index_of('a'), Some(36));
        assert_eq!(charset.index_of('A'), Some(10));
        assert!(!charset.contains('+'));
        assert!(!charset.contains('='));
        assert!(!charset.contains('é'));
    }

    #[test]
    fn rejects_wrong_length() {
        let error = Charset::new("abc").unwrap_err();
        assert_eq!(error.kind(), Kind::CharsetLength(3));
        assert!(error.kind().is_invalid_charset());

        let long = format!("{}!", DEFAULT_CHARSET);
        assert_eq!(
            Charset::new(&long).unwrap_err().kind(),
            Kind::CharsetLength(65)
        );
    }

    #[test]
    fn rejects_duplicates() {
        let symbols = DEFAULT_CHARSET.replace('_', "0");
        let error = symbols.parse::<Charset>().unwrap_err();
        assert_eq!(error.kind(), Kind::DuplicateSymbol(63, '0'));
        assert!(error.kind().is_invalid_charset());
    }

    #[test]
    fn counts_symbols_not_bytes() {
        let symbols: String = "αβγδ".chars().chain(DEFAULT_CHARSET.chars().skip(4)).collect();
        let charset = Charset::new(&symbols).unwrap();
        assert_eq!(charset.index_of('γ'), Some(2));
        assert_eq!(charset.index_of('4'), Some(4));
        assert_eq!(charset.index_of('0'), None);
        assert_eq!(charset.symbol(3), 'δ');
    }

    #[test]
    fn rejects_non_ascii_duplicates() {
        let symbols: String = "ππ".chars().chain(DEFAULT_CHARSET.chars().skip(2)).collect();
        assert_eq!(
            Charset::new(&symbols).unwrap_err().kind(),
            Kind::DuplicateSymbol(1, 'π')
        );
    }

    #[test]
    fn salted_charset_is_a_stable_permutation() {
        let a = Charset::salted("In the beginning");
        let b = Charset::salted(b"In the beginning");
        assert_eq!(a, b);
        assert_ne!(a, Charset::default());

        let mut sorted = a.symbols().to_vec();
        sorted.sort_unstable();
        let mut expected: Vec<char> = DEFAULT_CHARSET.chars().collect();
        expected.sort_unstable();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn different_salts_differ() {
        assert_ne!(Charset::salted("salt a"), Charset::salted("salt b"));
    }

    #[test]
    fn empty_salt_is_default() {
        assert_eq!(Charset::salted(""), Charset::default());
    }
}
