//! Weird64: a Base64-like encoding for arbitrary bit sequences.
//!
//! The payload is wrapped in a `1` bit on either side and zero-padded to a multiple of six
//! bits, so the decoder can find the end of the data without a length prefix. This is not
//! RFC 4648 Base64 and does not interoperate with it.
//!
//! ```
//! use weird64::Weird64;
//!
//! let weird = Weird64::default();
//! let bits = [true, false, true, false, true, false, true, false, true, false, true, false];
//! assert_eq!(weird.encode(&bits), "rLG");
//! assert_eq!(weird.decode("rLG").unwrap(), bits);
//! ```

use std::{
    fmt::{self, Write},
    iter,
};

mod adapter;
mod charset;
mod error;
mod salt;

pub use adapter::*;
pub use charset::*;
pub use error::*;

const GROUP_BITS: usize = 6;

/// Number of symbols `encode` produces for `bit_len` bits.
pub fn encoded_len(bit_len: usize) -> usize {
    (bit_len + 2 + GROUP_BITS - 1) / GROUP_BITS
}

pub fn encode(bits: &[bool], charset: &Charset) -> String {
    let mut buf = String::with_capacity(encoded_len(bits.len()));
    encode_into(bits, charset, &mut buf).expect("Cannot fail to encode into a string");
    buf
}

pub fn encode_into<W: Write>(bits: &[bool], charset: &Charset, w: &mut W) -> fmt::Result {
    let wrapped = iter::once(true)
        .chain(bits.iter().copied())
        .chain(iter::once(true));

    let mut value = 0u8;
    let mut filled = 0;

    for bit in wrapped {
        value = value << 1 | u8::from(bit);
        filled += 1;

        if filled == GROUP_BITS {
            w.write_char(charset.symbol(value))?;
            value = 0;
            filled = 0;
        }
    }

    // Whatever the trailing sentinel leaves of the last group is zero padding.
    if filled > 0 {
        w.write_char(charset.symbol(value << (GROUP_BITS - filled)))?;
    }

    Ok(())
}

/// Decodes `input` back into bits.
///
/// Characters outside `charset` are skipped without error. Input that leaves fewer than two
/// bits once trailing zeros are stripped (empty input, nothing but unknown characters, or
/// all-zero symbols) is rejected with [`Kind::MalformedInput`].
pub fn decode(input: &str, charset: &Charset) -> Result<Vec<bool>> {
    // The leading sentinel is held apart so it never has to be shifted off the front.
    let mut leading = None;
    let mut bits = Vec::with_capacity(input.len() * GROUP_BITS);

    for (idx, c) in input.chars().enumerate() {
        match charset.index_of(c) {
            Some(value) => {
                let mut group = (0..GROUP_BITS)
                    .rev()
                    .map(|shift| (value >> shift) & 1 == 1);
                if leading.is_none() {
                    leading = group.next();
                }
                bits.extend(group);
            }
            None => log::trace!("Skipping unknown symbol {:?} at position {}", c, idx),
        }
    }

    while bits.last() == Some(&false) {
        bits.pop();
    }

    // Both sentinels must survive padding removal: the leading bit plus a set bit after it.
    if leading.is_none() || bits.is_empty() {
        log::debug!(
            "Rejecting encoded input of {} chars: no sentinel bits left after padding",
            input.chars().count()
        );
        return Err(Error::new(
            Kind::MalformedInput,
            "Encoded input has no sentinel bits.",
        ));
    }

    if leading == Some(false) {
        log::trace!("Leading sentinel bit is not set");
    }

    bits.pop();
    Ok(bits)
}

/// A codec bound to one charset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Weird64 {
    pub charset: Charset,
}

impl Weird64 {
    pub fn new(charset: Charset) -> Self {
        Weird64 { charset }
    }

    pub fn with_charset(symbols: &str) -> Result<Self> {
        Charset::new(symbols).map(Weird64::new)
    }

    /// A codec over the default symbols, permuted by `salt`.
    pub fn salted<T: AsRef<[u8]>>(salt: T) -> Self {
        Weird64::new(Charset::salted(salt))
    }
}

impl Weird64 {
    pub fn encode(&self, bits: &[bool]) -> String {
        encode(bits, &self.charset)
    }

    pub fn encode_into<W: Write>(&self, bits: &[bool], w: &mut W) -> fmt::Result {
        encode_into(bits, &self.charset, w)
    }

    pub fn decode<S: AsRef<str>>(&self, input: S) -> Result<Vec<bool>> {
        decode(input.as_ref(), &self.charset)
    }
}
