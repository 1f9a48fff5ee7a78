//! Conversions between bits and the forms callers usually hold: `'0'`/`'1'` text, bytes,
//! readers and MIME-typed blobs.

use std::io::{self, Read};

use crate::{decode, encode, Charset, Result, Weird64};

pub const DEFAULT_MIME: &str = "application/octet-stream";

/// Decoded bytes together with the MIME type the caller assigned them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blob {
    pub data: Vec<u8>,
    pub mime: String,
}

impl Blob {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Expands each byte into eight bits, most significant first.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    bytes
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |shift| (byte >> shift) & 1 == 1))
        .collect()
}

/// Packs bits into bytes, most significant first. A final partial byte is filled out with
/// zero bits.
pub fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .zip((0..8).rev())
                .fold(0u8, |byte, (&bit, shift)| byte | u8::from(bit) << shift)
        })
        .collect()
}

/// Encodes a string of binary digits. Every `'1'` is a set bit; any other character is a
/// clear bit.
pub fn encode_binary_str(binary: &str, charset: &Charset) -> String {
    let bits: Vec<bool> = binary.chars().map(|c| c == '1').collect();
    encode(&bits, charset)
}

pub fn decode_binary_str(input: &str, charset: &Charset) -> Result<String> {
    let bits = decode(input, charset)?;
    Ok(bits.into_iter().map(|bit| if bit { '1' } else { '0' }).collect())
}

pub fn encode_bytes(bytes: &[u8], charset: &Charset) -> String {
    encode(&bytes_to_bits(bytes), charset)
}

pub fn decode_bytes(input: &str, charset: &Charset) -> Result<Vec<u8>> {
    decode(input, charset).map(|bits| bits_to_bytes(&bits))
}

/// Reads `reader` to the end and encodes its contents as bytes.
pub fn encode_reader<R: Read>(mut reader: R, charset: &Charset) -> io::Result<String> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    log::trace!("Encoding {} bytes read from stream", data.len());
    Ok(encode_bytes(&data, charset))
}

/// Decodes `input` as bytes, labelled with `mime` or [`DEFAULT_MIME`].
pub fn decode_blob(input: &str, mime: Option<&str>, charset: &Charset) -> Result<Blob> {
    Ok(Blob {
        data: decode_bytes(input, charset)?,
        mime: mime.unwrap_or(DEFAULT_MIME).to_owned(),
    })
}

impl Weird64 {
    pub fn encode_binary_str(&self, binary: &str) -> String {
        encode_binary_str(binary, &self.charset)
    }

    pub fn decode_binary_str<S: AsRef<str>>(&self, input: S) -> Result<String> {
        decode_binary_str(input.as_ref(), &self.charset)
    }

    pub fn encode_bytes<B: AsRef<[u8]>>(&self, bytes: B) -> String {
        encode_bytes(bytes.as_ref(), &self.charset)
    }

    pub fn decode_bytes<S: AsRef<str>>(&self, input: S) -> Result<Vec<u8>> {
        decode_bytes(input.as_ref(), &self.charset)
    }

    pub fn encode_reader<R: Read>(&self, reader: R) -> io::Result<String> {
        encode_reader(reader, &self.charset)
    }

    pub fn decode_blob<S: AsRef<str>>(&self, input: S, mime: Option<&str>) -> Result<Blob> {
        decode_blob(input.as_ref(), mime, &self.charset)
    }
}
