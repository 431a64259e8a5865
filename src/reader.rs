//! Bounds-checked little-endian reader over a byte slice
//!
//! Every read either returns the requested value and advances the cursor, or
//! fails with [`TnefError::TruncatedInput`] without moving. Offsets reported
//! in errors are `base + position`, so a reader created over a sub-slice can
//! still point at the absolute position inside the enclosing buffer.

use crate::error::{Result, TnefError};

/// Cursor over a borrowed byte slice
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
    base: usize,
}

impl<'a> ByteReader<'a> {
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self::with_base(data, 0)
    }

    /// Reader whose error offsets are shifted by `base`
    #[must_use]
    pub const fn with_base(data: &'a [u8], base: usize) -> Self {
        Self { data, pos: 0, base }
    }

    /// Position relative to the start of the slice
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Position relative to the enclosing buffer
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.base + self.pos
    }

    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Borrow the next `len` bytes and advance past them
    pub fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or_else(|| TnefError::TruncatedInput {
                offset: self.offset(),
                needed: len,
                available: self.remaining(),
            })?;
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.take(len).map(|_| ())
    }

    /// Consume the padding that follows an element of `len` bytes
    pub fn skip_padding(&mut self, len: usize) -> Result<()> {
        self.skip(padding_for(len))
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        self.read_array().map(u64::from_le_bytes)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        self.read_array().map(i16::from_le_bytes)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_array().map(i32::from_le_bytes)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        self.read_array().map(i64::from_le_bytes)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        self.read_array().map(f32::from_le_bytes)
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        self.read_array().map(f64::from_le_bytes)
    }

    /// One byte, nonzero means true
    pub fn read_bool(&mut self) -> Result<bool> {
        self.read_u8().map(|b| b != 0)
    }

    /// Read a `u32` length field as `usize`
    pub fn read_len(&mut self) -> Result<usize> {
        self.read_u32().map(|len| len as usize)
    }
}

/// Bytes of padding needed to bring `len` up to a multiple of 4.
///
/// A length that is already aligned gets no padding, never a full 4 bytes.
#[must_use]
pub const fn padding_for(len: usize) -> usize {
    match len % 4 {
        0 => 0,
        rem => 4 - rem,
    }
}

/// Any nonzero byte means true
#[must_use]
pub fn bool_from(bytes: &[u8]) -> bool {
    bytes.iter().any(|b| *b != 0)
}

/// Decode UTF-16LE code units pairwise.
///
/// Unpaired surrogates and a dangling odd byte become U+FFFD; hostile input
/// never makes this fail.
#[must_use]
pub fn utf16le(bytes: &[u8]) -> String {
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
    let mut text: String = char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    if bytes.len() % 2 == 1 {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}

/// Decode an 8-bit string: UTF-8 when valid, Windows-1252 otherwise
#[must_use]
pub fn string8(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(_) => {
            let (decoded, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes);
            decoded.into_owned()
        }
    }
}

/// Unsigned little-endian integer of up to 8 bytes
#[must_use]
pub fn uint_from(bytes: &[u8]) -> Option<u64> {
    if bytes.len() > 8 {
        return None;
    }
    Some(
        bytes
            .iter()
            .rev()
            .fold(0u64, |acc, b| (acc << 8) | u64::from(*b)),
    )
}
