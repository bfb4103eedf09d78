//! Shared, bit-addressable buffers holding corrected MAC PDU payloads.

use std;
use std::sync::Arc;

use collect_slice::CollectSlice;
use hex;
use num::PrimInt;

use consts::OCTET_BITS;
use error::{MacError, Result};
use field::Field;
use util::div_ceil;

/// Immutable view of a run of bits, MSB first within each byte.
///
/// Clones and sub-buffers share the underlying bytes, so structures decoded from one
/// PDU burst all refer to the same storage.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BitBuffer {
    /// Backing bytes, shared by all views.
    bytes: Arc<[u8]>,
    /// Index of the first visible bit within `bytes`.
    start: usize,
    /// Number of visible bits.
    len: usize,
    /// Number of bits corrected by the upstream FEC stage.
    corrected: usize,
    /// Whether the upstream stage flagged the payload as failing its CRC.
    crc_failed: bool,
}

impl BitBuffer {
    /// Create a buffer over a copy of the given bytes.
    pub fn from_bytes(bytes: &[u8]) -> BitBuffer {
        Self::from_vec(bytes.to_vec())
    }

    /// Create a buffer taking ownership of the given bytes.
    pub fn from_vec(bytes: Vec<u8>) -> BitBuffer {
        let len = bytes.len() * OCTET_BITS;

        BitBuffer {
            bytes: Arc::from(bytes),
            start: 0,
            len: len,
            corrected: 0,
            crc_failed: false,
        }
    }

    /// Create a buffer from a string of hex digits, such as a logged PDU. Whitespace
    /// between digits is ignored.
    pub fn from_hex(digits: &str) -> Result<BitBuffer> {
        let digits = digits.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        Ok(Self::from_vec(hex::decode(digits)?))
    }

    /// Record the number of bits the FEC stage corrected in this payload.
    pub fn with_corrected(mut self, corrected: usize) -> Self {
        self.corrected = corrected;
        self
    }

    /// Mark the payload as failing its CRC check.
    pub fn with_crc_failed(mut self) -> Self {
        self.crc_failed = true;
        self
    }

    /// Number of visible bits.
    pub fn len(&self) -> usize { self.len }
    /// Whether there are no visible bits.
    pub fn is_empty(&self) -> bool { self.len == 0 }
    /// Number of bits corrected by FEC.
    pub fn corrected(&self) -> usize { self.corrected }
    /// Whether the payload failed its CRC check.
    pub fn crc_failed(&self) -> bool { self.crc_failed }

    /// Number of whole or partial octets covered by the visible bits.
    pub fn octets(&self) -> usize { div_ceil(self.len, OCTET_BITS) }

    /// Get the bit at the given index.
    ///
    /// Reading past the end is a contract violation: it panics in debug builds and
    /// yields `false` otherwise.
    pub fn get(&self, bit: usize) -> bool {
        debug_assert!(bit < self.len, "bit {} out of range for {} bit buffer", bit, self.len);

        if bit >= self.len {
            return false;
        }

        let abs = self.start + bit;
        self.bytes[abs / OCTET_BITS] >> (7 - abs % OCTET_BITS) & 1 == 1
    }

    /// Extract the given field, relative to `offset`, into an integer of any width.
    pub fn get_bits<T: PrimInt>(&self, field: &Field, offset: usize) -> T {
        debug_assert!(field.len() <= std::mem::size_of::<T>() * OCTET_BITS);

        field.indices().fold(T::zero(), |accum, bit| {
            let accum = accum << 1;

            if self.get(offset + bit) {
                accum | T::one()
            } else {
                accum
            }
        })
    }

    /// Extract a field of up to 32 bits.
    pub fn get_int(&self, field: &Field, offset: usize) -> u32 {
        self.get_bits(field, offset)
    }

    /// Extract a field of up to 64 bits.
    pub fn get_long(&self, field: &Field, offset: usize) -> u64 {
        self.get_bits(field, offset)
    }

    /// Extract a field of up to 32 bits, checking it lies within the buffer.
    pub fn try_int(&self, field: &Field, offset: usize) -> Result<u32> {
        match field.last() {
            Some(last) if offset + last >= self.len => Err(MacError::OutOfBounds(offset + last)),
            _ => Ok(self.get_int(field, offset)),
        }
    }

    /// Whether every bit of the given field, relative to `offset`, is in range.
    pub fn contains(&self, field: &Field, offset: usize) -> bool {
        field.last().map_or(true, |last| offset + last < self.len)
    }

    /// Copy consecutive octets starting at bit `start` into `out`, returning the number
    /// of octets copied. Octets that would run past the buffer aren't copied.
    pub fn copy_octets(&self, start: usize, out: &mut [u8]) -> usize {
        let avail = self.len.saturating_sub(start) / OCTET_BITS;

        (0..avail)
            .map(|i| self.get_bits::<u8>(&Field::span(start + i * OCTET_BITS, OCTET_BITS), 0))
            .collect_slice(out)
    }

    /// Create a view of bits `start` up to, but not including, `end`.
    ///
    /// The view shares storage with this buffer.
    pub fn sub_buffer(&self, start: usize, end: usize) -> BitBuffer {
        debug_assert!(start <= end && end <= self.len);

        let end = std::cmp::min(end, self.len);
        let start = std::cmp::min(start, end);

        BitBuffer {
            bytes: self.bytes.clone(),
            start: self.start + start,
            len: end - start,
            corrected: self.corrected,
            crc_failed: self.crc_failed,
        }
    }
}

/// Assembles a `BitBuffer` by writing fields, for framers and fixtures.
pub struct BitBufferBuilder {
    bytes: Vec<u8>,
}

impl BitBufferBuilder {
    /// Create a builder holding the given number of zeroed octets.
    pub fn new(octets: usize) -> BitBufferBuilder {
        BitBufferBuilder {
            bytes: vec![0; octets],
        }
    }

    /// Set or clear the bit at the given index.
    pub fn set(&mut self, bit: usize, val: bool) -> &mut Self {
        let mask = 1 << (7 - bit % OCTET_BITS);

        if val {
            self.bytes[bit / OCTET_BITS] |= mask;
        } else {
            self.bytes[bit / OCTET_BITS] &= !mask;
        }

        self
    }

    /// Write the low bits of `val` into the given field, relative to `offset`.
    pub fn set_int(&mut self, field: &Field, offset: usize, val: u64) -> &mut Self {
        let len = field.len();

        for (i, bit) in field.indices().enumerate() {
            self.set(offset + bit, val >> (len - i - 1) & 1 == 1);
        }

        self
    }

    /// Finish building.
    pub fn build(&self) -> BitBuffer {
        BitBuffer::from_bytes(&self.bytes[..])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use field::Field;
    use hex::FromHexError;

    #[test]
    fn test_from_hex() {
        let b = BitBuffer::from_hex("C0 0a\n1F").unwrap();
        assert_eq!(b.len(), 24);
        assert_eq!(b.get_int(&Field::span(0, 24), 0), 0xC00A1F);
        assert!(BitBuffer::from_hex("").unwrap().is_empty());

        assert_eq!(BitBuffer::from_hex("ABC"),
            Err(MacError::InvalidHex(FromHexError::OddLength)));
        assert_eq!(BitBuffer::from_hex("A G"),
            Err(MacError::InvalidHex(FromHexError::InvalidHexCharacter { c: 'G', index: 1 })));
    }

    #[test]
    fn test_get() {
        let b = BitBuffer::from_bytes(&[0b10100000, 0b00000001]);
        assert_eq!(b.len(), 16);
        assert!(b.get(0));
        assert!(!b.get(1));
        assert!(b.get(2));
        assert!(b.get(15));
        assert!(!b.get(14));
    }

    #[test]
    fn test_get_int() {
        let b = BitBuffer::from_bytes(&[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(b.get_int(&Field::span(0, 8), 0), 0xDE);
        assert_eq!(b.get_int(&Field::span(4, 8), 0), 0xEA);
        assert_eq!(b.get_int(&Field::span(0, 8), 8), 0xAD);
        assert_eq!(b.get_int(&Field::span(0, 32), 0), 0xDEADBEEF);
        assert_eq!(b.get_int(&Field::span(31, 1), 0), 1);
    }

    #[test]
    fn test_field_forms_agree() {
        const LIST: Field = Field::bits(&[4, 5, 6, 7, 8, 9, 10, 11]);
        let b = BitBuffer::from_bytes(&[0x5A, 0xC3, 0x0F]);

        for offset in 0..8 {
            assert_eq!(b.get_int(&LIST, offset), b.get_int(&Field::span(4, 8), offset));
        }

        const SPLIT: Field = Field::bits(&[0, 1, 22, 23]);
        assert_eq!(b.get_int(&SPLIT, 0), 0b0111);
    }

    #[test]
    fn test_lengths() {
        let mut bld = BitBufferBuilder::new(9);

        for len in 1..33 {
            let val = (1u64 << len) - 1 & 0xA5A5_5A5A;
            let f = Field::span(3, len);
            let b = bld.set_int(&f, 0, val).build();
            assert_eq!(b.get_int(&f, 0) as u64, val);
            bld.set_int(&f, 0, 0);
        }

        for len in 33..65 {
            let val = (if len == 64 { !0 } else { (1u64 << len) - 1 }) & 0x0123_4567_89AB_CDEF;
            let f = Field::span(5, len);
            let b = bld.set_int(&f, 0, val).build();
            assert_eq!(b.get_long(&f, 0), val);
            bld.set_int(&f, 0, 0);
        }
    }

    #[test]
    fn test_generic_width() {
        let b = BitBuffer::from_bytes(&[0x12, 0x34]);
        assert_eq!(b.get_bits::<u8>(&Field::span(4, 8), 0), 0x23);
        assert_eq!(b.get_bits::<u16>(&Field::span(0, 16), 0), 0x1234);
    }

    #[test]
    fn test_sub_buffer() {
        let b = BitBuffer::from_bytes(&[0xF0, 0x0F, 0xAA]);
        let s = b.sub_buffer(4, 20);
        assert_eq!(s.len(), 16);
        assert_eq!(s.get_int(&Field::span(0, 16), 0), 0x00FA);
        let t = s.sub_buffer(8, 16);
        assert_eq!(t.get_int(&Field::span(0, 8), 0), 0xFA);
    }

    #[test]
    fn test_try_int() {
        let b = BitBuffer::from_bytes(&[0xFF]);
        assert_eq!(b.try_int(&Field::span(0, 8), 0), Ok(0xFF));
        assert_eq!(b.try_int(&Field::span(4, 8), 0), Err(MacError::OutOfBounds(11)));
        assert!(b.contains(&Field::span(0, 8), 0));
        assert!(!b.contains(&Field::span(0, 8), 1));
    }

    #[test]
    fn test_copy_octets() {
        let b = BitBuffer::from_hex("0102030405").unwrap();
        let mut out = [0; 3];
        assert_eq!(b.copy_octets(8, &mut out[..]), 3);
        assert_eq!(out, [2, 3, 4]);
        let mut out = [0; 8];
        assert_eq!(b.copy_octets(24, &mut out[..]), 2);
        assert_eq!(&out[..2], &[4, 5]);
    }

    #[test]
    fn test_flags() {
        let b = BitBuffer::from_bytes(&[0]).with_corrected(3).with_crc_failed();
        assert_eq!(b.corrected(), 3);
        assert!(b.crc_failed());
        assert!(b.sub_buffer(0, 4).crc_failed());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_out_of_range() {
        BitBuffer::from_bytes(&[0]).get(8);
    }
}
