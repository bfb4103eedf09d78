//! Structures spanning more than one PDU.
//!
//! A multi-fragment structure declares, in its third octet, the total number of data
//! octets it carries. The base structure holds the first part and each continuation
//! fragment that follows holds more, where neither the base nor any continuation counts
//! its opcode and length octets toward the total.

use std::fmt;

use consts::{HEADER_OCTETS, OCTET_3_BIT_16, OCTET_BITS};
use error::{MacError, Result};
use field::Field;
use ident::{Identifier, Role};
use mac::fields::{MacFields, SuidFields};
use mac::opcode::MacOpcode;
use mac::structure::MacStructure;

/// Total data octets declared by a multi-fragment base structure.
pub const DATA_LENGTH: Field = Field::span(OCTET_3_BIT_16, 8);

/// Continuation of a multi-fragment structure. Its data is headerless, beginning at the
/// third octet.
#[derive(Clone, Debug)]
pub struct ContinuationFragment(MacFields);

impl ContinuationFragment {
    /// Create a new decoder over the given base fields.
    pub fn new(fields: MacFields) -> Self { ContinuationFragment(fields) }

    /// Create a continuation from fields with a continuation opcode.
    pub fn from_fields(fields: MacFields) -> Result<Self> {
        match fields.opcode() {
            MacOpcode::MultiFragmentContinuation => Ok(ContinuationFragment(fields)),
            _ => Err(MacError::NotContinuation),
        }
    }

    /// Number of data octets carried, excluding the opcode and length octets.
    pub fn data_octets(&self) -> usize {
        self.0.length(MacOpcode::MultiFragmentContinuation).saturating_sub(HEADER_OCTETS)
    }

    /// Extract a field positioned relative to the first data octet, if the fragment
    /// declares and holds it.
    pub fn get(&self, field: &Field) -> Option<u32> {
        self.get_long(field).map(|bits| bits as u32)
    }

    /// Extract a field of up to 64 bits positioned relative to the first data octet, if
    /// the fragment declares and holds it.
    pub fn get_long(&self, field: &Field) -> Option<u64> {
        let data = self.0.offset() + OCTET_3_BIT_16;
        let declared = self.data_octets() * OCTET_BITS;

        match field.last() {
            Some(last) if last >= declared => None,
            _ if !self.0.buffer().contains(field, data) => None,
            _ => Some(self.0.buffer().get_long(field, data)),
        }
    }
}

impl MacStructure for ContinuationFragment {
    fn fields(&self) -> &MacFields { &self.0 }
    fn identifiers(&self) -> Vec<Identifier> { vec![] }
}

impl fmt::Display for ContinuationFragment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MULTI-FRAGMENT CONTINUATION {} DATA OCTETS", self.data_octets())
    }
}

/// Base structure and the continuation fragments attached to it in arrival order.
#[derive(Clone, Debug)]
pub struct FragmentChain {
    base: MacFields,
    fragments: Vec<ContinuationFragment>,
}

impl FragmentChain {
    /// Create a chain holding only the base structure.
    pub fn new(base: MacFields) -> FragmentChain {
        FragmentChain {
            base: base,
            fragments: Vec::new(),
        }
    }

    /// Base structure fields.
    pub fn base(&self) -> &MacFields { &self.base }

    /// Attached fragments, in arrival order.
    pub fn fragments(&self) -> &[ContinuationFragment] { &self.fragments[..] }

    /// Fragment at the given position, if it has arrived.
    pub fn fragment(&self, idx: usize) -> Option<&ContinuationFragment> {
        self.fragments.get(idx)
    }

    /// Append the next fragment.
    pub fn push(&mut self, frag: ContinuationFragment) { self.fragments.push(frag); }

    /// Total data octets declared by the base structure.
    pub fn data_length(&self) -> usize { self.base.get(&DATA_LENGTH).unwrap_or(0) as usize }

    /// Data octets received so far across the base and all fragments.
    pub fn received(&self) -> usize {
        let base = self.base.length(self.base.opcode()).saturating_sub(HEADER_OCTETS);
        self.fragments.iter().fold(base, |sum, frag| sum + frag.data_octets())
    }

    /// Whether all declared data has been received.
    pub fn is_complete(&self) -> bool { self.received() >= self.data_length() }
}

/// Structure that accepts continuation fragments.
///
/// Identifiers derived from fragment data are recomputed on every access, so fragments
/// attached after a structure is first inspected are always reflected.
pub trait MultiFragment: MacStructure {
    fn chain(&self) -> &FragmentChain;
    fn chain_mut(&mut self) -> &mut FragmentChain;

    /// Attach the next continuation fragment.
    fn add_continuation(&mut self, frag: ContinuationFragment) {
        self.chain_mut().push(frag);
    }

    /// Whether all declared data has been received.
    fn is_complete(&self) -> bool { self.chain().is_complete() }

    /// Extract a field from the fragment at the given position, if it has arrived.
    fn fragment_int(&self, idx: usize, field: &Field) -> Option<u32> {
        self.chain().fragment(idx).and_then(|frag| frag.get(field))
    }

    /// Extract a field of up to 64 bits from the fragment at the given position, if it has
    /// arrived.
    fn fragment_long(&self, idx: usize, field: &Field) -> Option<u64> {
        self.chain().fragment(idx).and_then(|frag| frag.get_long(field))
    }

    /// Join a field of the base structure, supplying the high bits, with a field of the
    /// fragment at the given position, once that fragment has arrived.
    fn split_int(&self, high: &Field, idx: usize, low: &Field) -> Option<u32> {
        let high_bits = self.chain().base().get(high)?;
        let low_bits = self.fragment_int(idx, low)?;
        Some(high_bits << low.len() | low_bits)
    }

    /// Radio seen at `local` whose home identity is carried by the fragment at the given
    /// position, if it has arrived in full.
    fn fragment_radio(&self, idx: usize, suid: &SuidFields, role: Role, local: u32)
        -> Option<Identifier>
    {
        Some(Identifier::roaming_radio(role, local,
            self.fragment_int(idx, &suid.wacn)?,
            self.fragment_int(idx, &suid.system)? as u16,
            self.fragment_int(idx, &suid.id)?))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bits::BitBuffer;
    use field::Field;
    use mac::fields::MacFields;

    fn fields(hex: &str) -> MacFields {
        MacFields::new(BitBuffer::from_hex(hex).unwrap(), 0)
    }

    #[test]
    fn test_continuation() {
        let c = ContinuationFragment::from_fields(fields("1006ABCDEF01")).unwrap();
        assert_eq!(c.data_octets(), 4);
        assert_eq!(c.get(&Field::span(0, 16)), Some(0xABCD));
        assert_eq!(c.get(&Field::span(24, 8)), Some(0x01));
        assert_eq!(c.get(&Field::span(28, 8)), None);
        assert_eq!(c.opcode(), MacOpcode::MultiFragmentContinuation);
        assert_eq!(c.length(), 6);
        assert!(c.identifiers().is_empty());

        assert!(ContinuationFragment::from_fields(fields("4006")).is_err());
    }

    #[test]
    fn test_truncated_continuation() {
        let c = ContinuationFragment::new(fields("100AAB"));
        assert_eq!(c.data_octets(), 8);
        assert_eq!(c.get(&Field::span(0, 8)), Some(0xAB));
        assert_eq!(c.get(&Field::span(0, 16)), None);
    }

    #[test]
    fn test_completeness() {
        // Base of 6 octets carries 4 data octets of 10 declared.
        let mut chain = FragmentChain::new(fields("71060A000000"));
        assert_eq!(chain.data_length(), 10);
        assert_eq!(chain.received(), 4);
        assert!(!chain.is_complete());

        chain.push(ContinuationFragment::new(fields("1005000000")));
        assert_eq!(chain.received(), 7);
        assert!(!chain.is_complete());

        chain.push(ContinuationFragment::new(fields("1005000000")));
        assert_eq!(chain.received(), 10);
        assert!(chain.is_complete());

        chain.push(ContinuationFragment::new(fields("1004FFFF")));
        assert!(chain.is_complete());
        assert_eq!(chain.fragments().len(), 3);
        assert!(chain.fragment(3).is_none());
    }

    #[test]
    fn test_monotonic() {
        let mut chain = FragmentChain::new(fields("71040C0000"));
        let mut was_complete = false;

        for n in 0..12 {
            let complete = chain.is_complete();
            assert!(!was_complete || complete);
            assert_eq!(complete, chain.received() >= 12);
            was_complete = complete;
            chain.push(ContinuationFragment::new(fields(if n % 2 == 0 { "1004AAAA" } else { "1002" })));
        }

        assert!(was_complete);
    }
}
