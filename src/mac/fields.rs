//! Base decoder shared by all MAC structures, and field groups reused across them.

use num::PrimInt;

use bits::BitBuffer;
use consts::{OCTET_BITS, OCTET_2_BIT_8};
use error::Result;
use field::Field;
use ident::{
    Channel,
    ChannelDescriptor,
    ChannelType,
    DataServiceOptions,
    FrequencyBand,
    Identifier,
    Role,
    ServiceOptions,
    Talkgroup,
    Vendor,
};
use mac::opcode::{MacLength, MacOpcode};

/// Opcode octet.
pub const OPCODE: Field = Field::span(0, 8);
/// Vendor octet of opcodes in the upper half.
pub const VENDOR: Field = Field::span(OCTET_2_BIT_8, 8);
/// Length of variable-length structures, in octets.
pub const LENGTH: Field = Field::range(10, 15);
/// Length of vendor-partition structures, in octets.
pub const VENDOR_LENGTH: Field = Field::range(18, 23);
/// Number of entries in a paging structure.
pub const PAGE_COUNT: Field = Field::range(14, 15);

/// Base MAC structure decoder: a buffer and the bit offset of the structure's opcode.
#[derive(Clone, Debug)]
pub struct MacFields {
    buf: BitBuffer,
    offset: usize,
}

impl MacFields {
    /// Interpret the bits of `buf` starting at `offset` as a MAC structure.
    pub fn new(buf: BitBuffer, offset: usize) -> MacFields {
        MacFields {
            buf: buf,
            offset: offset,
        }
    }

    /// Interpret the given hex digits as a MAC structure starting at the first bit.
    pub fn from_hex(hex: &str) -> Result<MacFields> {
        BitBuffer::from_hex(hex).map(|buf| MacFields::new(buf, 0))
    }

    /// Buffer holding the structure.
    pub fn buffer(&self) -> &BitBuffer { &self.buf }
    /// Bit offset of the structure within the buffer.
    pub fn offset(&self) -> usize { self.offset }

    /// Extract the given field.
    pub fn int(&self, field: &Field) -> u32 { self.buf.get_int(field, self.offset) }
    /// Extract the given field of up to 64 bits.
    pub fn long(&self, field: &Field) -> u64 { self.buf.get_long(field, self.offset) }
    /// Extract the given field into an integer of any width.
    pub fn bits<T: PrimInt>(&self, field: &Field) -> T { self.buf.get_bits(field, self.offset) }
    /// Get the single bit at the given index.
    pub fn flag(&self, bit: usize) -> bool { self.buf.get(self.offset + bit) }

    /// Whether the given field lies within the buffer.
    pub fn contains(&self, field: &Field) -> bool { self.buf.contains(field, self.offset) }

    /// Whether the structure's declared length covers the given field and the buffer
    /// holds it.
    pub fn declares(&self, field: &Field) -> bool {
        let declared = self.length(self.opcode()) * OCTET_BITS;
        field.last().map_or(true, |last| last < declared) && self.contains(field)
    }

    /// Extract the given field, if the structure declares it.
    pub fn get(&self, field: &Field) -> Option<u32> {
        self.get_long(field).map(|bits| bits as u32)
    }

    /// Extract the given field of up to 64 bits, if the structure declares it.
    pub fn get_long(&self, field: &Field) -> Option<u64> {
        if self.declares(field) {
            Some(self.long(field))
        } else {
            None
        }
    }

    /// Extract a header field, or 0 if the buffer ends first.
    fn header(&self, field: &Field) -> u32 {
        if self.contains(field) { self.int(field) } else { 0 }
    }

    /// Copy consecutive octets starting at bit `start` into `out`.
    pub fn octets(&self, start: usize, out: &mut [u8]) -> usize {
        self.buf.copy_octets(self.offset + start, out)
    }

    pub fn channel(&self, field: &Field) -> Channel { Channel::new(self.bits(field)) }
    pub fn talkgroup(&self, field: &Field) -> Talkgroup { Talkgroup::from_bits(self.bits(field)) }

    /// Raw opcode octet.
    pub fn opcode_bits(&self) -> u8 { self.bits(&OPCODE) }

    /// Raw vendor octet, or 0 for opcodes in the lower half, which carry none.
    pub fn vendor_bits(&self) -> u8 {
        if self.opcode_bits() >= 0x80 {
            self.header(&VENDOR) as u8
        } else {
            0
        }
    }

    /// Manufacturer of the structure.
    pub fn vendor(&self) -> Vendor { Vendor::from_bits(self.vendor_bits()) }

    /// Type of the structure, according to its opcode and vendor octets.
    pub fn opcode(&self) -> MacOpcode {
        MacOpcode::from_bits(self.opcode_bits(), self.vendor_bits())
    }

    /// Number of octets from the start of the structure to the end of the buffer.
    pub fn remaining_octets(&self) -> usize {
        self.buf.len().saturating_sub(self.offset) / OCTET_BITS
    }

    /// Number of entries announced by the page count field, where 0 means 4.
    pub fn page_count(&self) -> usize {
        match self.header(&PAGE_COUNT) {
            0 => 4,
            n => n as usize,
        }
    }

    /// Length in octets of a structure of the given type at this position. Only the
    /// first three octets are consulted.
    pub fn length(&self, opcode: MacOpcode) -> usize {
        match opcode.length() {
            MacLength::Fixed(n) => n,
            MacLength::LengthField => self.header(&LENGTH) as usize,
            MacLength::VendorLengthField => self.header(&VENDOR_LENGTH) as usize,
            MacLength::PageCount(table) => table[self.page_count() - 1],
            MacLength::Remainder => self.remaining_octets(),
        }
    }
}

/// Voice service options octet.
pub struct VoiceServiceFields {
    pub options: Field,
}

impl VoiceServiceFields {
    /// Field group with the options octet starting at the given bit.
    pub const fn at(start: usize) -> Self {
        VoiceServiceFields { options: Field::span(start, 8) }
    }

    pub fn service_options(&self, f: &MacFields) -> ServiceOptions {
        ServiceOptions::new(f.bits(&self.options))
    }
}

/// Data service options octet.
pub struct DataServiceFields {
    pub options: Field,
}

impl DataServiceFields {
    /// Field group with the options octet starting at the given bit.
    pub const fn at(start: usize) -> Self {
        DataServiceFields { options: Field::span(start, 8) }
    }

    pub fn data_options(&self, f: &MacFields) -> DataServiceOptions {
        DataServiceOptions::new(f.bits(&self.options))
    }
}

/// Pair of channel fields making up an explicit channel.
pub struct ExplicitChannelFields {
    pub tx: Field,
    pub rx: Field,
}

impl ExplicitChannelFields {
    /// Field group with adjacent transmit and receive channels starting at the given bit.
    pub const fn at(start: usize) -> Self {
        ExplicitChannelFields {
            tx: Field::span(start, 16),
            rx: Field::span(start + 16, 16),
        }
    }

    pub fn channel(&self, f: &MacFields) -> ChannelDescriptor {
        ChannelDescriptor::Explicit {
            tx: f.channel(&self.tx),
            rx: f.channel(&self.rx),
        }
    }
}

/// Home network identity (SUID or SGID): 20-bit WACN, 12-bit system, and 24-bit ID.
pub struct SuidFields {
    pub wacn: Field,
    pub system: Field,
    pub id: Field,
}

impl SuidFields {
    /// Field group with contiguous WACN, system, and ID starting at the given bit.
    pub const fn at(start: usize) -> Self {
        SuidFields {
            wacn: Field::span(start, 20),
            system: Field::span(start + 20, 12),
            id: Field::span(start + 32, 24),
        }
    }

    pub fn wacn(&self, f: &MacFields) -> u32 { f.int(&self.wacn) }
    pub fn system(&self, f: &MacFields) -> u16 { f.bits(&self.system) }
    pub fn id(&self, f: &MacFields) -> u32 { f.int(&self.id) }

    /// Home identity, if the structure declares all of it.
    pub fn home(&self, f: &MacFields) -> Option<(u32, u16, u32)> {
        Some((f.get(&self.wacn)?, f.get(&self.system)? as u16, f.get(&self.id)?))
    }

    /// Radio seen at the given local address, qualified by this home identity when the
    /// structure declares it.
    pub fn radio(&self, f: &MacFields, role: Role, local: u32) -> Identifier {
        match self.home(f) {
            Some((wacn, system, id)) => Identifier::roaming_radio(role, local, wacn, system, id),
            None => Identifier::radio(role, local),
        }
    }

    /// Radio whose home ID also serves as its local address.
    pub fn aliased_radio(&self, f: &MacFields, role: Role) -> Identifier {
        Identifier::aliased_radio(role, self.id(f), self.wacn(f), self.system(f))
    }
}

/// Frequency band identifier and the parameters announced for it.
pub enum FrequencyBandFields {
    /// FDMA band with 9-bit bandwidth and offset.
    Fdma {
        id: Field,
        bandwidth: Field,
        offset: Field,
        spacing: Field,
        base: Field,
    },
    /// TDMA band with channel type and 14-bit offset.
    Tdma {
        id: Field,
        kind: Field,
        offset: Field,
        spacing: Field,
        base: Field,
    },
    /// VHF/UHF band with 4-bit bandwidth code and 14-bit offset.
    VhfUhf {
        id: Field,
        bandwidth: Field,
        offset: Field,
        spacing: Field,
        base: Field,
    },
}

impl FrequencyBandFields {
    /// Band identifier the parameters apply to.
    pub fn id(&self, f: &MacFields) -> u8 {
        match *self {
            FrequencyBandFields::Fdma { ref id, .. } |
            FrequencyBandFields::Tdma { ref id, .. } |
            FrequencyBandFields::VhfUhf { ref id, .. } => f.bits(id),
        }
    }

    /// Announced band parameters.
    pub fn band(&self, f: &MacFields) -> FrequencyBand {
        match *self {
            FrequencyBandFields::Fdma { ref bandwidth, ref offset, ref spacing, ref base, .. } =>
                FrequencyBand::new(f.int(base), f.bits(bandwidth), f.bits(offset),
                                   f.bits(spacing)),
            FrequencyBandFields::Tdma { ref kind, ref offset, ref spacing, ref base, .. } =>
                FrequencyBand::tdma(f.int(base), ChannelType::new(f.bits(kind)),
                                    f.bits(offset), f.bits(spacing)),
            FrequencyBandFields::VhfUhf { ref bandwidth, ref offset, ref spacing, ref base, .. } =>
                FrequencyBand::vhf_uhf(f.int(base), f.bits(bandwidth), f.bits(offset),
                                       f.bits(spacing)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bits::BitBuffer;
    use mac::opcode::MacOpcode;

    #[test]
    fn test_base() {
        let f = MacFields::new(BitBuffer::from_hex("FFC0905A").unwrap(), 8);
        assert_eq!(f.opcode_bits(), 0xC0);
        assert_eq!(f.vendor_bits(), 0x90);
        assert_eq!(f.vendor(), Vendor::Motorola);
        assert_eq!(f.opcode(), MacOpcode::GroupVoiceChannelGrantExplicit);
        assert_eq!(f.remaining_octets(), 3);
        assert_eq!(f.int(&Field::span(16, 8)), 0x5A);

        let f = MacFields::new(BitBuffer::from_hex("4090").unwrap(), 0);
        assert_eq!(f.vendor_bits(), 0);
        assert_eq!(f.vendor(), Vendor::Standard);
    }

    #[test]
    fn test_lengths() {
        let f = MacFields::new(BitBuffer::from_hex("710F13").unwrap(), 0);
        assert_eq!(f.length(MacOpcode::AuthenticationDemand), 15);
        assert_eq!(f.length(MacOpcode::GroupVoiceChannelGrantImplicit), 9);
        assert_eq!(f.length(MacOpcode::NullInformation), 3);

        let f = MacFields::new(BitBuffer::from_hex("AAA411").unwrap(), 0);
        assert_eq!(f.length(MacOpcode::HarrisTalkerGpsLocation), 17);
    }

    #[test]
    fn test_page_count() {
        for &(bits, count, octets) in &[(0x01, 1, 4), (0x02, 2, 6), (0x03, 3, 8), (0x00, 4, 10)] {
            let f = MacFields::new(BitBuffer::from_bytes(&[0x11, bits]), 0);
            assert_eq!(f.page_count(), count);
            assert_eq!(f.length(MacOpcode::IndirectGroupPagingWithoutPriority), octets);
        }

        let f = MacFields::new(BitBuffer::from_bytes(&[0x12, 0x03]), 0);
        assert_eq!(f.length(MacOpcode::IndividualPagingWithPriority), 11);
    }

    #[test]
    fn test_suid() {
        const SUID: SuidFields = SuidFields::at(8);
        let f = MacFields::new(BitBuffer::from_hex("00BEE003A1000123").unwrap(), 0);
        assert_eq!(SUID.wacn(&f), 0xBEE00);
        assert_eq!(SUID.system(&f), 0x3A1);
        assert_eq!(SUID.id(&f), 0x000123);
        let id = SUID.radio(&f, Role::From, 55);
        assert_eq!(id.fully_qualified().unwrap().local_address(), 55);
        assert_eq!(id, SUID.aliased_radio(&f, Role::From));
    }

    #[test]
    fn test_explicit_channel() {
        const CH: ExplicitChannelFields = ExplicitChannelFields::at(0);
        let f = MacFields::new(BitBuffer::from_hex("206430C8").unwrap(), 0);
        assert_eq!(CH.channel(&f), ChannelDescriptor::Explicit {
            tx: Channel::new(0x2064),
            rx: Channel::new(0x30C8),
        });
    }
}
