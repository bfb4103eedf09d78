//! MAC PDU header and iteration over the structures a PDU carries.

use std::fmt;

use bits::BitBuffer;
use config::Config;
use consts::*;
use field::Field;
use ident::{EncryptionKey, Identifier, Role, Talkgroup, Value};
use mac::decode::{decode, Structure};
use mac::fields::{MacFields, OPCODE};
use mac::opcode::MacOpcode;
use mac::structure::MacStructure;

/// Type of MAC PDU, from the first 3 bits of the header.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub enum PduType {
    Signal,
    PushToTalk,
    EndPushToTalk,
    Idle,
    Active,
    Hangtime,
    Reserved(u8),
}

impl PduType {
    /// Parse a PDU type from the given 3 bits.
    pub fn from_bits(bits: u8) -> PduType {
        use self::PduType::*;

        debug_assert!(bits >> 3 == 0);

        match bits {
            0b000 => Signal,
            0b001 => PushToTalk,
            0b010 => EndPushToTalk,
            0b011 => Idle,
            0b100 => Active,
            0b110 => Hangtime,
            b => Reserved(b),
        }
    }

    /// Whether PDUs of this type carry a sequence of signaling structures.
    pub fn carries_structures(&self) -> bool {
        use self::PduType::*;

        match *self {
            Signal | Idle | Active | Hangtime => true,
            PushToTalk | EndPushToTalk | Reserved(_) => false,
        }
    }
}

/// Header octet of a MAC PDU.
const PDU_TYPE: Field = Field::range(0, 2);
const PDU_OFFSET: Field = Field::range(3, 5);

/// MAC PDU: a header octet followed by either one PTT structure or a sequence of
/// signaling structures.
#[derive(Clone, Debug)]
pub struct MacPdu {
    buf: BitBuffer,
}

impl MacPdu {
    /// Create a PDU over the given payload, header first, with the CRC removed.
    pub fn new(buf: BitBuffer) -> MacPdu {
        MacPdu { buf: buf }
    }

    pub fn buffer(&self) -> &BitBuffer { &self.buf }

    pub fn pdu_type(&self) -> PduType {
        PduType::from_bits(self.buf.get_bits(&PDU_TYPE, 0))
    }

    /// Number of voice frames between this PDU and the next 4V or 2V burst.
    pub fn offset(&self) -> u8 { self.buf.get_bits(&PDU_OFFSET, 0) }

    /// Iterate over the structures carried by the PDU.
    pub fn structures<'a>(&'a self, config: &'a Config) -> Structures<'a> {
        Structures {
            pdu: self,
            config: config,
            pos: OCTET_2_BIT_8,
            done: self.buf.len() < OCTET_2_BIT_8,
        }
    }
}

/// Iterator over the structures of a PDU, in order.
///
/// Iteration stops at the end of the buffer, at a structure with zero length, at a
/// structure whose length would run past the buffer, and (when configured) at null
/// information.
pub struct Structures<'a> {
    pdu: &'a MacPdu,
    config: &'a Config,
    /// Bit offset of the next structure.
    pos: usize,
    done: bool,
}

impl<'a> Iterator for Structures<'a> {
    type Item = Structure;

    fn next(&mut self) -> Option<Structure> {
        if self.done {
            return None;
        }

        let buf = &self.pdu.buf;

        if !self.pdu.pdu_type().carries_structures() &&
            self.pos + PTT_OCTETS * OCTET_BITS > buf.len()
        {
            self.done = true;
            return None;
        }

        match self.pdu.pdu_type() {
            PduType::PushToTalk => {
                self.done = true;
                return Some(PushToTalk::new(MacFields::new(buf.clone(), self.pos)).into());
            },
            PduType::EndPushToTalk => {
                self.done = true;
                return Some(EndPushToTalk::new(MacFields::new(buf.clone(), self.pos)).into());
            },
            PduType::Reserved(_) => {
                self.done = true;
                return None;
            },
            _ => {},
        }

        if self.pos + OCTET_BITS > buf.len() {
            self.done = true;
            return None;
        }

        let opcode = buf.get_bits::<u8>(&OPCODE, self.pos);

        if opcode >= VENDOR_PARTITION_START && self.pos + 2 * OCTET_BITS > buf.len() {
            debug!("stopping at opcode {:02X} without vendor octet at bit {}", opcode, self.pos);
            self.done = true;
            return None;
        }

        let s = decode(buf, self.pos, self.config);

        if s.opcode() == MacOpcode::NullInformation && self.config.stop_at_null {
            self.done = true;
            return None;
        }

        let len = s.length();

        if len == 0 || self.pos + len * OCTET_BITS > buf.len() {
            debug!("stopping at {} with length {} at bit {}", s.opcode(), len, self.pos);
            self.done = true;
            return None;
        }

        self.pos += len * OCTET_BITS;

        Some(s)
    }
}

/// Encryption and addressing of a voice transmission, sent at its start.
#[derive(Clone, Debug)]
pub struct PushToTalk(MacFields);

impl PushToTalk {
    const MESSAGE_INDICATOR: usize = OCTET_1_BIT_0;
    const ALGORITHM: Field = Field::span(OCTET_10_BIT_72, 8);
    const KEY: Field = Field::span(OCTET_11_BIT_80, 16);
    const SOURCE: Field = Field::span(OCTET_13_BIT_96, 24);
    const GROUP: Field = Field::span(OCTET_16_BIT_120, 16);

    /// Create a new decoder over the fields following the PDU header.
    pub fn new(fields: MacFields) -> Self { PushToTalk(fields) }

    /// Initialization vector for the voice cipher.
    pub fn message_indicator(&self) -> [u8; 9] {
        let mut mi = [0; 9];
        self.0.octets(Self::MESSAGE_INDICATOR, &mut mi);
        mi
    }

    pub fn key(&self) -> EncryptionKey {
        EncryptionKey::new(self.0.bits(&Self::ALGORITHM), self.0.bits(&Self::KEY))
    }

    pub fn source(&self) -> u32 { self.0.int(&Self::SOURCE) }
    pub fn group(&self) -> Talkgroup { self.0.talkgroup(&Self::GROUP) }
}

impl MacStructure for PushToTalk {
    fn fields(&self) -> &MacFields { &self.0 }
    fn opcode(&self) -> MacOpcode { MacOpcode::PushToTalk }

    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids = vec![
            Identifier::radio(Role::From, self.source()),
            Identifier::new(Role::To, Value::Talkgroup(self.group())),
        ];

        let key = self.key();

        if key.is_encrypted() {
            ids.push(Identifier::new(Role::Any, Value::EncryptionKey(key)));
        }

        ids
    }
}

impl fmt::Display for PushToTalk {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PUSH-TO-TALK FROM:{} TO:{} {}", self.source(), self.group(), self.key())
    }
}

/// Addressing of a voice transmission, sent at its end.
#[derive(Clone, Debug)]
pub struct EndPushToTalk(MacFields);

impl EndPushToTalk {
    const COLOR_CODE: Field = Field::range(4, 15);
    const SOURCE: Field = Field::span(OCTET_10_BIT_72, 24);
    const GROUP: Field = Field::span(OCTET_13_BIT_96, 16);

    /// Create a new decoder over the fields following the PDU header.
    pub fn new(fields: MacFields) -> Self { EndPushToTalk(fields) }

    pub fn color_code(&self) -> u16 { self.0.bits(&Self::COLOR_CODE) }
    pub fn source(&self) -> u32 { self.0.int(&Self::SOURCE) }
    pub fn group(&self) -> Talkgroup { self.0.talkgroup(&Self::GROUP) }
}

impl MacStructure for EndPushToTalk {
    fn fields(&self) -> &MacFields { &self.0 }
    fn opcode(&self) -> MacOpcode { MacOpcode::EndPushToTalk }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::From, self.source()),
            Identifier::new(Role::To, Value::Talkgroup(self.group())),
            Identifier::new(Role::Any, Value::ColorCode(self.color_code())),
        ]
    }
}

impl fmt::Display for EndPushToTalk {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "END PUSH-TO-TALK FROM:{} TO:{} COLOR CODE:{}", self.source(),
            self.group(), self.color_code())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bits::BitBufferBuilder;

    fn pdu(hex: &str) -> MacPdu { MacPdu::new(BitBuffer::from_hex(hex).unwrap()) }

    #[test]
    fn test_pdu_type() {
        assert_eq!(PduType::from_bits(0b000), PduType::Signal);
        assert_eq!(PduType::from_bits(0b110), PduType::Hangtime);
        assert_eq!(PduType::from_bits(0b101), PduType::Reserved(0b101));
        assert!(PduType::Idle.carries_structures());
        assert!(!PduType::PushToTalk.carries_structures());

        let p = pdu("6800");
        assert_eq!(p.pdu_type(), PduType::Idle);
        assert_eq!(p.offset(), 2);
    }

    #[test]
    fn test_structures() {
        // Group voice channel user, then a status query, then padding.
        let p = pdu("00 01 00 0064 000042 5A 000001 000002 00 00 00 00");
        let c = Config::default();
        let opcodes = p.structures(&c).map(|s| s.opcode()).collect::<Vec<_>>();
        assert_eq!(opcodes, vec![
            MacOpcode::GroupVoiceChannelUserAbbreviated,
            MacOpcode::StatusQueryAbbreviated,
        ]);

        let c = Config::default().stop_at_null(false);
        let opcodes = p.structures(&c).map(|s| s.opcode()).collect::<Vec<_>>();
        assert_eq!(opcodes.len(), 3);
        assert_eq!(opcodes[2], MacOpcode::NullInformation);
    }

    #[test]
    fn test_overrun() {
        // Second structure claims 9 octets with only 6 remaining.
        let p = pdu("00 5A 000001 000002 40 00 1001 0064");
        let c = Config::default();
        assert_eq!(p.structures(&c).count(), 1);

        assert_eq!(pdu("").structures(&c).count(), 0);
        assert_eq!(pdu("A0 01 02").structures(&c).count(), 0);
    }

    #[test]
    fn test_missing_vendor_octet() {
        let c = Config::default();
        let p = pdu("00 5A 000001 000002 C0");
        assert_eq!(p.structures(&c).map(|s| s.opcode()).collect::<Vec<_>>(),
            vec![MacOpcode::StatusQueryAbbreviated]);

        assert_eq!(pdu("00 90").structures(&c).count(), 0);
        assert_eq!(pdu("00 90 90 03").structures(&c).count(), 1);
    }

    #[test]
    fn test_trailing_structure() {
        // Authentication demand declaring 6 octets, followed by a group voice channel user.
        let p = pdu("00 71 06 0A 000042 01 00 0064 000042");
        let c = Config::default();
        let s = p.structures(&c).collect::<Vec<_>>();
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].opcode(), MacOpcode::AuthenticationDemand);
        assert_eq!(s[0].identifiers(), vec![Identifier::radio(Role::To, 0x42)]);
        assert_eq!(s[1].opcode(), MacOpcode::GroupVoiceChannelUserAbbreviated);
        assert_eq!(s[1].identifiers().len(), 2);

        // Same structure ending the PDU.
        let s = pdu("00 71 06 0A 000042").structures(&c).collect::<Vec<_>>();
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].identifiers(), vec![Identifier::radio(Role::To, 0x42)]);
        assert!(format!("{}", s[0]).starts_with("AUTHENTICATION DEMAND"));
    }

    #[test]
    fn test_short_ptt() {
        let c = Config::default();
        assert_eq!(pdu("20 00 00 00").structures(&c).count(), 0);
        assert_eq!(pdu("40 00 00 00").structures(&c).count(), 0);
    }

    #[test]
    fn test_ptt() {
        let mut b = BitBufferBuilder::new(18);
        b.set_int(&PDU_TYPE, 0, 0b001)
         .set_int(&Field::span(0, 64), 8, 0x0123_4567_89AB_CDEF)
         .set_int(&Field::span(64, 8), 8, 0x11)
         .set_int(&Field::span(72, 8), 8, 0x84)
         .set_int(&Field::span(80, 16), 8, 0x1234)
         .set_int(&Field::span(96, 24), 8, 0xABCDEF)
         .set_int(&Field::span(120, 16), 8, 0x0064);
        let p = MacPdu::new(b.build());
        let c = Config::default();

        let s = p.structures(&c).collect::<Vec<_>>();
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].opcode(), MacOpcode::PushToTalk);
        assert_eq!(s[0].length(), 17);

        let ptt = PushToTalk::new(MacFields::new(p.buffer().clone(), 8));
        assert_eq!(ptt.message_indicator(),
            [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0x11]);
        assert_eq!(ptt.key(), EncryptionKey::new(0x84, 0x1234));
        assert_eq!(ptt.source(), 0xABCDEF);
        assert_eq!(ptt.group(), Talkgroup::from_bits(100));
        assert_eq!(ptt.identifiers().len(), 3);
    }

    #[test]
    fn test_end_ptt() {
        let mut b = BitBufferBuilder::new(18);
        b.set_int(&PDU_TYPE, 0, 0b010)
         .set_int(&Field::range(4, 15), 8, 0x293)
         .set_int(&Field::span(72, 24), 8, 0x42)
         .set_int(&Field::span(96, 16), 8, 0xFFFF);
        let p = MacPdu::new(b.build());
        let c = Config::default();

        let s = p.structures(&c).next().unwrap();
        assert_eq!(s.opcode(), MacOpcode::EndPushToTalk);
        assert_eq!(format!("{}", s), "END PUSH-TO-TALK FROM:66 TO:ALL COLOR CODE:659");
    }
}
