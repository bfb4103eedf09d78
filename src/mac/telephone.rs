//! Telephone interconnect call structures.

use std::fmt;

use consts::*;
use field::Field;
use ident::{ChannelDescriptor, Identifier, Role, ServiceOptions, Value};
use mac::fields::{ExplicitChannelFields, MacFields, VoiceServiceFields};
use mac::opcode::MacOpcode;
use mac::structure::MacStructure;
use util::bcd_digits;

/// Call timer in milliseconds, given the raw 100ms-unit value, where 0 means no limit.
fn call_timer(units: u16) -> Option<u32> {
    match units {
        0 => None,
        n => Some(n as u32 * 100),
    }
}

fn write_timer(f: &mut fmt::Formatter, units: u16) -> fmt::Result {
    match call_timer(units) {
        Some(ms) => write!(f, " TIMER:{}MS", ms),
        None => write!(f, " TIMER:NONE"),
    }
}

structure! {
    /// Interconnect call currently active on this traffic channel.
    pub struct TelephoneInterconnectVoiceChannelUser;
}

impl TelephoneInterconnectVoiceChannelUser {
    const SERVICE: VoiceServiceFields = VoiceServiceFields::at(OCTET_2_BIT_8);
    const TIMER: Field = Field::span(OCTET_3_BIT_16, 16);
    const ADDRESS: Field = Field::span(OCTET_5_BIT_32, 24);

    pub fn options(&self) -> ServiceOptions { Self::SERVICE.service_options(&self.0) }
    /// Call duration limit in milliseconds, if any.
    pub fn call_timer(&self) -> Option<u32> { call_timer(self.0.bits(&Self::TIMER)) }
    /// Radio taking part in the call.
    pub fn address(&self) -> u32 { self.0.int(&Self::ADDRESS) }
}

impl MacStructure for TelephoneInterconnectVoiceChannelUser {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![Identifier::radio(Role::Any, self.address())]
    }

    fn service_options(&self) -> Option<ServiceOptions> { Some(self.options()) }
}

impl fmt::Display for TelephoneInterconnectVoiceChannelUser {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TELEPHONE INTERCONNECT VOICE CHANNEL USER RADIO:{} SVC:[{}]",
            self.address(), self.options())?;
        write_timer(f, self.0.bits(&Self::TIMER))
    }
}

structure! {
    /// Interconnect call granted on an implicit channel. Also decodes the grant update,
    /// which shares its layout.
    pub struct TelephoneInterconnectVoiceChannelGrantImplicit;
}

impl TelephoneInterconnectVoiceChannelGrantImplicit {
    const SERVICE: VoiceServiceFields = VoiceServiceFields::at(OCTET_2_BIT_8);
    const CHANNEL: Field = Field::span(OCTET_3_BIT_16, 16);
    const TIMER: Field = Field::span(OCTET_5_BIT_32, 16);
    const ADDRESS: Field = Field::span(OCTET_7_BIT_48, 24);

    pub fn options(&self) -> ServiceOptions { Self::SERVICE.service_options(&self.0) }
    pub fn channel(&self) -> ChannelDescriptor {
        ChannelDescriptor::Implicit(self.0.channel(&Self::CHANNEL))
    }
    pub fn call_timer(&self) -> Option<u32> { call_timer(self.0.bits(&Self::TIMER)) }
    pub fn address(&self) -> u32 { self.0.int(&Self::ADDRESS) }
}

impl MacStructure for TelephoneInterconnectVoiceChannelGrantImplicit {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::Any, self.address()),
            Identifier::channel(self.channel()),
        ]
    }

    fn channels(&self) -> Vec<ChannelDescriptor> { vec![self.channel()] }
    fn service_options(&self) -> Option<ServiceOptions> { Some(self.options()) }
}

impl fmt::Display for TelephoneInterconnectVoiceChannelGrantImplicit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self.opcode() {
            MacOpcode::TelephoneInterconnectVoiceChannelGrantUpdateImplicit => "GRANT UPDATE",
            _ => "GRANT",
        };

        write!(f, "TELEPHONE INTERCONNECT VOICE CHANNEL {} RADIO:{} CHAN:{} SVC:[{}]",
            label, self.address(), self.channel(), self.options())?;
        write_timer(f, self.0.bits(&Self::TIMER))
    }
}

structure! {
    /// Incoming telephone call for a radio, with the calling party's digits.
    pub struct TelephoneInterconnectAnswerRequest;
}

impl TelephoneInterconnectAnswerRequest {
    const DIGITS: Field = Field::span(OCTET_2_BIT_8, 40);
    const TARGET: Field = Field::span(OCTET_7_BIT_48, 24);

    /// Dialed digits, up to ten.
    pub fn digits(&self) -> String {
        let bits = self.0.long(&Self::DIGITS);
        bcd_digits((0..10).rev().map(|i| (bits >> (i * 4) & 0xF) as u8))
    }

    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
}

impl MacStructure for TelephoneInterconnectAnswerRequest {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::To, self.target()),
            Identifier::new(Role::From, Value::TelephoneNumber(self.digits())),
        ]
    }
}

impl fmt::Display for TelephoneInterconnectAnswerRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TELEPHONE INTERCONNECT ANSWER REQUEST FROM:{} TO:{}", self.digits(),
            self.target())
    }
}

structure! {
    /// Interconnect call granted on an explicit channel pair. Also decodes the grant
    /// update, which shares its layout.
    pub struct TelephoneInterconnectVoiceChannelGrantExplicit;
}

impl TelephoneInterconnectVoiceChannelGrantExplicit {
    const SERVICE: VoiceServiceFields = VoiceServiceFields::at(OCTET_2_BIT_8);
    const CHANNEL: ExplicitChannelFields = ExplicitChannelFields::at(OCTET_3_BIT_16);
    const TIMER: Field = Field::span(OCTET_7_BIT_48, 16);
    const ADDRESS: Field = Field::span(OCTET_9_BIT_64, 24);

    pub fn options(&self) -> ServiceOptions { Self::SERVICE.service_options(&self.0) }
    pub fn channel(&self) -> ChannelDescriptor { Self::CHANNEL.channel(&self.0) }
    pub fn call_timer(&self) -> Option<u32> { call_timer(self.0.bits(&Self::TIMER)) }
    pub fn address(&self) -> u32 { self.0.int(&Self::ADDRESS) }
}

impl MacStructure for TelephoneInterconnectVoiceChannelGrantExplicit {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::Any, self.address()),
            Identifier::channel(self.channel()),
        ]
    }

    fn channels(&self) -> Vec<ChannelDescriptor> { vec![self.channel()] }
    fn service_options(&self) -> Option<ServiceOptions> { Some(self.options()) }
}

impl fmt::Display for TelephoneInterconnectVoiceChannelGrantExplicit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self.opcode() {
            MacOpcode::TelephoneInterconnectVoiceChannelGrantUpdateExplicit => "GRANT UPDATE",
            _ => "GRANT",
        };

        write!(f, "TELEPHONE INTERCONNECT VOICE CHANNEL {} EXPLICIT RADIO:{} CHAN:{} SVC:[{}]",
            label, self.address(), self.channel(), self.options())?;
        write_timer(f, self.0.bits(&Self::TIMER))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ident::Channel;
    use mac::fields::MacFields;

    fn fields(hex: &str) -> MacFields { MacFields::from_hex(hex).unwrap() }

    #[test]
    fn test_user() {
        let s = TelephoneInterconnectVoiceChannelUser::new(fields("03 00 0258 00ABCD"));
        assert_eq!(s.length(), 7);
        assert_eq!(s.call_timer(), Some(60_000));
        assert_eq!(s.address(), 0xABCD);
        assert_eq!(format!("{}", s), concat!("TELEPHONE INTERCONNECT VOICE CHANNEL USER ",
            "RADIO:43981 SVC:[HALF-DUPLEX CIRCUIT PRI0] TIMER:60000MS"));
    }

    #[test]
    fn test_answer_request() {
        let s = TelephoneInterconnectAnswerRequest::new(fields("4A 5551212FFF 000042"));
        assert_eq!(s.digits(), "5551212");
        assert_eq!(s.target(), 0x42);
        assert_eq!(s.identifiers()[1],
            Identifier::new(Role::From, Value::TelephoneNumber("5551212".to_string())));
    }

    #[test]
    fn test_grant_explicit() {
        let s = TelephoneInterconnectVoiceChannelGrantExplicit::new(
            fields("C8 00 2064 30C8 0000 000042"));
        assert_eq!(s.opcode(), MacOpcode::TelephoneInterconnectVoiceChannelGrantExplicit);
        assert_eq!(s.length(), 11);
        assert_eq!(s.call_timer(), None);
        assert_eq!(s.channel().downlink_channel(), Channel::new(0x2064));
        assert!(format!("{}", s).ends_with("TIMER:NONE"));

        let s = TelephoneInterconnectVoiceChannelGrantImplicit::new(
            fields("49 00 1001 0001 000042"));
        assert_eq!(s.call_timer(), Some(100));
        assert!(format!("{}", s).contains("GRANT UPDATE"));
    }
}
