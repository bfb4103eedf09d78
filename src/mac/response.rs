//! Responses from the infrastructure to service requests: acknowledgements, queueing,
//! and denials.

use std::fmt;

use consts::*;
use field::Field;
use ident::{Identifier, Role, Value};
use mac::fields::{MacFields, SuidFields};
use mac::structure::MacStructure;

/// Service type field, naming the opcode of the request being answered.
const SERVICE_TYPE: Field = Field::range(10, 15);

/// Extra information carried by an acknowledgement about the requesting radio.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AdditionalInfo {
    /// Local address of the requesting radio.
    Source(u32),
    /// Home network of the requesting radio.
    Network { wacn: u32, system: u16 },
}

structure! {
    /// Acknowledges a request on behalf of the infrastructure.
    pub struct AcknowledgeResponseFneAbbreviated;
}

impl AcknowledgeResponseFneAbbreviated {
    const SOURCE: Field = Field::span(OCTET_4_BIT_24, 24);
    const WACN: Field = Field::span(OCTET_3_BIT_16, 20);
    const SYSTEM: Field = Field::span(OCTET_3_BIT_16 + 20, 12);
    const TARGET: Field = Field::span(OCTET_7_BIT_48, 24);

    /// Opcode of the acknowledged service.
    pub fn service_type(&self) -> u8 { self.0.bits(&SERVICE_TYPE) }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }

    /// Additional information about the requester, if marked valid.
    pub fn additional_info(&self) -> Option<AdditionalInfo> {
        if !self.0.flag(OCTET_2_BIT_8) {
            return None;
        }

        Some(if self.0.flag(OCTET_2_BIT_8 + 1) {
            AdditionalInfo::Network {
                wacn: self.0.int(&Self::WACN),
                system: self.0.bits(&Self::SYSTEM),
            }
        } else {
            AdditionalInfo::Source(self.0.int(&Self::SOURCE))
        })
    }
}

impl MacStructure for AcknowledgeResponseFneAbbreviated {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids = vec![Identifier::radio(Role::To, self.target())];

        match self.additional_info() {
            Some(AdditionalInfo::Source(src)) => ids.push(Identifier::radio(Role::From, src)),
            Some(AdditionalInfo::Network { wacn, system }) => {
                ids.push(Identifier::new(Role::From, Value::Wacn(wacn)));
                ids.push(Identifier::new(Role::From, Value::System(system)));
            },
            None => {},
        }

        ids
    }
}

impl fmt::Display for AcknowledgeResponseFneAbbreviated {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ACKNOWLEDGE RESPONSE TO:{} SERVICE:{:02X}", self.target(),
            self.service_type())?;

        match self.additional_info() {
            Some(AdditionalInfo::Source(src)) => write!(f, " FROM:{}", src),
            Some(AdditionalInfo::Network { wacn, system }) =>
                write!(f, " WACN:{:05X} SYSTEM:{:03X}", wacn, system),
            None => Ok(()),
        }
    }
}

/// Define a response carrying a reason code and optional source information.
macro_rules! reasoned_response {
    ($(#[$meta:meta])* pub struct $name:ident = $label:expr;) => {
        structure! {
            $(#[$meta])*
            pub struct $name;
        }

        impl $name {
            const REASON: Field = Field::span(OCTET_3_BIT_16, 8);
            const INFO: Field = Field::span(OCTET_4_BIT_24, 24);
            const TARGET: Field = Field::span(OCTET_7_BIT_48, 24);

            /// Opcode of the answered service.
            pub fn service_type(&self) -> u8 { self.0.bits(&SERVICE_TYPE) }
            pub fn reason(&self) -> u8 { self.0.bits(&Self::REASON) }
            pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }

            /// Address of the requester, if marked valid.
            pub fn source(&self) -> Option<u32> {
                if self.0.flag(OCTET_2_BIT_8) {
                    Some(self.0.int(&Self::INFO))
                } else {
                    None
                }
            }
        }

        impl MacStructure for $name {
            fn fields(&self) -> &MacFields { &self.0 }

            fn identifiers(&self) -> Vec<Identifier> {
                let mut ids = vec![Identifier::radio(Role::To, self.target())];
                ids.extend(self.source().map(|src| Identifier::radio(Role::From, src)));
                ids
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{} TO:{} SERVICE:{:02X} REASON:{:02X}", $label, self.target(),
                    self.service_type(), self.reason())?;

                match self.source() {
                    Some(src) => write!(f, " FROM:{}", src),
                    None => Ok(()),
                }
            }
        }
    };
}

reasoned_response! {
    /// Tells a radio its request is queued until resources free up.
    pub struct QueuedResponse = "QUEUED RESPONSE";
}

reasoned_response! {
    /// Tells a radio its request was denied.
    pub struct DenyResponse = "DENY RESPONSE";
}

structure! {
    /// Acknowledges a request from a roaming radio.
    pub struct AcknowledgeResponseFneExtended;
}

impl AcknowledgeResponseFneExtended {
    const TARGET: Field = Field::span(OCTET_3_BIT_16, 24);
    const SOURCE_SUID: SuidFields = SuidFields::at(OCTET_6_BIT_40);

    pub fn service_type(&self) -> u8 { self.0.bits(&SERVICE_TYPE) }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }

    /// Requesting radio, if marked valid.
    pub fn source(&self) -> Option<Identifier> {
        if self.0.flag(OCTET_2_BIT_8) {
            Some(Self::SOURCE_SUID.aliased_radio(&self.0, Role::From))
        } else {
            None
        }
    }
}

impl MacStructure for AcknowledgeResponseFneExtended {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids = vec![Identifier::radio(Role::To, self.target())];
        ids.extend(self.source());
        ids
    }
}

impl fmt::Display for AcknowledgeResponseFneExtended {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ACKNOWLEDGE RESPONSE EXTENDED TO:{} SERVICE:{:02X}", self.target(),
            self.service_type())?;

        match self.source() {
            Some(src) => write!(f, " {}", src),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use mac::fields::MacFields;

    fn fields(hex: &str) -> MacFields { MacFields::from_hex(hex).unwrap() }

    #[test]
    fn test_ack() {
        let s = AcknowledgeResponseFneAbbreviated::new(fields("60 A0 00 000002 000001"));
        assert_eq!(s.length(), 9);
        assert_eq!(s.service_type(), 0x20);
        assert_eq!(s.additional_info(), Some(AdditionalInfo::Source(2)));
        assert_eq!(s.identifiers().len(), 2);

        let s = AcknowledgeResponseFneAbbreviated::new(fields("60 E0 BEE003A1 000001"));
        assert_eq!(s.additional_info(), Some(AdditionalInfo::Network {
            wacn: 0xBEE00,
            system: 0x3A1,
        }));
        assert_eq!(s.identifiers().len(), 3);

        let s = AcknowledgeResponseFneAbbreviated::new(fields("60 20 00 000002 000001"));
        assert_eq!(s.additional_info(), None);
        assert_eq!(format!("{}", s), "ACKNOWLEDGE RESPONSE TO:1 SERVICE:20");
    }

    #[test]
    fn test_deny() {
        let s = DenyResponse::new(fields("67 80 10 000002 000001"));
        assert_eq!(s.reason(), 0x10);
        assert_eq!(s.source(), Some(2));
        assert_eq!(format!("{}", s), "DENY RESPONSE TO:1 SERVICE:00 REASON:10 FROM:2");

        let s = QueuedResponse::new(fields("61 00 2F 000002 000001"));
        assert_eq!(s.source(), None);
        assert_eq!(s.identifiers(), vec![Identifier::radio(Role::To, 1)]);
    }

    #[test]
    fn test_ack_extended() {
        let s = AcknowledgeResponseFneExtended::new(fields("E0 80 000001 BEE003A1000123"));
        assert_eq!(s.length(), 12);
        assert_eq!(s.source(),
            Some(Identifier::aliased_radio(Role::From, 0x123, 0xBEE00, 0x3A1)));
    }
}
