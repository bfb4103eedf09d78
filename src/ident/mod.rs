//! Typed identifiers normalized from raw structure fields.
//!
//! Every structure reports the identifiers it carries as a list of `Identifier`s, each
//! pairing a `Value` with the `Role` it plays in the message. Identifiers compare by
//! role and value, so the same radio seen in different structures compares equal.

pub mod channel;
pub mod crypto;
pub mod location;
pub mod options;
pub mod radio;
pub mod site;
pub mod vendor;

pub use self::channel::{Channel, ChannelDescriptor, ChannelType, FrequencyBand, FrequencyBandMap};
pub use self::crypto::EncryptionKey;
pub use self::location::{Coordinate, Location};
pub use self::options::{
    DataServiceOptions,
    ServiceOptions,
    SystemService,
    SystemServiceClass,
    SystemServices,
    Unconfirmed,
};
pub use self::radio::{FullyQualified, Talkgroup};
pub use self::vendor::Vendor;

use std::fmt;

/// Part an identifier plays in a message.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub enum Role {
    /// Destination of the message or call.
    To,
    /// Originator of the message or call.
    From,
    /// Neither, such as a site or channel.
    Any,
}

/// Semantic category of an identifier, independent of its representation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub enum IdentifierKind {
    Radio,
    Talkgroup,
    PatchGroup,
    Wacn,
    System,
    Rfss,
    Site,
    LocationRegistrationArea,
    Channel,
    EncryptionKey,
    UnitStatus,
    UserStatus,
    ShortMessage,
    TelephoneNumber,
    Location,
    TalkerAlias,
    ColorCode,
}

/// Value of an identifier.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub enum Value {
    /// 24-bit radio unit address.
    Radio(u32),
    /// Radio unit qualified by its home network.
    FullyQualifiedRadio(FullyQualified),
    /// 16-bit group address.
    Talkgroup(Talkgroup),
    /// Group qualified by its home network.
    FullyQualifiedTalkgroup(FullyQualified),
    /// Supergroup formed by dynamically regrouping other talkgroups.
    PatchGroup(Talkgroup),
    /// 20-bit wide area communication network ID.
    Wacn(u32),
    /// 12-bit system ID.
    System(u16),
    /// RF subsystem ID within a system.
    Rfss(u8),
    /// Site ID within an RFSS.
    Site(u8),
    /// Location registration area.
    Lra(u8),
    /// Channel a service is carried on.
    Channel(ChannelDescriptor),
    /// Encryption algorithm and key.
    EncryptionKey(EncryptionKey),
    /// Unit status code.
    UnitStatus(u8),
    /// User status code.
    UserStatus(u8),
    /// Predefined short message code.
    ShortMessage(u16),
    /// Dialed telephone digits.
    TelephoneNumber(String),
    /// Talker GPS position.
    Location(Location),
    /// Talker alias text.
    TalkerAlias(String),
    /// 12-bit color code of a TDMA channel.
    ColorCode(u16),
}

impl Value {
    /// Category of the value.
    pub fn kind(&self) -> IdentifierKind {
        match *self {
            Value::Radio(_) | Value::FullyQualifiedRadio(_) => IdentifierKind::Radio,
            Value::Talkgroup(_) | Value::FullyQualifiedTalkgroup(_) => IdentifierKind::Talkgroup,
            Value::PatchGroup(_) => IdentifierKind::PatchGroup,
            Value::Wacn(_) => IdentifierKind::Wacn,
            Value::System(_) => IdentifierKind::System,
            Value::Rfss(_) => IdentifierKind::Rfss,
            Value::Site(_) => IdentifierKind::Site,
            Value::Lra(_) => IdentifierKind::LocationRegistrationArea,
            Value::Channel(_) => IdentifierKind::Channel,
            Value::EncryptionKey(_) => IdentifierKind::EncryptionKey,
            Value::UnitStatus(_) => IdentifierKind::UnitStatus,
            Value::UserStatus(_) => IdentifierKind::UserStatus,
            Value::ShortMessage(_) => IdentifierKind::ShortMessage,
            Value::TelephoneNumber(_) => IdentifierKind::TelephoneNumber,
            Value::Location(_) => IdentifierKind::Location,
            Value::TalkerAlias(_) => IdentifierKind::TalkerAlias,
            Value::ColorCode(_) => IdentifierKind::ColorCode,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::Radio(addr) => write!(f, "RADIO {}", addr),
            Value::FullyQualifiedRadio(ref fq) => write!(f, "RADIO {}", fq),
            Value::Talkgroup(tg) => write!(f, "TALKGROUP {}", tg),
            Value::FullyQualifiedTalkgroup(ref fq) => write!(f, "TALKGROUP {}", fq),
            Value::PatchGroup(tg) => write!(f, "SUPERGROUP {}", tg),
            Value::Wacn(wacn) => write!(f, "WACN {:05X}", wacn),
            Value::System(sys) => write!(f, "SYSTEM {:03X}", sys),
            Value::Rfss(rfss) => write!(f, "RFSS {}", rfss),
            Value::Site(site) => write!(f, "SITE {}", site),
            Value::Lra(lra) => write!(f, "LRA {}", lra),
            Value::Channel(ch) => write!(f, "CHANNEL {}", ch),
            Value::EncryptionKey(key) => write!(f, "{}", key),
            Value::UnitStatus(s) => write!(f, "UNIT STATUS {}", s),
            Value::UserStatus(s) => write!(f, "USER STATUS {}", s),
            Value::ShortMessage(m) => write!(f, "MESSAGE {}", m),
            Value::TelephoneNumber(ref num) => write!(f, "TELEPHONE {}", num),
            Value::Location(ref loc) => write!(f, "LOCATION {}", loc),
            Value::TalkerAlias(ref alias) => write!(f, "ALIAS {}", alias),
            Value::ColorCode(cc) => write!(f, "COLOR CODE {:03X}", cc),
        }
    }
}

/// Identifier carried by a structure.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct Identifier {
    role: Role,
    value: Value,
}

impl Identifier {
    pub fn new(role: Role, value: Value) -> Identifier {
        Identifier {
            role: role,
            value: value,
        }
    }

    /// Local radio unit address.
    pub fn radio(role: Role, addr: u32) -> Identifier {
        Self::new(role, Value::Radio(addr))
    }

    /// Local talkgroup address.
    pub fn talkgroup(role: Role, addr: u16) -> Identifier {
        Self::new(role, Value::Talkgroup(Talkgroup::from_bits(addr)))
    }

    /// Radio unit seen at `local` with the given home identity. Degrades to the local
    /// address alone when the WACN is zero.
    pub fn roaming_radio(role: Role, local: u32, wacn: u32, system: u16, id: u32)
        -> Identifier
    {
        if wacn == 0 {
            Self::radio(role, local)
        } else {
            Self::new(role, Value::FullyQualifiedRadio(
                FullyQualified::new(local, wacn, system, id)))
        }
    }

    /// Radio unit whose home ID also serves as its local address.
    pub fn aliased_radio(role: Role, id: u32, wacn: u32, system: u16) -> Identifier {
        Self::roaming_radio(role, id, wacn, system, id)
    }

    /// Talkgroup seen at `local` with the given home identity. Degrades to the local
    /// address alone when the WACN is zero.
    pub fn roaming_talkgroup(role: Role, local: u16, wacn: u32, system: u16, id: u16)
        -> Identifier
    {
        if wacn == 0 {
            Self::talkgroup(role, local)
        } else {
            Self::new(role, Value::FullyQualifiedTalkgroup(
                FullyQualified::new(local as u32, wacn, system, id as u32)))
        }
    }

    /// Channel carrying a service.
    pub fn channel(ch: ChannelDescriptor) -> Identifier {
        Self::new(Role::Any, Value::Channel(ch))
    }

    pub fn role(&self) -> Role { self.role }
    pub fn value(&self) -> &Value { &self.value }
    pub fn kind(&self) -> IdentifierKind { self.value.kind() }

    /// Fully-qualified identity, if the identifier carries one.
    pub fn fully_qualified(&self) -> Option<FullyQualified> {
        match self.value {
            Value::FullyQualifiedRadio(fq) | Value::FullyQualifiedTalkgroup(fq) => Some(fq),
            _ => None,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.role {
            Role::To => write!(f, "TO:{}", self.value),
            Role::From => write!(f, "FROM:{}", self.value),
            Role::Any => write!(f, "{}", self.value),
        }
    }
}

/// Find the first identifier with the given role and kind.
pub fn find(ids: &[Identifier], role: Role, kind: IdentifierKind) -> Option<&Identifier> {
    ids.iter().find(|id| id.role() == role && id.kind() == kind)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_equality() {
        assert_eq!(Identifier::radio(Role::From, 10), Identifier::radio(Role::From, 10));
        assert!(Identifier::radio(Role::From, 10) != Identifier::radio(Role::To, 10));
        assert!(Identifier::radio(Role::Any, 10) !=
            Identifier::new(Role::Any, Value::UnitStatus(10)));
    }

    #[test]
    fn test_roaming() {
        let id = Identifier::roaming_radio(Role::From, 0x123, 0, 0x3A1, 0x456);
        assert_eq!(id, Identifier::radio(Role::From, 0x123));
        assert_eq!(id.fully_qualified(), None);

        let id = Identifier::roaming_radio(Role::From, 0x123, 0xBEE00, 0x3A1, 0x456);
        assert_eq!(id.kind(), IdentifierKind::Radio);
        assert_eq!(id, Identifier::aliased_radio(Role::From, 0x456, 0xBEE00, 0x3A1));
        assert_eq!(id.fully_qualified().unwrap().local_address(), 0x123);

        let tg = Identifier::roaming_talkgroup(Role::To, 5, 0xBEE00, 1, 6);
        assert_eq!(tg.kind(), IdentifierKind::Talkgroup);
        assert_eq!(Identifier::roaming_talkgroup(Role::To, 5, 0, 1, 6),
            Identifier::talkgroup(Role::To, 5));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Identifier::radio(Role::From, 0x56789A)), "FROM:RADIO 5666970");
        assert_eq!(format!("{}", Identifier::talkgroup(Role::To, 0x1234)), "TO:TALKGROUP 4660");
        assert_eq!(format!("{}", Identifier::new(Role::Any, Value::Wacn(0xBEE00))),
            "WACN BEE00");
    }

    #[test]
    fn test_find() {
        let ids = vec![
            Identifier::talkgroup(Role::To, 1),
            Identifier::radio(Role::From, 2),
        ];

        assert_eq!(find(&ids, Role::From, IdentifierKind::Radio), Some(&ids[1]));
        assert_eq!(find(&ids, Role::To, IdentifierKind::Radio), None);
    }
}
