//! Affiliation, registration, roaming, and authentication structures.

use std::fmt;

use consts::*;
use field::Field;
use ident::{Identifier, Role, Talkgroup, Value};
use ident::site::{AffiliationResponse, RegistrationResponse};
use mac::fields::{MacFields, SuidFields, LENGTH};
use mac::fragment::MultiFragment;
use mac::structure::MacStructure;

structure! {
    /// Answers a radio's request to join a talkgroup.
    pub struct GroupAffiliationResponseAbbreviated;
}

impl GroupAffiliationResponseAbbreviated {
    const RESPONSE: Field = Field::range(14, 15);
    const ANNOUNCEMENT_GROUP: Field = Field::span(OCTET_3_BIT_16, 16);
    const GROUP: Field = Field::span(OCTET_5_BIT_32, 16);
    const TARGET: Field = Field::span(OCTET_7_BIT_48, 24);

    /// Whether the affiliation holds across the whole system rather than the site.
    pub fn global(&self) -> bool { self.0.flag(OCTET_2_BIT_8) }
    pub fn response(&self) -> AffiliationResponse {
        AffiliationResponse::from_bits(self.0.bits(&Self::RESPONSE))
    }
    /// Group whose announcements the radio also receives.
    pub fn announcement_group(&self) -> Talkgroup { self.0.talkgroup(&Self::ANNOUNCEMENT_GROUP) }
    pub fn group(&self) -> Talkgroup { self.0.talkgroup(&Self::GROUP) }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
}

impl MacStructure for GroupAffiliationResponseAbbreviated {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::To, self.target()),
            Identifier::new(Role::Any, Value::Talkgroup(self.group())),
            Identifier::new(Role::Any, Value::Talkgroup(self.announcement_group())),
        ]
    }
}

impl fmt::Display for GroupAffiliationResponseAbbreviated {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GROUP AFFILIATION RESPONSE {:?} TO:{} TG:{} ANNOUNCEMENT TG:{} {}",
            self.response(), self.target(), self.group(), self.announcement_group(),
            if self.global() { "GLOBAL" } else { "LOCAL" })
    }
}

unit_to_unit_structure! {
    /// Asks a radio which talkgroup it's affiliated with.
    pub struct GroupAffiliationQueryAbbreviated = "GROUP AFFILIATION QUERY";
}

structure! {
    /// Answers a radio's registration with a new location registration area.
    pub struct LocationRegistrationResponse;
}

impl LocationRegistrationResponse {
    const RESPONSE: Field = Field::range(14, 15);
    const GROUP: Field = Field::span(OCTET_3_BIT_16, 16);
    const RFSS: Field = Field::span(OCTET_5_BIT_32, 8);
    const SITE: Field = Field::span(OCTET_6_BIT_40, 8);
    const TARGET: Field = Field::span(OCTET_7_BIT_48, 24);

    pub fn response(&self) -> RegistrationResponse {
        RegistrationResponse::from_bits(self.0.bits(&Self::RESPONSE))
    }
    pub fn group(&self) -> Talkgroup { self.0.talkgroup(&Self::GROUP) }
    pub fn rfss(&self) -> u8 { self.0.bits(&Self::RFSS) }
    pub fn site(&self) -> u8 { self.0.bits(&Self::SITE) }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
}

impl MacStructure for LocationRegistrationResponse {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::To, self.target()),
            Identifier::new(Role::Any, Value::Talkgroup(self.group())),
            Identifier::new(Role::Any, Value::Rfss(self.rfss())),
            Identifier::new(Role::Any, Value::Site(self.site())),
        ]
    }
}

impl fmt::Display for LocationRegistrationResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LOCATION REGISTRATION RESPONSE {:?} TO:{} TG:{} RFSS:{} SITE:{}",
            self.response(), self.target(), self.group(), self.rfss(), self.site())
    }
}

structure! {
    /// Answers a radio's registration with the system.
    pub struct UnitRegistrationResponseAbbreviated;
}

impl UnitRegistrationResponseAbbreviated {
    const RESPONSE: Field = Field::range(10, 11);
    const SYSTEM: Field = Field::span(OCTET_2_BIT_8 + 4, 12);
    const SOURCE_ID: Field = Field::span(OCTET_4_BIT_24, 24);
    const ADDRESS: Field = Field::span(OCTET_7_BIT_48, 24);

    pub fn response(&self) -> RegistrationResponse {
        RegistrationResponse::from_bits(self.0.bits(&Self::RESPONSE))
    }
    pub fn system(&self) -> u16 { self.0.bits(&Self::SYSTEM) }
    /// Radio's unit ID within its home system.
    pub fn source_id(&self) -> u32 { self.0.int(&Self::SOURCE_ID) }
    /// Local address assigned to the radio.
    pub fn address(&self) -> u32 { self.0.int(&Self::ADDRESS) }
}

impl MacStructure for UnitRegistrationResponseAbbreviated {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::To, self.address()),
            Identifier::new(Role::Any, Value::System(self.system())),
        ]
    }
}

impl fmt::Display for UnitRegistrationResponseAbbreviated {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UNIT REGISTRATION RESPONSE {:?} TO:{} ID:{} SYSTEM:{:03X}",
            self.response(), self.address(), self.source_id(), self.system())
    }
}

unit_to_unit_structure! {
    /// Commands a radio to register with the system.
    pub struct UnitRegistrationCommandAbbreviated = "UNIT REGISTRATION COMMAND";
}

structure! {
    /// Confirms a radio's deregistration from the system.
    pub struct DeregistrationAcknowledge;
}

impl DeregistrationAcknowledge {
    const WACN: Field = Field::span(OCTET_3_BIT_16, 20);
    const SYSTEM: Field = Field::span(OCTET_3_BIT_16 + 20, 12);
    const SOURCE_ID: Field = Field::span(OCTET_7_BIT_48, 24);

    /// Deregistered radio, named by its home identity.
    pub fn target(&self) -> Identifier {
        Identifier::aliased_radio(Role::To, self.0.int(&Self::SOURCE_ID),
                                  self.0.int(&Self::WACN), self.0.bits(&Self::SYSTEM))
    }
}

impl MacStructure for DeregistrationAcknowledge {
    fn fields(&self) -> &MacFields { &self.0 }
    fn identifiers(&self) -> Vec<Identifier> { vec![self.target()] }
}

impl fmt::Display for DeregistrationAcknowledge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DEREGISTRATION ACKNOWLEDGE {}", self.target())
    }
}

multi_fragment_structure! {
    /// Challenges a radio to prove its identity. The random seed begins in the base
    /// structure and completes, with the challenge, in the first continuation fragment.
    pub struct AuthenticationDemand;
}

impl AuthenticationDemand {
    const TARGET: Field = Field::span(OCTET_4_BIT_24, 24);
    const TARGET_SUID: SuidFields = SuidFields::at(OCTET_7_BIT_48);
    const SEED_PREFIX: Field = Field::span(OCTET_14_BIT_104, 40);
    const SEED_SUFFIX: Field = Field::span(0, 40);
    const CHALLENGE: Field = Field::span(40, 40);

    /// Challenged radio, qualified by home network when the structure declares it.
    pub fn target(&self) -> Option<Identifier> {
        let f = self.fields();
        f.get(&Self::TARGET).map(|local| Self::TARGET_SUID.radio(f, Role::To, local))
    }

    /// First 40 bits of the random seed, carried by the base structure.
    pub fn random_seed_prefix(&self) -> Option<u64> { self.fields().get_long(&Self::SEED_PREFIX) }

    /// Full 80-bit random seed, once the first fragment has arrived.
    pub fn random_seed(&self) -> Option<u128> {
        let prefix = self.random_seed_prefix()?;
        let suffix = self.fragment_long(0, &Self::SEED_SUFFIX)?;
        Some((prefix as u128) << 40 | suffix as u128)
    }

    /// 40-bit random challenge, once the first fragment has arrived.
    pub fn challenge(&self) -> Option<u64> { self.fragment_long(0, &Self::CHALLENGE) }
}

impl MacStructure for AuthenticationDemand {
    fn fields(&self) -> &MacFields { self.0.base() }
    fn identifiers(&self) -> Vec<Identifier> { self.target().into_iter().collect() }
}

impl fmt::Display for AuthenticationDemand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AUTHENTICATION DEMAND")?;

        if let Some(target) = self.target() {
            write!(f, " {}", target)?;
        }

        match (self.random_seed(), self.challenge(), self.random_seed_prefix()) {
            (Some(seed), Some(challenge), _) =>
                write!(f, " SEED:{:020X} CHALLENGE:{:010X}", seed, challenge),
            (_, _, Some(prefix)) => write!(f, " SEED:{:010X}...", prefix),
            _ => Ok(()),
        }
    }
}

structure! {
    /// Infrastructure's answer to a radio's mutual authentication challenge.
    pub struct AuthenticationFneResponseAbbreviated;
}

impl AuthenticationFneResponseAbbreviated {
    const RESPONSE: Field = Field::span(OCTET_3_BIT_16, 32);
    const TARGET: Field = Field::span(OCTET_7_BIT_48, 24);

    pub fn response(&self) -> u32 { self.0.int(&Self::RESPONSE) }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
}

impl MacStructure for AuthenticationFneResponseAbbreviated {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![Identifier::radio(Role::To, self.target())]
    }
}

impl fmt::Display for AuthenticationFneResponseAbbreviated {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AUTHENTICATION FNE RESPONSE TO:{} RESPONSE:{:08X}", self.target(),
            self.response())
    }
}

/// Manipulation of a radio's stack of roaming addresses.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StackOperation {
    Clear,
    Write,
    Delete,
    Report,
    Other(u8),
}

impl StackOperation {
    pub fn from_bits(bits: u8) -> StackOperation {
        use self::StackOperation::*;

        match bits {
            0x00 => Clear,
            0x01 => Write,
            0x02 => Delete,
            0x03 => Report,
            b => Other(b),
        }
    }
}

structure! {
    /// Commands a radio to update its stack of systems to roam to.
    pub struct RoamingAddressCommand;
}

impl RoamingAddressCommand {
    const OPERATION: Field = Field::span(OCTET_2_BIT_8, 8);
    const WACN: Field = Field::span(OCTET_3_BIT_16, 20);
    const SYSTEM: Field = Field::span(OCTET_3_BIT_16 + 20, 12);
    const TARGET: Field = Field::span(OCTET_7_BIT_48, 24);

    pub fn operation(&self) -> StackOperation {
        StackOperation::from_bits(self.0.bits(&Self::OPERATION))
    }
    pub fn wacn(&self) -> u32 { self.0.int(&Self::WACN) }
    pub fn system(&self) -> u16 { self.0.bits(&Self::SYSTEM) }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
}

impl MacStructure for RoamingAddressCommand {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::To, self.target()),
            Identifier::new(Role::Any, Value::Wacn(self.wacn())),
            Identifier::new(Role::Any, Value::System(self.system())),
        ]
    }
}

impl fmt::Display for RoamingAddressCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ROAMING ADDRESS COMMAND {:?} TO:{} WACN:{:05X} SYSTEM:{:03X}",
            self.operation(), self.target(), self.wacn(), self.system())
    }
}

/// System a radio may roam to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RoamingAddress {
    pub wacn: u32,
    pub system: u16,
}

structure! {
    /// Reports part of a radio's roaming address stack, in sequence-numbered pieces.
    pub struct RoamingAddressUpdate;
}

impl RoamingAddressUpdate {
    const SEQUENCE: Field = Field::range(20, 23);
    const TARGET: Field = Field::span(OCTET_4_BIT_24, 24);

    /// Whether this is the final piece of the stack.
    pub fn last_message(&self) -> bool { self.0.flag(OCTET_3_BIT_16) }
    pub fn sequence(&self) -> u8 { self.0.bits(&Self::SEQUENCE) }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }

    /// Systems carried, in stack order. Entries beyond the declared length or the end of
    /// the buffer are left out.
    pub fn addresses(&self) -> Vec<RoamingAddress> {
        let end = self.0.int(&LENGTH) as usize * OCTET_BITS;

        (OCTET_7_BIT_48..).step_by(32)
            .take_while(|start| start + 32 <= end)
            .map(|start| (Field::span(start, 20), Field::span(start + 20, 12)))
            .take_while(|&(_, ref system)| self.0.contains(system))
            .map(|(wacn, system)| RoamingAddress {
                wacn: self.0.int(&wacn),
                system: self.0.bits(&system),
            })
            .collect()
    }
}

impl MacStructure for RoamingAddressUpdate {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        let target = self.target();
        let mut ids = vec![Identifier::radio(Role::To, target)];

        ids.extend(self.addresses().into_iter().map(|addr| {
            Identifier::roaming_radio(Role::To, target, addr.wacn, addr.system, target)
        }));

        ids
    }
}

impl fmt::Display for RoamingAddressUpdate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ROAMING ADDRESS UPDATE TO:{} SEQUENCE:{}{}", self.target(),
            self.sequence(), if self.last_message() { " LAST" } else { "" })?;

        for addr in self.addresses() {
            write!(f, " {:05X}.{:03X}", addr.wacn, addr.system)?;
        }

        Ok(())
    }
}

structure! {
    /// Answers a roaming radio's request to join a talkgroup.
    pub struct GroupAffiliationResponseExtended;
}

impl GroupAffiliationResponseExtended {
    const RESPONSE: Field = Field::range(14, 15);
    const ANNOUNCEMENT_GROUP: Field = Field::span(OCTET_3_BIT_16, 16);
    const GROUP: Field = Field::span(OCTET_5_BIT_32, 16);
    const TARGET: Field = Field::span(OCTET_7_BIT_48, 24);
    const TARGET_SUID: SuidFields = SuidFields::at(OCTET_10_BIT_72);

    pub fn global(&self) -> bool { self.0.flag(OCTET_2_BIT_8) }
    pub fn response(&self) -> AffiliationResponse {
        AffiliationResponse::from_bits(self.0.bits(&Self::RESPONSE))
    }
    pub fn announcement_group(&self) -> Talkgroup { self.0.talkgroup(&Self::ANNOUNCEMENT_GROUP) }
    pub fn group(&self) -> Talkgroup { self.0.talkgroup(&Self::GROUP) }

    pub fn target(&self) -> Identifier {
        Self::TARGET_SUID.radio(&self.0, Role::To, self.0.int(&Self::TARGET))
    }
}

impl MacStructure for GroupAffiliationResponseExtended {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            self.target(),
            Identifier::new(Role::Any, Value::Talkgroup(self.group())),
            Identifier::new(Role::Any, Value::Talkgroup(self.announcement_group())),
        ]
    }
}

impl fmt::Display for GroupAffiliationResponseExtended {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GROUP AFFILIATION RESPONSE EXTENDED {:?} {} TG:{} ANNOUNCEMENT TG:{} {}",
            self.response(), self.target(), self.group(), self.announcement_group(),
            if self.global() { "GLOBAL" } else { "LOCAL" })
    }
}

unit_to_unit_extended_structure! {
    /// Asks a roaming radio which talkgroup it's affiliated with.
    pub struct GroupAffiliationQueryExtended = "GROUP AFFILIATION QUERY EXTENDED";
}

structure! {
    /// Answers a roaming radio's registration.
    pub struct UnitRegistrationResponseExtended;
}

impl UnitRegistrationResponseExtended {
    const RESPONSE: Field = Field::range(14, 15);
    const TARGET: Field = Field::span(OCTET_3_BIT_16, 24);
    const TARGET_SUID: SuidFields = SuidFields::at(OCTET_6_BIT_40);

    pub fn response(&self) -> RegistrationResponse {
        RegistrationResponse::from_bits(self.0.bits(&Self::RESPONSE))
    }

    pub fn target(&self) -> Identifier {
        Self::TARGET_SUID.radio(&self.0, Role::To, self.0.int(&Self::TARGET))
    }
}

impl MacStructure for UnitRegistrationResponseExtended {
    fn fields(&self) -> &MacFields { &self.0 }
    fn identifiers(&self) -> Vec<Identifier> { vec![self.target()] }
}

impl fmt::Display for UnitRegistrationResponseExtended {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UNIT REGISTRATION RESPONSE EXTENDED {:?} {}", self.response(),
            self.target())
    }
}

structure! {
    /// Infrastructure's answer to a roaming radio's mutual authentication challenge.
    pub struct AuthenticationFneResponseExtended;
}

impl AuthenticationFneResponseExtended {
    const RESPONSE: Field = Field::span(OCTET_2_BIT_8, 32);
    const TARGET_SUID: SuidFields = SuidFields::at(OCTET_6_BIT_40);

    pub fn response(&self) -> u32 { self.0.int(&Self::RESPONSE) }
    pub fn target(&self) -> Identifier { Self::TARGET_SUID.aliased_radio(&self.0, Role::To) }
}

impl MacStructure for AuthenticationFneResponseExtended {
    fn fields(&self) -> &MacFields { &self.0 }
    fn identifiers(&self) -> Vec<Identifier> { vec![self.target()] }
}

impl fmt::Display for AuthenticationFneResponseExtended {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AUTHENTICATION FNE RESPONSE EXTENDED {} RESPONSE:{:08X}", self.target(),
            self.response())
    }
}
