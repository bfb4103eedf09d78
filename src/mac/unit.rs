//! Unit-addressed signalling: status, short messages, call alerts, radio monitoring,
//! and extended function commands.

use std::fmt;

use consts::*;
use field::Field;
use ident::{EncryptionKey, Identifier, Role, Talkgroup, Unconfirmed, Value};
use mac::fields::{MacFields, SuidFields};
use mac::fragment::MultiFragment;
use mac::structure::MacStructure;

/// How long a monitored radio is commanded to transmit.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TransmitTime {
    /// Base time in seconds.
    pub time: u8,
    /// Multiplier applied to the base time, less one.
    pub multiplier: u8,
}

impl TransmitTime {
    /// Total commanded transmit time in seconds.
    pub fn seconds(&self) -> u32 { self.time as u32 * (self.multiplier as u32 + 1) }
}

impl fmt::Display for TransmitTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TX:{}S", self.seconds())
    }
}

structure! {
    /// Commands a radio to key up so it can be monitored.
    pub struct RadioUnitMonitorCommandAbbreviated;
}

impl RadioUnitMonitorCommandAbbreviated {
    const MULTIPLIER: Field = Field::range(14, 15);
    const TARGET: Field = Field::span(OCTET_3_BIT_16, 24);
    const SOURCE: Field = Field::span(OCTET_6_BIT_40, 24);
    const TIME: Field = Field::span(OCTET_9_BIT_64, 8);

    /// Whether the radio should transmit without indicating it to its user.
    pub fn silent(&self) -> bool { self.0.flag(OCTET_2_BIT_8) }
    pub fn transmit_time(&self) -> TransmitTime {
        TransmitTime {
            time: self.0.bits(&Self::TIME),
            multiplier: self.0.bits(&Self::MULTIPLIER),
        }
    }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
    pub fn source(&self) -> u32 { self.0.int(&Self::SOURCE) }
}

impl MacStructure for RadioUnitMonitorCommandAbbreviated {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::To, self.target()),
            Identifier::radio(Role::From, self.source()),
        ]
    }
}

impl fmt::Display for RadioUnitMonitorCommandAbbreviated {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RADIO UNIT MONITOR COMMAND FROM:{} TO:{} {}{}", self.source(),
            self.target(), self.transmit_time(), if self.silent() { " SILENT" } else { "" })
    }
}

structure! {
    /// Status of a radio and its user, sent to another radio.
    pub struct StatusUpdateAbbreviated;
}

impl StatusUpdateAbbreviated {
    const UNIT_STATUS: Field = Field::span(OCTET_2_BIT_8, 8);
    const USER_STATUS: Field = Field::span(OCTET_3_BIT_16, 8);
    const TARGET: Field = Field::span(OCTET_4_BIT_24, 24);
    const SOURCE: Field = Field::span(OCTET_7_BIT_48, 24);

    pub fn unit_status(&self) -> u8 { self.0.bits(&Self::UNIT_STATUS) }
    pub fn user_status(&self) -> u8 { self.0.bits(&Self::USER_STATUS) }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
    pub fn source(&self) -> u32 { self.0.int(&Self::SOURCE) }
}

impl MacStructure for StatusUpdateAbbreviated {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::To, self.target()),
            Identifier::radio(Role::From, self.source()),
            Identifier::new(Role::Any, Value::UnitStatus(self.unit_status())),
            Identifier::new(Role::Any, Value::UserStatus(self.user_status())),
        ]
    }
}

impl fmt::Display for StatusUpdateAbbreviated {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "STATUS UPDATE FROM:{} TO:{} UNIT:{} USER:{}", self.source(),
            self.target(), self.unit_status(), self.user_status())
    }
}

unit_to_unit_structure! {
    /// Asks a radio to report its status.
    pub struct StatusQueryAbbreviated = "STATUS QUERY";
}

structure! {
    /// Predefined short message sent to another radio.
    pub struct MessageUpdateAbbreviated;
}

impl MessageUpdateAbbreviated {
    const MESSAGE: Field = Field::span(OCTET_2_BIT_8, 16);
    const TARGET: Field = Field::span(OCTET_4_BIT_24, 24);
    const SOURCE: Field = Field::span(OCTET_7_BIT_48, 24);

    pub fn message(&self) -> u16 { self.0.bits(&Self::MESSAGE) }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
    pub fn source(&self) -> u32 { self.0.int(&Self::SOURCE) }
}

impl MacStructure for MessageUpdateAbbreviated {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::To, self.target()),
            Identifier::radio(Role::From, self.source()),
            Identifier::new(Role::Any, Value::ShortMessage(self.message())),
        ]
    }
}

impl fmt::Display for MessageUpdateAbbreviated {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MESSAGE UPDATE FROM:{} TO:{} MESSAGE:{}", self.source(), self.target(),
            self.message())
    }
}

structure! {
    /// Commands a radio to key up on a talkgroup, possibly encrypted, so it can be
    /// monitored.
    pub struct RadioUnitMonitorEnhancedCommandAbbreviated;
}

impl RadioUnitMonitorEnhancedCommandAbbreviated {
    const MULTIPLIER: Field = Field::range(14, 15);
    const TARGET: Field = Field::span(OCTET_3_BIT_16, 24);
    const SOURCE: Field = Field::span(OCTET_6_BIT_40, 24);
    const GROUP: Field = Field::span(OCTET_9_BIT_64, 16);
    const TIME: Field = Field::span(OCTET_11_BIT_80, 8);
    const KEY: Field = Field::span(OCTET_12_BIT_88, 16);
    const ALGORITHM: Field = Field::span(OCTET_14_BIT_104, 8);

    /// Stealth mode flag.
    pub fn stealth_mode(&self) -> Unconfirmed<bool> {
        Unconfirmed(self.0.flag(OCTET_2_BIT_8))
    }

    /// Talkgroup mode flag.
    pub fn talkgroup_mode(&self) -> Unconfirmed<bool> {
        Unconfirmed(self.0.flag(OCTET_2_BIT_8 + 1))
    }

    pub fn transmit_time(&self) -> TransmitTime {
        TransmitTime {
            time: self.0.bits(&Self::TIME),
            multiplier: self.0.bits(&Self::MULTIPLIER),
        }
    }

    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
    pub fn source(&self) -> u32 { self.0.int(&Self::SOURCE) }
    pub fn group(&self) -> Talkgroup { self.0.talkgroup(&Self::GROUP) }

    pub fn encryption(&self) -> EncryptionKey {
        EncryptionKey::new(self.0.bits(&Self::ALGORITHM), self.0.bits(&Self::KEY))
    }
}

impl MacStructure for RadioUnitMonitorEnhancedCommandAbbreviated {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::To, self.target()),
            Identifier::radio(Role::From, self.source()),
            Identifier::new(Role::Any, Value::Talkgroup(self.group())),
            Identifier::new(Role::Any, Value::EncryptionKey(self.encryption())),
        ]
    }
}

impl fmt::Display for RadioUnitMonitorEnhancedCommandAbbreviated {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RADIO UNIT MONITOR ENHANCED COMMAND FROM:{} TO:{} TG:{} {} {} STEALTH:{} \
                   TG MODE:{}", self.source(), self.target(), self.group(),
            self.transmit_time(), self.encryption(), self.stealth_mode(),
            self.talkgroup_mode())
    }
}

unit_to_unit_structure! {
    /// Alerts a radio that another radio is trying to reach it.
    pub struct CallAlertAbbreviated = "CALL ALERT";
}

/// Extended function requested of a radio, as a raw class, operand, and arguments.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ExtendedFunction {
    pub class: u8,
    pub operand: u8,
    pub arguments: u32,
}

impl fmt::Display for ExtendedFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FUNCTION:{:02X}/{:02X} ARGS:{:06X}", self.class, self.operand,
            self.arguments)
    }
}

structure! {
    /// Commands a radio to perform an extended function, such as inhibit or radio check.
    pub struct ExtendedFunctionCommandAbbreviated;
}

impl ExtendedFunctionCommandAbbreviated {
    const CLASS: Field = Field::span(OCTET_2_BIT_8, 8);
    const OPERAND: Field = Field::span(OCTET_3_BIT_16, 8);
    const ARGUMENTS: Field = Field::span(OCTET_4_BIT_24, 24);
    const TARGET: Field = Field::span(OCTET_7_BIT_48, 24);

    pub fn function(&self) -> ExtendedFunction {
        ExtendedFunction {
            class: self.0.bits(&Self::CLASS),
            operand: self.0.bits(&Self::OPERAND),
            arguments: self.0.int(&Self::ARGUMENTS),
        }
    }

    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
}

impl MacStructure for ExtendedFunctionCommandAbbreviated {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![Identifier::radio(Role::To, self.target())]
    }
}

impl fmt::Display for ExtendedFunctionCommandAbbreviated {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EXTENDED FUNCTION COMMAND TO:{} {}", self.target(), self.function())
    }
}

unit_to_unit_lcch_structure! {
    /// Call alert between radios, where either may be roaming.
    pub struct CallAlertExtendedLcch = "CALL ALERT EXTENDED";
}

structure! {
    /// Radio monitor command from a roaming radio, sent on a traffic channel.
    pub struct RadioUnitMonitorCommandExtendedVch;
}

impl RadioUnitMonitorCommandExtendedVch {
    const MULTIPLIER: Field = Field::range(14, 15);
    const TARGET: Field = Field::span(OCTET_3_BIT_16, 24);
    const SOURCE_SUID: SuidFields = SuidFields::at(OCTET_6_BIT_40);
    const TIME: Field = Field::span(OCTET_13_BIT_96, 8);

    pub fn silent(&self) -> bool { self.0.flag(OCTET_2_BIT_8) }
    pub fn transmit_time(&self) -> TransmitTime {
        TransmitTime {
            time: self.0.bits(&Self::TIME),
            multiplier: self.0.bits(&Self::MULTIPLIER),
        }
    }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
    pub fn source(&self) -> Identifier { Self::SOURCE_SUID.aliased_radio(&self.0, Role::From) }
}

impl MacStructure for RadioUnitMonitorCommandExtendedVch {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![Identifier::radio(Role::To, self.target()), self.source()]
    }
}

impl fmt::Display for RadioUnitMonitorCommandExtendedVch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RADIO UNIT MONITOR COMMAND EXTENDED {} TO:{} {}{}", self.source(),
            self.target(), self.transmit_time(), if self.silent() { " SILENT" } else { "" })
    }
}

multi_fragment_structure! {
    /// Radio monitor command between possibly roaming radios, sent on a control channel.
    pub struct RadioUnitMonitorCommandExtendedLcch;
}

impl RadioUnitMonitorCommandExtendedLcch {
    const SILENT: Field = Field::span(OCTET_4_BIT_24, 1);
    const MULTIPLIER: Field = Field::range(30, 31);
    const TIME: Field = Field::span(OCTET_5_BIT_32, 8);
    const TARGET: Field = Field::span(OCTET_6_BIT_40, 24);
    const SOURCE: Field = Field::span(OCTET_9_BIT_64, 24);
    const SOURCE_SUID: SuidFields = SuidFields::at(OCTET_12_BIT_88);
    const TARGET_SUID: SuidFields = SuidFields::at(0);

    pub fn silent(&self) -> bool { self.fields().get(&Self::SILENT) == Some(1) }

    pub fn transmit_time(&self) -> Option<TransmitTime> {
        Some(TransmitTime {
            time: self.fields().get(&Self::TIME)? as u8,
            multiplier: self.fields().get(&Self::MULTIPLIER)? as u8,
        })
    }

    /// Target, qualified by home network once the first fragment has arrived.
    pub fn target(&self) -> Option<Identifier> {
        let local = self.fields().get(&Self::TARGET)?;
        Some(self.fragment_radio(0, &Self::TARGET_SUID, Role::To, local)
            .unwrap_or_else(|| Identifier::radio(Role::To, local)))
    }

    pub fn source(&self) -> Option<Identifier> {
        let f = self.fields();
        f.get(&Self::SOURCE).map(|local| Self::SOURCE_SUID.radio(f, Role::From, local))
    }
}

impl MacStructure for RadioUnitMonitorCommandExtendedLcch {
    fn fields(&self) -> &MacFields { self.0.base() }

    fn identifiers(&self) -> Vec<Identifier> {
        self.target().into_iter().chain(self.source()).collect()
    }
}

impl fmt::Display for RadioUnitMonitorCommandExtendedLcch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RADIO UNIT MONITOR COMMAND EXTENDED")?;
        write_ids(f, self.source(), self.target())?;

        if let Some(time) = self.transmit_time() {
            write!(f, " {}", time)?;
        }

        if self.silent() {
            write!(f, " SILENT")?;
        }

        Ok(())
    }
}

multi_fragment_structure! {
    /// Short message between possibly roaming radios, sent on a control channel.
    pub struct MessageUpdateExtendedLcch;
}

impl MessageUpdateExtendedLcch {
    const MESSAGE: Field = Field::span(OCTET_4_BIT_24, 16);
    const TARGET: Field = Field::span(OCTET_6_BIT_40, 24);
    const SOURCE: Field = Field::span(OCTET_9_BIT_64, 24);
    const SOURCE_SUID: SuidFields = SuidFields::at(OCTET_12_BIT_88);
    const TARGET_SUID: SuidFields = SuidFields::at(0);

    pub fn message(&self) -> Option<u16> {
        self.fields().get(&Self::MESSAGE).map(|m| m as u16)
    }

    /// Target, qualified by home network once the first fragment has arrived.
    pub fn target(&self) -> Option<Identifier> {
        let local = self.fields().get(&Self::TARGET)?;
        Some(self.fragment_radio(0, &Self::TARGET_SUID, Role::To, local)
            .unwrap_or_else(|| Identifier::radio(Role::To, local)))
    }

    pub fn source(&self) -> Option<Identifier> {
        let f = self.fields();
        f.get(&Self::SOURCE).map(|local| Self::SOURCE_SUID.radio(f, Role::From, local))
    }
}

impl MacStructure for MessageUpdateExtendedLcch {
    fn fields(&self) -> &MacFields { self.0.base() }

    fn identifiers(&self) -> Vec<Identifier> {
        self.target().into_iter()
            .chain(self.source())
            .chain(self.message().map(|m| Identifier::new(Role::Any, Value::ShortMessage(m))))
            .collect()
    }
}

impl fmt::Display for MessageUpdateExtendedLcch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MESSAGE UPDATE EXTENDED")?;
        write_ids(f, self.source(), self.target())?;

        match self.message() {
            Some(message) => write!(f, " MESSAGE:{}", message),
            None => Ok(()),
        }
    }
}

structure! {
    /// Status of a roaming radio and its user, sent on a traffic channel.
    pub struct StatusUpdateExtendedVch;
}

impl StatusUpdateExtendedVch {
    const UNIT_STATUS: Field = Field::span(OCTET_2_BIT_8, 8);
    const USER_STATUS: Field = Field::span(OCTET_3_BIT_16, 8);
    const TARGET: Field = Field::span(OCTET_4_BIT_24, 24);
    const SOURCE_SUID: SuidFields = SuidFields::at(OCTET_7_BIT_48);

    pub fn unit_status(&self) -> u8 { self.0.bits(&Self::UNIT_STATUS) }
    pub fn user_status(&self) -> u8 { self.0.bits(&Self::USER_STATUS) }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
    pub fn source(&self) -> Identifier { Self::SOURCE_SUID.aliased_radio(&self.0, Role::From) }
}

impl MacStructure for StatusUpdateExtendedVch {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::To, self.target()),
            self.source(),
            Identifier::new(Role::Any, Value::UnitStatus(self.unit_status())),
            Identifier::new(Role::Any, Value::UserStatus(self.user_status())),
        ]
    }
}

impl fmt::Display for StatusUpdateExtendedVch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "STATUS UPDATE EXTENDED {} TO:{} UNIT:{} USER:{}", self.source(),
            self.target(), self.unit_status(), self.user_status())
    }
}

multi_fragment_structure! {
    /// Status update between possibly roaming radios, sent on a control channel.
    pub struct StatusUpdateExtendedLcch;
}

impl StatusUpdateExtendedLcch {
    const UNIT_STATUS: Field = Field::span(OCTET_4_BIT_24, 8);
    const USER_STATUS: Field = Field::span(OCTET_5_BIT_32, 8);
    const TARGET: Field = Field::span(OCTET_6_BIT_40, 24);
    const SOURCE: Field = Field::span(OCTET_9_BIT_64, 24);
    const SOURCE_SUID: SuidFields = SuidFields::at(OCTET_12_BIT_88);
    const TARGET_SUID: SuidFields = SuidFields::at(0);

    pub fn unit_status(&self) -> Option<u8> {
        self.fields().get(&Self::UNIT_STATUS).map(|s| s as u8)
    }

    pub fn user_status(&self) -> Option<u8> {
        self.fields().get(&Self::USER_STATUS).map(|s| s as u8)
    }

    /// Target, qualified by home network once the first fragment has arrived.
    pub fn target(&self) -> Option<Identifier> {
        let local = self.fields().get(&Self::TARGET)?;
        Some(self.fragment_radio(0, &Self::TARGET_SUID, Role::To, local)
            .unwrap_or_else(|| Identifier::radio(Role::To, local)))
    }

    pub fn source(&self) -> Option<Identifier> {
        let f = self.fields();
        f.get(&Self::SOURCE).map(|local| Self::SOURCE_SUID.radio(f, Role::From, local))
    }
}

impl MacStructure for StatusUpdateExtendedLcch {
    fn fields(&self) -> &MacFields { self.0.base() }

    fn identifiers(&self) -> Vec<Identifier> {
        self.target().into_iter()
            .chain(self.source())
            .chain(self.unit_status().map(|s| Identifier::new(Role::Any, Value::UnitStatus(s))))
            .chain(self.user_status().map(|s| Identifier::new(Role::Any, Value::UserStatus(s))))
            .collect()
    }
}

impl fmt::Display for StatusUpdateExtendedLcch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "STATUS UPDATE EXTENDED")?;
        write_ids(f, self.source(), self.target())?;

        if let Some(unit) = self.unit_status() {
            write!(f, " UNIT:{}", unit)?;
        }

        if let Some(user) = self.user_status() {
            write!(f, " USER:{}", user)?;
        }

        Ok(())
    }
}

unit_to_unit_extended_structure! {
    /// Status query from a roaming radio, sent on a traffic channel.
    pub struct StatusQueryExtendedVch = "STATUS QUERY EXTENDED";
}

unit_to_unit_lcch_structure! {
    /// Status query between possibly roaming radios, sent on a control channel.
    pub struct StatusQueryExtendedLcch = "STATUS QUERY EXTENDED";
}

structure! {
    /// Short message from a roaming radio, sent on a traffic channel.
    pub struct MessageUpdateExtendedVch;
}

impl MessageUpdateExtendedVch {
    const MESSAGE: Field = Field::span(OCTET_2_BIT_8, 16);
    const TARGET: Field = Field::span(OCTET_4_BIT_24, 24);
    const SOURCE_SUID: SuidFields = SuidFields::at(OCTET_7_BIT_48);

    pub fn message(&self) -> u16 { self.0.bits(&Self::MESSAGE) }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
    pub fn source(&self) -> Identifier { Self::SOURCE_SUID.aliased_radio(&self.0, Role::From) }
}

impl MacStructure for MessageUpdateExtendedVch {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::To, self.target()),
            self.source(),
            Identifier::new(Role::Any, Value::ShortMessage(self.message())),
        ]
    }
}

impl fmt::Display for MessageUpdateExtendedVch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MESSAGE UPDATE EXTENDED {} TO:{} MESSAGE:{}", self.source(),
            self.target(), self.message())
    }
}

structure! {
    /// Enhanced radio monitor command from a roaming radio.
    pub struct RadioUnitMonitorEnhancedCommandExtended;
}

impl RadioUnitMonitorEnhancedCommandExtended {
    const MULTIPLIER: Field = Field::range(14, 15);
    const TARGET: Field = Field::span(OCTET_3_BIT_16, 24);
    const SOURCE: Field = Field::span(OCTET_6_BIT_40, 24);
    const SOURCE_SUID: SuidFields = SuidFields::at(OCTET_9_BIT_64);
    const TIME: Field = Field::span(OCTET_16_BIT_120, 8);
    const KEY: Field = Field::span(OCTET_17_BIT_128, 16);
    const ALGORITHM: Field = Field::span(OCTET_19_BIT_144, 8);

    /// Stealth mode flag.
    pub fn stealth_mode(&self) -> Unconfirmed<bool> {
        Unconfirmed(self.0.flag(OCTET_2_BIT_8))
    }

    /// Talkgroup mode flag.
    pub fn talkgroup_mode(&self) -> Unconfirmed<bool> {
        Unconfirmed(self.0.flag(OCTET_2_BIT_8 + 1))
    }

    pub fn transmit_time(&self) -> TransmitTime {
        TransmitTime {
            time: self.0.bits(&Self::TIME),
            multiplier: self.0.bits(&Self::MULTIPLIER),
        }
    }

    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }

    pub fn source(&self) -> Identifier {
        Self::SOURCE_SUID.radio(&self.0, Role::From, self.0.int(&Self::SOURCE))
    }

    pub fn encryption(&self) -> EncryptionKey {
        EncryptionKey::new(self.0.bits(&Self::ALGORITHM), self.0.bits(&Self::KEY))
    }
}

impl MacStructure for RadioUnitMonitorEnhancedCommandExtended {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::To, self.target()),
            self.source(),
            Identifier::new(Role::Any, Value::EncryptionKey(self.encryption())),
        ]
    }
}

impl fmt::Display for RadioUnitMonitorEnhancedCommandExtended {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RADIO UNIT MONITOR ENHANCED COMMAND EXTENDED {} TO:{} {} {} STEALTH:{} \
                   TG MODE:{}", self.source(), self.target(), self.transmit_time(),
            self.encryption(), self.stealth_mode(), self.talkgroup_mode())
    }
}

unit_to_unit_extended_structure! {
    /// Call alert from a roaming radio, sent on a traffic channel.
    pub struct CallAlertExtendedVch = "CALL ALERT EXTENDED";
}

structure! {
    /// Extended function command for a radio, on behalf of a roaming radio.
    pub struct ExtendedFunctionCommandExtendedVch;
}

impl ExtendedFunctionCommandExtendedVch {
    const CLASS: Field = Field::span(OCTET_2_BIT_8, 8);
    const OPERAND: Field = Field::span(OCTET_3_BIT_16, 8);
    const ARGUMENTS: Field = Field::span(OCTET_4_BIT_24, 24);
    const TARGET: Field = Field::span(OCTET_7_BIT_48, 24);
    const SOURCE_SUID: SuidFields = SuidFields::at(OCTET_10_BIT_72);

    pub fn function(&self) -> ExtendedFunction {
        ExtendedFunction {
            class: self.0.bits(&Self::CLASS),
            operand: self.0.bits(&Self::OPERAND),
            arguments: self.0.int(&Self::ARGUMENTS),
        }
    }

    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
    pub fn source(&self) -> Identifier { Self::SOURCE_SUID.aliased_radio(&self.0, Role::From) }
}

impl MacStructure for ExtendedFunctionCommandExtendedVch {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![Identifier::radio(Role::To, self.target()), self.source()]
    }
}

impl fmt::Display for ExtendedFunctionCommandExtendedVch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EXTENDED FUNCTION COMMAND EXTENDED {} TO:{} {}", self.source(),
            self.target(), self.function())
    }
}

multi_fragment_structure! {
    /// Extended function command for a possibly roaming radio, sent on a control channel.
    pub struct ExtendedFunctionCommandExtendedLcch;
}

impl ExtendedFunctionCommandExtendedLcch {
    const CLASS: Field = Field::span(OCTET_4_BIT_24, 8);
    const OPERAND: Field = Field::span(OCTET_5_BIT_32, 8);
    const ARGUMENTS: Field = Field::span(OCTET_6_BIT_40, 24);
    const TARGET: Field = Field::span(OCTET_9_BIT_64, 24);
    const TARGET_SUID: SuidFields = SuidFields::at(0);

    pub fn function(&self) -> Option<ExtendedFunction> {
        Some(ExtendedFunction {
            class: self.fields().get(&Self::CLASS)? as u8,
            operand: self.fields().get(&Self::OPERAND)? as u8,
            arguments: self.fields().get(&Self::ARGUMENTS)?,
        })
    }

    /// Target, qualified by home network once the first fragment has arrived.
    pub fn target(&self) -> Option<Identifier> {
        let local = self.fields().get(&Self::TARGET)?;
        Some(self.fragment_radio(0, &Self::TARGET_SUID, Role::To, local)
            .unwrap_or_else(|| Identifier::radio(Role::To, local)))
    }
}

impl MacStructure for ExtendedFunctionCommandExtendedLcch {
    fn fields(&self) -> &MacFields { self.0.base() }
    fn identifiers(&self) -> Vec<Identifier> { self.target().into_iter().collect() }
}

impl fmt::Display for ExtendedFunctionCommandExtendedLcch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EXTENDED FUNCTION COMMAND EXTENDED")?;
        write_ids(f, None, self.target())?;

        match self.function() {
            Some(function) => write!(f, " {}", function),
            None => Ok(()),
        }
    }
}

/// Write the source and target of a control channel structure, where declared.
fn write_ids(f: &mut fmt::Formatter, source: Option<Identifier>, target: Option<Identifier>)
    -> fmt::Result
{
    if let Some(source) = source {
        write!(f, " {}", source)?;
    }

    if let Some(target) = target {
        write!(f, " {}", target)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use mac::fields::MacFields;
    use mac::fragment::ContinuationFragment;
    use mac::opcode::MacOpcode;

    fn fields(hex: &str) -> MacFields { MacFields::from_hex(hex).unwrap() }

    #[test]
    fn test_status_update() {
        let s = StatusUpdateAbbreviated::new(fields("58 0A 0B 000001 000002"));
        assert_eq!(s.length(), 9);
        assert_eq!(s.unit_status(), 0x0A);
        assert_eq!(s.user_status(), 0x0B);
        assert_eq!(s.target(), 1);
        assert_eq!(s.source(), 2);
        assert_eq!(s.identifiers().len(), 4);
    }

    #[test]
    fn test_unit_to_unit_macro() {
        let s = CallAlertAbbreviated::new(fields("5F 000001 000002"));
        assert_eq!(s.opcode(), MacOpcode::CallAlertAbbreviated);
        assert_eq!(s.length(), 7);
        assert_eq!(format!("{}", s), "CALL ALERT FROM:2 TO:1");

        let s = StatusQueryExtendedVch::new(fields("DA 000001 BEE003A1000123"));
        assert_eq!(s.length(), 11);
        assert_eq!(s.source(), Identifier::aliased_radio(Role::From, 0x123, 0xBEE00, 0x3A1));
    }

    #[test]
    fn test_lcch_macro() {
        let mut s = CallAlertExtendedLcch::new(
            fields("CB 12 15 000001 000002 BEE003A1000123 BEE0"));
        assert_eq!(s.length(), 18);
        assert_eq!(s.target(), Some(Identifier::radio(Role::To, 1)));
        assert!(!s.is_complete());

        s.add_continuation(ContinuationFragment::new(fields("10 07 03A1000456")));
        assert!(s.is_complete());
        let target = s.target().unwrap().fully_qualified().unwrap();
        assert_eq!(target.local_address(), 1);
        assert_eq!(target.wacn(), 0xBEE00);
        assert_eq!(target.system(), 0x3A1);
        assert_eq!(target.id(), 0x456);
    }

    #[test]
    fn test_monitor_abbreviated() {
        let s = RadioUnitMonitorCommandAbbreviated::new(fields("4C 81 000001 000002 0A"));
        assert!(s.silent());
        assert_eq!(s.transmit_time(), TransmitTime { time: 10, multiplier: 1 });
        assert_eq!(s.transmit_time().seconds(), 20);
    }

    #[test]
    fn test_monitor_enhanced() {
        let s = RadioUnitMonitorEnhancedCommandAbbreviated::new(
            fields("5E C0 000001 000002 0065 05 1234 84"));
        assert_eq!(s.length(), 14);
        assert_eq!(s.stealth_mode(), Unconfirmed(true));
        assert_eq!(s.talkgroup_mode().get(), true);
        assert_eq!(s.group(), Talkgroup::Other(0x65));
        assert_eq!(s.encryption(), EncryptionKey::new(0x84, 0x1234));
        assert!(format!("{}", s).contains("STEALTH:true(?)"));

        let s = RadioUnitMonitorEnhancedCommandExtended::new(
            fields("DE 00 000001 000002 BEE003A1000123 05 1234 80"));
        assert_eq!(s.length(), 19);
        assert_eq!(s.stealth_mode().get(), false);
        assert!(!s.encryption().is_encrypted());
        assert_eq!(s.source().fully_qualified().unwrap().local_address(), 2);
    }

    #[test]
    fn test_message_lcch() {
        let mut s = MessageUpdateExtendedLcch::new(
            fields("CE 12 17 0042 000001 000002 BEE003A1000123"));
        assert_eq!(s.message(), Some(0x42));
        assert_eq!(s.identifiers()[0], Identifier::radio(Role::To, 1));

        s.add_continuation(ContinuationFragment::new(fields("10 09 BEE003A1000456")));
        assert!(s.is_complete());
        assert!(s.identifiers()[0].fully_qualified().is_some());
    }

    #[test]
    fn test_extended_function() {
        let s = ExtendedFunctionCommandAbbreviated::new(fields("64 00 7F 000002 000001"));
        assert_eq!(s.function(), ExtendedFunction {
            class: 0,
            operand: 0x7F,
            arguments: 2,
        });
        assert_eq!(s.target(), 1);

        let s = ExtendedFunctionCommandExtendedLcch::new(fields("E5 0B 12 00 7F 000002 000001"));
        assert_eq!(s.length(), 11);
        assert_eq!(s.target(), Some(Identifier::radio(Role::To, 1)));
        assert_eq!(s.function().unwrap().operand, 0x7F);
    }

    #[test]
    fn test_lcch_declared_length() {
        // Declares only the local addresses, followed by another structure's octets.
        let mut s = CallAlertExtendedLcch::new(
            fields("CB 09 15 000001 000002 BEE003A1000123 BEE0"));
        assert_eq!(s.length(), 9);
        assert_eq!(s.identifiers(), vec![
            Identifier::radio(Role::To, 1),
            Identifier::radio(Role::From, 2),
        ]);

        s.add_continuation(ContinuationFragment::new(fields("10 07 03A1000456")));
        assert_eq!(s.target(), Some(Identifier::radio(Role::To, 1)));
        assert_eq!(format!("{}", s), "CALL ALERT EXTENDED FROM:RADIO 2 TO:RADIO 1");

        let s = StatusUpdateExtendedLcch::new(fields("D9 05 13 0A0B"));
        assert_eq!(s.unit_status(), Some(0x0A));
        assert_eq!(s.user_status(), Some(0x0B));
        assert_eq!(s.target(), None);
        assert_eq!(s.identifiers().len(), 2);

        let s = RadioUnitMonitorCommandExtendedLcch::new(fields("CD 04 13 80"));
        assert!(s.silent());
        assert_eq!(s.transmit_time(), None);
        assert!(s.identifiers().is_empty());

        let s = ExtendedFunctionCommandExtendedLcch::new(fields("E5 03 12"));
        assert_eq!(s.function(), None);
        assert_eq!(format!("{}", s), "EXTENDED FUNCTION COMMAND EXTENDED");
    }
}
