//! Group and unit-to-unit voice call structures: channel users, grants, grant updates,
//! service requests, and answer requests.

use std::fmt;

use consts::*;
use field::Field;
use ident::{ChannelDescriptor, Identifier, Role, ServiceOptions, Talkgroup, Value};
use mac::fields::{ExplicitChannelFields, MacFields, SuidFields, VoiceServiceFields};
use mac::fragment::MultiFragment;
use mac::opcode::MacOpcode;
use mac::structure::MacStructure;

/// Talkgroup active on a channel, as announced by grant updates.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GroupChannel {
    /// Service options, when the announcing structure carries them.
    pub options: Option<ServiceOptions>,
    pub channel: ChannelDescriptor,
    pub group: Talkgroup,
}

impl GroupChannel {
    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::new(Role::To, Value::Talkgroup(self.group)),
            Identifier::channel(self.channel),
        ]
    }
}

impl fmt::Display for GroupChannel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TG:{} CHAN:{}", self.group, self.channel)?;

        match self.options {
            Some(opts) => write!(f, " SVC:[{}]", opts),
            None => Ok(()),
        }
    }
}

fn write_updates(f: &mut fmt::Formatter, updates: &[GroupChannel]) -> fmt::Result {
    for (i, u) in updates.iter().enumerate() {
        write!(f, " UPDATE{}:[{}]", i + 1, u)?;
    }

    Ok(())
}

structure! {
    /// Group call currently active on the traffic channel carrying this structure.
    pub struct GroupVoiceChannelUserAbbreviated;
}

impl GroupVoiceChannelUserAbbreviated {
    const SERVICE: VoiceServiceFields = VoiceServiceFields::at(OCTET_2_BIT_8);
    const GROUP: Field = Field::span(OCTET_3_BIT_16, 16);
    const SOURCE: Field = Field::span(OCTET_5_BIT_32, 24);

    pub fn options(&self) -> ServiceOptions { Self::SERVICE.service_options(&self.0) }
    pub fn group(&self) -> Talkgroup { self.0.talkgroup(&Self::GROUP) }
    pub fn source(&self) -> u32 { self.0.int(&Self::SOURCE) }
}

impl MacStructure for GroupVoiceChannelUserAbbreviated {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::new(Role::To, Value::Talkgroup(self.group())),
            Identifier::radio(Role::From, self.source()),
        ]
    }

    fn service_options(&self) -> Option<ServiceOptions> { Some(self.options()) }
}

impl fmt::Display for GroupVoiceChannelUserAbbreviated {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GROUP VOICE CHANNEL USER FROM:{} TO:{} SVC:[{}]", self.source(),
            self.group(), self.options())
    }
}

structure! {
    /// Unit-to-unit call currently active on the traffic channel carrying this structure.
    pub struct UnitToUnitVoiceChannelUserAbbreviated;
}

impl UnitToUnitVoiceChannelUserAbbreviated {
    const SERVICE: VoiceServiceFields = VoiceServiceFields::at(OCTET_2_BIT_8);
    const TARGET: Field = Field::span(OCTET_3_BIT_16, 24);
    const SOURCE: Field = Field::span(OCTET_6_BIT_40, 24);

    pub fn options(&self) -> ServiceOptions { Self::SERVICE.service_options(&self.0) }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
    pub fn source(&self) -> u32 { self.0.int(&Self::SOURCE) }
}

impl MacStructure for UnitToUnitVoiceChannelUserAbbreviated {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::To, self.target()),
            Identifier::radio(Role::From, self.source()),
        ]
    }

    fn service_options(&self) -> Option<ServiceOptions> { Some(self.options()) }
}

impl fmt::Display for UnitToUnitVoiceChannelUserAbbreviated {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UNIT-TO-UNIT VOICE CHANNEL USER FROM:{} TO:{} SVC:[{}]", self.source(),
            self.target(), self.options())
    }
}

structure! {
    /// Three groups active on implicit channels.
    pub struct GroupVoiceChannelGrantUpdateMultipleImplicit;
}

impl GroupVoiceChannelGrantUpdateMultipleImplicit {
    const BLOCKS: [(Field, Field, Field); 3] = [
        (Field::span(OCTET_2_BIT_8, 8), Field::span(OCTET_3_BIT_16, 16),
         Field::span(OCTET_5_BIT_32, 16)),
        (Field::span(OCTET_7_BIT_48, 8), Field::span(OCTET_8_BIT_56, 16),
         Field::span(OCTET_10_BIT_72, 16)),
        (Field::span(OCTET_12_BIT_88, 8), Field::span(OCTET_13_BIT_96, 16),
         Field::span(OCTET_15_BIT_112, 16)),
    ];

    pub fn updates(&self) -> Vec<GroupChannel> {
        Self::BLOCKS.iter().map(|&(ref svc, ref ch, ref grp)| GroupChannel {
            options: Some(ServiceOptions::new(self.0.bits(svc))),
            channel: ChannelDescriptor::Implicit(self.0.channel(ch)),
            group: self.0.talkgroup(grp),
        }).collect()
    }
}

impl MacStructure for GroupVoiceChannelGrantUpdateMultipleImplicit {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        self.updates().iter().flat_map(|u| u.identifiers()).collect()
    }

    fn channels(&self) -> Vec<ChannelDescriptor> {
        self.updates().iter().map(|u| u.channel).collect()
    }
}

impl fmt::Display for GroupVoiceChannelGrantUpdateMultipleImplicit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GROUP VOICE CHANNEL GRANT UPDATE MULTIPLE")?;
        write_updates(f, &self.updates())
    }
}

structure! {
    /// Group call active on this traffic channel, with the talker's home identity.
    pub struct GroupVoiceChannelUserExtended;
}

impl GroupVoiceChannelUserExtended {
    const SERVICE: VoiceServiceFields = VoiceServiceFields::at(OCTET_2_BIT_8);
    const GROUP: Field = Field::span(OCTET_3_BIT_16, 16);
    const SOURCE: Field = Field::span(OCTET_5_BIT_32, 24);
    const SOURCE_SUID: SuidFields = SuidFields::at(OCTET_8_BIT_56);

    pub fn options(&self) -> ServiceOptions { Self::SERVICE.service_options(&self.0) }
    pub fn group(&self) -> Talkgroup { self.0.talkgroup(&Self::GROUP) }

    /// Talker, qualified by home network.
    pub fn source(&self) -> Identifier {
        Self::SOURCE_SUID.radio(&self.0, Role::From, self.0.int(&Self::SOURCE))
    }
}

impl MacStructure for GroupVoiceChannelUserExtended {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::new(Role::To, Value::Talkgroup(self.group())),
            self.source(),
        ]
    }

    fn service_options(&self) -> Option<ServiceOptions> { Some(self.options()) }
}

impl fmt::Display for GroupVoiceChannelUserExtended {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GROUP VOICE CHANNEL USER EXTENDED {} TO:{} SVC:[{}]", self.source(),
            self.group(), self.options())
    }
}

structure! {
    /// Unit-to-unit call active on this traffic channel, with the caller's home identity.
    pub struct UnitToUnitVoiceChannelUserExtended;
}

impl UnitToUnitVoiceChannelUserExtended {
    const SERVICE: VoiceServiceFields = VoiceServiceFields::at(OCTET_2_BIT_8);
    const TARGET: Field = Field::span(OCTET_3_BIT_16, 24);
    const SOURCE: Field = Field::span(OCTET_6_BIT_40, 24);
    const SOURCE_SUID: SuidFields = SuidFields::at(OCTET_9_BIT_64);

    pub fn options(&self) -> ServiceOptions { Self::SERVICE.service_options(&self.0) }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }

    /// Caller, qualified by home network.
    pub fn source(&self) -> Identifier {
        Self::SOURCE_SUID.radio(&self.0, Role::From, self.0.int(&Self::SOURCE))
    }
}

impl MacStructure for UnitToUnitVoiceChannelUserExtended {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![Identifier::radio(Role::To, self.target()), self.source()]
    }

    fn service_options(&self) -> Option<ServiceOptions> { Some(self.options()) }
}

impl fmt::Display for UnitToUnitVoiceChannelUserExtended {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UNIT-TO-UNIT VOICE CHANNEL USER EXTENDED {} TO:{} SVC:[{}]",
            self.source(), self.target(), self.options())
    }
}

structure! {
    /// Two groups active on explicit channels.
    pub struct GroupVoiceChannelGrantUpdateMultipleExplicit;
}

impl GroupVoiceChannelGrantUpdateMultipleExplicit {
    const BLOCKS: [(VoiceServiceFields, ExplicitChannelFields, Field); 2] = [
        (VoiceServiceFields::at(OCTET_2_BIT_8), ExplicitChannelFields::at(OCTET_3_BIT_16),
         Field::span(OCTET_7_BIT_48, 16)),
        (VoiceServiceFields::at(OCTET_9_BIT_64), ExplicitChannelFields::at(OCTET_10_BIT_72),
         Field::span(OCTET_14_BIT_104, 16)),
    ];

    pub fn updates(&self) -> Vec<GroupChannel> {
        Self::BLOCKS.iter().map(|&(ref svc, ref ch, ref grp)| GroupChannel {
            options: Some(svc.service_options(&self.0)),
            channel: ch.channel(&self.0),
            group: self.0.talkgroup(grp),
        }).collect()
    }
}

impl MacStructure for GroupVoiceChannelGrantUpdateMultipleExplicit {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        self.updates().iter().flat_map(|u| u.identifiers()).collect()
    }

    fn channels(&self) -> Vec<ChannelDescriptor> {
        self.updates().iter().map(|u| u.channel).collect()
    }
}

impl fmt::Display for GroupVoiceChannelGrantUpdateMultipleExplicit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GROUP VOICE CHANNEL GRANT UPDATE MULTIPLE EXPLICIT")?;
        write_updates(f, &self.updates())
    }
}

structure! {
    /// Group call granted on an implicit channel.
    pub struct GroupVoiceChannelGrantImplicit;
}

impl GroupVoiceChannelGrantImplicit {
    const SERVICE: VoiceServiceFields = VoiceServiceFields::at(OCTET_2_BIT_8);
    const CHANNEL: Field = Field::span(OCTET_3_BIT_16, 16);
    const GROUP: Field = Field::span(OCTET_5_BIT_32, 16);
    const SOURCE: Field = Field::span(OCTET_7_BIT_48, 24);

    pub fn options(&self) -> ServiceOptions { Self::SERVICE.service_options(&self.0) }
    pub fn channel(&self) -> ChannelDescriptor {
        ChannelDescriptor::Implicit(self.0.channel(&Self::CHANNEL))
    }
    pub fn group(&self) -> Talkgroup { self.0.talkgroup(&Self::GROUP) }
    pub fn source(&self) -> u32 { self.0.int(&Self::SOURCE) }
}

impl MacStructure for GroupVoiceChannelGrantImplicit {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::new(Role::To, Value::Talkgroup(self.group())),
            Identifier::radio(Role::From, self.source()),
            Identifier::channel(self.channel()),
        ]
    }

    fn channels(&self) -> Vec<ChannelDescriptor> { vec![self.channel()] }
    fn service_options(&self) -> Option<ServiceOptions> { Some(self.options()) }
}

impl fmt::Display for GroupVoiceChannelGrantImplicit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GROUP VOICE CHANNEL GRANT FROM:{} TO:{} CHAN:{} SVC:[{}]", self.source(),
            self.group(), self.channel(), self.options())
    }
}

structure! {
    /// Request from a radio to start a group call.
    pub struct GroupVoiceServiceRequest;
}

impl GroupVoiceServiceRequest {
    const SERVICE: VoiceServiceFields = VoiceServiceFields::at(OCTET_2_BIT_8);
    const GROUP: Field = Field::span(OCTET_3_BIT_16, 16);
    const SOURCE: Field = Field::span(OCTET_5_BIT_32, 24);

    pub fn options(&self) -> ServiceOptions { Self::SERVICE.service_options(&self.0) }
    pub fn group(&self) -> Talkgroup { self.0.talkgroup(&Self::GROUP) }
    pub fn source(&self) -> u32 { self.0.int(&Self::SOURCE) }
}

impl MacStructure for GroupVoiceServiceRequest {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::new(Role::To, Value::Talkgroup(self.group())),
            Identifier::radio(Role::From, self.source()),
        ]
    }

    fn service_options(&self) -> Option<ServiceOptions> { Some(self.options()) }
}

impl fmt::Display for GroupVoiceServiceRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GROUP VOICE SERVICE REQUEST FROM:{} TO:{} SVC:[{}]", self.source(),
            self.group(), self.options())
    }
}

structure! {
    /// Two groups active on implicit channels.
    pub struct GroupVoiceChannelGrantUpdateImplicit;
}

impl GroupVoiceChannelGrantUpdateImplicit {
    const BLOCKS: [(Field, Field); 2] = [
        (Field::span(OCTET_2_BIT_8, 16), Field::span(OCTET_4_BIT_24, 16)),
        (Field::span(OCTET_6_BIT_40, 16), Field::span(OCTET_8_BIT_56, 16)),
    ];

    pub fn updates(&self) -> Vec<GroupChannel> {
        Self::BLOCKS.iter().map(|&(ref ch, ref grp)| GroupChannel {
            options: None,
            channel: ChannelDescriptor::Implicit(self.0.channel(ch)),
            group: self.0.talkgroup(grp),
        }).collect()
    }
}

impl MacStructure for GroupVoiceChannelGrantUpdateImplicit {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        self.updates().iter().flat_map(|u| u.identifiers()).collect()
    }

    fn channels(&self) -> Vec<ChannelDescriptor> {
        self.updates().iter().map(|u| u.channel).collect()
    }
}

impl fmt::Display for GroupVoiceChannelGrantUpdateImplicit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GROUP VOICE CHANNEL GRANT UPDATE")?;
        write_updates(f, &self.updates())
    }
}

structure! {
    /// Unit-to-unit call granted on an implicit channel. Also decodes the grant update,
    /// which shares its layout.
    pub struct UnitToUnitVoiceChannelGrantAbbreviated;
}

impl UnitToUnitVoiceChannelGrantAbbreviated {
    const CHANNEL: Field = Field::span(OCTET_2_BIT_8, 16);
    const TARGET: Field = Field::span(OCTET_4_BIT_24, 24);
    const SOURCE: Field = Field::span(OCTET_7_BIT_48, 24);

    pub fn channel(&self) -> ChannelDescriptor {
        ChannelDescriptor::Implicit(self.0.channel(&Self::CHANNEL))
    }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
    pub fn source(&self) -> u32 { self.0.int(&Self::SOURCE) }
}

impl MacStructure for UnitToUnitVoiceChannelGrantAbbreviated {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::To, self.target()),
            Identifier::radio(Role::From, self.source()),
            Identifier::channel(self.channel()),
        ]
    }

    fn channels(&self) -> Vec<ChannelDescriptor> { vec![self.channel()] }
}

impl fmt::Display for UnitToUnitVoiceChannelGrantAbbreviated {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self.opcode() {
            MacOpcode::UnitToUnitVoiceChannelGrantUpdateAbbreviated => "GRANT UPDATE",
            _ => "GRANT",
        };

        write!(f, "UNIT-TO-UNIT VOICE CHANNEL {} FROM:{} TO:{} CHAN:{}", label,
            self.source(), self.target(), self.channel())
    }
}

structure! {
    /// Asks the target radio whether it will accept a unit-to-unit call.
    pub struct UnitToUnitAnswerRequestAbbreviated;
}

impl UnitToUnitAnswerRequestAbbreviated {
    const SERVICE: VoiceServiceFields = VoiceServiceFields::at(OCTET_2_BIT_8);
    const TARGET: Field = Field::span(OCTET_3_BIT_16, 24);
    const SOURCE: Field = Field::span(OCTET_6_BIT_40, 24);

    pub fn options(&self) -> ServiceOptions { Self::SERVICE.service_options(&self.0) }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
    pub fn source(&self) -> u32 { self.0.int(&Self::SOURCE) }
}

impl MacStructure for UnitToUnitAnswerRequestAbbreviated {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::To, self.target()),
            Identifier::radio(Role::From, self.source()),
        ]
    }

    fn service_options(&self) -> Option<ServiceOptions> { Some(self.options()) }
}

impl fmt::Display for UnitToUnitAnswerRequestAbbreviated {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UNIT-TO-UNIT ANSWER REQUEST FROM:{} TO:{} SVC:[{}]", self.source(),
            self.target(), self.options())
    }
}

structure! {
    /// Group call granted on an explicit channel pair.
    pub struct GroupVoiceChannelGrantExplicit;
}

impl GroupVoiceChannelGrantExplicit {
    const SERVICE: VoiceServiceFields = VoiceServiceFields::at(OCTET_2_BIT_8);
    const CHANNEL: ExplicitChannelFields = ExplicitChannelFields::at(OCTET_3_BIT_16);
    const GROUP: Field = Field::span(OCTET_7_BIT_48, 16);
    const SOURCE: Field = Field::span(OCTET_9_BIT_64, 24);

    pub fn options(&self) -> ServiceOptions { Self::SERVICE.service_options(&self.0) }
    pub fn channel(&self) -> ChannelDescriptor { Self::CHANNEL.channel(&self.0) }
    pub fn group(&self) -> Talkgroup { self.0.talkgroup(&Self::GROUP) }
    pub fn source(&self) -> u32 { self.0.int(&Self::SOURCE) }
}

impl MacStructure for GroupVoiceChannelGrantExplicit {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::new(Role::To, Value::Talkgroup(self.group())),
            Identifier::radio(Role::From, self.source()),
            Identifier::channel(self.channel()),
        ]
    }

    fn channels(&self) -> Vec<ChannelDescriptor> { vec![self.channel()] }
    fn service_options(&self) -> Option<ServiceOptions> { Some(self.options()) }
}

impl fmt::Display for GroupVoiceChannelGrantExplicit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GROUP VOICE CHANNEL GRANT EXPLICIT FROM:{} TO:{} CHAN:{} SVC:[{}]",
            self.source(), self.group(), self.channel(), self.options())
    }
}

structure! {
    /// Group active on an explicit channel pair.
    pub struct GroupVoiceChannelGrantUpdateExplicit;
}

impl GroupVoiceChannelGrantUpdateExplicit {
    const SERVICE: VoiceServiceFields = VoiceServiceFields::at(OCTET_2_BIT_8);
    const CHANNEL: ExplicitChannelFields = ExplicitChannelFields::at(OCTET_3_BIT_16);
    const GROUP: Field = Field::span(OCTET_7_BIT_48, 16);

    pub fn update(&self) -> GroupChannel {
        GroupChannel {
            options: Some(Self::SERVICE.service_options(&self.0)),
            channel: Self::CHANNEL.channel(&self.0),
            group: self.0.talkgroup(&Self::GROUP),
        }
    }
}

impl MacStructure for GroupVoiceChannelGrantUpdateExplicit {
    fn fields(&self) -> &MacFields { &self.0 }
    fn identifiers(&self) -> Vec<Identifier> { self.update().identifiers() }
    fn channels(&self) -> Vec<ChannelDescriptor> { vec![self.update().channel] }
    fn service_options(&self) -> Option<ServiceOptions> { self.update().options }
}

impl fmt::Display for GroupVoiceChannelGrantUpdateExplicit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GROUP VOICE CHANNEL GRANT UPDATE EXPLICIT {}", self.update())
    }
}

structure! {
    /// Unit-to-unit call granted on an explicit channel pair, sent on a traffic channel.
    /// Also decodes the grant update, which shares its layout.
    pub struct UnitToUnitVoiceChannelGrantExtendedVch;
}

impl UnitToUnitVoiceChannelGrantExtendedVch {
    const CHANNEL: ExplicitChannelFields = ExplicitChannelFields::at(OCTET_2_BIT_8);
    const TARGET: Field = Field::span(OCTET_6_BIT_40, 24);
    const SOURCE_SUID: SuidFields = SuidFields::at(OCTET_9_BIT_64);

    pub fn channel(&self) -> ChannelDescriptor { Self::CHANNEL.channel(&self.0) }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
    pub fn source(&self) -> Identifier { Self::SOURCE_SUID.aliased_radio(&self.0, Role::From) }
}

impl MacStructure for UnitToUnitVoiceChannelGrantExtendedVch {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::To, self.target()),
            self.source(),
            Identifier::channel(self.channel()),
        ]
    }

    fn channels(&self) -> Vec<ChannelDescriptor> { vec![self.channel()] }
}

impl fmt::Display for UnitToUnitVoiceChannelGrantExtendedVch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self.opcode() {
            MacOpcode::UnitToUnitVoiceChannelGrantUpdateExtendedVch => "GRANT UPDATE",
            _ => "GRANT",
        };

        write!(f, "UNIT-TO-UNIT VOICE CHANNEL {} EXTENDED {} TO:{} CHAN:{}", label,
            self.source(), self.target(), self.channel())
    }
}

structure! {
    /// Asks the target radio whether it will accept a call from a roaming radio.
    pub struct UnitToUnitAnswerRequestExtended;
}

impl UnitToUnitAnswerRequestExtended {
    const SERVICE: VoiceServiceFields = VoiceServiceFields::at(OCTET_2_BIT_8);
    const TARGET: Field = Field::span(OCTET_3_BIT_16, 24);
    const SOURCE_SUID: SuidFields = SuidFields::at(OCTET_6_BIT_40);

    pub fn options(&self) -> ServiceOptions { Self::SERVICE.service_options(&self.0) }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
    pub fn source(&self) -> Identifier { Self::SOURCE_SUID.aliased_radio(&self.0, Role::From) }
}

impl MacStructure for UnitToUnitAnswerRequestExtended {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![Identifier::radio(Role::To, self.target()), self.source()]
    }

    fn service_options(&self) -> Option<ServiceOptions> { Some(self.options()) }
}

impl fmt::Display for UnitToUnitAnswerRequestExtended {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UNIT-TO-UNIT ANSWER REQUEST EXTENDED {} TO:{} SVC:[{}]", self.source(),
            self.target(), self.options())
    }
}

multi_fragment_structure! {
    /// Unit-to-unit call granted on an explicit channel pair, sent on a control channel.
    /// The target's address and home identity arrive in the first continuation fragment.
    /// Also decodes the grant update, which shares its layout.
    pub struct UnitToUnitVoiceChannelGrantExtendedLcch;
}

impl UnitToUnitVoiceChannelGrantExtendedLcch {
    const SERVICE: VoiceServiceFields = VoiceServiceFields::at(OCTET_4_BIT_24);
    const CHANNEL: ExplicitChannelFields = ExplicitChannelFields::at(OCTET_5_BIT_32);
    const SOURCE: Field = Field::span(OCTET_9_BIT_64, 24);
    const SOURCE_SUID: SuidFields = SuidFields::at(OCTET_12_BIT_88);
    const TARGET: Field = Field::span(0, 24);
    const TARGET_SUID: SuidFields = SuidFields::at(24);

    pub fn options(&self) -> Option<ServiceOptions> {
        if self.fields().declares(&Self::SERVICE.options) {
            Some(Self::SERVICE.service_options(self.fields()))
        } else {
            None
        }
    }

    pub fn channel(&self) -> Option<ChannelDescriptor> {
        if self.fields().declares(&Self::CHANNEL.rx) {
            Some(Self::CHANNEL.channel(self.fields()))
        } else {
            None
        }
    }

    pub fn source(&self) -> Option<Identifier> {
        let f = self.fields();
        f.get(&Self::SOURCE).map(|local| Self::SOURCE_SUID.radio(f, Role::From, local))
    }

    /// Called radio, once the first continuation fragment has arrived.
    pub fn target(&self) -> Option<Identifier> {
        let local = self.fragment_int(0, &Self::TARGET)?;
        self.fragment_radio(0, &Self::TARGET_SUID, Role::To, local)
    }
}

impl MacStructure for UnitToUnitVoiceChannelGrantExtendedLcch {
    fn fields(&self) -> &MacFields { self.0.base() }

    fn identifiers(&self) -> Vec<Identifier> {
        self.source().into_iter()
            .chain(self.channel().map(Identifier::channel))
            .chain(self.target())
            .collect()
    }

    fn channels(&self) -> Vec<ChannelDescriptor> { self.channel().into_iter().collect() }
    fn service_options(&self) -> Option<ServiceOptions> { self.options() }
}

impl fmt::Display for UnitToUnitVoiceChannelGrantExtendedLcch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self.opcode() {
            MacOpcode::UnitToUnitVoiceChannelGrantUpdateExtendedLcch => "GRANT UPDATE",
            _ => "GRANT",
        };

        write!(f, "UNIT-TO-UNIT VOICE CHANNEL {} EXTENDED", label)?;

        if let Some(source) = self.source() {
            write!(f, " {}", source)?;
        }

        if let Some(channel) = self.channel() {
            write!(f, " CHAN:{}", channel)?;
        }

        if let Some(options) = self.options() {
            write!(f, " SVC:[{}]", options)?;
        }

        match self.target() {
            Some(target) => write!(f, " {}", target),
            None => write!(f, " TO:(AWAITING FRAGMENT)"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ident::{self, Channel, IdentifierKind};
    use mac::fields::MacFields;
    use mac::fragment::ContinuationFragment;

    fn fields(hex: &str) -> MacFields { MacFields::from_hex(hex).unwrap() }

    #[test]
    fn test_group_grant_explicit() {
        let s = GroupVoiceChannelGrantExplicit::new(fields("C080206430C8123456789A"));
        assert_eq!(s.opcode(), MacOpcode::GroupVoiceChannelGrantExplicit);
        assert_eq!(s.length(), 11);
        assert!(s.options().emergency());
        assert_eq!(s.group(), Talkgroup::Other(0x1234));
        assert_eq!(s.source(), 0x56789A);
        assert_eq!(s.channels(), vec![ChannelDescriptor::Explicit {
            tx: Channel::new(0x2064),
            rx: Channel::new(0x30C8),
        }]);

        let ids = s.identifiers();
        assert_eq!(ids.len(), 3);
        assert_eq!(ident::find(&ids, Role::To, IdentifierKind::Talkgroup),
            Some(&Identifier::talkgroup(Role::To, 0x1234)));
        assert_eq!(ident::find(&ids, Role::From, IdentifierKind::Radio),
            Some(&Identifier::radio(Role::From, 0x56789A)));
    }

    #[test]
    fn test_group_user() {
        let s = GroupVoiceChannelUserAbbreviated::new(fields("01000065000123"));
        assert_eq!(s.length(), 7);
        assert_eq!(s.group(), Talkgroup::Other(0x65));
        assert_eq!(s.source(), 0x123);
        assert_eq!(s.service_options(), Some(ServiceOptions::new(0)));
    }

    #[test]
    fn test_updates_multiple_implicit() {
        let s = GroupVoiceChannelGrantUpdateMultipleImplicit::new(
            fields("05 00 1001 0010 40 1002 0020 00 1003 FFFF"));
        assert_eq!(s.length(), 16);

        let updates = s.updates();
        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0].group, Talkgroup::Other(0x10));
        assert_eq!(updates[1].channel, ChannelDescriptor::Implicit(Channel::new(0x1002)));
        assert!(updates[1].options.unwrap().encrypted());
        assert_eq!(updates[2].group, Talkgroup::Everyone);
        assert_eq!(s.identifiers().len(), 6);
        assert_eq!(s.channels().len(), 3);
    }

    #[test]
    fn test_updates_implicit() {
        let s = GroupVoiceChannelGrantUpdateImplicit::new(fields("42 1001 0010 1002 0020"));
        let updates = s.updates();
        assert_eq!(updates[0].group, Talkgroup::Other(0x10));
        assert_eq!(updates[1].channel, ChannelDescriptor::Implicit(Channel::new(0x1002)));
        assert_eq!(updates[1].options, None);
    }

    #[test]
    fn test_unit_grant_pair() {
        let grant = UnitToUnitVoiceChannelGrantAbbreviated::new(fields("44100A00000100000F"));
        assert_eq!(grant.target(), 1);
        assert_eq!(grant.source(), 0xF);
        assert!(format!("{}", grant).starts_with("UNIT-TO-UNIT VOICE CHANNEL GRANT FROM"));

        let update = UnitToUnitVoiceChannelGrantAbbreviated::new(fields("46100A00000100000F"));
        assert_eq!(update.opcode(), MacOpcode::UnitToUnitVoiceChannelGrantUpdateAbbreviated);
        assert!(format!("{}", update).contains("GRANT UPDATE"));
    }

    #[test]
    fn test_user_extended() {
        let s = GroupVoiceChannelUserExtended::new(
            fields("21 00 0065 000ABC BEE003A1000123"));
        assert_eq!(s.length(), 14);

        let fq = s.source().fully_qualified().unwrap();
        assert_eq!(fq.local_address(), 0xABC);
        assert_eq!(fq.wacn(), 0xBEE00);
        assert_eq!(fq.system(), 0x3A1);
        assert_eq!(fq.id(), 0x123);
    }

    #[test]
    fn test_extended_vch_aliased() {
        let s = UnitToUnitVoiceChannelGrantExtendedVch::new(
            fields("C4 2064 30C8 000DEF BEE003A1000123"));
        assert_eq!(s.length(), 15);
        assert_eq!(s.target(), 0xDEF);
        assert_eq!(s.source().fully_qualified().unwrap().local_address(), 0x123);
    }

    #[test]
    fn test_extended_lcch_fragment() {
        let mut s = UnitToUnitVoiceChannelGrantExtendedLcch::new(
            fields("C7 12 1A 00 0001 0002 000ABC BEE003A1000123"));
        assert_eq!(s.length(), 18);
        assert!(!s.is_complete());
        assert_eq!(s.target(), None);
        assert_eq!(s.identifiers().len(), 2);

        let frag = ContinuationFragment::from_fields(fields("10 0C 000DEF BEE003A1000456"))
            .unwrap();
        s.add_continuation(frag);
        assert!(s.is_complete());

        let target = s.target().unwrap();
        assert_eq!(target.role(), Role::To);
        let fq = target.fully_qualified().unwrap();
        assert_eq!(fq.local_address(), 0xDEF);
        assert_eq!(fq.id(), 0x456);
        assert_eq!(s.identifiers().len(), 3);
    }

    #[test]
    fn test_extended_lcch_declared_length() {
        let s = UnitToUnitVoiceChannelGrantExtendedLcch::new(
            fields("C7 08 1A 00 0001 0002 000ABC BEE003A1000123"));
        assert_eq!(s.length(), 8);
        assert!(s.options().is_some());
        assert_eq!(s.channels(), vec![ChannelDescriptor::Explicit {
            tx: Channel::new(0x0001),
            rx: Channel::new(0x0002),
        }]);
        assert_eq!(s.source(), None);
        assert_eq!(s.identifiers().len(), 1);

        let s = UnitToUnitVoiceChannelGrantExtendedLcch::new(fields("C7 03 1A"));
        assert_eq!(s.service_options(), None);
        assert!(s.channels().is_empty());
        assert!(s.identifiers().is_empty());
        assert_eq!(format!("{}", s),
            "UNIT-TO-UNIT VOICE CHANNEL GRANT EXTENDED TO:(AWAITING FRAGMENT)");
    }

    #[test]
    fn test_extended_lcch_partial_fragment() {
        let mut s = UnitToUnitVoiceChannelGrantExtendedLcch::new(
            fields("C7 12 1A 00 0001 0002 000ABC BEE003A1000123"));
        s.add_continuation(ContinuationFragment::new(fields("10 05 000DEF")));
        assert!(!s.is_complete());
        assert_eq!(s.target(), None);
    }
}
