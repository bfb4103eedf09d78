//! MAC structure opcodes and the lengths they imply.

use std::fmt;

use consts::{PTT_OCTETS, VENDOR_PARTITION_END, VENDOR_PARTITION_START};
use ident::Vendor;

/// Octet lengths of the indirect group paging structure for 1 through 4 groups.
pub const GROUP_PAGING_OCTETS: [usize; 4] = [4, 6, 8, 10];
/// Octet lengths of the individual paging structure for 1 through 4 units.
pub const INDIVIDUAL_PAGING_OCTETS: [usize; 4] = [5, 8, 11, 14];

/// Opcode partition, selected by the upper two bits of the opcode.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Partition {
    /// Structures unique to TDMA.
    Unique,
    /// Abbreviated forms of FDMA trunking messages.
    Abbreviated,
    /// Manufacturer-specific structures, keyed by the vendor octet.
    Vendor,
    /// Extended and explicit forms of FDMA trunking messages.
    Extended,
}

impl Partition {
    /// Determine the partition of the given opcode.
    pub fn of(opcode: u8) -> Partition {
        match opcode >> 6 {
            0b00 => Partition::Unique,
            0b01 => Partition::Abbreviated,
            0b10 => Partition::Vendor,
            _ => Partition::Extended,
        }
    }
}

/// How the length of a structure is determined.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MacLength {
    /// Length fixed by the opcode, in octets.
    Fixed(usize),
    /// Length taken from the 6-bit field in the second octet.
    LengthField,
    /// Length taken from the 6-bit field in the third octet, after the vendor ID.
    VendorLengthField,
    /// Length looked up by the 2-bit page count, where a count of 0 means 4.
    PageCount([usize; 4]),
    /// Structure occupies the rest of the PDU.
    Remainder,
}

/// Type of a MAC structure.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub enum MacOpcode {
    NullInformation,
    GroupVoiceChannelUserAbbreviated,
    UnitToUnitVoiceChannelUserAbbreviated,
    TelephoneInterconnectVoiceChannelUser,
    GroupVoiceChannelGrantUpdateMultipleImplicit,
    NullAvoidZeroBias,
    MultiFragmentContinuation,
    IndirectGroupPagingWithoutPriority,
    IndividualPagingWithPriority,
    GroupVoiceChannelUserExtended,
    UnitToUnitVoiceChannelUserExtended,
    GroupVoiceChannelGrantUpdateMultipleExplicit,
    PowerControlSignalQuality,
    MacRelease,

    GroupVoiceChannelGrantImplicit,
    GroupVoiceServiceRequest,
    GroupVoiceChannelGrantUpdateImplicit,
    UnitToUnitVoiceChannelGrantAbbreviated,
    UnitToUnitAnswerRequestAbbreviated,
    UnitToUnitVoiceChannelGrantUpdateAbbreviated,
    TelephoneInterconnectVoiceChannelGrantImplicit,
    TelephoneInterconnectVoiceChannelGrantUpdateImplicit,
    TelephoneInterconnectAnswerRequest,
    RadioUnitMonitorCommandAbbreviated,
    SndcpDataChannelGrant,
    SndcpDataPageRequest,
    SndcpDataChannelAnnouncementExplicit,
    StatusUpdateAbbreviated,
    StatusQueryAbbreviated,
    MessageUpdateAbbreviated,
    RadioUnitMonitorEnhancedCommandAbbreviated,
    CallAlertAbbreviated,
    AcknowledgeResponseFneAbbreviated,
    QueuedResponse,
    ExtendedFunctionCommandAbbreviated,
    DenyResponse,
    GroupAffiliationResponseAbbreviated,
    GroupAffiliationQueryAbbreviated,
    LocationRegistrationResponse,
    UnitRegistrationResponseAbbreviated,
    UnitRegistrationCommandAbbreviated,
    DeregistrationAcknowledge,
    SynchronizationBroadcast,
    AuthenticationDemand,
    AuthenticationFneResponseAbbreviated,
    FrequencyBandUpdateTdma,
    FrequencyBandUpdateVhfUhf,
    TimeAndDateAnnouncement,
    RoamingAddressCommand,
    RoamingAddressUpdate,
    SystemServiceBroadcast,
    SecondaryControlChannelBroadcastImplicit,
    RfssStatusBroadcastImplicit,
    NetworkStatusBroadcastImplicit,
    AdjacentStatusBroadcastImplicit,
    FrequencyBandUpdate,

    GroupVoiceChannelGrantExplicit,
    GroupVoiceChannelGrantUpdateExplicit,
    UnitToUnitVoiceChannelGrantExtendedVch,
    UnitToUnitAnswerRequestExtended,
    UnitToUnitVoiceChannelGrantUpdateExtendedVch,
    UnitToUnitVoiceChannelGrantExtendedLcch,
    TelephoneInterconnectVoiceChannelGrantExplicit,
    TelephoneInterconnectVoiceChannelGrantUpdateExplicit,
    CallAlertExtendedLcch,
    RadioUnitMonitorCommandExtendedVch,
    RadioUnitMonitorCommandExtendedLcch,
    MessageUpdateExtendedLcch,
    UnitToUnitVoiceChannelGrantUpdateExtendedLcch,
    StatusUpdateExtendedVch,
    StatusUpdateExtendedLcch,
    StatusQueryExtendedVch,
    StatusQueryExtendedLcch,
    MessageUpdateExtendedVch,
    RadioUnitMonitorEnhancedCommandExtended,
    CallAlertExtendedVch,
    AcknowledgeResponseFneExtended,
    ExtendedFunctionCommandExtendedVch,
    ExtendedFunctionCommandExtendedLcch,
    GroupAffiliationResponseExtended,
    SecondaryControlChannelBroadcastExplicit,
    GroupAffiliationQueryExtended,
    UnitRegistrationResponseExtended,
    AuthenticationFneResponseExtended,
    FrequencyBandUpdateTdmaExtended,
    RfssStatusBroadcastExplicit,
    NetworkStatusBroadcastExplicit,
    AdjacentStatusBroadcastExplicit,
    AdjacentStatusBroadcastExtendedExplicit,

    MotorolaGroupRegroupVoiceChannelUserAbbreviated,
    MotorolaGroupRegroupAdd,
    MotorolaGroupRegroupVoiceChannelUpdate,
    MotorolaGroupRegroupDelete,
    MotorolaGroupRegroupVoiceChannelUserExtended,
    MotorolaGroupRegroupChannelGrantImplicit,
    MotorolaGroupRegroupChannelGrantExplicit,
    MotorolaGroupRegroupChannelGrantUpdate,
    HarrisTalkerAlias,
    HarrisTalkerGpsLocation,

    /// Voice burst header carried by a MAC PTT PDU.
    PushToTalk,
    /// Voice burst trailer carried by a MAC END PTT PDU.
    EndPushToTalk,
    /// Opcode at or above 128 with no known structure for the carried vendor octet.
    UnknownVendor { opcode: u8, vendor: u8 },
    /// Unassigned standard opcode.
    Unknown(u8),
    /// Payload flagged by the FEC stage as failing its CRC.
    CrcFailure,
}

impl MacOpcode {
    /// Resolve the given opcode octet and, for opcodes of 128 and above, the vendor octet
    /// that follows it. Every combination maps to some opcode.
    pub fn from_bits(opcode: u8, vendor: u8) -> MacOpcode {
        use self::MacOpcode::*;

        match opcode {
            0x00 => NullInformation,
            0x01 => GroupVoiceChannelUserAbbreviated,
            0x02 => UnitToUnitVoiceChannelUserAbbreviated,
            0x03 => TelephoneInterconnectVoiceChannelUser,
            0x05 => GroupVoiceChannelGrantUpdateMultipleImplicit,
            0x08 => NullAvoidZeroBias,
            0x10 => MultiFragmentContinuation,
            0x11 => IndirectGroupPagingWithoutPriority,
            0x12 => IndividualPagingWithPriority,
            0x21 => GroupVoiceChannelUserExtended,
            0x22 => UnitToUnitVoiceChannelUserExtended,
            0x25 => GroupVoiceChannelGrantUpdateMultipleExplicit,
            0x30 => PowerControlSignalQuality,
            0x31 => MacRelease,

            0x40 => GroupVoiceChannelGrantImplicit,
            0x41 => GroupVoiceServiceRequest,
            0x42 => GroupVoiceChannelGrantUpdateImplicit,
            0x44 => UnitToUnitVoiceChannelGrantAbbreviated,
            0x45 => UnitToUnitAnswerRequestAbbreviated,
            0x46 => UnitToUnitVoiceChannelGrantUpdateAbbreviated,
            0x48 => TelephoneInterconnectVoiceChannelGrantImplicit,
            0x49 => TelephoneInterconnectVoiceChannelGrantUpdateImplicit,
            0x4A => TelephoneInterconnectAnswerRequest,
            0x4C => RadioUnitMonitorCommandAbbreviated,
            0x54 => SndcpDataChannelGrant,
            0x55 => SndcpDataPageRequest,
            0x56 => SndcpDataChannelAnnouncementExplicit,
            0x58 => StatusUpdateAbbreviated,
            0x5A => StatusQueryAbbreviated,
            0x5C => MessageUpdateAbbreviated,
            0x5E => RadioUnitMonitorEnhancedCommandAbbreviated,
            0x5F => CallAlertAbbreviated,
            0x60 => AcknowledgeResponseFneAbbreviated,
            0x61 => QueuedResponse,
            0x64 => ExtendedFunctionCommandAbbreviated,
            0x67 => DenyResponse,
            0x68 => GroupAffiliationResponseAbbreviated,
            0x6A => GroupAffiliationQueryAbbreviated,
            0x6B => LocationRegistrationResponse,
            0x6C => UnitRegistrationResponseAbbreviated,
            0x6D => UnitRegistrationCommandAbbreviated,
            0x6F => DeregistrationAcknowledge,
            0x70 => SynchronizationBroadcast,
            0x71 => AuthenticationDemand,
            0x72 => AuthenticationFneResponseAbbreviated,
            0x73 => FrequencyBandUpdateTdma,
            0x74 => FrequencyBandUpdateVhfUhf,
            0x75 => TimeAndDateAnnouncement,
            0x76 => RoamingAddressCommand,
            0x77 => RoamingAddressUpdate,
            0x78 => SystemServiceBroadcast,
            0x79 => SecondaryControlChannelBroadcastImplicit,
            0x7A => RfssStatusBroadcastImplicit,
            0x7B => NetworkStatusBroadcastImplicit,
            0x7C => AdjacentStatusBroadcastImplicit,
            0x7D => FrequencyBandUpdate,

            0x00..=0x7F => Unknown(opcode),

            VENDOR_PARTITION_START..=VENDOR_PARTITION_END =>
                Self::from_vendor_bits(opcode, vendor),

            0xC0 => GroupVoiceChannelGrantExplicit,
            0xC3 => GroupVoiceChannelGrantUpdateExplicit,
            0xC4 => UnitToUnitVoiceChannelGrantExtendedVch,
            0xC5 => UnitToUnitAnswerRequestExtended,
            0xC6 => UnitToUnitVoiceChannelGrantUpdateExtendedVch,
            0xC7 => UnitToUnitVoiceChannelGrantExtendedLcch,
            0xC8 => TelephoneInterconnectVoiceChannelGrantExplicit,
            0xC9 => TelephoneInterconnectVoiceChannelGrantUpdateExplicit,
            0xCB => CallAlertExtendedLcch,
            0xCC => RadioUnitMonitorCommandExtendedVch,
            0xCD => RadioUnitMonitorCommandExtendedLcch,
            0xCE => MessageUpdateExtendedLcch,
            0xCF => UnitToUnitVoiceChannelGrantUpdateExtendedLcch,
            0xD8 => StatusUpdateExtendedVch,
            0xD9 => StatusUpdateExtendedLcch,
            0xDA => StatusQueryExtendedVch,
            0xDB => StatusQueryExtendedLcch,
            0xDC => MessageUpdateExtendedVch,
            0xDE => RadioUnitMonitorEnhancedCommandExtended,
            0xDF => CallAlertExtendedVch,
            0xE0 => AcknowledgeResponseFneExtended,
            0xE4 => ExtendedFunctionCommandExtendedVch,
            0xE5 => ExtendedFunctionCommandExtendedLcch,
            0xE8 => GroupAffiliationResponseExtended,
            0xE9 => SecondaryControlChannelBroadcastExplicit,
            0xEA => GroupAffiliationQueryExtended,
            0xEC => UnitRegistrationResponseExtended,
            0xF2 => AuthenticationFneResponseExtended,
            0xF3 => FrequencyBandUpdateTdmaExtended,
            0xFA => RfssStatusBroadcastExplicit,
            0xFB => NetworkStatusBroadcastExplicit,
            0xFC => AdjacentStatusBroadcastExplicit,
            0xFE => AdjacentStatusBroadcastExtendedExplicit,

            _ => UnknownVendor { opcode: opcode, vendor: vendor },
        }
    }

    /// Resolve an opcode within the vendor partition by its vendor octet.
    fn from_vendor_bits(opcode: u8, vendor: u8) -> MacOpcode {
        use self::MacOpcode::*;

        match (Vendor::from_bits(vendor), opcode) {
            (Vendor::Motorola, 0x80) => MotorolaGroupRegroupVoiceChannelUserAbbreviated,
            (Vendor::Motorola, 0x81) => MotorolaGroupRegroupAdd,
            (Vendor::Motorola, 0x83) => MotorolaGroupRegroupVoiceChannelUpdate,
            (Vendor::Motorola, 0x89) => MotorolaGroupRegroupDelete,
            (Vendor::Motorola, 0xA0) => MotorolaGroupRegroupVoiceChannelUserExtended,
            (Vendor::Motorola, 0xA3) => MotorolaGroupRegroupChannelGrantImplicit,
            (Vendor::Motorola, 0xA4) => MotorolaGroupRegroupChannelGrantExplicit,
            (Vendor::Motorola, 0xA5) => MotorolaGroupRegroupChannelGrantUpdate,
            (Vendor::Harris, 0xA8) => HarrisTalkerAlias,
            (Vendor::Harris, 0xAA) => HarrisTalkerGpsLocation,
            _ => UnknownVendor { opcode: opcode, vendor: vendor },
        }
    }

    /// How the length of a structure with this opcode is determined.
    pub fn length(&self) -> MacLength {
        use self::MacOpcode::*;
        use self::MacLength::*;

        match *self {
            NullInformation => Remainder,
            GroupVoiceChannelUserAbbreviated => Fixed(7),
            UnitToUnitVoiceChannelUserAbbreviated => Fixed(8),
            TelephoneInterconnectVoiceChannelUser => Fixed(7),
            GroupVoiceChannelGrantUpdateMultipleImplicit => Fixed(16),
            NullAvoidZeroBias => LengthField,
            MultiFragmentContinuation => LengthField,
            IndirectGroupPagingWithoutPriority => PageCount(GROUP_PAGING_OCTETS),
            IndividualPagingWithPriority => PageCount(INDIVIDUAL_PAGING_OCTETS),
            GroupVoiceChannelUserExtended => Fixed(14),
            UnitToUnitVoiceChannelUserExtended => Fixed(15),
            GroupVoiceChannelGrantUpdateMultipleExplicit => Fixed(15),
            PowerControlSignalQuality => Fixed(5),
            MacRelease => Fixed(7),

            UnitToUnitAnswerRequestAbbreviated => Fixed(8),
            GroupVoiceServiceRequest |
            SndcpDataPageRequest |
            StatusQueryAbbreviated |
            CallAlertAbbreviated |
            GroupAffiliationQueryAbbreviated |
            UnitRegistrationCommandAbbreviated => Fixed(7),
            RadioUnitMonitorEnhancedCommandAbbreviated => Fixed(14),
            AuthenticationDemand | RoamingAddressUpdate => LengthField,
            GroupVoiceChannelGrantImplicit |
            GroupVoiceChannelGrantUpdateImplicit |
            UnitToUnitVoiceChannelGrantAbbreviated |
            UnitToUnitVoiceChannelGrantUpdateAbbreviated |
            TelephoneInterconnectVoiceChannelGrantImplicit |
            TelephoneInterconnectVoiceChannelGrantUpdateImplicit |
            TelephoneInterconnectAnswerRequest |
            RadioUnitMonitorCommandAbbreviated |
            SndcpDataChannelGrant |
            SndcpDataChannelAnnouncementExplicit |
            StatusUpdateAbbreviated |
            MessageUpdateAbbreviated |
            AcknowledgeResponseFneAbbreviated |
            QueuedResponse |
            ExtendedFunctionCommandAbbreviated |
            DenyResponse |
            GroupAffiliationResponseAbbreviated |
            LocationRegistrationResponse |
            UnitRegistrationResponseAbbreviated |
            DeregistrationAcknowledge |
            SynchronizationBroadcast |
            AuthenticationFneResponseAbbreviated |
            FrequencyBandUpdateTdma |
            FrequencyBandUpdateVhfUhf |
            TimeAndDateAnnouncement |
            RoamingAddressCommand |
            SystemServiceBroadcast |
            SecondaryControlChannelBroadcastImplicit |
            RfssStatusBroadcastImplicit |
            NetworkStatusBroadcastImplicit |
            AdjacentStatusBroadcastImplicit |
            FrequencyBandUpdate => Fixed(9),

            GroupVoiceChannelGrantUpdateExplicit => Fixed(8),
            SecondaryControlChannelBroadcastExplicit => Fixed(9),
            GroupVoiceChannelGrantExplicit |
            TelephoneInterconnectVoiceChannelGrantExplicit |
            TelephoneInterconnectVoiceChannelGrantUpdateExplicit |
            StatusQueryExtendedVch |
            CallAlertExtendedVch |
            GroupAffiliationQueryExtended |
            RfssStatusBroadcastExplicit |
            NetworkStatusBroadcastExplicit |
            AdjacentStatusBroadcastExplicit => Fixed(11),
            UnitToUnitAnswerRequestExtended |
            AcknowledgeResponseFneExtended |
            UnitRegistrationResponseExtended |
            AuthenticationFneResponseExtended => Fixed(12),
            RadioUnitMonitorCommandExtendedVch |
            MessageUpdateExtendedVch |
            FrequencyBandUpdateTdmaExtended => Fixed(13),
            StatusUpdateExtendedVch |
            AdjacentStatusBroadcastExtendedExplicit => Fixed(14),
            UnitToUnitVoiceChannelGrantExtendedVch |
            UnitToUnitVoiceChannelGrantUpdateExtendedVch => Fixed(15),
            ExtendedFunctionCommandExtendedVch |
            GroupAffiliationResponseExtended => Fixed(16),
            RadioUnitMonitorEnhancedCommandExtended => Fixed(19),
            UnitToUnitVoiceChannelGrantExtendedLcch |
            UnitToUnitVoiceChannelGrantUpdateExtendedLcch |
            CallAlertExtendedLcch |
            RadioUnitMonitorCommandExtendedLcch |
            MessageUpdateExtendedLcch |
            StatusUpdateExtendedLcch |
            StatusQueryExtendedLcch |
            ExtendedFunctionCommandExtendedLcch => LengthField,

            MotorolaGroupRegroupVoiceChannelUserAbbreviated |
            MotorolaGroupRegroupAdd |
            MotorolaGroupRegroupVoiceChannelUpdate |
            MotorolaGroupRegroupDelete |
            MotorolaGroupRegroupVoiceChannelUserExtended |
            MotorolaGroupRegroupChannelGrantImplicit |
            MotorolaGroupRegroupChannelGrantExplicit |
            MotorolaGroupRegroupChannelGrantUpdate |
            HarrisTalkerAlias |
            HarrisTalkerGpsLocation => VendorLengthField,

            PushToTalk | EndPushToTalk => Fixed(PTT_OCTETS),
            UnknownVendor { opcode, .. } if Partition::of(opcode) == Partition::Vendor =>
                VendorLengthField,
            UnknownVendor { .. } | Unknown(_) | CrcFailure => Remainder,
        }
    }

    /// Whether structures with this opcode may span continuation fragments.
    pub fn is_multi_fragment(&self) -> bool {
        use self::MacOpcode::*;

        match *self {
            AuthenticationDemand |
            UnitToUnitVoiceChannelGrantExtendedLcch |
            UnitToUnitVoiceChannelGrantUpdateExtendedLcch |
            CallAlertExtendedLcch |
            RadioUnitMonitorCommandExtendedLcch |
            MessageUpdateExtendedLcch |
            StatusUpdateExtendedLcch |
            StatusQueryExtendedLcch |
            ExtendedFunctionCommandExtendedLcch => true,
            _ => false,
        }
    }

    /// Octets spanned by the fields of a vendor structure with a declared length, which
    /// the declared length must cover for the structure to be decoded.
    pub fn layout_octets(&self) -> Option<usize> {
        use self::MacOpcode::*;

        match *self {
            MotorolaGroupRegroupAdd | MotorolaGroupRegroupDelete => Some(5),
            MotorolaGroupRegroupVoiceChannelUpdate => Some(7),
            MotorolaGroupRegroupVoiceChannelUserAbbreviated => Some(9),
            MotorolaGroupRegroupChannelGrantImplicit |
            MotorolaGroupRegroupChannelGrantUpdate => Some(11),
            MotorolaGroupRegroupChannelGrantExplicit |
            HarrisTalkerGpsLocation => Some(13),
            MotorolaGroupRegroupVoiceChannelUserExtended => Some(16),
            _ => None,
        }
    }

    /// Whether the opcode names a manufacturer-specific structure.
    pub fn is_vendor(&self) -> bool {
        use self::MacOpcode::*;

        match *self {
            MotorolaGroupRegroupVoiceChannelUserAbbreviated |
            MotorolaGroupRegroupAdd |
            MotorolaGroupRegroupVoiceChannelUpdate |
            MotorolaGroupRegroupDelete |
            MotorolaGroupRegroupVoiceChannelUserExtended |
            MotorolaGroupRegroupChannelGrantImplicit |
            MotorolaGroupRegroupChannelGrantExplicit |
            MotorolaGroupRegroupChannelGrantUpdate |
            HarrisTalkerAlias |
            HarrisTalkerGpsLocation |
            UnknownVendor { .. } => true,
            _ => false,
        }
    }
}

impl fmt::Display for MacOpcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MacOpcode::UnknownVendor { opcode, vendor } =>
                write!(f, "UnknownVendor(opcode {}, {})", opcode, Vendor::from_bits(vendor)),
            MacOpcode::Unknown(opcode) => write!(f, "Unknown(opcode {})", opcode),
            op => write!(f, "{:?}", op),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::MacOpcode::*;

    #[test]
    fn test_partition() {
        assert_eq!(Partition::of(0x3F), Partition::Unique);
        assert_eq!(Partition::of(0x40), Partition::Abbreviated);
        assert_eq!(Partition::of(0xBF), Partition::Vendor);
        assert_eq!(Partition::of(0xC0), Partition::Extended);
    }

    #[test]
    fn test_standard() {
        assert_eq!(MacOpcode::from_bits(0x01, 0), GroupVoiceChannelUserAbbreviated);
        assert_eq!(MacOpcode::from_bits(0x7D, 0), FrequencyBandUpdate);
        assert_eq!(MacOpcode::from_bits(0xC0, 0x00), GroupVoiceChannelGrantExplicit);
        assert_eq!(MacOpcode::from_bits(0xC8, 0x90), TelephoneInterconnectVoiceChannelGrantExplicit);
        assert_eq!(MacOpcode::from_bits(0x04, 0), Unknown(0x04));
        assert_eq!(MacOpcode::from_bits(0x7F, 0xAA), Unknown(0x7F));
    }

    #[test]
    fn test_vendor() {
        assert_eq!(MacOpcode::from_bits(0xAA, 0xA4), HarrisTalkerGpsLocation);
        assert_eq!(MacOpcode::from_bits(0x80, 0x90),
            MotorolaGroupRegroupVoiceChannelUserAbbreviated);
        assert_eq!(MacOpcode::from_bits(0xAA, 0x90), UnknownVendor { opcode: 0xAA, vendor: 0x90 });
        assert_eq!(MacOpcode::from_bits(0x80, 0xA4), UnknownVendor { opcode: 0x80, vendor: 0xA4 });
        assert_eq!(MacOpcode::from_bits(0xC1, 0x22), UnknownVendor { opcode: 0xC1, vendor: 0x22 });
    }

    #[test]
    fn test_total() {
        for opcode in 0..256 {
            for &vendor in &[0x00, 0x01, 0x90, 0xA4, 0x42, 0xFF] {
                let op = MacOpcode::from_bits(opcode as u8, vendor);

                if opcode >= 0x80 {
                    assert!(match op { Unknown(_) => false, _ => true });
                } else {
                    assert!(match op { UnknownVendor { .. } => false, _ => true });
                }

                match op.length() {
                    MacLength::Fixed(n) => assert!(n >= 2),
                    _ => {},
                }
            }
        }
    }

    #[test]
    fn test_length() {
        assert_eq!(GroupVoiceChannelGrantExplicit.length(), MacLength::Fixed(11));
        assert_eq!(GroupVoiceServiceRequest.length(), MacLength::Fixed(7));
        assert_eq!(UnitToUnitAnswerRequestAbbreviated.length(), MacLength::Fixed(8));
        assert_eq!(IndirectGroupPagingWithoutPriority.length(),
            MacLength::PageCount(GROUP_PAGING_OCTETS));
        assert_eq!(HarrisTalkerGpsLocation.length(), MacLength::VendorLengthField);
        assert_eq!(UnknownVendor { opcode: 0x85, vendor: 3 }.length(),
            MacLength::VendorLengthField);
        assert_eq!(UnknownVendor { opcode: 0xC1, vendor: 3 }.length(), MacLength::Remainder);
        assert_eq!(PushToTalk.length(), MacLength::Fixed(17));
        assert!(AuthenticationDemand.is_multi_fragment());
        assert!(!GroupVoiceChannelGrantExplicit.is_multi_fragment());
        assert!(HarrisTalkerAlias.is_vendor());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", MacOpcode::from_bits(0xB7, 0x42)),
            "UnknownVendor(opcode 183, VENDOR 42)");
        assert_eq!(format!("{}", MacRelease), "MacRelease");
    }
}
