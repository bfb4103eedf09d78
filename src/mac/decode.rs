//! Opcode dispatch: selects and constructs the decoder for the structure at a given
//! position in a buffer.

use bits::BitBuffer;
use config::Config;
use consts::OCTET_BITS;
use mac::broadcast::*;
use mac::control::*;
use mac::data::*;
use mac::fields::MacFields;
use mac::fragment::ContinuationFragment;
use mac::generic::*;
use mac::opcode::Partition;
use mac::paging::*;
use mac::pdu::{EndPushToTalk, PushToTalk};
use mac::registration::*;
use mac::response::*;
use mac::structure::MacStructure;
use mac::telephone::*;
use mac::unit::*;
use mac::vendor::*;
use mac::voice::*;

structures! {
    single {
        NullInformation,
        NullAvoidZeroBias,
        UnknownStructure,
        UnknownVendorStructure,
        CrcFailure,
        ContinuationFragment,
        PushToTalk,
        EndPushToTalk,

        GroupVoiceChannelUserAbbreviated,
        UnitToUnitVoiceChannelUserAbbreviated,
        TelephoneInterconnectVoiceChannelUser,
        GroupVoiceChannelGrantUpdateMultipleImplicit,
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
        TelephoneInterconnectVoiceChannelGrantImplicit,
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
        TelephoneInterconnectVoiceChannelGrantExplicit,
        RadioUnitMonitorCommandExtendedVch,
        StatusUpdateExtendedVch,
        StatusQueryExtendedVch,
        MessageUpdateExtendedVch,
        RadioUnitMonitorEnhancedCommandExtended,
        CallAlertExtendedVch,
        AcknowledgeResponseFneExtended,
        ExtendedFunctionCommandExtendedVch,
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
        MotorolaGroupRegroupMembership,
        MotorolaGroupRegroupVoiceChannelUpdate,
        MotorolaGroupRegroupVoiceChannelUserExtended,
        MotorolaGroupRegroupChannelGrantImplicit,
        MotorolaGroupRegroupChannelGrantExplicit,
        MotorolaGroupRegroupChannelGrantUpdate,
        HarrisTalkerAlias,
        HarrisTalkerGpsLocation,
    }
    multi {
        AuthenticationDemand,
        UnitToUnitVoiceChannelGrantExtendedLcch,
        CallAlertExtendedLcch,
        RadioUnitMonitorCommandExtendedLcch,
        MessageUpdateExtendedLcch,
        StatusUpdateExtendedLcch,
        StatusQueryExtendedLcch,
        ExtendedFunctionCommandExtendedLcch,
    }
}

/// Decode the structure whose opcode begins at bit `offset` of `buf`.
///
/// Every opcode, known or not, decodes to some structure. The structure must have at
/// least its opcode octet, and its vendor octet for opcodes of 128 and above, within the
/// buffer.
pub fn decode(buf: &BitBuffer, offset: usize, config: &Config) -> Structure {
    use mac::opcode::MacOpcode::*;

    debug_assert!(offset + OCTET_BITS <= buf.len());

    let fields = MacFields::new(buf.clone(), offset);

    if buf.crc_failed() {
        return self::CrcFailure::new(fields).into();
    }

    if !config.vendor_extensions && Partition::of(fields.opcode_bits()) == Partition::Vendor {
        debug!("skipping vendor opcode {} with vendor {:02X}", fields.opcode_bits(),
            fields.vendor_bits());
        return UnknownVendorStructure::new(fields).into();
    }

    let opcode = fields.opcode();

    if let Some(octets) = opcode.layout_octets() {
        let declared = fields.length(opcode);

        if declared < octets || fields.remaining_octets() < octets {
            debug!("{} declares {} octets of its {}", opcode, declared, octets);
            return UnknownVendorStructure::new(fields).into();
        }
    }

    trace!("decoding {} at bit {}", opcode, offset);

    match opcode {
        NullInformation => self::NullInformation::new(fields).into(),
        NullAvoidZeroBias => self::NullAvoidZeroBias::new(fields).into(),
        MultiFragmentContinuation => ContinuationFragment::new(fields).into(),

        GroupVoiceChannelUserAbbreviated =>
            self::GroupVoiceChannelUserAbbreviated::new(fields).into(),
        UnitToUnitVoiceChannelUserAbbreviated =>
            self::UnitToUnitVoiceChannelUserAbbreviated::new(fields).into(),
        TelephoneInterconnectVoiceChannelUser =>
            self::TelephoneInterconnectVoiceChannelUser::new(fields).into(),
        GroupVoiceChannelGrantUpdateMultipleImplicit =>
            self::GroupVoiceChannelGrantUpdateMultipleImplicit::new(fields).into(),
        IndirectGroupPagingWithoutPriority =>
            self::IndirectGroupPagingWithoutPriority::new(fields).into(),
        IndividualPagingWithPriority =>
            self::IndividualPagingWithPriority::new(fields).into(),
        GroupVoiceChannelUserExtended =>
            self::GroupVoiceChannelUserExtended::new(fields).into(),
        UnitToUnitVoiceChannelUserExtended =>
            self::UnitToUnitVoiceChannelUserExtended::new(fields).into(),
        GroupVoiceChannelGrantUpdateMultipleExplicit =>
            self::GroupVoiceChannelGrantUpdateMultipleExplicit::new(fields).into(),
        PowerControlSignalQuality => self::PowerControlSignalQuality::new(fields).into(),
        MacRelease => self::MacRelease::new(fields).into(),

        GroupVoiceChannelGrantImplicit =>
            self::GroupVoiceChannelGrantImplicit::new(fields).into(),
        GroupVoiceServiceRequest => self::GroupVoiceServiceRequest::new(fields).into(),
        GroupVoiceChannelGrantUpdateImplicit =>
            self::GroupVoiceChannelGrantUpdateImplicit::new(fields).into(),
        UnitToUnitVoiceChannelGrantAbbreviated |
        UnitToUnitVoiceChannelGrantUpdateAbbreviated =>
            self::UnitToUnitVoiceChannelGrantAbbreviated::new(fields).into(),
        UnitToUnitAnswerRequestAbbreviated =>
            self::UnitToUnitAnswerRequestAbbreviated::new(fields).into(),
        TelephoneInterconnectVoiceChannelGrantImplicit |
        TelephoneInterconnectVoiceChannelGrantUpdateImplicit =>
            self::TelephoneInterconnectVoiceChannelGrantImplicit::new(fields).into(),
        TelephoneInterconnectAnswerRequest =>
            self::TelephoneInterconnectAnswerRequest::new(fields).into(),
        RadioUnitMonitorCommandAbbreviated =>
            self::RadioUnitMonitorCommandAbbreviated::new(fields).into(),
        SndcpDataChannelGrant => self::SndcpDataChannelGrant::new(fields).into(),
        SndcpDataPageRequest => self::SndcpDataPageRequest::new(fields).into(),
        SndcpDataChannelAnnouncementExplicit =>
            self::SndcpDataChannelAnnouncementExplicit::new(fields).into(),
        StatusUpdateAbbreviated => self::StatusUpdateAbbreviated::new(fields).into(),
        StatusQueryAbbreviated => self::StatusQueryAbbreviated::new(fields).into(),
        MessageUpdateAbbreviated => self::MessageUpdateAbbreviated::new(fields).into(),
        RadioUnitMonitorEnhancedCommandAbbreviated =>
            self::RadioUnitMonitorEnhancedCommandAbbreviated::new(fields).into(),
        CallAlertAbbreviated => self::CallAlertAbbreviated::new(fields).into(),
        AcknowledgeResponseFneAbbreviated =>
            self::AcknowledgeResponseFneAbbreviated::new(fields).into(),
        QueuedResponse => self::QueuedResponse::new(fields).into(),
        ExtendedFunctionCommandAbbreviated =>
            self::ExtendedFunctionCommandAbbreviated::new(fields).into(),
        DenyResponse => self::DenyResponse::new(fields).into(),
        GroupAffiliationResponseAbbreviated =>
            self::GroupAffiliationResponseAbbreviated::new(fields).into(),
        GroupAffiliationQueryAbbreviated =>
            self::GroupAffiliationQueryAbbreviated::new(fields).into(),
        LocationRegistrationResponse =>
            self::LocationRegistrationResponse::new(fields).into(),
        UnitRegistrationResponseAbbreviated =>
            self::UnitRegistrationResponseAbbreviated::new(fields).into(),
        UnitRegistrationCommandAbbreviated =>
            self::UnitRegistrationCommandAbbreviated::new(fields).into(),
        DeregistrationAcknowledge => self::DeregistrationAcknowledge::new(fields).into(),
        SynchronizationBroadcast => self::SynchronizationBroadcast::new(fields).into(),
        AuthenticationDemand => self::AuthenticationDemand::new(fields).into(),
        AuthenticationFneResponseAbbreviated =>
            self::AuthenticationFneResponseAbbreviated::new(fields).into(),
        FrequencyBandUpdateTdma => self::FrequencyBandUpdateTdma::new(fields).into(),
        FrequencyBandUpdateVhfUhf => self::FrequencyBandUpdateVhfUhf::new(fields).into(),
        TimeAndDateAnnouncement => self::TimeAndDateAnnouncement::new(fields).into(),
        RoamingAddressCommand => self::RoamingAddressCommand::new(fields).into(),
        RoamingAddressUpdate => self::RoamingAddressUpdate::new(fields).into(),
        SystemServiceBroadcast => self::SystemServiceBroadcast::new(fields).into(),
        SecondaryControlChannelBroadcastImplicit =>
            self::SecondaryControlChannelBroadcastImplicit::new(fields).into(),
        RfssStatusBroadcastImplicit => self::RfssStatusBroadcastImplicit::new(fields).into(),
        NetworkStatusBroadcastImplicit =>
            self::NetworkStatusBroadcastImplicit::new(fields).into(),
        AdjacentStatusBroadcastImplicit =>
            self::AdjacentStatusBroadcastImplicit::new(fields).into(),
        FrequencyBandUpdate => self::FrequencyBandUpdate::new(fields).into(),

        GroupVoiceChannelGrantExplicit =>
            self::GroupVoiceChannelGrantExplicit::new(fields).into(),
        GroupVoiceChannelGrantUpdateExplicit =>
            self::GroupVoiceChannelGrantUpdateExplicit::new(fields).into(),
        UnitToUnitVoiceChannelGrantExtendedVch |
        UnitToUnitVoiceChannelGrantUpdateExtendedVch =>
            self::UnitToUnitVoiceChannelGrantExtendedVch::new(fields).into(),
        UnitToUnitAnswerRequestExtended =>
            self::UnitToUnitAnswerRequestExtended::new(fields).into(),
        UnitToUnitVoiceChannelGrantExtendedLcch |
        UnitToUnitVoiceChannelGrantUpdateExtendedLcch =>
            self::UnitToUnitVoiceChannelGrantExtendedLcch::new(fields).into(),
        TelephoneInterconnectVoiceChannelGrantExplicit |
        TelephoneInterconnectVoiceChannelGrantUpdateExplicit =>
            self::TelephoneInterconnectVoiceChannelGrantExplicit::new(fields).into(),
        CallAlertExtendedLcch => self::CallAlertExtendedLcch::new(fields).into(),
        RadioUnitMonitorCommandExtendedVch =>
            self::RadioUnitMonitorCommandExtendedVch::new(fields).into(),
        RadioUnitMonitorCommandExtendedLcch =>
            self::RadioUnitMonitorCommandExtendedLcch::new(fields).into(),
        MessageUpdateExtendedLcch => self::MessageUpdateExtendedLcch::new(fields).into(),
        StatusUpdateExtendedVch => self::StatusUpdateExtendedVch::new(fields).into(),
        StatusUpdateExtendedLcch => self::StatusUpdateExtendedLcch::new(fields).into(),
        StatusQueryExtendedVch => self::StatusQueryExtendedVch::new(fields).into(),
        StatusQueryExtendedLcch => self::StatusQueryExtendedLcch::new(fields).into(),
        MessageUpdateExtendedVch => self::MessageUpdateExtendedVch::new(fields).into(),
        RadioUnitMonitorEnhancedCommandExtended =>
            self::RadioUnitMonitorEnhancedCommandExtended::new(fields).into(),
        CallAlertExtendedVch => self::CallAlertExtendedVch::new(fields).into(),
        AcknowledgeResponseFneExtended =>
            self::AcknowledgeResponseFneExtended::new(fields).into(),
        ExtendedFunctionCommandExtendedVch =>
            self::ExtendedFunctionCommandExtendedVch::new(fields).into(),
        ExtendedFunctionCommandExtendedLcch =>
            self::ExtendedFunctionCommandExtendedLcch::new(fields).into(),
        GroupAffiliationResponseExtended =>
            self::GroupAffiliationResponseExtended::new(fields).into(),
        SecondaryControlChannelBroadcastExplicit =>
            self::SecondaryControlChannelBroadcastExplicit::new(fields).into(),
        GroupAffiliationQueryExtended =>
            self::GroupAffiliationQueryExtended::new(fields).into(),
        UnitRegistrationResponseExtended =>
            self::UnitRegistrationResponseExtended::new(fields).into(),
        AuthenticationFneResponseExtended =>
            self::AuthenticationFneResponseExtended::new(fields).into(),
        FrequencyBandUpdateTdmaExtended =>
            self::FrequencyBandUpdateTdmaExtended::new(fields).into(),
        RfssStatusBroadcastExplicit => self::RfssStatusBroadcastExplicit::new(fields).into(),
        NetworkStatusBroadcastExplicit =>
            self::NetworkStatusBroadcastExplicit::new(fields).into(),
        AdjacentStatusBroadcastExplicit =>
            self::AdjacentStatusBroadcastExplicit::new(fields).into(),
        AdjacentStatusBroadcastExtendedExplicit =>
            self::AdjacentStatusBroadcastExtendedExplicit::new(fields).into(),

        MotorolaGroupRegroupVoiceChannelUserAbbreviated =>
            self::MotorolaGroupRegroupVoiceChannelUserAbbreviated::new(fields).into(),
        MotorolaGroupRegroupAdd | MotorolaGroupRegroupDelete =>
            MotorolaGroupRegroupMembership::new(fields).into(),
        MotorolaGroupRegroupVoiceChannelUpdate =>
            self::MotorolaGroupRegroupVoiceChannelUpdate::new(fields).into(),
        MotorolaGroupRegroupVoiceChannelUserExtended =>
            self::MotorolaGroupRegroupVoiceChannelUserExtended::new(fields).into(),
        MotorolaGroupRegroupChannelGrantImplicit =>
            self::MotorolaGroupRegroupChannelGrantImplicit::new(fields).into(),
        MotorolaGroupRegroupChannelGrantExplicit =>
            self::MotorolaGroupRegroupChannelGrantExplicit::new(fields).into(),
        MotorolaGroupRegroupChannelGrantUpdate =>
            self::MotorolaGroupRegroupChannelGrantUpdate::new(fields).into(),
        HarrisTalkerAlias => self::HarrisTalkerAlias::new(fields).into(),
        HarrisTalkerGpsLocation => self::HarrisTalkerGpsLocation::new(fields).into(),

        PushToTalk => self::PushToTalk::new(fields).into(),
        EndPushToTalk => self::EndPushToTalk::new(fields).into(),
        CrcFailure => self::CrcFailure::new(fields).into(),
        UnknownVendor { opcode, vendor } => {
            debug!("unknown vendor opcode {} with vendor {:02X}", opcode, vendor);
            UnknownVendorStructure::new(fields).into()
        },
        Unknown(opcode) => {
            debug!("unknown opcode {}", opcode);
            UnknownStructure::new(fields).into()
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ident::{self, Channel, ChannelDescriptor, Identifier, IdentifierKind, Role};
    use mac::fragment::MultiFragment;
    use mac::opcode::MacOpcode;

    fn decode_hex(hex: &str) -> Structure {
        decode(&BitBuffer::from_hex(hex).unwrap(), 0, &Config::default())
    }

    #[test]
    fn test_total_dispatch() {
        let c = Config::default();

        for opcode in 0..=255u8 {
            for &vendor in &[0x00, 0x01, 0x90, 0xA4, 0x42, 0xFF] {
                let mut bytes = [0u8; 32];
                bytes[0] = opcode;
                bytes[1] = vendor;
                bytes[2] = 0x05;

                let s = decode(&BitBuffer::from_bytes(&bytes), 0, &c);
                let _ = s.length();
                let _ = s.identifiers();
                let _ = s.channels();
                let _ = format!("{}", s);

                assert_eq!(s.opcode().is_multi_fragment(), s.as_multi_fragment().is_some(),
                    "opcode {:02X} vendor {:02X}", opcode, vendor);
            }
        }
    }

    #[test]
    fn test_dispatch_offset() {
        let buf = BitBuffer::from_hex("FFFF C080206430C8123456789A").unwrap();
        let s = decode(&buf, 16, &Config::default());
        assert_eq!(s.opcode(), MacOpcode::GroupVoiceChannelGrantExplicit);

        match s {
            Structure::GroupVoiceChannelGrantExplicit(ref g) => assert_eq!(g.source(), 0x56789A),
            _ => panic!(),
        }
    }

    #[test]
    fn test_group_grant_explicit() {
        let s = decode_hex("C0 80 2064 30C8 1234 56789A");
        assert_eq!(s.channels(), vec![ChannelDescriptor::Explicit {
            tx: Channel::new(2 << 12 | 100),
            rx: Channel::new(3 << 12 | 200),
        }]);

        let ids = s.identifiers();
        assert_eq!(ident::find(&ids, Role::To, IdentifierKind::Talkgroup),
            Some(&Identifier::talkgroup(Role::To, 0x1234)));
        assert_eq!(ident::find(&ids, Role::From, IdentifierKind::Radio),
            Some(&Identifier::radio(Role::From, 0x56789A)));
    }

    #[test]
    fn test_paging_count() {
        let s = decode_hex("11 03 0001 0002 0003 0004");
        assert_eq!(s.length(), 8);

        match s {
            Structure::IndirectGroupPagingWithoutPriority(ref p) => assert_eq!(p.groups().len(), 3),
            _ => panic!(),
        }
    }

    #[test]
    fn test_unknown_vendor() {
        let s = decode_hex("B7 42 0A 00000000000000");
        assert_eq!(s.opcode(), MacOpcode::UnknownVendor { opcode: 0xB7, vendor: 0x42 });
        assert!(s.identifiers().is_empty());
        assert_eq!(format!("{}", s), "UNKNOWN VENDOR 42 [42] OPCODE:183");

        // Unassigned opcodes in the extended partition report their second octet.
        let s = decode_hex("C1 42 00000000000000");
        assert_eq!(s.opcode(), MacOpcode::UnknownVendor { opcode: 0xC1, vendor: 0x42 });
        assert!(format!("{}", s).contains("OPCODE:193"));

        let s = decode_hex("04 00 00");
        assert_eq!(s.opcode(), MacOpcode::Unknown(4));
        assert!(s.identifiers().is_empty());
    }

    #[test]
    fn test_extended_partition_ignores_vendor() {
        // Opcode 200 carries service options in its second octet, not a vendor.
        for &second in &[0x00, 0x42, 0x90, 0xA4] {
            let bytes = [0xC8, second, 0x20, 0x64, 0x30, 0xC8, 0x00, 0x00, 0x00, 0x12, 0x34];
            let s = decode(&BitBuffer::from_bytes(&bytes), 0, &Config::default());
            assert_eq!(s.opcode(), MacOpcode::TelephoneInterconnectVoiceChannelGrantExplicit);
            assert_eq!(s.length(), 11);
        }

        // Vendor partition opcodes with no entry for the vendor are reported raw.
        let s = decode_hex("A8 42 0A 00000000000000");
        assert_eq!(s.opcode(), MacOpcode::UnknownVendor { opcode: 0xA8, vendor: 0x42 });
        assert!(s.identifiers().is_empty());
        assert!(format!("{}", s).contains("OPCODE:168"));
    }

    #[test]
    fn test_vendor_extensions() {
        let hex = "AA A4 11 1F7C231D0852B152BBB99600001C7570";
        assert_eq!(decode_hex(hex).opcode(), MacOpcode::HarrisTalkerGpsLocation);

        let buf = BitBuffer::from_hex(hex).unwrap();
        let s = decode(&buf, 0, &Config::default().vendor_extensions(false));
        assert_eq!(s.opcode(), MacOpcode::UnknownVendor { opcode: 0xAA, vendor: 0xA4 });
        assert_eq!(s.length(), 17);
        assert!(s.identifiers().is_empty());

        // Declared lengths short of the layout.
        let s = decode_hex("80 90 05 40 FFFE 00ABCD");
        assert_eq!(s.opcode(), MacOpcode::UnknownVendor { opcode: 0x80, vendor: 0x90 });
        assert_eq!(s.length(), 5);
        assert!(s.identifiers().is_empty());

        let s = decode_hex("AA A4 0C 1F7C231D0852B152BBB99600001C7570");
        assert_eq!(s.opcode(), MacOpcode::UnknownVendor { opcode: 0xAA, vendor: 0xA4 });
        assert_eq!(s.length(), 12);

        // Extended partition isn't affected.
        let buf = BitBuffer::from_hex("C080206430C8123456789A").unwrap();
        let s = decode(&buf, 0, &Config::default().vendor_extensions(false));
        assert_eq!(s.opcode(), MacOpcode::GroupVoiceChannelGrantExplicit);
    }

    #[test]
    fn test_crc_failure() {
        let buf = BitBuffer::from_hex("C080206430C8123456789A").unwrap().with_crc_failed();
        let s = decode(&buf, 0, &Config::default());
        assert_eq!(s.opcode(), MacOpcode::CrcFailure);
        assert!(s.identifiers().is_empty());
        assert!(s.channels().is_empty());
        assert_eq!(s.service_options(), None);
    }

    #[test]
    fn test_shared_decoders() {
        let grant = decode_hex("44 10 0A0000 0100000F");
        let update = decode_hex("46 10 0A0000 0100000F");
        assert_eq!(grant.opcode(), MacOpcode::UnitToUnitVoiceChannelGrantAbbreviated);
        assert_eq!(update.opcode(), MacOpcode::UnitToUnitVoiceChannelGrantUpdateAbbreviated);
        assert_eq!(grant.identifiers(), update.identifiers());

        match decode_hex("89 90 07 0100 0064") {
            Structure::MotorolaGroupRegroupMembership(ref m) => assert!(m.is_delete()),
            _ => panic!(),
        }
    }

    #[test]
    fn test_fully_qualified_equivalence() {
        let home = Identifier::aliased_radio(Role::From, 0x123, 0xBEE00, 0x3A1);

        let extended = decode_hex("21 00 0065 000ABC BEE003A1000123");
        let aliased = decode_hex("C4 2064 30C8 000DEF BEE003A1000123");
        let fragmented = decode_hex("C7 12 1A 00 0001 0002 000ABC BEE003A1000123");

        for s in &[extended, aliased, fragmented] {
            assert_eq!(ident::find(&s.identifiers(), Role::From, IdentifierKind::Radio),
                Some(&home), "{}", s);
        }

        let target = Identifier::aliased_radio(Role::To, 0x456, 0xBEE00, 0x3A1);
        let dereg = decode_hex("6F 00 BEE003A1 000456");
        assert_eq!(ident::find(&dereg.identifiers(), Role::To, IdentifierKind::Radio),
            Some(&target));

        let mut lcch = decode_hex("C7 12 1A 00 0001 0002 000ABC BEE003A1000123");
        assert_eq!(ident::find(&lcch.identifiers(), Role::To, IdentifierKind::Radio), None);

        let frag = ContinuationFragment::new(
            MacFields::from_hex("10 0C 000DEF BEE003A1000456").unwrap());
        lcch.as_multi_fragment_mut().unwrap().add_continuation(frag);
        assert!(lcch.as_multi_fragment().unwrap().is_complete());
        assert_eq!(ident::find(&lcch.identifiers(), Role::To, IdentifierKind::Radio),
            Some(&target));
    }
}
